/*!
Offset module: expose a window of an inner bus starting at `base`.

`BaseOffsetAddressBus` of size N maps its offset `o` to `(o mod N) + base` on the
inner bus. It is used to give a ROM overlay a fallback that lands on the right part
of RAM (e.g. KERNAL offset 0 -> RAM $E000).
*/

use crate::bus::{AddressBus, mask_offset};

pub struct BaseOffsetAddressBus<B: AddressBus> {
    inner: B,
    base: usize,
    size: usize,
}

impl<B: AddressBus> BaseOffsetAddressBus<B> {
    pub fn new(inner: B, base: usize, size: usize) -> Self {
        Self { inner, base, size }
    }

    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }
}

impl<B: AddressBus> AddressBus for BaseOffsetAddressBus<B> {
    #[inline]
    fn read(&mut self, offset: usize) -> u8 {
        let o = mask_offset(offset, self.size);
        self.inner.read(o + self.base)
    }

    #[inline]
    fn write(&mut self, offset: usize, value: u8) {
        let o = mask_offset(offset, self.size);
        self.inner.write(o + self.base, value);
    }

    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

/// Rebase `inner` to start at `base` with the given window size.
///
/// A zero base over the full inner size is the identity, so the inner bus is
/// returned unchanged instead of being wrapped.
pub fn rebase(inner: Box<dyn AddressBus>, base: usize, size: usize) -> Box<dyn AddressBus> {
    if base == 0 && size == inner.size() {
        inner
    } else {
        Box::new(BaseOffsetAddressBus::new(inner, base, size))
    }
}
