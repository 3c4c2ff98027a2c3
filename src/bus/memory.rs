/*!
Memory module: flat, zero-initialised RAM.

A `Memory` of size N answers offsets `0..N`; any larger offset is reduced modulo N,
which gives the usual "mirrored" behaviour for RAM chips smaller than the window
they are mapped into.
*/

use crate::bus::{AddressBus, mask_offset};

/// Size of the full 6502 address space (64 KiB).
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

#[derive(Clone, Debug)]
pub struct Memory {
    data: Vec<u8>,
}

impl Default for Memory {
    #[inline]
    fn default() -> Self {
        Self::new(ADDRESS_SPACE_SIZE)
    }
}

impl Memory {
    /// Create `size` bytes of RAM initialised to 0.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Create RAM holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// Copy `bytes` in starting at `offset`, wrapping around the end.
    pub fn load(&mut self, offset: usize, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            self.write(offset + i, b);
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl AddressBus for Memory {
    #[inline]
    fn read(&mut self, offset: usize) -> u8 {
        let idx = mask_offset(offset, self.data.len());
        self.data.get(idx).copied().unwrap_or(0)
    }

    #[inline]
    fn write(&mut self, offset: usize, value: u8) {
        let idx = mask_offset(offset, self.data.len());
        if let Some(slot) = self.data.get_mut(idx) {
            *slot = value;
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }
}
