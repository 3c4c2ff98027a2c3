/*!
Rom module: read-only snapshot overlaid on a writable bus.

A `Rom` answers reads from its own bytes. Writes never touch the snapshot; they are
forwarded to the optional fallback bus, which is how the C64 lets programs write
into the RAM hidden underneath BASIC, KERNAL and the character generator.
*/

use crate::bus::{AddressBus, mask_offset};

pub struct Rom {
    data: Vec<u8>,
    fallback: Option<Box<dyn AddressBus>>,
}

impl std::fmt::Debug for Rom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rom")
            .field("size", &self.data.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl Rom {
    /// ROM whose writes are discarded.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            fallback: None,
        }
    }

    /// ROM whose writes land on `fallback` at the same offset.
    pub fn with_fallback(data: Vec<u8>, fallback: Box<dyn AddressBus>) -> Self {
        Self {
            data,
            fallback: Some(fallback),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl AddressBus for Rom {
    #[inline]
    fn read(&mut self, offset: usize) -> u8 {
        let idx = mask_offset(offset, self.data.len());
        self.data.get(idx).copied().unwrap_or(0)
    }

    fn write(&mut self, offset: usize, value: u8) {
        let idx = mask_offset(offset, self.data.len());
        if let Some(fallback) = self.fallback.as_mut() {
            fallback.write(idx, value);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::{Memory, shared};

    #[test]
    fn writes_do_not_change_rom() {
        let mut rom = Rom::new(vec![0x11, 0x22]);
        rom.write(1, 0xFF);
        assert_eq!(rom.read(1), 0x22);
    }

    #[test]
    fn writes_reach_fallback() {
        let ram = shared(Memory::new(2));
        let mut rom = Rom::with_fallback(vec![0x11, 0x22], Box::new(ram.clone()));
        rom.write(3, 0x99); // 3 mod 2 == 1
        assert_eq!(rom.read(1), 0x22);
        assert_eq!(ram.borrow().as_slice(), &[0x00, 0x99]);
    }
}
