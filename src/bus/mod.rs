#![doc = r#"
Bus module: the `AddressBus` capability and its composable implementations.

Overview
- Every device the CPU can see (RAM, ROM, I/O chips, the whole C64 memory map) is an
  `AddressBus`: a byte-addressable space with a fixed size.
- Composites wrap other buses, so a machine's memory map is a small object graph
  built once and then owned by the `CpuContext`.

Modules and responsibilities
- memory: flat RAM (`Memory`).
- rom: read-only snapshot with write-through to a fallback bus (`Rom`).
- offset: rebasing wrapper (`BaseOffsetAddressBus`).
- paged: fixed-size paged composite (`PagedAddressBus`).
- cpu_bus: the 6510 decoder switching BASIC/KERNAL/character ROM and I/O over RAM
  through the processor port (`CpuAddressBus`).

Offsets
- Every implementation reduces `offset` modulo `size()` before using it, so a
  composite never hands an out-of-range offset to a device.
"#]

use std::cell::RefCell;
use std::rc::Rc;

pub mod cpu_bus;
pub mod memory;
pub mod offset;
pub mod paged;
pub mod rom;

pub use cpu_bus::{CHAREN, CpuAddressBus, CpuAddressBusBuilder, HIRAM, LORAM};
pub use memory::Memory;
pub use offset::{BaseOffsetAddressBus, rebase};
pub use paged::PagedAddressBus;
pub use rom::Rom;

/// Byte-addressable device or address space.
///
/// `read` takes `&mut self` because peripheral registers may change state when read
/// (latches, acknowledge-on-read interrupt flags).
pub trait AddressBus {
    fn read(&mut self, offset: usize) -> u8;
    fn write(&mut self, offset: usize, value: u8);
    fn size(&self) -> usize;
}

/// Shared handle used when one device is reachable through several paths of the
/// bus graph (e.g. RAM seen directly and as the write fallback of a ROM overlay).
pub type SharedBus<B> = Rc<RefCell<B>>;

/// Wrap a bus into a shared handle.
pub fn shared<B: AddressBus>(bus: B) -> SharedBus<B> {
    Rc::new(RefCell::new(bus))
}

impl<B: AddressBus + ?Sized> AddressBus for Box<B> {
    #[inline]
    fn read(&mut self, offset: usize) -> u8 {
        (**self).read(offset)
    }
    #[inline]
    fn write(&mut self, offset: usize, value: u8) {
        (**self).write(offset, value)
    }
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<B: AddressBus + ?Sized> AddressBus for Rc<RefCell<B>> {
    #[inline]
    fn read(&mut self, offset: usize) -> u8 {
        self.borrow_mut().read(offset)
    }
    #[inline]
    fn write(&mut self, offset: usize, value: u8) {
        self.borrow_mut().write(offset, value)
    }
    #[inline]
    fn size(&self) -> usize {
        self.borrow().size()
    }
}

/// Reduce an offset into `[0, size)`. A zero-sized bus maps everything to 0.
#[inline]
pub(crate) fn mask_offset(offset: usize, size: usize) -> usize {
    if size == 0 { 0 } else { offset % size }
}

#[cfg(test)]
mod tests;
