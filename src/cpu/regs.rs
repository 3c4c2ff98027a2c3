/*!
regs.rs - `CpuRegs`: register + flag access shared by the ALU helpers.

The trait is deliberately bus-free: no stack, no fetch, no memory. Everything in
`execute.rs` is generic over it, so the same helper runs against a bare
`CpuState` in unit tests and against a full `CpuContext` during dispatch.

Implementations
===============
- `CpuState` (here)
- `CpuContext` (delegates to its register file; see `context.rs`)
*/

use crate::cpu::flags::CpuFlags;
use crate::cpu::state::CpuState;

pub trait CpuRegs {
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn flags(&self) -> CpuFlags;

    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn flags_mut(&mut self) -> &mut CpuFlags;

    #[inline]
    fn set_flags(&mut self, flags: CpuFlags) {
        *self.flags_mut() = flags;
    }

    /// Advance PC by `delta`, wrapping at 16 bits.
    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        let pc = self.pc().wrapping_add(delta);
        self.set_pc(pc);
    }

    /// ZERO and NEGATIVE from a result byte.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        let flags = self.flags_mut();
        flags.set_zero(result == 0);
        flags.set_negative(result & 0x80 != 0);
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn flags(&self) -> CpuFlags {
        self.flags
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn flags_mut(&mut self) -> &mut CpuFlags {
        &mut self.flags
    }
}
