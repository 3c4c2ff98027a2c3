/*!
state.rs - 6502 register file.

`CpuState` holds every architecturally visible register: A, X, Y, SP, PC and P.
It knows nothing about the bus, the instruction table or interrupts; those live in
`CpuContext`, which owns one `CpuState`.

Reset values
============
A = X = Y = 0, SP = $FF, P = 0 (no flags), PC = 0. `CpuContext::reset` applies
these and then loads PC from the reset vector.

The `Display` impl is the one-line register dump used by trace logging:

```text
A=00 X=00 Y=00 SP=ff PC=e000 P=-----1--
```
*/

use std::fmt;

use crate::cpu::flags::CpuFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub flags: CpuFlags,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0x0000,
            flags: CpuFlags::empty(),
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:02x} X={:02x} Y={:02x} SP={:02x} PC={:04x} P={}",
            self.a, self.x, self.y, self.sp, self.pc, self.flags
        )
    }
}
