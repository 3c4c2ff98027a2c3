/*!
logical.rs - AND / ORA / EOR / BIT family.

```text
AND: 29, 25, 35, 2D, 3D, 39, 21, 31
ORA: 09, 05, 15, 0D, 1D, 19, 01, 11
EOR: 49, 45, 55, 4D, 5D, 59, 41, 51
BIT: 24, 2C
```
*/

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::context::CpuContext;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::instruction::{Function, Instruction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logical {
    And,
    Ora,
    Eor,
    Bit,
}

pub(crate) fn execute(ctx: &mut CpuContext, mode: AddressingMode, op: Logical) {
    let v = mode.read(ctx);
    match op {
        Logical::And => and(ctx, v),
        Logical::Ora => ora(ctx, v),
        Logical::Eor => eor(ctx, v),
        Logical::Bit => bit(ctx, v),
    }
}

const fn op(opcode: u8, mnemonic: &'static str, mode: AddressingMode, op: Logical) -> Instruction {
    Instruction::new(opcode, mnemonic, mode, Function::Logical(op))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    op(0x29, "AND", Immediate, Logical::And),
    op(0x25, "AND", ZeroPage, Logical::And),
    op(0x35, "AND", ZeroPageX, Logical::And),
    op(0x2D, "AND", Absolute, Logical::And),
    op(0x3D, "AND", AbsoluteX, Logical::And),
    op(0x39, "AND", AbsoluteY, Logical::And),
    op(0x21, "AND", IndexedIndirect, Logical::And),
    op(0x31, "AND", IndirectIndexed, Logical::And),
    op(0x09, "ORA", Immediate, Logical::Ora),
    op(0x05, "ORA", ZeroPage, Logical::Ora),
    op(0x15, "ORA", ZeroPageX, Logical::Ora),
    op(0x0D, "ORA", Absolute, Logical::Ora),
    op(0x1D, "ORA", AbsoluteX, Logical::Ora),
    op(0x19, "ORA", AbsoluteY, Logical::Ora),
    op(0x01, "ORA", IndexedIndirect, Logical::Ora),
    op(0x11, "ORA", IndirectIndexed, Logical::Ora),
    op(0x49, "EOR", Immediate, Logical::Eor),
    op(0x45, "EOR", ZeroPage, Logical::Eor),
    op(0x55, "EOR", ZeroPageX, Logical::Eor),
    op(0x4D, "EOR", Absolute, Logical::Eor),
    op(0x5D, "EOR", AbsoluteX, Logical::Eor),
    op(0x59, "EOR", AbsoluteY, Logical::Eor),
    op(0x41, "EOR", IndexedIndirect, Logical::Eor),
    op(0x51, "EOR", IndirectIndexed, Logical::Eor),
    op(0x24, "BIT", ZeroPage, Logical::Bit),
    op(0x2C, "BIT", Absolute, Logical::Bit),
];
