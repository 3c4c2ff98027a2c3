/*!
rmw.rs - Read-modify-write family (shifts, rotates, INC, DEC).

```text
ASL: 0A(A), 06, 16, 0E, 1E
LSR: 4A(A), 46, 56, 4E, 5E
ROL: 2A(A), 26, 36, 2E, 3E
ROR: 6A(A), 66, 76, 6E, 7E
INC: E6, F6, EE, FE
DEC: C6, D6, CE, DE
```

The operand is read through the addressing mode, transformed, and written back
through the same mode, so the accumulator forms and the memory forms share one
path. An Immediate operand cannot be written back; `Cpu` refuses such table
entries when it is built.
*/

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::context::CpuContext;
use crate::cpu::execute::{asl, dec, inc, lsr, rol, ror};
use crate::cpu::instruction::{Function, Instruction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unary {
    Asl,
    Lsr,
    Rol,
    Ror,
    Inc,
    Dec,
}

pub(crate) fn execute(ctx: &mut CpuContext, mode: AddressingMode, op: Unary) {
    let v = mode.read(ctx);
    let r = match op {
        Unary::Asl => asl(ctx, v),
        Unary::Lsr => lsr(ctx, v),
        Unary::Rol => rol(ctx, v),
        Unary::Ror => ror(ctx, v),
        Unary::Inc => inc(ctx, v),
        Unary::Dec => dec(ctx, v),
    };
    mode.write(ctx, r);
}

const fn op(opcode: u8, mnemonic: &'static str, mode: AddressingMode, op: Unary) -> Instruction {
    Instruction::new(opcode, mnemonic, mode, Function::ReadModifyWrite(op))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    op(0x0A, "ASL", Accumulator, Unary::Asl),
    op(0x06, "ASL", ZeroPage, Unary::Asl),
    op(0x16, "ASL", ZeroPageX, Unary::Asl),
    op(0x0E, "ASL", Absolute, Unary::Asl),
    op(0x1E, "ASL", AbsoluteX, Unary::Asl),
    op(0x4A, "LSR", Accumulator, Unary::Lsr),
    op(0x46, "LSR", ZeroPage, Unary::Lsr),
    op(0x56, "LSR", ZeroPageX, Unary::Lsr),
    op(0x4E, "LSR", Absolute, Unary::Lsr),
    op(0x5E, "LSR", AbsoluteX, Unary::Lsr),
    op(0x2A, "ROL", Accumulator, Unary::Rol),
    op(0x26, "ROL", ZeroPage, Unary::Rol),
    op(0x36, "ROL", ZeroPageX, Unary::Rol),
    op(0x2E, "ROL", Absolute, Unary::Rol),
    op(0x3E, "ROL", AbsoluteX, Unary::Rol),
    op(0x6A, "ROR", Accumulator, Unary::Ror),
    op(0x66, "ROR", ZeroPage, Unary::Ror),
    op(0x76, "ROR", ZeroPageX, Unary::Ror),
    op(0x6E, "ROR", Absolute, Unary::Ror),
    op(0x7E, "ROR", AbsoluteX, Unary::Ror),
    op(0xE6, "INC", ZeroPage, Unary::Inc),
    op(0xF6, "INC", ZeroPageX, Unary::Inc),
    op(0xEE, "INC", Absolute, Unary::Inc),
    op(0xFE, "INC", AbsoluteX, Unary::Inc),
    op(0xC6, "DEC", ZeroPage, Unary::Dec),
    op(0xD6, "DEC", ZeroPageX, Unary::Dec),
    op(0xCE, "DEC", Absolute, Unary::Dec),
    op(0xDE, "DEC", AbsoluteX, Unary::Dec),
];
