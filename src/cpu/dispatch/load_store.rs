/*!
load_store.rs - Load / store family.

Loads (set Z/N):
```text
LDA: A9, A5, B5, AD, BD, B9, A1, B1
LDX: A2, A6, B6, AE, BE
LDY: A0, A4, B4, AC, BC
```

Stores (no flags):
```text
STA: 85, 95, 8D, 9D, 99, 81, 91
STX: 86, 96, 8E
STY: 84, 94, 8C
```
*/

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::context::CpuContext;
use crate::cpu::instruction::{Function, Instruction, Register};
use crate::cpu::regs::CpuRegs;

pub(crate) fn load(ctx: &mut CpuContext, mode: AddressingMode, register: Register) {
    let v = mode.read(ctx);
    match register {
        Register::A => ctx.set_a(v),
        Register::X => ctx.set_x(v),
        Register::Y => ctx.set_y(v),
    }
    ctx.update_zn(v);
}

pub(crate) fn store(ctx: &mut CpuContext, mode: AddressingMode, register: Register) {
    let v = match register {
        Register::A => ctx.a(),
        Register::X => ctx.x(),
        Register::Y => ctx.y(),
    };
    mode.write(ctx, v);
}

const fn lda(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "LDA", mode, Function::Load(Register::A))
}

const fn ldx(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "LDX", mode, Function::Load(Register::X))
}

const fn ldy(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "LDY", mode, Function::Load(Register::Y))
}

const fn sta(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "STA", mode, Function::Store(Register::A))
}

const fn stx(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "STX", mode, Function::Store(Register::X))
}

const fn sty(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "STY", mode, Function::Store(Register::Y))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    lda(0xA9, Immediate),
    lda(0xA5, ZeroPage),
    lda(0xB5, ZeroPageX),
    lda(0xAD, Absolute),
    lda(0xBD, AbsoluteX),
    lda(0xB9, AbsoluteY),
    lda(0xA1, IndexedIndirect),
    lda(0xB1, IndirectIndexed),
    ldx(0xA2, Immediate),
    ldx(0xA6, ZeroPage),
    ldx(0xB6, ZeroPageY),
    ldx(0xAE, Absolute),
    ldx(0xBE, AbsoluteY),
    ldy(0xA0, Immediate),
    ldy(0xA4, ZeroPage),
    ldy(0xB4, ZeroPageX),
    ldy(0xAC, Absolute),
    ldy(0xBC, AbsoluteX),
    sta(0x85, ZeroPage),
    sta(0x95, ZeroPageX),
    sta(0x8D, Absolute),
    sta(0x9D, AbsoluteX),
    sta(0x99, AbsoluteY),
    sta(0x81, IndexedIndirect),
    sta(0x91, IndirectIndexed),
    stx(0x86, ZeroPage),
    stx(0x96, ZeroPageY),
    stx(0x8E, Absolute),
    sty(0x84, ZeroPage),
    sty(0x94, ZeroPageX),
    sty(0x8C, Absolute),
];
