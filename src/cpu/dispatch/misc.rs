/*!
misc.rs - Implied-mode odds and ends: register transfers and steps, stack
operations, flag operations, NOP, and the invalid-opcode handler.

Register (transfers set Z/N except TXS):
```text
TAX AA  TAY A8  TXA 8A  TYA 98  TSX BA  TXS 9A
INX E8  INY C8  DEX CA  DEY 88
```

Stack:
```text
PHA 48  PLA 68 (Z/N)  PHP 08 (pushes B + unused)  PLP 28 (drops B, sets unused)
```

Flags:
```text
CLC 18  SEC 38  CLI 58  SEI 78  CLV B8  CLD D8  SED F8
```

NOP: EA
*/

use crate::cpu::addressing::AddressingMode::Implied;
use crate::cpu::context::CpuContext;
use crate::cpu::execute::{dec, inc};
use crate::cpu::flags::CpuFlags;
use crate::cpu::instruction::{Function, Instruction};
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterOp {
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    Inx,
    Iny,
    Dex,
    Dey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOp {
    Pha,
    Pla,
    Php,
    Plp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagOp {
    Clc,
    Sec,
    Cli,
    Sei,
    Clv,
    Cld,
    Sed,
}

pub(crate) fn register<C: CpuRegs>(cpu: &mut C, op: RegisterOp) {
    match op {
        RegisterOp::Tax => {
            let v = cpu.a();
            cpu.set_x(v);
            cpu.update_zn(v);
        }
        RegisterOp::Tay => {
            let v = cpu.a();
            cpu.set_y(v);
            cpu.update_zn(v);
        }
        RegisterOp::Txa => {
            let v = cpu.x();
            cpu.set_a(v);
            cpu.update_zn(v);
        }
        RegisterOp::Tya => {
            let v = cpu.y();
            cpu.set_a(v);
            cpu.update_zn(v);
        }
        RegisterOp::Tsx => {
            let v = cpu.sp();
            cpu.set_x(v);
            cpu.update_zn(v);
        }
        RegisterOp::Txs => {
            let v = cpu.x();
            cpu.set_sp(v);
        }
        RegisterOp::Inx => {
            let v = cpu.x();
            let r = inc(cpu, v);
            cpu.set_x(r);
        }
        RegisterOp::Iny => {
            let v = cpu.y();
            let r = inc(cpu, v);
            cpu.set_y(r);
        }
        RegisterOp::Dex => {
            let v = cpu.x();
            let r = dec(cpu, v);
            cpu.set_x(r);
        }
        RegisterOp::Dey => {
            let v = cpu.y();
            let r = dec(cpu, v);
            cpu.set_y(r);
        }
    }
}

pub(crate) fn stack(ctx: &mut CpuContext, op: StackOp) {
    match op {
        StackOp::Pha => {
            let a = ctx.a();
            ctx.push(a);
        }
        StackOp::Pla => {
            let v = ctx.pop();
            ctx.set_a(v);
            ctx.update_zn(v);
        }
        StackOp::Php => {
            let p = ctx.flags().pushed(true);
            ctx.push(p);
        }
        StackOp::Plp => {
            let p = ctx.pop();
            ctx.set_flags(CpuFlags::pulled(p));
        }
    }
}

pub(crate) fn flag<C: CpuRegs>(cpu: &mut C, op: FlagOp) {
    let flags = cpu.flags_mut();
    match op {
        FlagOp::Clc => flags.set_carry(false),
        FlagOp::Sec => flags.set_carry(true),
        FlagOp::Cli => flags.set_interrupt_disable(false),
        FlagOp::Sei => flags.set_interrupt_disable(true),
        FlagOp::Clv => flags.set_overflow(false),
        FlagOp::Cld => flags.set_decimal(false),
        FlagOp::Sed => flags.set_decimal(true),
    }
}

/// Opcode with no instruction: tell the watchers and log it. Registers and
/// memory are left alone.
pub(crate) fn invalid(ctx: &mut CpuContext, opcode: u8) {
    log::warn!("invalid opcode ${:02x} at ${:04x}", opcode, ctx.pc());
    ctx.notify_invalid_opcode(opcode);
}

const fn reg(opcode: u8, mnemonic: &'static str, op: RegisterOp) -> Instruction {
    Instruction::new(opcode, mnemonic, Implied, Function::Register(op))
}

const fn stk(opcode: u8, mnemonic: &'static str, op: StackOp) -> Instruction {
    Instruction::new(opcode, mnemonic, Implied, Function::Stack(op))
}

const fn flg(opcode: u8, mnemonic: &'static str, op: FlagOp) -> Instruction {
    Instruction::new(opcode, mnemonic, Implied, Function::Flag(op))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    reg(0xAA, "TAX", RegisterOp::Tax),
    reg(0xA8, "TAY", RegisterOp::Tay),
    reg(0x8A, "TXA", RegisterOp::Txa),
    reg(0x98, "TYA", RegisterOp::Tya),
    reg(0xBA, "TSX", RegisterOp::Tsx),
    reg(0x9A, "TXS", RegisterOp::Txs),
    reg(0xE8, "INX", RegisterOp::Inx),
    reg(0xC8, "INY", RegisterOp::Iny),
    reg(0xCA, "DEX", RegisterOp::Dex),
    reg(0x88, "DEY", RegisterOp::Dey),
    stk(0x48, "PHA", StackOp::Pha),
    stk(0x68, "PLA", StackOp::Pla),
    stk(0x08, "PHP", StackOp::Php),
    stk(0x28, "PLP", StackOp::Plp),
    flg(0x18, "CLC", FlagOp::Clc),
    flg(0x38, "SEC", FlagOp::Sec),
    flg(0x58, "CLI", FlagOp::Cli),
    flg(0x78, "SEI", FlagOp::Sei),
    flg(0xB8, "CLV", FlagOp::Clv),
    flg(0xD8, "CLD", FlagOp::Cld),
    flg(0xF8, "SED", FlagOp::Sed),
    Instruction::new(0xEA, "NOP", Implied, Function::Nop),
];
