/*!
compare.rs - CMP / CPX / CPY family.

```text
CMP: C9, C5, D5, CD, DD, D9, C1, D1
CPX: E0, E4, EC
CPY: C0, C4, CC
```

Flags:
- C = register >= operand (unsigned)
- Z = register == operand
- N = bit 7 of (register - operand)
*/

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::context::CpuContext;
use crate::cpu::execute::compare;
use crate::cpu::instruction::{Function, Instruction, Register};
use crate::cpu::regs::CpuRegs;

pub(crate) fn execute(ctx: &mut CpuContext, mode: AddressingMode, register: Register) {
    let v = mode.read(ctx);
    let left = match register {
        Register::A => ctx.a(),
        Register::X => ctx.x(),
        Register::Y => ctx.y(),
    };
    compare(ctx, left, v);
}

const fn cmp(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "CMP", mode, Function::Compare(Register::A))
}

const fn cpx(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "CPX", mode, Function::Compare(Register::X))
}

const fn cpy(opcode: u8, mode: AddressingMode) -> Instruction {
    Instruction::new(opcode, "CPY", mode, Function::Compare(Register::Y))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    cmp(0xC9, Immediate),
    cmp(0xC5, ZeroPage),
    cmp(0xD5, ZeroPageX),
    cmp(0xCD, Absolute),
    cmp(0xDD, AbsoluteX),
    cmp(0xD9, AbsoluteY),
    cmp(0xC1, IndexedIndirect),
    cmp(0xD1, IndirectIndexed),
    cpx(0xE0, Immediate),
    cpx(0xE4, ZeroPage),
    cpx(0xEC, Absolute),
    cpy(0xC0, Immediate),
    cpy(0xC4, ZeroPage),
    cpy(0xCC, Absolute),
];

#[cfg(test)]
mod tests {
    use crate::cpu::regs::CpuRegs;
    use crate::test_utils::{flat_context, run_steps};

    #[test]
    fn cmp_immediate() {
        // LDA #$FF ; CMP #$C0
        let mut ctx = flat_context(&[0xA9, 0xFF, 0xC9, 0xC0], 0x0900);
        run_steps(&mut ctx, 2);
        assert!(ctx.flags().carry());
        assert!(!ctx.flags().zero());
        assert_eq!(ctx.a(), 0xFF);
    }

    #[test]
    fn cpx_cpy_memory() {
        // LDX #$10 ; CPX $80 ; LDY #$01 ; CPY $81
        let mut ctx = flat_context(&[0xA2, 0x10, 0xE4, 0x80, 0xA0, 0x01, 0xC4, 0x81], 0x0900);
        ctx.write_byte(0x0080, 0x10);
        ctx.write_byte(0x0081, 0x02);
        run_steps(&mut ctx, 2);
        assert!(ctx.flags().zero() && ctx.flags().carry());
        run_steps(&mut ctx, 2);
        assert!(!ctx.flags().carry());
        assert!(ctx.flags().negative());
    }
}
