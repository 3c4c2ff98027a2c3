/*!
branches.rs - Conditional branch family.

```text
BPL 10 (N=0)   BMI 30 (N=1)
BVC 50 (V=0)   BVS 70 (V=1)
BCC 90 (C=0)   BCS B0 (C=1)
BNE D0 (Z=0)   BEQ F0 (Z=1)
```

All use Relative addressing. Taken: PC = PC + 2 + signed offset (may cross a
page). Not taken: PC = PC + 2.
*/

use crate::cpu::addressing::AddressingMode::Relative;
use crate::cpu::addressing::branch_target;
use crate::cpu::context::CpuContext;
use crate::cpu::instruction::{Function, Instruction};
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Plus,
    Minus,
    OverflowClear,
    OverflowSet,
    CarryClear,
    CarrySet,
    NotEqual,
    Equal,
}

impl Condition {
    fn holds<C: CpuRegs>(self, cpu: &C) -> bool {
        let f = cpu.flags();
        match self {
            Condition::Plus => !f.negative(),
            Condition::Minus => f.negative(),
            Condition::OverflowClear => !f.overflow(),
            Condition::OverflowSet => f.overflow(),
            Condition::CarryClear => !f.carry(),
            Condition::CarrySet => f.carry(),
            Condition::NotEqual => !f.zero(),
            Condition::Equal => f.zero(),
        }
    }
}

pub(crate) fn execute(ctx: &mut CpuContext, cond: Condition) {
    let pc = ctx.pc();
    let offset = ctx.read_byte(pc.wrapping_add(1)) as i8;
    if cond.holds(ctx) {
        ctx.set_pc(branch_target(pc, offset));
    } else {
        ctx.set_pc(pc.wrapping_add(2));
    }
}

const fn op(opcode: u8, mnemonic: &'static str, cond: Condition) -> Instruction {
    Instruction::new(opcode, mnemonic, Relative, Function::Branch(cond))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    op(0x10, "BPL", Condition::Plus),
    op(0x30, "BMI", Condition::Minus),
    op(0x50, "BVC", Condition::OverflowClear),
    op(0x70, "BVS", Condition::OverflowSet),
    op(0x90, "BCC", Condition::CarryClear),
    op(0xB0, "BCS", Condition::CarrySet),
    op(0xD0, "BNE", Condition::NotEqual),
    op(0xF0, "BEQ", Condition::Equal),
];

#[cfg(test)]
mod tests {
    use crate::cpu::regs::CpuRegs;
    use crate::test_utils::{flat_context, run_steps};

    #[test]
    fn taken_forward_and_not_taken() {
        // BEQ +$10 with Z clear, then Z set.
        let mut ctx = flat_context(&[0xF0, 0x10], 0x1000);
        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x1002);

        ctx.set_pc(0x1000);
        ctx.flags_mut().set_zero(true);
        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x1012);
    }

    #[test]
    fn backward_across_page() {
        // BNE -$10 at $1000 -> $0FF2
        let mut ctx = flat_context(&[0xD0, 0xF0], 0x1000);
        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x0FF2);
    }

    #[test]
    fn countdown_loop() {
        // LDX #$03 ; loop: DEX ; BNE loop ; NOP
        let mut ctx = flat_context(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0xEA], 0x1000);
        run_steps(&mut ctx, 1 + 3 * 2);
        assert_eq!(ctx.x(), 0);
        assert_eq!(ctx.pc(), 0x1005);
    }

    #[test]
    fn carry_and_overflow_branches() {
        // SEC ; BCS +2 ; NOP ; NOP ; CLV ; BVC +0
        let mut ctx = flat_context(&[0x38, 0xB0, 0x02, 0xEA, 0xEA, 0xB8, 0x50, 0x00], 0x1000);
        run_steps(&mut ctx, 2);
        assert_eq!(ctx.pc(), 0x1005);
        run_steps(&mut ctx, 2);
        assert_eq!(ctx.pc(), 0x1008);
    }
}
