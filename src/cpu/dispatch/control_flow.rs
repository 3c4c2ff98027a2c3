/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK.

```text
JMP: 4C (abs), 6C (ind)
JSR: 20          push (PC + 2) hi, lo; PC = abs
RTS: 60          PC = pop lo, hi + 1
RTI: 40          P = pop (B dropped, unused set); PC = pop lo, hi
BRK: 00          notify watchers; push (PC + 2) hi, lo; push P with B set;
                 set I; PC = word at $FFFE
```

JMP (ind) reads the pointer's high byte from pointer + 1 with a full 16-bit
increment; there is no page-wrap quirk.

All of these set PC themselves; the instruction does not advance it afterwards.
*/

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::context::{CpuContext, IRQ_VECTOR};
use crate::cpu::flags::CpuFlags;
use crate::cpu::instruction::{Function, Instruction};
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Jmp,
    Jsr,
    Rts,
    Rti,
    Brk,
}

pub(crate) fn execute(ctx: &mut CpuContext, mode: AddressingMode, op: Control) {
    match op {
        Control::Jmp => {
            if let Some(target) = mode.address(ctx) {
                ctx.set_pc(target);
            }
        }
        Control::Jsr => {
            let pc = ctx.pc();
            let target = ctx.read_address(pc.wrapping_add(1));
            ctx.push_address(pc.wrapping_add(2));
            ctx.set_pc(target);
        }
        Control::Rts => {
            let ret = ctx.pop_address();
            ctx.set_pc(ret.wrapping_add(1));
        }
        Control::Rti => {
            let p = ctx.pop();
            ctx.set_flags(CpuFlags::pulled(p));
            let ret = ctx.pop_address();
            ctx.set_pc(ret);
        }
        Control::Brk => {
            ctx.notify_breakpoint();
            let pc = ctx.pc();
            ctx.set_pc(pc.wrapping_add(2));
            ctx.enter_interrupt(IRQ_VECTOR, true);
            log::debug!("BRK at ${:04x} -> ${:04x}", pc, ctx.pc());
        }
    }
}

const fn op(opcode: u8, mnemonic: &'static str, mode: AddressingMode, op: Control) -> Instruction {
    Instruction::new(opcode, mnemonic, mode, Function::Control(op))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    op(0x4C, "JMP", Absolute, Control::Jmp),
    op(0x6C, "JMP", Indirect, Control::Jmp),
    op(0x20, "JSR", Absolute, Control::Jsr),
    op(0x60, "RTS", Implied, Control::Rts),
    op(0x40, "RTI", Implied, Control::Rti),
    op(0x00, "BRK", Implied, Control::Brk),
];

#[cfg(test)]
mod tests {
    use crate::cpu::regs::CpuRegs;
    use crate::test_utils::{Recorder, flat_context, run_steps};

    #[test]
    fn jsr_then_rts() {
        let mut ctx = flat_context(&[], 0x5005);
        // JSR $1234 at $5005, RTS at $1234.
        ctx.write_byte(0x5005, 0x20);
        ctx.write_byte(0x5006, 0x34);
        ctx.write_byte(0x5007, 0x12);
        ctx.write_byte(0x1234, 0x60);
        let sp = ctx.sp();

        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x1234);
        assert_eq!(ctx.sp(), sp.wrapping_sub(2));
        assert_eq!(ctx.read_byte(0x0100 | sp as u16), 0x50);
        assert_eq!(ctx.read_byte(0x0100 | sp.wrapping_sub(1) as u16), 0x07);

        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x5008);
        assert_eq!(ctx.sp(), sp);
    }

    #[test]
    fn brk_enters_irq_vector() {
        let mut ctx = flat_context(&[0x00], 0x1000);
        ctx.write_byte(0xFFFE, 0x34);
        ctx.write_byte(0xFFFF, 0x12);
        let recorder = Recorder::shared();
        ctx.add_watcher(recorder.clone());
        let sp = ctx.sp();

        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x1234);
        assert_eq!(ctx.sp(), sp.wrapping_sub(3));
        assert!(ctx.flags().interrupt_disable());

        let pushed = ctx.read_byte(0x0100 | sp.wrapping_sub(2) as u16);
        assert_eq!(pushed & 0x34, 0x30); // B + unused, I was clear when pushed
        // Return address is BRK + 2.
        assert_eq!(ctx.read_byte(0x0100 | sp as u16), 0x10);
        assert_eq!(ctx.read_byte(0x0100 | sp.wrapping_sub(1) as u16), 0x02);
        assert_eq!(recorder.borrow().breakpoints, vec![0x1000]);
    }

    #[test]
    fn brk_then_rti_restores_state() {
        let mut ctx = flat_context(&[0x00], 0x1000);
        ctx.write_byte(0xFFFE, 0x00);
        ctx.write_byte(0xFFFF, 0x20);
        ctx.write_byte(0x2000, 0x40); // RTI
        ctx.flags_mut().set_carry(true);

        run_steps(&mut ctx, 2);
        assert_eq!(ctx.pc(), 0x1002);
        assert_eq!(ctx.sp(), 0xFF);
        assert!(ctx.flags().carry());
        assert!(!ctx.flags().interrupt_disable());
        assert!(!ctx.flags().brk());
        assert!(ctx.flags().unused());
    }

    #[test]
    fn jmp_forms() {
        // JMP ($30FF) -> word at $30FF/$3100
        let mut ctx = flat_context(&[0x6C, 0xFF, 0x30], 0x1000);
        ctx.write_byte(0x30FF, 0x00);
        ctx.write_byte(0x3100, 0x40);
        ctx.write_byte(0x4000, 0x4C);
        ctx.write_byte(0x4001, 0x00);
        ctx.write_byte(0x4002, 0x10);
        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x4000);
        run_steps(&mut ctx, 1);
        assert_eq!(ctx.pc(), 0x1000);
    }
}
