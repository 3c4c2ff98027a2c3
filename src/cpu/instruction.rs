/*!
instruction.rs - One 6502 instruction: opcode, addressing mode, ALU function.

An `Instruction` is plain immutable data; all machine state arrives through the
`&mut CpuContext` handed to `execute`, so a single table of instructions is shared
by every machine.

Execution
=========
`execute` runs the function against the operand described by the mode, then
advances PC past the opcode and its operand bytes. Branches and control-flow
instructions (JMP/JSR/RTS/RTI/BRK) set PC themselves and are not advanced.

The function is a tagged value per instruction family; each family's semantics
live in `cpu::dispatch::<family>`.
*/

use crate::cpu::addressing::AddressingMode;
use crate::cpu::context::CpuContext;
use crate::cpu::dispatch::arithmetic::{self, Arithmetic};
use crate::cpu::dispatch::branches::{self, Condition};
use crate::cpu::dispatch::compare;
use crate::cpu::dispatch::control_flow::{self, Control};
use crate::cpu::dispatch::load_store;
use crate::cpu::dispatch::logical::{self, Logical};
use crate::cpu::dispatch::misc::{self, FlagOp, RegisterOp, StackOp};
use crate::cpu::dispatch::rmw::{self, Unary};
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Load(Register),
    Store(Register),
    Arithmetic(Arithmetic),
    Logical(Logical),
    Compare(Register),
    ReadModifyWrite(Unary),
    Register(RegisterOp),
    Stack(StackOp),
    Flag(FlagOp),
    Branch(Condition),
    Control(Control),
    Nop,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    opcode: u8,
    mnemonic: &'static str,
    mode: AddressingMode,
    function: Function,
}

pub(crate) const INVALID_MNEMONIC: &str = "???";

impl Instruction {
    pub const fn new(
        opcode: u8,
        mnemonic: &'static str,
        mode: AddressingMode,
        function: Function,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            mode,
            function,
        }
    }

    /// Placeholder for an opcode with no documented instruction.
    pub const fn invalid(opcode: u8) -> Self {
        Self::new(
            opcode,
            INVALID_MNEMONIC,
            AddressingMode::Implied,
            Function::Invalid,
        )
    }

    #[inline]
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    #[inline]
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    #[inline]
    pub fn mode(&self) -> AddressingMode {
        self.mode
    }

    #[inline]
    pub fn function(&self) -> Function {
        self.function
    }

    /// Operand bytes after the opcode (0-2).
    #[inline]
    pub fn length(&self) -> u16 {
        self.mode.length()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.function != Function::Invalid
    }

    /// True for instructions that store through their operand.
    pub fn writes_operand(&self) -> bool {
        matches!(
            self.function,
            Function::Store(_) | Function::ReadModifyWrite(_)
        )
    }

    /// True for instructions that set PC themselves.
    pub fn transfers_control(&self) -> bool {
        matches!(self.function, Function::Branch(_) | Function::Control(_))
    }

    pub fn execute(&self, ctx: &mut CpuContext) {
        let mode = self.mode;
        match self.function {
            Function::Load(r) => load_store::load(ctx, mode, r),
            Function::Store(r) => load_store::store(ctx, mode, r),
            Function::Arithmetic(op) => arithmetic::execute(ctx, mode, op),
            Function::Logical(op) => logical::execute(ctx, mode, op),
            Function::Compare(r) => compare::execute(ctx, mode, r),
            Function::ReadModifyWrite(op) => rmw::execute(ctx, mode, op),
            Function::Register(op) => misc::register(ctx, op),
            Function::Stack(op) => misc::stack(ctx, op),
            Function::Flag(op) => misc::flag(ctx, op),
            Function::Branch(cond) => branches::execute(ctx, cond),
            Function::Control(op) => control_flow::execute(ctx, mode, op),
            Function::Nop => {}
            Function::Invalid => misc::invalid(ctx, self.opcode),
        }
        if !self.transfers_control() {
            ctx.advance_pc(1 + self.length());
        }
    }

    /// `"<MNEMONIC> <operand>"` for the instruction at the context's PC.
    pub fn disassemble(&self, ctx: &mut CpuContext) -> String {
        let operand = self.mode.disassemble(ctx);
        if operand.is_empty() {
            self.mnemonic.to_string()
        } else {
            format!("{} {}", self.mnemonic, operand)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::flat_context;

    static LDA_IMM: Instruction = Instruction::new(
        0xA9,
        "LDA",
        AddressingMode::Immediate,
        Function::Load(Register::A),
    );

    #[test]
    fn execute_advances_past_operand() {
        let mut ctx = flat_context(&[0xA9, 0x80], 0x0400);
        LDA_IMM.execute(&mut ctx);
        assert_eq!(ctx.a(), 0x80);
        assert!(ctx.flags().negative());
        assert_eq!(ctx.pc(), 0x0402);
    }

    #[test]
    fn invalid_is_one_byte_no_op() {
        let mut ctx = flat_context(&[0x02], 0x0400);
        let before = *ctx.regs();
        let invalid = Instruction::invalid(0x02);
        assert!(!invalid.is_valid());
        invalid.execute(&mut ctx);
        assert_eq!(ctx.pc(), 0x0401);
        assert_eq!(ctx.regs().a, before.a);
        assert_eq!(ctx.regs().flags, before.flags);
        assert_eq!(invalid.disassemble(&mut ctx), "???");
    }

    #[test]
    fn classification() {
        let jmp = Instruction::new(
            0x4C,
            "JMP",
            AddressingMode::Absolute,
            Function::Control(Control::Jmp),
        );
        assert!(jmp.transfers_control());
        assert!(!jmp.writes_operand());
        assert_eq!(jmp.length(), 2);

        let sta = Instruction::new(
            0x85,
            "STA",
            AddressingMode::ZeroPage,
            Function::Store(Register::A),
        );
        assert!(sta.writes_operand());
    }
}
