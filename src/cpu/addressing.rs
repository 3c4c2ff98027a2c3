/*!
addressing.rs - Addressing-mode operand strategies.

Every instruction pairs one `AddressingMode` with one ALU function. The mode knows
how many operand bytes follow the opcode, where the operand lives, and how to print
it; the function never looks at the instruction stream itself.

Operand bytes are read at PC + 1 (PC still points at the opcode). Nothing here
moves PC; the instruction advances it past `1 + length()` after executing.

Effective addresses
===================
```text
ZeroPage         zp
ZeroPageX/Y      (zp + X/Y) & $FF          wraps inside page 0
Absolute         abs
AbsoluteX/Y      (abs + X/Y) & $FFFF       may cross pages, wraps at 64K
Indirect         word at abs               (JMP only)
IndexedIndirect  word at (zp + X) & $FF    pointer high byte also wraps in page 0
IndirectIndexed  word at zp, + Y           16-bit wrap
Relative         PC + 2 + signed offset
```

Operand access
==============
- `read`: Immediate yields the literal byte, Accumulator yields A, memory modes
  read the effective address.
- `write`: Accumulator stores into A, memory modes store at the effective address.
  Implied, Immediate and Relative have nowhere to store. The instruction table
  rejects writing instructions with an Immediate operand when a `Cpu` is built;
  a hand-built instruction that still gets here trips a debug assertion, and in
  release builds the store is logged and dropped.
*/

use crate::cpu::context::CpuContext;
use crate::cpu::disasm;
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    pub const fn length(self) -> u16 {
        use AddressingMode::*;
        match self {
            Implied | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | IndexedIndirect | IndirectIndexed
            | Relative => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Whether `write` has somewhere to store the value.
    pub const fn is_writable(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implied | AddressingMode::Immediate | AddressingMode::Relative
        )
    }

    #[inline]
    fn operand_byte(ctx: &mut CpuContext) -> u8 {
        let pc = ctx.pc();
        ctx.read_byte(pc.wrapping_add(1))
    }

    #[inline]
    fn operand_word(ctx: &mut CpuContext) -> u16 {
        let pc = ctx.pc();
        ctx.read_address(pc.wrapping_add(1))
    }

    /// Effective address of the operand, or None for modes without one
    /// (Implied, Accumulator, Immediate).
    pub fn address(self, ctx: &mut CpuContext) -> Option<u16> {
        use AddressingMode::*;
        let addr = match self {
            Implied | Accumulator | Immediate => return None,
            ZeroPage => Self::operand_byte(ctx) as u16,
            ZeroPageX => Self::operand_byte(ctx).wrapping_add(ctx.x()) as u16,
            ZeroPageY => Self::operand_byte(ctx).wrapping_add(ctx.y()) as u16,
            Absolute => Self::operand_word(ctx),
            AbsoluteX => Self::operand_word(ctx).wrapping_add(ctx.x() as u16),
            AbsoluteY => Self::operand_word(ctx).wrapping_add(ctx.y() as u16),
            Indirect => {
                let ptr = Self::operand_word(ctx);
                ctx.read_address(ptr)
            }
            // (zp,X) and (zp),Y fetch the pointer with the page-0 wrap, not read_address.
            IndexedIndirect => {
                let zp = Self::operand_byte(ctx).wrapping_add(ctx.x());
                ctx.read_zero_page_address(zp)
            }
            IndirectIndexed => {
                let zp = Self::operand_byte(ctx);
                ctx.read_zero_page_address(zp).wrapping_add(ctx.y() as u16)
            }
            Relative => {
                let offset = Self::operand_byte(ctx) as i8;
                branch_target(ctx.pc(), offset)
            }
        };
        Some(addr)
    }

    pub fn read(self, ctx: &mut CpuContext) -> u8 {
        match self {
            AddressingMode::Accumulator => ctx.a(),
            AddressingMode::Immediate => Self::operand_byte(ctx),
            mode => match mode.address(ctx) {
                Some(addr) => ctx.read_byte(addr),
                None => {
                    log::error!("{:?} operand has no value to read at ${:04x}", mode, ctx.pc());
                    0
                }
            },
        }
    }

    pub fn write(self, ctx: &mut CpuContext, value: u8) {
        debug_assert!(self.is_writable(), "{:?} operand cannot be stored to", self);
        match self {
            AddressingMode::Accumulator => ctx.set_a(value),
            AddressingMode::Implied | AddressingMode::Immediate | AddressingMode::Relative => {
                log::error!("{:?} operand cannot be stored to at ${:04x}", self, ctx.pc());
            }
            mode => {
                if let Some(addr) = mode.address(ctx) {
                    ctx.write_byte(addr, value);
                }
            }
        }
    }

    /// Operand text as it follows the mnemonic; empty for Implied/Accumulator.
    pub fn disassemble(self, ctx: &mut CpuContext) -> String {
        use AddressingMode::*;
        match self {
            Implied | Accumulator => String::new(),
            Immediate => format!("#${:02x}", Self::operand_byte(ctx)),
            ZeroPage => {
                let zp = Self::operand_byte(ctx);
                disasm::zero_page(ctx.symbols(), zp)
            }
            ZeroPageX => {
                let zp = Self::operand_byte(ctx);
                format!("{},X", disasm::zero_page(ctx.symbols(), zp))
            }
            ZeroPageY => {
                let zp = Self::operand_byte(ctx);
                format!("{},Y", disasm::zero_page(ctx.symbols(), zp))
            }
            Absolute => {
                let abs = Self::operand_word(ctx);
                disasm::absolute(ctx.symbols(), abs)
            }
            AbsoluteX => {
                let abs = Self::operand_word(ctx);
                format!("{},X", disasm::absolute(ctx.symbols(), abs))
            }
            AbsoluteY => {
                let abs = Self::operand_word(ctx);
                format!("{},Y", disasm::absolute(ctx.symbols(), abs))
            }
            Indirect => {
                let abs = Self::operand_word(ctx);
                format!("({})", disasm::absolute(ctx.symbols(), abs))
            }
            IndexedIndirect => {
                let zp = Self::operand_byte(ctx);
                format!("({},X)", disasm::zero_page(ctx.symbols(), zp))
            }
            IndirectIndexed => {
                let zp = Self::operand_byte(ctx);
                format!("({}),Y", disasm::zero_page(ctx.symbols(), zp))
            }
            Relative => {
                let offset = Self::operand_byte(ctx) as i8;
                let target = branch_target(ctx.pc(), offset);
                disasm::absolute(ctx.symbols(), target)
            }
        }
    }
}

/// Target of a branch at `pc`: relative to the byte after the 2-byte instruction.
#[inline]
pub(crate) fn branch_target(pc: u16, offset: i8) -> u16 {
    pc.wrapping_add(2).wrapping_add(offset as i16 as u16)
}
