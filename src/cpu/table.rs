/*!
table.rs - Instruction singletons.

Two immutable tables, built once on first use and shared by every `Cpu`:

- `STANDARD`: opcode -> documented instruction (151 entries, the rest `None`),
  assembled from the family `INSTRUCTIONS` lists.
- `INVALID`: one `Instruction::invalid(op)` per byte value, used whenever a
  dispatch table has no entry for a fetched opcode.

The standard table is filled without validation; the tests below check that
the family lists never collide and never pair a writing instruction with an
Immediate operand, so `Cpu::new` can build from it infallibly.
*/

use lazy_static::lazy_static;

use crate::cpu::dispatch::{
    arithmetic, branches, compare, control_flow, load_store, logical, misc, rmw,
};
use crate::cpu::instruction::Instruction;

pub(crate) type OpcodeTable = [Option<&'static Instruction>; 256];

lazy_static! {
    static ref STANDARD: OpcodeTable = {
        let mut table: OpcodeTable = [None; 256];
        for instr in standard() {
            table[instr.opcode() as usize] = Some(instr);
        }
        table
    };
    static ref INVALID: Vec<Instruction> = (0..=u8::MAX).map(Instruction::invalid).collect();
}

/// Every documented 6502 instruction, family by family.
pub fn standard() -> impl Iterator<Item = &'static Instruction> {
    [
        load_store::INSTRUCTIONS,
        arithmetic::INSTRUCTIONS,
        logical::INSTRUCTIONS,
        compare::INSTRUCTIONS,
        rmw::INSTRUCTIONS,
        branches::INSTRUCTIONS,
        control_flow::INSTRUCTIONS,
        misc::INSTRUCTIONS,
    ]
    .into_iter()
    .flat_map(|family| family.iter())
}

pub(crate) fn standard_table() -> &'static OpcodeTable {
    &STANDARD
}

/// The shared invalid-opcode singleton for `opcode`.
pub fn invalid(opcode: u8) -> &'static Instruction {
    &INVALID[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::addressing::AddressingMode;
    use std::collections::HashSet;

    #[test]
    fn standard_bundle_is_complete_and_unique() {
        let mut seen = HashSet::new();
        for instr in standard() {
            assert!(seen.insert(instr.opcode()), "duplicate ${:02x}", instr.opcode());
            assert!(instr.is_valid());
        }
        assert_eq!(seen.len(), 151);
        assert_eq!(standard_table().iter().filter(|e| e.is_some()).count(), 151);
    }

    #[test]
    fn no_immediate_writers() {
        assert!(
            standard()
                .filter(|i| i.writes_operand())
                .all(|i| i.mode() != AddressingMode::Immediate)
        );
    }

    #[test]
    fn invalid_singletons_are_shared() {
        let a = invalid(0x02);
        let b = invalid(0x02);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.opcode(), 0x02);
        assert!(!a.is_valid());
        assert_eq!(invalid(0xFF).opcode(), 0xFF);
    }

    #[test]
    fn spot_check_lengths() {
        let table = standard_table();
        let len = |op: u8| table[op as usize].map(|i| i.length());
        assert_eq!(len(0xEA), Some(0)); // NOP
        assert_eq!(len(0x0A), Some(0)); // ASL A
        assert_eq!(len(0xA9), Some(1)); // LDA #
        assert_eq!(len(0xB1), Some(1)); // LDA (zp),Y
        assert_eq!(len(0x6C), Some(2)); // JMP (ind)
        assert_eq!(len(0x02), None);
    }
}
