/*!
arithmetic.rs - ADC / SBC family.

```text
ADC: 69, 65, 75, 6D, 7D, 79, 61, 71
SBC: E9, E5, F5, ED, FD, F9, E1, F1
```

Binary and decimal semantics (and the decimal flag convention) live in
`execute::{adc, sbc}`.
*/

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::context::CpuContext;
use crate::cpu::execute::{adc, sbc};
use crate::cpu::instruction::{Function, Instruction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arithmetic {
    Adc,
    Sbc,
}

pub(crate) fn execute(ctx: &mut CpuContext, mode: AddressingMode, op: Arithmetic) {
    let v = mode.read(ctx);
    match op {
        Arithmetic::Adc => adc(ctx, v),
        Arithmetic::Sbc => sbc(ctx, v),
    }
}

const fn op(opcode: u8, mnemonic: &'static str, mode: AddressingMode, op: Arithmetic) -> Instruction {
    Instruction::new(opcode, mnemonic, mode, Function::Arithmetic(op))
}

pub(crate) static INSTRUCTIONS: &[Instruction] = &[
    op(0x69, "ADC", Immediate, Arithmetic::Adc),
    op(0x65, "ADC", ZeroPage, Arithmetic::Adc),
    op(0x75, "ADC", ZeroPageX, Arithmetic::Adc),
    op(0x6D, "ADC", Absolute, Arithmetic::Adc),
    op(0x7D, "ADC", AbsoluteX, Arithmetic::Adc),
    op(0x79, "ADC", AbsoluteY, Arithmetic::Adc),
    op(0x61, "ADC", IndexedIndirect, Arithmetic::Adc),
    op(0x71, "ADC", IndirectIndexed, Arithmetic::Adc),
    op(0xE9, "SBC", Immediate, Arithmetic::Sbc),
    op(0xE5, "SBC", ZeroPage, Arithmetic::Sbc),
    op(0xF5, "SBC", ZeroPageX, Arithmetic::Sbc),
    op(0xED, "SBC", Absolute, Arithmetic::Sbc),
    op(0xFD, "SBC", AbsoluteX, Arithmetic::Sbc),
    op(0xF9, "SBC", AbsoluteY, Arithmetic::Sbc),
    op(0xE1, "SBC", IndexedIndirect, Arithmetic::Sbc),
    op(0xF1, "SBC", IndirectIndexed, Arithmetic::Sbc),
];
