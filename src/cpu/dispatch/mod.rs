/*!
dispatch - Instruction families.

Each family module provides:
- the tagged operation enum carried by `Function` (where the family has more than
  one operation),
- the `execute` entry point(s) called by `Instruction::execute`,
- `INSTRUCTIONS`: the family's documented opcodes.

Families
========
```text
arithmetic    ADC SBC
compare       CMP CPX CPY
logical       AND ORA EOR BIT
load_store    LDA LDX LDY STA STX STY
rmw           ASL LSR ROL ROR INC DEC
branches      BPL BMI BVC BVS BCC BCS BNE BEQ
control_flow  JMP JSR RTS RTI BRK
misc          transfers, INX/INY/DEX/DEY, stack, flag ops, NOP, invalid
```

`cpu::table` concatenates the `INSTRUCTIONS` lists into the standard bundle.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
