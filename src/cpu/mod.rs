/*!
cpu - MOS 6502 / 6510 CPU core.

Layout
======
```text
flags.rs        - CpuFlags: packed status register, text form.
state.rs        - CpuState: register file.
regs.rs         - CpuRegs: register/flag trait the ALU helpers are generic over.
context.rs      - CpuContext: registers + bus + interrupt latches + watchers.
addressing.rs   - AddressingMode: operand strategies (read / write / text).
execute.rs      - ALU semantics (ADC/SBC incl. decimal, compare, shifts, ...).
instruction.rs  - Instruction = opcode + mode + tagged Function.
dispatch/       - One module per instruction family with its opcode list.
table.rs        - Shared instruction singletons (standard bundle, invalid).
core/           - Cpu: opcode table, step / run / disassemble.
watchers.rs     - CpuWatcher hooks (breakpoint, invalid opcode).
disasm.rs       - SymbolTable and operand text helpers.
```

Usage:
```rust,ignore
use sixtyfour::bus::CpuAddressBus;
use sixtyfour::cpu::{Cpu, CpuContext};

let bus = CpuAddressBus::c64(basic, chargen, kernal, io)?;
let mut ctx = CpuContext::new(Box::new(bus));
ctx.reset();
let cpu = Cpu::new();
cpu.run(&mut ctx, 1_000)?;
```
*/

pub mod addressing;
pub mod context;
pub mod core;
pub mod disasm;
pub(crate) mod dispatch;
pub mod execute;
pub mod flags;
pub mod instruction;
pub mod regs;
pub mod state;
pub mod table;
pub mod watchers;

pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::context::{CpuContext, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::disasm::SymbolTable;
pub use crate::cpu::dispatch::arithmetic::Arithmetic;
pub use crate::cpu::dispatch::branches::Condition;
pub use crate::cpu::dispatch::control_flow::Control;
pub use crate::cpu::dispatch::logical::Logical;
pub use crate::cpu::dispatch::misc::{FlagOp, RegisterOp, StackOp};
pub use crate::cpu::dispatch::rmw::Unary;
pub use crate::cpu::flags::CpuFlags;
pub use crate::cpu::instruction::{Function, Instruction, Register};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::CpuState;
pub use crate::cpu::watchers::{CpuWatcher, CpuWatchers, LogWatcher};
