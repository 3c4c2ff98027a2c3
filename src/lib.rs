#![doc = r#"
sixtyfour library crate: a MOS 6502 CPU core wired the way a Commodore 64 wires it.

Modules:
- bus: AddressBus capability, flat memory, ROM overlays, rebasing and paged
  composites, and the 6510 bank-switching decoder (`CpuAddressBus`)
- cpu: registers and flags, `CpuContext`, addressing modes, ALU, instruction
  families, the shared instruction table and the `Cpu` dispatcher
- config: runtime policy knobs (`CpuConfig`)
- error: `CpuError` and the crate `Result`

Cargo features:
- trace: log every executed instruction (disassembly + registers) at trace level

In tests, shared context and bus builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod config;
pub mod cpu;
pub mod error;

pub use bus::{AddressBus, CpuAddressBus, Memory};
pub use config::{CpuConfig, InvalidOpcodePolicy};
pub use cpu::{Cpu, CpuContext, CpuFlags};
pub use error::{CpuError, Result};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
