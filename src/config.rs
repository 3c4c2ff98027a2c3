//! Runtime configuration for the CPU dispatcher.

/// What `Cpu::step` does when it fetches an opcode with no registered instruction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InvalidOpcodePolicy {
    /// Notify watchers, log, and step over the byte as if it were a one-byte NOP.
    #[default]
    Ignore,
    /// Notify watchers, leave PC on the opcode and return `CpuError::InvalidOpcode`.
    Halt,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuConfig {
    pub invalid_opcode: InvalidOpcodePolicy,
}

impl CpuConfig {
    /// Strict configuration: invalid opcodes stop execution.
    pub fn strict() -> Self {
        Self {
            invalid_opcode: InvalidOpcodePolicy::Halt,
        }
    }
}
