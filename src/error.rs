/*!
error.rs - Error type shared by the bus graph, the instruction table and the CPU.

Construction problems (missing collaborator, wrong ROM size, duplicate opcode)
are fatal configuration bugs and are reported once, eagerly, when the object
graph is built. The only runtime error is `InvalidOpcode`, produced by `Cpu::step`
under `InvalidOpcodePolicy::Halt`.
*/

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("opcode ${opcode:02x} is registered more than once")]
    DuplicateOpcode { opcode: u8 },

    #[error("opcode ${opcode:02x} writes back through an immediate operand")]
    ImmediateNotWritable { opcode: u8 },

    #[error("missing required collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("{name} must be {expected} bytes, got {actual}")]
    RomSize {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("page {index} is {actual} bytes, expected {expected}")]
    PageSize {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("page {index} out of range ({count} pages)")]
    PageIndex { index: usize, count: usize },

    #[error("invalid flags string {0:?}")]
    InvalidFlags(String),

    #[error("invalid opcode ${opcode:02x} at ${pc:04x}")]
    InvalidOpcode { opcode: u8, pc: u16 },
}

pub type Result<T> = std::result::Result<T, CpuError>;
