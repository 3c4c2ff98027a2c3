/*!
core::Cpu - Opcode dispatch over a `CpuContext`.

A `Cpu` is an immutable opcode -> instruction table plus a `CpuConfig`. It holds
no machine state, so one `Cpu` can drive any number of contexts.

Construction
============
- `Cpu::new()`: the standard documented instruction set.
- `Cpu::with_instructions(iter)`: a custom bundle. Registering an opcode twice, or
  a writing instruction (store / read-modify-write) with an Immediate operand, is
  reported as a `CpuError` here rather than surfacing mid-run.
- `with_config` swaps the invalid-opcode policy.

Stepping
========
`step` fetches the opcode at PC, looks it up (falling back to the shared invalid
singleton) and executes it. It never services interrupts: a driver calls
`ctx.handle_interrupts()` between steps, which is exactly what `run` does.

```text
loop {
    ctx.handle_interrupts();
    cpu.step(&mut ctx)?;
}
```

Invalid opcodes
===============
Watchers are notified and a warning is logged in both policies.
- `Ignore` (default): PC moves past the byte, nothing else changes.
- `Halt`: PC stays on the byte and `step` returns `CpuError::InvalidOpcode`.

With the `trace` feature every step logs the disassembly and the register dump at
`trace` level before executing.
*/

use crate::config::{CpuConfig, InvalidOpcodePolicy};
use crate::cpu::addressing::AddressingMode;
use crate::cpu::context::CpuContext;
use crate::cpu::dispatch::misc;
use crate::cpu::instruction::Instruction;
use crate::cpu::table::{self, OpcodeTable};
use crate::error::{CpuError, Result};

#[derive(Debug, Clone)]
pub struct Cpu {
    table: OpcodeTable,
    config: CpuConfig,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU with every documented 6502 instruction.
    pub fn new() -> Self {
        Self {
            table: *table::standard_table(),
            config: CpuConfig::default(),
        }
    }

    /// CPU over a custom instruction bundle.
    pub fn with_instructions<I>(instructions: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static Instruction>,
    {
        let mut table: OpcodeTable = [None; 256];
        for instr in instructions {
            let opcode = instr.opcode();
            if instr.writes_operand() && instr.mode() == AddressingMode::Immediate {
                return Err(CpuError::ImmediateNotWritable { opcode });
            }
            let slot = &mut table[opcode as usize];
            if slot.is_some() {
                return Err(CpuError::DuplicateOpcode { opcode });
            }
            *slot = Some(instr);
        }
        Ok(Self {
            table,
            config: CpuConfig::default(),
        })
    }

    pub fn with_config(mut self, config: CpuConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Instruction registered for `opcode`, or the invalid singleton.
    #[inline]
    pub fn instruction(&self, opcode: u8) -> &'static Instruction {
        match self.table[opcode as usize] {
            Some(instr) => instr,
            None => table::invalid(opcode),
        }
    }

    /// Execute the instruction at PC.
    pub fn step(&self, ctx: &mut CpuContext) -> Result<()> {
        let pc = ctx.regs().pc;
        let opcode = ctx.read_byte(pc);
        let instr = self.instruction(opcode);

        #[cfg(feature = "trace")]
        {
            let text = instr.disassemble(ctx);
            log::trace!("{:04x}  {:02x}  {:<16}{}", pc, opcode, text, ctx.regs());
        }

        if !instr.is_valid() && self.config.invalid_opcode == InvalidOpcodePolicy::Halt {
            misc::invalid(ctx, opcode);
            return Err(CpuError::InvalidOpcode { opcode, pc });
        }
        instr.execute(ctx);
        Ok(())
    }

    /// Run up to `max_steps` instructions, servicing pending interrupts before
    /// each one. Returns the number of instructions executed; stops at the first
    /// error.
    pub fn run(&self, ctx: &mut CpuContext, max_steps: usize) -> Result<usize> {
        for executed in 0..max_steps {
            ctx.handle_interrupts();
            if let Err(err) = self.step(ctx) {
                log::debug!("run stopped after {executed} instructions: {err}");
                return Err(err);
            }
        }
        Ok(max_steps)
    }

    /// Disassembly of the instruction at PC.
    pub fn disassemble(&self, ctx: &mut CpuContext) -> String {
        let pc = ctx.regs().pc;
        let opcode = ctx.read_byte(pc);
        self.instruction(opcode).disassemble(ctx)
    }
}
