//! Shared builders for unit tests.
//!
//! - `flat_context`: a `CpuContext` over 64 KiB of plain RAM with a program loaded
//!   at `origin`, the reset vector pointing at it, and `reset()` already applied.
//! - `run_steps`: step the standard `Cpu` a fixed number of times.
//! - `Recorder`: a watcher that records what it saw.
//! - `c64_bus`: a `CpuAddressBus` with synthetic ROM images and a recording I/O
//!   device, so bank-switching tests can tell every window apart by content:
//!   BASIC is filled with $BA, the character ROM with $C4, KERNAL with $EE.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::cpu_bus::{BASIC_ROM_SIZE, CHAR_ROM_SIZE, IO_SIZE, KERNAL_ROM_SIZE};
use crate::bus::{AddressBus, CpuAddressBus, Memory, SharedBus, shared};
use crate::cpu::{Cpu, CpuContext, CpuWatcher, RESET_VECTOR};

pub fn flat_context(program: &[u8], origin: u16) -> CpuContext {
    let mut ram = Memory::default();
    ram.load(origin as usize, program);
    ram.load(RESET_VECTOR as usize, &origin.to_le_bytes());
    let mut ctx = CpuContext::new(Box::new(ram));
    ctx.reset();
    ctx
}

pub fn run_steps(ctx: &mut CpuContext, steps: usize) {
    let cpu = Cpu::new();
    for _ in 0..steps {
        cpu.step(ctx).expect("step");
    }
}

/// Watcher recording the PC of every hook call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub breakpoints: Vec<u16>,
    pub invalid: Vec<(u16, u8)>,
}

impl Recorder {
    pub fn shared() -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder::default()))
    }
}

impl CpuWatcher for Recorder {
    fn on_breakpoint(&mut self, ctx: &CpuContext) {
        self.breakpoints.push(ctx.regs().pc);
    }

    fn on_invalid_opcode(&mut self, ctx: &CpuContext, opcode: u8) {
        self.invalid.push((ctx.regs().pc, opcode));
    }
}

/// I/O window stand-in: remembers written registers and reads back the last value.
#[derive(Debug)]
pub struct RecordingDevice {
    regs: Vec<u8>,
    pub writes: Vec<(usize, u8)>,
}

impl RecordingDevice {
    pub fn new(size: usize) -> Self {
        Self {
            regs: vec![0; size],
            writes: Vec::new(),
        }
    }
}

impl AddressBus for RecordingDevice {
    fn read(&mut self, offset: usize) -> u8 {
        self.regs[offset % self.regs.len()]
    }

    fn write(&mut self, offset: usize, value: u8) {
        let offset = offset % self.regs.len();
        self.regs[offset] = value;
        self.writes.push((offset, value));
    }

    fn size(&self) -> usize {
        self.regs.len()
    }
}

pub fn c64_bus() -> (CpuAddressBus, SharedBus<RecordingDevice>) {
    let io = shared(RecordingDevice::new(IO_SIZE));
    let bus = CpuAddressBus::c64(
        vec![0xBA; BASIC_ROM_SIZE],
        vec![0xC4; CHAR_ROM_SIZE],
        vec![0xEE; KERNAL_ROM_SIZE],
        Box::new(io.clone()),
    )
    .expect("c64 bus");
    (bus, io)
}

#[test]
fn c64_context_boots_from_kernal_vector() {
    let (mut bus, _) = c64_bus();
    // KERNAL fill makes the reset vector $EEEE.
    assert_eq!(bus.read(0xFFFC), 0xEE);
    let mut ctx = CpuContext::new(Box::new(bus));
    ctx.reset();
    assert_eq!(ctx.regs().pc, 0xEEEE);
}
