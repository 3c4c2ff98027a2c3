/*!
context.rs - `CpuContext`: the complete mutable state of one emulated machine.

Owns
====
- the register file (`CpuState`)
- the CPU-visible `AddressBus` (typically a `CpuAddressBus`)
- the pending IRQ / NMI latches
- the watcher collection and the disassembly symbol table

Every instruction receives `&mut CpuContext`; nothing in the CPU core keeps state
anywhere else, so one context per machine is all that is needed to run several
machines side by side.

Interrupts
==========
`irq()` / `nmi()` only raise a latch. Raising an already raised latch is a no-op,
so repeated requests before service coalesce into one. `handle_interrupts()` is
the only place a latch is drained; the driver loop calls it between instructions,
never from inside an instruction.

```text
vectors: NMI $FFFA, RESET $FFFC, IRQ/BRK $FFFE
```

Memory helpers
==============
- `read_address(addr)`: little-endian word, high byte at `addr + 1` wrapping at 16 bits.
- `read_zero_page_address(zp)`: little-endian word, high byte at `(zp + 1) & $FF`.
- Stack lives at $0100 + SP: push writes then decrements, pop increments then reads.
*/

use crate::bus::AddressBus;
use crate::cpu::disasm::SymbolTable;
use crate::cpu::flags::CpuFlags;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::CpuState;
use crate::cpu::watchers::{CpuWatcher, CpuWatchers};

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

const STACK_BASE: u16 = 0x0100;

pub struct CpuContext {
    regs: CpuState,
    bus: Box<dyn AddressBus>,
    irq_pending: bool,
    nmi_pending: bool,
    watchers: CpuWatchers,
    symbols: SymbolTable,
}

impl std::fmt::Debug for CpuContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuContext")
            .field("regs", &self.regs)
            .field("bus_size", &self.bus.size())
            .field("irq_pending", &self.irq_pending)
            .field("nmi_pending", &self.nmi_pending)
            .field("watchers", &self.watchers)
            .finish()
    }
}

impl CpuContext {
    /// New context over `bus` with power-up register values. PC is 0 until `reset`.
    pub fn new(bus: Box<dyn AddressBus>) -> Self {
        Self {
            regs: CpuState::new(),
            bus,
            irq_pending: false,
            nmi_pending: false,
            watchers: CpuWatchers::new(),
            symbols: SymbolTable::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[inline]
    pub fn regs(&self) -> &CpuState {
        &self.regs
    }

    #[inline]
    pub fn regs_mut(&mut self) -> &mut CpuState {
        &mut self.regs
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut dyn AddressBus {
        self.bus.as_mut()
    }

    #[inline]
    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    #[inline]
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    pub fn add_watcher<W: CpuWatcher + 'static>(&mut self, watcher: W) {
        self.watchers.add(watcher);
    }

    #[inline]
    pub fn watchers_mut(&mut self) -> &mut CpuWatchers {
        &mut self.watchers
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn set_symbols(&mut self, symbols: SymbolTable) {
        self.symbols = symbols;
    }

    // ---------------------------------------------------------------------
    // Memory
    // ---------------------------------------------------------------------

    #[inline]
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.bus.read(addr as usize)
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bus.write(addr as usize, value);
    }

    #[inline]
    pub fn read_zero_page(&mut self, zp: u8) -> u8 {
        self.read_byte(zp as u16)
    }

    #[inline]
    pub fn write_zero_page(&mut self, zp: u8, value: u8) {
        self.write_byte(zp as u16, value);
    }

    pub fn read_address(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr) as u16;
        let hi = self.read_byte(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn read_zero_page_address(&mut self, zp: u8) -> u16 {
        let lo = self.read_zero_page(zp) as u16;
        let hi = self.read_zero_page(zp.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Stack
    // ---------------------------------------------------------------------

    pub fn push(&mut self, value: u8) {
        let sp = self.regs.sp;
        self.write_byte(STACK_BASE | sp as u16, value);
        self.regs.sp = sp.wrapping_sub(1);
    }

    pub fn pop(&mut self) -> u8 {
        let sp = self.regs.sp.wrapping_add(1);
        self.regs.sp = sp;
        self.read_byte(STACK_BASE | sp as u16)
    }

    /// Push a word high byte first, so it pops back low byte first.
    pub fn push_address(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub fn pop_address(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Reset / interrupts
    // ---------------------------------------------------------------------

    /// A = X = Y = 0, SP = $FF, P = 0, both latches cleared, PC from $FFFC.
    pub fn reset(&mut self) {
        self.regs = CpuState::new();
        self.irq_pending = false;
        self.nmi_pending = false;
        self.regs.pc = self.read_address(RESET_VECTOR);
        log::debug!("reset: PC=${:04x}", self.regs.pc);
    }

    /// Request a maskable interrupt.
    #[inline]
    pub fn irq(&mut self) {
        self.irq_pending = true;
    }

    /// Request a non-maskable interrupt.
    #[inline]
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Service at most one pending interrupt. NMI wins over IRQ; IRQ is only taken
    /// with interrupt-disable clear and otherwise stays latched.
    ///
    /// Returns true when an interrupt sequence was entered.
    pub fn handle_interrupts(&mut self) -> bool {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.enter_interrupt(NMI_VECTOR, false);
            log::debug!("NMI -> ${:04x}", self.regs.pc);
            return true;
        }
        if self.irq_pending && !self.regs.flags.interrupt_disable() {
            self.irq_pending = false;
            self.enter_interrupt(IRQ_VECTOR, false);
            log::debug!("IRQ -> ${:04x}", self.regs.pc);
            return true;
        }
        false
    }

    /// Push PC and P (break bit as given), set I, load PC from `vector`.
    pub(crate) fn enter_interrupt(&mut self, vector: u16, brk: bool) {
        self.push_address(self.regs.pc);
        let p = self.regs.flags.pushed(brk);
        self.push(p);
        self.regs.flags.set_interrupt_disable(true);
        self.regs.pc = self.read_address(vector);
    }

    // ---------------------------------------------------------------------
    // Watcher notification
    // ---------------------------------------------------------------------

    // The collection is moved out for the call so watchers can borrow the context.
    pub(crate) fn notify_breakpoint(&mut self) {
        if self.watchers.is_empty() {
            return;
        }
        let mut watchers = std::mem::take(&mut self.watchers);
        watchers.breakpoint(self);
        self.watchers = watchers;
    }

    pub(crate) fn notify_invalid_opcode(&mut self, opcode: u8) {
        if self.watchers.is_empty() {
            return;
        }
        let mut watchers = std::mem::take(&mut self.watchers);
        watchers.invalid_opcode(self, opcode);
        self.watchers = watchers;
    }
}

impl CpuRegs for CpuContext {
    #[inline]
    fn a(&self) -> u8 {
        self.regs.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.regs.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.regs.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.regs.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.regs.pc
    }
    #[inline]
    fn flags(&self) -> CpuFlags {
        self.regs.flags
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.regs.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.regs.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.regs.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.regs.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.regs.pc = v;
    }
    #[inline]
    fn flags_mut(&mut self) -> &mut CpuFlags {
        &mut self.regs.flags
    }
}
