/*!
watchers.rs - Diagnostic hooks fired by the CPU.

A `CpuWatcher` observes; it never changes emulated state (it only ever sees a
shared `&CpuContext`). Watchers live in a `CpuWatchers` collection owned by the
context and are called in registration order.

Hooks
=====
- `on_breakpoint`: a BRK is about to be executed (PC still on the BRK byte).
- `on_invalid_opcode`: an opcode with no registered instruction was fetched.
*/

use std::cell::RefCell;
use std::rc::Rc;

use crate::cpu::context::CpuContext;

pub trait CpuWatcher {
    fn on_breakpoint(&mut self, _ctx: &CpuContext) {}

    fn on_invalid_opcode(&mut self, _ctx: &CpuContext, _opcode: u8) {}
}

/// Lets a caller keep a handle to a watcher it registered (e.g. to inspect what it
/// recorded afterwards).
impl<W: CpuWatcher + ?Sized> CpuWatcher for Rc<RefCell<W>> {
    fn on_breakpoint(&mut self, ctx: &CpuContext) {
        self.borrow_mut().on_breakpoint(ctx);
    }

    fn on_invalid_opcode(&mut self, ctx: &CpuContext, opcode: u8) {
        self.borrow_mut().on_invalid_opcode(ctx, opcode);
    }
}

#[derive(Default)]
pub struct CpuWatchers {
    watchers: Vec<Box<dyn CpuWatcher>>,
}

impl CpuWatchers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<W: CpuWatcher + 'static>(&mut self, watcher: W) {
        self.watchers.push(Box::new(watcher));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }

    pub(crate) fn breakpoint(&mut self, ctx: &CpuContext) {
        for w in self.watchers.iter_mut() {
            w.on_breakpoint(ctx);
        }
    }

    pub(crate) fn invalid_opcode(&mut self, ctx: &CpuContext, opcode: u8) {
        for w in self.watchers.iter_mut() {
            w.on_invalid_opcode(ctx, opcode);
        }
    }
}

impl std::fmt::Debug for CpuWatchers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuWatchers")
            .field("len", &self.watchers.len())
            .finish()
    }
}

/// Watcher that reports every hook through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWatcher;

impl CpuWatcher for LogWatcher {
    fn on_breakpoint(&mut self, ctx: &CpuContext) {
        log::info!("BRK at ${:04x}: {}", ctx.regs().pc, ctx.regs());
    }

    fn on_invalid_opcode(&mut self, ctx: &CpuContext, opcode: u8) {
        log::info!("invalid opcode ${:02x} at ${:04x}", opcode, ctx.regs().pc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::Cpu;
    use crate::test_utils::{Recorder, flat_context};

    #[test]
    fn every_watcher_sees_brk() {
        let mut ctx = flat_context(&[0x00], 0x1000);
        ctx.write_byte(0xFFFE, 0x00);
        ctx.write_byte(0xFFFF, 0x20);
        let first = Recorder::shared();
        let second = Recorder::shared();
        ctx.add_watcher(first.clone());
        ctx.add_watcher(LogWatcher);
        ctx.add_watcher(second.clone());
        assert_eq!(ctx.watchers_mut().len(), 3);

        Cpu::new().step(&mut ctx).expect("BRK");
        assert_eq!(first.borrow().breakpoints, vec![0x1000]);
        assert_eq!(second.borrow().breakpoints, vec![0x1000]);
        assert_eq!(ctx.watchers_mut().len(), 3);
    }

    #[test]
    fn log_watcher_leaves_state_alone() {
        let mut ctx = flat_context(&[0x02], 0x1000);
        let before = *ctx.regs();
        let mut watcher = LogWatcher;
        watcher.on_breakpoint(&ctx);
        watcher.on_invalid_opcode(&ctx, 0x02);
        assert_eq!(*ctx.regs(), before);
        assert_eq!(ctx.read_byte(0x1000), 0x02);
    }
}
