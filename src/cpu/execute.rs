/*!
execute.rs - 6502 ALU semantics.

All helpers are generic over `CpuRegs` and never touch memory: the caller reads
the operand through its addressing mode, calls a helper here, and (for
read-modify-write forms) writes the returned byte back through the same mode.

Inventory
=========
Arithmetic:      adc, sbc (binary and decimal)
Compare:         compare (CMP/CPX/CPY share it)
Logical:         and, ora, eor, bit
Shifts/rotates:  asl, lsr, rol, ror        -> return the shifted byte
Increment:       inc, dec                  -> return the new byte

Decimal mode
============
ADC: the binary sum is formed first and gives V. The low digit (plus carry in)
is adjusted by +6 when above 9, the high digit by +6 when above 9, and the carry
out is set when the high digit overflowed. Z and N come from the adjusted byte.

SBC: the binary difference gives C and V. The low digit is adjusted by -6 when it
borrowed, the high digit by -6 when it borrowed. Z and N come from the adjusted
byte.
*/

use crate::cpu::regs::CpuRegs;

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = cpu.flags().carry() as u16;
    let sum = a as u16 + v as u16 + carry_in;
    let binary = sum as u8;
    let overflow = (!(a ^ v) & (a ^ binary) & 0x80) != 0;

    let (result, carry) = if cpu.flags().decimal() {
        let mut lo = (a & 0x0F) as u16 + (v & 0x0F) as u16 + carry_in;
        let mut hi = (a >> 4) as u16 + (v >> 4) as u16;
        if lo > 9 {
            lo += 6;
        }
        if lo > 0x0F {
            hi += 1;
        }
        let carry = hi > 9;
        if carry {
            hi += 6;
        }
        ((((hi & 0x0F) << 4) | (lo & 0x0F)) as u8, carry)
    } else {
        (binary, sum > 0xFF)
    };

    let flags = cpu.flags_mut();
    flags.set_carry(carry);
    flags.set_overflow(overflow);
    cpu.set_a(result);
    cpu.update_zn(result);
}

pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let borrow_in = (!cpu.flags().carry()) as i16;
    let diff = a as i16 - v as i16 - borrow_in;
    let binary = diff as u8;
    let overflow = ((a ^ v) & (a ^ binary) & 0x80) != 0;

    let result = if cpu.flags().decimal() {
        let mut lo = (a & 0x0F) as i16 - (v & 0x0F) as i16 - borrow_in;
        let mut hi = (a >> 4) as i16 - (v >> 4) as i16;
        if lo < 0 {
            lo -= 6;
            hi -= 1;
        }
        if hi < 0 {
            hi -= 6;
        }
        (((hi & 0x0F) << 4) | (lo & 0x0F)) as u8
    } else {
        binary
    };

    let flags = cpu.flags_mut();
    flags.set_carry(diff >= 0);
    flags.set_overflow(overflow);
    cpu.set_a(result);
    cpu.update_zn(result);
}

/// CMP/CPX/CPY: `left - right` without storing.
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, left: u8, right: u8) {
    let result = left.wrapping_sub(right);
    cpu.flags_mut().set_carry(left >= right);
    cpu.update_zn(result);
}

// ---------------------------------------------------------------------------
// Logical
// ---------------------------------------------------------------------------

pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    cpu.set_a(r);
    cpu.update_zn(r);
}

pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    cpu.set_a(r);
    cpu.update_zn(r);
}

pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    cpu.set_a(r);
    cpu.update_zn(r);
}

/// Z from A & M; N and V copied from bits 7 and 6 of M.
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let flags = cpu.flags_mut();
    flags.set_zero(a & v == 0);
    flags.set_negative(v & 0x80 != 0);
    flags.set_overflow(v & 0x40 != 0);
}

// ---------------------------------------------------------------------------
// Shifts / rotates
// ---------------------------------------------------------------------------

pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v << 1;
    cpu.flags_mut().set_carry(v & 0x80 != 0);
    cpu.update_zn(r);
    r
}

pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v >> 1;
    cpu.flags_mut().set_carry(v & 0x01 != 0);
    cpu.update_zn(r);
    r
}

pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.flags().carry() as u8;
    let r = (v << 1) | carry_in;
    cpu.flags_mut().set_carry(v & 0x80 != 0);
    cpu.update_zn(r);
    r
}

pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.flags().carry() as u8;
    let r = (v >> 1) | (carry_in << 7);
    cpu.flags_mut().set_carry(v & 0x01 != 0);
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Increment / decrement
// ---------------------------------------------------------------------------

pub(crate) fn inc<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    cpu.update_zn(r);
    r
}

pub(crate) fn dec<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    cpu.update_zn(r);
    r
}
