/*!
flags.rs - Packed 6502 status register (P).

Bit layout (bit 0 first):

```text
bit  0 1 2 3 4 5 6 7
     C Z I D B 1 V N
```

- `B` (break) only has meaning in the copy pushed by BRK/PHP; IRQ/NMI push it clear
  and PLP/RTI drop it on the way back in.
- Bit 5 is not wired on the chip. `value()` always reports it set, which is also
  what gets pushed; `bits()` exposes the raw storage.

Text form
=========
Eight positional characters, bit 0 first, `-` for a clear bit:

```text
"---D-1--"   decimal set (plus the always-on unused bit)
"CZ---1VN"   carry, zero, overflow, negative
```

`Display` renders `value()`. `FromStr` accepts exactly eight characters, each
either the letter for its position (case-insensitive) or `-`.
*/

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::CpuError;

bitflags! {
    #[derive(Debug, Clone, Copy)]
    pub struct CpuFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

const LETTERS: [char; 8] = ['C', 'Z', 'I', 'D', 'B', '1', 'V', 'N'];

impl CpuFlags {
    /// Flags from a packed byte, keeping every bit as given.
    #[inline]
    pub const fn from_value(value: u8) -> Self {
        Self::from_bits_retain(value)
    }

    /// Packed byte with the unused bit forced on.
    #[inline]
    pub fn value(&self) -> u8 {
        self.bits() | Self::UNUSED.bits()
    }

    #[inline]
    pub fn set_value(&mut self, value: u8) {
        *self = Self::from_bits_retain(value);
    }

    #[inline]
    pub fn carry(&self) -> bool {
        self.contains(Self::CARRY)
    }

    #[inline]
    pub fn set_carry(&mut self, on: bool) {
        self.set(Self::CARRY, on);
    }

    #[inline]
    pub fn zero(&self) -> bool {
        self.contains(Self::ZERO)
    }

    #[inline]
    pub fn set_zero(&mut self, on: bool) {
        self.set(Self::ZERO, on);
    }

    #[inline]
    pub fn interrupt_disable(&self) -> bool {
        self.contains(Self::INTERRUPT_DISABLE)
    }

    #[inline]
    pub fn set_interrupt_disable(&mut self, on: bool) {
        self.set(Self::INTERRUPT_DISABLE, on);
    }

    #[inline]
    pub fn decimal(&self) -> bool {
        self.contains(Self::DECIMAL)
    }

    #[inline]
    pub fn set_decimal(&mut self, on: bool) {
        self.set(Self::DECIMAL, on);
    }

    #[inline]
    pub fn brk(&self) -> bool {
        self.contains(Self::BREAK)
    }

    #[inline]
    pub fn set_brk(&mut self, on: bool) {
        self.set(Self::BREAK, on);
    }

    #[inline]
    pub fn unused(&self) -> bool {
        self.contains(Self::UNUSED)
    }

    #[inline]
    pub fn set_unused(&mut self, on: bool) {
        self.set(Self::UNUSED, on);
    }

    #[inline]
    pub fn overflow(&self) -> bool {
        self.contains(Self::OVERFLOW)
    }

    #[inline]
    pub fn set_overflow(&mut self, on: bool) {
        self.set(Self::OVERFLOW, on);
    }

    #[inline]
    pub fn negative(&self) -> bool {
        self.contains(Self::NEGATIVE)
    }

    #[inline]
    pub fn set_negative(&mut self, on: bool) {
        self.set(Self::NEGATIVE, on);
    }

    /// Copy as it is pushed to the stack: unused forced on, break as requested.
    #[inline]
    pub fn pushed(&self, brk: bool) -> u8 {
        let mut copy = *self;
        copy.set_brk(brk);
        copy.value()
    }

    /// Restore from a pulled byte (PLP/RTI): break discarded, unused on.
    #[inline]
    pub fn pulled(value: u8) -> Self {
        let mut flags = Self::from_bits_retain(value);
        flags.set_brk(false);
        flags.set_unused(true);
        flags
    }
}

impl Default for CpuFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for CpuFlags {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for CpuFlags {}

impl Hash for CpuFlags {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl fmt::Display for CpuFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        for (bit, letter) in LETTERS.iter().enumerate() {
            if value & (1 << bit) != 0 {
                write!(f, "{letter}")?;
            } else {
                f.write_str("-")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CpuFlags {
    type Err = CpuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != LETTERS.len() {
            return Err(CpuError::InvalidFlags(s.to_string()));
        }
        let mut value = 0u8;
        for (bit, (&c, &letter)) in chars.iter().zip(LETTERS.iter()).enumerate() {
            if c == '-' {
                continue;
            }
            if c.to_ascii_uppercase() != letter {
                return Err(CpuError::InvalidFlags(s.to_string()));
            }
            value |= 1 << bit;
        }
        Ok(Self::from_bits_retain(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_round_trip() {
        for v in 0..=u8::MAX {
            let flags = CpuFlags::from_value(v);
            let text = flags.to_string();
            let parsed: CpuFlags = text.parse().expect("formatted flags parse");
            assert_eq!(parsed.value(), flags.value(), "round trip of {v:#04x} via {text}");
            assert_eq!(parsed, flags);
        }
    }

    #[test]
    fn text_positions() {
        let mut flags = CpuFlags::default();
        flags.set_decimal(true);
        assert_eq!(flags.to_string(), "---D-1--");

        let all: CpuFlags = "czidb1vn".parse().expect("lowercase letters");
        assert_eq!(all.bits(), 0xFF);
        assert!(all.carry() && all.zero() && all.negative() && all.overflow());
    }

    #[test]
    fn rejects_bad_text() {
        assert!("---D-1-".parse::<CpuFlags>().is_err());
        assert!("---X-1--".parse::<CpuFlags>().is_err());
        // Letter in the wrong slot.
        assert_eq!(
            "Z-------".parse::<CpuFlags>(),
            Err(CpuError::InvalidFlags("Z-------".to_string()))
        );
    }

    #[test]
    fn unused_bit_is_forced_on_in_value() {
        let flags = CpuFlags::from_value(0x00);
        assert_eq!(flags.bits(), 0x00);
        assert_eq!(flags.value(), 0x20);
        assert_eq!(flags, CpuFlags::from_value(0x20));
    }

    #[test]
    fn push_and_pull_copies() {
        let mut flags = CpuFlags::default();
        flags.set_carry(true);
        assert_eq!(flags.pushed(true), 0x31);
        assert_eq!(flags.pushed(false), 0x21);

        let pulled = CpuFlags::pulled(0xFF);
        assert!(!pulled.brk());
        assert!(pulled.unused());
        assert_eq!(pulled.bits(), 0xEF);
    }
}
