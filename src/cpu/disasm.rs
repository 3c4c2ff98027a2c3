//! Disassembly text helpers and the optional address -> label table.
//!
//! Operand text uses lowercase hex at natural width: two digits for zero-page and
//! immediate values, four for absolute addresses. When the context carries a
//! `SymbolTable`, any address operand with a label is printed as the label instead.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    labels: HashMap<u16, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: u16, label: impl Into<String>) {
        self.labels.insert(address, label.into());
    }

    pub fn label(&self, address: u16) -> Option<&str> {
        self.labels.get(&address).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(u16, S)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (u16, S)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(|(a, s)| (a, s.into())).collect(),
        }
    }
}

/// `$xx`, or the label for the zero-page address.
pub(crate) fn zero_page(symbols: &SymbolTable, zp: u8) -> String {
    match symbols.label(zp as u16) {
        Some(label) => label.to_string(),
        None => format!("${zp:02x}"),
    }
}

/// `$xxxx`, or the label for the address.
pub(crate) fn absolute(symbols: &SymbolTable, address: u16) -> String {
    match symbols.label(address) {
        Some(label) => label.to_string(),
        None => format!("${address:04x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_replace_hex() {
        let symbols: SymbolTable = [(0xFFD2u16, "CHROUT"), (0x00FB, "PTR")].into_iter().collect();
        assert_eq!(absolute(&symbols, 0xFFD2), "CHROUT");
        assert_eq!(absolute(&symbols, 0xFFD3), "$ffd3");
        assert_eq!(zero_page(&symbols, 0xFB), "PTR");
        assert_eq!(zero_page(&symbols, 0x0A), "$0a");
    }
    #[test]
    fn insert_overrides_label() {
        let mut symbols = SymbolTable::new();
        assert!(symbols.is_empty());
        symbols.insert(0xD020, "BORDER");
        symbols.insert(0xD020, "EXTCOL");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols.label(0xD020), Some("EXTCOL"));
        assert_eq!(absolute(&symbols, 0xD020), "EXTCOL");
    }
}
