//! Atomic number to element symbol registry.
//!
//! Basis-set databases are keyed by the lowercase element symbol, so every
//! structural atom is translated through this table before a basis lookup.
//! The table is plain static data: it is never mutated, needs no
//! initialization and can be read from any thread.

use crate::error::{Error, Result};
use periodic_table_on_an_enum::Element;
use std::fmt;

/// Largest atomic number the registry resolves.
pub const MAX_ATOMIC_NUMBER: u32 = 96;

/// Lowercase symbols indexed by `atomic_number - 1`.
#[rustfmt::skip]
static ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize] = [
    "h", "he", "li", "be", "b", "c", "n", "o",
    "f", "ne", "na", "mg", "al", "si", "p", "s",
    "cl", "ar", "k", "ca", "sc", "ti", "v", "cr",
    "mn", "fe", "co", "ni", "cu", "zn", "ga", "ge",
    "as", "se", "br", "kr", "rb", "sr", "y", "zr",
    "nb", "mo", "tc", "ru", "rh", "pd", "ag", "cd",
    "in", "sn", "sb", "te", "i", "xe", "cs", "ba",
    "la", "ce", "pr", "nd", "pm", "sm", "eu", "gd",
    "tb", "dy", "ho", "er", "tm", "yb", "lu", "hf",
    "ta", "w", "re", "os", "ir", "pt", "au", "hg",
    "tl", "pb", "bi", "po", "at", "rn", "fr", "ra",
    "ac", "th", "pa", "u", "np", "pu", "am", "cm",
];

/// Canonical lowercase element symbol, as used in basis-set file lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementSymbol(&'static str);

impl ElementSymbol {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Symbol with the first letter upper-cased, e.g. `"Cl"`.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Atomic number this symbol was resolved from.
    pub fn atomic_number(&self) -> u32 {
        // Symbols only come out of ELEMENT_SYMBOLS, so the search always hits.
        ELEMENT_SYMBOLS
            .iter()
            .position(|s| *s == self.0)
            .map(|idx| idx as u32 + 1)
            .unwrap_or_default()
    }

    /// Periodic table entry, for properties such as the atomic mass.
    pub fn element(&self) -> Option<Element> {
        Element::from_symbol(&self.capitalized())
    }
}

impl fmt::Display for ElementSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

impl AsRef<str> for ElementSymbol {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<&str> for ElementSymbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for ElementSymbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Resolve an atomic number to its lowercase element symbol.
///
/// Fails with [`Error::UnsupportedElement`] outside `1..=MAX_ATOMIC_NUMBER`;
/// there is no fallback symbol.
pub fn resolve(atomic_number: u32) -> Result<ElementSymbol> {
    resolve_signed(atomic_number as i64)
}

/// Same as [`resolve`] for structural data that carries signed integers.
pub fn resolve_signed(atomic_number: i64) -> Result<ElementSymbol> {
    if atomic_number < 1 || atomic_number > MAX_ATOMIC_NUMBER as i64 {
        return Err(Error::UnsupportedElement(atomic_number));
    }
    Ok(ElementSymbol(ELEMENT_SYMBOLS[(atomic_number - 1) as usize]))
}

/// Reverse lookup, case-insensitive: `"Cl"`, `"CL"` and `"cl"` all give 17.
pub fn atomic_number(symbol: &str) -> Result<u32> {
    let key = symbol.trim().to_ascii_lowercase();
    ELEMENT_SYMBOLS
        .iter()
        .position(|s| *s == key)
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| Error::UnknownSymbol(symbol.to_string()))
}

/// Resolve a symbol given in any case to its canonical form.
pub fn canonical_symbol(symbol: &str) -> Result<ElementSymbol> {
    atomic_number(symbol).and_then(resolve)
}

/// Every `(atomic_number, symbol)` pair in the registry, in order.
pub fn symbols() -> impl Iterator<Item = (u32, ElementSymbol)> {
    ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .map(|(idx, s)| (idx as u32 + 1, ElementSymbol(s)))
}
