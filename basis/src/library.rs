/* Keyed collection of per-atom basis records.

   Records are stored by (element symbol, basis-set name), which is how the
   CP2K basis files are addressed. Basis names compare case-insensitively.
   A library can be read from the JSON written by the basis-file parser and
   persisted in pickle format for the Python side of the workflow.
*/

use crate::element::{self, ElementSymbol};
use crate::error::{Error, Result};
use crate::record::BasisSpecification;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BasisKey {
    pub symbol: String,
    pub basis: String,
}

impl BasisKey {
    pub fn new(symbol: &str, basis: &str) -> Self {
        BasisKey {
            symbol: symbol.trim().to_ascii_lowercase(),
            basis: normalize_basis_name(basis),
        }
    }
}

pub fn normalize_basis_name(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

/// One entry of a JSON basis library file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisEntry {
    pub basis: String,
    #[serde(flatten)]
    pub record: BasisSpecification,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BasisLibrary {
    entries: BTreeMap<BasisKey, BasisSpecification>,
}

impl BasisLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under `basis`, replacing any previous one for the same key.
    ///
    /// The record's symbol must be a registry symbol; it is stored in its
    /// canonical lowercase form.
    pub fn insert(&mut self, basis: &str, record: BasisSpecification) -> Result<Option<BasisSpecification>> {
        let symbol = record.element()?;
        let key = BasisKey::new(symbol.as_str(), basis);
        debug!("registering basis {} for {}", key.basis, key.symbol);
        let (_, coefficients, exponents, basis_format) = record.into_parts();
        let record = BasisSpecification::new(symbol.as_str(), coefficients, exponents, basis_format);
        Ok(self.entries.insert(key, record))
    }

    pub fn get(&self, symbol: &str, basis: &str) -> Option<&BasisSpecification> {
        self.entries.get(&BasisKey::new(symbol, basis))
    }

    /// Fetch the record for a resolved element symbol.
    pub fn fetch(&self, symbol: ElementSymbol, basis: &str) -> Result<&BasisSpecification> {
        self.get(symbol.as_str(), basis).ok_or_else(|| Error::MissingBasis {
            symbol: symbol.to_string(),
            basis: normalize_basis_name(basis),
        })
    }

    /// Resolve `atomic_number` through the element registry, then fetch.
    pub fn lookup(&self, atomic_number: u32, basis: &str) -> Result<&BasisSpecification> {
        let symbol = element::resolve(atomic_number)?;
        self.fetch(symbol, basis)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct basis-set names, sorted.
    pub fn basis_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|k| k.basis.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BasisKey, &BasisSpecification)> {
        self.entries.iter()
    }
}

impl BasisLibrary {
    pub fn from_entries(entries: impl IntoIterator<Item = BasisEntry>) -> Result<Self> {
        let mut library = BasisLibrary::new();
        for entry in entries {
            library.insert(&entry.basis, entry.record)?;
        }
        Ok(library)
    }

    // JSON array of {basis, symbol, coefficients, exponents, basis_format}
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<BasisEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_entries(&self) -> Vec<BasisEntry> {
        self.entries
            .iter()
            .map(|(key, record)| BasisEntry {
                basis: key.basis.clone(),
                record: record.clone(),
            })
            .collect()
    }

    // Serialize to pickle format
    pub fn to_pickle(&self) -> Result<Vec<u8>> {
        let options = serde_pickle::SerOptions::new();
        Ok(serde_pickle::to_vec(&self.to_entries(), options)?)
    }

    // Deserialize from pickle format
    pub fn from_pickle(bytes: &[u8]) -> Result<Self> {
        let options = serde_pickle::DeOptions::new();
        let entries: Vec<BasisEntry> = serde_pickle::from_slice(bytes, options)?;
        Self::from_entries(entries)
    }

    pub fn save_to_file(&self, filename: impl AsRef<Path>) -> Result<()> {
        let serialized = self.to_pickle()?;
        let mut file = File::create(filename)?;
        file.write_all(&serialized)?;
        Ok(())
    }

    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(filename)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Self::from_pickle(&buffer)
    }
}
