/* Per-atom basis specification, as extracted from a CP2K basis-set file.

   The record is a plain value: construction never fails and never reorders
   anything. Consistency between the coefficient groups, the exponents and
   the shell format is checked only on request (`validate`) or when the
   record is expanded into shells.
*/

use crate::element::{self, ElementSymbol};
use crate::error::{Error, Result};
use crate::matrix::Real;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisSpecification {
    symbol: String,
    // one group per contracted shell, in shell order
    coefficients: Vec<Vec<Real>>,
    // shared by every coefficient group
    exponents: Vec<Real>,
    // number of contracted shells per angular momentum: [s, p, d, f, ...]
    basis_format: Vec<i32>,
}

impl BasisSpecification {
    pub fn new(
        symbol: impl Into<String>,
        coefficients: Vec<Vec<Real>>,
        exponents: Vec<Real>,
        basis_format: Vec<i32>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            coefficients,
            exponents,
            basis_format,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Registry symbol of this record's element, whatever case it was given in.
    pub fn element(&self) -> Result<ElementSymbol> {
        element::canonical_symbol(&self.symbol)
    }

    pub fn coefficients(&self) -> &[Vec<Real>] {
        &self.coefficients
    }

    pub fn exponents(&self) -> &[Real] {
        &self.exponents
    }

    pub fn basis_format(&self) -> &[i32] {
        &self.basis_format
    }

    /// Consume the record, returning `(symbol, coefficients, exponents, basis_format)`.
    pub fn into_parts(self) -> (String, Vec<Vec<Real>>, Vec<Real>, Vec<i32>) {
        (self.symbol, self.coefficients, self.exponents, self.basis_format)
    }

    /// Number of coefficient groups actually present.
    pub fn n_contracted(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of contracted shells the format declares.
    pub fn n_shells_declared(&self) -> i64 {
        self.basis_format.iter().map(|&n| n as i64).sum()
    }

    /// Check the record against the layout the integral assembly relies on.
    pub fn validate(&self) -> Result<()> {
        let symbol = self.symbol.as_str();
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(Error::inconsistent(
                symbol,
                "symbol must be non-empty lowercase ASCII",
            ));
        }
        if let Some((l, n)) = self
            .basis_format
            .iter()
            .enumerate()
            .find(|(_, &n)| n < 0)
        {
            return Err(Error::inconsistent(
                symbol,
                format!("negative shell count {n} for l = {l}"),
            ));
        }

        let declared = self.n_shells_declared();
        if declared != self.coefficients.len() as i64 {
            return Err(Error::inconsistent(
                symbol,
                format!(
                    "basis format declares {declared} shells but {} coefficient groups were given",
                    self.coefficients.len()
                ),
            ));
        }

        if self.exponents.is_empty() {
            return Err(Error::inconsistent(symbol, "no exponents"));
        }
        if let Some(e) = self.exponents.iter().find(|e| !e.is_finite() || **e <= 0.0) {
            return Err(Error::inconsistent(
                symbol,
                format!("exponent {e} is not a positive finite number"),
            ));
        }

        for (idx, group) in self.coefficients.iter().enumerate() {
            if group.len() != self.exponents.len() {
                return Err(Error::inconsistent(
                    symbol,
                    format!(
                        "coefficient group {idx} has {} entries for {} exponents",
                        group.len(),
                        self.exponents.len()
                    ),
                ));
            }
            if group.iter().any(|c| !c.is_finite()) {
                return Err(Error::inconsistent(
                    symbol,
                    format!("coefficient group {idx} contains a non-finite value"),
                ));
            }
        }

        Ok(())
    }
}
