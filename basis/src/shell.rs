use crate::error::{Error, Result};
use crate::matrix::Real;
use crate::record::BasisSpecification;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

const SHELL_LABELS: [char; 8] = ['s', 'p', 'd', 'f', 'g', 'h', 'i', 'k'];

/// Angular momentum quantum number of a shell, limited to the labelled shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct AngularMomentum(u32);

impl TryFrom<u32> for AngularMomentum {
    type Error = Error;

    fn try_from(l: u32) -> Result<Self> {
        Self::from_l(l).ok_or(Error::UnsupportedAngularMomentum(l))
    }
}

impl AngularMomentum {
    pub fn from_l(l: u32) -> Option<Self> {
        ((l as usize) < SHELL_LABELS.len()).then_some(Self(l))
    }

    pub fn l(&self) -> u32 {
        self.0
    }

    pub fn label(&self) -> char {
        SHELL_LABELS[self.0 as usize]
    }

    /// 2l + 1
    pub fn n_spherical(&self) -> usize {
        2 * self.0 as usize + 1
    }

    /// (l + 1)(l + 2) / 2
    pub fn n_cartesian(&self) -> usize {
        let l = self.0 as usize;
        (l + 1) * (l + 2) / 2
    }
}

/// One contracted shell in the form the integral library consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub l: AngularMomentum,
    pub exponents: Vec<Real>,
    pub coefficients: Vec<Real>,
    pub origin: Vector3<f64>,
    // spherical harmonics when true, cartesian components otherwise
    pub pure: bool,
}

impl Shell {
    pub fn n_functions(&self) -> usize {
        if self.pure {
            self.l.n_spherical()
        } else {
            self.l.n_cartesian()
        }
    }
}

/// Total number of basis functions, i.e. the dimension of the integral matrices.
pub fn n_basis_functions(shells: &[Shell]) -> usize {
    shells.iter().map(Shell::n_functions).sum()
}

impl BasisSpecification {
    /// Expand the record into shells centred at `origin`.
    ///
    /// `basis_format[l]` consecutive coefficient groups belong to angular
    /// momentum `l`; each group is paired with the shared exponents.
    pub fn shells(&self, origin: Vector3<f64>, pure: bool) -> Result<Vec<Shell>> {
        self.validate()?;

        let mut groups = self.coefficients().iter();
        let mut shells = Vec::with_capacity(self.n_contracted());
        for (l, &count) in self.basis_format().iter().enumerate() {
            if count == 0 {
                continue;
            }
            let momentum = AngularMomentum::from_l(l as u32).ok_or_else(|| {
                Error::inconsistent(
                    self.symbol(),
                    format!("angular momentum l = {l} is beyond the supported shells"),
                )
            })?;
            for _ in 0..count {
                // validate() guarantees one group per declared shell
                let Some(group) = groups.next() else { break };
                shells.push(Shell {
                    l: momentum,
                    exponents: self.exponents().to_vec(),
                    coefficients: group.clone(),
                    origin,
                    pure,
                });
            }
        }

        Ok(shells)
    }

    /// Shell composition as a label, e.g. `"2s1p"`.
    pub fn shell_summary(&self) -> String {
        self.basis_format()
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .map(|(l, n)| match AngularMomentum::from_l(l as u32) {
                Some(m) => format!("{n}{}", m.label()),
                None => format!("{n}[l={l}]"),
            })
            .collect()
    }
}
