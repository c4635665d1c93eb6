//! Overlap and multipole matrices along a trajectory.
//!
//! A matrix set is looked up in the [`MatrixStore`] first; it is only
//! evaluated (and then stored) when the store does not have it yet.

use crate::integrals::{evaluate, IntegralEngine};
use crate::molecule::{Molecule, ANGSTROM_TO_BOHR};
use crate::store::MatrixStore;
use basis::matrix::Real;
use basis::{BasisLibrary, Matrix};
use color_eyre::eyre::{eyre, Result, WrapErr};
use nalgebra::Vector3;
use ndarray::{Array3, ArrayView2, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultipoleKind {
    Overlap,
    Dipole,
    Quadrupole,
}

impl MultipoleKind {
    pub const ALL: [MultipoleKind; 3] = [Self::Overlap, Self::Dipole, Self::Quadrupole];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Overlap => "overlap",
            Self::Dipole => "dipole",
            Self::Quadrupole => "quadrupole",
        }
    }

    /// Cartesian powers (e, f, g) of x, y, z for each component.
    pub fn components(&self) -> &'static [[u32; 3]] {
        match self {
            Self::Overlap => &[[0, 0, 0]],
            Self::Dipole => &[[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            Self::Quadrupole => &[[2, 0, 0], [0, 2, 0], [0, 0, 2]],
        }
    }
}

impl fmt::Display for MultipoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MultipoleKind {
    type Err = color_eyre::eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| eyre!("Unknown multipole '{}' (expected overlap, dipole or quadrupole)", s))
    }
}

/// Everything needed to turn a geometry into integrals.
pub struct MultipoleContext<'a> {
    pub project_name: &'a str,
    pub library: &'a BasisLibrary,
    pub basis_name: &'a str,
    pub spherical: bool,
}

/// Store path of the `kind` matrices for trajectory point `point`.
pub fn multipole_path(project_name: &str, point: usize, kind: MultipoleKind) -> String {
    format!("{project_name}/multipole/point_{point}/{kind}")
}

/// Retrieve the `kind` matrices of trajectory point `point`, computing and
/// storing them if they are not stored yet.
pub fn get_multipole_matrix(
    point: usize,
    molecule: &Molecule,
    ctx: &MultipoleContext<'_>,
    kind: MultipoleKind,
    store: &MatrixStore,
    engine: Option<&dyn IntegralEngine>,
) -> Result<Vec<Matrix>> {
    let path = multipole_path(ctx.project_name, point, kind);

    if store.contains(&path) {
        info!("retrieving multipole: {} from the store", kind);
        return store.retrieve(&path);
    }

    let engine = engine.ok_or_else(|| {
        eyre!(
            "{} matrices for point {} are not stored and no integral engine is available",
            kind,
            point
        )
    })?;

    info!("computing multipole: {}", kind);
    let matrices = compute_matrix_multipole(molecule, ctx, kind, engine)?;
    store.store(&path, &matrices)?;
    Ok(matrices)
}

/// Evaluate every component of `kind` for `molecule`.
///
/// Multipoles are taken about the centre of mass; the overlap does not depend
/// on the origin.
pub fn compute_matrix_multipole(
    molecule: &Molecule,
    ctx: &MultipoleContext<'_>,
    kind: MultipoleKind,
    engine: &dyn IntegralEngine,
) -> Result<Vec<Matrix>> {
    let shells = molecule.shells(ctx.library, ctx.basis_name, ctx.spherical)?;
    let origin = match kind {
        MultipoleKind::Overlap => Vector3::zeros(),
        _ => molecule.center_of_mass()? * ANGSTROM_TO_BOHR,
    };

    kind.components()
        .par_iter()
        .map(|&powers| evaluate(engine, &shells, origin, powers))
        .collect()
}

/// Stack same-shaped matrices along a new leading axis.
pub fn stack_components(matrices: &[Matrix]) -> Result<Array3<Real>> {
    let views: Vec<ArrayView2<'_, Real>> = matrices.iter().map(|m| m.view()).collect();
    ndarray::stack(Axis(0), &views).wrap_err("Multipole components differ in shape")
}
