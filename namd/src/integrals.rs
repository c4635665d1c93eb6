//! Boundary to the external integral library.

use basis::matrix::{from_row_major, Matrix, Real};
use basis::shell::n_basis_functions;
use basis::Shell;
use color_eyre::eyre::{Result, WrapErr};
use nalgebra::Vector3;

/// An integral library able to evaluate cartesian multipole integrals
/// ⟨ψi| (x-Ox)^e (y-Oy)^f (z-Oz)^g |ψj⟩ over a list of shells.
///
/// Implementations return the `nbf x nbf` result as a flat row-major buffer,
/// `nbf` being [`n_basis_functions`] of `shells`. Powers `[0, 0, 0]` give the
/// overlap matrix.
pub trait IntegralEngine: Sync {
    fn multipole(&self, shells: &[Shell], origin: Vector3<f64>, powers: [u32; 3]) -> Result<Vec<Real>>;
}

/// Evaluate one multipole component and take the buffer as a [`Matrix`].
pub fn evaluate<E: IntegralEngine + ?Sized>(
    engine: &E,
    shells: &[Shell],
    origin: Vector3<f64>,
    powers: [u32; 3],
) -> Result<Matrix> {
    let nbf = n_basis_functions(shells);
    let buffer = engine.multipole(shells, origin, powers)?;
    from_row_major(nbf, nbf, buffer)
        .wrap_err_with(|| format!("Integral engine returned a malformed {powers:?} matrix"))
}
