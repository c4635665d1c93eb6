use crate::molecule::Molecule;
use basis::shell::n_basis_functions;
use basis::{BasisSpecification, Matrix, Shell};
use tracing::info;

pub fn report_basis(point: usize, molecule: &Molecule, records: &[&BasisSpecification], shells: &[Shell]) {
    info!("Point {}: {} atoms", point, molecule.len());
    for (idx, (atom, record)) in molecule.atoms().iter().zip(records).enumerate() {
        info!(
            "  Atom {:>3} {:>2}: {:<8} {} primitives at [{:.6}, {:.6}, {:.6}]",
            idx + 1,
            atom.symbol,
            record.shell_summary(),
            record.exponents().len(),
            atom.coords.x,
            atom.coords.y,
            atom.coords.z
        );
    }
    info!(
        "  {} shells, {} basis functions",
        shells.len(),
        n_basis_functions(shells)
    );
}

pub fn report_matrices(name: &str, matrices: &[Matrix]) {
    for (idx, m) in matrices.iter().enumerate() {
        let (rows, cols) = m.dim();
        let trace: f64 = m.diag().sum();
        info!("  {}[{}]: {}x{} trace = {:.8}", name, idx, rows, cols, trace);
    }
}
