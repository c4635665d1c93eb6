use super::geometry::Geometry;
use super::report::{report_basis, report_matrices};
use crate::config::Config;
use crate::integrals::IntegralEngine;
use crate::multipole::{get_multipole_matrix, multipole_path, MultipoleContext};
use crate::store::MatrixStore;
use basis::shell::n_basis_functions;
use basis::BasisLibrary;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

/// What a run produced, per processed trajectory point.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub points: Vec<usize>,
    pub n_basis_functions: Vec<usize>,
    /// Matrix sets found in or added to the store
    pub available: usize,
    /// Matrix sets neither stored nor computable
    pub missing: usize,
}

pub fn run_frames(
    geometry: &Geometry,
    config: &Config,
    basis_name: &str,
    library: &BasisLibrary,
    store: &MatrixStore,
    engine: Option<&dyn IntegralEngine>,
) -> Result<RunSummary> {
    let ctx = MultipoleContext {
        project_name: &config.project_name,
        library,
        basis_name,
        spherical: config.spherical(),
    };

    let mut summary = RunSummary::default();
    for (point, molecule) in &geometry.frames {
        let records = molecule
            .assemble_basis(library, basis_name)
            .wrap_err_with(|| format!("Trajectory point {point}"))?;
        let shells = molecule
            .shells(library, basis_name, ctx.spherical)
            .wrap_err_with(|| format!("Trajectory point {point}"))?;
        report_basis(*point, molecule, &records, &shells);

        summary.points.push(*point);
        summary.n_basis_functions.push(n_basis_functions(&shells));

        for &kind in config.multipoles() {
            let path = multipole_path(ctx.project_name, *point, kind);
            if engine.is_none() && !store.contains(&path) {
                warn!("{} not found in {} and no integral engine is linked", path, store.root().display());
                summary.missing += 1;
                continue;
            }
            let matrices = get_multipole_matrix(*point, molecule, &ctx, kind, store, engine)?;
            report_matrices(kind.name(), &matrices);
            summary.available += 1;
        }
    }

    info!(
        "Processed {} points: {} matrix sets available, {} missing",
        summary.points.len(),
        summary.available,
        summary.missing
    );
    Ok(summary)
}
