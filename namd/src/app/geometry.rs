use crate::config::Config;
use crate::io::read_xyz_trajectory;
use crate::molecule::Molecule;
use color_eyre::eyre::{eyre, Result, WrapErr};
use nalgebra::Vector3;
use tracing::info;

/// Geometries to process, as `(trajectory point, molecule)` pairs.
pub struct Geometry {
    pub frames: Vec<(usize, Molecule)>,
}

/// Build the geometries defined in the YAML configuration, either the single
/// `geometry` block or every frame of `path_traj_xyz`.
pub fn build_geometry(config: &Config, only_point: Option<usize>) -> Result<Geometry> {
    info!("Preparing geometry...");

    let mut frames = Vec::new();
    if let Some(atoms) = &config.geometry {
        let numbers: Vec<i64> = atoms.iter().map(|a| a.atomic_number).collect();
        let coords: Vec<Vector3<f64>> = atoms
            .iter()
            .map(|a| Vector3::new(a.coords[0], a.coords[1], a.coords[2]))
            .collect();
        frames.push((0, Molecule::from_atomic_numbers(&numbers, &coords)?));
    } else if let Some(path) = &config.path_traj_xyz {
        for (point, frame) in read_xyz_trajectory(path)?.into_iter().enumerate() {
            if only_point.is_some_and(|p| p != point) {
                continue;
            }
            let molecule = Molecule::from_atomic_numbers(&frame.atomic_numbers, &frame.coords)
                .wrap_err_with(|| format!("Invalid atoms in trajectory point {point}"))?;
            frames.push((point, molecule));
        }
    }

    if let Some(point) = only_point {
        frames.retain(|(p, _)| *p == point);
        if frames.is_empty() {
            return Err(eyre!("Trajectory point {} does not exist", point));
        }
    }
    info!("{} geometries to process", frames.len());

    Ok(Geometry { frames })
}
