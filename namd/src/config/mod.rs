//! Configuration management for basis assembly and multipole workflows
//!
//! This module handles the YAML input structures, defaults, and validation.

mod args;

pub use args::Args;

use crate::multipole::MultipoleKind;
use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub project_name: String,
    /// Basis-set family, e.g. DZVP-MOLOPT-SR-GTH
    pub basis_name: String,
    /// Basis library file (JSON, or pickle for any other extension)
    pub path_basis: String,
    /// Root directory of the matrix store
    pub path_store: Option<String>,
    pub geometry: Option<Vec<AtomConfig>>,
    pub path_traj_xyz: Option<String>,
    pub multipoles: Option<Vec<MultipoleKind>>,
    /// Spherical (true) or cartesian (false) basis functions
    pub spherical: Option<bool>,
}

/// Atomic position configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AtomConfig {
    pub atomic_number: i64,
    /// Position in Å
    pub coords: [f64; 3],
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Unable to read configuration file: {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config = serde_yml::from_str::<Config>(content)
            .wrap_err("Failed to parse configuration file")?
            .with_defaults();
        config.validate()?;
        Ok(config)
    }

    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        if self.path_store.is_none() {
            self.path_store = Some(format!("{}_store", self.project_name));
        }
        if self.multipoles.is_none() {
            self.multipoles = Some(vec![MultipoleKind::Overlap]);
        }
        if self.spherical.is_none() {
            self.spherical = Some(true);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(eyre!("project_name must not be empty"));
        }
        if self.project_name.contains(['/', '\\']) {
            return Err(eyre!("project_name must not contain path separators"));
        }
        if self.basis_name.trim().is_empty() {
            return Err(eyre!("basis_name must not be empty"));
        }
        if self.path_basis.trim().is_empty() {
            return Err(eyre!("path_basis must not be empty"));
        }

        match (&self.geometry, &self.path_traj_xyz) {
            (Some(_), Some(_)) => {
                return Err(eyre!("Give either geometry or path_traj_xyz, not both"));
            }
            (None, None) => return Err(eyre!("No geometry: set geometry or path_traj_xyz")),
            (Some(atoms), None) if atoms.is_empty() => {
                return Err(eyre!("geometry must contain at least one atom"));
            }
            _ => {}
        }

        if let Some(atoms) = &self.geometry {
            if let Some(atom) = atoms.iter().find(|a| a.coords.iter().any(|c| !c.is_finite())) {
                return Err(eyre!("Non-finite coordinates for atom {}", atom.atomic_number));
            }
        }

        Ok(())
    }

    pub fn path_store(&self) -> &str {
        self.path_store.as_deref().unwrap_or(".")
    }

    pub fn multipoles(&self) -> &[MultipoleKind] {
        self.multipoles.as_deref().unwrap_or(&[])
    }

    pub fn spherical(&self) -> bool {
        self.spherical.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WATER: &str = r#"
project_name: water
basis_name: DZVP-MOLOPT-SR-GTH
path_basis: basis.json
geometry:
  - atomic_number: 8
    coords: [0.0, 0.0, 0.117]
  - atomic_number: 1
    coords: [0.0, 0.757, -0.469]
  - atomic_number: 1
    coords: [0.0, -0.757, -0.469]
multipoles: [overlap, dipole]
"#;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml(WATER).unwrap();
        assert_eq!(config.path_store(), "water_store");
        assert!(config.spherical());
        assert_eq!(config.multipoles(), &[MultipoleKind::Overlap, MultipoleKind::Dipole]);
        assert_eq!(config.geometry.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_yaml(WATER).unwrap();
        assert!(config.validate().is_ok());

        config.path_traj_xyz = Some("traj.xyz".to_string());
        assert!(config.validate().is_err());

        config.geometry = None;
        assert!(config.validate().is_ok());

        config.path_traj_xyz = None;
        assert!(config.validate().is_err());

        config.geometry = Some(vec![]);
        assert!(config.validate().is_err());

        let mut config = Config::from_yaml(WATER).unwrap();
        config.basis_name = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::from_yaml(WATER).unwrap();
        config.project_name = "a/b".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_multipole_is_rejected() {
        let yaml = WATER.replace("[overlap, dipole]", "[octupole]");
        assert!(Config::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_file_io() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(WATER.as_bytes()).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.project_name, "water");
        assert!(Config::from_file("does/not/exist.yaml").is_err());
    }
}
