//! Persistent store for computed integral matrices.
//!
//! Datasets are addressed by slash-separated paths such as
//! `project/multipole/point_3/dipole`; each dataset is one pickle file under
//! the store root holding a list of row-major matrices.

use basis::matrix::{Matrix, StoredMatrix};
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const EXTENSION: &str = "pkl";

#[derive(Debug, Clone)]
pub struct MatrixStore {
    root: PathBuf,
}

impl MatrixStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, dataset: &str) -> Result<PathBuf> {
        let relative = Path::new(dataset.trim_matches('/'));
        let valid = relative.components().count() > 0
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(eyre!("Invalid dataset path: '{}'", dataset));
        }
        let mut file = self.root.join(relative).into_os_string();
        file.push(".");
        file.push(EXTENSION);
        Ok(PathBuf::from(file))
    }

    pub fn contains(&self, dataset: &str) -> bool {
        self.file_for(dataset).map(|f| f.is_file()).unwrap_or(false)
    }

    pub fn retrieve(&self, dataset: &str) -> Result<Vec<Matrix>> {
        let path = self.file_for(dataset)?;
        let mut file = File::open(&path)
            .wrap_err_with(|| format!("Unable to open dataset {}", path.display()))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;

        let stored: Vec<StoredMatrix> = serde_pickle::from_slice(&buffer, serde_pickle::DeOptions::new())
            .wrap_err_with(|| format!("Corrupted dataset {}", path.display()))?;
        stored
            .into_iter()
            .map(|m| Matrix::try_from(m).wrap_err_with(|| format!("Corrupted dataset {dataset}")))
            .collect()
    }

    pub fn store(&self, dataset: &str, matrices: &[Matrix]) -> Result<()> {
        let path = self.file_for(dataset)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Unable to create {}", parent.display()))?;
        }

        let stored: Vec<StoredMatrix> = matrices.iter().map(StoredMatrix::from).collect();
        let serialized = serde_pickle::to_vec(&stored, serde_pickle::SerOptions::new())?;

        // Written beside the target and renamed, so a dataset is either whole or absent.
        let parent = path.parent().unwrap_or(self.root.as_path());
        let mut file = NamedTempFile::new_in(parent)
            .wrap_err_with(|| format!("Unable to create dataset {}", path.display()))?;
        file.write_all(&serialized)
            .wrap_err_with(|| format!("Unable to write dataset {}", path.display()))?;
        file.persist(&path)
            .wrap_err_with(|| format!("Unable to commit dataset {}", path.display()))?;
        debug!("stored {} matrices in {}", matrices.len(), path.display());
        Ok(())
    }
}
