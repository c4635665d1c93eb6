//! Basis library loading utilities

use basis::BasisLibrary;
use color_eyre::eyre::{Result, WrapErr};
use std::path::Path;
use tracing::info;

/// Load a basis library written by the basis-file parser.
///
/// `.json` files hold a list of records; anything else is read as pickle.
pub fn load_basis_library(path: impl AsRef<Path>) -> Result<BasisLibrary> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let library = if is_json {
        BasisLibrary::from_json_file(path)
    } else {
        BasisLibrary::load_from_file(path)
    }
    .wrap_err_with(|| format!("Failed to load basis library: {}", path.display()))?;

    info!(
        "Loaded {} basis records ({}) from {}",
        library.len(),
        library.basis_names().join(", "),
        path.display()
    );
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basis::BasisSpecification;

    #[test]
    fn test_json_and_pickle_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = BasisLibrary::new();
        library
            .insert("SZV", BasisSpecification::new("h", vec![vec![1.0]], vec![0.5], vec![1]))
            .unwrap();

        let pickle = dir.path().join("basis.pkl");
        library.save_to_file(&pickle).unwrap();
        assert_eq!(load_basis_library(&pickle).unwrap(), library);

        let json = dir.path().join("basis.JSON");
        std::fs::write(
            &json,
            r#"[{"basis": "SZV", "symbol": "h", "coefficients": [[1.0]], "exponents": [0.5], "basis_format": [1]}]"#,
        )
        .unwrap();
        assert_eq!(load_basis_library(&json).unwrap(), library);

        assert!(load_basis_library(dir.path().join("missing.json")).is_err());
    }
}
