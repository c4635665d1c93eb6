//! End-to-end checks of the symbol -> record -> shell -> matrix path.

use basis::matrix::{from_row_major, to_row_major};
use basis::shell::n_basis_functions;
use basis::{resolve, BasisLibrary, BasisSpecification, Error, Matrix};
use nalgebra::Vector3;

#[test]
fn test_reference_symbols() {
    assert_eq!(resolve(1).unwrap().as_str(), "h");
    assert_eq!(resolve(6).unwrap().as_str(), "c");
    assert_eq!(resolve(96).unwrap().as_str(), "cm");
    assert!(matches!(resolve(97), Err(Error::UnsupportedElement(97))));
}

#[test]
fn test_carbon_record_read_back() {
    let record = BasisSpecification::new(
        resolve(6).unwrap().as_str(),
        vec![vec![0.5, 0.3], vec![0.2]],
        vec![1.2, 0.8, 0.4],
        vec![2, 1],
    );
    let copy = record.clone();
    let (symbol, coefficients, exponents, basis_format) = record.into_parts();
    assert_eq!(symbol, "c");
    assert_eq!(coefficients, vec![vec![0.5, 0.3], vec![0.2]]);
    assert_eq!(exponents, vec![1.2, 0.8, 0.4]);
    assert_eq!(basis_format, vec![2, 1]);
    assert_eq!(copy.symbol(), "c");
}

#[test]
fn test_water_dimension_from_library() {
    let library = BasisLibrary::from_json_str(
        r#"[
        {"basis": "DZVP-MOLOPT-GTH", "symbol": "o",
         "coefficients": [[0.1, 0.2], [0.3, 0.4], [0.5, 0.6], [0.7, 0.8], [1.0, 0.0]],
         "exponents": [6.2, 1.1], "basis_format": [2, 2, 1]},
        {"basis": "DZVP-MOLOPT-GTH", "symbol": "h",
         "coefficients": [[0.3, 0.7], [0.0, 1.0], [1.0, 0.0]],
         "exponents": [4.5, 0.8], "basis_format": [2, 1]}
    ]"#,
    )
    .unwrap();

    let mut shells = Vec::new();
    for z in [8, 1, 1] {
        let record = library.lookup(z, "DZVP-MOLOPT-GTH").unwrap();
        shells.extend(record.shells(Vector3::zeros(), true).unwrap());
    }
    // O: 2s 2p 1d = 2 + 6 + 5, H: 2s 1p = 2 + 3
    assert_eq!(n_basis_functions(&shells), 13 + 5 + 5);
}

#[test]
fn test_engine_buffer_becomes_matrix() {
    let buffer = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let m: Matrix = from_row_major(2, 3, buffer).unwrap();
    assert_eq!(m[[0, 2]], 3.0);
    assert_eq!(m[[1, 0]], 4.0);
    assert_eq!(to_row_major(&m), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}
