//! Basis-set data model for the NAMD integral layer.
//!
//! - [`element`]: atomic number to lowercase element symbol registry
//! - [`record`]: per-atom CP2K basis specification
//! - [`matrix`]: scalar type and row-major matrix binding for integrals
//! - [`shell`]: expansion of records into integral-library shells
//! - [`library`]: basis records keyed by element and basis-set name

pub mod element;
pub mod error;
pub mod library;
pub mod matrix;
pub mod record;
pub mod shell;

pub use element::{resolve, ElementSymbol, MAX_ATOMIC_NUMBER};
pub use error::{Error, Result};
pub use library::BasisLibrary;
pub use matrix::{Matrix, MatrixView, Real};
pub use record::BasisSpecification;
pub use shell::{AngularMomentum, Shell};
