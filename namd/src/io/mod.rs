//! Input/Output operations
//!
//! This module handles logging setup, basis library loading and trajectory
//! reading.

mod basis_loader;
mod output;
mod trajectory;

pub use basis_loader::load_basis_library;
pub use output::setup_output;
pub use trajectory::{read_xyz_trajectory, XyzFrame};
