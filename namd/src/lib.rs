// Basis assembly and multipole-matrix workflows for NAMD

pub mod app;
pub mod config;
pub mod integrals;
pub mod io;
pub mod molecule;
pub mod multipole;
pub mod store;
