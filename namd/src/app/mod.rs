mod geometry;
mod report;
mod runner;

pub use geometry::{build_geometry, Geometry};
pub use runner::{run_frames, RunSummary};

use crate::config::{Args, Config};
use crate::integrals::IntegralEngine;
use crate::io::{load_basis_library, setup_output};
use crate::store::MatrixStore;
use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

pub struct NamdApplication {
    args: Args,
    config: Config,
}

impl NamdApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = Config::from_file(&args.config_file)?;
        Ok(Self { args, config })
    }

    pub fn new(args: Args, config: Config) -> Self {
        Self { args, config }
    }

    /// Run with logging set up from the command-line arguments.
    pub fn run(self) -> Result<RunSummary> {
        setup_output(self.args.output.as_ref(), self.args.verbose)?;
        info!("Configuration loaded:\n{:?}", self.config);
        self.execute(None)
    }

    /// Run the workflow, evaluating missing matrices with `engine` if given.
    pub fn execute(&self, engine: Option<&dyn IntegralEngine>) -> Result<RunSummary> {
        let basis_name = self
            .args
            .basis_name
            .as_deref()
            .unwrap_or(&self.config.basis_name);
        if self.args.basis_name.is_some() {
            info!("Overriding basis_name with: {}", basis_name);
        }

        let library = load_basis_library(&self.config.path_basis)?;
        let geometry = build_geometry(&self.config, self.args.point)?;
        let store = MatrixStore::new(self.config.path_store());

        run_frames(&geometry, &self.config, basis_name, &library, &store, engine)
    }
}
