//! Command-line entry point: assemble basis sets for every geometry of the
//! input and collect the stored multipole matrices.

use color_eyre::eyre::Result;
use namd::app::NamdApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    NamdApplication::from_cli()?.run()?;
    Ok(())
}
