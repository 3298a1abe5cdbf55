//! # echemtab
//!
//! Command-line access to the transformations of the `echemtab` library.
//!
//! ## Usage
//!
//! ```bash
//! # Express current densities in µA/cm² and potentials in mV
//! echemtab rescale entry.json --unit "j=uA / cm2" --unit E=mV
//!
//! # Convert potentials to the RHE scale at pH 13
//! echemtab reference entry.json --to RHE --ph 13
//!
//! # Normalize every package of a directory to 100 mV/s
//! echemtab scan-rate data/ --value 100 --unit "mV / s" -o rescaled/
//!
//! # Shift between two reference scales
//! echemtab shift --from Ag/AgCl-sat --to SHE --potential 0.55
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{dispatch, init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    dispatch(cli)
}
