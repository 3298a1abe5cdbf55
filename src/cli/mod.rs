use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod electrodes;
mod info;
mod transform;

pub use config::Config;

/// echemtab - quantity-safe transformations of electrochemistry data packages
#[derive(Parser)]
#[command(name = "echemtab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file (defaults to ./echemtab.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Express fields in other units
    Rescale {
        /// Package descriptor (.json) or a directory of packages
        #[arg(value_name = "PACKAGE")]
        package: PathBuf,

        /// Target unit of a field, e.g. `j=uA / cm2` (repeatable)
        #[arg(short, long = "unit", value_name = "FIELD=UNIT", value_parser = parse_assignment)]
        units: Vec<(String, String)>,

        /// Rescale to the units of the original figure
        #[arg(long, conflicts_with = "units")]
        original: bool,

        /// Output directory (defaults to the package's directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Add a constant offset to a field
    Offset {
        /// Package descriptor (.json) or a directory of packages
        #[arg(value_name = "PACKAGE")]
        package: PathBuf,

        /// Field to shift
        #[arg(short, long)]
        field: String,

        /// Offset to add
        #[arg(long, allow_negative_numbers = true)]
        value: f64,

        /// Unit of the offset (defaults to the field's unit)
        #[arg(long)]
        unit: Option<String>,

        /// Output directory (defaults to the package's directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert potentials to another reference electrode scale
    Reference {
        /// Package descriptor (.json) or a directory of packages
        #[arg(value_name = "PACKAGE")]
        package: PathBuf,

        /// Target reference electrode, e.g. SHE or RHE
        #[arg(long, value_name = "REF")]
        to: String,

        /// Potential field (defaults to E, then U)
        #[arg(short, long)]
        field: Option<String>,

        /// pH for RHE conversions (defaults to the electrolyte pH)
        #[arg(long)]
        ph: Option<f64>,

        /// Output directory (defaults to the package's directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Normalize currents to another scan rate
    ScanRate {
        /// Package descriptor (.json) or a directory of packages
        #[arg(value_name = "PACKAGE")]
        package: PathBuf,

        /// New scan rate
        #[arg(long)]
        value: f64,

        /// Unit of the new scan rate, e.g. `mV / s`
        #[arg(long)]
        unit: String,

        /// Current field (defaults to j, then I)
        #[arg(short, long)]
        field: Option<String>,

        /// Output directory (defaults to the package's directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Shift between two reference electrode scales
    Shift {
        /// Source reference electrode
        #[arg(long, value_name = "REF")]
        from: String,

        /// Target reference electrode
        #[arg(long, value_name = "REF")]
        to: String,

        /// Potential vs the source electrode in V; prints the converted value
        #[arg(long, allow_negative_numbers = true)]
        potential: Option<f64>,

        /// pH for RHE conversions
        #[arg(long)]
        ph: Option<f64>,
    },

    /// List the known reference electrodes
    Electrodes,

    /// Display information about a package
    Info {
        /// Package descriptor (.json)
        #[arg(value_name = "PACKAGE")]
        package: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rescale {
            package,
            units,
            original,
            output,
        } => {
            if !original && units.is_empty() {
                anyhow::bail!("Either --unit or --original is required");
            }
            transform::run(&package, output, &config, |entry| {
                if original {
                    entry.rescale_to_original()
                } else {
                    entry.rescale(units.iter().cloned())
                }
            })
        }
        Commands::Offset {
            package,
            field,
            value,
            unit,
            output,
        } => transform::run(&package, output, &config, |entry| {
            entry.add_offset(&field, value, unit.as_deref())
        }),
        Commands::Reference {
            package,
            to,
            field,
            ph,
            output,
        } => {
            let field = field.or_else(|| config.conversion.potential_field.clone());
            transform::run(&package, output, &config, |entry| {
                let ph = ph
                    .or_else(|| entry.metadata().ph())
                    .or(config.conversion.ph);
                entry.rescale_reference(field.as_deref(), &to, ph)
            })
        }
        Commands::ScanRate {
            package,
            value,
            unit,
            field,
            output,
        } => {
            let field = field.or_else(|| config.conversion.current_field.clone());
            transform::run(&package, output, &config, |entry| {
                entry.rescale_scan_rate(field.as_deref(), value, &unit)
            })
        }
        Commands::Shift {
            from,
            to,
            potential,
            ph,
        } => electrodes::shift(&from, &to, potential, ph.or(config.conversion.ph)),
        Commands::Electrodes => electrodes::list(),
        Commands::Info { package } => info::run(&package),
    }
}

/// Parse `FIELD=UNIT`
fn parse_assignment(value: &str) -> Result<(String, String)> {
    let (field, unit) = value
        .split_once('=')
        .ok_or_else(|| anyhow!("expected FIELD=UNIT, got '{}'", value))?;
    let (field, unit) = (field.trim(), unit.trim());
    if field.is_empty() || unit.is_empty() {
        anyhow::bail!("expected FIELD=UNIT, got '{}'", value);
    }
    Ok((field.to_string(), unit.to_string()))
}
