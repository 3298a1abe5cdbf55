use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use echemtab::collection::Collection;
use echemtab::entry::{Entry, EntryError};
use echemtab::package;

use super::Config;

/// Apply `transform` to a package, or to every package of a directory, and
/// write the results.
///
/// Results go to `output` when given, otherwise next to the input, using the
/// entry identifier plus the configured suffix as basename.
pub fn run<F>(input: &Path, output: Option<PathBuf>, config: &Config, transform: F) -> Result<()>
where
    F: Fn(&Entry) -> Result<Entry, EntryError> + Sync + Send,
{
    if !input.exists() {
        anyhow::bail!("Package does not exist: {}", input.display());
    }

    let (collection, default_dir) = if input.is_dir() {
        let collection = Collection::from_dir(input)
            .with_context(|| format!("Failed to read packages in {}", input.display()))?;
        (collection, input.to_path_buf())
    } else {
        let entry = package::read_entry(input)
            .with_context(|| format!("Failed to read package {}", input.display()))?;
        let dir = input.parent().map(Path::to_path_buf).unwrap_or_default();
        (Collection::new(vec![entry]), dir)
    };

    if collection.is_empty() {
        anyhow::bail!("No packages found in {}", input.display());
    }

    let transformed = collection
        .try_map(transform)
        .context("Transformation failed")?;

    let output = output.unwrap_or(default_dir);
    transformed
        .write_all(&output, config.suffix())
        .with_context(|| format!("Failed to write packages to {}", output.display()))?;

    info!(
        "Wrote {} package(s) to {}",
        transformed.len(),
        output.display()
    );
    for entry in transformed.iter() {
        println!(
            "{}",
            output
                .join(format!("{}{}.json", entry.identifier(), config.suffix()))
                .display()
        );
    }

    Ok(())
}
