use anyhow::{Context, Result};
use std::path::Path;

use echemtab::package;

/// Display information about a package
pub fn run(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    let entry = package::read_entry(path).context("Failed to read package")?;
    let metadata = entry.metadata();
    let table = entry.table();

    println!("Entry Information");
    println!("=================");
    println!("Identifier: {}", entry.identifier());
    if let Some(label) = metadata.source.as_ref().and_then(|s| s.figure_label()) {
        println!("Source: {}", label);
    }
    if let Some(ph) = metadata.ph() {
        println!("pH: {}", ph);
    }
    if let Some(rate) = metadata.scan_rate() {
        println!("Scan rate: {} {}", rate.value, rate.unit);
    }
    println!("Rows: {}", table.len());
    println!();

    println!("Fields:");
    for (i, field) in table.fields().iter().enumerate() {
        let mut line = format!(
            "  {:3}. {} [{}]",
            i + 1,
            field.name,
            field.unit.as_deref().unwrap_or("-")
        );
        if let Some(reference) = &field.reference {
            line.push_str(&format!(" vs {}", reference));
        }
        if let Some(offset) = &field.offset {
            line.push_str(&format!(", offset {} {}", offset.value, offset.unit));
        }
        if let Some(factor) = &field.scaling_factor {
            line.push_str(&format!(", scaled by {}", factor.value));
        }
        println!("{}", line);
    }

    Ok(())
}
