use anyhow::{Context, Result};

use echemtab::electrochemistry::{self, Registry};

/// Print every registered reference electrode with its preferred value
pub fn list() -> Result<()> {
    let registry = Registry::global();

    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        println!("{}", style("Reference electrodes").bold().cyan());
        println!("{}", style("====================").cyan());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("Reference electrodes");
        println!("====================");
    }

    for electrode in registry.iter() {
        let preferred = electrode
            .preferred_entry()
            .with_context(|| format!("Registry entry {} is inconsistent", electrode.name))?;
        let alias = electrode
            .alias
            .as_deref()
            .map(|a| format!(" (alias {})", a))
            .unwrap_or_default();
        let value = format!("{:>9.5} {} vs {}", preferred.value, preferred.unit, preferred.vs);

        #[cfg(feature = "colorized_output")]
        println!(
            "  {:<12} {}  [{:?}]  {}{}",
            console::style(&electrode.name).bold(),
            console::style(value).green(),
            preferred.approach,
            electrode.full_name,
            alias
        );

        #[cfg(not(feature = "colorized_output"))]
        println!(
            "  {:<12} {}  [{:?}]  {}{}",
            electrode.name, value, preferred.approach, electrode.full_name, alias
        );
    }

    println!();
    println!(
        "RHE is pH dependent: {:.4} V * pH vs SHE",
        -electrochemistry::NERNST_SLOPE
    );

    Ok(())
}

/// Print the shift between two scales, or a converted potential
pub fn shift(from: &str, to: &str, potential: Option<f64>, ph: Option<f64>) -> Result<()> {
    let shift = electrochemistry::shift(from, to, ph)
        .with_context(|| format!("Cannot shift from {} to {}", from, to))?;

    match potential {
        Some(potential) => println!("{} V vs {} = {} V vs {}", potential, from, potential + shift, to),
        None => println!("{}", shift),
    }

    Ok(())
}
