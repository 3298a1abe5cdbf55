use log::{debug, warn};

use super::{Approach, ElectrodeError, Registry};

/// Name of the pH-dependent reversible hydrogen electrode scale
pub const RHE: &str = "RHE";

/// Name of the standard hydrogen electrode, the hub of all conversions
pub const SHE: &str = "SHE";

/// Nernst slope at 25 °C in V per pH unit
pub const NERNST_SLOPE: f64 = 0.0591;

impl Registry {
    /// Potential of the named scale vs SHE in V.
    ///
    /// RHE has no fixed value: it sits at `-0.0591 * pH` vs SHE and therefore
    /// requires `ph`. Every other electrode uses its preferred entry.
    pub fn value_vs_she(&self, name: &str, ph: Option<f64>) -> Result<f64, ElectrodeError> {
        let electrode = self.get(name)?;
        if electrode.name == RHE {
            return ph.map(|ph| -NERNST_SLOPE * ph).ok_or_else(|| ElectrodeError::MissingPH {
                from: name.to_string(),
                to: SHE.to_string(),
            });
        }
        electrode.preferred_value()
    }

    /// Shift in V that moves a potential from the `from` scale to `to`.
    ///
    /// Both scales are routed through SHE. A warning is logged when either
    /// endpoint's preferred value is of the generic kind.
    pub fn shift(&self, from: &str, to: &str, ph: Option<f64>) -> Result<f64, ElectrodeError> {
        for name in [from, to] {
            let entry = self.get(name)?.preferred_entry()?;
            if entry.approach == Approach::Generic {
                warn!(
                    "Reference {} is of type 'generic', i.e., the value is not based on experimental or theoretical values",
                    name
                );
            }
        }

        let needs_ph = [from, to]
            .iter()
            .any(|name| self.get(name).map(|e| e.name == RHE).unwrap_or(false));
        if needs_ph && ph.is_none() {
            return Err(ElectrodeError::MissingPH {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let shift = self.value_vs_she(to, ph)? - self.value_vs_she(from, ph)?;
        debug!("Shift from {} to {} (pH {:?}): {} V", from, to, ph, shift);
        Ok(shift)
    }

    /// `value` on the `from` scale re-expressed on the `to` scale
    pub fn convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
        ph: Option<f64>,
    ) -> Result<f64, ElectrodeError> {
        Ok(value + self.shift(from, to, ph)?)
    }
}

/// Shift between two scales using the process-wide registry
pub fn shift(from: &str, to: &str, ph: Option<f64>) -> Result<f64, ElectrodeError> {
    Registry::global().shift(from, to, ph)
}

/// Convert a potential between two scales using the process-wide registry
pub fn convert(value: f64, from: &str, to: &str, ph: Option<f64>) -> Result<f64, ElectrodeError> {
    Registry::global().convert(value, from, to, ph)
}
