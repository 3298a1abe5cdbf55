//! # Unit System
//!
//! Parses unit strings as they appear in field descriptors (`"V"`,
//! `"uA / cm2"`, `"mV / s"`, ...) and computes the scalar factor between two
//! dimensionally compatible units.
//!
//! A [`Unit`] is reduced to a scale relative to the coherent SI unit and the
//! exponents of the SI base dimensions. Two units are compatible exactly when
//! their dimensions agree; affine units (degree Celsius) are not supported.
//!
//! ```rust
//! use echemtab::units;
//!
//! let factor = units::factor("A / m2", "uA / cm2")?;
//! assert!((factor - 100.0).abs() < 1e-9);
//!
//! assert!(units::factor("V", "s").is_err());
//! # Ok::<(), echemtab::units::UnitError>(())
//! ```

mod dimension;
mod error;
mod parse;

#[cfg(test)]
mod tests;

pub use dimension::Dimension;
pub use error::UnitError;
pub use parse::parse;

/// A parsed unit: scale relative to SI and its physical dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Multiplier that converts a value in this unit to coherent SI
    pub scale: f64,
    /// SI base dimension exponents
    pub dimension: Dimension,
}

impl Unit {
    /// The dimensionless unit with scale 1
    pub fn dimensionless() -> Self {
        Self {
            scale: 1.0,
            dimension: Dimension::DIMENSIONLESS,
        }
    }

    /// Whether values in `self` can be expressed in `other`
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Factor that converts a value in `self` into `other`
    pub fn factor_to(&self, other: &Unit) -> Option<f64> {
        self.is_compatible(other).then(|| self.scale / other.scale)
    }
}

/// Scalar factor that converts values expressed in `from` into `to`.
///
/// Fails with [`UnitError::UnitMismatch`] when the units have different
/// dimensions, or [`UnitError::Parse`] when either string is not a unit.
pub fn factor(from: &str, to: &str) -> Result<f64, UnitError> {
    let source = parse(from)?;
    let target = parse(to)?;

    source
        .factor_to(&target)
        .ok_or_else(|| UnitError::UnitMismatch {
            from: from.to_string(),
            to: to.to_string(),
            from_dimension: source.dimension.to_string(),
            to_dimension: target.dimension.to_string(),
        })
}

/// Convert a single value between two compatible units
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    Ok(value * factor(from, to)?)
}

/// Whether two unit strings describe the same physical dimension.
///
/// Unparseable units are never compatible.
pub fn compatible(a: &str, b: &str) -> bool {
    match (parse(a), parse(b)) {
        (Ok(a), Ok(b)) => a.is_compatible(&b),
        _ => false,
    }
}
