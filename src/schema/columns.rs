/// Canonical field names used by cyclic voltammograms
/// Time
pub const TIME: &str = "t";
/// Electrode potential against a reference scale
pub const POTENTIAL: &str = "E";
/// Cell voltage / potential without a well-defined reference
pub const VOLTAGE: &str = "U";
/// Current density
pub const CURRENT_DENSITY: &str = "j";
/// Absolute current
pub const CURRENT: &str = "I";

/// Name of the potential field used when none is given: `E`, else `U`.
pub fn potential_fallbacks() -> &'static [&'static str] {
    &[POTENTIAL, VOLTAGE]
}

/// Name of the current field used when none is given: `j`, else `I`.
pub fn current_fallbacks() -> &'static [&'static str] {
    &[CURRENT_DENSITY, CURRENT]
}
