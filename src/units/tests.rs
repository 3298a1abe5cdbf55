use super::*;

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_current_density_factor() {
    assert_close(factor("A / m2", "uA / cm2").unwrap(), 100.0);
    assert_close(factor("mA / cm2", "A / m2").unwrap(), 10.0);
    assert_close(factor("A m-2", "A / m2").unwrap(), 1.0);
}

#[test]
fn test_potential_and_time_factors() {
    assert_close(factor("V", "mV").unwrap(), 1000.0);
    assert_close(factor("mV", "V").unwrap(), 1e-3);
    assert_close(factor("h", "s").unwrap(), 3600.0);
    assert_close(factor("min", "s").unwrap(), 60.0);
    assert_close(factor("mV / s", "V / s").unwrap(), 1e-3);
    assert_close(factor("mV s-1", "V / s").unwrap(), 1e-3);
}

#[test]
fn test_exponent_notations() {
    let a = parse("cm2").unwrap();
    let b = parse("cm^2").unwrap();
    let c = parse("cm**2").unwrap();
    assert_eq!(a.dimension, b.dimension);
    assert_eq!(b.dimension, c.dimension);
    assert_close(a.scale, 1e-4);
    assert_close(c.scale, 1e-4);
}

#[test]
fn test_derived_units_reduce_to_base_dimensions() {
    let power_density = parse("A V / m2").unwrap();
    let watts = parse("W / m2").unwrap();
    assert!(power_density.is_compatible(&watts));

    let charge = parse("A s").unwrap();
    assert_eq!(charge.dimension, parse("C").unwrap().dimension);

    assert_eq!(parse("kg").unwrap().dimension, Dimension::MASS);
    assert_close(parse("kg").unwrap().scale, 1.0);
}

#[test]
fn test_exact_symbols_win_over_prefixes() {
    assert_eq!(parse("min").unwrap().dimension, Dimension::TIME);
    assert_eq!(parse("mol").unwrap().dimension, Dimension::AMOUNT);
    assert_close(parse("mM").unwrap().scale, 1.0);
    assert_close(parse("MV").unwrap().scale, 1e6);
}

#[test]
fn test_micro_spellings() {
    assert_close(factor("µA", "A").unwrap(), 1e-6);
    assert_close(factor("μA", "A").unwrap(), 1e-6);
    assert_close(factor("uA", "A").unwrap(), 1e-6);
}

#[test]
fn test_dimensionless() {
    assert!(parse("").unwrap().dimension.is_dimensionless());
    assert!(parse("1").unwrap().dimension.is_dimensionless());
    assert!(parse("dimensionless").unwrap().dimension.is_dimensionless());
    assert_close(factor("%", "").unwrap(), 0.01);
    assert_eq!(parse("1 / s").unwrap().dimension, parse("Hz").unwrap().dimension);
}

#[test]
fn test_incompatible_units() {
    let err = factor("V", "s").unwrap_err();
    assert!(matches!(err, UnitError::UnitMismatch { .. }));
    assert!(!compatible("A / m2", "A"));
    assert!(compatible("A / m2", "mA / cm2"));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(parse("furlong"), Err(UnitError::Parse { .. })));
    assert!(matches!(parse("A /"), Err(UnitError::Parse { .. })));
    assert!(matches!(parse("10"), Err(UnitError::Parse { .. })));
    assert!(matches!(parse("mmin"), Err(UnitError::Parse { .. })));
    assert!(!compatible("furlong", "m"));
}

#[test]
fn test_dimension_display() {
    assert_eq!(Dimension::VOLTAGE.to_string(), "m2 kg s-3 A-1");
    assert_eq!(Dimension::DIMENSIONLESS.to_string(), "dimensionless");
}

#[test]
fn test_convert_value() {
    assert_close(convert(250.0, "mV", "V").unwrap(), 0.25);
}

#[test]
fn test_exponent_overflow_is_an_error() {
    assert!(matches!(
        factor("m^100 m^100", "m"),
        Err(UnitError::Parse { .. })
    ));
    assert!(matches!(parse("1 / m^-128"), Err(UnitError::Parse { .. })));
    assert!(matches!(parse("m^127 / m^-1"), Err(UnitError::Parse { .. })));
    assert!(matches!(parse("km^200"), Err(UnitError::Parse { .. })));
    assert!(matches!(parse("Ym^100 Ym^100"), Err(UnitError::Parse { .. })));
    assert_eq!(parse("m^127").unwrap().dimension.length, 127);
}

#[test]
fn test_checked_dimension_arithmetic() {
    let voltage = Dimension::VOLTAGE;
    assert_eq!(
        voltage.checked_div(voltage),
        Some(Dimension::DIMENSIONLESS)
    );
    assert_eq!(
        Dimension::TIME.checked_mul(Dimension::CURRENT),
        parse("C").ok().map(|u| u.dimension)
    );
    assert_eq!(Dimension::LENGTH.checked_powi(-128).map(|d| d.length), Some(-128));
    assert_eq!(Dimension::LENGTH.checked_powi(-128).and_then(|d| d.checked_powi(-1)), None);
}
