use super::{Dimension, Unit, UnitError};

/// A named unit symbol with its scale relative to the coherent SI unit.
struct Symbol {
    symbol: &'static str,
    scale: f64,
    dimension: Dimension,
    prefixable: bool,
}

const fn sym(symbol: &'static str, scale: f64, dimension: Dimension, prefixable: bool) -> Symbol {
    Symbol {
        symbol,
        scale,
        dimension,
        prefixable,
    }
}

const fn dim(length: i8, mass: i8, time: i8, current: i8) -> Dimension {
    Dimension {
        length,
        mass,
        time,
        current,
        temperature: 0,
        amount: 0,
    }
}

const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

static SYMBOLS: &[Symbol] = &[
    sym("m", 1.0, Dimension::LENGTH, true),
    sym("g", 1e-3, Dimension::MASS, true),
    sym("s", 1.0, Dimension::TIME, true),
    sym("A", 1.0, Dimension::CURRENT, true),
    sym("K", 1.0, Dimension::TEMPERATURE, true),
    sym("mol", 1.0, Dimension::AMOUNT, true),
    sym("V", 1.0, Dimension::VOLTAGE, true),
    sym("W", 1.0, dim(2, 1, -3, 0), true),
    sym("J", 1.0, dim(2, 1, -2, 0), true),
    sym("eV", ELEMENTARY_CHARGE, dim(2, 1, -2, 0), true),
    sym("C", 1.0, dim(0, 0, 1, 1), true),
    sym("Ohm", 1.0, dim(2, 1, -3, -2), true),
    sym("Ω", 1.0, dim(2, 1, -3, -2), true),
    sym("S", 1.0, dim(-2, -1, 3, 2), true),
    sym("F", 1.0, dim(-2, -1, 4, 2), true),
    sym("Hz", 1.0, dim(0, 0, -1, 0), true),
    sym("N", 1.0, dim(1, 1, -2, 0), true),
    sym("Pa", 1.0, dim(-1, 1, -2, 0), true),
    sym("bar", 1e5, dim(-1, 1, -2, 0), true),
    sym("L", 1e-3, dim(3, 0, 0, 0), true),
    sym("l", 1e-3, dim(3, 0, 0, 0), true),
    sym(
        "M",
        1e3,
        Dimension {
            length: -3,
            mass: 0,
            time: 0,
            current: 0,
            temperature: 0,
            amount: 1,
        },
        true,
    ),
    sym("min", 60.0, Dimension::TIME, false),
    sym("h", 3600.0, Dimension::TIME, false),
    sym("d", 86400.0, Dimension::TIME, false),
    sym("%", 1e-2, Dimension::DIMENSIONLESS, false),
];

static PREFIXES: &[(&str, f64)] = &[
    ("da", 1e1),
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("µ", 1e-6),
    ("μ", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
    ("y", 1e-24),
];

/// Parse a unit string such as `"uA / cm2"`, `"mV s-1"` or `"A V / m2"`.
///
/// Every `/` puts the group that follows it into the denominator, so
/// `"A / cm2 / s"` reads as `A cm-2 s-1`. Terms inside a group are separated
/// by whitespace or `*` and may carry an integer exponent (`cm2`, `cm-2`,
/// `m^2`, `s**-1`). An empty string, `"1"` and `"dimensionless"` are
/// dimensionless.
pub fn parse(unit: &str) -> Result<Unit, UnitError> {
    let normalized = unit.replace("**", "^").replace(['*', '·', '(', ')'], " ");
    let trimmed = normalized.trim();

    if trimmed.is_empty() || trimmed == "dimensionless" {
        return Ok(Unit::dimensionless());
    }

    let mut groups = trimmed.split('/');
    let numerator = groups.next().unwrap_or_default();
    let mut result = parse_group(unit, numerator)?;

    for group in groups {
        if group.trim().is_empty() {
            return Err(UnitError::parse(unit, "empty denominator"));
        }
        let denominator = parse_group(unit, group)?;
        result = Unit {
            scale: result.scale / denominator.scale,
            dimension: result
                .dimension
                .checked_div(denominator.dimension)
                .ok_or_else(|| out_of_range(unit))?,
        };
    }

    if result.scale == 0.0 || !result.scale.is_finite() {
        return Err(out_of_range(unit));
    }

    Ok(result)
}

fn parse_group(unit: &str, group: &str) -> Result<Unit, UnitError> {
    let mut result = Unit::dimensionless();
    let mut terms = 0;

    for token in group.split_whitespace() {
        let term = parse_term(unit, token)?;
        result = Unit {
            scale: result.scale * term.scale,
            dimension: result
                .dimension
                .checked_mul(term.dimension)
                .ok_or_else(|| out_of_range(unit))?,
        };
        terms += 1;
    }

    if terms == 0 {
        return Err(UnitError::parse(unit, "empty unit group"));
    }

    Ok(result)
}

fn parse_term(unit: &str, token: &str) -> Result<Unit, UnitError> {
    if token == "1" {
        return Ok(Unit::dimensionless());
    }

    let (symbol, exponent) = split_exponent(unit, token)?;
    let (scale, dimension) = lookup_symbol(symbol)
        .ok_or_else(|| UnitError::parse(unit, format!("unknown unit symbol '{}'", symbol)))?;

    let scale = scale.powi(i32::from(exponent));
    if scale == 0.0 || !scale.is_finite() {
        return Err(out_of_range(unit));
    }

    Ok(Unit {
        scale,
        dimension: dimension
            .checked_powi(exponent)
            .ok_or_else(|| out_of_range(unit))?,
    })
}

fn out_of_range(unit: &str) -> UnitError {
    UnitError::parse(unit, "exponent out of range")
}

/// Split a term like `cm-2` or `m^3` into its symbol and exponent.
fn split_exponent<'a>(unit: &str, token: &'a str) -> Result<(&'a str, i8), UnitError> {
    let (symbol, exponent) = if let Some((symbol, exponent)) = token.split_once('^') {
        (symbol, exponent)
    } else {
        let digits_start = token
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);

        match digits_start {
            Some(start) => {
                let sign_start = token[..start]
                    .char_indices()
                    .last()
                    .filter(|(_, c)| *c == '-' || *c == '+')
                    .map(|(i, _)| i)
                    .unwrap_or(start);
                (&token[..sign_start], &token[sign_start..])
            }
            None => (token, "1"),
        }
    };

    if symbol.is_empty() {
        return Err(UnitError::parse(unit, format!("missing symbol in '{}'", token)));
    }

    let exponent = exponent
        .parse::<i8>()
        .map_err(|_| UnitError::parse(unit, format!("invalid exponent in '{}'", token)))?;

    Ok((symbol, exponent))
}

fn lookup_symbol(symbol: &str) -> Option<(f64, Dimension)> {
    if let Some(exact) = SYMBOLS.iter().find(|s| s.symbol == symbol) {
        return Some((exact.scale, exact.dimension));
    }

    PREFIXES.iter().find_map(|(prefix, factor)| {
        let base = symbol.strip_prefix(prefix)?;
        SYMBOLS
            .iter()
            .find(|s| s.prefixable && s.symbol == base)
            .map(|s| (factor * s.scale, s.dimension))
    })
}
