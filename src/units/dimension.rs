use std::fmt;

/// Exponents of the SI base dimensions carried by a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    /// Length (m)
    pub length: i8,
    /// Mass (kg)
    pub mass: i8,
    /// Time (s)
    pub time: i8,
    /// Electric current (A)
    pub current: i8,
    /// Thermodynamic temperature (K)
    pub temperature: i8,
    /// Amount of substance (mol)
    pub amount: i8,
}

impl Dimension {
    /// No dimension at all
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0);
    /// Length
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0);
    /// Mass
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0);
    /// Time
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0);
    /// Electric current
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0);
    /// Temperature
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0);
    /// Amount of substance
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 1);
    /// Electric potential, kg m2 s-3 A-1
    pub const VOLTAGE: Self = Self::new(2, 1, -3, -1, 0, 0);

    const fn new(length: i8, mass: i8, time: i8, current: i8, temperature: i8, amount: i8) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            temperature,
            amount,
        }
    }

    /// Multiply every exponent by `exponent`; `None` on overflow
    pub fn checked_powi(self, exponent: i8) -> Option<Self> {
        let factor = Self::new(exponent, exponent, exponent, exponent, exponent, exponent);
        self.combine(factor, i8::checked_mul)
    }

    /// Dimension of a product; `None` on overflow
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.combine(rhs, i8::checked_add)
    }

    /// Dimension of a quotient; `None` on overflow
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.combine(rhs, i8::checked_sub)
    }

    fn combine(self, rhs: Self, op: fn(i8, i8) -> Option<i8>) -> Option<Self> {
        Some(Self {
            length: op(self.length, rhs.length)?,
            mass: op(self.mass, rhs.mass)?,
            time: op(self.time, rhs.time)?,
            current: op(self.current, rhs.current)?,
            temperature: op(self.temperature, rhs.temperature)?,
            amount: op(self.amount, rhs.amount)?,
        })
    }

    /// True when all exponents are zero
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let parts = [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("A", self.current),
            ("K", self.temperature),
            ("mol", self.amount),
        ];
        let rendered: Vec<String> = parts
            .iter()
            .filter(|(_, exp)| *exp != 0)
            .map(|(sym, exp)| {
                if *exp == 1 {
                    sym.to_string()
                } else {
                    format!("{}{}", sym, exp)
                }
            })
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}
