// rk-core/src/units.rs
//
// SI quantity aliases plus the unit declarations a mechanism attaches to its
// rate-law parameters. Mechanism files quote pre-exponential factors and
// activation energies in whatever units the source paper used; everything is
// normalized here once, at load time, into m/mol/s and kelvin.

use std::fmt;
use std::str::FromStr;

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomTemperature};

use crate::error::ConfigurationError;
use crate::numeric::{KB, NA, QE, RU, Real};

pub type Pressure = UomPressure;
pub type Temperature = UomTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn to_pascal(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

/// Units of a pre-exponential factor, declared as length, quantity and time.
///
/// A rate coefficient of a reaction of order `n` has units
/// `(quantity/length^3)^(1-n) / time`; the order is only known per reaction,
/// so the declaration stores the three base factors in SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreExponentialUnits {
    length_m: Real,
    quantity_mol: Real,
    time_s: Real,
    label: &'static str,
}

impl PreExponentialUnits {
    pub const SI: Self = Self {
        length_m: 1.0,
        quantity_mol: 1.0,
        time_s: 1.0,
        label: "m,mol,s",
    };

    /// Convert a pre-exponential factor for a reaction of the given order
    /// into m/mol/s.
    pub fn to_si(&self, a: Real, order: i32) -> Real {
        let conc_factor = self.quantity_mol / self.length_m.powi(3);
        a * conc_factor.powi(1 - order) / self.time_s
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Default for PreExponentialUnits {
    fn default() -> Self {
        Self::SI
    }
}

impl FromStr for PreExponentialUnits {
    type Err = ConfigurationError;

    /// Parses declarations such as `"m,mol,s"`, `"cm-molecule-s"` or
    /// `"cm, mol, s, K"`. Tokens may come in any order; the temperature token
    /// is accepted and ignored because temperature exponents are never
    /// rescaled.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| {
            ConfigurationError::new("pre-exponential factor units", s, reason.to_string())
        };

        let mut length: Option<(Real, &'static str)> = None;
        let mut quantity: Option<(Real, &'static str)> = None;
        let mut time: Option<(Real, &'static str)> = None;

        let tokens = s
            .split(|c: char| c == ',' || c == '-' || c.is_whitespace())
            .filter(|t| !t.is_empty());

        for token in tokens {
            let slot = match token {
                "m" => (&mut length, (1.0, "m")),
                "cm" => (&mut length, (1e-2, "cm")),
                "mm" => (&mut length, (1e-3, "mm")),
                "mol" => (&mut quantity, (1.0, "mol")),
                "kmol" => (&mut quantity, (1e3, "kmol")),
                "molecule" | "molecules" => (&mut quantity, (1.0 / NA, "molecule")),
                "s" => (&mut time, (1.0, "s")),
                "ms" => (&mut time, (1e-3, "ms")),
                "us" => (&mut time, (1e-6, "us")),
                "K" => continue,
                other => {
                    return Err(err(&format!("unknown unit token '{other}'")));
                }
            };
            if slot.0.replace(slot.1).is_some() {
                return Err(err(&format!("unit token '{token}' repeats a dimension")));
            }
        }

        let (length_m, l) = length.ok_or_else(|| err("missing length unit"))?;
        let (quantity_mol, q) = quantity.ok_or_else(|| err("missing quantity unit"))?;
        let (time_s, t) = time.ok_or_else(|| err("missing time unit"))?;

        let label = match (l, q, t) {
            ("m", "mol", "s") => "m,mol,s",
            ("cm", "mol", "s") => "cm,mol,s",
            ("cm", "molecule", "s") => "cm,molecule,s",
            _ => "custom",
        };

        Ok(Self {
            length_m,
            quantity_mol,
            time_s,
            label,
        })
    }
}

impl fmt::Display for PreExponentialUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Units an activation energy is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationEnergyUnit {
    /// Already an activation temperature Ea/Ru
    #[default]
    Kelvin,
    JoulePerMol,
    KiloJoulePerMol,
    CaloriePerMol,
    KiloCaloriePerMol,
    ElectronVolt,
}

impl ActivationEnergyUnit {
    /// Convert an activation energy into an activation temperature [K].
    pub fn to_kelvin(self, e: Real) -> Real {
        match self {
            Self::Kelvin => e,
            Self::JoulePerMol => e / RU,
            Self::KiloJoulePerMol => e * 1e3 / RU,
            Self::CaloriePerMol => e * 4.184 / RU,
            Self::KiloCaloriePerMol => e * 4184.0 / RU,
            Self::ElectronVolt => e * QE / KB,
        }
    }
}

impl FromStr for ActivationEnergyUnit {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "K" => Ok(Self::Kelvin),
            "J/mol" => Ok(Self::JoulePerMol),
            "kJ/mol" => Ok(Self::KiloJoulePerMol),
            "cal/mol" => Ok(Self::CaloriePerMol),
            "kcal/mol" => Ok(Self::KiloCaloriePerMol),
            "eV" => Ok(Self::ElectronVolt),
            other => Err(ConfigurationError::new(
                "activation energy units",
                other,
                "expected one of K, J/mol, kJ/mol, cal/mol, kcal/mol, eV",
            )),
        }
    }
}

impl fmt::Display for ActivationEnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Kelvin => "K",
            Self::JoulePerMol => "J/mol",
            Self::KiloJoulePerMol => "kJ/mol",
            Self::CaloriePerMol => "cal/mol",
            Self::KiloCaloriePerMol => "kcal/mol",
            Self::ElectronVolt => "eV",
        };
        write!(f, "{s}")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn token_order_and_separator_do_not_matter(
            tokens in Just(vec!["cm", "molecule", "s", "K"]).prop_shuffle(),
            sep in prop::sample::select(vec![",", "-", " ", ", "]),
        ) {
            let units: PreExponentialUnits = tokens.join(sep).parse().unwrap();
            let reference: PreExponentialUnits = "cm,molecule,s".parse().unwrap();
            prop_assert_eq!(units, reference);
        }

        #[test]
        fn each_order_adds_one_concentration_factor(
            a in 1.0e-3_f64..1.0e20,
            order in 0_i32..4,
        ) {
            // cm^3/mol per concentration factor
            let units: PreExponentialUnits = "cm,mol,s".parse().unwrap();
            let ratio = units.to_si(a, order + 1) / units.to_si(a, order);
            prop_assert!(nearly_equal(ratio, 1.0e-6, Tolerances::default()));
            prop_assert!(nearly_equal(units.to_si(a, 1), a, Tolerances::default()));
        }
    }
}
