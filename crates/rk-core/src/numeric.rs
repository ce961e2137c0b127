/// Floating point type used throughout system
pub type Real = f64;

/// Universal gas constant [J/(mol·K)]
pub const RU: Real = 8.314_462_618;

/// Boltzmann constant [J/K]
pub const KB: Real = 1.380_649e-23;

/// Avogadro constant [1/mol]
pub const NA: Real = 6.022_140_76e23;

/// Elementary charge, i.e. one electron-volt in joules
pub const QE: Real = 1.602_176_634e-19;

/// Standard-state pressure used for equilibrium constants [Pa]
pub const ONE_ATM: Real = 101_325.0;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Evaluate `c[0] + c[1]*x + c[2]*x^2 + ...` by Horner's rule.
#[inline]
pub fn horner(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
