//! Rate-law value types.
//!
//! Every law maps one evaluation temperature to ln(k) (and dk/dT for Jacobian
//! assembly). Laws are immutable, `Copy`, and carry SI parameters only: unit
//! normalization happens in the constructors, driven by the [`RateLawUnits`]
//! the caller passes in.

use std::fmt;

use rk_core::numeric::horner;
use rk_core::units::{ActivationEnergyUnit, PreExponentialUnits};
use rk_core::ConfigurationError;

/// Tag identifying a rate-law variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateLawKind {
    Arrhenius,
    RationalExponential,
    Constant,
    ExponentialRational33,
}

impl RateLawKind {
    pub const ALL: [RateLawKind; 4] = [
        RateLawKind::Arrhenius,
        RateLawKind::RationalExponential,
        RateLawKind::Constant,
        RateLawKind::ExponentialRational33,
    ];

    /// Name used in mechanism files and error messages.
    pub fn name(self) -> &'static str {
        match self {
            RateLawKind::Arrhenius => "arrhenius",
            RateLawKind::RationalExponential => "rational_exp",
            RateLawKind::Constant => "constant",
            RateLawKind::ExponentialRational33 => "exp_rat33",
        }
    }
}

impl fmt::Display for RateLawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Powers and reciprocals of one evaluation temperature.
///
/// Built once per group pass; every law in the group reads from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureTerms {
    pub t: f64,
    pub ln_t: f64,
    pub inv_t: f64,
    pub t2: f64,
}

impl TemperatureTerms {
    #[inline]
    pub fn new(t: f64) -> Self {
        Self {
            t,
            ln_t: t.ln(),
            inv_t: 1.0 / t,
            t2: t * t,
        }
    }
}

/// Unit declaration for one rate-law kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RateLawUnits {
    pub pre_exponential: PreExponentialUnits,
    pub activation_energy: ActivationEnergyUnit,
}

impl RateLawUnits {
    /// Parse a pair of unit strings, e.g. `("cm,mol,s", "kcal/mol")`.
    pub fn parse(a_units: &str, e_units: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            pre_exponential: a_units.parse()?,
            activation_energy: e_units.parse()?,
        })
    }
}

/// Unit declarations for every rate-law kind in a mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KineticsUnits {
    pub arrhenius: RateLawUnits,
    pub rational_exponential: RateLawUnits,
    pub constant: RateLawUnits,
    pub exponential_rational33: RateLawUnits,
}

impl KineticsUnits {
    pub fn for_kind(&self, kind: RateLawKind) -> &RateLawUnits {
        match kind {
            RateLawKind::Arrhenius => &self.arrhenius,
            RateLawKind::RationalExponential => &self.rational_exponential,
            RateLawKind::Constant => &self.constant,
            RateLawKind::ExponentialRational33 => &self.exponential_rational33,
        }
    }

    pub fn for_kind_mut(&mut self, kind: RateLawKind) -> &mut RateLawUnits {
        match kind {
            RateLawKind::Arrhenius => &mut self.arrhenius,
            RateLawKind::RationalExponential => &mut self.rational_exponential,
            RateLawKind::Constant => &mut self.constant,
            RateLawKind::ExponentialRational33 => &mut self.exponential_rational33,
        }
    }
}

fn require_finite(kind: RateLawKind, field: &str, v: f64) -> Result<f64, ConfigurationError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConfigurationError::new(
            format!("{kind} parameter {field}"),
            v.to_string(),
            "must be finite",
        ))
    }
}

fn require_positive(kind: RateLawKind, field: &str, v: f64) -> Result<f64, ConfigurationError> {
    require_finite(kind, field, v)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigurationError::new(
            format!("{kind} parameter {field}"),
            v.to_string(),
            "must be positive",
        ))
    }
}

/// `k = A T^n exp(-θ/T)` with θ = Ea/Ru.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrhenius {
    ln_a: f64,
    n: f64,
    theta: f64,
}

impl Arrhenius {
    /// SI pre-exponential factor, temperature exponent, activation
    /// temperature [K].
    pub fn new(a: f64, n: f64, theta: f64) -> Result<Self, ConfigurationError> {
        let kind = RateLawKind::Arrhenius;
        Ok(Self {
            ln_a: require_positive(kind, "A", a)?.ln(),
            n: require_finite(kind, "n", n)?,
            theta: require_finite(kind, "Ea", theta)?,
        })
    }

    /// Build from mechanism values quoted in `units`, for a reaction of the
    /// given order.
    pub fn with_units(
        a: f64,
        n: f64,
        ea: f64,
        order: i32,
        units: &RateLawUnits,
    ) -> Result<Self, ConfigurationError> {
        Self::new(
            units.pre_exponential.to_si(a, order),
            n,
            units.activation_energy.to_kelvin(ea),
        )
    }

    #[inline]
    pub fn ln_rate(&self, terms: &TemperatureTerms) -> f64 {
        self.ln_a + self.n * terms.ln_t - self.theta * terms.inv_t
    }

    /// dk/dT given k at the same temperature.
    #[inline]
    pub fn derivative(&self, k: f64, terms: &TemperatureTerms) -> f64 {
        k * terms.inv_t * (self.n + self.theta * terms.inv_t)
    }

    pub fn a(&self) -> f64 {
        self.ln_a.exp()
    }

    pub fn ln_a(&self) -> f64 {
        self.ln_a
    }

    pub fn n(&self) -> f64 {
        self.n
    }

    /// Activation temperature Ea/Ru [K].
    pub fn theta(&self) -> f64 {
        self.theta
    }
}

/// Arrhenius-like law with a rational pre-exponential term:
///
/// ```text
/// ln k = n ln T - θ/T + ln((a0 + a1 T + a2 T²) / (b0 + b1 T + b2 T² + b3 T³))
/// ```
///
/// The pre-exponential magnitude lives in the numerator coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalExponential {
    n: f64,
    theta: f64,
    a: [f64; 3],
    b: [f64; 4],
}

impl RationalExponential {
    pub fn new(n: f64, theta: f64, a: [f64; 3], b: [f64; 4]) -> Result<Self, ConfigurationError> {
        let kind = RateLawKind::RationalExponential;
        require_finite(kind, "n", n)?;
        require_finite(kind, "Ea", theta)?;
        for (i, &c) in a.iter().enumerate() {
            require_finite(kind, &format!("a{i}"), c)?;
        }
        for (i, &c) in b.iter().enumerate() {
            require_finite(kind, &format!("b{i}"), c)?;
        }
        if a.iter().all(|&c| c == 0.0) || b.iter().all(|&c| c == 0.0) {
            return Err(ConfigurationError::new(
                format!("{kind} coefficients"),
                format!("a={a:?} b={b:?}"),
                "numerator and denominator must not vanish identically",
            ));
        }
        Ok(Self { n, theta, a, b })
    }

    pub fn with_units(
        n: f64,
        ea: f64,
        a: [f64; 3],
        b: [f64; 4],
        order: i32,
        units: &RateLawUnits,
    ) -> Result<Self, ConfigurationError> {
        let a = a.map(|c| units.pre_exponential.to_si(c, order));
        Self::new(n, units.activation_energy.to_kelvin(ea), a, b)
    }

    #[inline]
    fn numerator(&self, terms: &TemperatureTerms) -> f64 {
        self.a[0] + self.a[1] * terms.t + self.a[2] * terms.t2
    }

    #[inline]
    fn denominator(&self, terms: &TemperatureTerms) -> f64 {
        self.b[0] + self.b[1] * terms.t + self.b[2] * terms.t2 + self.b[3] * terms.t2 * terms.t
    }

    #[inline]
    pub fn ln_rate(&self, terms: &TemperatureTerms) -> f64 {
        self.n * terms.ln_t - self.theta * terms.inv_t
            + (self.numerator(terms) / self.denominator(terms)).ln()
    }

    #[inline]
    pub fn derivative(&self, k: f64, terms: &TemperatureTerms) -> f64 {
        let dnum = self.a[1] + 2.0 * self.a[2] * terms.t;
        let dden = self.b[1] + 2.0 * self.b[2] * terms.t + 3.0 * self.b[3] * terms.t2;
        k * (terms.inv_t * (self.n + self.theta * terms.inv_t) + dnum / self.numerator(terms)
            - dden / self.denominator(terms))
    }

    pub fn n(&self) -> f64 {
        self.n
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn numerator_coeffs(&self) -> &[f64; 3] {
        &self.a
    }

    pub fn denominator_coeffs(&self) -> &[f64; 4] {
        &self.b
    }
}

/// Temperature-independent rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRate {
    ln_a: f64,
}

impl ConstantRate {
    pub fn new(a: f64) -> Result<Self, ConfigurationError> {
        Ok(Self {
            ln_a: require_positive(RateLawKind::Constant, "A", a)?.ln(),
        })
    }

    pub fn with_units(a: f64, order: i32, units: &RateLawUnits) -> Result<Self, ConfigurationError> {
        Self::new(units.pre_exponential.to_si(a, order))
    }

    #[inline]
    pub fn ln_rate(&self) -> f64 {
        self.ln_a
    }

    #[inline]
    pub fn derivative(&self) -> f64 {
        0.0
    }

    pub fn a(&self) -> f64 {
        self.ln_a.exp()
    }
}

/// Ratio of a cubic over a monic cubic in T:
///
/// ```text
/// (a0 + a1 T + a2 T² + a3 T³) / (b0 + b1 T + b2 T² + T³)
/// ```
///
/// This is a curve fit returning the rate itself, not its logarithm. Source
/// terms use it directly; the rate manager does not accept it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialRational33 {
    a: [f64; 4],
    b: [f64; 3],
}

impl ExponentialRational33 {
    pub fn new(a: [f64; 4], b: [f64; 3]) -> Result<Self, ConfigurationError> {
        let kind = RateLawKind::ExponentialRational33;
        for (i, &c) in a.iter().enumerate() {
            require_finite(kind, &format!("a{i}"), c)?;
        }
        for (i, &c) in b.iter().enumerate() {
            require_finite(kind, &format!("b{i}"), c)?;
        }
        Ok(Self { a, b })
    }

    pub fn with_units(
        a: [f64; 4],
        b: [f64; 3],
        order: i32,
        units: &RateLawUnits,
    ) -> Result<Self, ConfigurationError> {
        Self::new(a.map(|c| units.pre_exponential.to_si(c, order)), b)
    }

    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        let den = self.b[0] + (self.b[1] + (self.b[2] + t) * t) * t;
        horner(&self.a, t) / den
    }

    pub fn numerator_coeffs(&self) -> &[f64; 4] {
        &self.a
    }

    pub fn denominator_coeffs(&self) -> &[f64; 3] {
        &self.b
    }
}

/// Closed set of rate laws a reaction may carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLaw {
    Arrhenius(Arrhenius),
    RationalExponential(RationalExponential),
    Constant(ConstantRate),
    ExponentialRational33(ExponentialRational33),
}

impl RateLaw {
    pub fn kind(&self) -> RateLawKind {
        match self {
            RateLaw::Arrhenius(_) => RateLawKind::Arrhenius,
            RateLaw::RationalExponential(_) => RateLawKind::RationalExponential,
            RateLaw::Constant(_) => RateLawKind::Constant,
            RateLaw::ExponentialRational33(_) => RateLawKind::ExponentialRational33,
        }
    }

    /// ln(k) at the given temperature, or `None` for laws that do not
    /// produce a logarithmic rate coefficient.
    pub fn ln_rate(&self, terms: &TemperatureTerms) -> Option<f64> {
        match self {
            RateLaw::Arrhenius(law) => Some(law.ln_rate(terms)),
            RateLaw::RationalExponential(law) => Some(law.ln_rate(terms)),
            RateLaw::Constant(law) => Some(law.ln_rate()),
            RateLaw::ExponentialRational33(_) => None,
        }
    }

    /// dk/dT given k, or `None` where no derivative is defined.
    pub fn derivative(&self, k: f64, terms: &TemperatureTerms) -> Option<f64> {
        match self {
            RateLaw::Arrhenius(law) => Some(law.derivative(k, terms)),
            RateLaw::RationalExponential(law) => Some(law.derivative(k, terms)),
            RateLaw::Constant(law) => Some(law.derivative()),
            RateLaw::ExponentialRational33(_) => None,
        }
    }
}

impl From<Arrhenius> for RateLaw {
    fn from(law: Arrhenius) -> Self {
        RateLaw::Arrhenius(law)
    }
}

impl From<RationalExponential> for RateLaw {
    fn from(law: RationalExponential) -> Self {
        RateLaw::RationalExponential(law)
    }
}

impl From<ConstantRate> for RateLaw {
    fn from(law: ConstantRate) -> Self {
        RateLaw::Constant(law)
    }
}

impl From<ExponentialRational33> for RateLaw {
    fn from(law: ExponentialRational33) -> Self {
        RateLaw::ExponentialRational33(law)
    }
}
