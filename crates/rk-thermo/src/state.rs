//! Thermodynamic state snapshot consumed by the kinetics engine.

use crate::error::{ThermoError, ThermoResult};
use rk_core::units::{Pressure, Temperature, to_kelvin, to_pascal};

/// Multi-temperature state: translational T, electron Te, vibrational Tv
/// and pressure.
///
/// Values are stored as plain kelvin/pascal `f64` because selectors read them
/// once per rate-law group on every solver iteration. The uom constructor is
/// the public front door; [`ThermoState::from_kelvin`] exists for solvers that
/// already hold raw SI values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoState {
    t: f64,
    te: f64,
    tv: f64,
    p: f64,
}

impl ThermoState {
    /// Create a state from the three temperatures and the pressure.
    ///
    /// Validates that every value is positive and finite.
    pub fn new(
        t: Temperature,
        te: Temperature,
        tv: Temperature,
        p: Pressure,
    ) -> ThermoResult<Self> {
        Self::from_kelvin(to_kelvin(t), to_kelvin(te), to_kelvin(tv), to_pascal(p))
    }

    /// Thermal equilibrium: Te = Tv = T.
    pub fn equilibrium(t: Temperature, p: Pressure) -> ThermoResult<Self> {
        Self::new(t, t, t, p)
    }

    pub fn from_kelvin(t: f64, te: f64, tv: f64, p: f64) -> ThermoResult<Self> {
        validate_positive(t, "translational temperature must be positive and finite")?;
        validate_positive(te, "electron temperature must be positive and finite")?;
        validate_positive(tv, "vibrational temperature must be positive and finite")?;
        validate_positive(p, "pressure must be positive and finite")?;
        Ok(Self { t, te, tv, p })
    }

    /// Translational temperature [K].
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Electron temperature [K].
    pub fn te(&self) -> f64 {
        self.te
    }

    /// Vibrational temperature [K].
    pub fn tv(&self) -> f64 {
        self.tv
    }

    /// Pressure [Pa].
    pub fn p(&self) -> f64 {
        self.p
    }
}

fn validate_positive(v: f64, what: &'static str) -> ThermoResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ThermoError::NonPhysical { what });
    }
    Ok(())
}
