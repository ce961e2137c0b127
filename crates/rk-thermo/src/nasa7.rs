//! NASA 7-coefficient polynomials as a Gibbs-energy provider.
//!
//! This is the minimal concrete [`Thermodynamics`] implementation: it only
//! answers the question the kinetics engine asks (G/RT at a temperature).
//! Full property evaluation stays with the owning solver.

use crate::error::{ThermoError, ThermoResult};
use crate::model::Thermodynamics;
use crate::state::ThermoState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-range NASA-7 fit for one species.
///
/// ```text
/// h/RT = a1 + a2 T/2 + a3 T²/3 + a4 T³/4 + a5 T⁴/5 + a6/T
/// s/R  = a1 ln T + a2 T + a3 T²/2 + a4 T³/3 + a5 T⁴/4 + a7
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nasa7 {
    /// Temperature splitting the two ranges [K]
    pub t_mid: f64,
    /// Coefficients used below `t_mid`
    pub low: [f64; 7],
    /// Coefficients used at and above `t_mid`
    pub high: [f64; 7],
}

impl Nasa7 {
    /// Single-range fit (same coefficients everywhere).
    pub fn uniform(a: [f64; 7]) -> Self {
        Self {
            t_mid: f64::INFINITY,
            low: a,
            high: a,
        }
    }

    fn coeffs(&self, t: f64) -> &[f64; 7] {
        if t < self.t_mid { &self.low } else { &self.high }
    }

    pub fn h_over_rt(&self, t: f64) -> f64 {
        let a = self.coeffs(t);
        a[0] + t * (a[1] / 2.0 + t * (a[2] / 3.0 + t * (a[3] / 4.0 + t * a[4] / 5.0)))
            + a[5] / t
    }

    pub fn s_over_r(&self, t: f64) -> f64 {
        let a = self.coeffs(t);
        a[0] * t.ln() + t * (a[1] + t * (a[2] / 2.0 + t * (a[3] / 3.0 + t * a[4] / 4.0))) + a[6]
    }

    pub fn g_over_rt(&self, t: f64) -> f64 {
        self.h_over_rt(t) - self.s_over_r(t)
    }
}

/// Species set described by NASA-7 fits, holding a settable state.
#[derive(Debug, Clone)]
pub struct Nasa7Thermo {
    species: Vec<Nasa7>,
    electrons: bool,
    state: ThermoState,
}

impl Nasa7Thermo {
    /// `electrons` declares that species 0 is the free electron.
    pub fn new(species: Vec<Nasa7>, electrons: bool, state: ThermoState) -> ThermoResult<Self> {
        if species.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "empty species list".into(),
            });
        }
        if species
            .iter()
            .any(|s| s.low.iter().chain(&s.high).any(|c| !c.is_finite()))
        {
            return Err(ThermoError::NonPhysical {
                what: "NASA-7 coefficients must be finite",
            });
        }
        Ok(Self {
            species,
            electrons,
            state,
        })
    }

    pub fn set_state(&mut self, state: ThermoState) {
        self.state = state;
    }

    pub fn species(&self) -> &[Nasa7] {
        &self.species
    }
}

impl Thermodynamics for Nasa7Thermo {
    fn n_species(&self) -> usize {
        self.species.len()
    }

    fn state(&self) -> &ThermoState {
        &self.state
    }

    fn has_electrons(&self) -> bool {
        self.electrons
    }

    fn species_g_over_rt(&self, t: f64, out: &mut [f64]) {
        for (g, fit) in out.iter_mut().zip(&self.species) {
            *g = fit.g_over_rt(t);
        }
    }
}
