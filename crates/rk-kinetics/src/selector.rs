//! Evaluation-temperature selectors.

use std::fmt;

use rk_thermo::ThermoState;

/// Which temperature of a multi-temperature state a rate law is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureSelector {
    /// Heavy-particle translational temperature T.
    Translational,
    /// Free-electron temperature Te.
    Electron,
    /// Park's geometric mean sqrt(T Tv), used for vibration-favoured
    /// dissociation.
    Park,
}

impl TemperatureSelector {
    #[inline]
    pub fn eval(self, state: &ThermoState) -> f64 {
        match self {
            TemperatureSelector::Translational => state.t(),
            TemperatureSelector::Electron => state.te(),
            TemperatureSelector::Park => (state.t() * state.tv()).sqrt(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureSelector::Translational => "T",
            TemperatureSelector::Electron => "Te",
            TemperatureSelector::Park => "sqrt(T*Tv)",
        }
    }
}

impl fmt::Display for TemperatureSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_each_temperature() {
        let state = ThermoState::from_kelvin(4000.0, 9000.0, 1000.0, 1.0e4).unwrap();
        assert_eq!(TemperatureSelector::Translational.eval(&state), 4000.0);
        assert_eq!(TemperatureSelector::Electron.eval(&state), 9000.0);
        assert_eq!(TemperatureSelector::Park.eval(&state), 2000.0);
    }

    #[test]
    fn park_collapses_to_t_in_equilibrium() {
        let state = ThermoState::from_kelvin(3000.0, 3000.0, 3000.0, 1.0e5).unwrap();
        let park = TemperatureSelector::Park.eval(&state);
        assert!((park - 3000.0).abs() < 1e-9);
    }
}
