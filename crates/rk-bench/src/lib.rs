//! Benchmark harness for the ratekit engine.
//!
//! Builds a synthetic (or loaded) mechanism, then drives the per-iteration
//! pipeline a flow solver would run: rate update, a stand-in
//! rate-of-progress stage, third-body scaling and forward derivatives.

use rk_core::timing::{self, Timer, kinetics_timing};
use rk_core::ConfigurationError;
use rk_kinetics::{
    KineticsError, Mechanism, MechanismDef, RateLawDef, ReactionCategory, ReactionDef,
    load_mechanism,
};
use rk_thermo::{Nasa7, Nasa7Thermo, ThermoError, ThermoState, Thermodynamics};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Kinetics(#[from] KineticsError),

    #[error(transparent)]
    Thermo(#[from] ThermoError),

    #[error("Failed to read mechanism: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;

/// State and length of one benchmark run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BenchConfig {
    pub iterations: usize,
    pub t: f64,
    pub te: f64,
    pub tv: f64,
    pub p: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            t: 8000.0,
            te: 12_000.0,
            tv: 6000.0,
            p: 1000.0,
        }
    }
}

/// Timing and size summary of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub species: usize,
    pub reactions: usize,
    pub rate_groups: usize,
    pub shortcut_reactions: usize,
    pub irreversible_reactions: usize,
    pub thirdbody_reactions: usize,
    pub iterations: usize,
    pub update_avg_s: f64,
    pub thirdbody_avg_s: f64,
    pub derivatives_avg_s: f64,
    /// Σ ln(kf) after the last iteration, to keep the work observable.
    pub ln_kf_checksum: f64,
}

/// Species names `e-, A0, A1(0), A1(1), A2, ...`: every third heavy species
/// gets two excited levels so that species groups are exercised.
///
/// Counts below 2 are raised to 2 (the electron plus one heavy species).
pub fn synthetic_species(n_species: usize) -> Vec<String> {
    let mut names = vec!["e-".to_string()];
    let mut base = 0;
    while names.len() < n_species.max(2) {
        if base % 3 == 1 && names.len() + 1 < n_species {
            names.push(format!("A{base}(0)"));
            names.push(format!("A{base}(1)"));
        } else {
            names.push(format!("A{base}"));
        }
        base += 1;
    }
    names
}

/// Deterministic mechanism cycling through categories, law kinds,
/// reversibility and third-body flags.
pub fn synthetic_mechanism(n_species: usize, n_reactions: usize) -> MechanismDef {
    let species = synthetic_species(n_species);
    let heavy = species.len() - 1;
    let name = |i: usize| species[1 + i % heavy].clone();

    let reactions = (0..n_reactions)
        .map(|r| {
            let category = ReactionCategory::ALL[r % ReactionCategory::ALL.len()];
            let rate_law = match r % 3 {
                0 => RateLawDef::Arrhenius {
                    a: 1.0e10 * (1.0 + (r % 7) as f64),
                    n: -1.0 + 0.25 * (r % 9) as f64,
                    ea: 5000.0 * (r % 20) as f64,
                },
                1 => RateLawDef::RationalExponential {
                    n: 0.5,
                    ea: 1000.0 * (r % 11) as f64,
                    a: [1.0e8, 1.0e4, 0.5],
                    b: [1.0, 1.0e-4, 1.0e-8, 1.0e-12],
                },
                _ => RateLawDef::Constant {
                    a: 1.0e6 + r as f64,
                },
            };
            let mut def = ReactionDef {
                formula: Some(format!("R{r}")),
                category,
                reactants: vec![name(r), name(r + 1)],
                products: vec![name(r + 2)],
                reversible: r % 5 != 4,
                rate_law,
                efficiencies: None,
            };
            if r % 4 == 0 {
                def.efficiencies = Some(BTreeMap::from([(name(r + 3), 2.0 + (r % 3) as f64)]));
            }
            def
        })
        .collect();

    MechanismDef {
        units: Default::default(),
        thermo: synthetic_thermo(species.len()),
        species,
        reactions,
    }
}

/// Monatomic-like NASA-7 fits with spread formation enthalpies.
pub fn synthetic_thermo(n_species: usize) -> Vec<Nasa7> {
    (0..n_species)
        .map(|s| Nasa7::uniform([2.5, 0.0, 0.0, 0.0, 0.0, 1000.0 * s as f64, 4.0]))
        .collect()
}

/// Load a YAML mechanism file.
pub fn load_yaml(text: &str) -> BenchResult<Mechanism> {
    let def = MechanismDef::from_yaml_str(text)?;
    Ok(load_mechanism(&def)?)
}

/// Run the per-iteration pipeline `config.iterations` times.
pub fn run_benchmark(mechanism: &Mechanism, config: &BenchConfig) -> BenchResult<BenchReport> {
    let ns = mechanism.n_species();
    let fits = if mechanism.thermo.is_empty() {
        tracing::warn!("mechanism has no thermo data, using synthetic fits");
        synthetic_thermo(ns)
    } else {
        mechanism.thermo.clone()
    };
    let state = ThermoState::from_kelvin(config.t, config.te, config.tv, config.p)?;
    let thermo = Nasa7Thermo::new(fits, mechanism.electrons, state)?;

    let mut rates = mechanism.rate_manager()?;
    let mut thirdbody = mechanism.thirdbody_manager(&thermo)?;

    let nr = rates.n_reactions();
    let conc: Vec<f64> = (0..ns).map(|s| 1.0e-3 * (1 + s) as f64).collect();
    let mut progress = vec![0.0; nr];
    let mut dkf = vec![0.0; nr];

    timing::enable_timing();
    kinetics_timing::reset_all();

    for _ in 0..config.iterations {
        let timer = Timer::start();
        rates.update(&thermo);
        timer.stop_into(&kinetics_timing::RATE_UPDATE);

        for (w, ln_kf) in progress.iter_mut().zip(rates.ln_kf()) {
            *w = ln_kf.exp();
        }

        let timer = Timer::start();
        thirdbody.multiply_thirdbodies(&conc, &mut progress);
        timer.stop_into(&kinetics_timing::THIRDBODY);

        let timer = Timer::start();
        rates.forward_rate_derivatives(&thermo, &mut dkf);
        timer.stop_into(&kinetics_timing::DERIVATIVES);
    }

    let report = BenchReport {
        species: thermo.n_species(),
        reactions: nr,
        rate_groups: rates.n_groups(),
        shortcut_reactions: rates.shortcut_reactions().len(),
        irreversible_reactions: rates.irreversible_reactions().len(),
        thirdbody_reactions: thirdbody.n_reactions(),
        iterations: config.iterations,
        update_avg_s: kinetics_timing::RATE_UPDATE.average_seconds(),
        thirdbody_avg_s: kinetics_timing::THIRDBODY.average_seconds(),
        derivatives_avg_s: kinetics_timing::DERIVATIVES.average_seconds(),
        ln_kf_checksum: rates.ln_kf().iter().sum(),
    };
    tracing::info!(
        iterations = report.iterations,
        update_avg_s = report.update_avg_s,
        "benchmark finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_species_count_and_groups() {
        for n in [2, 5, 10, 33] {
            assert_eq!(synthetic_species(n).len(), n);
        }
        let names = synthetic_species(6);
        assert_eq!(names[0], "e-");
        assert!(names.iter().any(|s| s.ends_with("(1)")));
    }

    #[test]
    fn synthetic_mechanism_loads_and_runs() {
        let def = synthetic_mechanism(12, 60);
        let mech = load_mechanism(&def).unwrap();
        assert!(mech.electrons);

        let config = BenchConfig {
            iterations: 3,
            ..Default::default()
        };
        let report = run_benchmark(&mech, &config).unwrap();
        assert_eq!(report.reactions, 60);
        assert_eq!(report.species, 12);
        assert_eq!(report.thirdbody_reactions, 15);
        assert_eq!(report.irreversible_reactions, 12);
        assert!(report.shortcut_reactions > 0);
        assert!(report.ln_kf_checksum.is_finite());
    }

    #[test]
    fn yaml_round_trip_of_synthetic_mechanism() {
        let def = synthetic_mechanism(6, 9);
        let yaml = def.to_yaml_string().unwrap();
        let mech = load_yaml(&yaml).unwrap();
        assert_eq!(mech.reactions.len(), 9);
    }
}
