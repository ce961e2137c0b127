//! Batches of rate laws sharing one (kind, selector) key.
//!
//! A group computes its evaluation temperature and the derived terms once
//! per pass and then runs a tight loop over its entries. Storage is typed per
//! kind, so a group keyed on Arrhenius can only ever hold Arrhenius
//! parameters.

use std::fmt;

use rk_core::numeric::{ONE_ATM, RU};
use rk_core::ConfigurationError;
use rk_thermo::{ThermoState, Thermodynamics};

use crate::error::{KineticsError, KineticsResult};
use crate::rate_law::{
    Arrhenius, ConstantRate, RateLaw, RateLawKind, RationalExponential, TemperatureTerms,
};
use crate::reaction::{Reaction, Stoichiometry};
use crate::selector::TemperatureSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub kind: RateLawKind,
    pub selector: TemperatureSelector,
}

impl GroupKey {
    pub fn new(kind: RateLawKind, selector: TemperatureSelector) -> Self {
        Self { kind, selector }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.selector)
    }
}

/// (target offset, parameters) entries of one kind.
#[derive(Debug, Clone, PartialEq)]
enum GroupLaws {
    Arrhenius(Vec<(usize, Arrhenius)>),
    RationalExponential(Vec<(usize, RationalExponential)>),
    Constant(Vec<(usize, ConstantRate)>),
}

impl GroupLaws {
    fn len(&self) -> usize {
        match self {
            GroupLaws::Arrhenius(v) => v.len(),
            GroupLaws::RationalExponential(v) => v.len(),
            GroupLaws::Constant(v) => v.len(),
        }
    }
}

/// Reaction registered for equilibrium subtraction.
#[derive(Debug, Clone, PartialEq)]
struct KeqEntry {
    rxn: usize,
    reactants: Stoichiometry,
    products: Stoichiometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateLawGroup {
    key: GroupKey,
    laws: GroupLaws,
    keq: Vec<KeqEntry>,
}

impl RateLawGroup {
    /// Empty group. Only log-rate kinds can be batched.
    pub fn new(key: GroupKey) -> KineticsResult<Self> {
        let laws = match key.kind {
            RateLawKind::Arrhenius => GroupLaws::Arrhenius(Vec::new()),
            RateLawKind::RationalExponential => GroupLaws::RationalExponential(Vec::new()),
            RateLawKind::Constant => GroupLaws::Constant(Vec::new()),
            RateLawKind::ExponentialRational33 => {
                return Err(ConfigurationError::new(
                    "rate law",
                    key.kind.name(),
                    "not a logarithmic rate law; cannot be evaluated by the rate manager",
                )
                .into());
            }
        };
        Ok(Self {
            key,
            laws,
            keq: Vec::new(),
        })
    }

    pub fn key(&self) -> GroupKey {
        self.key
    }

    /// Number of rate-coefficient entries.
    pub fn len(&self) -> usize {
        self.laws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laws.len() == 0
    }

    /// Number of reactions registered for equilibrium subtraction.
    pub fn n_equilibrium_reactions(&self) -> usize {
        self.keq.len()
    }

    /// Register a rate coefficient written to `offset` of the rate buffer.
    pub fn add(&mut self, offset: usize, law: &RateLaw) -> KineticsResult<()> {
        let mismatch = KineticsError::GroupKeyMismatch {
            expected: self.key.kind,
            found: law.kind(),
        };
        match (&mut self.laws, law) {
            (GroupLaws::Arrhenius(v), RateLaw::Arrhenius(p)) => v.push((offset, *p)),
            (GroupLaws::RationalExponential(v), RateLaw::RationalExponential(p)) => {
                v.push((offset, *p))
            }
            (GroupLaws::Constant(v), RateLaw::Constant(p)) => v.push((offset, *p)),
            _ => return Err(mismatch),
        }
        Ok(())
    }

    /// Register reaction `rxn` for the equilibrium-subtraction pass.
    pub fn add_reaction(&mut self, rxn: usize, reaction: &Reaction) {
        self.keq.push(KeqEntry {
            rxn,
            reactants: reaction.reactants().clone(),
            products: reaction.products().clone(),
        });
    }

    /// Write ln(k) of every entry into `out[offset]`.
    pub fn evaluate(&self, state: &ThermoState, out: &mut [f64]) {
        let terms = TemperatureTerms::new(self.key.selector.eval(state));
        match &self.laws {
            GroupLaws::Arrhenius(v) => {
                for (offset, law) in v {
                    out[*offset] = law.ln_rate(&terms);
                }
            }
            GroupLaws::RationalExponential(v) => {
                for (offset, law) in v {
                    out[*offset] = law.ln_rate(&terms);
                }
            }
            GroupLaws::Constant(v) => {
                for (offset, law) in v {
                    out[*offset] = law.ln_rate();
                }
            }
        }
    }

    /// Subtract ln(Keq) at this group's temperature from `ln_kb[rxn]` of every
    /// registered reaction.
    ///
    /// `gibbs` (one entry per species) is overwritten with G/RT at this
    /// group's temperature, shifted to the concentration standard state.
    pub fn subtract_ln_keq(&self, thermo: &dyn Thermodynamics, gibbs: &mut [f64], ln_kb: &mut [f64]) {
        if self.keq.is_empty() {
            return;
        }
        let t = self.key.selector.eval(thermo.state());
        thermo.species_g_over_rt(t, gibbs);
        let shift = (RU * t / ONE_ATM).ln();
        for g in gibbs.iter_mut() {
            *g += shift;
        }
        for entry in &self.keq {
            ln_kb[entry.rxn] -= ln_equilibrium_constant(&entry.reactants, &entry.products, gibbs);
        }
    }

    /// dk/dT of every entry whose offset falls inside `out`, given the ln(k)
    /// buffer the group last evaluated into.
    pub fn derivatives(&self, state: &ThermoState, ln_k: &[f64], out: &mut [f64]) {
        let terms = TemperatureTerms::new(self.key.selector.eval(state));
        let n = out.len();
        match &self.laws {
            GroupLaws::Arrhenius(v) => {
                for (offset, law) in v.iter().filter(|(o, _)| *o < n) {
                    out[*offset] = law.derivative(ln_k[*offset].exp(), &terms);
                }
            }
            GroupLaws::RationalExponential(v) => {
                for (offset, law) in v.iter().filter(|(o, _)| *o < n) {
                    out[*offset] = law.derivative(ln_k[*offset].exp(), &terms);
                }
            }
            GroupLaws::Constant(v) => {
                for (offset, law) in v.iter().filter(|(o, _)| *o < n) {
                    out[*offset] = law.derivative();
                }
            }
        }
    }
}

/// ln(Kc) = Σ_reactants g′ − Σ_products g′, with g′ = G/RT + ln(Ru T / P°).
#[inline]
pub fn ln_equilibrium_constant(
    reactants: &Stoichiometry,
    products: &Stoichiometry,
    g_prime: &[f64],
) -> f64 {
    reactants.dot(g_prime) - products.dot(g_prime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ReactionCategory;
    use crate::rate_law::ExponentialRational33;

    fn state() -> ThermoState {
        ThermoState::from_kelvin(3000.0, 8000.0, 2000.0, 1.0e4).unwrap()
    }

    fn arrhenius(a: f64, n: f64, theta: f64) -> RateLaw {
        Arrhenius::new(a, n, theta).unwrap().into()
    }

    #[test]
    fn evaluates_at_selected_temperature() {
        let mut group =
            RateLawGroup::new(GroupKey::new(RateLawKind::Arrhenius, TemperatureSelector::Electron))
                .unwrap();
        group.add(1, &arrhenius(1.0e10, 0.0, 8000.0)).unwrap();

        let mut out = vec![0.0; 2];
        group.evaluate(&state(), &mut out);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - (1.0e10_f64.ln() - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn rejects_mismatched_kind() {
        let mut group = RateLawGroup::new(GroupKey::new(
            RateLawKind::Arrhenius,
            TemperatureSelector::Translational,
        ))
        .unwrap();
        let err = group
            .add(0, &ConstantRate::new(1.0).unwrap().into())
            .unwrap_err();
        assert_eq!(
            err,
            KineticsError::GroupKeyMismatch {
                expected: RateLawKind::Arrhenius,
                found: RateLawKind::Constant,
            }
        );
        assert!(group.is_empty());
    }

    #[test]
    fn rejects_exp_rat33_key() {
        let err = RateLawGroup::new(GroupKey::new(
            RateLawKind::ExponentialRational33,
            TemperatureSelector::Translational,
        ))
        .unwrap_err();
        assert!(matches!(err, KineticsError::Configuration(ref e) if e.what == "rate law"));

        let mut group =
            RateLawGroup::new(GroupKey::new(RateLawKind::Constant, TemperatureSelector::Park))
                .unwrap();
        let law: RateLaw = ExponentialRational33::new([1.0; 4], [1.0; 3]).unwrap().into();
        assert!(group.add(0, &law).is_err());
    }

    #[test]
    fn derivatives_skip_offsets_outside_out() {
        let mut group = RateLawGroup::new(GroupKey::new(
            RateLawKind::Arrhenius,
            TemperatureSelector::Translational,
        ))
        .unwrap();
        group.add(0, &arrhenius(1.0e8, 1.0, 5000.0)).unwrap();
        group.add(3, &arrhenius(1.0e8, 1.0, 5000.0)).unwrap();

        let mut ln_k = vec![0.0; 4];
        group.evaluate(&state(), &mut ln_k);
        let mut out = vec![0.0; 2];
        group.derivatives(&state(), &ln_k, &mut out);

        let t: f64 = 3000.0;
        let k = ln_k[0].exp();
        assert!((out[0] - k / t * (1.0 + 5000.0 / t)).abs() <= 1e-12 * out[0].abs());
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn ln_keq_is_stoichiometric_combination() {
        let reac = Stoichiometry::from_species(&[0]);
        let prod = Stoichiometry::from_species(&[1, 1]);
        assert_eq!(ln_equilibrium_constant(&reac, &prod, &[5.0, 1.5]), 2.0);

        let rxn = Reaction::new(
            ReactionCategory::Exchange,
            reac,
            prod,
            ConstantRate::new(1.0).unwrap(),
        );
        let mut group = RateLawGroup::new(GroupKey::new(
            RateLawKind::Constant,
            TemperatureSelector::Translational,
        ))
        .unwrap();
        group.add_reaction(4, &rxn);
        assert_eq!(group.n_equilibrium_reactions(), 1);
        assert_eq!(group.len(), 0);
    }
}
