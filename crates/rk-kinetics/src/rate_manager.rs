//! Forward and reverse rate coefficients of a whole mechanism.
//!
//! Construction classifies every reaction once: its rate-law kind and the
//! category's (forward, reverse) temperature selectors pick the groups it is
//! evaluated in. Reversible reactions whose two selectors coincide take the
//! detailed-balance shortcut: the forward value is copied instead of being
//! evaluated a second time.
//!
//! Buffer layout: one allocation of `2 nr` values, ln(kf) of reaction `i` at
//! `i` and ln(kb) at `nr + i`. The ln(kb) of irreversible reactions is never
//! written and must not be read.

use rk_thermo::Thermodynamics;

use crate::collection::{GroupHandle, RateCoefficientGroupCollection};
use crate::error::{KineticsError, KineticsResult};
use crate::group::GroupKey;
use crate::rate_law::RateLawKind;
use crate::reaction::Reaction;
use rk_core::ConfigurationError;

/// How the reverse coefficient of a reaction is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseRole {
    /// No reverse coefficient.
    Irreversible,
    /// Copied from the forward value, then divided by Keq.
    Shortcut,
    /// Evaluated by its own group at `nr + i`, then divided by Keq.
    Evaluated,
}

/// Result of classifying one reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionClass {
    pub forward: GroupHandle,
    /// Group running the equilibrium subtraction, if reversible.
    pub reverse: Option<GroupHandle>,
    pub role: ReverseRole,
}

#[derive(Debug, Clone)]
pub struct RateManager {
    ns: usize,
    nr: usize,
    groups: RateCoefficientGroupCollection,
    rates: Vec<f64>,
    gibbs: Vec<f64>,
    irreversible: Vec<usize>,
    shortcuts: Vec<usize>,
    classes: Vec<ReactionClass>,
}

impl RateManager {
    /// Classify `reactions` (reaction `i` is `reactions[i]`) for a mixture of
    /// `ns` species.
    pub fn new(ns: usize, reactions: &[Reaction]) -> KineticsResult<Self> {
        let nr = reactions.len();
        let mut groups = RateCoefficientGroupCollection::new();
        let mut irreversible = Vec::new();
        let mut shortcuts = Vec::new();
        let mut classes = Vec::with_capacity(nr);

        for (i, rxn) in reactions.iter().enumerate() {
            check_species(i, rxn, ns)?;

            let law = rxn.rate_law();
            let kind = law.kind();
            if !matches!(
                kind,
                RateLawKind::Arrhenius | RateLawKind::RationalExponential | RateLawKind::Constant
            ) {
                return Err(ConfigurationError::new(
                    "rate law",
                    kind.name(),
                    format!(
                        "reaction {i}{} uses a rate law the rate manager cannot evaluate",
                        rxn.formula().map(|f| format!(" ({f})")).unwrap_or_default()
                    ),
                )
                .into());
            }

            let (fwd_sel, rev_sel) = rxn.category().selectors();
            let fwd_key = GroupKey::new(kind, fwd_sel);
            let forward = groups.add_rate_coefficient(fwd_key, i, law)?;

            let class = if !rxn.is_reversible() {
                irreversible.push(i);
                ReactionClass {
                    forward,
                    reverse: None,
                    role: ReverseRole::Irreversible,
                }
            } else if fwd_sel == rev_sel {
                shortcuts.push(i);
                let reverse = groups.add_reaction(fwd_key, i, rxn)?;
                ReactionClass {
                    forward,
                    reverse: Some(reverse),
                    role: ReverseRole::Shortcut,
                }
            } else {
                let rev_key = GroupKey::new(kind, rev_sel);
                let reverse = groups.add_rate_coefficient(rev_key, nr + i, law)?;
                groups.add_reaction(rev_key, i, rxn)?;
                ReactionClass {
                    forward,
                    reverse: Some(reverse),
                    role: ReverseRole::Evaluated,
                }
            };

            tracing::debug!(
                rxn = i,
                kind = %kind,
                category = %rxn.category(),
                forward = %fwd_sel,
                reverse = %rev_sel,
                role = ?class.role,
                "classified reaction"
            );
            classes.push(class);
        }

        tracing::info!(
            reactions = nr,
            species = ns,
            groups = groups.len(),
            shortcuts = shortcuts.len(),
            irreversible = irreversible.len(),
            "rate manager ready"
        );

        Ok(Self {
            ns,
            nr,
            groups,
            rates: vec![0.0; 2 * nr],
            gibbs: vec![0.0; ns],
            irreversible,
            shortcuts,
            classes,
        })
    }

    /// Recompute ln(kf) and ln(kb) at the provider's current state.
    ///
    /// Groups are evaluated first, then shortcut reactions copy their forward
    /// value, then every reversible reaction has ln(Keq) subtracted at its
    /// reverse temperature.
    pub fn update(&mut self, thermo: &dyn Thermodynamics) {
        debug_assert_eq!(thermo.n_species(), self.ns);
        let state = *thermo.state();

        self.groups.log_of_rate_coefficients(&state, &mut self.rates);

        let (ln_kf, ln_kb) = self.rates.split_at_mut(self.nr);
        for &i in &self.shortcuts {
            ln_kb[i] = ln_kf[i];
        }

        self.groups.subtract_ln_keq(thermo, &mut self.gibbs, ln_kb);
    }

    /// ln(kf), one entry per reaction.
    pub fn ln_kf(&self) -> &[f64] {
        &self.rates[..self.nr]
    }

    /// ln(kb), one entry per reaction. Entries of irreversible reactions are
    /// unspecified.
    pub fn ln_kb(&self) -> &[f64] {
        &self.rates[self.nr..]
    }

    /// The whole rate buffer: ln(kf) in `[0, nr)`, ln(kb) in `[nr, 2 nr)`.
    pub fn rate_coefficients(&self) -> &[f64] {
        &self.rates
    }

    /// dkf/dT of every reaction at `thermo`'s state, from the ln(kf) of the
    /// last [`update`](Self::update) (which must have used the same state).
    pub fn forward_rate_derivatives(&self, thermo: &dyn Thermodynamics, out: &mut [f64]) {
        let n = self.nr.min(out.len());
        self.groups
            .forward_derivatives(thermo.state(), &self.rates, &mut out[..n]);
    }

    pub fn n_reactions(&self) -> usize {
        self.nr
    }

    pub fn n_species(&self) -> usize {
        self.ns
    }

    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> &RateCoefficientGroupCollection {
        &self.groups
    }

    pub fn irreversible_reactions(&self) -> &[usize] {
        &self.irreversible
    }

    pub fn shortcut_reactions(&self) -> &[usize] {
        &self.shortcuts
    }

    pub fn classification(&self, rxn: usize) -> Option<&ReactionClass> {
        self.classes.get(rxn)
    }
}

fn check_species(rxn: usize, reaction: &Reaction, ns: usize) -> KineticsResult<()> {
    let bad = reaction
        .reactants()
        .species()
        .chain(reaction.products().species())
        .find(|&s| s >= ns);
    match bad {
        Some(species) => Err(KineticsError::SpeciesIndex {
            rxn,
            species,
            n_species: ns,
        }),
        None => Ok(()),
    }
}
