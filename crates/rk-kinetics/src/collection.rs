//! Owner of every rate-law group of a mechanism.

use rk_thermo::{ThermoState, Thermodynamics};

use crate::error::KineticsResult;
use crate::group::{GroupKey, RateLawGroup};
use crate::rate_law::RateLaw;
use crate::reaction::Reaction;

/// Stable index of a group inside its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(usize);

impl GroupHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Groups are created on first use and never removed, so handles stay valid
/// for the collection's lifetime. Evaluation order is creation order.
#[derive(Debug, Clone, Default)]
pub struct RateCoefficientGroupCollection {
    groups: Vec<RateLawGroup>,
}

impl RateCoefficientGroupCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the group for `key`, creating it if needed.
    pub fn group_for(&mut self, key: GroupKey) -> KineticsResult<GroupHandle> {
        if let Some(i) = self.groups.iter().position(|g| g.key() == key) {
            return Ok(GroupHandle(i));
        }
        self.groups.push(RateLawGroup::new(key)?);
        Ok(GroupHandle(self.groups.len() - 1))
    }

    pub fn add_rate_coefficient(
        &mut self,
        key: GroupKey,
        offset: usize,
        law: &RateLaw,
    ) -> KineticsResult<GroupHandle> {
        let handle = self.group_for(key)?;
        self.groups[handle.0].add(offset, law)?;
        Ok(handle)
    }

    pub fn add_reaction(
        &mut self,
        key: GroupKey,
        rxn: usize,
        reaction: &Reaction,
    ) -> KineticsResult<GroupHandle> {
        let handle = self.group_for(key)?;
        self.groups[handle.0].add_reaction(rxn, reaction);
        Ok(handle)
    }

    pub fn group(&self, handle: GroupHandle) -> &RateLawGroup {
        &self.groups[handle.0]
    }

    pub fn log_of_rate_coefficients(&self, state: &ThermoState, out: &mut [f64]) {
        for group in &self.groups {
            group.evaluate(state, out);
        }
    }

    pub fn subtract_ln_keq(&self, thermo: &dyn Thermodynamics, gibbs: &mut [f64], ln_kb: &mut [f64]) {
        for group in &self.groups {
            group.subtract_ln_keq(thermo, gibbs, ln_kb);
        }
    }

    /// dk/dT for every entry whose offset is below `out.len()`.
    pub fn forward_derivatives(&self, state: &ThermoState, ln_k: &[f64], out: &mut [f64]) {
        for group in &self.groups {
            group.derivatives(state, ln_k, out);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RateLawGroup> {
        self.groups.iter()
    }
}
