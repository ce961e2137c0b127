//! Provider traits the kinetics engine consumes.
//!
//! The engine never computes thermodynamic properties itself. Whatever owns
//! the mixture (a CFD solver's species database, an equilibrium code, a test
//! double) implements these traits and is passed in by reference on every
//! call.

use crate::state::ThermoState;

/// Source of the current state and of standard-state Gibbs energies.
pub trait Thermodynamics: Send + Sync {
    /// Number of species, in mechanism order.
    fn n_species(&self) -> usize;

    /// Current multi-temperature state.
    fn state(&self) -> &ThermoState;

    /// True if species 0 is the free electron.
    ///
    /// Third-body sums exclude the electron when it is present.
    fn has_electrons(&self) -> bool {
        false
    }

    /// Fill `out` (length `n_species()`) with the standard-state Gibbs free
    /// energy over RT of every species at temperature `t` [K].
    fn species_g_over_rt(&self, t: f64, out: &mut [f64]);
}

/// Aggregation of species into groups (excited states of one ground state)
/// so that per-reaction work does not scale with the species count.
pub trait SpeciesGroups {
    /// Number of species partitioned, the length `sum_species_group_values`
    /// expects for `values`.
    fn n_species(&self) -> usize;

    fn n_species_groups(&self) -> usize;

    /// Sum `values` (one entry per species) over the members of each group,
    /// writing one entry per group into `out`.
    fn sum_species_group_values(&self, values: &[f64], out: &mut [f64]);
}
