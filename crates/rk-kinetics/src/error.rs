//! Kinetics errors.

use rk_core::ConfigurationError;
use rk_thermo::ThermoError;
use thiserror::Error;

use crate::rate_law::RateLawKind;

pub type KineticsResult<T> = Result<T, KineticsError>;

/// Errors raised while building kinetics objects.
///
/// Evaluation never fails; everything here surfaces at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticsError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A stoichiometric entry refers to a species the mixture does not have.
    #[error("Reaction {rxn} references species {species}, mixture has {n_species}")]
    SpeciesIndex {
        rxn: usize,
        species: usize,
        n_species: usize,
    },

    /// A rate law was offered to a group keyed on a different kind.
    #[error("Rate law group holds {expected} laws, got {found}")]
    GroupKeyMismatch {
        expected: RateLawKind,
        found: RateLawKind,
    },

    #[error("Thermodynamics error: {0}")]
    Thermo(#[from] ThermoError),
}
