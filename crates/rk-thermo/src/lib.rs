//! rk-thermo: thermodynamic collaborators of the ratekit engine.
//!
//! Provides:
//! - Multi-temperature state snapshot (T, Te, Tv, P)
//! - `Thermodynamics` provider trait (state + species G/RT)
//! - `SpeciesGroups` trait and a name-based group table
//! - NASA-7 polynomial Gibbs provider
//!
//! # Architecture
//!
//! The kinetics engine depends on the traits only. Whoever owns the mixture
//! implements them; [`Nasa7Thermo`] is the reference implementation used by
//! the bench and the tests.
//!
//! # Example
//!
//! ```
//! use rk_core::units::{k, pa};
//! use rk_thermo::{Nasa7, Nasa7Thermo, ThermoState, Thermodynamics};
//!
//! let state = ThermoState::new(k(5000.0), k(8000.0), k(4000.0), pa(500.0)).unwrap();
//! let argon = Nasa7::uniform([2.5, 0.0, 0.0, 0.0, 0.0, -745.375, 4.379]);
//! let thermo = Nasa7Thermo::new(vec![argon], false, state).unwrap();
//!
//! let mut g = [0.0];
//! thermo.species_g_over_rt(thermo.state().t(), &mut g);
//! assert!(g[0].is_finite());
//! ```

pub mod error;
pub mod groups;
pub mod model;
pub mod nasa7;
pub mod state;

// Re-exports for ergonomics
pub use error::{ThermoError, ThermoResult};
pub use groups::{SpeciesGroupTable, ground_state_name};
pub use model::{SpeciesGroups, Thermodynamics};
pub use nasa7::{Nasa7, Nasa7Thermo};
pub use state::ThermoState;
