//! rk-kinetics: rate-coefficient evaluation engine.
//!
//! Provides:
//! - Rate laws (Arrhenius, rational-exponential, constant, exp-rat-3/3)
//! - Temperature selectors and the category -> selector table
//! - Rate-law groups batched by (kind, selector)
//! - `RateManager`: ln(kf) / ln(kb) for a whole mechanism
//! - `ThirdbodyManager`: collision-partner scaling of rates of progress
//! - Mechanism definitions and the load routine
//!
//! # Example
//!
//! ```
//! use rk_kinetics::{Arrhenius, RateManager, Reaction, ReactionCategory, Stoichiometry};
//! use rk_thermo::{Nasa7, Nasa7Thermo, ThermoState};
//!
//! let reactions = vec![
//!     Reaction::new(
//!         ReactionCategory::Exchange,
//!         Stoichiometry::from_species(&[0]),
//!         Stoichiometry::from_species(&[1]),
//!         Arrhenius::new(1.0e10, 0.0, 10_000.0).unwrap(),
//!     )
//!     .irreversible(),
//! ];
//! let mut manager = RateManager::new(2, &reactions).unwrap();
//!
//! let state = ThermoState::from_kelvin(1000.0, 1000.0, 1000.0, 1.0e5).unwrap();
//! let fit = Nasa7::uniform([2.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! let thermo = Nasa7Thermo::new(vec![fit.clone(), fit], false, state).unwrap();
//!
//! manager.update(&thermo);
//! assert!((manager.ln_kf()[0] - (1.0e10_f64.ln() - 10.0)).abs() < 1e-12);
//! ```

pub mod category;
pub mod collection;
pub mod error;
pub mod group;
pub mod mechanism;
pub mod rate_law;
pub mod rate_manager;
pub mod reaction;
pub mod selector;
pub mod thirdbody;

pub use category::ReactionCategory;
pub use collection::{GroupHandle, RateCoefficientGroupCollection};
pub use error::{KineticsError, KineticsResult};
pub use group::{GroupKey, RateLawGroup, ln_equilibrium_constant};
pub use mechanism::{
    LawUnitsDef, Mechanism, MechanismDef, RateLawDef, ReactionDef, UnitsDef, build_reactions,
    load_mechanism,
};
pub use rate_law::{
    Arrhenius, ConstantRate, ExponentialRational33, KineticsUnits, RateLaw, RateLawKind,
    RateLawUnits, RationalExponential, TemperatureTerms,
};
pub use rate_manager::{RateManager, ReactionClass, ReverseRole};
pub use reaction::{Reaction, Stoichiometry};
pub use selector::TemperatureSelector;
pub use thirdbody::ThirdbodyManager;
