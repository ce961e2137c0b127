//! Mechanism definitions and the load routine that turns them into engine
//! objects.
//!
//! The definition types mirror a YAML mechanism file:
//!
//! ```yaml
//! units:
//!   pre_exponential: cm,mol,s
//!   activation_energy: K
//! species: [e-, N2, N, N+]
//! reactions:
//!   - formula: N2 + M = 2N + M
//!     category: dissociation_m
//!     reactants: [N2]
//!     products: [N, N]
//!     efficiencies: { N: 4.2857 }
//!     rate_law: { type: arrhenius, a: 7.0e21, n: -1.6, ea: 113200.0 }
//! ```
//!
//! Unit declarations are part of the definition and are threaded explicitly
//! into every rate-law constructor.

use std::collections::BTreeMap;

use rk_core::ConfigurationError;
use rk_thermo::{Nasa7, SpeciesGroupTable, ThermoError, Thermodynamics};

use crate::category::ReactionCategory;
use crate::error::KineticsResult;
use crate::rate_law::{
    Arrhenius, ConstantRate, ExponentialRational33, KineticsUnits, RateLaw, RateLawKind,
    RateLawUnits, RationalExponential,
};
use crate::rate_manager::RateManager;
use crate::reaction::{Reaction, Stoichiometry};
use crate::thirdbody::ThirdbodyManager;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit strings for one rate-law kind. Missing entries fall back to the
/// mechanism-wide declaration.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LawUnitsDef {
    pub pre_exponential: Option<String>,
    pub activation_energy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitsDef {
    pub pre_exponential: Option<String>,
    pub activation_energy: Option<String>,
    pub arrhenius: Option<LawUnitsDef>,
    pub rational_exp: Option<LawUnitsDef>,
    pub constant: Option<LawUnitsDef>,
    pub exp_rat33: Option<LawUnitsDef>,
}

impl UnitsDef {
    /// Resolve into per-kind unit declarations.
    pub fn to_kinetics_units(&self) -> Result<KineticsUnits, ConfigurationError> {
        let base = RateLawUnits {
            pre_exponential: match &self.pre_exponential {
                Some(s) => s.parse()?,
                None => Default::default(),
            },
            activation_energy: match &self.activation_energy {
                Some(s) => s.parse()?,
                None => Default::default(),
            },
        };

        let mut units = KineticsUnits {
            arrhenius: base,
            rational_exponential: base,
            constant: base,
            exponential_rational33: base,
        };
        for kind in RateLawKind::ALL {
            let Some(overrides) = self.overrides(kind) else {
                continue;
            };
            let slot = units.for_kind_mut(kind);
            if let Some(s) = &overrides.pre_exponential {
                slot.pre_exponential = s.parse()?;
            }
            if let Some(s) = &overrides.activation_energy {
                slot.activation_energy = s.parse()?;
            }
        }
        Ok(units)
    }

    fn overrides(&self, kind: RateLawKind) -> Option<&LawUnitsDef> {
        match kind {
            RateLawKind::Arrhenius => self.arrhenius.as_ref(),
            RateLawKind::RationalExponential => self.rational_exp.as_ref(),
            RateLawKind::Constant => self.constant.as_ref(),
            RateLawKind::ExponentialRational33 => self.exp_rat33.as_ref(),
        }
    }
}

/// Raw rate-law parameters, in the mechanism's declared units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum RateLawDef {
    #[cfg_attr(feature = "serde", serde(rename = "arrhenius"))]
    Arrhenius {
        a: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        n: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        ea: f64,
    },
    #[cfg_attr(feature = "serde", serde(rename = "rational_exp"))]
    RationalExponential {
        #[cfg_attr(feature = "serde", serde(default))]
        n: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        ea: f64,
        a: [f64; 3],
        b: [f64; 4],
    },
    #[cfg_attr(feature = "serde", serde(rename = "constant"))]
    Constant { a: f64 },
    #[cfg_attr(feature = "serde", serde(rename = "exp_rat33"))]
    ExponentialRational33 { a: [f64; 4], b: [f64; 3] },
}

impl RateLawDef {
    pub fn kind(&self) -> RateLawKind {
        match self {
            RateLawDef::Arrhenius { .. } => RateLawKind::Arrhenius,
            RateLawDef::RationalExponential { .. } => RateLawKind::RationalExponential,
            RateLawDef::Constant { .. } => RateLawKind::Constant,
            RateLawDef::ExponentialRational33 { .. } => RateLawKind::ExponentialRational33,
        }
    }

    /// Build the law for a reaction of the given order.
    pub fn build(&self, order: u32, units: &KineticsUnits) -> Result<RateLaw, ConfigurationError> {
        let u = units.for_kind(self.kind());
        let order = i32::try_from(order).map_err(|_| {
            ConfigurationError::new("reaction order", order.to_string(), "too large")
        })?;
        Ok(match *self {
            RateLawDef::Arrhenius { a, n, ea } => Arrhenius::with_units(a, n, ea, order, u)?.into(),
            RateLawDef::RationalExponential { n, ea, a, b } => {
                RationalExponential::with_units(n, ea, a, b, order, u)?.into()
            }
            RateLawDef::Constant { a } => ConstantRate::with_units(a, order, u)?.into(),
            RateLawDef::ExponentialRational33 { a, b } => {
                ExponentialRational33::with_units(a, b, order, u)?.into()
            }
        })
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReactionDef {
    #[cfg_attr(feature = "serde", serde(default))]
    pub formula: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: ReactionCategory,
    /// Species names; a repeated name counts once per occurrence.
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub reversible: bool,
    pub rate_law: RateLawDef,
    /// Present for third-body reactions: absolute efficiencies of the listed
    /// species, everything else defaults to one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub efficiencies: Option<BTreeMap<String, f64>>,
}

impl ReactionDef {
    pub fn new(reactants: &[&str], products: &[&str], rate_law: RateLawDef) -> Self {
        Self {
            formula: None,
            category: ReactionCategory::default(),
            reactants: reactants.iter().map(|s| s.to_string()).collect(),
            products: products.iter().map(|s| s.to_string()).collect(),
            reversible: default_true(),
            rate_law,
            efficiencies: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MechanismDef {
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitsDef,
    pub species: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reactions: Vec<ReactionDef>,
    /// Optional NASA-7 fits, one per species in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub thermo: Vec<Nasa7>,
}

#[cfg(feature = "serde")]
impl MechanismDef {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(s)
            .map_err(|e| ConfigurationError::new("mechanism", "yaml", e.to_string()))
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigurationError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigurationError::new("mechanism", "yaml", e.to_string()))
    }
}

/// A loaded mechanism, ready to build managers from.
#[derive(Debug, Clone)]
pub struct Mechanism {
    pub species: Vec<String>,
    pub reactions: Vec<Reaction>,
    pub groups: SpeciesGroupTable,
    /// Species 0 is the free electron.
    pub electrons: bool,
    pub thermo: Vec<Nasa7>,
}

impl Mechanism {
    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    pub fn rate_manager(&self) -> KineticsResult<RateManager> {
        RateManager::new(self.species.len(), &self.reactions)
    }

    /// Third-body manager for this mechanism. The electron is left out of
    /// collision partner sums when `thermo` reports one.
    pub fn thirdbody_manager(
        &self,
        thermo: &dyn Thermodynamics,
    ) -> KineticsResult<ThirdbodyManager<SpeciesGroupTable>> {
        if thermo.n_species() != self.species.len() {
            return Err(ThermoError::DimensionMismatch {
                what: "thermodynamic provider",
                expected: self.species.len(),
                actual: thermo.n_species(),
            }
            .into());
        }
        ThirdbodyManager::from_reactions(
            self.species.len(),
            thermo.has_electrons(),
            self.groups.clone(),
            &self.reactions,
        )
    }
}

pub fn is_electron(name: &str) -> bool {
    matches!(name, "e-" | "E-" | "e")
}

/// Resolve species names and build every reaction with explicit units.
pub fn build_reactions(
    species: &[String],
    reactions: &[ReactionDef],
    units: &KineticsUnits,
) -> Result<Vec<Reaction>, ConfigurationError> {
    let index_of = |name: &str, rxn: usize| {
        species.iter().position(|s| s == name).ok_or_else(|| {
            ConfigurationError::new("species", name, format!("unknown in reaction {rxn}"))
        })
    };

    let mut out = Vec::with_capacity(reactions.len());
    for (i, def) in reactions.iter().enumerate() {
        let reactants = def
            .reactants
            .iter()
            .map(|n| index_of(n, i))
            .collect::<Result<Vec<_>, _>>()?;
        let products = def
            .products
            .iter()
            .map(|n| index_of(n, i))
            .collect::<Result<Vec<_>, _>>()?;
        if reactants.is_empty() || products.is_empty() {
            return Err(ConfigurationError::new(
                "reaction",
                def.formula.clone().unwrap_or_else(|| i.to_string()),
                "needs at least one reactant and one product",
            ));
        }

        let thirdbody = def.efficiencies.as_ref().map(|effs| {
            effs.iter()
                .filter_map(|(name, &e)| match species.iter().position(|s| s == name) {
                    Some(s) => Some((s, e)),
                    None => {
                        tracing::warn!(
                            rxn = i,
                            species = %name,
                            "third-body efficiency for unknown species ignored"
                        );
                        None
                    }
                })
                .collect::<Vec<_>>()
        });

        let order = reactants.len() as u32 + u32::from(thirdbody.is_some());
        let law = def.rate_law.build(order, units)?;

        let mut rxn = Reaction::new(
            def.category,
            Stoichiometry::from_species(&reactants),
            Stoichiometry::from_species(&products),
            law,
        );
        if !def.reversible {
            rxn = rxn.irreversible();
        }
        if let Some(f) = &def.formula {
            rxn = rxn.with_formula(f.clone());
        }
        if let Some(effs) = thirdbody {
            rxn = rxn.with_thirdbody(effs);
        }
        out.push(rxn);
    }
    Ok(out)
}

/// Load a mechanism definition.
pub fn load_mechanism(def: &MechanismDef) -> KineticsResult<Mechanism> {
    if let Some(dup) = def
        .species
        .iter()
        .enumerate()
        .find(|(i, s)| def.species[..*i].contains(s))
        .map(|(_, s)| s)
    {
        return Err(ConfigurationError::new("species", dup.as_str(), "listed twice").into());
    }
    if !def.thermo.is_empty() && def.thermo.len() != def.species.len() {
        return Err(ConfigurationError::new(
            "thermo",
            def.thermo.len().to_string(),
            format!("expected one fit per species ({})", def.species.len()),
        )
        .into());
    }

    let units = def.units.to_kinetics_units()?;
    let reactions = build_reactions(&def.species, &def.reactions, &units)?;
    let groups = SpeciesGroupTable::from_species_names(&def.species)?;
    let electrons = def.species.first().is_some_and(|s| is_electron(s));
    if let Some(extra) = def.species.iter().skip(1).find(|s| is_electron(s)) {
        return Err(ConfigurationError::new(
            "species",
            extra.as_str(),
            "the electron must be listed first",
        )
        .into());
    }

    tracing::info!(
        species = def.species.len(),
        reactions = reactions.len(),
        species_groups = rk_thermo::SpeciesGroups::n_species_groups(&groups),
        electrons,
        "mechanism loaded"
    );

    Ok(Mechanism {
        species: def.species.clone(),
        reactions,
        groups,
        electrons,
        thermo: def.thermo.clone(),
    })
}
