//! Reaction records consumed by the rate and third-body managers.

use crate::category::ReactionCategory;
use crate::rate_law::RateLaw;

/// Sparse stoichiometry: (species index, coefficient) pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stoichiometry(Vec<(usize, u32)>);

impl Stoichiometry {
    /// Build from pairs, merging repeated species.
    pub fn new(pairs: impl IntoIterator<Item = (usize, u32)>) -> Self {
        let mut merged: Vec<(usize, u32)> = Vec::new();
        for (s, nu) in pairs {
            if nu == 0 {
                continue;
            }
            match merged.iter_mut().find(|(m, _)| *m == s) {
                Some((_, total)) => *total += nu,
                None => merged.push((s, nu)),
            }
        }
        Self(merged)
    }

    /// From a list of species indices where repeats count multiply
    /// (`[0, 0, 3]` is 2 A + D).
    pub fn from_species(species: &[usize]) -> Self {
        Self::new(species.iter().map(|&s| (s, 1)))
    }

    /// Sum of coefficients.
    pub fn order(&self) -> u32 {
        self.0.iter().map(|(_, nu)| nu).sum()
    }

    /// Σ ν_s values[s].
    #[inline]
    pub fn dot(&self, values: &[f64]) -> f64 {
        self.0.iter().map(|&(s, nu)| f64::from(nu) * values[s]).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, u32)> {
        self.0.iter()
    }

    pub fn species(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&(s, _)| s)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One elementary reaction.
///
/// Index in the mechanism is positional: the managers take a slice of
/// reactions and reaction `i` lives at `reactions[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    formula: Option<String>,
    category: ReactionCategory,
    reactants: Stoichiometry,
    products: Stoichiometry,
    rate_law: RateLaw,
    reversible: bool,
    thirdbody: Option<Vec<(usize, f64)>>,
}

impl Reaction {
    /// Reversible reaction with no third body.
    pub fn new(
        category: ReactionCategory,
        reactants: Stoichiometry,
        products: Stoichiometry,
        rate_law: impl Into<RateLaw>,
    ) -> Self {
        Self {
            formula: None,
            category,
            reactants,
            products,
            rate_law: rate_law.into(),
            reversible: true,
            thirdbody: None,
        }
    }

    pub fn irreversible(mut self) -> Self {
        self.reversible = false;
        self
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Mark as a third-body reaction with absolute efficiencies for the
    /// listed species (unlisted species default to 1).
    pub fn with_thirdbody(mut self, efficiencies: Vec<(usize, f64)>) -> Self {
        self.thirdbody = Some(efficiencies);
        self
    }

    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    pub fn category(&self) -> ReactionCategory {
        self.category
    }

    pub fn reactants(&self) -> &Stoichiometry {
        &self.reactants
    }

    pub fn products(&self) -> &Stoichiometry {
        &self.products
    }

    pub fn rate_law(&self) -> &RateLaw {
        &self.rate_law
    }

    pub fn is_reversible(&self) -> bool {
        self.reversible
    }

    pub fn is_thirdbody(&self) -> bool {
        self.thirdbody.is_some()
    }

    /// Absolute third-body efficiencies, if this is a third-body reaction.
    pub fn efficiencies(&self) -> Option<&[(usize, f64)]> {
        self.thirdbody.as_deref()
    }

    /// Forward reaction order, counting the third body as one partner.
    pub fn order(&self) -> u32 {
        self.reactants.order() + u32::from(self.is_thirdbody())
    }

    /// Reverse reaction order.
    pub fn reverse_order(&self) -> u32 {
        self.products.order() + u32::from(self.is_thirdbody())
    }
}
