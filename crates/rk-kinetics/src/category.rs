//! Reaction categories and their evaluation temperatures.
//!
//! A category fixes which temperature drives the forward and the reverse
//! rate coefficient. The mapping is a flat table indexed by the category
//! discriminant, resolved once per reaction at classification time.

use std::fmt;
use std::str::FromStr;

use rk_core::ConfigurationError;

use crate::selector::TemperatureSelector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ReactionCategory {
    AssociativeIonization,
    DissociativeRecombination,
    AssociativeDetachment,
    DissociativeAttachment,
    DissociationE,
    RecombinationE,
    DissociationM,
    RecombinationM,
    IonizationE,
    IonRecombinationE,
    IonizationM,
    IonRecombinationM,
    ElectronicAttachmentM,
    ElectronicDetachmentM,
    ElectronicAttachmentE,
    ElectronicDetachmentE,
    Exchange,
    ExcitationM,
    ExcitationE,
    #[default]
    Unclassified,
}

use TemperatureSelector::{Electron as Te, Park, Translational as T};

/// (name, forward, reverse) in discriminant order.
const TABLE: [(&str, TemperatureSelector, TemperatureSelector); 20] = [
    ("associative_ionization", T, Te),
    ("dissociative_recombination", Te, T),
    ("associative_detachment", T, Te),
    ("dissociative_attachment", Te, T),
    ("dissociation_e", Te, Te),
    ("recombination_e", Te, Te),
    ("dissociation_m", Park, T),
    ("recombination_m", T, Park),
    ("ionization_e", Te, Te),
    ("ion_recombination_e", Te, Te),
    ("ionization_m", T, T),
    ("ion_recombination_m", T, T),
    ("electronic_attachment_m", Te, T),
    ("electronic_detachment_m", T, Te),
    ("electronic_attachment_e", Te, Te),
    ("electronic_detachment_e", Te, Te),
    ("exchange", T, T),
    ("excitation_m", T, T),
    ("excitation_e", Te, Te),
    ("unclassified", T, T),
];

impl ReactionCategory {
    pub const ALL: [ReactionCategory; 20] = [
        ReactionCategory::AssociativeIonization,
        ReactionCategory::DissociativeRecombination,
        ReactionCategory::AssociativeDetachment,
        ReactionCategory::DissociativeAttachment,
        ReactionCategory::DissociationE,
        ReactionCategory::RecombinationE,
        ReactionCategory::DissociationM,
        ReactionCategory::RecombinationM,
        ReactionCategory::IonizationE,
        ReactionCategory::IonRecombinationE,
        ReactionCategory::IonizationM,
        ReactionCategory::IonRecombinationM,
        ReactionCategory::ElectronicAttachmentM,
        ReactionCategory::ElectronicDetachmentM,
        ReactionCategory::ElectronicAttachmentE,
        ReactionCategory::ElectronicDetachmentE,
        ReactionCategory::Exchange,
        ReactionCategory::ExcitationM,
        ReactionCategory::ExcitationE,
        ReactionCategory::Unclassified,
    ];

    /// (forward, reverse) evaluation temperatures.
    #[inline]
    pub fn selectors(self) -> (TemperatureSelector, TemperatureSelector) {
        let (_, fwd, rev) = TABLE[self as usize];
        (fwd, rev)
    }

    /// snake_case name used in mechanism files.
    pub fn name(self) -> &'static str {
        TABLE[self as usize].0
    }
}

impl fmt::Display for ReactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReactionCategory {
    type Err = ConfigurationError;

    /// Accepts `dissociation_m`, `DISSOCIATION_M` or `DissociationM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        TABLE
            .iter()
            .position(|(name, _, _)| name.replace('_', "") == key)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ConfigurationError::new("reaction category", s, "unknown category"))
    }
}

impl TryFrom<String> for ReactionCategory {
    type Error = ConfigurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReactionCategory> for String {
    fn from(c: ReactionCategory) -> Self {
        c.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_discriminant_order() {
        for (i, cat) in ReactionCategory::ALL.iter().enumerate() {
            assert_eq!(*cat as usize, i);
        }
    }

    #[test]
    fn selector_table() {
        use ReactionCategory as C;
        assert_eq!(C::DissociationM.selectors(), (Park, T));
        assert_eq!(C::RecombinationM.selectors(), (T, Park));
        assert_eq!(C::AssociativeIonization.selectors(), (T, Te));
        assert_eq!(C::DissociativeRecombination.selectors(), (Te, T));
        assert_eq!(C::ElectronicDetachmentM.selectors(), (T, Te));
        assert_eq!(C::ExcitationE.selectors(), (Te, Te));
        assert_eq!(C::Exchange.selectors(), (T, T));
        assert_eq!(C::default().selectors(), (T, T));
    }

    #[test]
    fn parses_any_spelling() {
        for cat in ReactionCategory::ALL {
            assert_eq!(cat.name().parse::<ReactionCategory>().unwrap(), cat);
            assert_eq!(
                format!("{cat:?}").parse::<ReactionCategory>().unwrap(),
                cat
            );
            assert_eq!(
                cat.name().to_uppercase().parse::<ReactionCategory>().unwrap(),
                cat
            );
        }
    }

    #[test]
    fn unknown_category_is_a_configuration_error() {
        let err = "fusion".parse::<ReactionCategory>().unwrap_err();
        assert_eq!(err.what, "reaction category");
        assert_eq!(err.value, "fusion");
    }
}
