//! Species groups built from excited-state naming.
//!
//! Mechanisms that resolve electronic or vibrational levels list each level
//! as its own species, named after the ground state with an index suffix:
//! `N2(0)`, `N2(1)`, `N(2,1)`. Third-body efficiencies are almost always
//! quoted per ground state, so grouping the levels lets a reaction carry one
//! group deviation instead of one deviation per level.

use crate::error::{ThermoError, ThermoResult};
use crate::model::SpeciesGroups;

/// Partition of the species list into groups.
///
/// Every species belongs to exactly one group; species without a level suffix
/// form a group of one. Groups are numbered in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesGroupTable {
    names: Vec<String>,
    members: Vec<Vec<usize>>,
    group_of: Vec<usize>,
}

impl SpeciesGroupTable {
    /// Group species sharing a ground-state name.
    pub fn from_species_names<S: AsRef<str>>(species: &[S]) -> ThermoResult<Self> {
        if species.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "empty species list".into(),
            });
        }

        let mut names: Vec<String> = Vec::new();
        let mut members: Vec<Vec<usize>> = Vec::new();
        let mut group_of = Vec::with_capacity(species.len());

        for (i, name) in species.iter().enumerate() {
            let ground = ground_state_name(name.as_ref());
            let g = match names.iter().position(|n| n == ground) {
                Some(g) => g,
                None => {
                    names.push(ground.to_string());
                    members.push(Vec::new());
                    names.len() - 1
                }
            };
            members[g].push(i);
            group_of.push(g);
        }

        Ok(Self {
            names,
            members,
            group_of,
        })
    }

    /// Build a table from explicit member lists.
    ///
    /// The lists must partition `0..n_species`.
    pub fn from_groups(n_species: usize, groups: Vec<(String, Vec<usize>)>) -> ThermoResult<Self> {
        let mut group_of = vec![usize::MAX; n_species];
        let mut names = Vec::with_capacity(groups.len());
        let mut members = Vec::with_capacity(groups.len());

        for (g, (name, list)) in groups.into_iter().enumerate() {
            if list.is_empty() {
                return Err(ThermoError::InvalidArg {
                    what: format!("species group '{name}' has no members"),
                });
            }
            for &s in &list {
                match group_of.get_mut(s) {
                    Some(slot) if *slot == usize::MAX => *slot = g,
                    Some(_) => {
                        return Err(ThermoError::InvalidArg {
                            what: format!("species {s} appears in more than one group"),
                        });
                    }
                    None => {
                        return Err(ThermoError::DimensionMismatch {
                            what: "species index in group",
                            expected: n_species,
                            actual: s,
                        });
                    }
                }
            }
            names.push(name);
            members.push(list);
        }

        if let Some(missing) = group_of.iter().position(|&g| g == usize::MAX) {
            return Err(ThermoError::InvalidArg {
                what: format!("species {missing} is not assigned to a group"),
            });
        }

        Ok(Self {
            names,
            members,
            group_of,
        })
    }

    /// Species indices belonging to group `g`.
    pub fn members(&self, g: usize) -> &[usize] {
        &self.members[g]
    }

    /// Group containing species `s`.
    pub fn group_of(&self, s: usize) -> usize {
        self.group_of[s]
    }

    /// Ground-state name of group `g`.
    pub fn name(&self, g: usize) -> &str {
        &self.names[g]
    }
}

impl SpeciesGroups for SpeciesGroupTable {
    fn n_species(&self) -> usize {
        self.group_of.len()
    }

    fn n_species_groups(&self) -> usize {
        self.members.len()
    }

    fn sum_species_group_values(&self, values: &[f64], out: &mut [f64]) {
        debug_assert_eq!(values.len(), self.n_species());
        for (sum, list) in out.iter_mut().zip(&self.members) {
            *sum = list.iter().map(|&s| values[s]).sum();
        }
    }
}

/// Strip an energy-level suffix such as `(1)` or `(2,0)` from a species name.
///
/// Suffixes that are not comma-separated integers are part of the name
/// (`C(gr)` stays `C(gr)`).
pub fn ground_state_name(name: &str) -> &str {
    let Some(stripped) = name.strip_suffix(')') else {
        return name;
    };
    let Some(open) = stripped.rfind('(') else {
        return name;
    };
    let indices = &stripped[open + 1..];
    let is_level = !indices.is_empty()
        && indices
            .split(',')
            .all(|tok| !tok.is_empty() && tok.trim().chars().all(|c| c.is_ascii_digit()));
    if is_level && open > 0 {
        &name[..open]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_state_names() {
        assert_eq!(ground_state_name("N2(1)"), "N2");
        assert_eq!(ground_state_name("N(2,1)"), "N");
        assert_eq!(ground_state_name("N2"), "N2");
        assert_eq!(ground_state_name("C(gr)"), "C(gr)");
        assert_eq!(ground_state_name("(1)"), "(1)");
        assert_eq!(ground_state_name("O()"), "O()");
    }

    #[test]
    fn groups_follow_first_appearance() {
        let table =
            SpeciesGroupTable::from_species_names(&["e-", "N2(0)", "N", "N2(1)", "N2(2)"]).unwrap();
        assert_eq!(table.n_species_groups(), 3);
        assert_eq!(table.name(1), "N2");
        assert_eq!(table.members(1), &[1, 3, 4]);
        assert_eq!(table.group_of(2), 2);
    }

    #[test]
    fn sums_over_members() {
        let table =
            SpeciesGroupTable::from_species_names(&["N2(0)", "N2(1)", "O", "N2(2)"]).unwrap();
        let mut sums = vec![0.0; table.n_species_groups()];
        table.sum_species_group_values(&[1.0, 2.0, 4.0, 8.0], &mut sums);
        assert_eq!(sums, vec![11.0, 4.0]);
    }

    #[test]
    fn explicit_groups_must_partition() {
        let ok = SpeciesGroupTable::from_groups(
            3,
            vec![("A".into(), vec![0, 2]), ("B".into(), vec![1])],
        );
        assert!(ok.is_ok());

        let overlap = SpeciesGroupTable::from_groups(
            2,
            vec![("A".into(), vec![0, 1]), ("B".into(), vec![1])],
        );
        assert!(overlap.is_err());

        let missing = SpeciesGroupTable::from_groups(3, vec![("A".into(), vec![0, 1])]);
        assert!(missing.is_err());

        let out_of_range = SpeciesGroupTable::from_groups(2, vec![("A".into(), vec![0, 1, 5])]);
        assert!(matches!(
            out_of_range,
            Err(ThermoError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_empty_species_list() {
        let empty: [&str; 0] = [];
        assert!(SpeciesGroupTable::from_species_names(&empty).is_err());
    }
}
