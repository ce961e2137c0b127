//! Third-body efficiency corrections to rates of progress.
//!
//! For a third-body reaction the collision partner concentration is
//!
//! ```text
//! [M] = Σ_{j ≥ offset} c_j + Σ_s (e_s − 1) c_s + Σ_g (e_g − 1) C_g
//! ```
//!
//! where `C_g` is the summed concentration of species group `g`. Only
//! deviations from the default efficiency of one are stored, so the cost per
//! reaction follows the number of special partners, not the species count.
//! The electron is excluded from the baseline (offset 1) when it is species 0
//! and the caller asks for it.

use rk_thermo::{SpeciesGroupTable, SpeciesGroups, ThermoError};

use crate::error::{KineticsError, KineticsResult};
use crate::reaction::Reaction;

#[derive(Debug, Clone, PartialEq)]
struct PartialEfficiencies {
    rxn: usize,
    species: Vec<(usize, f64)>,
    groups: Vec<(usize, f64)>,
}

impl PartialEfficiencies {
    #[inline]
    fn collision_sum(&self, base: f64, conc: &[f64], group_sums: &[f64]) -> f64 {
        let mut sum = base;
        for &(s, dev) in &self.species {
            sum += dev * conc[s];
        }
        for &(g, dev) in &self.groups {
            sum += dev * group_sums[g];
        }
        sum
    }
}

#[derive(Debug, Clone)]
pub struct ThirdbodyManager<G: SpeciesGroups> {
    ns: usize,
    offset: usize,
    groups: G,
    group_sums: Vec<f64>,
    records: Vec<PartialEfficiencies>,
    uses_groups: bool,
}

impl<G: SpeciesGroups> ThirdbodyManager<G> {
    /// `exclude_electrons` drops species 0 (the electron) from the baseline
    /// sum. `groups` must partition exactly `ns` species.
    pub fn new(ns: usize, exclude_electrons: bool, groups: G) -> KineticsResult<Self> {
        if groups.n_species() != ns {
            return Err(ThermoError::DimensionMismatch {
                what: "species group provider",
                expected: ns,
                actual: groups.n_species(),
            }
            .into());
        }
        let n_groups = groups.n_species_groups();
        Ok(Self {
            ns,
            offset: usize::from(exclude_electrons && ns > 0),
            groups,
            group_sums: vec![0.0; n_groups],
            records: Vec::new(),
            uses_groups: false,
        })
    }

    /// Manage reaction `rxn` with the given efficiency deviations (`e − 1`)
    /// per species and per species group.
    pub fn add_reaction(
        &mut self,
        rxn: usize,
        species_devs: Vec<(usize, f64)>,
        group_devs: Vec<(usize, f64)>,
    ) -> KineticsResult<()> {
        if let Some(&(s, _)) = species_devs.iter().find(|(s, _)| *s >= self.ns) {
            return Err(KineticsError::SpeciesIndex {
                rxn,
                species: s,
                n_species: self.ns,
            });
        }
        let n_groups = self.group_sums.len();
        if let Some(&(g, _)) = group_devs.iter().find(|(g, _)| *g >= n_groups) {
            return Err(ThermoError::DimensionMismatch {
                what: "species group index",
                expected: n_groups,
                actual: g,
            }
            .into());
        }
        self.uses_groups |= !group_devs.is_empty();
        self.records.push(PartialEfficiencies {
            rxn,
            species: species_devs,
            groups: group_devs,
        });
        Ok(())
    }

    /// Scale the rate of progress of every managed reaction by its collision
    /// partner concentration. Other entries of `rates` are left untouched.
    pub fn multiply_thirdbodies(&mut self, conc: &[f64], rates: &mut [f64]) {
        debug_assert!(conc.len() >= self.ns);
        let base: f64 = conc[self.offset..self.ns].iter().sum();
        if self.uses_groups {
            self.groups
                .sum_species_group_values(&conc[..self.ns], &mut self.group_sums);
        }
        for record in &self.records {
            rates[record.rxn] *= record.collision_sum(base, conc, &self.group_sums);
        }
    }

    pub fn n_reactions(&self) -> usize {
        self.records.len()
    }

    /// Reaction indices managed, in registration order.
    pub fn reactions(&self) -> impl Iterator<Item = usize> + '_ {
        self.records.iter().map(|r| r.rxn)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl ThirdbodyManager<SpeciesGroupTable> {
    /// Build records from every third-body reaction's absolute efficiencies.
    ///
    /// When all members of a multi-member group carry the same efficiency the
    /// group deviation replaces the member deviations.
    pub fn from_reactions(
        ns: usize,
        exclude_electrons: bool,
        groups: SpeciesGroupTable,
        reactions: &[Reaction],
    ) -> KineticsResult<Self> {
        let mut manager = Self::new(ns, exclude_electrons, groups)?;
        let groups = &manager.groups;

        let mut effs: Vec<Option<f64>> = vec![None; ns];
        let mut plans = Vec::new();

        for (i, rxn) in reactions.iter().enumerate() {
            let Some(list) = rxn.efficiencies() else {
                continue;
            };

            effs.fill(None);
            for &(s, e) in list {
                if s >= ns {
                    return Err(KineticsError::SpeciesIndex {
                        rxn: i,
                        species: s,
                        n_species: ns,
                    });
                }
                if exclude_electrons && s == 0 {
                    tracing::warn!(rxn = i, "ignoring third-body efficiency of the excluded electron");
                    continue;
                }
                effs[s] = Some(e);
            }

            let mut species_devs = Vec::new();
            let mut group_devs = Vec::new();
            for g in 0..groups.n_species_groups() {
                let members = groups.members(g);
                let first = effs[members[0]];
                let shared = members.len() > 1 && members.iter().all(|&s| effs[s] == first);
                match (shared, first) {
                    (true, Some(e)) => {
                        if e != 1.0 {
                            group_devs.push((g, e - 1.0));
                        }
                    }
                    _ => species_devs.extend(
                        members
                            .iter()
                            .filter_map(|&s| effs[s].map(|e| (s, e - 1.0)))
                            .filter(|&(_, dev)| dev != 0.0),
                    ),
                }
            }
            species_devs.sort_unstable_by_key(|&(s, _)| s);
            plans.push((i, species_devs, group_devs));
        }

        for (i, species_devs, group_devs) in plans {
            manager.add_reaction(i, species_devs, group_devs)?;
        }

        tracing::info!(
            thirdbody_reactions = manager.n_reactions(),
            species_groups = manager.group_sums.len(),
            electrons_excluded = manager.offset == 1,
            "third-body manager ready"
        );
        Ok(manager)
    }
}
