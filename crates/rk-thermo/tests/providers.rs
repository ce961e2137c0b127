//! The thermodynamic providers as the kinetics engine sees them: through
//! trait objects only.

use rk_core::units::{k, pa};
use rk_thermo::{
    Nasa7, Nasa7Thermo, SpeciesGroupTable, SpeciesGroups, ThermoState, Thermodynamics,
};

fn air_like() -> Nasa7Thermo {
    let state = ThermoState::new(k(6000.0), k(9000.0), k(4000.0), pa(2000.0)).unwrap();
    let species = vec![
        // e-
        Nasa7::uniform([2.5, 0.0, 0.0, 0.0, 0.0, -745.375, -11.72]),
        // N2, two-range
        Nasa7 {
            t_mid: 1000.0,
            low: [3.53, -1.2e-4, -5.0e-8, 2.4e-9, -1.4e-12, -1047.0, 2.97],
            high: [2.95, 1.4e-3, -4.9e-7, 7.9e-11, -4.6e-15, -923.9, 5.87],
        },
        // N
        Nasa7::uniform([2.5, 0.0, 0.0, 0.0, 0.0, 56_104.0, 4.19]),
    ];
    Nasa7Thermo::new(species, true, state).unwrap()
}

#[test]
fn provider_through_trait_object() {
    let thermo = air_like();
    let dyn_thermo: &dyn Thermodynamics = &thermo;

    assert_eq!(dyn_thermo.n_species(), 3);
    assert!(dyn_thermo.has_electrons());
    assert_eq!(dyn_thermo.state().te(), 9000.0);

    let mut g = vec![0.0; 3];
    dyn_thermo.species_g_over_rt(dyn_thermo.state().t(), &mut g);
    assert!(g.iter().all(|v| v.is_finite()));
    // the atom's formation enthalpy dominates at moderate temperature
    assert!(g[2] > g[1]);
}

#[test]
fn gibbs_depends_on_requested_temperature_not_state() {
    let mut thermo = air_like();
    let mut at_t = vec![0.0; 3];
    let mut at_te = vec![0.0; 3];
    thermo.species_g_over_rt(6000.0, &mut at_t);
    thermo.species_g_over_rt(9000.0, &mut at_te);
    assert_ne!(at_t, at_te);

    thermo.set_state(ThermoState::equilibrium(k(300.0), pa(1.0e5)).unwrap());
    let mut again = vec![0.0; 3];
    thermo.species_g_over_rt(6000.0, &mut again);
    assert_eq!(again, at_t);
}

#[test]
fn excited_states_group_for_third_body_sums() {
    let names = ["e-", "N2(X)", "N2(0)", "N2(1)", "N", "N(2,1)"];
    let table = SpeciesGroupTable::from_species_names(&names).unwrap();
    // N2(X) is not a level suffix, so it stays its own group
    assert_eq!(table.n_species_groups(), 4);
    assert_eq!(table.members(2), &[2, 3]);
    assert_eq!(table.members(3), &[4, 5]);

    let groups: &dyn SpeciesGroups = &table;
    let mut sums = vec![0.0; groups.n_species_groups()];
    groups.sum_species_group_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &mut sums);
    assert_eq!(sums, vec![1.0, 2.0, 7.0, 11.0]);
}
