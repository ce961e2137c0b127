//! End-to-end behaviour of the rate manager over a small mechanism.

mod common;

use common::{FixedGibbs, nitrogen_mechanism};
use rk_core::numeric::{ONE_ATM, RU};
use rk_kinetics::{
    Arrhenius, ExponentialRational33, KineticsError, RateLaw, RateManager, Reaction,
    ReactionCategory, ReverseRole, Stoichiometry, TemperatureSelector, TemperatureTerms,
    ln_equilibrium_constant,
};

const G: [f64; 4] = [-15.0, -30.0, 12.0, 40.0];

fn provider() -> FixedGibbs {
    FixedGibbs::new(G.to_vec(), 6000.0, 12_000.0, 3000.0)
}

/// ln(Keq) the way a caller would compute it by hand at temperature `t`.
fn ln_keq(rxn: &Reaction, t: f64) -> f64 {
    let shift = (RU * t / ONE_ATM).ln();
    let g_prime: Vec<f64> = G.iter().map(|g| g + shift).collect();
    ln_equilibrium_constant(rxn.reactants(), rxn.products(), &g_prime)
}

fn ln_rate(rxn: &Reaction, t: f64) -> f64 {
    rxn.rate_law()
        .ln_rate(&TemperatureTerms::new(t))
        .expect("logarithmic rate law")
}

#[test]
fn arrhenius_reference_value() {
    let reactions = vec![
        Reaction::new(
            ReactionCategory::Exchange,
            Stoichiometry::from_species(&[0]),
            Stoichiometry::from_species(&[1]),
            Arrhenius::new(1.0e10, 0.0, 10_000.0).unwrap(),
        )
        .irreversible(),
    ];
    let mut mgr = RateManager::new(2, &reactions).unwrap();
    mgr.update(&FixedGibbs::new(vec![0.0, 0.0], 1000.0, 1000.0, 1000.0));
    assert!((mgr.ln_kf()[0] - (1.0e10_f64.ln() - 10.0)).abs() < 1e-12);
}

#[test]
fn forward_rates_use_category_temperature() {
    let reactions = nitrogen_mechanism();
    let mut mgr = RateManager::new(4, &reactions).unwrap();
    let thermo = provider();
    mgr.update(&thermo);

    let park = (6000.0_f64 * 3000.0).sqrt();
    assert_eq!(mgr.ln_kf()[0], ln_rate(&reactions[0], park));
    assert_eq!(mgr.ln_kf()[1], ln_rate(&reactions[1], 12_000.0));
    assert_eq!(mgr.ln_kf()[2], ln_rate(&reactions[2], 6000.0));
    assert_eq!(mgr.ln_kf()[3], ln_rate(&reactions[3], 6000.0));
    assert_eq!(mgr.ln_kf()[4], ln_rate(&reactions[4], 12_000.0));
}

#[test]
fn equilibrium_subtraction_is_exact() {
    let reactions = nitrogen_mechanism();
    let mut mgr = RateManager::new(4, &reactions).unwrap();
    mgr.update(&provider());

    // dissociation: reverse evaluated at T on its own
    let x = ln_rate(&reactions[0], 6000.0);
    assert_eq!(mgr.ln_kb()[0], x - ln_keq(&reactions[0], 6000.0));

    // ionization by electron impact: shortcut at Te
    let x = mgr.ln_kf()[1];
    assert_eq!(mgr.ln_kb()[1], x - ln_keq(&reactions[1], 12_000.0));

    // recombination: reverse at Park
    let park = (6000.0_f64 * 3000.0).sqrt();
    let x = ln_rate(&reactions[3], park);
    assert_eq!(mgr.ln_kb()[3], x - ln_keq(&reactions[3], park));

    // attachment: forward at Te, reverse at T
    let x = ln_rate(&reactions[4], 6000.0);
    assert_eq!(mgr.ln_kb()[4], x - ln_keq(&reactions[4], 6000.0));
}

#[test]
fn shortcut_reactions_reuse_forward_value() {
    let reactions = nitrogen_mechanism();
    let mut mgr = RateManager::new(4, &reactions).unwrap();
    mgr.update(&provider());

    assert_eq!(mgr.shortcut_reactions(), &[1]);
    let class = mgr.classification(1).unwrap();
    assert_eq!(class.role, ReverseRole::Shortcut);
    assert_eq!(class.reverse, Some(class.forward));

    // only one entry for reaction 1 in the whole collection
    let forward = mgr.groups().group(class.forward);
    assert_eq!(forward.key().selector, TemperatureSelector::Electron);
    let total_entries: usize = mgr.groups().iter().map(|g| g.len()).sum();
    // 5 forward entries + 3 evaluated reverses (0, 3, 4)
    assert_eq!(total_entries, 8);
}

#[test]
fn irreversible_ln_kb_is_never_written() {
    let reactions = nitrogen_mechanism();
    let mut mgr = RateManager::new(4, &reactions).unwrap();
    assert_eq!(mgr.irreversible_reactions(), &[2]);

    let mut thermo = provider();
    for (t, te) in [(6000.0, 12_000.0), (300.0, 300.0), (20_000.0, 5000.0)] {
        thermo.set_temperatures(t, te, t);
        mgr.update(&thermo);
        assert_eq!(mgr.ln_kb()[2], 0.0);
        assert_eq!(mgr.rate_coefficients()[mgr.n_reactions() + 2], 0.0);
    }
}

#[test]
fn update_is_idempotent() {
    let reactions = nitrogen_mechanism();
    let mut mgr = RateManager::new(4, &reactions).unwrap();
    let thermo = provider();

    mgr.update(&thermo);
    let first = mgr.rate_coefficients().to_vec();
    mgr.update(&thermo);
    assert_eq!(mgr.rate_coefficients(), first.as_slice());
}

#[test]
fn buffer_address_is_stable() {
    let reactions = nitrogen_mechanism();
    let mut mgr = RateManager::new(4, &reactions).unwrap();
    let before = mgr.ln_kf().as_ptr();
    let mut thermo = provider();
    mgr.update(&thermo);
    thermo.set_temperatures(1000.0, 1000.0, 1000.0);
    mgr.update(&thermo);
    assert_eq!(mgr.ln_kf().as_ptr(), before);
    assert_eq!(mgr.rate_coefficients().as_ptr(), before);
    assert_eq!(
        mgr.ln_kb().as_ptr(),
        mgr.rate_coefficients()[mgr.n_reactions()..].as_ptr()
    );
}

#[test]
fn electron_temperature_only_moves_electron_reactions() {
    let reactions = nitrogen_mechanism();
    let mut mgr = RateManager::new(4, &reactions).unwrap();
    let mut thermo = provider();
    mgr.update(&thermo);
    let before = mgr.ln_kf().to_vec();

    thermo.set_temperatures(6000.0, 15_000.0, 3000.0);
    mgr.update(&thermo);
    let after = mgr.ln_kf();

    assert_eq!(after[0], before[0]);
    assert_ne!(after[1], before[1]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[3], before[3]);
    assert_ne!(after[4], before[4]);
}

#[test]
fn forward_derivatives_match_finite_difference() {
    let reactions = vec![
        Reaction::new(
            ReactionCategory::Exchange,
            Stoichiometry::from_species(&[0]),
            Stoichiometry::from_species(&[1]),
            Arrhenius::new(5.0e9, 0.7, 9000.0).unwrap(),
        ),
    ];
    let mut mgr = RateManager::new(2, &reactions).unwrap();
    let t = 4000.0;
    let h = 1e-3;

    let mut kf = |temp: f64| {
        mgr.update(&FixedGibbs::new(vec![0.0, 0.0], temp, temp, temp));
        mgr.ln_kf()[0].exp()
    };
    let numeric = (kf(t + h) - kf(t - h)) / (2.0 * h);

    let thermo = FixedGibbs::new(vec![0.0, 0.0], t, t, t);
    mgr.update(&thermo);
    let mut dk = [0.0];
    mgr.forward_rate_derivatives(&thermo, &mut dk);
    assert!((dk[0] - numeric).abs() <= 1e-6 * numeric.abs());
}

#[test]
fn exp_rat33_is_rejected_at_construction() {
    let law = ExponentialRational33::new([1.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0]).unwrap();
    let mut reactions = nitrogen_mechanism();
    reactions.push(Reaction::new(
        ReactionCategory::Exchange,
        Stoichiometry::from_species(&[1]),
        Stoichiometry::from_species(&[2, 2]),
        RateLaw::from(law),
    ));
    match RateManager::new(4, &reactions) {
        Err(KineticsError::Configuration(err)) => {
            assert_eq!(err.what, "rate law");
            assert_eq!(err.value, "exp_rat33");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}
