//! Mock thermodynamic providers with hand-picked Gibbs energies.
//!
//! G/RT is the same at every temperature, so ln(Keq) of any reaction can be
//! worked out by hand from the standard-state shift alone.

use rk_kinetics::{
    Arrhenius, ConstantRate, RationalExponential, Reaction, ReactionCategory, Stoichiometry,
};
use rk_thermo::{ThermoState, Thermodynamics};

/// Temperature-independent G/RT per species.
pub struct FixedGibbs {
    pub g_over_rt: Vec<f64>,
    pub state: ThermoState,
    pub electrons: bool,
}

impl FixedGibbs {
    pub fn new(g_over_rt: Vec<f64>, t: f64, te: f64, tv: f64) -> Self {
        Self {
            g_over_rt,
            state: ThermoState::from_kelvin(t, te, tv, 1.0e4).unwrap(),
            electrons: false,
        }
    }

    pub fn set_temperatures(&mut self, t: f64, te: f64, tv: f64) {
        self.state = ThermoState::from_kelvin(t, te, tv, self.state.p()).unwrap();
    }
}

impl Thermodynamics for FixedGibbs {
    fn n_species(&self) -> usize {
        self.g_over_rt.len()
    }

    fn state(&self) -> &ThermoState {
        &self.state
    }

    fn has_electrons(&self) -> bool {
        self.electrons
    }

    fn species_g_over_rt(&self, _t: f64, out: &mut [f64]) {
        out.copy_from_slice(&self.g_over_rt);
    }
}

/// Species: e-, N2, N, N+. A mix of categories, kinds and reversibility.
pub fn nitrogen_mechanism() -> Vec<Reaction> {
    let s = Stoichiometry::from_species;
    vec![
        // N2 + M = 2N + M
        Reaction::new(
            ReactionCategory::DissociationM,
            s(&[1]),
            s(&[2, 2]),
            Arrhenius::new(7.0e15, -1.6, 113_200.0).unwrap(),
        )
        .with_thirdbody(vec![(2, 4.2857)]),
        // N + e- = N+ + 2e-
        Reaction::new(
            ReactionCategory::IonizationE,
            s(&[2, 0]),
            s(&[3, 0, 0]),
            Arrhenius::new(2.5e28, -3.82, 168_600.0).unwrap(),
        ),
        // N2 + N = 3N, irreversible
        Reaction::new(
            ReactionCategory::Exchange,
            s(&[1, 2]),
            s(&[2, 2, 2]),
            ConstantRate::new(3.0e2).unwrap(),
        )
        .irreversible(),
        // 2N + M = N2 + M
        Reaction::new(
            ReactionCategory::RecombinationM,
            s(&[2, 2]),
            s(&[1]),
            RationalExponential::new(-0.5, 0.0, [1.0e3, 0.2, 0.0], [1.0, 1.0e-4, 0.0, 0.0])
                .unwrap(),
        )
        .with_thirdbody(vec![]),
        // N+ + e- = N (electron attachment at Te, reverse at T)
        Reaction::new(
            ReactionCategory::ElectronicAttachmentM,
            s(&[3, 0]),
            s(&[2]),
            Arrhenius::new(1.0e6, 0.5, 0.0).unwrap(),
        ),
    ]
}
