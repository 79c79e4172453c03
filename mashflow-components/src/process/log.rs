use serde::Serialize;
use uom::si::{mass_rate::kilogram_per_second, volume_rate::cubic_meter_per_second};

use mashflow_core::{Component, Fraction, MassFlows, Mixture, VolumeFlows};

/// One basis of a [`StreamLog`]: ordered series of amounts, compositions,
/// and totals.
///
/// All series in a basis grow in lockstep: one entry per recorded stream,
/// at the same index across every sub-series. Amounts are raw SI values
/// (kg/s on the mass basis, m³/s on the volume basis) so a plotting
/// collaborator can consume them directly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Series {
    amounts: Mixture<Vec<f64>>,
    compositions: Mixture<Vec<f64>>,
    totals: Vec<f64>,
}

impl Series {
    /// The ordered amount series for one component.
    #[must_use]
    pub fn amounts(&self, component: Component) -> &[f64] {
        self.amounts.get(component)
    }

    /// The ordered composition series for one component.
    #[must_use]
    pub fn compositions(&self, component: Component) -> &[f64] {
        self.compositions.get(component)
    }

    /// The ordered series of derived totals.
    #[must_use]
    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// The number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether nothing has been recorded on this basis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    fn push(&mut self, amounts: Mixture<f64>, compositions: Mixture<f64>, total: f64) {
        self.amounts.ethanol.push(amounts.ethanol);
        self.amounts.water.push(amounts.water);
        self.amounts.sugar.push(amounts.sugar);
        self.amounts.fiber.push(amounts.fiber);
        self.compositions.ethanol.push(compositions.ethanol);
        self.compositions.water.push(compositions.water);
        self.compositions.sugar.push(compositions.sugar);
        self.compositions.fiber.push(compositions.fiber);
        self.totals.push(total);
    }
}

/// An append-only record of streams seen at one side of a process unit.
///
/// Entries are indexable as `[mass|volume][amounts|compositions][component]`,
/// each an ordered `f64` series. The log is owned by its
/// [`Process`](super::Process) and only ever appended to by it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamLog {
    mass: Series,
    volume: Series,
}

impl StreamLog {
    /// The mass-basis series.
    #[must_use]
    pub fn mass(&self) -> &Series {
        &self.mass
    }

    /// The volume-basis series.
    #[must_use]
    pub fn volume(&self) -> &Series {
        &self.volume
    }

    /// Appends one mass-basis entry across every sub-series.
    pub(super) fn record_mass(&mut self, flows: &MassFlows, fractions: &Mixture<Fraction>) {
        self.mass.push(
            flows.into_mixture().map(|r| r.get::<kilogram_per_second>()),
            fractions.map(Fraction::get),
            flows.total().get::<kilogram_per_second>(),
        );
    }

    /// Appends one volume-basis entry across every sub-series.
    pub(super) fn record_volume(&mut self, flows: &VolumeFlows, fractions: &Mixture<Fraction>) {
        self.volume.push(
            flows
                .into_mixture()
                .map(|r| r.get::<cubic_meter_per_second>()),
            fractions.map(Fraction::get),
            flows.total().get::<cubic_meter_per_second>(),
        );
    }
}
