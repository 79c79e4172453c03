use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{
        f64::{Area, Length, MassDensity, MassRate, Power, VolumeRate},
        length::meter,
    },
};

use mashflow_core::{Fraction, Mixture, constraint::Efficiency};

use super::{TransportError, circular_area};

/// Configuration for the line's pump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpConfig {
    pub name: String,
    /// Rated head.
    pub performance_rating: Length,
    /// Cost in USD per m³/s of flow rate.
    pub cost_rate: f64,
    pub efficiency: f64,
    pub opening_diameter: Length,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            name: "Pump".to_string(),
            performance_rating: Length::ZERO,
            cost_rate: 0.0,
            efficiency: 1.0,
            opening_diameter: Length::new::<meter>(0.1),
        }
    }
}

/// The result of pumping an inlet stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpOutput {
    pub mass_flow: MassRate,
    pub volume_flow: VolumeRate,
    pub power: Power,
}

/// The one transport element that adds mechanical energy to the stream.
///
/// The pump reads the inlet's volume-fraction composition to find the local
/// density, converts the inlet's kinetic energy at its opening into the
/// energy it adds (scaled by its efficiency), and solves the energy-balance
/// closure `flow_out = (2·energy_added·area²/density)^(1/3)` for the outlet
/// flow.
#[derive(Debug, Clone)]
pub struct Pump {
    name: String,
    performance_rating: Length,
    cost_rate: f64,
    efficiency: Efficiency,
    area: Area,
}

impl Pump {
    /// Builds a pump from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the opening diameter is not positive
    /// (no flow area exists) or the efficiency is outside `(0, 1]`.
    pub fn new(config: PumpConfig) -> Result<Self, TransportError> {
        Ok(Self {
            name: config.name,
            performance_rating: config.performance_rating,
            cost_rate: config.cost_rate,
            efficiency: Efficiency::new(config.efficiency)?,
            area: circular_area(config.opening_diameter)?,
        })
    }

    /// The pump's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pump's rated head.
    #[must_use]
    pub fn performance_rating(&self) -> Length {
        self.performance_rating
    }

    /// Cost in USD per m³/s of flow rate.
    #[must_use]
    pub fn cost_rate(&self) -> f64 {
        self.cost_rate
    }

    /// The pump's efficiency η.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency.into_inner()
    }

    /// The flow area at the pump's opening.
    #[must_use]
    pub fn cross_sectional_area(&self) -> Area {
        self.area
    }

    /// Pumps an inlet stream, returning the outlet flows and the power drawn.
    ///
    /// The inlet density is the composition-weighted average of the
    /// component densities. A zero density (an empty composition) leaves
    /// nothing to pump: both outlet flows are zero.
    #[must_use]
    pub fn process(&self, inlet_flow: VolumeRate, composition: &Mixture<Fraction>) -> PumpOutput {
        let density = composition.weighted_density();
        let mass_flow = inlet_flow * density;

        let velocity = inlet_flow / self.area;
        let kinetic = mass_flow * velocity * velocity * 0.5;
        let added = kinetic * self.efficiency.into_inner();
        let power = kinetic + added;

        if density == MassDensity::ZERO {
            return PumpOutput {
                mass_flow: MassRate::ZERO,
                volume_flow: VolumeRate::ZERO,
                power,
            };
        }

        let volume_flow = (2.0 * added * self.area * self.area / density).cbrt();
        PumpOutput {
            mass_flow: volume_flow * density,
            volume_flow,
            power,
        }
    }
}
