use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{
        f64::{Area, Length, MassRate, Power, VolumeRate},
        length::meter,
    },
};

use mashflow_core::Fraction;

use super::{FlowConditions, Transport, TransportError, circular_area};

/// Configuration for a pipe bend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendConfig {
    pub diameter: Length,
    pub bend_radius: Length,
    /// Smoothness of the bend in `[0, 1]`: 1 is a perfectly smooth turn
    /// with no loss, 0 turns the full kinetic head into loss.
    pub bend_factor: f64,
}

impl Default for BendConfig {
    fn default() -> Self {
        Self {
            diameter: Length::new::<meter>(0.1),
            bend_radius: Length::new::<meter>(0.1),
            bend_factor: 0.8,
        }
    }
}

/// A bend in the line.
///
/// Mass passes through unchanged; mechanical energy drops by
/// `mass_flow · (1 − bend_factor) · velocity² / 2` with
/// `velocity = flow / cross_sectional_area`.
#[derive(Debug, Clone, Copy)]
pub struct Bend {
    bend_radius: Length,
    bend_factor: Fraction,
    area: Area,
}

impl Bend {
    /// Builds a bend from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the diameter is not positive or the
    /// bend factor is outside `[0, 1]`.
    pub fn new(config: BendConfig) -> Result<Self, TransportError> {
        Ok(Self {
            bend_radius: config.bend_radius,
            bend_factor: Fraction::new(config.bend_factor)?,
            area: circular_area(config.diameter)?,
        })
    }

    /// The bend's centerline radius.
    #[must_use]
    pub fn bend_radius(&self) -> Length {
        self.bend_radius
    }
}

impl Transport for Bend {
    fn energy_balance(&self, inlet: &FlowConditions) -> Power {
        // A stalled line loses nothing.
        if inlet.volume_flow == VolumeRate::ZERO || inlet.mass_flow == MassRate::ZERO {
            return inlet.energy;
        }

        let velocity = inlet.volume_flow / self.area;
        let loss = inlet.mass_flow * velocity * velocity * self.bend_factor.complement().get() * 0.5;
        inlet.energy - loss
    }

    fn cross_sectional_area(&self) -> Area {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, power::watt, volume_rate::cubic_meter_per_second,
    };

    fn inlet() -> FlowConditions {
        FlowConditions {
            volume_flow: VolumeRate::new::<cubic_meter_per_second>(0.01),
            mass_flow: MassRate::new::<kilogram_per_second>(9.97),
            energy: Power::new::<watt>(100.0),
        }
    }

    #[test]
    fn conserves_mass() {
        let bend = Bend::new(BendConfig::default()).unwrap();
        assert_eq!(bend.mass_balance(inlet().mass_flow), inlet().mass_flow);
        assert_relative_eq!(bend.bend_radius().get::<meter>(), 0.1);
    }

    #[test]
    fn dissipates_part_of_the_kinetic_head() {
        let bend = Bend::new(BendConfig::default()).unwrap();
        let outlet = bend.energy_balance(&inlet());

        let area = 0.25 * std::f64::consts::PI * 0.01;
        let velocity = 0.01 / area;
        let expected_loss = 9.97 * (1.0 - 0.8) * velocity * velocity / 2.0;
        assert_relative_eq!(outlet.get::<watt>(), 100.0 - expected_loss);
    }

    #[test]
    fn stalled_line_passes_energy_through() {
        let bend = Bend::new(BendConfig::default()).unwrap();

        let no_volume = FlowConditions {
            volume_flow: VolumeRate::ZERO,
            ..inlet()
        };
        assert_eq!(bend.energy_balance(&no_volume), no_volume.energy);

        let no_mass = FlowConditions {
            mass_flow: MassRate::ZERO,
            ..inlet()
        };
        assert_eq!(bend.energy_balance(&no_mass), no_mass.energy);
    }

    #[test]
    fn rejects_out_of_range_bend_factor() {
        let config = BendConfig {
            bend_factor: 1.5,
            ..BendConfig::default()
        };
        assert!(Bend::new(config).is_err());
    }
}
