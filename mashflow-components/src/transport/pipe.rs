use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Area, Length, Power},
    length::meter,
    mass_rate::kilogram_per_second,
    power::watt,
    volume_rate::cubic_meter_per_second,
};

use mashflow_core::constraint::{Constrained, NonNegative};

use super::{FlowConditions, Transport, TransportError, circular_area};

/// Configuration for a straight pipe run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeConfig {
    pub diameter: Length,
    pub length: Length,
    pub friction_factor: f64,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            diameter: Length::new::<meter>(0.1),
            length: Length::new::<meter>(1.0),
            friction_factor: 0.02,
        }
    }
}

/// A straight pipe run.
///
/// Mass passes through unchanged; mechanical energy drops by the friction
/// loss `mass_flow · 8·f·flow² / (π²·d⁵)`.
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    diameter: Length,
    length: Length,
    friction_factor: Constrained<f64, NonNegative>,
    area: Area,
}

impl Pipe {
    /// Builds a pipe from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the diameter is not positive or the
    /// friction factor is negative.
    pub fn new(config: PipeConfig) -> Result<Self, TransportError> {
        Ok(Self {
            diameter: config.diameter,
            length: config.length,
            friction_factor: NonNegative::new(config.friction_factor)?,
            area: circular_area(config.diameter)?,
        })
    }

    /// The pipe's run length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }
}

impl Transport for Pipe {
    fn energy_balance(&self, inlet: &FlowConditions) -> Power {
        // The correlation is not dimensionally closed (the friction factor
        // absorbs the length scale), so it is evaluated on raw SI values.
        let mass_flow = inlet.mass_flow.get::<kilogram_per_second>();
        let flow = inlet.volume_flow.get::<cubic_meter_per_second>();
        let diameter = self.diameter.get::<meter>();
        let friction = self.friction_factor.into_inner();

        let loss = mass_flow * 8.0 * friction * flow * flow
            / (std::f64::consts::PI.powi(2) * diameter.powi(5));
        inlet.energy - Power::new::<watt>(loss)
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
        f64::{MassRate, VolumeRate},
        mass_rate::kilogram_per_second,
        volume_rate::cubic_meter_per_second,
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
        let pipe = Pipe::new(PipeConfig::default()).unwrap();
        assert_eq!(pipe.mass_balance(inlet().mass_flow), inlet().mass_flow);
        assert_relative_eq!(pipe.length().get::<meter>(), 1.0);
    }

    #[test]
    fn dissipates_the_friction_loss() {
        let pipe = Pipe::new(PipeConfig::default()).unwrap();
        let outlet = pipe.energy_balance(&inlet());

        let expected_loss =
            9.97 * 8.0 * 0.02 * 0.01_f64.powi(2) / (std::f64::consts::PI.powi(2) * 0.1_f64.powi(5));
        assert_relative_eq!(outlet.get::<watt>(), 100.0 - expected_loss);
    }

    #[test]
    fn rejects_bad_geometry() {
        let config = PipeConfig {
            diameter: Length::new::<meter>(0.0),
            ..PipeConfig::default()
        };
        assert!(matches!(
            Pipe::new(config),
            Err(TransportError::InvalidGeometry { .. })
        ));

        let config = PipeConfig {
            friction_factor: -0.01,
            ..PipeConfig::default()
        };
        assert!(matches!(
            Pipe::new(config),
            Err(TransportError::Constraint(_))
        ));
    }
}
