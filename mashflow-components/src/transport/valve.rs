use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Area, Length, Power},
    length::meter,
};

use mashflow_core::constraint::{Constrained, NonNegative};

use super::{FlowConditions, Transport, TransportError, circular_area};

/// Configuration for an in-line valve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValveConfig {
    pub diameter: Length,
    /// Resistance coefficient K of the valve at its current opening.
    pub resistance_coefficient: f64,
}

impl Default for ValveConfig {
    fn default() -> Self {
        Self {
            diameter: Length::new::<meter>(0.1),
            resistance_coefficient: 2.0,
        }
    }
}

/// An in-line valve.
///
/// Mass passes through unchanged; mechanical energy drops by
/// `mass_flow · velocity² · K / 2`.
#[derive(Debug, Clone, Copy)]
pub struct Valve {
    resistance_coefficient: Constrained<f64, NonNegative>,
    area: Area,
}

impl Valve {
    /// Builds a valve from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the diameter is not positive or the
    /// resistance coefficient is negative.
    pub fn new(config: ValveConfig) -> Result<Self, TransportError> {
        Ok(Self {
            resistance_coefficient: NonNegative::new(config.resistance_coefficient)?,
            area: circular_area(config.diameter)?,
        })
    }
}

impl Transport for Valve {
    fn energy_balance(&self, inlet: &FlowConditions) -> Power {
        let velocity = inlet.volume_flow / self.area;
        let loss =
            inlet.mass_flow * velocity * velocity * self.resistance_coefficient.into_inner() * 0.5;
        inlet.energy - loss
    }

    fn cross_sectional_area(&self) -> Area {
        self.area
    }
}
