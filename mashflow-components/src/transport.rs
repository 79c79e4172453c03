//! Transport elements connecting the process units.
//!
//! Pipes, bends, and valves conserve mass (their mass balance is the
//! identity) while dissipating mechanical energy according to their
//! geometry. The [`Pump`] is the one element that adds energy, solving an
//! energy-balance closure for its outlet flow.
//!
//! Elements are configuration-only and stateless across calls: construction
//! validates the geometry once, and every balance is a pure function of the
//! inlet [`FlowConditions`].

mod bend;
mod conditions;
mod pipe;
mod pump;
mod valve;

use std::f64::consts::PI;

use thiserror::Error;
use uom::{
    ConstZero,
    si::f64::{Area, Length, MassRate, Power},
};

use mashflow_core::{FractionError, constraint::ConstraintError};

pub use bend::{Bend, BendConfig};
pub use conditions::FlowConditions;
pub use pipe::{Pipe, PipeConfig};
pub use pump::{Pump, PumpConfig, PumpOutput};
pub use valve::{Valve, ValveConfig};

/// A passive transport element: mass through, energy dissipated.
pub trait Transport {
    /// The element's mass balance.
    ///
    /// Transport has no separative effect, so the inlet mass flow passes
    /// through unchanged.
    fn mass_balance(&self, inlet: MassRate) -> MassRate {
        inlet
    }

    /// The element's energy balance: outlet mechanical energy for the given
    /// inlet conditions.
    fn energy_balance(&self, inlet: &FlowConditions) -> Power;

    /// The flow area derived from the element's opening diameter.
    fn cross_sectional_area(&self) -> Area;
}

/// Errors that may occur when constructing a transport element.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The opening diameter does not define a usable flow area.
    #[error("opening diameter must be positive to derive a flow area (got {diameter:?})")]
    InvalidGeometry { diameter: Length },

    /// A loss coefficient or efficiency violated its numeric invariant.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// A bend factor fell outside `[0, 1]`.
    #[error(transparent)]
    Fraction(#[from] FractionError),
}

/// The flow area of a circular opening.
///
/// # Errors
///
/// Returns [`TransportError::InvalidGeometry`] for a non-positive diameter.
pub(crate) fn circular_area(diameter: Length) -> Result<Area, TransportError> {
    if diameter <= Length::ZERO {
        return Err(TransportError::InvalidGeometry { diameter });
    }
    Ok(0.25 * PI * diameter * diameter)
}
