//! Stream representations and unit conversions for the Mashflow process model.
//!
//! The process line tracks a closed four-component liquid mixture (ethanol,
//! water, sugar, fiber) at constant component densities. This crate defines
//! the canonical [`Component`] set, the fixed-arity [`Mixture`] record every
//! stream representation is built from, and the validated amount streams
//! ([`MassFlows`], [`VolumeFlows`]) with the conversions between the mass and
//! volume bases and their composition forms.
//!
//! Totals are always derived by summation; no representation stores a total
//! as ground truth. A composition alone carries no throughput, so recovering
//! amounts from one always requires an accompanying strictly positive total.

mod component;
mod fraction;
mod mixture;
mod stream;

pub mod constraint;

pub use component::Component;
pub use fraction::{Fraction, FractionError};
pub use mixture::Mixture;
pub use stream::{CompositionError, MassFlows, VolumeFlows};
