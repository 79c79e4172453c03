//! Unit-operation mass balances.
//!
//! Each unit is a pure transformation from an inlet mass-rate mixture to an
//! outlet mass-rate mixture. Entries are optional: `None` means "undefined
//! due to absent upstream composition", a signal distinct from zero that
//! propagates through each formula to exactly the outputs that depend on it.
//! [`Distillation`] and [`Dehydration`] depend on the full composition, so
//! any undefined inlet component leaves all four of their outputs undefined.

mod dehydration;
mod distillation;
mod fermentation;
mod filtration;

use thiserror::Error;
use uom::si::f64::MassRate;

use mashflow_core::Mixture;

pub use dehydration::Dehydration;
pub use distillation::Distillation;
pub use fermentation::Fermentation;
pub use filtration::Filtration;

/// A unit operation's pure mass balance.
///
/// Implementations transform per-component mass rates and nothing else: no
/// logging, no stored stream state, no side effects. The processing engine
/// in [`crate::process`] wraps a balance with normalization and recording.
pub trait MassBalance {
    /// Applies the unit's balance to an inlet mixture.
    ///
    /// # Errors
    ///
    /// Returns a [`BalanceError`] if the balance is undefined for the inlet
    /// (distillation with no non-ethanol mass).
    fn balance(
        &self,
        inlet: Mixture<Option<MassRate>>,
    ) -> Result<Mixture<Option<MassRate>>, BalanceError>;
}

/// Errors that may occur when evaluating a mass balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BalanceError {
    /// Distillation's carryover formula divides by the non-ethanol mass,
    /// which is zero for this inlet.
    #[error("distillation carryover is undefined when water, sugar, and fiber are all zero")]
    ZeroResidualMass,
}
