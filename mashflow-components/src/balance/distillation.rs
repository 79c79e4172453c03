use uom::{ConstZero, si::f64::MassRate};

use mashflow_core::{
    Mixture,
    constraint::{ConstraintError, Efficiency},
};

use super::{BalanceError, MassBalance};

/// Separates ethanol overhead with an efficiency-controlled carryover.
///
/// Ethanol passes through unchanged. Each non-ethanol component `c` carries
/// over as `c · ethanol · (1/η − 1) / Σ(water, sugar, fiber)`: a perfect
/// unit (η = 1) carries nothing over, and lower efficiencies carry
/// proportionally more of the residual into the overhead.
///
/// Every outlet depends on the full inlet composition, so any undefined
/// inlet component leaves all four outlets undefined.
#[derive(Debug, Clone, Copy)]
pub struct Distillation {
    efficiency: Efficiency,
}

impl Distillation {
    /// Creates a distillation unit with the given efficiency.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `efficiency` is outside `(0, 1]`.
    pub fn new(efficiency: f64) -> Result<Self, ConstraintError> {
        Ok(Self {
            efficiency: Efficiency::new(efficiency)?,
        })
    }

    /// The unit's efficiency η.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency.into_inner()
    }
}

impl MassBalance for Distillation {
    fn balance(
        &self,
        inlet: Mixture<Option<MassRate>>,
    ) -> Result<Mixture<Option<MassRate>>, BalanceError> {
        let Some(defined) = inlet.transpose() else {
            return Ok(Mixture::uniform(None));
        };

        let residual = defined.water + defined.sugar + defined.fiber;
        if residual <= MassRate::ZERO {
            return Err(BalanceError::ZeroResidualMass);
        }

        let eta = self.efficiency.into_inner();
        let carryover = defined.ethanol * (1.0 / eta - 1.0) / residual;
        Ok(Mixture {
            ethanol: Some(defined.ethanol),
            water: Some(defined.water * carryover),
            sugar: Some(defined.sugar * carryover),
            fiber: Some(defined.fiber * carryover),
        })
    }
}
