use uom::si::f64::MassRate;

use mashflow_core::{
    Mixture,
    constraint::{ConstraintError, Efficiency},
};

use super::{BalanceError, MassBalance};

/// Removes a fraction of the fiber, passing everything else through.
///
/// With efficiency η, the outlet fiber rate is `(1−η)·fiber`; ethanol,
/// water, and sugar are unchanged. Each outlet depends only on its own
/// inlet, so an undefined component stays undefined without affecting the
/// other three.
#[derive(Debug, Clone, Copy)]
pub struct Filtration {
    efficiency: Efficiency,
}

impl Filtration {
    /// Creates a filtration unit with the given efficiency.
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

impl MassBalance for Filtration {
    fn balance(
        &self,
        inlet: Mixture<Option<MassRate>>,
    ) -> Result<Mixture<Option<MassRate>>, BalanceError> {
        let eta = self.efficiency.into_inner();
        Ok(Mixture {
            fiber: inlet.fiber.map(|fiber| (1.0 - eta) * fiber),
            ..inlet
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass_rate::kilogram_per_second;

    fn kg_s(value: f64) -> Option<MassRate> {
        Some(MassRate::new::<kilogram_per_second>(value))
    }

    #[test]
    fn removes_fiber_only() {
        let unit = Filtration::new(0.9).unwrap();
        let outlet = unit
            .balance(Mixture::new(kg_s(25.0), kg_s(100.0), kg_s(5.0), kg_s(20.0)))
            .unwrap();

        assert_relative_eq!(outlet.fiber.unwrap().get::<kilogram_per_second>(), 2.0);
        assert_eq!(outlet.ethanol, kg_s(25.0));
        assert_eq!(outlet.water, kg_s(100.0));
        assert_eq!(outlet.sugar, kg_s(5.0));
    }

    #[test]
    fn undefined_components_pass_through_independently() {
        let unit = Filtration::new(0.9).unwrap();
        let outlet = unit
            .balance(Mixture::new(None, kg_s(100.0), kg_s(5.0), None))
            .unwrap();

        assert_eq!(outlet.ethanol, None);
        assert_eq!(outlet.fiber, None);
        assert_eq!(outlet.water, kg_s(100.0));
        assert_eq!(outlet.sugar, kg_s(5.0));
    }
}
