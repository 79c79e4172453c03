use uom::si::f64::MassRate;

use mashflow_core::{
    Mixture,
    constraint::{ConstraintError, Efficiency},
};

use super::{BalanceError, MassBalance};

/// Mass of ethanol produced per unit mass of sugar consumed.
const ETHANOL_YIELD: f64 = 0.51;

/// Converts sugar to ethanol at a fixed yield.
///
/// With efficiency η, a sugar inlet rate `s` yields `0.51·η·s` of ethanol and
/// leaves `(1−η)·s` of sugar unconverted. Water passes through whenever sugar
/// is defined, and fiber always passes through.
///
/// The CO₂ byproduct of fermentation is not modeled, so total mass is not
/// exactly conserved across this unit.
#[derive(Debug, Clone, Copy)]
pub struct Fermentation {
    efficiency: Efficiency,
}

impl Fermentation {
    /// Creates a fermentation unit with the given efficiency.
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

impl MassBalance for Fermentation {
    fn balance(
        &self,
        inlet: Mixture<Option<MassRate>>,
    ) -> Result<Mixture<Option<MassRate>>, BalanceError> {
        let eta = self.efficiency.into_inner();
        Ok(Mixture {
            ethanol: inlet.sugar.map(|sugar| ETHANOL_YIELD * eta * sugar),
            water: inlet.sugar.and(inlet.water),
            sugar: inlet.sugar.map(|sugar| (1.0 - eta) * sugar),
            fiber: inlet.fiber,
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

    fn rate(value: Option<MassRate>) -> f64 {
        value.unwrap().get::<kilogram_per_second>()
    }

    #[test]
    fn converts_sugar_at_fixed_yield() {
        let unit = Fermentation::new(0.85).unwrap();
        let outlet = unit
            .balance(Mixture::new(kg_s(0.0), kg_s(100.0), kg_s(50.0), kg_s(20.0)))
            .unwrap();

        assert_relative_eq!(rate(outlet.ethanol), 21.675);
        assert_relative_eq!(rate(outlet.water), 100.0);
        assert_relative_eq!(rate(outlet.sugar), 7.5);
        assert_relative_eq!(rate(outlet.fiber), 20.0);
    }

    #[test]
    fn perfect_unit_consumes_all_sugar() {
        let unit = Fermentation::new(1.0).unwrap();
        let outlet = unit
            .balance(Mixture::new(kg_s(0.0), kg_s(10.0), kg_s(40.0), kg_s(0.0)))
            .unwrap();

        assert_relative_eq!(rate(outlet.ethanol), 0.51 * 40.0);
        assert_relative_eq!(rate(outlet.sugar), 0.0);
    }

    #[test]
    fn undefined_sugar_leaves_dependents_undefined() {
        let unit = Fermentation::new(0.85).unwrap();
        let outlet = unit
            .balance(Mixture::new(kg_s(0.0), kg_s(100.0), None, kg_s(20.0)))
            .unwrap();

        assert_eq!(outlet.ethanol, None);
        assert_eq!(outlet.water, None);
        assert_eq!(outlet.sugar, None);
        assert_relative_eq!(rate(outlet.fiber), 20.0);
    }

    #[test]
    fn rejects_out_of_range_efficiency() {
        assert!(Fermentation::new(0.0).is_err());
        assert!(Fermentation::new(1.2).is_err());
    }
}
