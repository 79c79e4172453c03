use uom::si::f64::MassRate;

use mashflow_core::{
    Mixture,
    constraint::{ConstraintError, Efficiency},
};

use super::{BalanceError, MassBalance};

/// Removes a fraction of the water, passing everything else through.
///
/// With efficiency η, the outlet water rate is `(1−η)·water`. Like
/// [`Distillation`](super::Distillation), this final polishing step depends
/// on the full inlet composition: any undefined inlet component leaves all
/// four outlets undefined.
#[derive(Debug, Clone, Copy)]
pub struct Dehydration {
    efficiency: Efficiency,
}

impl Dehydration {
    /// Creates a dehydration unit with the given efficiency.
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

impl MassBalance for Dehydration {
    fn balance(
        &self,
        inlet: Mixture<Option<MassRate>>,
    ) -> Result<Mixture<Option<MassRate>>, BalanceError> {
        let Some(defined) = inlet.transpose() else {
            return Ok(Mixture::uniform(None));
        };

        let eta = self.efficiency.into_inner();
        Ok(Mixture {
            ethanol: Some(defined.ethanol),
            water: Some((1.0 - eta) * defined.water),
            sugar: Some(defined.sugar),
            fiber: Some(defined.fiber),
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
    fn removes_water_only() {
        let unit = Dehydration::new(0.95).unwrap();
        let outlet = unit
            .balance(Mixture::new(kg_s(50.0), kg_s(4.0), kg_s(0.5), kg_s(0.5)))
            .unwrap();

        assert_relative_eq!(outlet.water.unwrap().get::<kilogram_per_second>(), 0.2);
        assert_eq!(outlet.ethanol, kg_s(50.0));
        assert_eq!(outlet.sugar, kg_s(0.5));
        assert_eq!(outlet.fiber, kg_s(0.5));
    }

    #[test]
    fn any_undefined_inlet_leaves_every_outlet_undefined() {
        let unit = Dehydration::new(0.95).unwrap();
        let outlet = unit
            .balance(Mixture::new(kg_s(50.0), kg_s(4.0), None, kg_s(0.5)))
            .unwrap();

        assert_eq!(outlet, Mixture::uniform(None));
    }
}
