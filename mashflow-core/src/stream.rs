use thiserror::Error;
use uom::{
    ConstZero,
    si::f64::{MassDensity, MassRate, VolumeRate},
};

use crate::{
    Component, Fraction, FractionError, Mixture,
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
};

/// An amount-form stream on the mass basis: per-component mass flow rates.
///
/// Every entry is validated non-negative at construction, so totals and
/// derived compositions are always well-formed. The total is never stored;
/// it is recomputed from the entries on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFlows(Mixture<MassRate>);

impl MassFlows {
    /// Creates a mass-basis amount stream from per-component rates.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if any component rate is negative or NaN.
    pub fn new(rates: Mixture<MassRate>) -> Result<Self, ConstraintError> {
        for rate in rates.to_array() {
            NonNegative::check(&rate)?;
        }
        Ok(Self(rates))
    }

    /// Recovers amounts from a mass-basis composition and its total mass rate.
    ///
    /// Each component rate is `fraction × total`. The total must be strictly
    /// positive: a composition alone carries no throughput.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `total` is not strictly positive.
    pub fn from_composition(
        fractions: Mixture<Fraction>,
        total: MassRate,
    ) -> Result<Self, ConstraintError> {
        let total = StrictlyPositive::new(total)?.into_inner();
        Ok(Self(fractions.map(|f| total * f.get())))
    }

    /// Recovers mass-basis amounts from a volume-basis composition and its
    /// total volumetric flow.
    ///
    /// Each component rate is `fraction × total_flow × density`, with the
    /// total recomputed by summation afterwards; a caller-supplied mass
    /// total is never accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `total_flow` is not strictly positive.
    pub fn from_volume_composition(
        fractions: Mixture<Fraction>,
        total_flow: VolumeRate,
    ) -> Result<Self, ConstraintError> {
        Ok(VolumeFlows::from_composition(fractions, total_flow)?.to_mass())
    }

    /// Converts to the volume basis through the component density table.
    #[must_use]
    pub fn to_volume(&self) -> VolumeFlows {
        VolumeFlows(Mixture::from_fn(|c| *self.0.get(c) / c.density()))
    }

    /// The total mass rate, derived by summation.
    #[must_use]
    pub fn total(&self) -> MassRate {
        self.0.ethanol + self.0.water + self.0.sugar + self.0.fiber
    }

    /// The normalized mass-basis composition.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ZeroTotal`] for a zero-mass stream, whose
    /// composition is undefined.
    pub fn composition(&self) -> Result<Mixture<Fraction>, CompositionError> {
        let total = self.total();
        if total <= MassRate::ZERO {
            return Err(CompositionError::ZeroTotal);
        }
        let fractions = self.0.map(|rate| Fraction::new((rate / total).value));
        Ok(Mixture {
            ethanol: fractions.ethanol?,
            water: fractions.water?,
            sugar: fractions.sugar?,
            fiber: fractions.fiber?,
        })
    }

    /// The rate of a single component.
    #[must_use]
    pub fn get(&self, component: Component) -> MassRate {
        *self.0.get(component)
    }

    /// Consumes the stream and returns the underlying mixture record.
    #[must_use]
    pub fn into_mixture(self) -> Mixture<MassRate> {
        self.0
    }
}

/// An amount-form stream on the volume basis: per-component volumetric flow rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeFlows(Mixture<VolumeRate>);

impl VolumeFlows {
    /// Creates a volume-basis amount stream from per-component rates.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if any component rate is negative or NaN.
    pub fn new(rates: Mixture<VolumeRate>) -> Result<Self, ConstraintError> {
        for rate in rates.to_array() {
            NonNegative::check(&rate)?;
        }
        Ok(Self(rates))
    }

    /// Recovers amounts from a volume-basis composition and its total flow.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `total` is not strictly positive.
    pub fn from_composition(
        fractions: Mixture<Fraction>,
        total: VolumeRate,
    ) -> Result<Self, ConstraintError> {
        let total = StrictlyPositive::new(total)?.into_inner();
        Ok(Self(fractions.map(|f| total * f.get())))
    }

    /// Recovers volume-basis amounts from a mass-basis composition and its
    /// total mass rate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `total_mass` is not strictly positive.
    pub fn from_mass_composition(
        fractions: Mixture<Fraction>,
        total_mass: MassRate,
    ) -> Result<Self, ConstraintError> {
        Ok(MassFlows::from_composition(fractions, total_mass)?.to_volume())
    }

    /// Converts to the mass basis through the component density table.
    #[must_use]
    pub fn to_mass(&self) -> MassFlows {
        MassFlows(Mixture::from_fn(|c| *self.0.get(c) * c.density()))
    }

    /// The total volumetric flow, derived by summation.
    #[must_use]
    pub fn total(&self) -> VolumeRate {
        self.0.ethanol + self.0.water + self.0.sugar + self.0.fiber
    }

    /// The normalized volume-basis composition.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ZeroTotal`] for a zero-flow stream, whose
    /// composition is undefined.
    pub fn composition(&self) -> Result<Mixture<Fraction>, CompositionError> {
        let total = self.total();
        if total <= VolumeRate::ZERO {
            return Err(CompositionError::ZeroTotal);
        }
        let fractions = self.0.map(|rate| Fraction::new((rate / total).value));
        Ok(Mixture {
            ethanol: fractions.ethanol?,
            water: fractions.water?,
            sugar: fractions.sugar?,
            fiber: fractions.fiber?,
        })
    }

    /// The rate of a single component.
    #[must_use]
    pub fn get(&self, component: Component) -> VolumeRate {
        *self.0.get(component)
    }

    /// Consumes the stream and returns the underlying mixture record.
    #[must_use]
    pub fn into_mixture(self) -> Mixture<VolumeRate> {
        self.0
    }
}

impl Mixture<Fraction> {
    /// The density of a mixture with this volume-fraction composition,
    /// weighted over the component density table.
    #[must_use]
    pub fn weighted_density(&self) -> MassDensity {
        Component::ALL
            .into_iter()
            .map(|c| c.density() * self.get(c).get())
            .sum()
    }

    /// The sum of the four fractions.
    ///
    /// Sums to one (within floating tolerance) for a composition derived
    /// from a valid amount stream; an arbitrary `Mixture<Fraction>` may sum
    /// to anything in `[0, 4]`.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.ethanol.get() + self.water.get() + self.sugar.get() + self.fiber.get()
    }
}

/// Errors that may occur when deriving a composition from an amount stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    /// The stream's total is zero, so no normalized composition exists.
    #[error("composition is undefined for a stream with zero total flow")]
    ZeroTotal,

    /// A derived fraction fell outside `[0, 1]`.
    #[error(transparent)]
    Fraction(#[from] FractionError),
}
