use std::cmp::Ordering;

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// Used for the totals that accompany composition-form streams: a total of
/// zero cannot distribute any throughput across the components.
///
/// # Examples
///
/// ```
/// use mashflow_core::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(150.0).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-150.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::Zero`] if the value is exactly zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: Zero + PartialOrd>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: Zero + PartialOrd> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Greater) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::VolumeRate, volume_rate::cubic_meter_per_second};

    #[test]
    fn accepts_positive_only() {
        assert!(StrictlyPositive::new(0.001).is_ok());
        assert!(matches!(
            StrictlyPositive::new(0.0),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(-2.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn works_with_quantities() {
        let q = VolumeRate::new::<cubic_meter_per_second>(0.01);
        assert!(StrictlyPositive::new(q).is_ok());
        assert!(StrictlyPositive::new(q - q).is_err());
    }
}
