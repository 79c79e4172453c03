use std::cmp::Ordering;

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Works with any ordered type that has a zero, including `f64` and the
/// `uom` quantity types.
///
/// # Examples
///
/// ```
/// use mashflow_core::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.02).is_ok());
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if the value is zero or greater.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: Zero + PartialOrd>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: Zero + PartialOrd> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(Ordering::Equal | Ordering::Greater) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

    #[test]
    fn accepts_zero_and_positive() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(12.5).is_ok());
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(
            NonNegative::new(-1.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn works_with_quantities() {
        assert!(NonNegative::new(MassRate::new::<kilogram_per_second>(1.0)).is_ok());
        assert!(NonNegative::new(MassRate::new::<kilogram_per_second>(-1.0)).is_err());
    }
}
