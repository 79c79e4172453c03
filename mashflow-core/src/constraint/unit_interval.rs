use std::cmp::Ordering;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Types with well-defined unit-interval endpoints.
///
/// Implemented for `f32` and `f64`; implement it for your own scalar type to
/// use it with [`UnitIntervalLeftOpen`].
pub trait UnitBounds: PartialOrd + Sized {
    /// The lower endpoint, zero.
    fn zero() -> Self;
    /// The upper endpoint, one.
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

/// Marker type enforcing that a value lies in the left-open unit interval: `0 < x ≤ 1`.
///
/// This is the domain of a unit efficiency: zero effectiveness is excluded
/// (several balance formulas divide by it), while a perfect unit is allowed.
///
/// # Examples
///
/// ```
/// use mashflow_core::constraint::{Constrained, UnitIntervalLeftOpen};
///
/// // Generic constructor:
/// let a = Constrained::<_, UnitIntervalLeftOpen>::new(0.85).unwrap();
/// assert_eq!(a.into_inner(), 0.85);
///
/// // Associated constructor:
/// let b = UnitIntervalLeftOpen::new(1.0).unwrap();
/// assert_eq!(b.as_ref(), &1.0);
///
/// // Error cases:
/// assert!(UnitIntervalLeftOpen::new(0.0).is_err());
/// assert!(UnitIntervalLeftOpen::new(1.5).is_err());
/// assert!(UnitIntervalLeftOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLeftOpen;

impl UnitIntervalLeftOpen {
    /// Constructs `Constrained<T, UnitIntervalLeftOpen>` if 0 < value ≤ 1.
    ///
    /// # Errors
    ///
    /// Fails if the value is outside the left-open unit interval:
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLeftOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLeftOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLeftOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
