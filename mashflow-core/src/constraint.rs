//! Type-level numeric constraints with zero runtime cost.
//!
//! This module lets you express numeric constraints like "non-negative" or
//! "strictly positive" at the type level, with zero runtime overhead after
//! construction. APIs that accept a [`Constrained`] value can trust that the
//! value always satisfies the required invariant.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: Zero or greater (loss coefficients, friction factors)
//! - [`StrictlyPositive`]: Greater than zero (totals accompanying compositions)
//! - [`UnitIntervalLeftOpen`]: Within `(0, 1]` (unit efficiencies)
//!
//! Each marker can be used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`]. Each also
//! provides an associated `new()` constructor for convenience.
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLeftOpen};

/// A unit efficiency η in `(0, 1]`.
///
/// Every unit operation's effectiveness is a strictly positive fraction of an
/// ideal transformation; an efficiency of exactly one is a perfect unit.
pub type Efficiency = Constrained<f64, UnitIntervalLeftOpen>;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric
/// constraint, such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as
/// [`NonNegative`]) or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use mashflow_core::constraint::{Constrained, StrictlyPositive};
///
/// let n = Constrained::<_, StrictlyPositive>::new(42).unwrap();
/// assert_eq!(n.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrained_preserves_the_value() {
        let n = Constrained::<_, StrictlyPositive>::new(3.5).unwrap();
        assert_eq!(n.into_inner(), 3.5);
        assert_eq!(Constrained::<_, NonNegative>::new(0.0).unwrap().as_ref(), &0.0);
    }

    #[test]
    fn efficiency_alias_covers_the_left_open_unit_interval() {
        assert!(Efficiency::new(1.0).is_ok());
        assert!(Efficiency::new(0.5).is_ok());
        assert!(matches!(
            Efficiency::new(0.0),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            Efficiency::new(1.5),
            Err(ConstraintError::AboveMaximum)
        ));
    }
}
