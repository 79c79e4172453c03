use serde::{Deserialize, Serialize};

use crate::Component;

/// A fixed-arity record with one entry per [`Component`].
///
/// This is the shape every stream representation is built from: amounts are
/// `Mixture<MassRate>` or `Mixture<VolumeRate>`, compositions are
/// `Mixture<Fraction>`, and partially-defined streams are
/// `Mixture<Option<MassRate>>`. Holding one field per component makes the
/// four-component invariant structural: there is no way to construct a
/// stream with a missing or unknown species.
///
/// Mixtures are transient value objects: combinators consume and return
/// values, and nothing mutates one in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Mixture<T> {
    pub ethanol: T,
    pub water: T,
    pub sugar: T,
    pub fiber: T,
}

impl<T> Mixture<T> {
    /// Creates a mixture from its four entries in canonical order.
    pub const fn new(ethanol: T, water: T, sugar: T, fiber: T) -> Self {
        Self {
            ethanol,
            water,
            sugar,
            fiber,
        }
    }

    /// Creates a mixture with the same entry for every component.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            ethanol: value.clone(),
            water: value.clone(),
            sugar: value.clone(),
            fiber: value,
        }
    }

    /// Creates a mixture by evaluating `f` for each component in canonical order.
    pub fn from_fn(mut f: impl FnMut(Component) -> T) -> Self {
        Self {
            ethanol: f(Component::Ethanol),
            water: f(Component::Water),
            sugar: f(Component::Sugar),
            fiber: f(Component::Fiber),
        }
    }

    /// Returns a reference to the entry for the given component.
    pub fn get(&self, component: Component) -> &T {
        match component {
            Component::Ethanol => &self.ethanol,
            Component::Water => &self.water,
            Component::Sugar => &self.sugar,
            Component::Fiber => &self.fiber,
        }
    }

    /// Applies `f` to each entry, preserving the component order.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Mixture<U> {
        Mixture {
            ethanol: f(self.ethanol),
            water: f(self.water),
            sugar: f(self.sugar),
            fiber: f(self.fiber),
        }
    }

    /// Returns the entries as an array in canonical order.
    pub fn to_array(self) -> [T; 4] {
        [self.ethanol, self.water, self.sugar, self.fiber]
    }
}

impl<T> Mixture<Option<T>> {
    /// Converts a mixture of optional entries into an optional mixture.
    ///
    /// Returns `None` if any component is undefined. This is the "all or
    /// nothing" view used by operations that depend on the full composition.
    pub fn transpose(self) -> Option<Mixture<T>> {
        Some(Mixture {
            ethanol: self.ethanol?,
            water: self.water?,
            sugar: self.sugar?,
            fiber: self.fiber?,
        })
    }
}
