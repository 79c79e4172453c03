use std::fmt;

use serde::{Deserialize, Serialize};
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

/// One component of the closed four-component mixture basis.
///
/// Every stream in the process line carries exactly these four species, in
/// this order. The basis is closed: nothing enters or leaves it, and each
/// component keeps a constant density (single liquid phase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Ethanol,
    Water,
    Sugar,
    Fiber,
}

impl Component {
    /// All components in canonical order.
    pub const ALL: [Component; 4] = [
        Component::Ethanol,
        Component::Water,
        Component::Sugar,
        Component::Fiber,
    ];

    /// The component's constant density.
    ///
    /// This table is the single process-wide source for component densities,
    /// consumed by both the conversion layer and the pump.
    #[must_use]
    pub fn density(self) -> MassDensity {
        let kg_per_m3 = match self {
            Component::Ethanol => 789.0,
            Component::Water => 997.0,
            Component::Sugar => 1590.0,
            Component::Fiber => 1311.0,
        };
        MassDensity::new::<kilogram_per_cubic_meter>(kg_per_m3)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Ethanol => "ethanol",
            Component::Water => "water",
            Component::Sugar => "sugar",
            Component::Fiber => "fiber",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn densities_match_the_reference_table() {
        let expected = [789.0, 997.0, 1590.0, 1311.0];
        for (component, density) in Component::ALL.into_iter().zip(expected) {
            assert_relative_eq!(
                component.density().get::<kilogram_per_cubic_meter>(),
                density
            );
        }
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Component::Ethanol.to_string(), "ethanol");
        assert_eq!(Component::Fiber.to_string(), "fiber");
    }
}
