use uom::{
    ConstZero,
    si::f64::{MassDensity, MassRate, Power, VolumeRate},
};

/// The state of the stream entering a transport element.
///
/// Carries the volumetric flow, mass flow, and mechanical energy at the
/// element's inlet. The local density is always derived from the flow pair,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConditions {
    pub volume_flow: VolumeRate,
    pub mass_flow: MassRate,
    pub energy: Power,
}

impl FlowConditions {
    /// The local stream density, `mass_flow / volume_flow`.
    ///
    /// Zero when the volumetric flow is zero: a stalled line has no
    /// meaningful density and downstream formulas must not divide by it.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        if self.volume_flow == VolumeRate::ZERO {
            MassDensity::ZERO
        } else {
            self.mass_flow / self.volume_flow
        }
    }
}
