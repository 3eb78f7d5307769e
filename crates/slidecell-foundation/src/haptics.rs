//! Haptic feedback hook.
//!
//! Impacts are synchronous and fire-and-forget; engines must not block.

/// Strength of an impact pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Host-provided haptic trigger.
pub trait HapticEngine {
    fn impact(&self, style: ImpactStyle);
}

/// Engine that swallows all impacts. The default on hosts without a
/// vibration motor.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoopHaptics;

impl HapticEngine for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) {}
}
