use slidecell_ui_graphics::{Point, Velocity};

/// Phase of a pan gesture as delivered by the host toolkit.
///
/// Delivery is serialized: `Began`, zero or more `Changed`, then exactly
/// one terminal `Ended` or `Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One pan gesture sample.
///
/// `translation` is cumulative since `Began`; `velocity` is the host's
/// instantaneous estimate in logical pixels per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    pub translation: Point,
    pub velocity: Velocity,
}

impl PanEvent {
    pub fn began() -> Self {
        Self {
            phase: PanPhase::Began,
            translation: Point::ZERO,
            velocity: Velocity::ZERO,
        }
    }

    pub fn changed(translation: Point, velocity: Velocity) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation,
            velocity,
        }
    }

    pub fn ended(translation: Point, velocity: Velocity) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation,
            velocity,
        }
    }

    pub fn cancelled(translation: Point) -> Self {
        Self {
            phase: PanPhase::Cancelled,
            translation,
            velocity: Velocity::ZERO,
        }
    }
}
