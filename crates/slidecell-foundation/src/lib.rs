//! Pan input plumbing and host hooks for Slidecell.
//!
//! The host toolkit delivers raw pan events; this crate provides the
//! event vocabulary, the directional filter that keeps a horizontal menu
//! from hijacking a vertical scroll, and the haptic hook the interaction
//! core fires through.

pub mod haptics;
pub mod input;

pub use haptics::{HapticEngine, ImpactStyle, NoopHaptics};
pub use input::{DirectionalPanRecognizer, PanAxis, PanEvent, PanPhase};
