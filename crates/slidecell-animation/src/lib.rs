//! Offset animation system for Slidecell
//!
//! Time-based tweens and physics-based springs over a single scalar
//! offset, driven by explicit frame-time callbacks. Every animation start
//! mints a token; starting a new animation invalidates the previous
//! token, so a superseded settle can never write the value again.

mod animation;
mod animator;

pub use animation::{AnimationSpec, AnimationType, Easing, Lerp, SpringSpec};
pub use animator::{AnimationToken, OffsetAnimator};
