//! Testing utilities and harness for Slidecell
//!
//! The robot drives a real row headlessly: script pan gestures, pump
//! frames until animations settle, then assert on offsets, haptics, and
//! fired callbacks.

mod recorders;
mod robot;

pub use recorders::{CallCounter, RecordingHaptics};
pub use robot::SwipeRobot;
