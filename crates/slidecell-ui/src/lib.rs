//! Swipeable row menu widgets for Slidecell
//!
//! A content view wrapped so it can be dragged horizontally to reveal one
//! or two action buttons per side. Dragging past the first barrier arms a
//! single button for instant fire on release; a button pair snaps open at
//! the second barrier and waits for an explicit tap.

mod button;
mod lane;
mod swipe;

pub use button::{ButtonSpec, MenuButton, BUTTON_CONTENT_INSET_LEADING};
pub use lane::{ButtonLane, ButtonMode, MenuSide, BUTTON_ALPHA_IN_SINGLE_MODE};
pub use swipe::{SwipeMenu, SwipePhase, SwipeState, LANE_CORNER_OVERLAP};
