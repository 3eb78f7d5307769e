//! Pure math/data types shared by the Slidecell crates.
//!
//! Nothing in here touches layout or interaction logic; these are the
//! plain value types the rest of the workspace speaks in.

mod color;
mod geometry;

pub use color::Color;
pub use geometry::{EdgeInsets, Icon, Point, Rect, Size, Velocity};
