//! Constraint builders & frame resolution for Slidecell
//!
//! This crate is pure structural wiring: it creates, replaces, and stores
//! layout constraints, and resolves them into frames. It makes no
//! interaction decisions; the widgets own those.

mod attributes;
mod constraint;
mod resolver;
mod store;

pub use attributes::{Attribute, Priority, Relation, ViewId};
pub use constraint::{Anchor, Constraint, ConstraintId};
pub use resolver::{resolve_frames, FrameMap, LayoutContext};
pub use store::{ConstraintSet, EdgeConstraintIds};
