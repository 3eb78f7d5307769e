//! Constraint vocabulary: views, attributes, relations, priorities.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying a view inside a [`crate::ConstraintSet`].
///
/// Views here are just layout participants; the widget crates decide what
/// each id means visually.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Allocates a fresh, process-unique view id.
    pub fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// The layout attribute a constraint acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Leading,
    Trailing,
    Top,
    Bottom,
    Width,
    Height,
    CenterX,
    CenterY,
}

impl Attribute {
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            Attribute::Leading | Attribute::Trailing | Attribute::Top | Attribute::Bottom
        )
    }

    pub fn is_dimension(&self) -> bool {
        matches!(self, Attribute::Width | Attribute::Height)
    }

    pub fn is_center(&self) -> bool {
        matches!(self, Attribute::CenterX | Attribute::CenterY)
    }
}

/// How a constraint relates its view to its target value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    /// `>=` — used for minimum dimensions.
    AtLeast,
    /// `<=` — used for maximum dimensions.
    AtMost,
}

/// Constraint priority ladder.
///
/// `WANTED` sits one notch under `REQUIRED` so a constraint can be strongly
/// preferred while still yielding to a required one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(pub u16);

impl Priority {
    pub const LOW: Priority = Priority(250);
    pub const HIGH: Priority = Priority(750);
    pub const WANTED: Priority = Priority(999);
    pub const REQUIRED: Priority = Priority(1000);
}

impl Default for Priority {
    fn default() -> Self {
        Priority::REQUIRED
    }
}
