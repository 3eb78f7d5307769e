//! The constraint value type stored by [`crate::ConstraintSet`].

use crate::{Attribute, Priority, Relation, ViewId};

/// Handle to an activated constraint. Stable until the constraint is
/// replaced or deactivated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintId(pub(crate) u64);

/// A (view, attribute) pair a constraint can reference on its right side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub view: ViewId,
    pub attribute: Attribute,
}

impl Anchor {
    pub fn new(view: ViewId, attribute: Attribute) -> Self {
        Self { view, attribute }
    }
}

/// A single linear layout relation:
///
/// `view.attribute  <relation>  target.attribute * multiplier + constant`
///
/// With `target == None` the right side collapses to `constant`, which is
/// how fixed dimensions are expressed.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub view: ViewId,
    pub attribute: Attribute,
    pub relation: Relation,
    pub target: Option<Anchor>,
    pub multiplier: f32,
    pub constant: f32,
    pub priority: Priority,
    /// Resolve the target against the container's safe inset region
    /// instead of its frame. Only meaningful for edge attributes whose
    /// target is the container.
    pub safe_area: bool,
}

impl Constraint {
    /// `view.attribute = constant` (fixed dimension).
    pub fn dimension(
        view: ViewId,
        attribute: Attribute,
        relation: Relation,
        constant: f32,
        priority: Priority,
    ) -> Self {
        Self {
            view,
            attribute,
            relation,
            target: None,
            multiplier: 1.0,
            constant,
            priority,
            safe_area: false,
        }
    }

    /// `view.attribute = target.attribute * multiplier` (relative dimension).
    pub fn relative(
        view: ViewId,
        attribute: Attribute,
        target: Anchor,
        multiplier: f32,
        priority: Priority,
    ) -> Self {
        Self {
            view,
            attribute,
            relation: Relation::Equal,
            target: Some(target),
            multiplier,
            constant: 0.0,
            priority,
            safe_area: false,
        }
    }

    /// `view.attribute = target.attribute + constant` (edge-to-edge).
    pub fn edge(
        view: ViewId,
        attribute: Attribute,
        target: Anchor,
        constant: f32,
        priority: Priority,
    ) -> Self {
        Self {
            view,
            attribute,
            relation: Relation::Equal,
            target: Some(target),
            multiplier: 1.0,
            constant,
            priority,
            safe_area: false,
        }
    }

    pub fn in_safe_area(mut self) -> Self {
        self.safe_area = true;
        self
    }
}
