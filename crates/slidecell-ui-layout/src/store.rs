//! The constraint store: create-or-replace builders over an owned set.
//!
//! Replacement semantics: activating a constraint removes any existing one
//! for the same (view, attribute, relation) triple before inserting, so
//! repeated layout calls can never stack conflicting constraints.

use indexmap::IndexMap;
use slidecell_ui_graphics::EdgeInsets;
use smallvec::SmallVec;

use crate::{Anchor, Attribute, Constraint, ConstraintId, Priority, Relation, ViewId};

/// Per-edge handles returned by the pin builders. Edges that were excluded
/// (or already pinned at a higher level) come back as `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeConstraintIds {
    pub top: Option<ConstraintId>,
    pub leading: Option<ConstraintId>,
    pub bottom: Option<ConstraintId>,
    pub trailing: Option<ConstraintId>,
}

/// An owned, ordered set of active constraints.
#[derive(Default)]
pub struct ConstraintSet {
    constraints: IndexMap<ConstraintId, Constraint>,
    next_id: u64,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Activates `constraint`, replacing any existing constraint for the
    /// same (view, attribute, relation).
    pub fn activate(&mut self, constraint: Constraint) -> ConstraintId {
        let stale: SmallVec<[ConstraintId; 2]> = self
            .constraints
            .iter()
            .filter(|(_, existing)| {
                existing.view == constraint.view
                    && existing.attribute == constraint.attribute
                    && existing.relation == constraint.relation
            })
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            log::debug!(
                "replacing constraint {:?} on view {:?} / {:?}",
                id,
                constraint.view,
                constraint.attribute
            );
            self.constraints.shift_remove(&id);
        }

        self.next_id += 1;
        let id = ConstraintId(self.next_id);
        self.constraints.insert(id, constraint);
        id
    }

    /// Removes a constraint. Returns false if the id is stale.
    pub fn deactivate(&mut self, id: ConstraintId) -> bool {
        self.constraints.shift_remove(&id).is_some()
    }

    pub fn get(&self, id: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(&id)
    }

    /// Reads the constant of an active constraint.
    pub fn constant(&self, id: ConstraintId) -> Option<f32> {
        self.constraints.get(&id).map(|c| c.constant)
    }

    /// Updates the constant of an active constraint in place. Returns
    /// false if the id is stale.
    pub fn set_constant(&mut self, id: ConstraintId, constant: f32) -> bool {
        match self.constraints.get_mut(&id) {
            Some(c) => {
                c.constant = constant;
                true
            }
            None => false,
        }
    }

    /// Replaces a constraint with a copy carrying a new multiplier.
    /// Multipliers are baked into the relation, so this deactivates the
    /// old constraint and returns the replacement's id.
    pub fn set_multiplier(&mut self, id: ConstraintId, multiplier: f32) -> Option<ConstraintId> {
        let mut replacement = self.constraints.get(&id)?.clone();
        replacement.multiplier = multiplier;
        self.constraints.shift_remove(&id);
        Some(self.activate(replacement))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints.iter().map(|(id, c)| (*id, c))
    }

    pub fn constraints_for(&self, view: ViewId) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints
            .iter()
            .filter(move |(_, c)| c.view == view)
            .map(|(id, c)| (*id, c))
    }

    // ------------------------------------------------------------------
    // Dimension builders
    // ------------------------------------------------------------------

    pub fn set_width(&mut self, view: ViewId, value: f32, priority: Priority) -> ConstraintId {
        self.set_dimension(view, Attribute::Width, Relation::Equal, value, priority)
    }

    pub fn set_height(&mut self, view: ViewId, value: f32, priority: Priority) -> ConstraintId {
        self.set_dimension(view, Attribute::Height, Relation::Equal, value, priority)
    }

    pub fn set_min_width(&mut self, view: ViewId, value: f32, priority: Priority) -> ConstraintId {
        self.set_dimension(view, Attribute::Width, Relation::AtLeast, value, priority)
    }

    pub fn set_max_width(&mut self, view: ViewId, value: f32, priority: Priority) -> ConstraintId {
        self.set_dimension(view, Attribute::Width, Relation::AtMost, value, priority)
    }

    pub fn set_min_height(&mut self, view: ViewId, value: f32, priority: Priority) -> ConstraintId {
        self.set_dimension(view, Attribute::Height, Relation::AtLeast, value, priority)
    }

    pub fn set_max_height(&mut self, view: ViewId, value: f32, priority: Priority) -> ConstraintId {
        self.set_dimension(view, Attribute::Height, Relation::AtMost, value, priority)
    }

    fn set_dimension(
        &mut self,
        view: ViewId,
        attribute: Attribute,
        relation: Relation,
        value: f32,
        priority: Priority,
    ) -> ConstraintId {
        self.activate(Constraint::dimension(
            view,
            attribute,
            relation,
            value.max(0.0),
            priority,
        ))
    }

    /// `view.width = target.width * multiplier`. The multiplier is clamped
    /// to [0, 1]; relative dimensions never exceed their target.
    pub fn set_equal_width(
        &mut self,
        view: ViewId,
        target: ViewId,
        multiplier: f32,
        priority: Priority,
    ) -> ConstraintId {
        self.activate(Constraint::relative(
            view,
            Attribute::Width,
            Anchor::new(target, Attribute::Width),
            multiplier.clamp(0.0, 1.0),
            priority,
        ))
    }

    /// `view.height = target.height * multiplier`, multiplier clamped to [0, 1].
    pub fn set_equal_height(
        &mut self,
        view: ViewId,
        target: ViewId,
        multiplier: f32,
        priority: Priority,
    ) -> ConstraintId {
        self.activate(Constraint::relative(
            view,
            Attribute::Height,
            Anchor::new(target, Attribute::Height),
            multiplier.clamp(0.0, 1.0),
            priority,
        ))
    }

    /// `view.height = view.width * ratio`.
    pub fn set_aspect_ratio(&mut self, view: ViewId, ratio: f32) -> ConstraintId {
        self.activate(Constraint::relative(
            view,
            Attribute::Height,
            Anchor::new(view, Attribute::Width),
            ratio,
            Priority::REQUIRED,
        ))
    }

    // ------------------------------------------------------------------
    // Edge builders
    // ------------------------------------------------------------------

    /// `view.attribute = target.<same attribute> + constant`.
    pub fn set_edge(
        &mut self,
        view: ViewId,
        attribute: Attribute,
        target: ViewId,
        constant: f32,
        priority: Priority,
    ) -> ConstraintId {
        self.activate(Constraint::edge(
            view,
            attribute,
            Anchor::new(target, attribute),
            constant,
            priority,
        ))
    }

    /// `view.attribute = anchor + constant` — the general edge-to-edge
    /// relation between two views (e.g. my trailing to your leading).
    pub fn set_edge_to(
        &mut self,
        view: ViewId,
        attribute: Attribute,
        anchor: Anchor,
        constant: f32,
        priority: Priority,
    ) -> ConstraintId {
        self.activate(Constraint::edge(view, attribute, anchor, constant, priority))
    }

    /// Convenience for the horizontal-position handle: pins `view`'s
    /// leading edge to `container`'s leading edge at `offset`. Mutating
    /// this constraint's constant slides the view.
    pub fn set_offset(
        &mut self,
        view: ViewId,
        container: ViewId,
        offset: f32,
        priority: Priority,
    ) -> ConstraintId {
        self.set_edge(view, Attribute::Leading, container, offset, priority)
    }

    // ------------------------------------------------------------------
    // Pin builders
    // ------------------------------------------------------------------

    /// Pins the listed edges of `view` to `container` with a uniform
    /// margin. Trailing/bottom margins are applied inward.
    pub fn pin(
        &mut self,
        view: ViewId,
        container: ViewId,
        edges: &[Attribute],
        margin: f32,
        priority: Priority,
    ) -> SmallVec<[ConstraintId; 4]> {
        let mut created = SmallVec::new();
        for edge in edges {
            let constant = match edge {
                Attribute::Leading | Attribute::Top => margin,
                Attribute::Trailing | Attribute::Bottom => -margin,
                _ => continue,
            };
            created.push(self.set_edge(view, *edge, container, constant, priority));
        }
        created
    }

    /// Pins all four edges of `view` to `container` with per-edge insets,
    /// skipping any edge listed in `excluding`.
    pub fn pin_edges(
        &mut self,
        view: ViewId,
        container: ViewId,
        insets: EdgeInsets,
        priority: Priority,
        excluding: &[Attribute],
    ) -> EdgeConstraintIds {
        let mut created = EdgeConstraintIds::default();

        if !excluding.contains(&Attribute::Top) {
            created.top =
                Some(self.set_edge(view, Attribute::Top, container, insets.top, priority));
        }
        if !excluding.contains(&Attribute::Leading) {
            created.leading =
                Some(self.set_edge(view, Attribute::Leading, container, insets.left, priority));
        }
        if !excluding.contains(&Attribute::Bottom) {
            created.bottom =
                Some(self.set_edge(view, Attribute::Bottom, container, -insets.bottom, priority));
        }
        if !excluding.contains(&Attribute::Trailing) {
            created.trailing =
                Some(self.set_edge(view, Attribute::Trailing, container, -insets.right, priority));
        }

        created
    }

    /// Like [`ConstraintSet::pin`], but resolves against the container's
    /// safe inset region rather than its frame.
    pub fn pin_to_safe_area(
        &mut self,
        view: ViewId,
        container: ViewId,
        edges: &[Attribute],
        margin: f32,
        priority: Priority,
    ) -> SmallVec<[ConstraintId; 4]> {
        let mut created = SmallVec::new();
        for edge in edges {
            let constant = match edge {
                Attribute::Leading | Attribute::Top => margin,
                Attribute::Trailing | Attribute::Bottom => -margin,
                _ => continue,
            };
            created.push(self.activate(
                Constraint::edge(view, *edge, Anchor::new(container, *edge), constant, priority)
                    .in_safe_area(),
            ));
        }
        created
    }

    /// Centers `view` in `container` on the given axes
    /// (`Attribute::CenterX` / `Attribute::CenterY`).
    pub fn center(
        &mut self,
        view: ViewId,
        container: ViewId,
        axes: &[Attribute],
    ) -> SmallVec<[ConstraintId; 4]> {
        let mut created = SmallVec::new();
        for axis in axes {
            if axis.is_center() {
                created.push(self.set_edge(view, *axis, container, 0.0, Priority::REQUIRED));
            }
        }
        created
    }

    /// Creates a fixed-size spacer view: a fresh view constrained to
    /// `size` × `size` at HIGH priority.
    pub fn spacer(&mut self, size: f32) -> ViewId {
        let view = ViewId::next();
        self.set_width(view, size, Priority::HIGH);
        self.set_height(view, size, Priority::HIGH);
        view
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
