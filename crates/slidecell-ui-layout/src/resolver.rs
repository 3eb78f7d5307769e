//! Fixed-point frame resolution.
//!
//! Not a general constraint solver. Each (view, attribute) holds at most
//! one Equal constraint (the store replaces duplicates), so resolution is
//! a bounded fixed-point walk: apply Equal constraints in priority order,
//! derive the remaining attributes from the ones already known, repeat
//! until nothing changes. Min/max dimension constraints clamp as values
//! land. Views whose horizontal or vertical axis stays under-determined
//! simply produce no frame.

use indexmap::IndexMap;
use slidecell_ui_graphics::{EdgeInsets, Rect};
use std::collections::HashMap;

use crate::{Anchor, Attribute, ConstraintSet, Relation, ViewId};

/// View frames keyed by id, in resolution order.
pub type FrameMap = IndexMap<ViewId, Rect>;

/// The root geometry constraints resolve against.
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext {
    pub container: ViewId,
    pub frame: Rect,
    pub safe_area: EdgeInsets,
}

impl LayoutContext {
    pub fn new(container: ViewId, frame: Rect) -> Self {
        Self {
            container,
            frame,
            safe_area: EdgeInsets::default(),
        }
    }

    pub fn with_safe_area(mut self, safe_area: EdgeInsets) -> Self {
        self.safe_area = safe_area;
        self
    }

    fn attribute_value(&self, attribute: Attribute, safe_area: bool) -> f32 {
        let rect = if safe_area {
            self.frame.inset_by(self.safe_area)
        } else {
            self.frame
        };
        match attribute {
            Attribute::Leading => rect.min_x(),
            Attribute::Trailing => rect.max_x(),
            Attribute::Top => rect.min_y(),
            Attribute::Bottom => rect.max_y(),
            Attribute::Width => rect.width,
            Attribute::Height => rect.height,
            Attribute::CenterX => rect.min_x() + rect.width / 2.0,
            Attribute::CenterY => rect.min_y() + rect.height / 2.0,
        }
    }
}

struct Resolution<'a> {
    set: &'a ConstraintSet,
    ctx: &'a LayoutContext,
    values: HashMap<(ViewId, Attribute), f32>,
}

impl<'a> Resolution<'a> {
    fn get(&self, view: ViewId, attribute: Attribute) -> Option<f32> {
        if view == self.ctx.container {
            return Some(self.ctx.attribute_value(attribute, false));
        }
        self.values.get(&(view, attribute)).copied()
    }

    fn anchor(&self, anchor: Anchor, safe_area: bool) -> Option<f32> {
        if anchor.view == self.ctx.container {
            return Some(self.ctx.attribute_value(anchor.attribute, safe_area));
        }
        self.values.get(&(anchor.view, anchor.attribute)).copied()
    }

    /// Sets a value if the slot is still empty. Dimensions are clamped by
    /// any AtLeast/AtMost constraints before landing.
    fn put(&mut self, view: ViewId, attribute: Attribute, value: f32) -> bool {
        if self.values.contains_key(&(view, attribute)) {
            return false;
        }
        let value = if attribute.is_dimension() {
            self.clamp_dimension(view, attribute, value)
        } else {
            value
        };
        self.values.insert((view, attribute), value);
        true
    }

    fn clamp_dimension(&self, view: ViewId, attribute: Attribute, mut value: f32) -> f32 {
        for (_, c) in self.set.iter() {
            if c.view != view || c.attribute != attribute {
                continue;
            }
            match c.relation {
                Relation::AtLeast => value = value.max(c.constant),
                Relation::AtMost => value = value.min(c.constant),
                Relation::Equal => {}
            }
        }
        value
    }

    /// One pass over the Equal constraints, highest priority first.
    fn apply_constraints(&mut self) -> bool {
        let set = self.set;
        let mut ordered: Vec<_> = set
            .iter()
            .filter(|(_, c)| c.relation == Relation::Equal)
            .collect();
        ordered.sort_by(|(_, a), (_, b)| b.priority.cmp(&a.priority));

        let mut changed = false;
        for (_, c) in ordered {
            if self.values.contains_key(&(c.view, c.attribute)) {
                continue;
            }
            let resolved = match c.target {
                Some(anchor) => self
                    .anchor(anchor, c.safe_area)
                    .map(|v| v * c.multiplier + c.constant),
                None => Some(c.constant),
            };
            if let Some(value) = resolved {
                changed |= self.put(c.view, c.attribute, value);
            }
        }
        changed
    }

    /// Fills attributes derivable from the ones already known.
    fn derive(&mut self, views: &[ViewId]) -> bool {
        let mut changed = false;
        for &view in views {
            changed |= self.derive_axis(
                view,
                Attribute::Leading,
                Attribute::Trailing,
                Attribute::Width,
                Attribute::CenterX,
            );
            changed |= self.derive_axis(
                view,
                Attribute::Top,
                Attribute::Bottom,
                Attribute::Height,
                Attribute::CenterY,
            );
        }
        changed
    }

    fn derive_axis(
        &mut self,
        view: ViewId,
        lo: Attribute,
        hi: Attribute,
        extent: Attribute,
        center: Attribute,
    ) -> bool {
        let mut changed = false;
        let lo_v = self.get(view, lo);
        let hi_v = self.get(view, hi);
        let extent_v = self.get(view, extent);
        let center_v = self.get(view, center);

        match (lo_v, hi_v, extent_v, center_v) {
            (Some(l), Some(h), None, _) => changed |= self.put(view, extent, (h - l).max(0.0)),
            (Some(l), None, Some(e), _) => changed |= self.put(view, hi, l + e),
            (None, Some(h), Some(e), _) => changed |= self.put(view, lo, h - e),
            (None, None, Some(e), Some(c)) => {
                changed |= self.put(view, lo, c - e / 2.0);
                changed |= self.put(view, hi, c + e / 2.0);
            }
            _ => {}
        }

        if self.get(view, center).is_none() {
            if let (Some(l), Some(e)) = (self.get(view, lo), self.get(view, extent)) {
                changed |= self.put(view, center, l + e / 2.0);
            }
        }
        changed
    }
}

/// Resolves the frames of `views` against the context. Views that stay
/// under-determined are absent from the result.
pub fn resolve_frames(set: &ConstraintSet, ctx: &LayoutContext, views: &[ViewId]) -> FrameMap {
    let mut resolution = Resolution {
        set,
        ctx,
        values: HashMap::new(),
    };

    // Each pass resolves at least one new attribute or we are done; the
    // bound only guards against pathological constraint graphs.
    let max_passes = views.len() * 4 + 4;
    for _ in 0..max_passes {
        let applied = resolution.apply_constraints();
        let derived = resolution.derive(views);
        if !applied && !derived {
            break;
        }
    }

    let mut frames = IndexMap::new();
    for &view in views {
        let leading = resolution.get(view, Attribute::Leading);
        let top = resolution.get(view, Attribute::Top);
        let width = resolution.get(view, Attribute::Width);
        let height = resolution.get(view, Attribute::Height);
        match (leading, top, width, height) {
            (Some(x), Some(y), Some(width), Some(height)) => {
                frames.insert(
                    view,
                    Rect {
                        x,
                        y,
                        width,
                        height,
                    },
                );
            }
            _ => {
                log::debug!("view {:?} is under-determined, no frame resolved", view);
            }
        }
    }
    frames
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
