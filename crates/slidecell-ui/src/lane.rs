//! One side's button lane: the container revealed behind the content.

use std::mem;

use slidecell_ui_graphics::EdgeInsets;
use slidecell_ui_layout::{Attribute, ConstraintSet, Priority, ViewId};

use crate::button::{ButtonSpec, MenuButton};

/// Opacity of a lone button while its row is closed or under the first
/// barrier. Pairs stay fully opaque; the dim treatment marks a button
/// that can still be armed for instant fire.
pub const BUTTON_ALPHA_IN_SINGLE_MODE: f32 = 0.33;

/// Which side of the row a lane sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSide {
    Left,
    Right,
}

/// Button configuration of one side.
#[derive(Clone, Debug, Default)]
pub enum ButtonMode {
    #[default]
    None,
    Single(ButtonSpec),
    Pair(ButtonSpec, ButtonSpec),
}

impl ButtonMode {
    pub fn arity(&self) -> usize {
        match self {
            ButtonMode::None => 0,
            ButtonMode::Single(_) => 1,
            ButtonMode::Pair(_, _) => 2,
        }
    }
}

/// Equality is by arity only: `Single(a) == Single(b)` for any a, b.
/// Specs carry callbacks and colors that have no meaningful equality; the
/// interaction core only ever needs to distinguish how many buttons a
/// side has.
impl PartialEq for ButtonMode {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// The wrapper view holding 0, 1, or 2 buttons for one side.
pub struct ButtonLane {
    side: MenuSide,
    mode: ButtonMode,
    view: ViewId,
    first: Option<MenuButton>,
    second: Option<MenuButton>,
    alpha: f32,
}

impl ButtonLane {
    /// Builds the lane's buttons and their constraints inside `view`.
    ///
    /// Single: one button pinned to all four edges, dimmed.
    /// Pair: first fills the lane, second overlays the trailing half at
    /// 50% width; both fully opaque.
    pub fn new(side: MenuSide, mode: ButtonMode, constraints: &mut ConstraintSet) -> Self {
        let view = ViewId::next();
        let mut lane = Self {
            side,
            mode: mode.clone(),
            view,
            first: None,
            second: None,
            alpha: 1.0,
        };

        match mode {
            ButtonMode::None => {}
            ButtonMode::Single(spec) => {
                let mut button = MenuButton::new(spec);
                constraints.pin_edges(
                    button.view(),
                    view,
                    EdgeInsets::default(),
                    Priority::REQUIRED,
                    &[],
                );
                button.set_alpha(BUTTON_ALPHA_IN_SINGLE_MODE);
                lane.first = Some(button);
            }
            ButtonMode::Pair(first_spec, second_spec) => {
                let first = MenuButton::new(first_spec);
                constraints.pin_edges(
                    first.view(),
                    view,
                    EdgeInsets::default(),
                    Priority::REQUIRED,
                    &[],
                );

                let second = MenuButton::new(second_spec);
                constraints.pin(
                    second.view(),
                    view,
                    &[Attribute::Top, Attribute::Bottom, Attribute::Trailing],
                    0.0,
                    Priority::REQUIRED,
                );
                constraints.set_equal_width(second.view(), view, 0.5, Priority::REQUIRED);

                lane.first = Some(first);
                lane.second = Some(second);
            }
        }

        lane
    }

    pub fn side(&self) -> MenuSide {
        self.side
    }

    pub fn mode(&self) -> &ButtonMode {
        &self.mode
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Full opacity, called on every drag sample toward this side.
    pub fn reveal(&mut self) {
        self.alpha = 1.0;
    }

    pub fn first_button(&self) -> Option<&MenuButton> {
        self.first.as_ref()
    }

    pub fn second_button(&self) -> Option<&MenuButton> {
        self.second.as_ref()
    }

    pub fn first_button_mut(&mut self) -> Option<&mut MenuButton> {
        self.first.as_mut()
    }

    pub fn second_button_mut(&mut self) -> Option<&mut MenuButton> {
        self.second.as_mut()
    }

    pub fn button(&self, index: usize) -> Option<&MenuButton> {
        match index {
            0 => self.first.as_ref(),
            1 => self.second.as_ref(),
            _ => None,
        }
    }

    pub fn button_mut(&mut self, index: usize) -> Option<&mut MenuButton> {
        match index {
            0 => self.first.as_mut(),
            1 => self.second.as_mut(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidecell_ui_graphics::{Color, Icon};

    fn spec(name: &str) -> ButtonSpec {
        ButtonSpec::new(Color::GRAY, Icon::named(name)).with_active_color(Color::RED)
    }

    #[test]
    fn mode_equality_is_by_arity_only() {
        let a = ButtonMode::Single(spec("delete"));
        let b = ButtonMode::Single(spec("archive").with_on_fire(|| {}));
        assert_eq!(a, b);

        let pair = ButtonMode::Pair(spec("one"), spec("two"));
        assert_ne!(a, pair);
        assert_ne!(ButtonMode::None, a);
        assert_eq!(ButtonMode::None, ButtonMode::None);
    }

    #[test]
    fn single_lane_dims_its_button() {
        let mut constraints = ConstraintSet::new();
        let lane = ButtonLane::new(
            MenuSide::Right,
            ButtonMode::Single(spec("delete")),
            &mut constraints,
        );

        let button = lane.first_button().unwrap();
        assert_eq!(button.alpha(), BUTTON_ALPHA_IN_SINGLE_MODE);
        assert!(lane.second_button().is_none());
        // All four edges pinned.
        assert_eq!(constraints.constraints_for(button.view()).count(), 4);
    }

    #[test]
    fn pair_lane_keeps_buttons_opaque_and_splits_width() {
        let mut constraints = ConstraintSet::new();
        let lane = ButtonLane::new(
            MenuSide::Left,
            ButtonMode::Pair(spec("one"), spec("two")),
            &mut constraints,
        );

        assert_eq!(lane.first_button().unwrap().alpha(), 1.0);
        assert_eq!(lane.second_button().unwrap().alpha(), 1.0);

        let second = lane.second_button().unwrap();
        let width = constraints
            .constraints_for(second.view())
            .find(|(_, c)| c.attribute == Attribute::Width)
            .map(|(_, c)| c.multiplier);
        assert_eq!(width, Some(0.5));
    }

    #[test]
    fn empty_lane_has_no_buttons() {
        let mut constraints = ConstraintSet::new();
        let lane = ButtonLane::new(MenuSide::Left, ButtonMode::None, &mut constraints);

        assert!(lane.first_button().is_none());
        assert!(lane.second_button().is_none());
        assert_eq!(lane.mode().arity(), 0);
    }
}
