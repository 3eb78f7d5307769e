//! The action button widget.

use std::rc::Rc;

use slidecell_ui_graphics::{Color, EdgeInsets, Icon};
use slidecell_ui_layout::ViewId;

/// Leading content inset so the icon sits left-aligned like the rest of
/// the row content.
pub const BUTTON_CONTENT_INSET_LEADING: f32 = 10.0;

/// Immutable configuration of one action button.
#[derive(Clone)]
pub struct ButtonSpec {
    pub idle_color: Color,
    /// Background while the button is armed for instant fire. Absent
    /// means the idle color is kept (feature absent, not a fault).
    pub active_color: Option<Color>,
    pub icon: Icon,
    on_fire: Option<Rc<dyn Fn()>>,
}

impl ButtonSpec {
    pub fn new(idle_color: Color, icon: Icon) -> Self {
        Self {
            idle_color,
            active_color: None,
            icon,
            on_fire: None,
        }
    }

    pub fn with_active_color(mut self, color: Color) -> Self {
        self.active_color = Some(color);
        self
    }

    pub fn with_on_fire(mut self, on_fire: impl Fn() + 'static) -> Self {
        self.on_fire = Some(Rc::new(on_fire));
        self
    }

    pub fn has_action(&self) -> bool {
        self.on_fire.is_some()
    }

    /// Invokes the configured fire callback; skipped when absent.
    pub fn fire(&self) {
        if let Some(on_fire) = &self.on_fire {
            on_fire();
        }
    }
}

impl std::fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("idle_color", &self.idle_color)
            .field("active_color", &self.active_color)
            .field("icon", &self.icon)
            .field("on_fire", &self.on_fire.as_ref().map(|_| "provided"))
            .finish()
    }
}

/// One rendered action button.
///
/// The tap handler is a plain owned field; the host wires it when the
/// button joins a row.
pub struct MenuButton {
    spec: ButtonSpec,
    view: ViewId,
    background: Color,
    alpha: f32,
    instant_fire: bool,
    content_inset: EdgeInsets,
    on_tap: Option<Rc<dyn Fn()>>,
}

impl MenuButton {
    pub fn new(spec: ButtonSpec) -> Self {
        let background = spec.idle_color;
        Self {
            spec,
            view: ViewId::next(),
            background,
            alpha: 1.0,
            instant_fire: false,
            content_inset: EdgeInsets::from_components(BUTTON_CONTENT_INSET_LEADING, 0.0, 0.0, 0.0),
            on_tap: None,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn spec(&self) -> &ButtonSpec {
        &self.spec
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    pub fn instant_fire(&self) -> bool {
        self.instant_fire
    }

    /// Toggles the instant-fire visual: background swaps between the idle
    /// and active colors. Purely presentational.
    pub fn set_instant_fire(&mut self, instant_fire: bool) {
        self.instant_fire = instant_fire;
        self.background = if instant_fire {
            self.spec.active_color.unwrap_or(self.spec.idle_color)
        } else {
            self.spec.idle_color
        };
    }

    pub fn set_tap_action(&mut self, on_tap: impl Fn() + 'static) {
        self.on_tap = Some(Rc::new(on_tap));
    }

    pub(crate) fn tap_action(&self) -> Option<Rc<dyn Fn()>> {
        self.on_tap.clone()
    }

    /// A direct press. Skipped when no tap action is wired.
    pub fn tap(&self) {
        if let Some(on_tap) = &self.on_tap {
            on_tap();
        }
    }
}

impl std::fmt::Debug for MenuButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuButton")
            .field("view", &self.view)
            .field("background", &self.background)
            .field("alpha", &self.alpha)
            .field("instant_fire", &self.instant_fire)
            .finish()
    }
}
