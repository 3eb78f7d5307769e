//! The swipe interaction core.
//!
//! Owns the running horizontal offset of the draggable content, turns pan
//! phases into reveal/cancel/commit decisions against the two barrier
//! distances, and drives the animated settle.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use slidecell_animation::{AnimationType, OffsetAnimator, SpringSpec};
use slidecell_foundation::{
    DirectionalPanRecognizer, HapticEngine, ImpactStyle, NoopHaptics, PanAxis, PanEvent, PanPhase,
};
use slidecell_ui_graphics::{EdgeInsets, Rect};
use slidecell_ui_layout::{
    resolve_frames, Anchor, Attribute, ConstraintId, ConstraintSet, FrameMap, LayoutContext,
    Priority, ViewId,
};

use crate::button::MenuButton;
use crate::lane::{ButtonLane, ButtonMode, MenuSide, BUTTON_ALPHA_IN_SINGLE_MODE};

/// How far a lane tucks under the content's rounded corner.
pub const LANE_CORNER_OVERLAP: f32 = 8.0;

/// Where the interaction currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    /// At rest, closed.
    Idle,
    /// Finger down, offset tracking 1:1.
    Dragging,
    /// Animating back to offset 0.
    SettlingClosed,
    /// Animating open toward a side's second barrier.
    SettlingOpen(MenuSide),
    /// At rest with a pair lane revealed.
    Open(MenuSide),
}

/// Mutable per-drag state. Created with the control, mutated only by the
/// gesture-phase handlers and the programmatic close.
#[derive(Clone, Copy, Debug)]
pub struct SwipeState {
    /// Offset captured when the current drag began; a drag starting from
    /// an already-open row continues from there.
    pub drag_start_offset: f32,
    pub vibrated_for_activated: bool,
    pub vibrated_for_deactivated: bool,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self {
            drag_start_offset: 0.0,
            vibrated_for_activated: false,
            vibrated_for_deactivated: true,
        }
    }
}

/// The swipeable row: a content view that drags horizontally to reveal a
/// button lane per side.
///
/// Cheap to clone; clones share the same row.
#[derive(Clone)]
pub struct SwipeMenu {
    inner: Rc<RefCell<SwipeMenuInner>>,
}

struct SwipeMenuInner {
    container: ViewId,
    pannable: ViewId,
    content: ViewId,
    left: ButtonLane,
    right: ButtonLane,
    constraints: ConstraintSet,
    offset_constraint: ConstraintId,
    recognizer: DirectionalPanRecognizer,
    animator: OffsetAnimator,
    haptics: Rc<dyn HapticEngine>,
    state: SwipeState,
    phase: SwipePhase,
    pannable_frame: Option<Rect>,
}

impl SwipeMenu {
    pub fn new(left: ButtonMode, right: ButtonMode, content: ViewId) -> Self {
        Self::with_haptics(left, right, content, Rc::new(NoopHaptics))
    }

    pub fn with_haptics(
        left: ButtonMode,
        right: ButtonMode,
        content: ViewId,
        haptics: Rc<dyn HapticEngine>,
    ) -> Self {
        let container = ViewId::next();
        let pannable = ViewId::next();
        let mut constraints = ConstraintSet::new();

        let mut left = ButtonLane::new(MenuSide::Left, left, &mut constraints);
        let mut right = ButtonLane::new(MenuSide::Right, right, &mut constraints);

        // Lanes start invisible; the first drag sample toward a side
        // reveals it.
        left.set_alpha(0.0);
        right.set_alpha(0.0);

        // The pannable wrapper fills the row and slides via its leading
        // offset; the content is pinned inside it.
        constraints.pin(
            pannable,
            container,
            &[Attribute::Top, Attribute::Bottom],
            0.0,
            Priority::REQUIRED,
        );
        constraints.set_equal_width(pannable, container, 1.0, Priority::REQUIRED);
        let offset_constraint = constraints.set_offset(pannable, container, 0.0, Priority::REQUIRED);
        constraints.pin_edges(
            content,
            pannable,
            EdgeInsets::default(),
            Priority::REQUIRED,
            &[],
        );

        // Lanes hug the container's outer edges and follow the pannable
        // wrapper, tucked under the content's corner radius.
        constraints.pin(
            left.view(),
            container,
            &[Attribute::Leading, Attribute::Top, Attribute::Bottom],
            0.0,
            Priority::REQUIRED,
        );
        constraints.set_edge_to(
            left.view(),
            Attribute::Trailing,
            Anchor::new(pannable, Attribute::Leading),
            LANE_CORNER_OVERLAP,
            Priority::HIGH,
        );
        constraints.pin(
            right.view(),
            container,
            &[Attribute::Trailing, Attribute::Top, Attribute::Bottom],
            0.0,
            Priority::REQUIRED,
        );
        constraints.set_edge_to(
            right.view(),
            Attribute::Leading,
            Anchor::new(pannable, Attribute::Trailing),
            -LANE_CORNER_OVERLAP,
            Priority::HIGH,
        );

        let menu = Self {
            inner: Rc::new(RefCell::new(SwipeMenuInner {
                container,
                pannable,
                content,
                left,
                right,
                constraints,
                offset_constraint,
                recognizer: DirectionalPanRecognizer::new(PanAxis::Horizontal),
                animator: OffsetAnimator::new(0.0),
                haptics,
                state: SwipeState::default(),
                phase: SwipePhase::Idle,
                pannable_frame: None,
            })),
        };
        menu.wire_tap_actions();
        menu
    }

    /// Direct taps close the row first, then fire — callers expect the
    /// row visually closed by the time their callback runs.
    fn wire_tap_actions(&self) {
        let sides = [MenuSide::Left, MenuSide::Right];
        for side in sides {
            for index in 0..2 {
                let present = {
                    let inner = self.inner.borrow();
                    inner.lane(side).button(index).is_some()
                };
                if !present {
                    continue;
                }
                let weak: Weak<RefCell<SwipeMenuInner>> = Rc::downgrade(&self.inner);
                let mut inner = self.inner.borrow_mut();
                if let Some(button) = inner.lane_mut(side).button_mut(index) {
                    button.set_tap_action(move || {
                        let Some(inner) = weak.upgrade() else { return };
                        let spec = {
                            let mut inner = inner.borrow_mut();
                            inner.settle_to(0.0);
                            inner.lane(side).button(index).map(|b| b.spec().clone())
                        };
                        if let Some(spec) = spec {
                            spec.fire();
                        }
                    });
                }
            }
        }
    }

    /// Positions the row inside `bounds` and resolves the draggable
    /// width. Pan events are ignored until this has produced a positive
    /// width.
    pub fn layout(&self, bounds: Rect) {
        let mut inner = self.inner.borrow_mut();
        let ctx = LayoutContext::new(inner.container, bounds);
        let frames = resolve_frames(&inner.constraints, &ctx, &[inner.pannable]);
        inner.pannable_frame = frames.get(&inner.pannable).copied();
    }

    /// Feeds one raw pan event through the axis filter and into the
    /// state machine.
    pub fn handle_pan(&self, raw: PanEvent) {
        let followup = {
            let mut inner = self.inner.borrow_mut();
            let Some(event) = inner.recognizer.feed(raw) else {
                return;
            };
            inner.process_pan(event)
        };
        // Commit actions run outside the borrow so callbacks may reenter
        // the menu (e.g. call close()).
        if let Some(action) = followup {
            action();
        }
    }

    /// Advances the in-flight settle animation. Returns true while still
    /// animating.
    pub fn tick(&self, frame_time_nanos: u64) -> bool {
        let mut inner = self.inner.borrow_mut();
        let running = inner.animator.tick(frame_time_nanos);
        if !running {
            inner.phase = match inner.phase {
                SwipePhase::SettlingOpen(side) => SwipePhase::Open(side),
                SwipePhase::SettlingClosed | SwipePhase::Idle => SwipePhase::Idle,
                other => other,
            };
        }
        running
    }

    /// Programmatic close: settle back to offset 0, e.g. after a caller's
    /// callback performed a model-level delete.
    pub fn close(&self) {
        self.inner.borrow_mut().settle_to(0.0);
    }

    /// A direct press on one of the revealed buttons.
    pub fn tap(&self, side: MenuSide, index: usize) {
        let action = {
            let inner = self.inner.borrow();
            inner.lane(side).button(index).and_then(MenuButton::tap_action)
        };
        if let Some(action) = action {
            action();
        }
    }

    /// The presented offset: mid-settle this is the animated position.
    pub fn current_offset(&self) -> f32 {
        self.inner.borrow().animator.value()
    }

    /// The offset constraint's logical constant (the resting target).
    pub fn logical_offset(&self) -> f32 {
        let inner = self.inner.borrow();
        inner
            .constraints
            .constant(inner.offset_constraint)
            .unwrap_or(0.0)
    }

    pub fn phase(&self) -> SwipePhase {
        self.inner.borrow().phase
    }

    pub fn is_settling(&self) -> bool {
        self.inner.borrow().animator.is_running()
    }

    pub fn pannable_width(&self) -> f32 {
        self.inner.borrow().pannable_width()
    }

    /// First barrier point: crossing it arms a single button (or, on
    /// release, commits the drag). A quarter of the draggable width.
    pub fn first_barrier(&self) -> f32 {
        self.inner.borrow().first_barrier()
    }

    /// Second barrier point: the resting offset of an open pair lane. A
    /// third of the draggable width.
    pub fn second_barrier(&self) -> f32 {
        self.inner.borrow().second_barrier()
    }

    pub fn left_lane(&self) -> Ref<'_, ButtonLane> {
        Ref::map(self.inner.borrow(), |inner| &inner.left)
    }

    pub fn right_lane(&self) -> Ref<'_, ButtonLane> {
        Ref::map(self.inner.borrow(), |inner| &inner.right)
    }

    pub fn lane(&self, side: MenuSide) -> Ref<'_, ButtonLane> {
        Ref::map(self.inner.borrow(), |inner| inner.lane(side))
    }

    pub fn container_view(&self) -> ViewId {
        self.inner.borrow().container
    }

    pub fn pannable_view(&self) -> ViewId {
        self.inner.borrow().pannable
    }

    pub fn content_view(&self) -> ViewId {
        self.inner.borrow().content
    }

    /// Resolves the frames of the row's own views inside `bounds`.
    /// Intended for hosts that want to draw the row.
    pub fn resolve_layout(&self, bounds: Rect) -> FrameMap {
        let inner = self.inner.borrow();
        let ctx = LayoutContext::new(inner.container, bounds);
        let mut views = vec![
            inner.pannable,
            inner.content,
            inner.left.view(),
            inner.right.view(),
        ];
        for lane in [&inner.left, &inner.right] {
            for index in 0..2 {
                if let Some(button) = lane.button(index) {
                    views.push(button.view());
                }
            }
        }
        resolve_frames(&inner.constraints, &ctx, &views)
    }
}

impl SwipeMenuInner {
    fn lane(&self, side: MenuSide) -> &ButtonLane {
        match side {
            MenuSide::Left => &self.left,
            MenuSide::Right => &self.right,
        }
    }

    fn lane_mut(&mut self, side: MenuSide) -> &mut ButtonLane {
        match side {
            MenuSide::Left => &mut self.left,
            MenuSide::Right => &mut self.right,
        }
    }

    fn pannable_width(&self) -> f32 {
        self.pannable_frame.map(|frame| frame.width).unwrap_or(0.0)
    }

    fn first_barrier(&self) -> f32 {
        self.pannable_width() / 4.0
    }

    fn second_barrier(&self) -> f32 {
        self.pannable_width() / 3.0
    }

    fn process_pan(&mut self, event: PanEvent) -> Option<Rc<dyn Fn()>> {
        if self.pannable_width() <= 0.0 {
            // Thresholds are degenerate before layout; a drag could
            // trivially report "past barrier", so the event is dropped.
            log::debug!("pan ignored: row has no laid-out width yet");
            return None;
        }

        match event.phase {
            PanPhase::Began => {
                // Take over a mid-flight settle at its presented value.
                self.animator.cancel();
                let presented = self.animator.value();
                self.constraints
                    .set_constant(self.offset_constraint, presented);
                self.state.drag_start_offset = presented;
                self.state.vibrated_for_activated = false;
                self.state.vibrated_for_deactivated = true;
                self.phase = SwipePhase::Dragging;
                None
            }
            PanPhase::Changed => {
                let candidate = self.state.drag_start_offset + event.translation.x;

                // A fast pinch toward a side with no buttons must still
                // close the row properly.
                if candidate < 0.0 && *self.right.mode() == ButtonMode::None {
                    self.settle_to(0.0);
                    return None;
                }
                if candidate > 0.0 && *self.left.mode() == ButtonMode::None {
                    self.settle_to(0.0);
                    return None;
                }

                self.track_to(candidate);
                self.check_for_breakthrough(candidate);
                None
            }
            PanPhase::Ended | PanPhase::Cancelled => {
                let candidate = self.state.drag_start_offset + event.translation.x;

                if candidate < 0.0 && *self.right.mode() == ButtonMode::None {
                    return None;
                }
                if candidate > 0.0 && *self.left.mode() == ButtonMode::None {
                    return None;
                }

                self.pan_ended(candidate)
            }
        }
    }

    /// Release decision: below the first barrier everything snaps shut;
    /// past it a single button commits and a pair snaps open.
    fn pan_ended(&mut self, candidate: f32) -> Option<Rc<dyn Fn()>> {
        if candidate.abs() < self.first_barrier() {
            self.settle_to(0.0);
            return None;
        }

        let side = if candidate < 0.0 {
            MenuSide::Right
        } else {
            MenuSide::Left
        };

        match self.lane(side).mode() {
            ButtonMode::None => None,
            ButtonMode::Single(_) => {
                // The instant-fire visual was applied while dragging;
                // this is confirm-and-close, not reveal-and-wait.
                log::debug!("single commit on {:?} at offset {:.1}", side, candidate);
                self.lane(side).first_button().and_then(MenuButton::tap_action)
            }
            ButtonMode::Pair(_, _) => {
                let sign = if candidate < 0.0 { -1.0 } else { 1.0 };
                let target = sign * self.second_barrier();
                log::debug!("pair open on {:?} at offset {:.1}", side, target);
                self.settle_to(target);
                None
            }
        }
    }

    /// 1:1 finger tracking: no animation, constraint and presented value
    /// move together.
    fn track_to(&mut self, offset: f32) {
        self.animator.snap_to(offset);
        self.constraints.set_constant(self.offset_constraint, offset);
        self.phase = SwipePhase::Dragging;
    }

    fn check_for_breakthrough(&mut self, candidate: f32) {
        let side = if candidate < 0.0 {
            MenuSide::Right
        } else {
            MenuSide::Left
        };
        let first_barrier = self.first_barrier();

        let arity = {
            let lane = self.lane_mut(side);
            lane.reveal();
            lane.mode().arity()
        };
        // Pairs reveal only; instant-fire arming is a single-button
        // affair.
        if arity != 1 {
            return;
        }

        if candidate.abs() > first_barrier && !self.state.vibrated_for_activated {
            self.haptics.impact(ImpactStyle::Medium);
            self.state.vibrated_for_activated = true;
            self.state.vibrated_for_deactivated = false;

            if let Some(button) = self.lane_mut(side).first_button_mut() {
                button.set_alpha(1.0);
                button.set_instant_fire(true);
            }
        }
        if candidate.abs() < first_barrier && !self.state.vibrated_for_deactivated {
            self.haptics.impact(ImpactStyle::Medium);
            self.state.vibrated_for_activated = false;
            self.state.vibrated_for_deactivated = true;

            if let Some(button) = self.lane_mut(side).first_button_mut() {
                button.set_alpha(BUTTON_ALPHA_IN_SINGLE_MODE);
                button.set_instant_fire(false);
            }
        }
    }

    /// Starts the settle: the constraint constant jumps to the resting
    /// target while the presented value animates after it.
    fn settle_to(&mut self, target: f32) {
        self.constraints.set_constant(self.offset_constraint, target);
        if target == 0.0 {
            self.left.set_alpha(0.0);
            self.right.set_alpha(0.0);
            self.phase = SwipePhase::SettlingClosed;
        } else {
            let side = if target < 0.0 {
                MenuSide::Right
            } else {
                MenuSide::Left
            };
            self.phase = SwipePhase::SettlingOpen(side);
        }
        self.animator
            .animate_to(target, AnimationType::Spring(SpringSpec::settle()));
    }
}
