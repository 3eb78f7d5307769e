//! Robot harness for end-to-end row testing.
//!
//! Launch a real row at a fixed size, perform scripted drags, and pump
//! frames until the control is idle:
//!
//! ```
//! use slidecell_testing::SwipeRobot;
//! use slidecell_ui::ButtonMode;
//!
//! let mut robot = SwipeRobot::new(120.0, 44.0, ButtonMode::None, ButtonMode::None);
//! robot.drag_and_release(-20.0);
//! robot.settle();
//! assert_eq!(robot.offset(), 0.0);
//! ```

use std::rc::Rc;

use slidecell_foundation::PanEvent;
use slidecell_ui_graphics::{Point, Rect, Velocity};
use slidecell_ui_layout::ViewId;
use slidecell_ui::{ButtonMode, MenuSide, SwipeMenu};

use crate::RecordingHaptics;

const FRAME_NANOS: u64 = 16_000_000; // 60fps
const SETTLE_FRAME_LIMIT: u32 = 1_000;

/// Programmatic control over a real row with recorded haptics.
pub struct SwipeRobot {
    menu: SwipeMenu,
    haptics: Rc<RecordingHaptics>,
    clock_nanos: u64,
}

impl SwipeRobot {
    /// Builds and lays out a row of the given size.
    pub fn new(width: f32, height: f32, left: ButtonMode, right: ButtonMode) -> Self {
        let haptics = RecordingHaptics::new();
        let content = ViewId::next();
        let menu = SwipeMenu::with_haptics(left, right, content, haptics.clone());
        menu.layout(Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        });
        Self {
            menu,
            haptics,
            clock_nanos: 0,
        }
    }

    /// Builds a row that has never been laid out (zero width).
    pub fn without_layout(left: ButtonMode, right: ButtonMode) -> Self {
        let haptics = RecordingHaptics::new();
        let content = ViewId::next();
        let menu = SwipeMenu::with_haptics(left, right, content, haptics.clone());
        Self {
            menu,
            haptics,
            clock_nanos: 0,
        }
    }

    pub fn menu(&self) -> &SwipeMenu {
        &self.menu
    }

    pub fn haptics(&self) -> &RecordingHaptics {
        &self.haptics
    }

    pub fn offset(&self) -> f32 {
        self.menu.current_offset()
    }

    fn horizontal(translation_x: f32) -> PanEvent {
        let direction = if translation_x < 0.0 { -1.0 } else { 1.0 };
        PanEvent::changed(
            Point::new(translation_x, 0.0),
            Velocity::new(direction * 200.0, 0.0),
        )
    }

    pub fn begin_drag(&mut self) {
        self.menu.handle_pan(PanEvent::began());
    }

    pub fn move_by(&mut self, translation_x: f32) {
        self.menu.handle_pan(Self::horizontal(translation_x));
    }

    pub fn release(&mut self, translation_x: f32) {
        self.menu.handle_pan(PanEvent::ended(
            Point::new(translation_x, 0.0),
            Velocity::ZERO,
        ));
    }

    /// One full gesture with a single movement sample.
    pub fn drag_and_release(&mut self, translation_x: f32) {
        self.begin_drag();
        self.move_by(translation_x);
        self.release(translation_x);
    }

    /// One full gesture visiting every sample in order, releasing at the
    /// last one.
    pub fn drag_through(&mut self, samples: &[f32]) {
        self.begin_drag();
        for &sample in samples {
            self.move_by(sample);
        }
        self.release(samples.last().copied().unwrap_or(0.0));
    }

    /// A drag whose first movement sample is predominantly vertical.
    pub fn vertical_drag(&mut self, translation_y: f32) {
        self.begin_drag();
        self.menu.handle_pan(PanEvent::changed(
            Point::new(0.0, translation_y),
            Velocity::new(10.0, 400.0),
        ));
        self.menu.handle_pan(PanEvent::ended(
            Point::new(0.0, translation_y),
            Velocity::ZERO,
        ));
    }

    /// Taps a revealed button directly.
    pub fn tap(&mut self, side: MenuSide, index: usize) {
        self.menu.tap(side, index);
    }

    /// Advances a fixed number of frames.
    pub fn advance_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.clock_nanos += FRAME_NANOS;
            self.menu.tick(self.clock_nanos);
        }
    }

    /// Pumps frames until all animations are at rest.
    pub fn settle(&mut self) {
        for _ in 0..SETTLE_FRAME_LIMIT {
            self.clock_nanos += FRAME_NANOS;
            if !self.menu.tick(self.clock_nanos) {
                return;
            }
        }
        panic!("row did not settle within {} frames", SETTLE_FRAME_LIMIT);
    }
}
