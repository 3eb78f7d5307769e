//! Recording doubles for the host hooks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slidecell_foundation::{HapticEngine, ImpactStyle};

/// Haptic engine that records every impact instead of vibrating.
#[derive(Default)]
pub struct RecordingHaptics {
    impacts: RefCell<Vec<ImpactStyle>>,
}

impl RecordingHaptics {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.impacts.borrow().len()
    }

    pub fn impacts(&self) -> Vec<ImpactStyle> {
        self.impacts.borrow().clone()
    }

    pub fn clear(&self) {
        self.impacts.borrow_mut().clear();
    }
}

impl HapticEngine for RecordingHaptics {
    fn impact(&self, style: ImpactStyle) {
        self.impacts.borrow_mut().push(style);
    }
}

/// Counts invocations of a fire callback.
#[derive(Default)]
pub struct CallCounter {
    count: Cell<u32>,
}

impl CallCounter {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// A callback that bumps this counter; hand it to
    /// `ButtonSpec::with_on_fire`.
    pub fn hook(self: &Rc<Self>) -> impl Fn() + 'static {
        let counter = Rc::clone(self);
        move || counter.count.set(counter.count.get() + 1)
    }
}
