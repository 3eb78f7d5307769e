//! End-to-end interaction tests driven through the robot harness.
//!
//! Geometry used throughout: width 120 gives a first barrier of 30 and a
//! second barrier of 40.

use std::cell::RefCell;
use std::rc::Rc;

use slidecell_testing::{CallCounter, SwipeRobot};
use slidecell_ui::{
    ButtonMode, ButtonSpec, MenuSide, SwipeMenu, SwipePhase, BUTTON_ALPHA_IN_SINGLE_MODE,
};
use slidecell_ui_graphics::{Color, Icon};

const WIDTH: f32 = 120.0;
const HEIGHT: f32 = 44.0;

fn single(counter: &Rc<CallCounter>) -> ButtonMode {
    ButtonMode::Single(
        ButtonSpec::new(Color::GRAY, Icon::named("delete"))
            .with_active_color(Color::RED)
            .with_on_fire(counter.hook()),
    )
}

fn pair(first: &Rc<CallCounter>, second: &Rc<CallCounter>) -> ButtonMode {
    ButtonMode::Pair(
        ButtonSpec::new(Color::GRAY, Icon::named("archive")).with_on_fire(first.hook()),
        ButtonSpec::new(Color::BLACK, Icon::named("delete")).with_on_fire(second.hook()),
    )
}

#[test]
fn barriers_are_quarter_and_third_of_width() {
    let robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, ButtonMode::None);
    assert_eq!(robot.menu().first_barrier(), 30.0);
    assert_eq!(robot.menu().second_barrier(), 40.0);

    let other = SwipeRobot::new(57.0, HEIGHT, ButtonMode::None, ButtonMode::None);
    assert!(other.menu().first_barrier() < other.menu().second_barrier());
}

#[test]
fn none_side_is_clamped_on_every_event() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));

    // Dragging right would reveal the empty left side.
    robot.drag_and_release(10.0);
    robot.settle();

    assert_eq!(robot.offset(), 0.0);
    assert_eq!(robot.menu().logical_offset(), 0.0);
    assert_eq!(fired.count(), 0);
    assert_eq!(robot.haptics().count(), 0);
}

#[test]
fn single_commit_fires_once_and_closes() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));

    robot.drag_and_release(-35.0);

    // The callback fires on release, before the settle animation is done.
    assert_eq!(fired.count(), 1);

    robot.settle();
    assert_eq!(robot.offset(), 0.0);
    assert_eq!(robot.menu().phase(), SwipePhase::Idle);
    assert_eq!(robot.haptics().count(), 1);
}

#[test]
fn crossing_the_barrier_arms_instant_fire() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));

    robot.begin_drag();
    robot.move_by(-35.0);

    {
        let lane = robot.menu().right_lane();
        assert_eq!(lane.alpha(), 1.0);
        let button = lane.first_button().unwrap();
        assert_eq!(button.alpha(), 1.0);
        assert!(button.instant_fire());
        assert_eq!(button.background(), Color::RED);
    }

    // Sliding back under the barrier disarms and dims again.
    robot.move_by(-20.0);
    {
        let lane = robot.menu().right_lane();
        let button = lane.first_button().unwrap();
        assert_eq!(button.alpha(), BUTTON_ALPHA_IN_SINGLE_MODE);
        assert!(!button.instant_fire());
        assert_eq!(button.background(), Color::GRAY);
    }

    robot.release(-20.0);
    robot.settle();
    assert_eq!(fired.count(), 0);
    assert_eq!(robot.offset(), 0.0);
}

#[test]
fn pair_opens_at_second_barrier_without_firing() {
    let first = CallCounter::new();
    let second = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, pair(&first, &second));

    robot.drag_and_release(-35.0);
    assert_eq!(robot.menu().phase(), SwipePhase::SettlingOpen(MenuSide::Right));

    robot.settle();
    assert_eq!(robot.offset(), -40.0);
    assert_eq!(robot.menu().phase(), SwipePhase::Open(MenuSide::Right));
    assert_eq!(first.count(), 0);
    assert_eq!(second.count(), 0);
    // Pairs never arm instant fire, so no barrier haptics either.
    assert_eq!(robot.haptics().count(), 0);
}

#[test]
fn tapping_an_open_pair_closes_then_fires() {
    let first = CallCounter::new();
    let second = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, pair(&first, &second));

    robot.drag_and_release(-35.0);
    robot.settle();

    robot.tap(MenuSide::Right, 1);
    assert_eq!(second.count(), 1);
    assert_eq!(first.count(), 0);

    robot.settle();
    assert_eq!(robot.offset(), 0.0);
    assert_eq!(robot.menu().phase(), SwipePhase::Idle);
}

#[test]
fn sub_threshold_release_reverts_for_any_mode() {
    let fired = CallCounter::new();

    let mut with_single = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));
    with_single.drag_and_release(-20.0);
    with_single.settle();
    assert_eq!(with_single.offset(), 0.0);
    assert_eq!(fired.count(), 0);

    let first = CallCounter::new();
    let second = CallCounter::new();
    let mut with_pair = SwipeRobot::new(WIDTH, HEIGHT, pair(&first, &second), ButtonMode::None);
    with_pair.drag_and_release(29.0);
    with_pair.settle();
    assert_eq!(with_pair.offset(), 0.0);
    assert_eq!(first.count(), 0);
}

#[test]
fn oscillating_across_the_barrier_alternates_haptics() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));

    // Five crossings: out, in, out, in, out.
    robot.drag_through(&[-35.0, -20.0, -35.0, -20.0, -35.0]);

    assert_eq!(robot.haptics().count(), 5);
    // Released past the barrier, so the commit still fires exactly once.
    assert_eq!(fired.count(), 1);

    robot.settle();
    assert_eq!(robot.offset(), 0.0);
}

#[test]
fn repeated_samples_on_one_side_of_the_barrier_fire_nothing_extra() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));

    robot.drag_through(&[-31.0, -33.0, -38.0, -35.0]);

    assert_eq!(robot.haptics().count(), 1);
}

#[test]
fn end_to_end_reference_scenario() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));

    robot.drag_and_release(-35.0);
    robot.settle();
    assert_eq!(fired.count(), 1);
    assert_eq!(robot.offset(), 0.0);

    robot.drag_and_release(-20.0);
    robot.settle();
    assert_eq!(fired.count(), 1);
    assert_eq!(robot.offset(), 0.0);

    robot.drag_and_release(10.0);
    robot.settle();
    assert_eq!(fired.count(), 1);
    assert_eq!(robot.offset(), 0.0);
}

#[test]
fn new_drag_continues_from_an_open_row() {
    let first = CallCounter::new();
    let second = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, pair(&first, &second));

    robot.drag_and_release(-35.0);
    robot.settle();
    assert_eq!(robot.offset(), -40.0);

    // Dragging 20 to the right from the open position lands at -20,
    // under the first barrier, so the row closes.
    robot.drag_and_release(20.0);
    robot.settle();
    assert_eq!(robot.offset(), 0.0);
}

#[test]
fn new_drag_takes_over_a_settle_mid_flight() {
    let first = CallCounter::new();
    let second = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, pair(&first, &second));

    robot.drag_and_release(-35.0);
    robot.advance_frames(3);
    let mid_flight = robot.offset();
    assert!(mid_flight < 0.0 && mid_flight > -40.0);

    // The next drag starts from the presented value, not the logical
    // target, so there is no visible jump.
    robot.begin_drag();
    robot.move_by(0.0);
    assert!((robot.offset() - mid_flight).abs() < 0.001);

    // Dragging back under the first barrier closes the row.
    robot.move_by(25.0);
    robot.release(25.0);
    robot.settle();
    assert_eq!(robot.offset(), 0.0);
}

#[test]
fn vertical_first_sample_cancels_the_gesture() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, ButtonMode::None, single(&fired));

    robot.vertical_drag(50.0);
    robot.settle();

    assert_eq!(robot.offset(), 0.0);
    assert_eq!(fired.count(), 0);
    assert_eq!(robot.haptics().count(), 0);

    // The recognizer recovers for the next, genuinely horizontal drag.
    robot.drag_and_release(-35.0);
    robot.settle();
    assert_eq!(fired.count(), 1);
}

#[test]
fn pan_events_are_ignored_before_layout() {
    let fired = CallCounter::new();
    let mut robot = SwipeRobot::without_layout(ButtonMode::None, single(&fired));

    robot.drag_and_release(-35.0);
    robot.settle();

    assert_eq!(robot.offset(), 0.0);
    assert_eq!(fired.count(), 0);
    assert_eq!(robot.haptics().count(), 0);
}

#[test]
fn programmatic_close_shuts_an_open_row() {
    let first = CallCounter::new();
    let second = CallCounter::new();
    let mut robot = SwipeRobot::new(WIDTH, HEIGHT, pair(&first, &second), ButtonMode::None);

    robot.drag_and_release(35.0);
    robot.settle();
    assert_eq!(robot.offset(), 40.0);

    robot.menu().close();
    robot.settle();
    assert_eq!(robot.offset(), 0.0);
    assert_eq!(robot.menu().phase(), SwipePhase::Idle);
}

#[test]
fn direct_tap_closes_before_the_callback_runs() {
    let seen_offset: Rc<RefCell<Option<f32>>> = Rc::new(RefCell::new(None));
    let slot: Rc<RefCell<Option<SwipeMenu>>> = Rc::new(RefCell::new(None));

    let spec = {
        let seen_offset = seen_offset.clone();
        let slot = slot.clone();
        ButtonSpec::new(Color::GRAY, Icon::named("delete")).with_on_fire(move || {
            if let Some(menu) = slot.borrow().as_ref() {
                *seen_offset.borrow_mut() = Some(menu.logical_offset());
            }
        })
    };

    let mut robot = SwipeRobot::new(
        WIDTH,
        HEIGHT,
        ButtonMode::None,
        ButtonMode::Pair(spec, ButtonSpec::new(Color::BLACK, Icon::named("more"))),
    );
    *slot.borrow_mut() = Some(robot.menu().clone());

    robot.drag_and_release(-35.0);
    robot.settle();
    robot.tap(MenuSide::Right, 0);

    // The resting target was already 0 when the callback observed it.
    assert_eq!(*seen_offset.borrow(), Some(0.0));
}
