//! Scripted tour over three demo rows.
//!
//! Assembles the classic row configurations (single/single, pair/pair,
//! none/single), then drives real pan gestures through each and logs
//! every decision the interaction core makes.

use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::info;
use slidecell_foundation::{HapticEngine, ImpactStyle, PanEvent};
use slidecell_ui::{ButtonMode, ButtonSpec, MenuSide, SwipeMenu};
use slidecell_ui_graphics::{Color, Icon, Point, Rect, Velocity};
use slidecell_ui_layout::ViewId;
use web_time::Instant;

const ROW_BOUNDS: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 390.0,
    height: 60.0,
};

/// Logs impacts instead of vibrating; desktops have no motor.
struct LogHaptics;

impl HapticEngine for LogHaptics {
    fn impact(&self, style: ImpactStyle) {
        info!("haptic impact: {:?}", style);
    }
}

fn delete_icon() -> Icon {
    Icon::tinted("delete", Color::WHITE)
}

fn single_single_row() -> SwipeMenu {
    let red_active = Color::from_rgb_u8(211, 47, 47);
    let red_inactive = Color::from_rgb_u8(229, 115, 115);

    let left = ButtonMode::Single(
        ButtonSpec::new(red_inactive, delete_icon())
            .with_active_color(red_active)
            .with_on_fire(|| info!("left delete fired")),
    );
    let right = ButtonMode::Single(
        ButtonSpec::new(red_active, delete_icon())
            .with_active_color(red_active)
            .with_on_fire(|| info!("right delete fired")),
    );

    SwipeMenu::with_haptics(left, right, ViewId::next(), Rc::new(LogHaptics))
}

fn pair_pair_row() -> SwipeMenu {
    let left = ButtonMode::Pair(
        ButtonSpec::new(Color::GRAY, delete_icon())
            .with_active_color(Color::RED)
            .with_on_fire(|| info!("fire 1")),
        ButtonSpec::new(Color::BLACK, delete_icon())
            .with_active_color(Color::RED)
            .with_on_fire(|| info!("fire 2")),
    );
    let right = ButtonMode::Pair(
        ButtonSpec::new(Color::GRAY, delete_icon()),
        ButtonSpec::new(Color::BLACK, delete_icon()),
    );

    SwipeMenu::with_haptics(left, right, ViewId::next(), Rc::new(LogHaptics))
}

fn none_single_row() -> SwipeMenu {
    let right = ButtonMode::Single(
        ButtonSpec::new(Color::GRAY, delete_icon())
            .with_active_color(Color::RED)
            .with_on_fire(|| info!("lone right button fired")),
    );

    SwipeMenu::with_haptics(ButtonMode::None, right, ViewId::next(), Rc::new(LogHaptics))
}

/// One full gesture: began, a single movement sample, release.
fn swipe(menu: &SwipeMenu, translation_x: f32) {
    let direction = if translation_x < 0.0 { -1.0 } else { 1.0 };
    menu.handle_pan(PanEvent::began());
    menu.handle_pan(PanEvent::changed(
        Point::new(translation_x, 0.0),
        Velocity::new(direction * 300.0, 0.0),
    ));
    menu.handle_pan(PanEvent::ended(
        Point::new(translation_x, 0.0),
        Velocity::ZERO,
    ));
}

/// Pumps 60fps frames until the row is at rest.
fn settle(menu: &SwipeMenu) {
    let start = Instant::now();
    loop {
        let nanos = start.elapsed().as_nanos() as u64;
        if !menu.tick(nanos) {
            break;
        }
        thread::sleep(Duration::from_millis(16));
    }
}

fn report(name: &str, menu: &SwipeMenu) {
    info!(
        "{name}: offset {:.1}, phase {:?}",
        menu.current_offset(),
        menu.phase()
    );
    let frames = menu.resolve_layout(ROW_BOUNDS);
    if let Some(frame) = frames.get(&menu.pannable_view()) {
        info!("{name}: content frame x {:.1}, width {:.1}", frame.x, frame.width);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Slidecell row demo ===");
    println!("Three rows, one scripted gesture tour:");
    println!("  - single/single: drag past the first barrier and release to instant-fire");
    println!("  - pair/pair: snap open at the second barrier, then tap a button");
    println!("  - none/single: drags toward the empty side are clamped");
    println!();

    let row = single_single_row();
    row.layout(ROW_BOUNDS);
    info!(
        "barriers: first {:.1}, second {:.1}",
        row.first_barrier(),
        row.second_barrier()
    );
    swipe(&row, -(row.first_barrier() + 20.0));
    settle(&row);
    report("single/single", &row);

    let row = pair_pair_row();
    row.layout(ROW_BOUNDS);
    swipe(&row, row.first_barrier() + 20.0);
    settle(&row);
    report("pair/pair after open", &row);
    row.tap(MenuSide::Left, 1);
    settle(&row);
    report("pair/pair after tap", &row);

    let row = none_single_row();
    row.layout(ROW_BOUNDS);
    swipe(&row, 10.0);
    settle(&row);
    report("none/single after clamped drag", &row);
    swipe(&row, -(row.second_barrier()));
    settle(&row);
    report("none/single after commit", &row);
}
