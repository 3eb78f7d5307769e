use crate::{resolve_frames, Anchor, Attribute, ConstraintSet, LayoutContext, Priority, ViewId};
use slidecell_ui_graphics::{EdgeInsets, Rect};

fn context(container: ViewId, width: f32, height: f32) -> LayoutContext {
    LayoutContext::new(
        container,
        Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        },
    )
}

#[test]
fn pinned_view_fills_container() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let view = ViewId::next();

    set.pin_edges(
        view,
        container,
        EdgeInsets::uniform(0.0),
        Priority::REQUIRED,
        &[],
    );

    let frames = resolve_frames(&set, &context(container, 320.0, 60.0), &[view]);
    assert_eq!(
        frames[&view],
        Rect {
            x: 0.0,
            y: 0.0,
            width: 320.0,
            height: 60.0
        }
    );
}

#[test]
fn offset_constant_slides_the_view() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let view = ViewId::next();

    set.pin(
        view,
        container,
        &[Attribute::Top, Attribute::Bottom],
        0.0,
        Priority::REQUIRED,
    );
    set.set_equal_width(view, container, 1.0, Priority::REQUIRED);
    let offset = set.set_offset(view, container, 0.0, Priority::REQUIRED);

    set.set_constant(offset, -35.0);
    let frames = resolve_frames(&set, &context(container, 120.0, 44.0), &[view]);
    assert_eq!(frames[&view].x, -35.0);
    assert_eq!(frames[&view].width, 120.0);
}

#[test]
fn trailing_to_sibling_leading_resolves_in_order() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let pannable = ViewId::next();
    let lane = ViewId::next();

    set.pin(
        pannable,
        container,
        &[Attribute::Top, Attribute::Bottom],
        0.0,
        Priority::REQUIRED,
    );
    set.set_equal_width(pannable, container, 1.0, Priority::REQUIRED);
    let offset = set.set_offset(pannable, container, 40.0, Priority::REQUIRED);

    set.pin(
        lane,
        container,
        &[Attribute::Leading, Attribute::Top, Attribute::Bottom],
        0.0,
        Priority::REQUIRED,
    );
    set.set_edge_to(
        lane,
        Attribute::Trailing,
        Anchor::new(pannable, Attribute::Leading),
        8.0,
        Priority::HIGH,
    );

    let _ = offset;
    let frames = resolve_frames(&set, &context(container, 120.0, 44.0), &[pannable, lane]);
    assert_eq!(frames[&lane].x, 0.0);
    assert_eq!(frames[&lane].width, 48.0);
}

#[test]
fn half_width_pair_splits_the_lane() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let second = ViewId::next();

    set.pin(
        second,
        container,
        &[Attribute::Top, Attribute::Bottom, Attribute::Trailing],
        0.0,
        Priority::REQUIRED,
    );
    set.set_equal_width(second, container, 0.5, Priority::REQUIRED);

    let frames = resolve_frames(&set, &context(container, 200.0, 44.0), &[second]);
    assert_eq!(frames[&second].width, 100.0);
    assert_eq!(frames[&second].x, 100.0);
}

#[test]
fn dimension_limits_clamp_resolved_sizes() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let view = ViewId::next();

    set.set_equal_width(view, container, 1.0, Priority::REQUIRED);
    set.set_max_width(view, 100.0, Priority::REQUIRED);
    set.set_height(view, 44.0, Priority::REQUIRED);
    set.pin(
        view,
        container,
        &[Attribute::Leading, Attribute::Top],
        0.0,
        Priority::REQUIRED,
    );

    let frames = resolve_frames(&set, &context(container, 320.0, 44.0), &[view]);
    assert_eq!(frames[&view].width, 100.0);
}

#[test]
fn safe_area_pin_respects_insets() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let view = ViewId::next();

    set.pin_to_safe_area(
        view,
        container,
        &[Attribute::Leading, Attribute::Top, Attribute::Trailing],
        20.0,
        Priority::REQUIRED,
    );
    set.set_height(view, 60.0, Priority::REQUIRED);

    let ctx = context(container, 390.0, 844.0)
        .with_safe_area(EdgeInsets::from_components(0.0, 47.0, 0.0, 34.0));
    let frames = resolve_frames(&set, &ctx, &[view]);
    assert_eq!(frames[&view].x, 20.0);
    assert_eq!(frames[&view].y, 67.0);
    assert_eq!(frames[&view].width, 350.0);
}

#[test]
fn centered_view_derives_edges_from_extent() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let view = ViewId::next();

    set.center(view, container, &[Attribute::CenterX, Attribute::CenterY]);
    set.set_width(view, 50.0, Priority::REQUIRED);
    set.set_height(view, 20.0, Priority::REQUIRED);

    let frames = resolve_frames(&set, &context(container, 100.0, 100.0), &[view]);
    assert_eq!(frames[&view].x, 25.0);
    assert_eq!(frames[&view].y, 40.0);
}

#[test]
fn aspect_ratio_derives_height_from_width() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let view = ViewId::next();

    set.pin(
        view,
        container,
        &[Attribute::Leading, Attribute::Top],
        0.0,
        Priority::REQUIRED,
    );
    set.set_width(view, 80.0, Priority::REQUIRED);
    set.set_aspect_ratio(view, 0.5);

    let frames = resolve_frames(&set, &context(container, 320.0, 200.0), &[view]);
    assert_eq!(frames[&view].height, 40.0);
}

#[test]
fn under_determined_view_produces_no_frame() {
    let mut set = ConstraintSet::new();
    let container = ViewId::next();
    let view = ViewId::next();

    set.set_width(view, 50.0, Priority::REQUIRED);

    let frames = resolve_frames(&set, &context(container, 100.0, 100.0), &[view]);
    assert!(frames.get(&view).is_none());
}
