// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_swipe` crate.
//!
//! These drive a [`SwipeItem`] through whole touch sequences and check the
//! commanded settles, the derived phases, and the responses handed back to
//! the host.

use kurbo::{Point, Rect, Vec2};
use understory_swipe::{
    Response, Settle, SettleFrame, Side, SurfaceRole, SwipeConfig, SwipeItem, SwipePhase,
    TouchEvent,
};

/// Records every commanded settle and jumps straight to the target when
/// asked to finish.
#[derive(Debug, Default)]
struct ManualSettle {
    starts: Vec<(f64, f64)>,
    aborts: usize,
    pending: Option<f64>,
}

impl ManualSettle {
    fn last_target(&self) -> Option<f64> {
        self.starts.last().map(|(_, target)| *target)
    }
}

impl Settle for ManualSettle {
    fn start_settle(&mut self, from: f64, target: f64) {
        self.starts.push((from, target));
        self.pending = Some(target);
    }

    fn continue_settling(&mut self) -> Option<SettleFrame> {
        self.pending.take().map(|offset| SettleFrame {
            offset,
            finished: true,
        })
    }

    fn abort(&mut self) {
        self.aborts += 1;
        self.pending = None;
    }

    fn is_settling(&self) -> bool {
        self.pending.is_some()
    }
}

const FLING: f64 = 50.0;

fn config() -> SwipeConfig {
    SwipeConfig::default()
        .with_touch_slop(8.0)
        .with_min_fling_velocity(FLING)
}

/// Content 300 wide, right menu 80 wide, optional left menu 100 wide.
fn row(with_left: bool) -> SwipeItem<ManualSettle> {
    let mut item = SwipeItem::with_settle(config(), ManualSettle::default());
    if with_left {
        item.attach(SurfaceRole::Menu(Side::Left), Rect::new(0.0, 0.0, 100.0, 100.0));
    }
    item.attach(SurfaceRole::Menu(Side::Right), Rect::new(220.0, 0.0, 300.0, 100.0));
    item.attach(SurfaceRole::Content, Rect::new(0.0, 0.0, 300.0, 100.0));
    item
}

fn down(item: &mut SwipeItem<ManualSettle>, x: f64, y: f64) -> Response {
    item.handle_event(TouchEvent::Down(Point::new(x, y)))
}

fn move_to(item: &mut SwipeItem<ManualSettle>, x: f64, y: f64) -> Response {
    item.handle_event(TouchEvent::Move(Point::new(x, y)))
}

fn up(item: &mut SwipeItem<ManualSettle>, x: f64, y: f64, vx: f64) -> Response {
    item.handle_event(TouchEvent::Up {
        pos: Point::new(x, y),
        velocity: Vec2::new(vx, 0.0),
    })
}

fn finish(item: &mut SwipeItem<ManualSettle>) {
    while item.continue_settling() {}
    // ManualSettle finishes in one frame, which reports no further frames.
    assert!(!item.needs_frame(), "settle left a frame pending");
}

#[test]
fn right_menu_swipe_end_to_end() {
    let mut item = row(false);

    down(&mut item, 250.0, 50.0);
    assert_eq!(move_to(&mut item, 170.0, 50.0), Response::Consumed);
    assert_eq!(item.state().active_side(), Some(Side::Right));
    assert_eq!(item.content_left(), -80.0);

    assert_eq!(move_to(&mut item, 150.0, 50.0), Response::Consumed);
    assert_eq!(item.content_left(), -80.0);

    assert_eq!(up(&mut item, 150.0, 50.0, 0.0), Response::Cancelled);
    assert!(item.state().is_committed_open());
    assert_eq!(item.settle().last_target(), Some(-80.0));

    finish(&mut item);
    assert_eq!(item.phase(), SwipePhase::Open);
}

#[test]
fn short_drag_closes_by_position() {
    let mut item = row(false);

    down(&mut item, 250.0, 50.0);
    move_to(&mut item, 220.0, 50.0);
    assert_eq!(item.content_left(), -30.0);

    up(&mut item, 220.0, 50.0, 0.0);
    assert!(!item.state().is_committed_open());
    assert_eq!(item.settle().last_target(), Some(0.0));
    assert!(item.is_close_animating());

    finish(&mut item);
    assert_eq!(item.content_left(), 0.0);
    assert_eq!(item.phase(), SwipePhase::Closed);
}

#[test]
fn left_release_position_fallback_is_strict() {
    for (travel, open) in [(51.0, true), (49.0, false), (50.0, false)] {
        let mut item = row(true);
        down(&mut item, 100.0, 50.0);
        move_to(&mut item, 100.0 + travel, 50.0);
        assert_eq!(item.content_left(), travel);

        up(&mut item, 100.0 + travel, 50.0, 0.0);
        assert_eq!(item.state().is_committed_open(), open, "travel {travel}");
    }
}

#[test]
fn fling_overrides_position() {
    let mut item = row(true);
    down(&mut item, 100.0, 50.0);
    move_to(&mut item, 110.0, 50.0);
    assert_eq!(item.content_left(), 10.0);

    up(&mut item, 110.0, 50.0, FLING + 1.0);
    assert!(item.state().is_committed_open());
    assert_eq!(item.settle().last_target(), Some(100.0));
}

#[test]
fn fling_is_clamped_to_max_velocity() {
    let mut item = SwipeItem::with_settle(
        config().with_max_fling_velocity(40.0),
        ManualSettle::default(),
    );
    item.attach(SurfaceRole::Menu(Side::Left), Rect::new(0.0, 0.0, 100.0, 100.0));
    item.attach(SurfaceRole::Content, Rect::new(0.0, 0.0, 300.0, 100.0));

    down(&mut item, 100.0, 50.0);
    move_to(&mut item, 110.0, 50.0);
    // Clamped to 40, below the fling threshold; position decides.
    up(&mut item, 110.0, 50.0, 10_000.0);
    assert!(!item.state().is_committed_open());
}

#[test]
fn confirmed_side_is_kept_for_the_session() {
    let mut item = row(true);

    down(&mut item, 150.0, 50.0);
    move_to(&mut item, 120.0, 50.0);
    assert_eq!(item.state().active_side(), Some(Side::Right));
    assert_eq!(item.content_left(), -30.0);

    // Swinging far to the right never selects the left menu in this session.
    move_to(&mut item, 260.0, 50.0);
    assert_eq!(item.state().active_side(), Some(Side::Right));
    assert_eq!(item.content_left(), 0.0);
}

#[test]
fn slop_and_vertical_movement_pass_through() {
    let mut item = row(true);
    down(&mut item, 150.0, 50.0);

    assert_eq!(move_to(&mut item, 156.0, 50.0), Response::PassThrough);
    assert_eq!(move_to(&mut item, 170.0, 90.0), Response::PassThrough);
    assert_eq!(move_to(&mut item, 130.0, 10.0), Response::PassThrough);
    assert_eq!(item.content_left(), 0.0);

    // A tap that never became a drag lets the click through.
    assert_eq!(up(&mut item, 130.0, 10.0, 0.0), Response::PassThrough);
    assert!(!item.state().is_committed_open());
}

#[test]
fn direction_without_menu_is_not_a_swipe() {
    let mut item = row(false);
    down(&mut item, 100.0, 50.0);

    assert_eq!(move_to(&mut item, 160.0, 50.0), Response::PassThrough);
    assert_eq!(item.state().active_side(), None);
    assert_eq!(item.content_left(), 0.0);

    assert_eq!(up(&mut item, 160.0, 50.0, 0.0), Response::PassThrough);
    assert!(item.settle().starts.is_empty());
}

#[test]
fn close_is_idempotent() {
    let mut item = row(false);
    item.open_side(Side::Right);
    finish(&mut item);

    item.close();
    item.close();
    let targets: Vec<f64> = item.settle().starts.iter().map(|(_, t)| *t).collect();
    assert_eq!(targets, vec![-80.0, 0.0, 0.0]);
    assert!(!item.state().is_committed_open());

    finish(&mut item);
    assert_eq!(item.content_left(), 0.0);
}

#[test]
fn down_is_swallowed_while_closing() {
    let mut item = row(false);
    item.open_side(Side::Right);
    finish(&mut item);
    item.close();
    assert!(item.is_close_animating());

    let aborts = item.settle().aborts;
    assert!(
        down(&mut item, 100.0, 50.0).is_consumed(),
        "down during a close must not reach children"
    );
    assert_eq!(move_to(&mut item, 20.0, 50.0), Response::Consumed);
    assert_eq!(up(&mut item, 20.0, 50.0, 0.0), Response::Consumed);

    // No capture happened: the close animation kept going untouched.
    assert_eq!(item.settle().aborts, aborts);
    assert!(item.needs_frame());
    assert_eq!(item.content_left(), -80.0);
    finish(&mut item);
    assert_eq!(item.content_left(), 0.0);
}

#[test]
fn down_while_opening_captures() {
    let mut item = row(false);
    item.open_side(Side::Right);
    assert!(item.is_open_animating());

    assert_eq!(down(&mut item, 100.0, 50.0), Response::Consumed);
    assert_eq!(item.settle().aborts, 1);
    assert!(!item.needs_frame());
}

#[test]
fn open_menu_drags_without_slop_and_suppresses_clicks() {
    let mut item = row(false);
    item.set_content_clickable(true);
    item.open_side(Side::Right);
    finish(&mut item);

    // A tap on the open row becomes a cancel for children.
    down(&mut item, 100.0, 50.0);
    assert_eq!(up(&mut item, 100.0, 50.0, 0.0), Response::Cancelled);
    assert!(item.state().is_committed_open());

    // A tiny move already counts as a drag.
    down(&mut item, 100.0, 50.0);
    assert_eq!(move_to(&mut item, 103.0, 50.0), Response::Consumed);
    assert_eq!(item.content_left(), -77.0);

    move_to(&mut item, 160.0, 50.0);
    assert_eq!(item.content_left(), -20.0);
    assert_eq!(up(&mut item, 160.0, 50.0, 0.0), Response::Cancelled);
    assert!(!item.state().is_committed_open());
}

#[test]
fn tap_on_open_menu_reaches_its_children() {
    let mut item = row(false);
    item.set_content_clickable(true);
    item.open_side(Side::Right);
    finish(&mut item);

    assert_eq!(down(&mut item, 260.0, 50.0), Response::PassThrough);
    assert_eq!(up(&mut item, 260.0, 50.0, 0.0), Response::PassThrough);
    assert!(
        item.state().is_committed_open(),
        "a tap on the menu keeps the row open"
    );
    finish(&mut item);
    assert_eq!(item.content_left(), -80.0);
}

#[test]
fn dragging_a_menu_moves_the_content() {
    let mut item = row(false);
    item.open_side(Side::Right);
    finish(&mut item);

    // The right menu is exposed at x in [220, 300).
    let pos = Point::new(260.0, 50.0);
    assert_eq!(item.surface_at(pos), Some(SurfaceRole::Menu(Side::Right)));

    down(&mut item, pos.x, pos.y);
    move_to(&mut item, 300.0, 50.0);
    assert_eq!(item.content_left(), -40.0);
    assert_eq!(
        item.surface_bounds(SurfaceRole::Menu(Side::Right)),
        Some(Rect::new(220.0, 0.0, 300.0, 100.0))
    );

    up(&mut item, 300.0, 50.0, 0.0);
    assert!(!item.state().is_committed_open());
}

#[test]
fn cancel_resolves_with_zero_velocity() {
    let mut item = row(false);
    down(&mut item, 250.0, 50.0);
    move_to(&mut item, 190.0, 50.0);
    assert_eq!(item.content_left(), -60.0);

    assert_eq!(item.handle_event(TouchEvent::Cancel), Response::Cancelled);
    assert!(item.state().is_committed_open());
    assert_eq!(item.settle().last_target(), Some(-80.0));
}

#[test]
fn touch_outside_surfaces_never_moves_content() {
    let mut item = SwipeItem::with_settle(config(), ManualSettle::default());
    item.attach(SurfaceRole::Menu(Side::Right), Rect::new(220.0, 0.0, 300.0, 100.0));
    item.attach(SurfaceRole::Content, Rect::new(0.0, 0.0, 200.0, 100.0));

    // x = 210 is neither content nor menu.
    assert_eq!(down(&mut item, 210.0, 50.0), Response::PassThrough);
    assert_eq!(move_to(&mut item, 150.0, 50.0), Response::Consumed);
    assert_eq!(item.content_left(), 0.0);

    up(&mut item, 150.0, 50.0, -1_000.0);
    assert!(item.settle().starts.is_empty());
}

#[test]
fn gestures_without_content_change_nothing() {
    let mut item = SwipeItem::with_settle(config(), ManualSettle::default());
    item.attach(SurfaceRole::Menu(Side::Right), Rect::new(220.0, 0.0, 300.0, 100.0));

    assert_eq!(down(&mut item, 250.0, 50.0), Response::PassThrough);
    assert_eq!(move_to(&mut item, 170.0, 50.0), Response::Consumed);
    assert_eq!(item.content_left(), 0.0);

    assert_eq!(up(&mut item, 170.0, 50.0, -1_000.0), Response::Cancelled);
    assert_eq!(item.content_left(), 0.0);
    assert!(
        item.settle().starts.is_empty(),
        "no settle without content"
    );
    assert!(!item.continue_settling(), "nothing to animate");
    assert_eq!(item.phase(), SwipePhase::Closed);
}

#[test]
fn disabling_mid_gesture_releases_the_drag() {
    let mut item = row(false);
    down(&mut item, 250.0, 50.0);
    move_to(&mut item, 200.0, 50.0);
    assert_eq!(item.content_left(), -50.0);

    item.enable_swipe(false);
    assert!(item.state().is_committed_open());
    assert_eq!(item.settle().last_target(), Some(-80.0));
    assert_eq!(up(&mut item, 200.0, 50.0, 0.0), Response::PassThrough);

    // The old sequence is gone once re-enabled.
    item.enable_swipe(true);
    assert_eq!(up(&mut item, 200.0, 50.0, 0.0), Response::PassThrough);
    assert_eq!(item.settle().starts.len(), 1);

    // Frames still run while disabled.
    finish(&mut item);
    assert_eq!(item.phase(), SwipePhase::Open);
}
