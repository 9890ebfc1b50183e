// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe container: content over up to two side menus.

use core::mem;

use kurbo::{Point, Rect, Vec2};

use crate::clamp::{clamp_content, place_drag};
use crate::classify::{Classification, GestureClassifier};
use crate::config::SwipeConfig;
use crate::drag::GestureSession;
use crate::event::{Response, TouchEvent};
use crate::release::{Resolution, resolve_release};
use crate::settle::{EasedSettle, Settle};
use crate::side::{Menus, Side, SurfaceRole};
use crate::state::{SwipePhase, SwipeState};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tracking {
    Idle,
    /// A down arrived mid-close; the rest of its sequence is eaten.
    Swallowed,
    Active(GestureSession),
}

/// A list-row container that reveals side menus when its content is swiped.
///
/// The host registers surfaces with [`attach`](Self::attach), forwards touch
/// events to [`handle_event`](Self::handle_event), reads the content position
/// back from [`content_left`](Self::content_left), and calls
/// [`continue_settling`](Self::continue_settling) once per frame while it
/// returns `true`.
///
/// Content offsets are relative to the content's at-rest bounds: `0` is
/// closed, `+width` reveals the left menu, `-width` the right menu.
#[derive(Clone, Debug)]
pub struct SwipeItem<S = EasedSettle> {
    config: SwipeConfig,
    classifier: GestureClassifier,
    content: Option<Rect>,
    content_left: f64,
    content_clickable: bool,
    menus: Menus,
    state: SwipeState,
    tracking: Tracking,
    settle: S,
}

impl Default for SwipeItem<EasedSettle> {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeItem<EasedSettle> {
    /// Creates an empty container with the default settle animation.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self::with_settle(config, EasedSettle::default())
    }
}

impl<S: Settle> SwipeItem<S> {
    /// Creates an empty container driven by a custom settle primitive.
    #[must_use]
    pub fn with_settle(config: SwipeConfig, settle: S) -> Self {
        Self {
            config,
            classifier: GestureClassifier::new(config.touch_slop),
            content: None,
            content_left: 0.0,
            content_clickable: false,
            menus: Menus::default(),
            state: SwipeState::default(),
            tracking: Tracking::Idle,
            settle,
        }
    }

    /// The gesture constants in use.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The settle primitive.
    #[must_use]
    pub fn settle(&self) -> &S {
        &self.settle
    }

    /// The current swipe intent.
    #[must_use]
    pub fn state(&self) -> &SwipeState {
        &self.state
    }

    /// Registers a surface with its at-rest layout bounds.
    ///
    /// A second registration for the same role replaces the first and returns
    /// its bounds.
    pub fn attach(&mut self, role: SurfaceRole, bounds: Rect) -> Option<Rect> {
        match role {
            SurfaceRole::Content => self.content.replace(bounds),
            SurfaceRole::Menu(side) => {
                let previous = self.menus.insert(side, bounds);
                if previous.is_some() {
                    log::debug!("replacing {side:?} menu registration");
                }
                if self.state.active_side() == Some(side) {
                    self.refit_active_menu(side);
                }
                previous
            }
        }
    }

    /// Keeps the content inside a resized active menu and retargets an open settle.
    fn refit_active_menu(&mut self, side: Side) {
        let Some(width) = self.menus.width(side) else {
            return;
        };
        self.content_left = clamp_content(side, self.content_left, 0.0, width);
        if self.state.is_committed_open() {
            self.open();
        }
    }

    /// Removes a surface, returning its bounds if it was registered.
    ///
    /// Removing the content or the active menu snaps the content back to
    /// zero and forgets any open intent.
    pub fn detach(&mut self, role: SurfaceRole) -> Option<Rect> {
        let removed = match role {
            SurfaceRole::Content => self.content.take(),
            SurfaceRole::Menu(side) => self.menus.remove(side),
        };
        let resets = match role {
            SurfaceRole::Content => true,
            SurfaceRole::Menu(side) => self.state.active_side() == Some(side),
        };
        if removed.is_some() && resets {
            self.settle.abort();
            self.state.reset();
            self.content_left = 0.0;
        }
        removed
    }

    /// At-rest bounds of a registered surface.
    #[must_use]
    pub fn surface_bounds(&self, role: SurfaceRole) -> Option<Rect> {
        match role {
            SurfaceRole::Content => self.content,
            SurfaceRole::Menu(side) => self.menus.get(side),
        }
    }

    /// Current content bounds, shifted by the swipe offset.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content.map(|r| r + Vec2::new(self.content_left, 0.0))
    }

    /// Horizontal offset of the content from its at-rest position.
    #[must_use]
    pub fn content_left(&self) -> f64 {
        self.content_left
    }

    /// Declares whether the content handles clicks itself.
    ///
    /// When it does not, a down on the content is consumed by the container
    /// so the tap cannot fall through to a menu underneath.
    pub fn set_content_clickable(&mut self, clickable: bool) {
        self.content_clickable = clickable;
    }

    /// Global kill switch; while disabled every event passes through.
    ///
    /// Disabling mid-drag releases the dragged content as if the sequence had
    /// been cancelled, so it still settles open or closed.
    pub fn enable_swipe(&mut self, enabled: bool) {
        if !enabled {
            let tracking = mem::replace(&mut self.tracking, Tracking::Idle);
            if let Tracking::Active(session) = tracking
                && session.is_dragging()
                && session.captured().is_some()
            {
                self.resolve(0.0);
            }
        }
        self.state.set_enabled(enabled);
    }

    /// Whether swiping is enabled.
    #[must_use]
    pub fn is_swipe_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Hit-tests `pos` against the content's current bounds.
    #[must_use]
    pub fn is_content_touched(&self, pos: Point) -> bool {
        self.content_bounds().is_some_and(|r| r.contains(pos))
    }

    /// Whether a surface may be captured for dragging.
    #[must_use]
    pub fn can_capture(&self, role: SurfaceRole) -> bool {
        match role {
            SurfaceRole::Content => self.content.is_some(),
            SurfaceRole::Menu(side) => self.menus.contains(side),
        }
    }

    /// Top-most surface under `pos`.
    #[must_use]
    pub fn surface_at(&self, pos: Point) -> Option<SurfaceRole> {
        if self.is_content_touched(pos) {
            return Some(SurfaceRole::Content);
        }
        self.menus.hit(pos).map(SurfaceRole::Menu)
    }

    fn active_menu(&self) -> Option<(Side, f64)> {
        self.content?;
        let side = self.state.active_side()?;
        Some((side, self.menus.width(side)?))
    }

    /// Slides the content to reveal the active menu.
    ///
    /// Without an active menu (or without content) this only clears the open
    /// intent.
    pub fn open(&mut self) {
        let Some((side, width)) = self.active_menu() else {
            self.state.set_committed_open(false);
            return;
        };
        log::debug!("opening {side:?} menu");
        self.settle.start_settle(self.content_left, side.open_offset(width));
        self.state.set_committed_open(true);
    }

    /// Slides the content back over the menus.
    pub fn close(&mut self) {
        let Some((side, _)) = self.active_menu() else {
            self.state.set_committed_open(false);
            return;
        };
        log::debug!("closing {side:?} menu");
        self.settle.start_settle(self.content_left, 0.0);
        self.state.set_committed_open(false);
    }

    /// Makes the menu on `side` active and opens it.
    ///
    /// Returns `false` if no menu is registered on that side.
    pub fn open_side(&mut self, side: Side) -> bool {
        if !self.menus.contains(side) {
            return false;
        }
        self.state.set_active(Some(side));
        self.open();
        true
    }

    /// Whether the content is travelling toward the open offset.
    #[must_use]
    pub fn is_open_animating(&self) -> bool {
        self.active_menu()
            .is_some_and(|(_, width)| self.state.is_open_animating(self.content_left, width))
    }

    /// Whether the content is travelling back to zero.
    #[must_use]
    pub fn is_close_animating(&self) -> bool {
        self.active_menu().is_some() && self.state.is_close_animating(self.content_left)
    }

    /// Visual phase derived from the live content offset.
    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        match self.active_menu() {
            Some((_, width)) => self.state.phase(self.content_left, width),
            None => SwipePhase::Closed,
        }
    }

    /// Advances the settle animation by one frame.
    ///
    /// Returns `true` if another frame is needed.
    pub fn continue_settling(&mut self) -> bool {
        let Some(frame) = self.settle.continue_settling() else {
            return false;
        };
        if self.content.is_some() {
            self.content_left = frame.offset;
        }
        !frame.finished
    }

    /// Whether a settle is in flight and the host should schedule a frame.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.settle.is_settling()
    }

    /// Routes one touch event through classification, dragging, and release.
    pub fn handle_event(&mut self, event: TouchEvent) -> Response {
        if !self.state.is_enabled() {
            return Response::PassThrough;
        }
        match event {
            TouchEvent::Down(pos) => self.on_down(pos),
            TouchEvent::Move(pos) => self.on_move(pos),
            TouchEvent::Up { velocity, .. } => self.on_release(velocity.x),
            TouchEvent::Cancel => self.on_release(0.0),
        }
    }

    fn on_down(&mut self, pos: Point) -> Response {
        if self.is_close_animating() {
            log::debug!("menu closing; ignoring down at {pos:?}");
            self.tracking = Tracking::Swallowed;
            return Response::Consumed;
        }

        let captured = self.surface_at(pos).filter(|role| self.can_capture(*role));
        if captured.is_some() {
            self.settle.abort();
        }
        self.tracking = Tracking::Active(GestureSession::new(pos, captured));

        if !self.content_clickable && self.is_content_touched(pos) {
            Response::Consumed
        } else {
            Response::PassThrough
        }
    }

    fn on_move(&mut self, pos: Point) -> Response {
        let session = match &mut self.tracking {
            Tracking::Idle => return Response::PassThrough,
            Tracking::Swallowed => return Response::Consumed,
            Tracking::Active(session) => session,
        };
        let menus = &self.menus;
        let classification =
            self.classifier
                .classify(session, &mut self.state, pos, |side| menus.contains(side));

        match classification {
            Classification::Drag(side) => {
                let captured = session.captured();
                let dx = session.advance(pos).map_or(0.0, |delta| delta.x);
                if let Some(captured) = captured {
                    self.drag_by(captured, side, dx);
                }
                Response::Consumed
            }
            Classification::Undetermined | Classification::Rejected => Response::PassThrough,
        }
    }

    fn drag_by(&mut self, captured: SurfaceRole, side: Side, dx: f64) {
        if self.content.is_none() {
            return;
        }
        let Some(width) = self.menus.width(side) else {
            return;
        };
        let captured_left = match captured {
            SurfaceRole::Content => self.content_left,
            SurfaceRole::Menu(menu) => self.menus.get(menu).map_or(0.0, |r| r.x0),
        };
        let placed = place_drag(captured, captured_left, side, self.content_left, dx, width);
        log::trace!(
            "drag {captured:?} by {dx}: content {} -> {}, captured edge at {}",
            self.content_left,
            placed.content_left,
            placed.captured_left
        );
        self.content_left = placed.content_left;
    }

    fn on_release(&mut self, x_velocity: f64) -> Response {
        let session = match mem::replace(&mut self.tracking, Tracking::Idle) {
            Tracking::Idle => return Response::PassThrough,
            Tracking::Swallowed => return Response::Consumed,
            Tracking::Active(session) => session,
        };
        // Taps on an exposed menu reach its children; taps on open content do not.
        let suppress_click = session.is_dragging()
            || (self.state.is_committed_open()
                && session.captured() == Some(SurfaceRole::Content));
        if session.captured().is_some() {
            self.resolve(x_velocity);
        }
        if suppress_click {
            Response::Cancelled
        } else {
            Response::PassThrough
        }
    }

    fn resolve(&mut self, x_velocity: f64) {
        let Some((side, width)) = self.active_menu() else {
            return;
        };
        let x_velocity = self.config.clamp_velocity(x_velocity);
        let resolution = resolve_release(
            side,
            self.content_left,
            width,
            x_velocity,
            self.config.min_fling_velocity,
        );
        log::debug!(
            "released {side:?} menu at {} with vx = {x_velocity}: {resolution:?}",
            self.content_left
        );
        match resolution {
            Resolution::Open => self.open(),
            Resolution::Close => self.close(),
        }
    }
}
