// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification: horizontal swipe, or leave it to the host.
//!
//! A move sample qualifies as a swipe once horizontal travel from the down
//! position exceeds the touch slop and dominates vertical travel. The
//! direction picks the menu to reveal. While a menu is open every move is a
//! drag, so it can be pushed closed without passing the slop test again.
//!
//! Classification is re-evaluated on every move until a drag is confirmed;
//! after that the session keeps the side it confirmed with.

use kurbo::Point;

use crate::config::SwipeConfig;
use crate::drag::GestureSession;
use crate::side::Side;
use crate::state::SwipeState;

/// Outcome of classifying one move sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Not (yet) a swipe; the host keeps its default handling.
    Undetermined,
    /// A horizontal drag toward the menu on the given side.
    Drag(Side),
    /// Swiping is disabled for this container.
    Rejected,
}

/// Decides whether a touch sequence is a horizontal swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureClassifier {
    touch_slop: f64,
}

impl GestureClassifier {
    /// Creates a classifier with the platform touch slop.
    ///
    /// A non-finite slop falls back to
    /// [`SwipeConfig::DEFAULT_TOUCH_SLOP`]; a negative one counts as zero.
    #[must_use]
    pub fn new(touch_slop: f64) -> Self {
        let touch_slop = if touch_slop.is_finite() {
            touch_slop.max(0.0)
        } else {
            SwipeConfig::DEFAULT_TOUCH_SLOP
        };
        Self { touch_slop }
    }

    /// The configured touch slop.
    #[must_use]
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Classifies the move sample at `pos`.
    ///
    /// On a fresh confirmation the targeted side becomes active on `state` and
    /// the session is confirmed. When the direction points at a side with no
    /// menu, the active side is cleared and the result stays
    /// [`Classification::Undetermined`].
    pub fn classify(
        &self,
        session: &mut GestureSession,
        state: &mut SwipeState,
        pos: Point,
        has_menu: impl Fn(Side) -> bool,
    ) -> Classification {
        if !state.is_enabled() {
            return Classification::Rejected;
        }

        if session.is_dragging() || state.is_committed_open() {
            let Some(side) = state.active_side() else {
                return Classification::Undetermined;
            };
            session.confirm();
            return Classification::Drag(side);
        }

        let offset = session.total_offset(pos);
        let dx = offset.x.abs();
        if dx <= self.touch_slop || dx <= offset.y.abs() {
            return Classification::Undetermined;
        }
        let Some(side) = Side::revealed_by(offset.x) else {
            return Classification::Undetermined;
        };

        if has_menu(side) {
            log::trace!("swipe confirmed toward {side:?} menu (dx = {})", offset.x);
            state.set_active(Some(side));
            session.confirm();
            Classification::Drag(side)
        } else {
            log::trace!("no {side:?} menu; swipe not recognized");
            state.set_active(None);
            Classification::Undetermined
        }
    }
}
