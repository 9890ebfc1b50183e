// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per touch sequence drag tracking.
//!
//! ## Usage
//!
//! 1) Create a [`GestureSession`] on pointer-down with the down position and
//!    the surface captured under it, if any.
//! 2) Classify each move with [`GestureClassifier`](crate::GestureClassifier);
//!    the classifier confirms the drag on the session.
//! 3) Once dragging, call [`GestureSession::advance`] on each move to get the
//!    horizontal movement to apply since the last applied sample.
//! 4) Drop the session on pointer-up or cancel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_swipe::{GestureSession, SurfaceRole};
//!
//! let mut session = GestureSession::new(Point::new(250.0, 50.0), Some(SurfaceRole::Content));
//!
//! // Nothing is applied until the drag is confirmed.
//! assert_eq!(session.advance(Point::new(240.0, 50.0)), None);
//!
//! session.confirm();
//! // The first applied step covers everything since the down position.
//! assert_eq!(session.advance(Point::new(170.0, 50.0)), Some(Vec2::new(-80.0, 0.0)));
//! assert_eq!(session.advance(Point::new(150.0, 50.0)), Some(Vec2::new(-20.0, 0.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::side::SurfaceRole;

/// Ephemeral state for one down → move* → up/cancel sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    start: Point,
    last_applied: Point,
    dragging: bool,
    captured: Option<SurfaceRole>,
}

impl GestureSession {
    /// Starts a session at the pointer-down position.
    #[must_use]
    pub fn new(start: Point, captured: Option<SurfaceRole>) -> Self {
        Self {
            start,
            last_applied: start,
            dragging: false,
            captured,
        }
    }

    /// The pointer-down position.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The surface that was under the finger at pointer-down and accepted capture.
    #[must_use]
    pub fn captured(&self) -> Option<SurfaceRole> {
        self.captured
    }

    /// Whether this sequence has been confirmed as a horizontal drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Marks the sequence as a confirmed drag. Confirmation is never revoked
    /// within a session.
    pub fn confirm(&mut self) {
        self.dragging = true;
    }

    /// Offset of `pos` from the pointer-down position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Vec2 {
        pos - self.start
    }

    /// Returns the movement since the last applied sample and records `pos`
    /// as applied. Returns `None` until the drag is confirmed.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        if !self.dragging {
            return None;
        }
        let delta = pos - self.last_applied;
        self.last_applied = pos;
        Some(delta)
    }
}
