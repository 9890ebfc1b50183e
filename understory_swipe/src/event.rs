// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A pointer sample in container-local coordinates.
///
/// The host delivers one `Down`, any number of `Move`s, then `Up` or `Cancel`.
/// A `Down` always starts a fresh sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchEvent {
    /// Pointer pressed.
    Down(Point),
    /// Pointer moved while pressed.
    Move(Point),
    /// Pointer released, with the release velocity in logical pixels per second.
    Up {
        /// Release position.
        pos: Point,
        /// Release velocity as measured by the host.
        velocity: Vec2,
    },
    /// The sequence was cancelled by the host.
    Cancel,
}

/// How the host should treat the event it just handed to the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// Not handled; continue default dispatch to children.
    PassThrough,
    /// The container is handling this gesture.
    Consumed,
    /// The sequence ended as a swipe (or on an open menu): deliver a cancel to
    /// children instead of the release so no click fires.
    Cancelled,
}

impl Response {
    /// Whether the container took the event.
    #[must_use]
    pub fn is_consumed(self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}
