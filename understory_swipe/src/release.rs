// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release resolution: open or close once the finger lifts.
//!
//! A fast enough fling decides on its own. Otherwise the content's position
//! decides: the menu opens only if the content is strictly past half of the
//! menu width.
//!
//! ```
//! use understory_swipe::{Resolution, Side, resolve_release};
//!
//! // A fling toward the left menu opens it even from nearly closed.
//! assert_eq!(resolve_release(Side::Left, 10.0, 100.0, 51.0, 50.0), Resolution::Open);
//! // Without a fling, exactly half-way closes.
//! assert_eq!(resolve_release(Side::Left, 50.0, 100.0, 0.0, 50.0), Resolution::Close);
//! ```

use crate::side::Side;

/// Resting state chosen for a released gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Settle the content at the open offset of the active menu.
    Open,
    /// Settle the content back at zero.
    Close,
}

/// Resolves a release of the content while the menu on `side` is active.
///
/// `x_velocity` is in logical pixels per second, positive to the right.
/// Velocities beyond `min_fling_velocity` in the opening direction open, in the
/// closing direction close; anything slower falls back to the position rule.
#[must_use]
pub fn resolve_release(
    side: Side,
    content_left: f64,
    menu_width: f64,
    x_velocity: f64,
    min_fling_velocity: f64,
) -> Resolution {
    let half = menu_width / 2.0;
    let (fling_open, fling_close, past_half) = match side {
        Side::Left => (
            x_velocity > min_fling_velocity,
            x_velocity < -min_fling_velocity,
            content_left > half,
        ),
        Side::Right => (
            x_velocity < -min_fling_velocity,
            x_velocity > min_fling_velocity,
            content_left < -half,
        ),
    };
    if fling_open {
        Resolution::Open
    } else if fling_close || !past_half {
        Resolution::Close
    } else {
        Resolution::Open
    }
}
