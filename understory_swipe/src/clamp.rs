// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag clamping: where the content may sit while a menu is active.
//!
//! Only one menu is active at a time, so the content offset is bounded by
//! `[0, width]` for a left menu and `[-width, 0]` for a right menu, never by
//! both.
//!
//! ```
//! use understory_swipe::{Side, clamp_content};
//!
//! // Dragging 30px past a fully open 80px right menu stays at the bound.
//! assert_eq!(clamp_content(Side::Right, -80.0, -30.0, 80.0), -80.0);
//! assert_eq!(clamp_content(Side::Left, 10.0, 25.0, 80.0), 35.0);
//! ```

use crate::side::{Side, SurfaceRole};

/// Returns the content offset after moving it by `dx` from `content_left`,
/// bounded by the active menu on `side`.
///
/// Negative widths are treated as zero.
#[must_use]
pub fn clamp_content(side: Side, content_left: f64, dx: f64, menu_width: f64) -> f64 {
    let width = menu_width.max(0.0);
    let left = content_left + dx;
    match side {
        Side::Right => left.clamp(-width, 0.0),
        Side::Left => left.clamp(0.0, width),
    }
}

/// Result of applying one drag step to the captured surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragPlacement {
    /// New left offset of the content surface.
    pub content_left: f64,
    /// New left edge of the captured surface itself.
    ///
    /// Equal to `content_left` when the content is captured. A captured menu
    /// stays pinned where it was; the drag moves the content instead.
    pub captured_left: f64,
}

/// Applies a drag step of `dx` to whichever surface is under the finger.
///
/// Menus may be as wide as the container and can then be the only thing the
/// finger lands on. Dragging a menu therefore moves the content by the same
/// clamped rule, and the menu reports its current edge unchanged.
#[must_use]
pub fn place_drag(
    captured: SurfaceRole,
    captured_left: f64,
    side: Side,
    content_left: f64,
    dx: f64,
    menu_width: f64,
) -> DragPlacement {
    let content_left = clamp_content(side, content_left, dx, menu_width);
    let captured_left = match captured {
        SurfaceRole::Content => content_left,
        SurfaceRole::Menu(_) => captured_left,
    };
    DragPlacement {
        content_left,
        captured_left,
    }
}
