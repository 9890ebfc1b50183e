// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface roles and the per-side menu registry.

use kurbo::{Point, Rect};

/// Horizontal edge a menu is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Anchored to the left edge; revealed by dragging content to the right.
    Left,
    /// Anchored to the right edge; revealed by dragging content to the left.
    Right,
}

impl Side {
    /// Returns the side whose menu a horizontal movement of `dx` would reveal.
    ///
    /// Positive movement uncovers the left edge, negative movement the right
    /// edge. Zero (or NaN) movement reveals nothing.
    #[must_use]
    pub fn revealed_by(dx: f64) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Left)
        } else if dx < 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Returns the content offset at which a menu of `menu_width` on this side
    /// is fully revealed.
    #[must_use]
    pub fn open_offset(self, menu_width: f64) -> f64 {
        match self {
            Self::Left => menu_width,
            Self::Right => -menu_width,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// The role a surface plays inside a swipe container.
///
/// Surfaces are registered with an explicit role instead of being inferred
/// from child order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    /// The top-most surface that slides to reveal menus.
    Content,
    /// A menu anchored to the given side, underneath the content.
    Menu(Side),
}

/// At most one menu per side, keyed by [`Side`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Menus {
    slots: [Option<Rect>; 2],
}

impl Menus {
    /// Stores `bounds` for `side`, returning whatever was registered before.
    pub(crate) fn insert(&mut self, side: Side, bounds: Rect) -> Option<Rect> {
        self.slots[side.slot()].replace(bounds)
    }

    pub(crate) fn remove(&mut self, side: Side) -> Option<Rect> {
        self.slots[side.slot()].take()
    }

    pub(crate) fn get(&self, side: Side) -> Option<Rect> {
        self.slots[side.slot()]
    }

    pub(crate) fn contains(&self, side: Side) -> bool {
        self.slots[side.slot()].is_some()
    }

    /// Width of the menu on `side`; negative extents count as zero.
    pub(crate) fn width(&self, side: Side) -> Option<f64> {
        self.get(side).map(|r| r.width().max(0.0))
    }

    /// Menu under `pos`, right menu first.
    pub(crate) fn hit(&self, pos: Point) -> Option<Side> {
        [Side::Right, Side::Left]
            .into_iter()
            .find(|side| self.get(*side).is_some_and(|r| r.contains(pos)))
    }
}
