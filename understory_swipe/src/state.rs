// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe state: commanded intent versus where the content actually is.
//!
//! [`SwipeState`] stores only what was last *commanded* (open or closed) and
//! which menu the most recent gesture targeted. The commanded flag flips the
//! moment [`open`](crate::SwipeItem::open) or [`close`](crate::SwipeItem::close)
//! is called, while the content is still sliding. Every visual question
//! (opening, open, closing, closed) is answered by comparing the live content
//! offset against the active menu width, and is never cached.
//!
//! ```
//! use understory_swipe::{Side, SwipePhase, SwipeState};
//!
//! let mut state = SwipeState::default();
//! state.set_active(Some(Side::Right));
//! state.set_committed_open(true);
//!
//! // Commanded open, but the content has only travelled 30 of 80 pixels.
//! assert_eq!(state.phase(-30.0, 80.0), SwipePhase::Opening);
//! assert_eq!(state.phase(-80.0, 80.0), SwipePhase::Open);
//! ```

use crate::side::Side;

/// Visual phase of a swipe container, derived from the content offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    /// Content at rest over the menus.
    Closed,
    /// Commanded open; content still travelling toward the open offset.
    Opening,
    /// Commanded open and the content reached the open offset.
    Open,
    /// Commanded closed; content not yet back at zero.
    Closing,
}

/// Per-container swipe intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeState {
    enabled: bool,
    committed_open: bool,
    active: Option<Side>,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self {
            enabled: true,
            committed_open: false,
            active: None,
        }
    }
}

impl SwipeState {
    /// Whether swipe handling is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables swipe handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The last resolved intent: `true` after an open command.
    #[must_use]
    pub fn is_committed_open(&self) -> bool {
        self.committed_open
    }

    /// Records an open or close command.
    pub fn set_committed_open(&mut self, open: bool) {
        self.committed_open = open;
    }

    /// The menu targeted by the current or most recent gesture.
    #[must_use]
    pub fn active_side(&self) -> Option<Side> {
        self.active
    }

    /// Selects (or clears) the targeted menu.
    pub fn set_active(&mut self, side: Option<Side>) {
        self.active = side;
    }

    /// Drops the active menu and any open intent.
    pub fn reset(&mut self) {
        self.active = None;
        self.committed_open = false;
    }

    /// `true` while commanded open and the content has not reached the open
    /// offset for a menu of `menu_width`.
    #[must_use]
    pub fn is_open_animating(&self, content_left: f64, menu_width: f64) -> bool {
        if !self.committed_open {
            return false;
        }
        match self.active {
            Some(Side::Left) => content_left < menu_width,
            Some(Side::Right) => -content_left < menu_width,
            None => false,
        }
    }

    /// `true` while commanded closed and the content is still displaced
    /// toward the active menu.
    #[must_use]
    pub fn is_close_animating(&self, content_left: f64) -> bool {
        if self.committed_open {
            return false;
        }
        match self.active {
            Some(Side::Left) => content_left > 0.0,
            Some(Side::Right) => content_left < 0.0,
            None => false,
        }
    }

    /// Derives the visual phase from the live content offset.
    #[must_use]
    pub fn phase(&self, content_left: f64, menu_width: f64) -> SwipePhase {
        if self.is_open_animating(content_left, menu_width) {
            SwipePhase::Opening
        } else if self.is_close_animating(content_left) {
            SwipePhase::Closing
        } else if self.committed_open && self.active.is_some() {
            SwipePhase::Open
        } else {
            SwipePhase::Closed
        }
    }
}
