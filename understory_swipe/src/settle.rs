// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settling: sliding the content to its resolved resting offset.
//!
//! The container only commands settles and polls them once per frame. Hosts
//! may plug in their own animation primitive through [`Settle`], or use
//! [`EasedSettle`], a frame-stepped quintic ease-out.
//!
//! ```
//! use understory_swipe::{EasedSettle, Settle};
//!
//! let mut settle = EasedSettle::default();
//! settle.start_settle(0.0, -80.0);
//!
//! let mut offset = 0.0;
//! while let Some(frame) = settle.continue_settling() {
//!     offset = frame.offset;
//!     if frame.finished {
//!         break;
//!     }
//! }
//! assert_eq!(offset, -80.0);
//! assert!(!settle.is_settling());
//! ```

/// One frame of settle progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleFrame {
    /// Content offset for this frame.
    pub offset: f64,
    /// `true` once `offset` is the settle target.
    pub finished: bool,
}

/// A settle primitive that animates a single horizontal offset.
pub trait Settle {
    /// Starts sliding from `from` toward `target`.
    ///
    /// Calling this while a settle is in flight redirects it from `from`.
    fn start_settle(&mut self, from: f64, target: f64);

    /// Advances by one frame.
    ///
    /// Returns `None` when nothing is settling.
    fn continue_settling(&mut self) -> Option<SettleFrame>;

    /// Stops any in-flight settle where it is.
    fn abort(&mut self);

    /// Whether a settle is in flight.
    fn is_settling(&self) -> bool;
}

/// Frame-stepped settle with a quintic ease-out.
///
/// Duration grows with distance relative to the drag range, from
/// [`BASE_DURATION_MS`](Self::BASE_DURATION_MS) up to
/// [`MAX_DURATION_MS`](Self::MAX_DURATION_MS).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasedSettle {
    frame_ms: f64,
    drag_range: f64,
    from: f64,
    target: f64,
    elapsed_ms: f64,
    duration_ms: f64,
    active: bool,
}

impl Default for EasedSettle {
    fn default() -> Self {
        Self::new()
    }
}

impl EasedSettle {
    /// Shortest non-zero settle.
    pub const BASE_DURATION_MS: f64 = 256.0;
    /// Longest settle.
    pub const MAX_DURATION_MS: f64 = 600.0;
    /// Frame interval used by [`Settle::continue_settling`].
    pub const DEFAULT_FRAME_MS: f64 = 16.0;

    /// Creates an idle settle at 16 ms per frame with no drag range.
    ///
    /// Without a drag range every non-zero settle takes the maximum duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_ms: Self::DEFAULT_FRAME_MS,
            drag_range: 0.0,
            from: 0.0,
            target: 0.0,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            active: false,
        }
    }

    /// Sets the time step taken by each [`Settle::continue_settling`] call.
    ///
    /// Non-positive or non-finite intervals fall back to
    /// [`DEFAULT_FRAME_MS`](Self::DEFAULT_FRAME_MS) so settles always finish.
    #[must_use]
    pub fn with_frame_interval(mut self, frame_ms: f64) -> Self {
        self.frame_ms = if frame_ms.is_finite() && frame_ms > 0.0 {
            frame_ms
        } else {
            Self::DEFAULT_FRAME_MS
        };
        self
    }

    /// Sets the distance over which durations scale, usually the widest menu.
    #[must_use]
    pub fn with_drag_range(mut self, drag_range: f64) -> Self {
        self.drag_range = drag_range;
        self
    }

    /// The current settle target.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Duration in milliseconds for a settle over `distance`.
    #[must_use]
    pub fn duration_for(&self, distance: f64) -> f64 {
        let distance = distance.abs();
        if distance == 0.0 {
            return 0.0;
        }
        if self.drag_range <= 0.0 {
            return Self::MAX_DURATION_MS;
        }
        ((distance / self.drag_range + 1.0) * Self::BASE_DURATION_MS).min(Self::MAX_DURATION_MS)
    }

    /// Advances by `dt_ms` milliseconds.
    ///
    /// Hosts with a real frame clock call this instead of
    /// [`Settle::continue_settling`].
    pub fn advance(&mut self, dt_ms: f64) -> Option<SettleFrame> {
        if !self.active {
            return None;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.active = false;
            return Some(SettleFrame {
                offset: self.target,
                finished: true,
            });
        }
        let t = ease_out_quint(self.elapsed_ms / self.duration_ms);
        Some(SettleFrame {
            offset: self.from + (self.target - self.from) * t,
            finished: false,
        })
    }
}

impl Settle for EasedSettle {
    fn start_settle(&mut self, from: f64, target: f64) {
        self.from = from;
        self.target = target;
        self.elapsed_ms = 0.0;
        self.duration_ms = self.duration_for(target - from);
        self.active = true;
    }

    fn continue_settling(&mut self) -> Option<SettleFrame> {
        self.advance(self.frame_ms)
    }

    fn abort(&mut self) {
        self.active = false;
    }

    fn is_settling(&self) -> bool {
        self.active
    }
}

fn ease_out_quint(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}
