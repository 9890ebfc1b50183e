// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: headless swipe-to-reveal state for list rows.
//!
//! A swipe row stacks one content surface over up to two menus, one anchored
//! to each side. Dragging the content horizontally uncovers a menu; releasing
//! it settles the content either fully open or back closed.
//!
//! This crate owns the interaction logic only:
//!
//! - [`GestureClassifier`]: decides, per touch sequence, whether movement is a
//!   horizontal swipe (past the touch slop and dominating vertical travel) and
//!   which menu it targets.
//! - [`clamp_content`] / [`place_drag`]: keep the content within the active
//!   menu's range while dragging, whichever surface the finger grabbed.
//! - [`resolve_release`]: open or close on release, fling velocity first,
//!   half-width position second.
//! - [`SwipeState`]: commanded intent, with opening/closing phases derived from
//!   the live content offset rather than stored.
//! - [`Settle`]: the contract for the animation that slides content to rest,
//!   with [`EasedSettle`] as a ready-made implementation.
//! - [`SwipeItem`]: the container tying these together behind a single
//!   [`handle_event`](SwipeItem::handle_event) entry point.
//!
//! It does **not** render, lay out, or hit-test a view tree. Hosts are
//! expected to:
//!
//! - Register each surface's at-rest bounds with [`SwipeItem::attach`].
//! - Forward container-local [`TouchEvent`]s and honor the returned
//!   [`Response`] (including delivering a cancel instead of the release when it
//!   says [`Response::Cancelled`]).
//! - Position the content at [`SwipeItem::content_left`] and call
//!   [`SwipeItem::continue_settling`] once per frame while it returns `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_swipe::{Response, Side, SurfaceRole, SwipeItem, SwipeConfig, TouchEvent};
//!
//! let mut row = SwipeItem::new(SwipeConfig::default());
//! row.attach(SurfaceRole::Menu(Side::Right), Rect::new(220.0, 0.0, 300.0, 50.0));
//! row.attach(SurfaceRole::Content, Rect::new(0.0, 0.0, 300.0, 50.0));
//!
//! row.handle_event(TouchEvent::Down(Point::new(250.0, 25.0)));
//! assert_eq!(row.handle_event(TouchEvent::Move(Point::new(170.0, 25.0))), Response::Consumed);
//! assert_eq!(row.content_left(), -80.0);
//!
//! let released = row.handle_event(TouchEvent::Up {
//!     pos: Point::new(170.0, 25.0),
//!     velocity: Vec2::ZERO,
//! });
//! // The sequence was a swipe, so children get a cancel instead of a click.
//! assert_eq!(released, Response::Cancelled);
//! assert!(row.state().is_committed_open());
//!
//! // Drive frames until the content rests at the open offset.
//! while row.continue_settling() {}
//! assert_eq!(row.content_left(), -80.0);
//! ```
//!
//! ## Logging
//!
//! Transitions are reported through the [`log`] facade: `debug` for open,
//! close, and release decisions, `trace` for classification and per-move
//! clamping. No logger is installed by this crate.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod classify;
mod config;
mod drag;
mod event;
mod item;
mod release;
mod settle;
mod side;
mod state;

pub use clamp::{DragPlacement, clamp_content, place_drag};
pub use classify::{Classification, GestureClassifier};
pub use config::SwipeConfig;
pub use drag::GestureSession;
pub use event::{Response, TouchEvent};
pub use item::SwipeItem;
pub use release::{Resolution, resolve_release};
pub use settle::{EasedSettle, Settle, SettleFrame};
pub use side::{Side, SurfaceRole};
pub use state::{SwipePhase, SwipeState};
