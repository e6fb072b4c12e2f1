// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvasmap Gesture: a pointer-event state machine that disambiguates
//! click vs. drag vs. drag-cancel under timing thresholds.
//!
//! A mouse-down over a canvas map is ambiguous: it could become a click, a
//! marker drag, or a view pan, and only time and movement tell them apart.
//! [`pointer::GestureTracker`] resolves the ambiguity with two thresholds:
//!
//! - **Click grace time**: movement within this window after the press does
//!   not disqualify a click, absorbing the jitter of a stationary press.
//! - **Minimum drag time**: a press over a marker only becomes a drag after
//!   this much time has elapsed.
//!
//! ## Design
//!
//! Following the rest of the workspace, the tracker is host-agnostic: it
//! never reads a clock and owns no timers. Every event carries an explicit
//! millisecond timestamp, and the tracker answers with a *disposition* value
//! the host interprets (emit a drag tick, pan the view, resolve a click).
//! Hit testing happens outside: the host passes the candidate marker key it
//! found under the press.
//!
//! The deferred drag deadline works the same way: while a press is armed
//! over a marker, [`pointer::GestureTracker::drag_deadline`] exposes the
//! instant at which a stationary hold becomes a drag. Hosts schedule that
//! however they like and report firings through
//! [`pointer::GestureTracker::on_drag_deadline`], which re-checks state so a
//! stale timer is a no-op.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use canvasmap_gesture::pointer::{GestureTracker, GestureTiming, UpDisposition};
//!
//! let mut tracker: GestureTracker<&str> = GestureTracker::new(GestureTiming::default());
//!
//! // Press over marker "dock" at t=1000, release 50ms later without moving:
//! // a marker click, never a drag.
//! tracker.on_pointer_down(Point::new(10.0, 20.0), Some("dock"), 1000.0);
//! let up = tracker.on_pointer_up(1050.0);
//! assert_eq!(up, UpDisposition::Click { candidate: Some("dock") });
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pointer;
