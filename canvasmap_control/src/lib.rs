// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvasmap Control: the top-level interaction engine for a pannable,
//! zoomable image map with interactive markers and drop zones.
//!
//! [`MapController`] ties the component crates together: the tracked
//! transform and viewport from [`canvasmap_view2d`], hit testing and scene
//! descriptors from [`canvasmap_scene`], and the gesture state machine from
//! [`canvasmap_gesture`]. The host feeds it raw input (pointer, wheel,
//! escape, resize, timers, animation frames) with explicit timestamps, and
//! receives back [`MapEvent`] values naming the semantic interactions that
//! input resolved to.
//!
//! The engine is headless: it never draws, schedules, or reads a clock.
//! Hosts repaint when they see [`MapEvent::Redraw`], schedule a timer for
//! [`MapController::drag_deadline`], and drive animation frames while
//! [`MapController::animation_active`] holds.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use canvasmap_control::{MapController, MapEvent, MapOptions, RedrawReason};
//! use canvasmap_scene::{MarkerDescriptor, MarkerInterest, SliceScene};
//!
//! let mut map: MapController<&str> = MapController::new(MapOptions::default());
//! map.resize(Size::new(800.0, 600.0));
//! map.image_loaded(Size::new(1600.0, 1200.0));
//!
//! let markers = [MarkerDescriptor::new("dock", Point::new(800.0, 600.0))
//!     .with_interest(MarkerInterest::CLICK)];
//! let scene = SliceScene {
//!     markers: &markers,
//!     ..SliceScene::default()
//! };
//!
//! // The image covers the canvas at scale 0.5, so model (800, 600) sits at
//! // view (400, 300). A quick press and release there clicks the marker.
//! map.pointer_down(Point::new(400.0, 300.0), 1000.0, &scene);
//! let events = map.pointer_up(1050.0, &scene);
//! assert_eq!(
//!     events,
//!     vec![
//!         MapEvent::MarkerClick("dock"),
//!         MapEvent::Redraw(RedrawReason::PointerUp),
//!     ]
//! );
//! ```

mod controller;
mod event;
mod options;

pub use controller::MapController;
pub use event::{MapEvent, RedrawReason};
pub use options::MapOptions;
