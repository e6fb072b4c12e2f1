// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvasmap View 2D: tracked pan/zoom transform and view state for a
//! pannable, zoomable image canvas.
//!
//! This crate provides the headless view model for an image map: a mutable
//! affine transform mapping image (model) coordinates into canvas (view)
//! coordinates, together with the rules that constrain it. It focuses on:
//! - Incremental transform tracking with an always-available inverse.
//! - Containment: the scale at which an image exactly covers the canvas, and
//!   the zoom bounds derived from it.
//! - Wheel-driven zoom about a cursor anchor, pre-clamped to the zoom bounds.
//! - Pointer-driven panning clamped to configurable overpan limits.
//! - A time-based animated pan toward a target model point, cancellable by
//!   user input.
//!
//! It does **not** paint anything and owns no scene. Callers are expected to:
//! - Feed canvas and image dimensions in as they become known.
//! - Convert raw input into pan/zoom operations at a higher layer.
//! - Redraw through their own renderer using [`MapViewport::transform`].
//!
//! ## Coordinate spaces
//!
//! Two spaces appear throughout and are never mixed implicitly:
//! - **View space**: pixels relative to the canvas top-left corner.
//! - **Model space**: the image's intrinsic coordinate system, independent of
//!   the current pan/zoom.
//!
//! Every function documents which space its points live in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use canvasmap_view2d::{MapViewport, ViewLimits};
//!
//! let mut view = MapViewport::new(ViewLimits::default());
//! view.set_canvas_size(Size::new(800.0, 600.0));
//! view.set_image_size(Size::new(1600.0, 1200.0));
//!
//! // The image now exactly covers the canvas (containment scale 0.5).
//! let center = view.to_model(Point::new(400.0, 300.0)).unwrap();
//! assert!((center.x - 800.0).abs() < 1e-9);
//! assert!((center.y - 600.0).abs() < 1e-9);
//! ```

mod containment;
mod transform;
mod viewport;

pub use containment::{ContainingPlacement, ZoomBounds, containment_scale, containing_placement};
pub use transform::TrackedTransform;
pub use viewport::{AnimationTick, MapViewport, ViewLimits};
