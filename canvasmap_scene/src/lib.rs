// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvasmap Scene: marker and drop-zone descriptors with transform-aware
//! hit testing.
//!
//! The scene side of a canvas map is a flat list of overlay items supplied by
//! the host each frame or gesture:
//!
//! - [`MarkerDescriptor`]: an interactive point anchored in **model** (image)
//!   coordinates, hit-testable within a hover radius.
//! - [`DropZoneDescriptor`]: a rectangle anchored to the **canvas edges**
//!   that stays fixed in the viewport while being comparable to marker model
//!   coordinates through the inverse transform.
//! - [`TooltipDescriptor`]: pure decoration, never hit-testable.
//!
//! This crate never creates or destroys items; identity is the caller's
//! `key` and lifecycle belongs entirely to the host. Which interactions an
//! item participates in is declared up front through [`MarkerInterest`]
//! flags, so decoration-only markers are skipped by hit testing.
//!
//! ## Hit testing
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use canvasmap_view2d::TrackedTransform;
//! use canvasmap_scene::{MarkerDescriptor, MarkerInterest, nearest_marker};
//!
//! let transform = TrackedTransform::identity();
//! let markers = [
//!     MarkerDescriptor::new("dock", Point::new(100.0, 100.0))
//!         .with_interest(MarkerInterest::CLICK),
//! ];
//!
//! let hit = nearest_marker(Point::new(110.0, 95.0), &transform, &markers);
//! assert_eq!(hit.map(|m| m.key), Some("dock"));
//! ```
//!
//! The deterministic tie-break rule is declaration order: when several
//! markers sit at exactly the same squared distance within their radii, the
//! first one in the slice wins.

mod descriptor;
mod hit;

pub use descriptor::{
    DropZoneDescriptor, MarkerDescriptor, MarkerInterest, Scene, SceneItem, ScreenAnchor,
    SliceScene, TooltipDescriptor,
};
pub use hit::{drop_zone_at, nearest_marker};
