// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing of markers and drop zones against the tracked transform.

use canvasmap_view2d::TrackedTransform;
use kurbo::{Point, Size};

use crate::descriptor::{DropZoneDescriptor, MarkerDescriptor};

/// Finds the nearest eligible marker within its hover radius of a
/// view-space cursor point.
///
/// Each hit-testable marker (see [`crate::MarkerInterest::hit_testable`]) is
/// measured in the space it declares: model space when `scale_with_zoom`,
/// view space otherwise. Squared distances are compared against the squared
/// radius with strict `<`, and the smallest wins; exact ties resolve to the
/// first marker in declaration order.
///
/// Returns `None` when the cursor cannot be mapped (non-finite input) or no
/// marker is in range.
#[must_use]
pub fn nearest_marker<'a, K>(
    cursor_view: Point,
    transform: &TrackedTransform,
    markers: &'a [MarkerDescriptor<K>],
) -> Option<&'a MarkerDescriptor<K>> {
    let cursor_model = transform.to_model(cursor_view)?;
    let mut best: Option<(f64, &MarkerDescriptor<K>)> = None;
    for marker in markers {
        if !marker.interest.hit_testable() {
            continue;
        }
        let dist_sq = if marker.scale_with_zoom {
            (marker.coords - cursor_model).hypot2()
        } else {
            let Some(marker_view) = transform.to_view(marker.coords) else {
                continue;
            };
            (marker_view - cursor_view).hypot2()
        };
        if dist_sq < marker.hover_radius * marker.hover_radius
            && best.is_none_or(|(best_sq, _)| dist_sq < best_sq)
        {
            best = Some((dist_sq, marker));
        }
    }
    best.map(|(_, marker)| marker)
}

/// Finds the drop zone whose anchored rectangle contains a view-space
/// cursor point.
///
/// Each zone's anchor is resolved against the live canvas size, its corners
/// are mapped through the inverse transform, and containment is tested in
/// model space so the result accounts for the current pan/zoom. Zones with
/// invalid anchors are skipped.
///
/// When zones overlap, the **last** containing zone in declaration order
/// wins. This matches a plain linear scan with no early exit and is the
/// provisional priority rule until zones grow a real z-order.
#[must_use]
pub fn drop_zone_at<'a, K>(
    cursor_view: Point,
    transform: &TrackedTransform,
    canvas: Size,
    drop_zones: &'a [DropZoneDescriptor<K>],
) -> Option<&'a DropZoneDescriptor<K>> {
    let cursor_model = transform.to_model(cursor_view)?;
    let mut found = None;
    for zone in drop_zones {
        let Some(rect) = zone.anchor.resolve(canvas) else {
            continue;
        };
        let Some(top_left) = transform.to_model(rect.origin()) else {
            continue;
        };
        let Some(bottom_right) = transform.to_model(Point::new(rect.x1, rect.y1)) else {
            continue;
        };
        if cursor_model.x >= top_left.x
            && cursor_model.x <= bottom_right.x
            && cursor_model.y >= top_left.y
            && cursor_model.y <= bottom_right.y
        {
            found = Some(zone);
        }
    }
    found
}
