// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic events produced by the controller for the host to act on.

use kurbo::Point;

/// Why the view needs repainting; a diagnostics tag on redraw requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedrawReason {
    /// The view was panned.
    Pan,
    /// The zoom level changed.
    Zoom,
    /// A dragged marker moved.
    DragTick,
    /// A gesture resolved on pointer release.
    PointerUp,
    /// A drag was abandoned.
    DragCancel,
    /// A new image (and possibly a containing reset) arrived.
    ImageLoad,
    /// The canvas was resized and the view normalized.
    ViewReset,
    /// An animation frame moved the view.
    Animation,
}

/// A high-level intent recovered from raw input.
///
/// All points are in **model** (image) coordinates. Marker and zone keys
/// are the host-assigned identities from the scene descriptors; the host
/// routes each event to the matching callback on its side.
#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent<K> {
    /// The map background was clicked.
    Click(Point),
    /// The map background was double-clicked.
    DoubleClick(Point),
    /// A marker was clicked.
    MarkerClick(K),
    /// A marker was double-clicked.
    MarkerDoubleClick(K),
    /// A dragged marker moved to a new model position.
    DragTick {
        /// The dragged marker.
        key: K,
        /// Current cursor position in model space.
        point: Point,
    },
    /// A drag ended outside any drop zone.
    DragEnd {
        /// The dragged marker.
        key: K,
        /// Release position in model space.
        point: Point,
    },
    /// A drag was abandoned (escape) or superseded by a drop.
    DragCancel(K),
    /// A dragged marker was released inside a drop zone.
    ///
    /// Always preceded by [`MapEvent::DragCancel`] for the same marker.
    Drop {
        /// The dragged marker.
        marker: K,
        /// The receiving zone.
        zone: K,
    },
    /// The visual state changed; repaint using the current transform.
    Redraw(RedrawReason),
}
