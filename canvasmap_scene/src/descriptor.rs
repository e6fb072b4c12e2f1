// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene item descriptors: markers, drop zones, tooltips, and the [`Scene`]
//! trait hosts implement to supply them.

use kurbo::{Point, Rect, Size};

/// Default marker hover radius in its declared space (half the default
/// marker size of 100).
pub(crate) const DEFAULT_HOVER_RADIUS: f64 = 50.0;

bitflags::bitflags! {
    /// Which interactions a marker participates in.
    ///
    /// These flags stand in for the presence of host-side callbacks: a
    /// marker advertising `DRAG_TICK` expects to receive drag ticks, and so
    /// on. A marker with none of `CLICK`, `DOUBLE_CLICK`, `DRAG_TICK`, or
    /// `DRAG_END` is pure decoration and is never hit-testable;
    /// `DRAG_CANCEL` alone does not make a marker interactive.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MarkerInterest: u8 {
        /// The marker handles single clicks.
        const CLICK        = 0b0000_0001;
        /// The marker handles double clicks.
        const DOUBLE_CLICK = 0b0000_0010;
        /// The marker receives drag ticks while dragged.
        const DRAG_TICK    = 0b0000_0100;
        /// The marker receives the final drag position on release.
        const DRAG_END     = 0b0000_1000;
        /// The marker is told when its drag is cancelled (escape or drop).
        const DRAG_CANCEL  = 0b0001_0000;
    }
}

impl MarkerInterest {
    /// All drag-related interest bits.
    pub const DRAG: Self = Self::DRAG_TICK.union(Self::DRAG_END).union(Self::DRAG_CANCEL);

    /// Whether the marker participates in hit testing at all.
    #[must_use]
    pub fn hit_testable(self) -> bool {
        self.intersects(Self::CLICK | Self::DOUBLE_CLICK | Self::DRAG_TICK | Self::DRAG_END)
    }
}

/// An interactive point overlay anchored in model (image) coordinates.
///
/// Identity is `key`; the engine only ever reads descriptors, it never
/// creates or destroys them.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerDescriptor<K> {
    /// Host-assigned unique identity.
    pub key: K,
    /// Position in model space.
    pub coords: Point,
    /// Hit radius: model units when `scale_with_zoom`, view pixels
    /// otherwise.
    pub hover_radius: f64,
    /// Whether the marker's hit area scales with the current zoom.
    pub scale_with_zoom: bool,
    /// Interactions the marker participates in.
    pub interest: MarkerInterest,
}

impl<K> MarkerDescriptor<K> {
    /// Creates a marker at `coords` with the default radius, zoom-scaling
    /// hit area, and no interactions (pure decoration).
    pub fn new(key: K, coords: Point) -> Self {
        Self {
            key,
            coords,
            hover_radius: DEFAULT_HOVER_RADIUS,
            scale_with_zoom: true,
            interest: MarkerInterest::empty(),
        }
    }

    /// Sets the interest flags.
    #[must_use]
    pub fn with_interest(mut self, interest: MarkerInterest) -> Self {
        self.interest = interest;
        self
    }

    /// Sets the hover radius.
    #[must_use]
    pub fn with_hover_radius(mut self, radius: f64) -> Self {
        self.hover_radius = radius;
        self
    }

    /// Keeps the hit area a fixed screen size instead of scaling with zoom.
    #[must_use]
    pub fn fixed_screen_size(mut self) -> Self {
        self.scale_with_zoom = false;
        self
    }
}

/// A rectangle anchored to the canvas edges.
///
/// One vertical anchor (`top` or `bottom`) and one horizontal anchor
/// (`left` or `right`) are required; an anchor missing a required axis is
/// invalid and resolves to `None`, excluding the zone from hit testing.
/// When both anchors of an axis are set, `top`/`left` win.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenAnchor {
    /// Distance from the canvas top edge.
    pub top: Option<f64>,
    /// Distance from the canvas bottom edge.
    pub bottom: Option<f64>,
    /// Distance from the canvas left edge.
    pub left: Option<f64>,
    /// Distance from the canvas right edge.
    pub right: Option<f64>,
    /// Rectangle width in view pixels.
    pub width: f64,
    /// Rectangle height in view pixels.
    pub height: f64,
}

impl ScreenAnchor {
    /// Anchors a `width` × `height` rectangle at the given top-left offsets.
    #[must_use]
    pub fn top_left(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            width,
            height,
            ..Self::default()
        }
    }

    /// Anchors a `width` × `height` rectangle at the given bottom-right
    /// offsets.
    #[must_use]
    pub fn bottom_right(bottom: f64, right: f64, width: f64, height: f64) -> Self {
        Self {
            bottom: Some(bottom),
            right: Some(right),
            width,
            height,
            ..Self::default()
        }
    }

    /// Resolves the anchor into a view-space rectangle against the live
    /// canvas size.
    ///
    /// Returns `None` when a required axis is unanchored or any dimension is
    /// non-finite.
    #[must_use]
    pub fn resolve(&self, canvas: Size) -> Option<Rect> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return None;
        }
        let y0 = match (self.top, self.bottom) {
            (Some(top), _) => top,
            (None, Some(bottom)) => canvas.height - bottom - self.height,
            (None, None) => return None,
        };
        let x0 = match (self.left, self.right) {
            (Some(left), _) => left,
            (None, Some(right)) => canvas.width - right - self.width,
            (None, None) => return None,
        };
        if !(x0.is_finite() && y0.is_finite()) {
            return None;
        }
        Some(Rect::new(x0, y0, x0 + self.width, y0 + self.height))
    }
}

/// A viewport-anchored rectangle that accepts dragged markers.
#[derive(Clone, Debug, PartialEq)]
pub struct DropZoneDescriptor<K> {
    /// Host-assigned unique identity.
    pub key: K,
    /// Placement relative to the canvas edges.
    pub anchor: ScreenAnchor,
    /// Whether the host wants a drop event for this zone.
    ///
    /// A zone still swallows a drag released inside it (the marker's drag is
    /// cancelled) even when it does not want the drop itself.
    pub accepts_drop: bool,
}

impl<K> DropZoneDescriptor<K> {
    /// Creates a drop-accepting zone with the given anchor.
    pub fn new(key: K, anchor: ScreenAnchor) -> Self {
        Self {
            key,
            anchor,
            accepts_drop: true,
        }
    }
}

/// A decoration-only label anchored in model coordinates.
///
/// Tooltips are never hit-testable; the controller only converts their
/// coordinates for host-side placement.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipDescriptor<K> {
    /// Host-assigned unique identity.
    pub key: K,
    /// Position in model space.
    pub coords: Point,
}

/// A scene item, tagged by kind.
///
/// Hosts that keep a single flat overlay list can store these and hand the
/// engine per-kind slices, or implement [`Scene`] directly.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneItem<K> {
    /// An interactive marker.
    Marker(MarkerDescriptor<K>),
    /// A viewport-anchored drop zone.
    DropZone(DropZoneDescriptor<K>),
    /// A decoration-only tooltip.
    Tooltip(TooltipDescriptor<K>),
}

/// The scene collaborator: supplies the current overlay items.
///
/// The engine reads a fresh list for every gesture step and never caches
/// across calls, so hosts are free to rebuild their scene at any time.
pub trait Scene {
    /// Marker/zone identity type.
    type Key: Clone + PartialEq;

    /// Current markers, in declaration order.
    fn markers(&self) -> &[MarkerDescriptor<Self::Key>];

    /// Current drop zones, in declaration order.
    fn drop_zones(&self) -> &[DropZoneDescriptor<Self::Key>];

    /// Current tooltips, in declaration order.
    fn tooltips(&self) -> &[TooltipDescriptor<Self::Key>] {
        &[]
    }
}

/// A [`Scene`] borrowing plain slices; convenient for hosts and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct SliceScene<'a, K> {
    /// Markers, in declaration order.
    pub markers: &'a [MarkerDescriptor<K>],
    /// Drop zones, in declaration order.
    pub drop_zones: &'a [DropZoneDescriptor<K>],
    /// Tooltips, in declaration order.
    pub tooltips: &'a [TooltipDescriptor<K>],
}

impl<K: Clone + PartialEq> Scene for SliceScene<'_, K> {
    type Key = K;

    fn markers(&self) -> &[MarkerDescriptor<K>] {
        self.markers
    }

    fn drop_zones(&self) -> &[DropZoneDescriptor<K>] {
        self.drop_zones
    }

    fn tooltips(&self) -> &[TooltipDescriptor<K>] {
        self.tooltips
    }
}
