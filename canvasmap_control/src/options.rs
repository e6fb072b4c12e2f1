// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constructor-time configuration, flattened across the component crates.

use canvasmap_gesture::pointer::GestureTiming;
use canvasmap_view2d::ViewLimits;

/// Configuration for a [`crate::MapController`].
///
/// All knobs are constructor-time; a host that wants different limits
/// builds a new controller. The defaults match the component defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapOptions {
    /// Smallest configured zoom scale.
    pub min_zoom: f64,
    /// Largest configured zoom scale.
    pub max_zoom: f64,
    /// Maximum pixel distance the image may be panned past a canvas edge.
    pub overpan: f64,
    /// Widen the zoom bounds so the containment scale is always reachable.
    pub allow_containment_zoom: bool,
    /// Reset to the containing placement when the first image loads.
    pub contain_initial_image: bool,
    /// Reset to the containing placement when the image changes later.
    pub contain_updated_image: bool,
    /// Elapsed press time (ms) after which a press over a marker becomes a
    /// drag.
    pub min_drag_time_ms: f64,
    /// Window (ms) after the press during which movement does not disqualify
    /// a click.
    pub click_grace_time_ms: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        let limits = ViewLimits::default();
        let timing = GestureTiming::default();
        Self {
            min_zoom: limits.min_zoom,
            max_zoom: limits.max_zoom,
            overpan: limits.overpan,
            allow_containment_zoom: limits.allow_containment_zoom,
            contain_initial_image: limits.contain_initial_image,
            contain_updated_image: limits.contain_updated_image,
            min_drag_time_ms: timing.min_drag_time_ms,
            click_grace_time_ms: timing.click_grace_time_ms,
        }
    }
}

impl MapOptions {
    /// The view-side slice of the options.
    #[must_use]
    pub fn view_limits(&self) -> ViewLimits {
        ViewLimits {
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            overpan: self.overpan,
            allow_containment_zoom: self.allow_containment_zoom,
            contain_initial_image: self.contain_initial_image,
            contain_updated_image: self.contain_updated_image,
        }
    }

    /// The gesture-side slice of the options.
    #[must_use]
    pub fn gesture_timing(&self) -> GestureTiming {
        GestureTiming {
            min_drag_time_ms: self.min_drag_time_ms,
            click_grace_time_ms: self.click_grace_time_ms,
        }
    }
}
