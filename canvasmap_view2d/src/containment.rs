// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Computes the scale at which `image` exactly covers `canvas` on its
/// constraining axis (the classic "cover" calculation).
///
/// The image is "tall" relative to the canvas when scaling its width to the
/// canvas width would overflow the canvas height; in that case the height is
/// the constraining axis. Returns `None` for degenerate or non-finite sizes.
#[must_use]
pub fn containment_scale(canvas: Size, image: Size) -> Option<f64> {
    if !size_usable(canvas) || !size_usable(image) {
        return None;
    }
    let width_scaled_height = image.height / image.width * canvas.width;
    let scale = if width_scaled_height > canvas.height {
        canvas.height / image.height
    } else {
        canvas.width / image.width
    };
    Some(scale)
}

/// Effective zoom bounds, derived from configured limits and the current
/// containment scale.
///
/// With `allow_containment_zoom`, the containment scale is always reachable
/// even when it lies outside the configured `[min, max]` range, so an image
/// can always be zoomed to exactly cover the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBounds {
    /// Smallest permitted scale.
    pub min: f64,
    /// Largest permitted scale.
    pub max: f64,
}

impl ZoomBounds {
    /// Derives bounds from configured zoom limits and an optional containment
    /// scale.
    ///
    /// The configured range is normalized so that `min <= max` before the
    /// containment allowance is applied.
    #[must_use]
    pub fn derive(
        min_zoom: f64,
        max_zoom: f64,
        containment: Option<f64>,
        allow_containment_zoom: bool,
    ) -> Self {
        let (mut min, mut max) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        if allow_containment_zoom
            && let Some(scale) = containment
        {
            min = min.min(scale);
            max = max.max(scale);
        }
        Self { min, max }
    }

    /// Whether `scale` lies within the bounds.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

/// The transform placement that exactly contains an image in a canvas:
/// containment scale plus a centering translation on the non-constraining
/// axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainingPlacement {
    /// Uniform scale applied to the image.
    pub scale: f64,
    /// View-space horizontal offset of the image origin.
    pub tx: f64,
    /// View-space vertical offset of the image origin.
    pub ty: f64,
}

/// Computes the centered containing placement for `image` in `canvas`.
///
/// The image fills the canvas along its constraining axis and is centered
/// (letterboxed) along the other. Returns `None` for degenerate sizes.
#[must_use]
pub fn containing_placement(canvas: Size, image: Size) -> Option<ContainingPlacement> {
    let scale = containment_scale(canvas, image)?;
    let width_scaled_height = image.height / image.width * canvas.width;
    let placement = if width_scaled_height > canvas.height {
        // Height constrains: center horizontally.
        ContainingPlacement {
            scale,
            tx: (canvas.width - image.width * scale) / 2.0,
            ty: 0.0,
        }
    } else {
        // Width constrains: center vertically.
        ContainingPlacement {
            scale,
            tx: 0.0,
            ty: (canvas.height - image.height * scale) / 2.0,
        }
    };
    Some(placement)
}

fn size_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
