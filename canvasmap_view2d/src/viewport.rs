// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::containment::{ZoomBounds, containing_placement, containment_scale};
use crate::transform::TrackedTransform;

/// Per-wheel-click zoom factor.
const SCALE_FACTOR: f64 = 1.1;

/// Fraction of the remaining pan distance covered per elapsed millisecond
/// during an animated pan (exponential-decay easing).
const PAN_RATE_PER_MS: f64 = 0.005;

/// Model-space distance below which an animated pan snaps to its target.
const PAN_SNAP_DISTANCE: f64 = 1.0;

/// View constraints, all constructor-time with defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLimits {
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
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.2,
            max_zoom: 5.0,
            overpan: 30.0,
            allow_containment_zoom: true,
            contain_initial_image: true,
            contain_updated_image: true,
        }
    }
}

/// Outcome of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationTick {
    /// No animation is in flight; nothing happened.
    Idle,
    /// A pending cancellation was consumed; the animation is gone and the
    /// transform was not touched.
    Canceled,
    /// The view moved toward the target; schedule another frame.
    Continue,
    /// The view snapped onto the target; the animation is complete.
    Finished,
}

#[derive(Clone, Debug, PartialEq)]
enum Animation {
    Inactive,
    Animating {
        /// Model-space point to bring under the canvas center.
        target: Point,
        /// Timestamp of the previous frame, once one has run.
        last_timestamp: Option<f64>,
        /// Set by user input; checked at the top of each frame.
        cancel: bool,
    },
}

/// Headless pan/zoom view state for an image canvas.
///
/// Owns the [`TrackedTransform`] together with canvas/image dimensions, zoom
/// bounds, and animation state. All mutation goes through this type so the
/// invariants hold: the resting scale stays within the derived zoom bounds
/// and panning never exceeds the overpan limits.
///
/// Operations that need a canvas or image before one is known are silent
/// no-ops, reporting `false` where they report anything.
#[derive(Clone, Debug)]
pub struct MapViewport {
    transform: TrackedTransform,
    limits: ViewLimits,
    canvas_size: Option<Size>,
    image_size: Option<Size>,
    containment: Option<f64>,
    bounds: ZoomBounds,
    image_initialized: bool,
    animation: Animation,
}

impl MapViewport {
    /// Creates a viewport with an identity transform and no canvas or image.
    #[must_use]
    pub fn new(limits: ViewLimits) -> Self {
        let bounds = ZoomBounds::derive(
            limits.min_zoom,
            limits.max_zoom,
            None,
            limits.allow_containment_zoom,
        );
        Self {
            transform: TrackedTransform::identity(),
            limits,
            canvas_size: None,
            image_size: None,
            containment: None,
            bounds,
            image_initialized: false,
            animation: Animation::Inactive,
        }
    }

    /// The current model→view transform.
    #[must_use]
    pub fn transform(&self) -> &TrackedTransform {
        &self.transform
    }

    /// Converts a view-space point into model space.
    #[must_use]
    pub fn to_model(&self, view_pt: Point) -> Option<Point> {
        self.transform.to_model(view_pt)
    }

    /// Converts a model-space point into view space.
    #[must_use]
    pub fn to_view(&self, model_pt: Point) -> Option<Point> {
        self.transform.to_view(model_pt)
    }

    /// The canvas size, once known.
    #[must_use]
    pub fn canvas_size(&self) -> Option<Size> {
        self.canvas_size
    }

    /// The image size, once known.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// The current containment (cover) scale, once both sizes are known.
    #[must_use]
    pub fn containment_scale(&self) -> Option<f64> {
        self.containment
    }

    /// The effective zoom bounds.
    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// The configured limits.
    #[must_use]
    pub fn limits(&self) -> &ViewLimits {
        &self.limits
    }

    /// Sets the canvas size, recomputing containment bounds and normalizing
    /// the transform to a uniform scale.
    ///
    /// Returns `false` (and changes nothing) for a degenerate size.
    pub fn set_canvas_size(&mut self, size: Size) -> bool {
        if !size_usable(size) {
            return false;
        }
        self.canvas_size = Some(size);
        self.refresh_containment();
        self.reset_view();
        true
    }

    /// Sets the image size, recomputing containment and applying the
    /// containing placement when configured.
    ///
    /// The first accepted image honors `contain_initial_image`; later
    /// changes honor `contain_updated_image`. Returns `false` for a
    /// degenerate size.
    pub fn set_image_size(&mut self, size: Size) -> bool {
        if !size_usable(size) {
            return false;
        }
        self.image_size = Some(size);
        self.refresh_containment();

        let containing = if self.image_initialized {
            self.limits.contain_updated_image
        } else {
            self.limits.contain_initial_image
        };
        if containing
            && let Some(canvas) = self.canvas_size
            && let Some(p) = containing_placement(canvas, size)
        {
            self.transform.reset(p.scale, p.tx, p.ty);
        }
        self.image_initialized = true;
        true
    }

    /// Snaps to the larger of the current x/y scales applied uniformly,
    /// preserving the current translation.
    ///
    /// Used to normalize accidental non-uniform scale drift.
    pub fn reset_view(&mut self) {
        let scale = self.transform.scale_x().max(self.transform.scale_y());
        let t = self.transform.translation();
        self.transform.reset(scale, t.x, t.y);
    }

    /// Applies `clicks` wheel clicks of zoom about a model-space cursor
    /// point, clamped to the zoom bounds.
    ///
    /// The factor is `1.1^clicks`, reduced up front to the maximum
    /// permissible factor so the resulting scale lands exactly on a bound
    /// instead of overshooting and correcting. Cancels any in-flight
    /// animation. Returns whether the transform changed.
    pub fn zoom_about(&mut self, cursor_model: Point, clicks: f64) -> bool {
        self.cancel_animation();
        if !clicks.is_finite() || clicks == 0.0 {
            return false;
        }
        let mut factor = SCALE_FACTOR.powf(clicks);
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        // Clamp against the dominant scale coefficient; at rest the scale is
        // uniform so either would do.
        let scale = self.transform.scale_x().max(self.transform.scale_y());
        if factor > 1.0 {
            if scale * factor > self.bounds.max {
                factor = self.bounds.max / scale;
            }
        } else if scale * factor < self.bounds.min {
            factor = self.bounds.min / scale;
        }
        if factor == 1.0 {
            return false;
        }
        self.transform.scale_about(cursor_model, factor);
        true
    }

    /// Pans by the model-space cursor movement from `last_model` to
    /// `current_model`, clamped per axis to the overpan limits.
    ///
    /// A translation that would carry an image edge more than `overpan`
    /// pixels past the opposing canvas edge is truncated to land exactly on
    /// the limit, or dropped to zero when the view is already past it.
    /// Requires both canvas and image sizes; otherwise a no-op. Returns
    /// whether the view moved.
    pub fn pan_from_to(&mut self, last_model: Point, current_model: Point) -> bool {
        let (Some(canvas), Some(image)) = (self.canvas_size, self.image_size) else {
            return false;
        };
        let delta = current_model - last_model;
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return false;
        }
        let t = self.transform.translation();
        let dx = clamp_axis(
            delta.x * self.transform.scale_x(),
            t.x,
            canvas.width - self.limits.overpan,
            -(image.width * self.transform.scale_x()) + self.limits.overpan,
        );
        let dy = clamp_axis(
            delta.y * self.transform.scale_y(),
            t.y,
            canvas.height - self.limits.overpan,
            -(image.height * self.transform.scale_y()) + self.limits.overpan,
        );
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.transform.translate_view(Vec2::new(dx, dy));
        true
    }

    /// Starts (or retargets) an animated pan bringing `target` under the
    /// canvas center.
    pub fn pan_to(&mut self, target: Point) {
        if !(target.x.is_finite() && target.y.is_finite()) {
            return;
        }
        self.animation = Animation::Animating {
            target,
            last_timestamp: None,
            cancel: false,
        };
    }

    /// Flags any in-flight animation for cancellation.
    ///
    /// The flag is consumed at the top of the next [`Self::animation_frame`];
    /// user input always wins over the animation.
    pub fn cancel_animation(&mut self) {
        if let Animation::Animating { cancel, .. } = &mut self.animation {
            *cancel = true;
        }
    }

    /// Whether an animated pan is in flight (including one flagged for
    /// cancellation that has not yet seen a frame).
    #[must_use]
    pub fn animation_active(&self) -> bool {
        matches!(self.animation, Animation::Animating { .. })
    }

    /// Runs one animation frame at `timestamp_ms`.
    ///
    /// Moves a fraction of the remaining distance proportional to the
    /// elapsed time (clamped to the full remainder), and snaps exactly onto
    /// the target once within [`PAN_SNAP_DISTANCE`] model units. The first
    /// frame only records its timestamp. Without a canvas the frame is
    /// deferred ([`AnimationTick::Continue`]) so a later frame can retry.
    pub fn animation_frame(&mut self, timestamp_ms: f64) -> AnimationTick {
        let Animation::Animating {
            target,
            last_timestamp,
            cancel,
        } = &mut self.animation
        else {
            return AnimationTick::Idle;
        };
        if *cancel {
            self.animation = Animation::Inactive;
            return AnimationTick::Canceled;
        }
        let Some(canvas) = self.canvas_size else {
            return AnimationTick::Continue;
        };

        let delta_ms = match *last_timestamp {
            Some(prev) => (timestamp_ms - prev).max(0.0),
            None => 0.0,
        };
        *last_timestamp = Some(timestamp_ms);

        let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
        let Some(current) = self.transform.to_model(center) else {
            return AnimationTick::Continue;
        };
        let diff = *target - current;
        if diff.hypot2() < PAN_SNAP_DISTANCE * PAN_SNAP_DISTANCE {
            self.transform.translate_model(-diff);
            self.animation = Animation::Inactive;
            AnimationTick::Finished
        } else {
            let fraction = (delta_ms * PAN_RATE_PER_MS).clamp(0.0, 1.0);
            self.transform.translate_model(-diff * fraction);
            AnimationTick::Continue
        }
    }

    fn refresh_containment(&mut self) {
        self.containment = match (self.canvas_size, self.image_size) {
            (Some(canvas), Some(image)) => containment_scale(canvas, image),
            _ => None,
        };
        self.bounds = ZoomBounds::derive(
            self.limits.min_zoom,
            self.limits.max_zoom,
            self.containment,
            self.limits.allow_containment_zoom,
        );
    }
}

/// Clamps one axis of a view-space pan delta.
///
/// `upper` is the translation limit when moving in the positive direction
/// (image origin approaching the far canvas edge); `lower` when moving
/// negative (image far edge approaching the canvas origin).
fn clamp_axis(delta: f64, current: f64, upper: f64, lower: f64) -> f64 {
    if delta > 0.0 {
        if current > upper {
            0.0
        } else if current + delta > upper {
            upper - current
        } else {
            delta
        }
    } else if delta < 0.0 {
        if current < lower {
            0.0
        } else if current + delta < lower {
            lower - current
        } else {
            delta
        }
    } else {
        0.0
    }
}

fn size_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
