// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// A mutable model→view affine transform with an incrementally maintained
/// inverse.
///
/// The forward matrix maps **model** (image) coordinates into **view**
/// (canvas pixel) coordinates. Every mutation updates both directions, so
/// point conversion never has to invert on demand.
///
/// The common case here is uniform scale plus translation (the off-diagonal
/// coefficients stay zero), but the representation is a full affine so the
/// model stays forward compatible.
///
/// Mutations that would produce a zero or negative scale are ignored rather
/// than applied; the transform always remains invertible.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedTransform {
    forward: Affine,
    inverse: Affine,
}

impl Default for TrackedTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl TrackedTransform {
    /// Creates an identity transform (model space equals view space).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            forward: Affine::IDENTITY,
            inverse: Affine::IDENTITY,
        }
    }

    /// Replaces the transform with a uniform scale and view-space translation.
    ///
    /// Any accumulated skew or non-uniform scale is discarded. Non-finite
    /// input or a non-positive scale leaves the transform unchanged.
    pub fn reset(&mut self, scale: f64, tx: f64, ty: f64) {
        if !(scale.is_finite() && tx.is_finite() && ty.is_finite()) || scale <= 0.0 {
            return;
        }
        self.forward = Affine::new([scale, 0.0, 0.0, scale, tx, ty]);
        self.inverse = self.forward.inverse();
    }

    /// Translates by a **view-space** delta (pre-multiplies a translation).
    ///
    /// The whole image moves by `delta` pixels on the canvas regardless of
    /// the current zoom.
    pub fn translate_view(&mut self, delta: Vec2) {
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return;
        }
        self.forward = Affine::translate(delta) * self.forward;
        self.inverse = self.inverse * Affine::translate(-delta);
    }

    /// Translates by a **model-space** delta (post-multiplies a translation).
    ///
    /// This is the canvas-2D `translate` operation: the image moves by
    /// `delta` model units, which is `delta * scale` pixels on screen.
    pub fn translate_model(&mut self, delta: Vec2) {
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return;
        }
        self.forward = self.forward * Affine::translate(delta);
        self.inverse = Affine::translate(-delta) * self.inverse;
    }

    /// Scales uniformly by `factor` about a **model-space** anchor point.
    ///
    /// The anchor stays fixed on screen: translate to the anchor, scale,
    /// translate back. A non-positive or non-finite factor is ignored.
    pub fn scale_about(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        if !(anchor.x.is_finite() && anchor.y.is_finite()) {
            return;
        }
        let anchor = anchor.to_vec2();
        let local = Affine::translate(anchor) * Affine::scale(factor) * Affine::translate(-anchor);
        self.forward = self.forward * local;
        self.inverse =
            (Affine::translate(anchor) * Affine::scale(factor.recip()) * Affine::translate(-anchor))
                * self.inverse;
    }

    /// Converts a view-space point into model space.
    ///
    /// Returns `None` for non-finite input. This guards against stale or
    /// uninitialized cursor state; callers treat `None` as "no interaction".
    #[must_use]
    pub fn to_model(&self, view_pt: Point) -> Option<Point> {
        if !(view_pt.x.is_finite() && view_pt.y.is_finite()) {
            return None;
        }
        Some(self.inverse * view_pt)
    }

    /// Converts a model-space point into view space.
    ///
    /// Returns `None` for non-finite input.
    #[must_use]
    pub fn to_view(&self, model_pt: Point) -> Option<Point> {
        if !(model_pt.x.is_finite() && model_pt.y.is_finite()) {
            return None;
        }
        Some(self.forward * model_pt)
    }

    /// The horizontal scale coefficient (`a`).
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.forward.as_coeffs()[0]
    }

    /// The vertical scale coefficient (`d`).
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.forward.as_coeffs()[3]
    }

    /// The view-space translation (`e`, `f`): where the model origin lands
    /// on the canvas.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        let [_, _, _, _, e, f] = self.forward.as_coeffs();
        Vec2::new(e, f)
    }

    /// The forward (model→view) matrix.
    #[must_use]
    pub fn as_affine(&self) -> Affine {
        self.forward
    }
}
