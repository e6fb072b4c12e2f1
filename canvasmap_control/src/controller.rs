// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller: routes raw input through the gesture tracker, the
//! viewport, and the scene's descriptors, and reports semantic events.

use canvasmap_gesture::pointer::{GestureTracker, MoveDisposition, UpDisposition};
use canvasmap_scene::{MarkerDescriptor, MarkerInterest, Scene, drop_zone_at, nearest_marker};
use canvasmap_view2d::{AnimationTick, MapViewport};
use kurbo::{Point, Size};

use crate::event::{MapEvent, RedrawReason};
use crate::options::MapOptions;

/// Wheel delta pixels per zoom click.
const WHEEL_PIXELS_PER_CLICK: f64 = 40.0;

/// The top-level interaction engine for a pannable, zoomable image map.
///
/// The controller owns the view state and the gesture state; the scene is
/// borrowed fresh on every call, so hosts may rebuild their overlay lists
/// at any time. Each input method returns the semantic [`MapEvent`]s the
/// input resolved to, in the order they should be handled. An empty vector
/// means the input changed nothing the host needs to act on.
///
/// All positions entering the controller are view-space (canvas pixels);
/// all positions in emitted events are model-space (image pixels).
#[derive(Clone, Debug)]
pub struct MapController<K> {
    viewport: MapViewport,
    tracker: GestureTracker<K>,
    /// Last known view-space cursor position.
    cursor: Option<Point>,
}

impl<K: Clone + PartialEq> MapController<K> {
    /// Creates a controller with no canvas, image, or cursor yet.
    #[must_use]
    pub fn new(options: MapOptions) -> Self {
        Self {
            viewport: MapViewport::new(options.view_limits()),
            tracker: GestureTracker::new(options.gesture_timing()),
            cursor: None,
        }
    }

    /// The view state: transform, sizes, zoom bounds, animation.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// The gesture state machine.
    #[must_use]
    pub fn gesture(&self) -> &GestureTracker<K> {
        &self.tracker
    }

    /// The last known cursor position in view space.
    #[must_use]
    pub fn cursor_view(&self) -> Option<Point> {
        self.cursor
    }

    /// The last known cursor position mapped into model space.
    #[must_use]
    pub fn cursor_model(&self) -> Option<Point> {
        self.cursor.and_then(|c| self.viewport.to_model(c))
    }

    /// The marker under the cursor, if any.
    #[must_use]
    pub fn hovered_marker<'s>(
        &self,
        scene: &'s impl Scene<Key = K>,
    ) -> Option<&'s MarkerDescriptor<K>> {
        let cursor = self.cursor?;
        nearest_marker(cursor, self.viewport.transform(), scene.markers())
    }

    /// Handles a pointer press at a view-space position.
    ///
    /// Cancels any animated pan (user input wins) and arms a gesture on the
    /// marker under the press, if one is there.
    pub fn pointer_down(
        &mut self,
        view_pos: Point,
        now_ms: f64,
        scene: &impl Scene<Key = K>,
    ) -> Vec<MapEvent<K>> {
        self.viewport.cancel_animation();
        self.cursor = finite_point(view_pos);
        let candidate = self.cursor.and_then(|c| {
            nearest_marker(c, self.viewport.transform(), scene.markers()).map(|m| m.key.clone())
        });
        self.tracker.on_pointer_down(view_pos, candidate, now_ms);
        Vec::new()
    }

    /// Handles a pointer move at a view-space position.
    ///
    /// Depending on the gesture state this is a hover update, a pan, or a
    /// drag tick. The pan delta is computed in model space against the
    /// transform as it was before the move, so the image tracks the cursor
    /// exactly.
    pub fn pointer_move(
        &mut self,
        view_pos: Point,
        now_ms: f64,
        scene: &impl Scene<Key = K>,
    ) -> Vec<MapEvent<K>> {
        let last_cursor = self.cursor;
        self.cursor = finite_point(view_pos);
        match self.tracker.on_pointer_move(now_ms) {
            MoveDisposition::Hover | MoveDisposition::Pending => Vec::new(),
            MoveDisposition::DragTick(key) => self.drag_tick_events(key, scene),
            MoveDisposition::Pan => {
                let (Some(last), Some(current)) = (last_cursor, self.cursor) else {
                    return Vec::new();
                };
                let (Some(last_model), Some(current_model)) =
                    (self.viewport.to_model(last), self.viewport.to_model(current))
                else {
                    return Vec::new();
                };
                if self.viewport.pan_from_to(last_model, current_model) {
                    vec![MapEvent::Redraw(RedrawReason::Pan)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Handles a pointer release, resolving the gesture into a click, a drop,
    /// or a drag end.
    ///
    /// A release inside a drop zone cancels the drag first and then delivers
    /// the drop (when the zone wants it); the drag-end event never fires in
    /// that case. A release always requests a repaint so any press-time
    /// highlight clears.
    pub fn pointer_up(&mut self, now_ms: f64, scene: &impl Scene<Key = K>) -> Vec<MapEvent<K>> {
        let mut events = match self.tracker.on_pointer_up(now_ms) {
            UpDisposition::Ignored => Vec::new(),
            UpDisposition::Click {
                candidate: Some(key),
            } => match marker_by_key(scene.markers(), &key) {
                Some(marker) if marker.interest.contains(MarkerInterest::CLICK) => {
                    vec![MapEvent::MarkerClick(key)]
                }
                // The marker swallowed the press; the map click never fires.
                _ => Vec::new(),
            },
            UpDisposition::Click { candidate: None } => match self.cursor_model() {
                Some(point) => vec![MapEvent::Click(point)],
                None => Vec::new(),
            },
            UpDisposition::DragRelease(key) => self.drag_release_events(key, scene),
        };
        events.push(MapEvent::Redraw(RedrawReason::PointerUp));
        events
    }

    /// Handles a wheel event with a raw pixel delta, converting it to zoom
    /// clicks.
    pub fn wheel(&mut self, delta_pixels: f64) -> Vec<MapEvent<K>> {
        self.zoom(delta_pixels / WHEEL_PIXELS_PER_CLICK)
    }

    /// Zooms by `clicks` wheel clicks about the current cursor position.
    ///
    /// A no-op without a known cursor; any animated pan is cancelled either
    /// way.
    pub fn zoom(&mut self, clicks: f64) -> Vec<MapEvent<K>> {
        self.viewport.cancel_animation();
        let Some(cursor_model) = self.cursor_model() else {
            return Vec::new();
        };
        if self.viewport.zoom_about(cursor_model, clicks) {
            vec![MapEvent::Redraw(RedrawReason::Zoom)]
        } else {
            Vec::new()
        }
    }

    /// Handles the escape key: abandons the gesture in progress, notifying
    /// the marker whose drag was cut short.
    pub fn escape(&mut self, scene: &impl Scene<Key = K>) -> Vec<MapEvent<K>> {
        let Some(key) = self.tracker.on_escape() else {
            return Vec::new();
        };
        let mut events = Vec::new();
        if let Some(marker) = marker_by_key(scene.markers(), &key)
            && marker.interest.contains(MarkerInterest::DRAG_CANCEL)
        {
            events.push(MapEvent::DragCancel(key));
        }
        events.push(MapEvent::Redraw(RedrawReason::DragCancel));
        events
    }

    /// Handles a double click at the current cursor position.
    ///
    /// A hovered marker receives it when interested and swallows it
    /// otherwise; with no marker under the cursor the map itself is
    /// double-clicked.
    pub fn double_click(&self, scene: &impl Scene<Key = K>) -> Vec<MapEvent<K>> {
        let Some(cursor) = self.cursor else {
            return Vec::new();
        };
        match nearest_marker(cursor, self.viewport.transform(), scene.markers()) {
            Some(marker) => {
                if marker.interest.contains(MarkerInterest::DOUBLE_CLICK) {
                    vec![MapEvent::MarkerDoubleClick(marker.key.clone())]
                } else {
                    Vec::new()
                }
            }
            None => match self.cursor_model() {
                Some(point) => vec![MapEvent::DoubleClick(point)],
                None => Vec::new(),
            },
        }
    }

    /// Handles a canvas resize.
    ///
    /// The stored cursor is rescaled to keep its canvas proportion, matching
    /// how a host element's contents reflow, and the view snaps back to a
    /// uniform scale.
    pub fn resize(&mut self, new_size: Size) -> Vec<MapEvent<K>> {
        if let (Some(old), Some(cursor)) = (self.viewport.canvas_size(), self.cursor) {
            self.cursor = Some(Point::new(
                cursor.x / old.width * new_size.width,
                cursor.y / old.height * new_size.height,
            ));
        }
        if self.viewport.set_canvas_size(new_size) {
            vec![MapEvent::Redraw(RedrawReason::ViewReset)]
        } else {
            Vec::new()
        }
    }

    /// Handles a new image becoming available, possibly re-containing the
    /// view per the configured limits.
    pub fn image_loaded(&mut self, size: Size) -> Vec<MapEvent<K>> {
        if self.viewport.set_image_size(size) {
            vec![MapEvent::Redraw(RedrawReason::ImageLoad)]
        } else {
            Vec::new()
        }
    }

    /// Starts (or retargets) an animated pan bringing a model-space point
    /// under the canvas center. Drive it with [`Self::animation_frame`].
    pub fn pan_to(&mut self, target_model: Point) {
        self.viewport.pan_to(target_model);
    }

    /// Whether an animated pan is in flight.
    #[must_use]
    pub fn animation_active(&self) -> bool {
        self.viewport.animation_active()
    }

    /// Runs one animation frame; the host keeps scheduling frames while
    /// [`Self::animation_active`] holds.
    pub fn animation_frame(&mut self, timestamp_ms: f64) -> Vec<MapEvent<K>> {
        match self.viewport.animation_frame(timestamp_ms) {
            AnimationTick::Idle | AnimationTick::Canceled => Vec::new(),
            AnimationTick::Continue | AnimationTick::Finished => {
                vec![MapEvent::Redraw(RedrawReason::Animation)]
            }
        }
    }

    /// The instant at which a stationary hold over a marker becomes a drag,
    /// for the host to schedule a timer against.
    #[must_use]
    pub fn drag_deadline(&self) -> Option<f64> {
        self.tracker.drag_deadline()
    }

    /// Reports a drag-deadline timer firing; a stale timer is a no-op.
    pub fn drag_deadline_fired(
        &mut self,
        now_ms: f64,
        scene: &impl Scene<Key = K>,
    ) -> Vec<MapEvent<K>> {
        match self.tracker.on_drag_deadline(now_ms) {
            Some(key) => self.drag_tick_events(key, scene),
            None => Vec::new(),
        }
    }

    /// Feeds the cursor position from an external drag-over so a later drop
    /// can be resolved through [`Self::cursor_model`].
    pub fn drag_over(&mut self, view_pos: Point) {
        self.cursor = finite_point(view_pos);
    }

    /// View-space tooltip placements as canvas proportions in `0.0..=1.0`
    /// (off-canvas tooltips fall outside that range).
    #[must_use]
    pub fn tooltip_positions(&self, scene: &impl Scene<Key = K>) -> Vec<(K, Point)> {
        let Some(canvas) = self.viewport.canvas_size() else {
            return Vec::new();
        };
        scene
            .tooltips()
            .iter()
            .filter_map(|tooltip| {
                let view = self.viewport.to_view(tooltip.coords)?;
                Some((
                    tooltip.key.clone(),
                    Point::new(view.x / canvas.width, view.y / canvas.height),
                ))
            })
            .collect()
    }

    fn drag_tick_events(&self, key: K, scene: &impl Scene<Key = K>) -> Vec<MapEvent<K>> {
        let mut events = Vec::new();
        if let Some(marker) = marker_by_key(scene.markers(), &key)
            && marker.interest.contains(MarkerInterest::DRAG_TICK)
            && let Some(point) = self.cursor_model()
        {
            events.push(MapEvent::DragTick { key, point });
            events.push(MapEvent::Redraw(RedrawReason::DragTick));
        }
        events
    }

    fn drag_release_events(&self, key: K, scene: &impl Scene<Key = K>) -> Vec<MapEvent<K>> {
        let Some(marker) = marker_by_key(scene.markers(), &key) else {
            // The marker left the scene mid-drag; nothing to notify.
            return Vec::new();
        };
        let zone = match (self.cursor, self.viewport.canvas_size()) {
            (Some(cursor), Some(canvas)) => {
                drop_zone_at(cursor, self.viewport.transform(), canvas, scene.drop_zones())
            }
            _ => None,
        };
        let mut events = Vec::new();
        match zone {
            Some(zone) => {
                if marker.interest.contains(MarkerInterest::DRAG_CANCEL) {
                    events.push(MapEvent::DragCancel(key.clone()));
                }
                if zone.accepts_drop {
                    events.push(MapEvent::Drop {
                        marker: key,
                        zone: zone.key.clone(),
                    });
                }
            }
            None => {
                if marker.interest.contains(MarkerInterest::DRAG_END)
                    && let Some(point) = self.cursor_model()
                {
                    events.push(MapEvent::DragEnd { key, point });
                }
            }
        }
        events
    }
}

fn marker_by_key<'a, K: PartialEq>(
    markers: &'a [MarkerDescriptor<K>],
    key: &K,
) -> Option<&'a MarkerDescriptor<K>> {
    markers.iter().find(|m| &m.key == key)
}

fn finite_point(p: Point) -> Option<Point> {
    (p.x.is_finite() && p.y.is_finite()).then_some(p)
}

#[cfg(test)]
mod tests {
    use canvasmap_scene::{DropZoneDescriptor, ScreenAnchor, SliceScene, TooltipDescriptor};

    use super::*;

    /// 800×600 canvas with a 1600×1200 image: exact cover at scale 0.5, so
    /// model coordinates are exactly twice the view coordinates.
    fn map() -> MapController<u32> {
        let mut map = MapController::new(MapOptions::default());
        map.resize(Size::new(800.0, 600.0));
        map.image_loaded(Size::new(1600.0, 1200.0));
        map
    }

    fn marker(key: u32, x: f64, y: f64, interest: MarkerInterest) -> MarkerDescriptor<u32> {
        MarkerDescriptor::new(key, Point::new(x, y)).with_interest(interest)
    }

    fn empty_scene() -> SliceScene<'static, u32> {
        SliceScene::default()
    }

    #[test]
    fn background_press_and_release_is_a_map_click() {
        let mut map = map();
        let scene = empty_scene();
        assert!(map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene).is_empty());
        assert_eq!(
            map.pointer_up(50.0, &scene),
            vec![
                MapEvent::Click(Point::new(200.0, 200.0)),
                MapEvent::Redraw(RedrawReason::PointerUp),
            ]
        );
    }

    #[test]
    fn marker_click_requires_click_interest() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::DRAG_TICK)];
        let scene = SliceScene {
            markers: &markers,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        // The press was swallowed: no marker click, but no map click either.
        assert_eq!(
            map.pointer_up(50.0, &scene),
            vec![MapEvent::Redraw(RedrawReason::PointerUp)]
        );
    }

    #[test]
    fn marker_click_fires_with_click_interest() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::CLICK)];
        let scene = SliceScene {
            markers: &markers,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        assert_eq!(
            map.pointer_up(50.0, &scene),
            vec![
                MapEvent::MarkerClick(1),
                MapEvent::Redraw(RedrawReason::PointerUp),
            ]
        );
    }

    #[test]
    fn background_drag_pans_the_view() {
        let mut map = map();
        let scene = empty_scene();
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        let events = map.pointer_move(Point::new(150.0, 130.0), 150.0, &scene);
        assert_eq!(events, vec![MapEvent::Redraw(RedrawReason::Pan)]);
        assert_eq!(
            map.viewport().transform().translation(),
            kurbo::Vec2::new(50.0, 30.0)
        );
        // Moved past the grace window: the release resolves nothing.
        assert_eq!(
            map.pointer_up(200.0, &scene),
            vec![MapEvent::Redraw(RedrawReason::PointerUp)]
        );
    }

    #[test]
    fn drag_ticks_report_model_positions() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::DRAG)];
        let scene = SliceScene {
            markers: &markers,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        assert!(map.pointer_move(Point::new(110.0, 100.0), 200.0, &scene).is_empty());
        assert_eq!(
            map.pointer_move(Point::new(120.0, 100.0), 400.0, &scene),
            vec![
                MapEvent::DragTick {
                    key: 1,
                    point: Point::new(240.0, 200.0),
                },
                MapEvent::Redraw(RedrawReason::DragTick),
            ]
        );
    }

    #[test]
    fn drag_release_in_a_zone_cancels_then_drops() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::DRAG)];
        let zones = [DropZoneDescriptor::new(
            9,
            ScreenAnchor::top_left(0.0, 0.0, 200.0, 200.0),
        )];
        let scene = SliceScene {
            markers: &markers,
            drop_zones: &zones,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        map.pointer_move(Point::new(50.0, 50.0), 400.0, &scene);
        assert_eq!(
            map.pointer_up(500.0, &scene),
            vec![
                MapEvent::DragCancel(1),
                MapEvent::Drop { marker: 1, zone: 9 },
                MapEvent::Redraw(RedrawReason::PointerUp),
            ]
        );
    }

    #[test]
    fn reluctant_zone_still_swallows_the_drag() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::DRAG)];
        let zones = [DropZoneDescriptor {
            key: 9,
            anchor: ScreenAnchor::top_left(0.0, 0.0, 200.0, 200.0),
            accepts_drop: false,
        }];
        let scene = SliceScene {
            markers: &markers,
            drop_zones: &zones,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        map.pointer_move(Point::new(50.0, 50.0), 400.0, &scene);
        // Cancelled but never dropped, and never drag-ended.
        assert_eq!(
            map.pointer_up(500.0, &scene),
            vec![
                MapEvent::DragCancel(1),
                MapEvent::Redraw(RedrawReason::PointerUp),
            ]
        );
    }

    #[test]
    fn drag_release_outside_zones_is_a_drag_end() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::DRAG)];
        let scene = SliceScene {
            markers: &markers,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        map.pointer_move(Point::new(300.0, 250.0), 400.0, &scene);
        assert_eq!(
            map.pointer_up(500.0, &scene),
            vec![
                MapEvent::DragEnd {
                    key: 1,
                    point: Point::new(600.0, 500.0),
                },
                MapEvent::Redraw(RedrawReason::PointerUp),
            ]
        );
    }

    #[test]
    fn escape_cancels_the_drag_and_the_release_is_inert() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::DRAG)];
        let scene = SliceScene {
            markers: &markers,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
        map.pointer_move(Point::new(120.0, 100.0), 400.0, &scene);
        assert_eq!(
            map.escape(&scene),
            vec![
                MapEvent::DragCancel(1),
                MapEvent::Redraw(RedrawReason::DragCancel),
            ]
        );
        assert_eq!(
            map.pointer_up(500.0, &scene),
            vec![MapEvent::Redraw(RedrawReason::PointerUp)]
        );
    }

    #[test]
    fn escape_while_idle_is_silent() {
        let mut map = map();
        assert!(map.escape(&empty_scene()).is_empty());
    }

    #[test]
    fn stationary_hold_ticks_via_the_deadline_timer() {
        let mut map = map();
        let markers = [marker(1, 200.0, 200.0, MarkerInterest::DRAG)];
        let scene = SliceScene {
            markers: &markers,
            ..SliceScene::default()
        };
        map.pointer_down(Point::new(100.0, 100.0), 1000.0, &scene);
        assert_eq!(map.drag_deadline(), Some(1300.0));
        let events = map.drag_deadline_fired(1300.0, &scene);
        assert_eq!(
            events,
            vec![
                MapEvent::DragTick {
                    key: 1,
                    point: Point::new(200.0, 200.0),
                },
                MapEvent::Redraw(RedrawReason::DragTick),
            ]
        );
        // The hold matured into a drag; no further deadline is pending.
        assert_eq!(map.drag_deadline(), None);
    }

    #[test]
    fn wheel_converts_pixel_deltas_to_zoom_clicks() {
        let mut map = map();
        let scene = empty_scene();
        map.pointer_move(Point::new(400.0, 300.0), 0.0, &scene);
        assert_eq!(
            map.wheel(40.0),
            vec![MapEvent::Redraw(RedrawReason::Zoom)]
        );
        assert!((map.viewport().transform().scale_x() - 0.55).abs() < 1e-12);
        assert!(map.wheel(0.0).is_empty());
    }

    #[test]
    fn wheel_without_a_cursor_is_a_no_op() {
        let mut map = map();
        assert!(map.wheel(40.0).is_empty());
        assert_eq!(map.viewport().transform().scale_x(), 0.5);
    }

    #[test]
    fn zoom_keeps_the_cursor_point_fixed() {
        let mut map = map();
        let scene = empty_scene();
        map.pointer_move(Point::new(200.0, 150.0), 0.0, &scene);
        let before = map.cursor_model().unwrap();
        map.zoom(2.0);
        let after = map.cursor_model().unwrap();
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn double_click_routes_to_the_hovered_marker() {
        let mut map = map();
        let markers = [
            marker(1, 200.0, 200.0, MarkerInterest::DOUBLE_CLICK),
            marker(2, 1000.0, 1000.0, MarkerInterest::CLICK),
        ];
        let scene = SliceScene {
            markers: &markers,
            ..SliceScene::default()
        };
        map.pointer_move(Point::new(100.0, 100.0), 0.0, &scene);
        assert_eq!(map.double_click(&scene), vec![MapEvent::MarkerDoubleClick(1)]);

        // Over an uninterested marker the double click is swallowed.
        map.pointer_move(Point::new(500.0, 500.0), 10.0, &scene);
        assert!(map.double_click(&scene).is_empty());

        // Over the background it is a map double click.
        map.pointer_move(Point::new(700.0, 100.0), 20.0, &scene);
        assert_eq!(
            map.double_click(&scene),
            vec![MapEvent::DoubleClick(Point::new(1400.0, 200.0))]
        );
    }

    #[test]
    fn resize_rescales_the_cursor_proportionally() {
        let mut map = map();
        let scene = empty_scene();
        map.pointer_move(Point::new(400.0, 300.0), 0.0, &scene);
        let events = map.resize(Size::new(400.0, 300.0));
        assert_eq!(events, vec![MapEvent::Redraw(RedrawReason::ViewReset)]);
        assert_eq!(map.cursor_view(), Some(Point::new(200.0, 150.0)));
    }

    #[test]
    fn tooltip_positions_are_canvas_proportions() {
        let map = map();
        let tooltips = [TooltipDescriptor {
            key: 5_u32,
            coords: Point::new(800.0, 600.0),
        }];
        let scene = SliceScene {
            tooltips: &tooltips,
            ..SliceScene::default()
        };
        // Model (800, 600) sits at view (400, 300): the canvas center.
        assert_eq!(
            map.tooltip_positions(&scene),
            vec![(5, Point::new(0.5, 0.5))]
        );
    }

    #[test]
    fn pointer_down_cancels_an_animated_pan() {
        let mut map = map();
        let scene = empty_scene();
        map.pan_to(Point::new(100.0, 100.0));
        assert!(map.animation_active());
        map.pointer_down(Point::new(10.0, 10.0), 0.0, &scene);
        // The cancellation is consumed by the next frame without moving.
        assert!(map.animation_frame(16.0).is_empty());
        assert!(!map.animation_active());
    }

    #[test]
    fn external_drag_over_feeds_the_drop_position() {
        let mut map = map();
        map.drag_over(Point::new(100.0, 50.0));
        assert_eq!(map.cursor_model(), Some(Point::new(200.0, 100.0)));
        map.drag_over(Point::new(f64::NAN, 50.0));
        assert_eq!(map.cursor_model(), None);
    }
}
