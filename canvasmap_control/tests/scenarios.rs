// Copyright 2025 the Canvasmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end interaction timelines driven through the controller.

use canvasmap_control::{MapController, MapEvent, MapOptions, RedrawReason};
use canvasmap_scene::{
    DropZoneDescriptor, MarkerDescriptor, MarkerInterest, ScreenAnchor, SliceScene,
};
use kurbo::{Point, Size};

/// 800×600 canvas with a 1600×1200 image: exact cover at scale 0.5, no
/// letterboxing, so model coordinates are twice the view coordinates.
fn covered_map() -> MapController<&'static str> {
    let mut map = MapController::new(MapOptions::default());
    map.resize(Size::new(800.0, 600.0));
    map.image_loaded(Size::new(1600.0, 1200.0));
    map
}

#[test]
fn image_load_contains_and_centers_the_view() {
    let map = covered_map();
    let transform = map.viewport().transform();
    assert_eq!(transform.scale_x(), 0.5);
    assert_eq!(transform.scale_y(), 0.5);
    assert_eq!(transform.translation(), kurbo::Vec2::ZERO);

    // A portrait image on the same canvas letterboxes horizontally.
    let mut map = covered_map();
    map.image_loaded(Size::new(500.0, 1000.0));
    let transform = map.viewport().transform();
    assert_eq!(transform.scale_x(), 0.6);
    assert_eq!(transform.translation().x, (800.0 - 500.0 * 0.6) / 2.0);
    assert_eq!(transform.translation().y, 0.0);
}

#[test]
fn press_timing_decides_click_versus_drag() {
    let markers = [MarkerDescriptor::new("pin", Point::new(200.0, 200.0))
        .with_interest(MarkerInterest::CLICK | MarkerInterest::DRAG)];
    let scene = SliceScene {
        markers: &markers,
        ..SliceScene::default()
    };

    // Released before the drag threshold: a click, despite the jitter.
    let mut map = covered_map();
    map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
    map.pointer_move(Point::new(102.0, 100.0), 50.0, &scene);
    assert_eq!(
        map.pointer_up(80.0, &scene),
        vec![
            MapEvent::MarkerClick("pin"),
            MapEvent::Redraw(RedrawReason::PointerUp),
        ]
    );

    // Held and moved past the threshold: a drag, and the release outside
    // any zone ends it at the cursor's model position.
    let mut map = covered_map();
    map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
    let events = map.pointer_move(Point::new(160.0, 140.0), 350.0, &scene);
    assert_eq!(
        events,
        vec![
            MapEvent::DragTick {
                key: "pin",
                point: Point::new(320.0, 280.0),
            },
            MapEvent::Redraw(RedrawReason::DragTick),
        ]
    );
    assert_eq!(
        map.pointer_up(400.0, &scene),
        vec![
            MapEvent::DragEnd {
                key: "pin",
                point: Point::new(320.0, 280.0),
            },
            MapEvent::Redraw(RedrawReason::PointerUp),
        ]
    );
}

#[test]
fn drop_timeline_cancels_then_drops_and_never_drag_ends() {
    let markers = [MarkerDescriptor::new("pin", Point::new(200.0, 200.0))
        .with_interest(MarkerInterest::DRAG)];
    let zones = [DropZoneDescriptor::new(
        "bin",
        ScreenAnchor::bottom_right(10.0, 10.0, 150.0, 150.0),
    )];
    let scene = SliceScene {
        markers: &markers,
        drop_zones: &zones,
        ..SliceScene::default()
    };

    let mut map = covered_map();
    map.pointer_down(Point::new(100.0, 100.0), 0.0, &scene);
    // Drag into the bottom-right zone (x in 640..790, y in 440..590).
    map.pointer_move(Point::new(400.0, 300.0), 350.0, &scene);
    map.pointer_move(Point::new(700.0, 500.0), 500.0, &scene);
    let events = map.pointer_up(600.0, &scene);
    assert_eq!(
        events,
        vec![
            MapEvent::DragCancel("pin"),
            MapEvent::Drop {
                marker: "pin",
                zone: "bin",
            },
            MapEvent::Redraw(RedrawReason::PointerUp),
        ]
    );
    assert!(!events.iter().any(|e| matches!(e, MapEvent::DragEnd { .. })));
}

#[test]
fn zone_hit_testing_tracks_pan_and_zoom() {
    let markers = [MarkerDescriptor::new("pin", Point::new(200.0, 200.0))
        .with_interest(MarkerInterest::DRAG)];
    let zones = [DropZoneDescriptor::new(
        "bin",
        ScreenAnchor::top_left(0.0, 0.0, 100.0, 100.0),
    )];
    let scene = SliceScene {
        markers: &markers,
        drop_zones: &zones,
        ..SliceScene::default()
    };

    let mut map = covered_map();
    // Zoom in about the marker first; the zone stays glued to the canvas
    // corner regardless.
    map.pointer_move(Point::new(100.0, 100.0), 0.0, &scene);
    map.zoom(3.0);
    map.pointer_down(Point::new(100.0, 100.0), 10.0, &scene);
    map.pointer_move(Point::new(50.0, 50.0), 400.0, &scene);
    let events = map.pointer_up(500.0, &scene);
    assert!(matches!(events.first(), Some(MapEvent::DragCancel("pin"))));
}

#[test]
fn animated_pan_brings_the_target_to_center_and_stops() {
    let mut map = covered_map();
    let target = Point::new(300.0, 900.0);
    map.pan_to(target);

    let mut timestamp = 0.0;
    let mut frames = 0;
    while map.animation_active() {
        timestamp += 16.0;
        frames += 1;
        assert!(frames < 1000, "animation never terminated");
        let events = map.animation_frame(timestamp);
        if map.animation_active() {
            assert_eq!(events, vec![MapEvent::Redraw(RedrawReason::Animation)]);
        }
    }

    let center = map
        .viewport()
        .to_model(Point::new(400.0, 300.0))
        .expect("transform stayed invertible");
    assert!((center.x - target.x).abs() < 1e-9);
    assert!((center.y - target.y).abs() < 1e-9);
}

#[test]
fn pointer_press_interrupts_an_animated_pan() {
    let mut map = covered_map();
    let scene: SliceScene<'_, &str> = SliceScene::default();
    map.pan_to(Point::new(1500.0, 1100.0));
    map.animation_frame(0.0);
    map.animation_frame(16.0);
    let before = map.viewport().transform().clone();

    map.pointer_down(Point::new(400.0, 300.0), 20.0, &scene);
    // The next frame consumes the cancellation without moving the view.
    assert!(map.animation_frame(32.0).is_empty());
    assert!(!map.animation_active());
    assert_eq!(map.viewport().transform(), &before);
}

#[test]
fn pan_respects_the_overpan_limit_end_to_end() {
    let mut map = covered_map();
    let scene: SliceScene<'_, &str> = SliceScene::default();
    map.pointer_down(Point::new(400.0, 300.0), 0.0, &scene);
    let mut now = 150.0;
    for _ in 0..50 {
        map.pointer_move(Point::new(700.0, 300.0), now, &scene);
        map.pointer_up(now + 10.0, &scene);
        now += 100.0;
        map.pointer_down(Point::new(400.0, 300.0), now, &scene);
        now += 150.0;
    }
    // The image origin may sit at most canvas.width - overpan from the left.
    assert!(map.viewport().transform().translation().x <= 800.0 - 30.0 + 1e-9);
}

#[test]
fn resize_renormalizes_and_requests_a_repaint() {
    let mut map = covered_map();
    let events = map.resize(Size::new(1024.0, 768.0));
    assert_eq!(events, vec![MapEvent::Redraw(RedrawReason::ViewReset)]);
    assert_eq!(map.viewport().canvas_size(), Some(Size::new(1024.0, 768.0)));
    // Still a uniform scale after the reset.
    let transform = map.viewport().transform();
    assert_eq!(transform.scale_x(), transform.scale_y());
}
