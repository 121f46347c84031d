use map_canvas::coord::Coordinate3D;
use map_canvas::render::{DrawCommand, DrawList};

use super::*;
use crate::db::test_helpers::{link, room, FakeStore, PanickingStore};

fn config() -> ViewerConfig {
    ViewerConfig { width: 100.0, height: 100.0, ..ViewerConfig::default() }
}

fn zone_store() -> Arc<FakeStore> {
    let mut a = room(1170, 1, 0, 0, 0);
    let b = room(1171, 1, 1, 0, 0);
    link(&mut a, &b, 3);
    Arc::new(FakeStore::with_rooms(vec![a, b]))
}

#[tokio::test]
async fn new_returns_before_load_lands() {
    let mut view = MapView::new(zone_store(), Handle::current(), &config());
    assert!(view.is_loading());
    // Current-thread runtime: the load task has not run yet.
    assert!(view.pump().is_empty());
    assert_eq!(view.core().center(), None);

    let mut list = DrawList::new();
    assert_eq!(view.render(&mut list), FrameStats::default());
    assert!(list.commands.is_empty());
}

#[tokio::test]
async fn next_load_applies_snapshot() {
    let mut view = MapView::new(zone_store(), Handle::current(), &config());
    assert_eq!(view.next_load().await, vec![Action::RenderNeeded]);
    assert!(!view.is_loading());
    assert_eq!(view.core().center(), Some(Coordinate3D::new(0, 0, 0)));
    assert_eq!(view.core().current_room().map(|r| r.id), Some(1170));
    assert_eq!(view.core().rooms.len(), 2);
}

#[tokio::test]
async fn render_after_load_draws_exits_rooms_and_marker() {
    let mut view = MapView::new(zone_store(), Handle::current(), &config());
    view.next_load().await;

    let mut list = DrawList::new();
    let stats = view.render(&mut list);
    assert_eq!(stats.rooms, 2);
    assert_eq!(stats.exits_drawn, 1);
    assert!(stats.marker);
    assert!(matches!(list.commands.first(), Some(DrawCommand::StrokeLine { .. })));
    assert!(matches!(list.commands.last(), Some(DrawCommand::FillOval { .. })));
}

#[tokio::test]
async fn failed_load_leaves_view_empty() {
    let store = Arc::new(FakeStore::failing());
    let mut view = MapView::new(store, Handle::current(), &config());
    assert!(view.next_load().await.is_empty());
    assert!(!view.is_loading());
    assert_eq!(view.core().center(), None);
    assert!(view.core().rooms.is_empty());
}

#[tokio::test]
async fn unknown_room_renders_blank() {
    let config = ViewerConfig { room_id: 9999, ..config() };
    let mut view = MapView::new(zone_store(), Handle::current(), &config);
    assert_eq!(view.next_load().await, vec![Action::RenderNeeded]);

    let mut list = DrawList::new();
    view.render(&mut list);
    assert!(list.commands.is_empty());
}

#[tokio::test]
async fn next_load_without_pending_load_returns_immediately() {
    let mut view = MapView::new(zone_store(), Handle::current(), &config());
    view.next_load().await;
    assert!(view.next_load().await.is_empty());
}

#[tokio::test]
async fn click_recenters_and_clears_current_room() {
    let mut view = MapView::new(zone_store(), Handle::current(), &config());
    view.next_load().await;

    let actions = view.on_pointer_down(Point::new(60.0, 50.0), Button::Primary);
    let center = Coordinate3D::new(100, 0, 0);
    assert_eq!(actions, vec![Action::CenterChanged(center), Action::RenderNeeded]);
    assert_eq!(view.core().center(), Some(center));
    assert!(view.core().current_room().is_none());
}

#[tokio::test]
async fn reload_keeps_center_override() {
    let store = zone_store();
    let mut view = MapView::new(store.clone(), Handle::current(), &config());
    view.next_load().await;
    view.on_pointer_down(Point::new(60.0, 50.0), Button::Primary);

    view.reload();
    assert!(view.is_loading());
    assert_eq!(view.next_load().await, vec![Action::RenderNeeded]);
    assert_eq!(view.core().current_room().map(|r| r.id), Some(1170));
    assert_eq!(view.core().center(), Some(Coordinate3D::new(100, 0, 0)));
    // Two queries per load.
    assert_eq!(store.call_count(), 4);
}

#[tokio::test]
async fn panicked_load_does_not_leave_view_loading() {
    let mut view = MapView::new(Arc::new(PanickingStore), Handle::current(), &config());
    while view.is_loading() {
        view.next_load().await;
    }
    assert_eq!(view.core().center(), None);
}

#[tokio::test]
async fn resize_moves_projection_midpoint() {
    let mut view = MapView::new(zone_store(), Handle::current(), &config());
    view.next_load().await;
    view.set_viewport(200.0, 100.0);

    let mut list = DrawList::new();
    view.render(&mut list);
    // Current room sits at the new midpoint.
    let Some(DrawCommand::FillOval { rect, .. }) = list.commands.last() else {
        panic!("expected the current-room marker last");
    };
    assert!((rect.mid().x - 100.0).abs() < f64::EPSILON);
    assert!((rect.mid().y - 50.0).abs() < f64::EPSILON);
}
