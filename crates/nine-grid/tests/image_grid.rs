//! Tests for the ready-made image provider driven through a grid.

use nine_grid::image::{ImageCellRole, ImageGridProvider};
use nine_grid::{GridConfig, GridMode, NineGrid, Rect, Size};

fn sources(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("https://example.com/{i}.jpg")).collect()
}

fn grid(provider: ImageGridProvider) -> NineGrid<ImageGridProvider> {
    let mut grid = NineGrid::new(GridConfig::new(3, 9, 0.0).unwrap());
    grid.attach(provider);
    grid
}

#[test]
fn test_overlay_label_shows_hidden_count() {
    let mut grid = grid(ImageGridProvider::new(sources(12)));
    let size = grid.measure_available(Size::new(300.0, 1000.0));
    grid.layout(size);

    let overlay = grid.overlay_slot().unwrap();
    let cell = grid.slots().get(overlay).unwrap().visual();
    assert_eq!(cell.role(), ImageCellRole::Overlay);
    assert_eq!(cell.label(), Some("+4"));
    assert_eq!(cell.rect(), Some(Rect::new(200.0, 200.0, 100.0, 100.0)));
    assert_eq!(cell.source(), None);
}

#[test]
fn test_layout_queues_one_request_per_visible_image() {
    let mut grid = grid(ImageGridProvider::new(sources(12)));
    let size = grid.measure_available(Size::new(300.0, 1000.0));
    grid.layout(size);
    grid.layout(size);

    let requests = grid.provider().unwrap().requests().drain();
    assert_eq!(requests.len(), 9);
    assert_eq!(requests[0].source, "https://example.com/0.jpg");
    assert_eq!(requests[8].position, 8);
    assert!(requests.iter().all(|r| r.target == Size::square(100.0)));
}

#[test]
fn test_requests_reach_a_loader_thread() {
    let mut grid = grid(ImageGridProvider::new(sources(3)));
    let receiver = grid.provider().unwrap().requests().receiver();

    let size = grid.measure_available(Size::new(300.0, 1000.0));
    grid.layout(size);

    let loader = std::thread::spawn(move || {
        receiver
            .try_iter()
            .map(|request| request.position)
            .collect::<Vec<_>>()
    });
    assert_eq!(loader.join().unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_overlay_can_be_disabled() {
    let grid = grid(ImageGridProvider::new(sources(12)).with_overlay(false));
    assert_eq!(grid.slot_count(), 9);
    assert!(grid.overlay_slot().is_none());
}

#[test]
fn test_single_image_uses_aspect_ratio() {
    let mut grid = grid(ImageGridProvider::new(sources(1)).with_single_aspect_ratio(1.5));
    assert_eq!(grid.mode(), GridMode::Single);

    let size = grid.measure_available(Size::new(300.0, 1000.0));
    assert_eq!(size, Size::new(300.0, 200.0));
    grid.layout(size);

    let cell = grid.slots().at(0).unwrap().visual();
    assert_eq!(cell.rect(), Some(Rect::new(0.0, 0.0, 300.0, 200.0)));
    assert_eq!(cell.source(), Some("https://example.com/0.jpg"));
    assert_eq!(grid.provider().unwrap().requests().pending(), 1);
}

#[test]
fn test_resize_requests_images_at_new_size() {
    let mut grid = grid(ImageGridProvider::new(sources(4)));
    let size = grid.measure_available(Size::new(300.0, 1000.0));
    grid.layout(size);
    let first = grid.provider().unwrap().requests().drain();
    assert!(first.iter().all(|r| r.target == Size::square(100.0)));

    let size = grid.measure_available(Size::new(600.0, 1000.0));
    grid.layout(size);
    let resized = grid.provider().unwrap().requests().drain();
    assert_eq!(resized.len(), 4);
    assert!(resized.iter().all(|r| r.target == Size::square(200.0)));
    assert_eq!(
        grid.slots().at(3).unwrap().visual().request(),
        Some(resized[3].id)
    );

    // Same width again: nothing new to load.
    let size = grid.measure_available(Size::new(600.0, 1000.0));
    grid.layout(size);
    assert_eq!(grid.provider().unwrap().requests().pending(), 0);
}
