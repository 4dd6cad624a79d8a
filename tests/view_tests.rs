//! View tests - layout, pointer hit-testing, and frame encoding

use tui_life::core::Universe;
use tui_life::term::{encode_changed_rows_into, HudState, LifeView, Viewport};

fn hud() -> HudState {
    HudState {
        cursor: (0, 0),
        paused: true,
        interval_ms: 120,
    }
}

#[test]
fn test_layout_fits_default_grid_in_large_viewport() {
    let universe = Universe::new(64, 32).unwrap();
    let view = LifeView::default();
    let layout = view.layout(&universe, Viewport::new(200, 60));

    assert_eq!(layout.cols, 64);
    assert_eq!(layout.rows, 32);
    // Centered: equal margins on both sides of the bordered frame.
    assert_eq!(layout.origin_x - 1, (200 - (64 * 2 + 2)) / 2);
    assert_eq!(layout.origin_y - 1, (60 - (32 + 2)) / 2);
}

#[test]
fn test_every_cell_is_hit_testable() {
    let universe = Universe::new(10, 6).unwrap();
    let view = LifeView::default();
    let viewport = Viewport::new(80, 24);
    let layout = view.layout(&universe, viewport);

    for row in 0..6u32 {
        for col in 0..10u32 {
            let x = layout.origin_x + (col as u16) * layout.cell_w;
            let y = layout.origin_y + row as u16;
            assert_eq!(layout.cell_at(x, y), Some((row, col)));
        }
    }
}

#[test]
fn test_click_outside_grid_does_not_map() {
    let universe = Universe::new(10, 6).unwrap();
    let view = LifeView::default();
    let layout = view.layout(&universe, Viewport::new(80, 24));

    assert_eq!(layout.cell_at(0, 0), None);
    assert_eq!(
        layout.cell_at(layout.origin_x, layout.origin_y + layout.rows),
        None
    );
}

#[test]
fn test_render_reflects_engine_buffer() {
    let mut universe = Universe::new(10, 6).unwrap();
    universe.set_cells_alive(&[(0, 0), (5, 9), (2, 4)]).unwrap();

    let view = LifeView::default();
    let viewport = Viewport::new(80, 24);
    let layout = view.layout(&universe, viewport);
    let fb = view.render(&universe, &hud(), viewport);

    for &(row, col) in &[(0u32, 0u32), (5, 9), (2, 4)] {
        let x = layout.origin_x + (col as u16) * layout.cell_w;
        let y = layout.origin_y + row as u16;
        assert_eq!(fb.get(x, y).map(|cell| cell.ch), Some('█'), "({row}, {col})");
    }
}

#[test]
fn test_toggle_shows_up_in_next_frame() {
    let mut universe = Universe::new(10, 6).unwrap();
    let view = LifeView::default();
    let viewport = Viewport::new(80, 24);
    let layout = view.layout(&universe, viewport);

    let before = view.render(&universe, &hud(), viewport);
    universe.toggle(3, 3).unwrap();
    let after = view.render(&universe, &hud(), viewport);

    // Exactly the toggled cell's row changes; the frame diff is non-empty.
    let mut out = Vec::new();
    encode_changed_rows_into(&before, &after, &mut out).unwrap();
    assert!(!out.is_empty());

    let x = layout.origin_x + 3 * layout.cell_w;
    let y = layout.origin_y + 3;
    assert_eq!(before.get(x, y).map(|cell| cell.ch), Some('·'));
    assert_eq!(after.get(x, y).map(|cell| cell.ch), Some('█'));
}

#[test]
fn test_identical_generations_encode_empty_diff() {
    let universe = Universe::new(10, 6).unwrap();
    let view = LifeView::default();
    let viewport = Viewport::new(80, 24);

    let a = view.render(&universe, &hud(), viewport);
    let b = view.render(&universe, &hud(), viewport);

    let mut out = Vec::new();
    encode_changed_rows_into(&a, &b, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let universe = Universe::new(64, 32).unwrap();
    let view = LifeView::default();
    // Smaller than the grid: everything clips, nothing panics.
    let fb = view.render(&universe, &hud(), Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}

#[test]
fn test_very_wide_grid_clips_to_viewport() {
    // Wide enough that naive u16 column arithmetic would overflow.
    let universe = Universe::new(40_000, 1).unwrap();
    let view = LifeView::default();
    let fb = view.render(&universe, &hud(), Viewport::new(80, 24));
    assert_eq!(fb.width(), 80);
}

#[test]
fn test_very_tall_grid_clips_to_viewport() {
    let universe = Universe::new(1, 40_000).unwrap();
    let view = LifeView::default();
    let fb = view.render(&universe, &hud(), Viewport::new(80, 24));
    assert_eq!(fb.height(), 24);
}

#[test]
fn test_wide_grid_cursor_far_right_does_not_panic() {
    let universe = Universe::new(40_000, 2).unwrap();
    let view = LifeView::default();
    let far_cursor = HudState {
        cursor: (1, 39_999),
        paused: true,
        interval_ms: 120,
    };
    let fb = view.render(&universe, &far_cursor, Viewport::new(80, 24));
    assert_eq!(fb.width(), 80);
}
