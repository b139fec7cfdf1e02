use blockfall::core::{GameState, Grid};
use blockfall::term::{AnchorY, GameView, Viewport};
use blockfall::types::{Point, ShapeKind};

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the board is 20x20, plus border => 22x22.
    let vp = Viewport::new(22, 22);
    let fb = view.render(&GameState::new(), vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let grid = Grid::new().with_cells([(Point::new(0, 19), Some(ShapeKind::I))]);
    let state = GameState::from_grid(grid);

    let fb = GameView::default().render(&state, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_falling_block_from_state() {
    let state = GameState::new().spawn(ShapeKind::T).after;
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&state, Viewport::new(22, 22));

    // T at anchor (4, 0): columns 4..=6 on row 0, column 5 on row 1.
    assert_eq!(&fb.row_text(1)[..], "│········██████······│");
    assert_eq!(&fb.row_text(2)[..], "│··········██········│");
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let grid = Grid::new()
        .with_cells((0..10).map(|x| (Point::new(x, 19), Some(ShapeKind::O))))
        .with_cells([(Point::new(3, 18), Some(ShapeKind::L))]);
    let state = GameState::from_grid(grid);

    let fb = GameView::default().render(&state, Viewport::new(60, 22));
    let text = screen_text(&fb);

    assert!(text.contains("CELLS"));
    assert!(text.contains("11"));
    assert!(text.contains("FULL ROWS"));
    assert!(text.contains("KEYS"));
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let state = GameState::new().spawn(ShapeKind::I).after;
    let fb = GameView::default().render(&state, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}
