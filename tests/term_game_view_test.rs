use simple_tetris::core::{Game, SequenceSource};
use simple_tetris::term::{GameView, Viewport};
use simple_tetris::types::PALETTE;

fn game() -> Game<SequenceSource> {
    // O piece in the first palette color, every time.
    Game::with_source(10, 20, SequenceSource::new(vec![1, 0]))
}

#[test]
fn board_is_framed_and_centered() {
    let snap = game().render_snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(40, 22));

    // 22x22 frame centered in 40 columns.
    assert_eq!(fb.get(9, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(9, 21).unwrap().ch, '└');
    assert_eq!(fb.get(30, 21).unwrap().ch, '┘');
}

#[test]
fn active_piece_is_painted_in_its_color() {
    let snap = game().render_snapshot();
    let fb = GameView::new(1, 1).render(&snap, Viewport::new(12, 22));

    // Board origin is (1, 1); the O spawns at columns 3..=4, rows 0..=1.
    for (x, y) in [(4, 1), (5, 1), (4, 2), (5, 2)] {
        let glyph = fb.get(x, y).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, PALETTE[0]);
    }
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn side_panel_shows_score() {
    let mut g = game();
    for _ in 0..3 {
        g.tick();
    }
    let snap = g.render_snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));

    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.iter().any(|row| row.contains("SCORE")));
    assert!(text.iter().any(|row| row.contains("PIECE")));
    assert!(!text.iter().any(|row| row.contains("GAME OVER")));
}

#[test]
fn game_over_overlay() {
    let mut g = game();
    while !g.game_over() {
        g.tick();
    }
    let fb = GameView::default().render(&g.render_snapshot(), Viewport::new(60, 24));
    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.iter().any(|row| row.contains("GAME OVER")));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let snap = game().render_snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(3, 2));
    assert_eq!((fb.width(), fb.height()), (3, 2));
}
