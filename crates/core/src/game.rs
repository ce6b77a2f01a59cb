//! Game module - the complete play session
//!
//! Ties together the board, the active piece and the random source. Handles
//! gravity, player movement and rotation, freezing, line clears and the game
//! lifecycle. Every operation is total: an illegal move or rotation leaves the
//! state untouched and reports `false`, never an error. Once the game is over
//! every mutating operation is a no-op.

use log::{debug, info, trace};
use rand::rngs::StdRng;

use crate::board::Board;
use crate::piece::Piece;
use crate::pieces::Mask;
use crate::rng::{self, RandomSource};
use crate::snapshot::{ActiveSnapshot, RenderSnapshot};
use crate::types::GameAction;

/// Outcome of freezing the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezeEvent {
    pub lines_cleared: u32,
    /// Points added to the score (`lines_cleared²`)
    pub points: u32,
    /// The replacement piece could not be placed
    pub game_over: bool,
}

/// Points awarded for clearing `lines` rows in a single freeze
pub fn line_clear_points(lines: u32) -> u32 {
    lines.saturating_mul(lines)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    active: Piece,
    score: u32,
    game_over: bool,
    source: R,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self::with_source(width, height, rng::seeded(seed))
    }

    /// Create a new game seeded from OS entropy
    pub fn from_entropy(width: usize, height: usize) -> Self {
        Self::with_source(width, height, rng::from_entropy())
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game on an empty board drawing pieces from `source`
    pub fn with_source(width: usize, height: usize, source: R) -> Self {
        Self::with_board(Board::new(width, height), source)
    }

    /// Create a game on a prepared board.
    ///
    /// The first piece is spawned immediately; if it does not fit the game
    /// starts (and stays) over.
    pub fn with_board(board: Board, mut source: R) -> Self {
        let active = Piece::spawn(&mut source, board.width());
        let mut game = Self {
            board,
            active,
            score: 0,
            game_over: false,
            source,
        };
        game.game_over = !game.active_fits();
        info!(
            "new game {}x{}, first piece {}",
            game.board.width(),
            game.board.height(),
            game.active.kind().as_str()
        );
        if game.game_over {
            info!("game over at first spawn");
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Check whether `image` fits with its origin at `(x, y)`.
    ///
    /// Columns must stay inside `[0, width)` and rows below `height`; rows
    /// above the top edge are unconstrained.
    pub fn is_valid_placement(&self, image: &Mask, x: i32, y: i32) -> bool {
        self.board.can_place(image, x, y)
    }

    fn active_fits(&self) -> bool {
        self.is_valid_placement(&self.active.image(), self.active.x(), self.active.y())
    }

    /// Gravity: move the active piece one row down, freezing it if it cannot go.
    ///
    /// Returns true if the piece moved.
    pub fn step_gravity(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let (x, y) = (self.active.x(), self.active.y());
        self.active.set_position(x, y + 1);
        if self.active_fits() {
            return true;
        }

        self.active.set_position(x, y);
        self.freeze();
        false
    }

    /// Driver gravity tick
    pub fn tick(&mut self) -> bool {
        self.step_gravity()
    }

    /// Player drop: one row down, identical to a gravity step
    pub fn soft_drop(&mut self) -> bool {
        self.step_gravity()
    }

    /// Commit the active piece to the board, clear lines and spawn the next one.
    pub fn freeze(&mut self) -> Option<FreezeEvent> {
        if self.game_over {
            return None;
        }

        let frozen = self.active;
        self.board.lock_cells(frozen.cells(), frozen.color());

        let score_before = self.score;
        let lines_cleared = self.clear_lines();

        self.active = Piece::spawn(&mut self.source, self.board.width());
        self.game_over = !self.active_fits();

        let event = FreezeEvent {
            lines_cleared,
            points: self.score - score_before,
            game_over: self.game_over,
        };
        debug!(
            "froze {} at ({}, {}), cleared {}, next {}",
            frozen.kind().as_str(),
            frozen.x(),
            frozen.y(),
            lines_cleared,
            self.active.kind().as_str()
        );
        if self.game_over {
            info!("game over, final score {}", self.score);
        }
        Some(event)
    }

    /// Remove every complete row and score `lines²`.
    ///
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let lines = self.board.clear_full_rows() as u32;
        if lines > 0 {
            self.score = self.score.saturating_add(line_clear_points(lines));
            debug!("cleared {} lines, score {}", lines, self.score);
        }
        lines
    }

    /// Shift the active piece horizontally by `dx` columns if the result fits
    pub fn move_piece(&mut self, dx: i32) -> bool {
        if self.game_over {
            return false;
        }

        let x = self.active.x() + dx;
        if !self.is_valid_placement(&self.active.image(), x, self.active.y()) {
            return false;
        }
        self.active.set_position(x, self.active.y());
        true
    }

    /// Rotate the active piece clockwise in place; no wall kicks
    pub fn rotate_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let saved = self.active.rotation();
        self.active.advance_rotation();
        if self.active_fits() {
            return true;
        }

        self.active.set_rotation(saved);
        false
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        trace!("action {}", action.as_str());
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate_piece(),
        }
    }

    /// Write the render projection into `out`, reusing its grid allocation
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(&self.active));
        out.score = self.score;
        out.game_over = self.game_over;
    }

    /// Read-only projection for the renderer
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let mut s = RenderSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;
    use crate::types::{Cell, ShapeKind, PALETTE};

    /// Script picks so that every spawn is `kind` painted with `PALETTE[color]`
    fn only(kind: ShapeKind, color: usize) -> SequenceSource {
        let idx = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
        SequenceSource::new(vec![idx, color])
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(10, 20, 12345);
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!((game.active().x(), game.active().y()), (3, 0));
        assert_eq!(game.active().rotation(), 0);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = Game::new(10, 20, 99);
        let mut b = Game::new(10, 20, 99);
        for _ in 0..200 {
            a.tick();
            b.tick();
            assert_eq!(a.active(), b.active());
        }
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_move_piece() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::O, 0));
        assert!(game.move_piece(-1));
        assert_eq!(game.active().x(), 2);
        assert!(game.move_piece(2));
        assert_eq!(game.active().x(), 4);
    }

    #[test]
    fn test_move_piece_into_wall_is_noop() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::O, 0));
        assert!(!game.move_piece(-4));
        assert_eq!(game.active().x(), 3);
        // O is two wide: column 8 is the last legal origin.
        assert!(game.move_piece(5));
        assert!(!game.move_piece(1));
        assert_eq!(game.active().x(), 8);
    }

    #[test]
    fn test_move_piece_blocked_by_cell() {
        let mut board = Board::new(10, 20);
        board.set(2, 0, Cell::Filled(PALETTE[1]));
        let mut game = Game::with_board(board, only(ShapeKind::O, 0));
        assert!(!game.move_piece(-1));
        assert_eq!(game.active().x(), 3);
    }

    #[test]
    fn test_rotate_piece() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::T, 0));
        assert!(game.rotate_piece());
        assert_eq!(game.active().rotation(), 1);
    }

    #[test]
    fn test_rotate_rejected_at_floor() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::I, 0));
        // Horizontal I rests on the floor at row 19.
        for _ in 0..19 {
            assert!(game.step_gravity());
        }
        assert_eq!(game.active().y(), 19);
        assert!(!game.rotate_piece());
        assert_eq!(game.active().rotation(), 0);
    }

    #[test]
    fn test_rotate_rejected_at_right_wall() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::I, 0));
        assert!(game.rotate_piece());
        // Vertical I can reach column 9.
        assert!(game.move_piece(6));
        // Horizontal I at column 9 would poke through the wall.
        assert!(!game.rotate_piece());
        assert_eq!(game.active().rotation(), 1);
        assert_eq!(game.active().x(), 9);
    }

    #[test]
    fn test_step_gravity_moves_down() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::T, 0));
        assert!(game.step_gravity());
        assert_eq!(game.active().y(), 1);
        assert!(game.soft_drop());
        assert_eq!(game.active().y(), 2);
        assert!(game.apply_action(GameAction::SoftDrop));
        assert_eq!(game.active().y(), 3);
    }

    #[test]
    fn test_freeze_writes_color_and_spawns() {
        let mut game = Game::with_source(10, 20, SequenceSource::new(vec![1, 4, 4, 0]));
        for _ in 0..5 {
            assert!(game.step_gravity());
        }
        let frozen = *game.active();
        assert_eq!(frozen.kind(), ShapeKind::O);

        let event = game.freeze().unwrap();
        assert_eq!(event.lines_cleared, 0);
        assert_eq!(event.points, 0);
        assert!(!event.game_over);

        for (x, y) in frozen.cells() {
            assert_eq!(game.board().get(x, y), Some(Cell::Filled(PALETTE[4])));
        }
        assert_eq!(game.active().kind(), ShapeKind::T);
        assert_eq!(game.active().color(), PALETTE[0]);
        assert_eq!((game.active().x(), game.active().y()), (3, 0));
    }

    #[test]
    fn test_freeze_at_spawn_ends_game() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::O, 0));
        let event = game.freeze().unwrap();
        assert!(event.game_over);
        assert!(game.game_over());
        assert_eq!(game.freeze(), None);
    }

    #[test]
    fn test_clear_lines_scoring() {
        for lines in 0..=4u32 {
            let mut board = Board::new(10, 20);
            for y in 0..lines as i32 {
                board.fill_row_except(19 - y, &[], PALETTE[0]);
            }
            let mut game = Game::with_board(board, only(ShapeKind::O, 0));
            assert_eq!(game.clear_lines(), lines);
            assert_eq!(game.score(), lines * lines);
            assert_eq!(game.board().filled_count(), 0);
        }
    }

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 1);
        assert_eq!(line_clear_points(2), 4);
        assert_eq!(line_clear_points(3), 9);
        assert_eq!(line_clear_points(4), 16);
    }

    #[test]
    fn test_blocked_first_spawn_is_game_over() {
        let mut board = Board::new(10, 20);
        board.fill_row_except(0, &[], PALETTE[0]);
        let game = Game::with_board(board, only(ShapeKind::I, 0));
        assert!(game.game_over());
    }

    #[test]
    fn test_too_narrow_board_is_game_over() {
        let game = Game::with_source(3, 20, only(ShapeKind::I, 0));
        assert!(game.game_over());
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut game = Game::with_source(10, 20, only(ShapeKind::L, 3));
        game.rotate_piece();
        let snap = game.render_snapshot();
        assert_eq!((snap.width, snap.height), (10, 20));
        assert_eq!(snap.grid.len(), 200);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, ShapeKind::L);
        assert_eq!(active.rotation, 1);
        assert_eq!(active.color, PALETTE[3]);
        assert_eq!(active.cells, game.active().cells());
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let game = Game::new(10, 20, 1);
        let mut snap = RenderSnapshot::default();
        game.snapshot_into(&mut snap);
        let first = snap.clone();
        game.snapshot_into(&mut snap);
        assert_eq!(snap, first);
    }
}
