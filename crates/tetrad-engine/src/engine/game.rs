use crate::core::{board::Board, piece::Piece};

use super::piece_stream::PieceStream;

/// Lifecycle of a game.
///
/// The transition is one-way: [`GameState::GameOver`] is reached only when a
/// fresh spawn collides with the stack, and nothing leaves it short of
/// constructing a new [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// Pieces are falling.
    Active,
    /// A fresh spawn collided with the stack. Terminal.
    GameOver,
}

/// The piece/board state machine: grid, active piece, score, and lifecycle.
///
/// Every movement operation validates the tentative placement with
/// [`Board::intersects`] and silently keeps the previous placement when the
/// move is blocked; none of them report errors. Mutators are not disabled
/// after game over - callers are expected to check [`Game::state`] before
/// driving input.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    figure: Option<Piece>,
    pieces: PieceStream,
    state: GameState,
    score: usize,
    level: usize,
}

impl Game {
    /// Creates a game with an empty grid, score 0, level 1, and no active
    /// piece (call [`spawn_piece`](Game::spawn_piece) to start). The piece
    /// stream is seeded from the OS.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_piece_stream(height, width, PieceStream::from_os_rng())
    }

    /// Same as [`new`](Game::new) with an explicit piece stream, for
    /// deterministic sequences.
    #[must_use]
    pub fn with_piece_stream(height: usize, width: usize, pieces: PieceStream) -> Self {
        Self {
            board: Board::new(height, width),
            figure: None,
            pieces,
            state: GameState::Active,
            score: 0,
            level: 1,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active piece, or `None` before the first spawn.
    #[must_use]
    pub fn figure(&self) -> Option<Piece> {
        self.figure
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Score accumulated from line clears (lines cleared per freeze, squared).
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// The difficulty level. The core only stores it; the enclosing frame
    /// loop uses it to pace gravity.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn set_level(&mut self, level: usize) {
        self.level = level;
    }

    /// Replaces the active piece with a fresh random one at the spawn anchor.
    ///
    /// No collision check happens here; [`freeze`](Game::freeze) checks the
    /// spawned piece and ends the game when it collides.
    pub fn spawn_piece(&mut self) {
        let (kind, color) = self.pieces.next_piece();
        self.figure = Some(Piece::spawn(kind, color));
    }

    /// Moves the active piece `dx` columns sideways; a blocked move leaves
    /// the piece where it was.
    pub fn move_horizontal(&mut self, dx: i32) {
        let Some(figure) = self.figure else { return };
        let moved = figure.moved_by(dx, 0);
        if !self.board.intersects(moved) {
            self.figure = Some(moved);
        }
    }

    /// Advances the active piece to its next rotation state; a blocked
    /// rotation leaves the current state.
    pub fn rotate(&mut self) {
        let Some(figure) = self.figure else { return };
        let rotated = figure.rotated();
        if !self.board.intersects(rotated) {
            self.figure = Some(rotated);
        }
    }

    /// Moves the active piece down one row, freezing it when the row below
    /// is blocked.
    pub fn soft_drop(&mut self) {
        let Some(figure) = self.figure else { return };
        let dropped = figure.moved_by(0, 1);
        if self.board.intersects(dropped) {
            self.freeze();
        } else {
            self.figure = Some(dropped);
        }
    }

    /// Drops the active piece straight down to the lowest legal row and
    /// freezes it there.
    pub fn hard_drop(&mut self) {
        let Some(mut figure) = self.figure else { return };
        while !self.board.intersects(figure) {
            figure = figure.moved_by(0, 1);
        }
        self.figure = Some(figure.moved_by(0, -1));
        self.freeze();
    }

    /// Commits the active piece into the grid, clears and scores full rows,
    /// and spawns the next piece. A spawn that immediately collides ends the
    /// game.
    fn freeze(&mut self) {
        let Some(figure) = self.figure else { return };
        self.board.fill_piece(figure);
        let lines = self.board.clear_full_rows();
        self.score += lines * lines;
        self.spawn_piece();
        if let Some(figure) = self.figure
            && self.board.intersects(figure)
        {
            self.state = GameState::GameOver;
        }
    }
}
