//! Game logic and state management.
//!
//! - [`Game`] - the piece/board state machine (grid, active piece, score,
//!   lifecycle)
//! - [`GameState`] - the two-state lifecycle (active / game over)
//! - [`PieceStream`] - injectable randomness feeding spawns
//!
//! # Game flow
//!
//! 1. Construct a [`Game`] and call [`Game::spawn_piece`]
//! 2. The driver manipulates the active piece (move, rotate, drop)
//! 3. A blocked downward step freezes the piece: its cells are committed to
//!    the grid, full rows are cleared and scored, and the next piece spawns
//! 4. Repeat until a fresh spawn collides with the stack (game over)
//!
//! # Example
//!
//! ```
//! use tetrad_engine::{Game, PieceStream};
//!
//! let mut game = Game::with_piece_stream(20, 10, PieceStream::seeded(42));
//! game.spawn_piece();
//! game.move_horizontal(-1);
//! game.hard_drop();
//! assert!(game.state().is_active());
//! ```

pub use self::{game::*, piece_stream::*};

mod game;
mod piece_stream;
