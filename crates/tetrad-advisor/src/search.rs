use tetrad_engine::{Board, Game, Piece};

use crate::evaluator::evaluate_board;

/// One ranked placement of the active piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    /// Heuristic score of the board after the landing settles.
    pub score: f32,
    /// Anchor column of the placement.
    pub x: i32,
    /// Rotation state of the placement.
    pub rotation: u8,
    /// Landing row of the anchor after the hard-drop simulation.
    pub y: i32,
}

/// Ranks every legal placement of the game's active piece and returns the
/// best `top_n`, best first.
///
/// The live game is never modified - the search works entirely on copies. An
/// empty result is a valid outcome: no active piece, or no candidate lands
/// inside the grid.
#[must_use]
pub fn suggest(game: &Game, top_n: usize) -> Vec<Suggestion> {
    let Some(figure) = game.figure() else {
        return Vec::new();
    };
    suggest_placements(game.board(), figure, top_n)
}

/// Ranks every placement of `figure` on `board`, best first, at most `top_n`.
///
/// Candidates are enumerated rotation first, then anchor column over
/// `-2..=width`; each one is hard-drop simulated against `board` and scored
/// on a per-candidate grid copy. Placements that never enter the grid
/// (landing row above the top) or would write outside it are discarded. Ties
/// keep enumeration order.
#[must_use]
pub fn suggest_placements(board: &Board, figure: Piece, top_n: usize) -> Vec<Suggestion> {
    #[expect(clippy::cast_possible_wrap)]
    let width = board.width() as i32;

    let mut suggestions = Vec::new();
    for rotation in 0..figure.kind().rotation_count() {
        for x in -2..=width {
            let mut candidate = figure.with_rotation(rotation).moved_to(x, 0);
            while !board.intersects(candidate) {
                candidate = candidate.moved_by(0, 1);
            }
            candidate = candidate.moved_by(0, -1);
            // The column is blocked all the way up: unreachable placement.
            if candidate.y() < 0 {
                continue;
            }
            let Some(settled) = settle(board, candidate) else {
                continue;
            };
            suggestions.push(Suggestion {
                score: evaluate_board(&settled),
                x,
                rotation,
                y: candidate.y(),
            });
        }
    }

    // Stable sort: equal scores keep (rotation, x) enumeration order.
    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(top_n);
    suggestions
}

/// Writes the landed piece into a copy of the grid, or `None` when any cell
/// would fall outside it.
fn settle(board: &Board, piece: Piece) -> Option<Board> {
    if !board.contains_piece(piece) {
        return None;
    }
    let mut settled = board.clone();
    settled.fill_piece(piece);
    Some(settled)
}

#[cfg(test)]
mod tests {
    use tetrad_engine::{ColorId, PieceKind, PieceStream};

    use super::*;

    fn figure(kind: PieceKind) -> Piece {
        Piece::spawn(kind, ColorId::new(1))
    }

    #[test]
    fn test_no_active_piece_yields_no_suggestions() {
        let game = Game::with_piece_stream(20, 10, PieceStream::seeded(0));
        assert!(game.figure().is_none());
        assert!(suggest(&game, 3).is_empty());
    }

    #[test]
    fn test_square_on_an_empty_board() {
        let board = Board::new(20, 10);
        let suggestions = suggest_placements(&board, figure(PieceKind::O), usize::MAX);
        // One rotation state; anchors 0..=8 land inside the 10-wide grid.
        assert_eq!(suggestions.len(), 9);
        for suggestion in &suggestions {
            assert_eq!(suggestion.rotation, 0);
            assert_eq!(suggestion.y, 18);
        }
        // Flush wall placements add the least bumpiness and win; the left
        // wall comes first by enumeration order.
        assert_eq!(suggestions[0].x, 0);
        assert_eq!(suggestions[1].x, 8);
        // The interior ties keep ascending column order.
        let interior: Vec<i32> = suggestions[2..].iter().map(|s| s.x).collect();
        assert_eq!(interior, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_results_are_sorted_best_first() {
        let board = Board::new(20, 10);
        let suggestions = suggest_placements(&board, figure(PieceKind::L), usize::MAX);
        assert!(!suggestions.is_empty());
        for pair in suggestions.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_top_n_caps_the_result() {
        let board = Board::new(20, 10);
        assert_eq!(suggest_placements(&board, figure(PieceKind::T), 3).len(), 3);
        assert_eq!(suggest_placements(&board, figure(PieceKind::T), 1).len(), 1);
        assert!(suggest_placements(&board, figure(PieceKind::T), 0).is_empty());
    }

    #[test]
    fn test_suggest_leaves_the_game_untouched() {
        let mut game = Game::with_piece_stream(20, 10, PieceStream::seeded(5));
        game.spawn_piece();
        game.move_horizontal(2);
        game.soft_drop();
        let figure_before = game.figure();
        let board_before = game.board().clone();
        let _ = suggest(&game, 5);
        assert_eq!(game.figure(), figure_before);
        assert_eq!(*game.board(), board_before);
    }

    #[test]
    fn test_blocked_columns_yield_no_suggestions() {
        // Every column is occupied at the top row: every candidate intersects
        // at y = 0 and backs up above the board.
        let mut art = String::from("##########\n");
        for _ in 1..20 {
            art.push_str("..........\n");
        }
        let board = Board::from_ascii(&art);
        assert!(suggest_placements(&board, figure(PieceKind::O), 3).is_empty());
    }

    #[test]
    fn test_landing_row_respects_the_stack() {
        let mut art = String::new();
        for y in 0..20 {
            art.push_str(if y >= 16 {
                "##........\n"
            } else {
                "..........\n"
            });
        }
        let board = Board::from_ascii(&art);
        let suggestions = suggest_placements(&board, figure(PieceKind::O), usize::MAX);
        // Anchors over the stack land on top of it, the rest on the floor.
        assert_eq!(suggestions.len(), 9);
        for suggestion in &suggestions {
            let expected_y = if suggestion.x <= 1 { 14 } else { 18 };
            assert_eq!(suggestion.y, expected_y, "x = {}", suggestion.x);
        }
    }

    #[test]
    fn test_rotation_states_are_all_explored() {
        let board = Board::new(20, 10);
        let suggestions = suggest_placements(&board, figure(PieceKind::J), usize::MAX);
        for rotation in 0..PieceKind::J.rotation_count() {
            assert!(
                suggestions.iter().any(|s| s.rotation == rotation),
                "rotation {rotation} missing"
            );
        }
    }
}
