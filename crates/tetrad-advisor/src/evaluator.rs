use tetrad_engine::Board;

use crate::board_metrics::BoardMetrics;

// Fixed tuning weights. All three terms penalize, so scores are negative for
// any non-empty board and higher (closer to zero) is better.
const AGGREGATE_HEIGHT_WEIGHT: f32 = -0.5;
const HOLES_WEIGHT: f32 = -0.7;
const BUMPINESS_WEIGHT: f32 = -0.3;

/// Scores a fully settled grid: a weighted sum of aggregate column height,
/// hole count, and surface bumpiness. An empty board scores 0.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn evaluate_board(board: &Board) -> f32 {
    let metrics = BoardMetrics::from_board(board);
    AGGREGATE_HEIGHT_WEIGHT * metrics.aggregate_height() as f32
        + HOLES_WEIGHT * metrics.holes() as f32
        + BUMPINESS_WEIGHT * metrics.bumpiness() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate_board(&Board::new(20, 10)), 0.0);
    }

    #[test]
    fn test_score_combines_the_three_terms() {
        let board = Board::from_ascii(
            "
            ....
            #...
            ..#.
            ##..
            ",
        );
        // Heights [3, 1, 2, 0]: aggregate 6, holes 2 (under the tops of
        // columns 0 and 2), bumpiness 2+1+2 = 5.
        let expected = -0.5 * 6.0 + -0.7 * 2.0 + -0.3 * 5.0;
        let score = evaluate_board(&board);
        assert!((score - expected).abs() < 1e-6, "{score} vs {expected}");
    }

    #[test]
    fn test_gapped_stack_scores_below_contiguous_stack() {
        // Both columns reach height 3; the right board hides a gap at the
        // bottom cell.
        let contiguous = Board::from_ascii(
            "
            ....
            #...
            #...
            #...
            ",
        );
        let gapped = Board::from_ascii(
            "
            ....
            #...
            #...
            ....
            ",
        );
        assert!(evaluate_board(&gapped) < evaluate_board(&contiguous));
    }
}
