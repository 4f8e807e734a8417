use tetrad_engine::Board;

/// Column-level measurements of a settled grid.
///
/// Everything the heuristic consumes comes from one top-down scan per column:
///
/// - **Column height**: distance from the board top to the column's topmost
///   occupied cell, or 0 for an empty column.
/// - **Hole**: an empty cell with at least one occupied cell above it in the
///   same column.
/// - **Bumpiness**: sum of absolute height differences between horizontally
///   adjacent columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMetrics {
    column_heights: Vec<u32>,
    holes: u32,
}

impl BoardMetrics {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut column_heights = vec![0_u32; board.width()];
        let mut holes = 0;
        for (x, height) in column_heights.iter_mut().enumerate() {
            let mut top_found = false;
            for y in 0..board.height() {
                if board.cell(x, y).is_empty() {
                    if top_found {
                        holes += 1;
                    }
                } else if !top_found {
                    *height = u32::try_from(board.height() - y).unwrap();
                    top_found = true;
                }
            }
        }
        Self {
            column_heights,
            holes,
        }
    }

    #[must_use]
    pub fn column_heights(&self) -> &[u32] {
        &self.column_heights
    }

    /// Sum of all column heights.
    #[must_use]
    pub fn aggregate_height(&self) -> u32 {
        self.column_heights.iter().sum()
    }

    /// Count of empty cells below their column's topmost occupied cell.
    #[must_use]
    pub fn holes(&self) -> u32 {
        self.holes
    }

    /// Sum of absolute height differences between adjacent columns.
    #[must_use]
    pub fn bumpiness(&self) -> u32 {
        self.column_heights
            .windows(2)
            .map(|pair| pair[0].abs_diff(pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_measures_zero() {
        let metrics = BoardMetrics::from_board(&Board::new(20, 10));
        assert_eq!(metrics.column_heights(), &[0; 10]);
        assert_eq!(metrics.aggregate_height(), 0);
        assert_eq!(metrics.holes(), 0);
        assert_eq!(metrics.bumpiness(), 0);
    }

    #[test]
    fn test_column_heights_measure_from_the_top_cell() {
        let metrics = BoardMetrics::from_board(&Board::from_ascii(
            "
            ....
            #...
            #.#.
            ####
            ",
        ));
        assert_eq!(metrics.column_heights(), &[3, 1, 2, 1]);
        assert_eq!(metrics.aggregate_height(), 7);
    }

    #[test]
    fn test_holes_are_empty_cells_below_the_top() {
        let metrics = BoardMetrics::from_board(&Board::from_ascii(
            "
            #...
            ..#.
            .#..
            #.#.
            ",
        ));
        // Column 0: top at row 0, empty rows 1-2 below it = 2 holes.
        // Column 1: top at row 2, empty row 3 below it = 1 hole.
        // Column 2: top at row 1, empty row 2 below it = 1 hole.
        // Column 3: empty, no holes.
        assert_eq!(metrics.holes(), 4);
    }

    #[test]
    fn test_contiguous_stack_has_no_holes() {
        let metrics = BoardMetrics::from_board(&Board::from_ascii(
            "
            ....
            #...
            #...
            #...
            ",
        ));
        assert_eq!(metrics.holes(), 0);
        assert_eq!(metrics.column_heights(), &[3, 0, 0, 0]);
    }

    #[test]
    fn test_bumpiness_sums_adjacent_differences() {
        let metrics = BoardMetrics::from_board(&Board::from_ascii(
            "
            #...
            #..#
            ##.#
            ####
            ",
        ));
        // Heights are [4, 2, 1, 3]: |4-2| + |2-1| + |1-3| = 5.
        assert_eq!(metrics.column_heights(), &[4, 2, 1, 3]);
        assert_eq!(metrics.bumpiness(), 5);
    }
}
