use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::piece::Piece;

/// Color id of a frozen cell, in `1..=6`.
///
/// Colors are purely cosmetic: spawns draw them independently of the piece
/// kind, and the grid remembers them only so the presentation layer can paint
/// frozen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorId(u8);

impl ColorId {
    /// Number of colors in the palette.
    pub const COUNT: u8 = 6;

    /// Creates a color id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is outside `1..=COUNT`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(1 <= id && id <= Self::COUNT);
        Self(id)
    }

    /// The raw id, in `1..=COUNT`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Distribution<ColorId> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorId {
        ColorId(rng.random_range(1..=ColorId::COUNT))
    }
}

/// A single cell of the grid: empty, or frozen with a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell (no frozen piece).
    #[default]
    Empty,
    /// Cell frozen by a piece of the given color.
    Filled(ColorId),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The frozen color, if any.
    #[must_use]
    pub fn color(self) -> Option<ColorId> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(color),
        }
    }
}

/// The grid of frozen cells.
///
/// Dimensions are fixed at construction. Rows are indexed top to bottom,
/// columns left to right; piece coordinates are signed and validated through
/// [`Board::intersects`], so the grid itself never sees an out-of-range
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty grid of the given dimensions.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell at column `x`, row `y`.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Checks whether the piece placement is invalid: a cell past the bottom
    /// edge, past either side, or overlapping an occupied cell. Rows above
    /// the top edge are not a violation - a piece may legally extend above
    /// the board while it settles in near the top.
    #[must_use]
    pub fn intersects(&self, piece: Piece) -> bool {
        #[expect(clippy::cast_possible_wrap)]
        let (width, height) = (self.width as i32, self.height as i32);
        piece
            .occupied_cells()
            .any(|(x, y)| y > height - 1 || x > width - 1 || x < 0 || self.is_occupied(x, y))
    }

    fn is_occupied(&self, x: i32, y: i32) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        !self.rows[y][x].is_empty()
    }

    /// Checks whether every cell of the piece lies inside the grid.
    #[must_use]
    pub fn contains_piece(&self, piece: Piece) -> bool {
        piece.occupied_cells().all(|(x, y)| {
            matches!(
                (usize::try_from(x), usize::try_from(y)),
                (Ok(x), Ok(y)) if x < self.width && y < self.height
            )
        })
    }

    /// Writes the piece's color into every grid cell it covers. Cells outside
    /// the grid (above the top edge) are dropped.
    pub fn fill_piece(&mut self, piece: Piece) {
        for (x, y) in piece.occupied_cells() {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                && x < self.width
                && y < self.height
            {
                self.rows[y][x] = Cell::Filled(piece.color());
            }
        }
    }

    /// Removes every full row and pulls the rows above it down by one,
    /// returning the number of rows cleared. The caller scores the clear.
    ///
    /// Row 0 is never eligible and never moves, and vacated rows are not
    /// zeroed: the shift copies rows `1..i` into `2..=i` and leaves rows 0
    /// and 1 untouched.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut lines = 0;
        for i in 1..self.height {
            if self.rows[i].iter().any(|cell| cell.is_empty()) {
                continue;
            }
            lines += 1;
            for k in (2..=i).rev() {
                let (above, below) = self.rows.split_at_mut(k);
                below[0].copy_from_slice(&above[k - 1]);
            }
        }
        lines
    }

    /// Creates a `Board` from ASCII art for testing.
    ///
    /// `#` is an occupied cell (color 1), `.` an empty cell. Dimensions come
    /// from the art: one line per row, every line the same width.
    ///
    /// # Panics
    ///
    /// Panics if the art is empty or the rows have uneven widths.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<Vec<Cell>> = art
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| *c == '#' || *c == '.')
                    .map(|c| {
                        if c == '#' {
                            Cell::Filled(ColorId::new(1))
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        assert!(!rows.is_empty(), "board art must contain at least one row");
        let width = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == width),
            "every row must have the same width"
        );
        Self {
            height: rows.len(),
            width,
            rows,
        }
    }
}
