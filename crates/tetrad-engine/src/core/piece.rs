use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::ColorId;

/// A falling piece: shape kind, color, rotation state, and anchor position.
///
/// The anchor is the top-left corner of the piece's 4×4 bounding box in board
/// coordinates. Coordinates are signed: the anchor may sit left of the board
/// so that shapes hugging the right of their bounding box can still reach the
/// leftmost columns, and rows above the board top are legal while a piece is
/// still settling in at spawn.
///
/// Pieces are immutable - movement and rotation operations return new `Piece`
/// values; [`Game`](crate::Game) decides whether a tentative piece is
/// committed.
///
/// # Example
///
/// ```
/// use tetrad_engine::{ColorId, Piece, PieceKind};
///
/// let piece = Piece::spawn(PieceKind::T, ColorId::new(1));
/// let moved = piece.moved_by(-1, 0);
/// let rotated = moved.rotated();
/// assert_eq!(rotated.x(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: ColorId,
    rotation: u8,
    x: i32,
    y: i32,
}

impl Piece {
    /// Fixed spawn anchor column. A literal constant, not derived from the
    /// board or piece width.
    pub const SPAWN_X: i32 = 3;
    /// Fixed spawn anchor row (the board top).
    pub const SPAWN_Y: i32 = 0;

    /// Creates a piece at the spawn anchor in its spawn orientation.
    #[must_use]
    pub fn spawn(kind: PieceKind, color: ColorId) -> Self {
        Self {
            kind,
            color,
            rotation: 0,
            x: Self::SPAWN_X,
            y: Self::SPAWN_Y,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn color(&self) -> ColorId {
        self.color
    }

    #[must_use]
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the piece translated by `(dx, dy)`.
    #[must_use]
    pub fn moved_by(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the piece with its anchor placed at `(x, y)`.
    #[must_use]
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Returns the piece advanced to its next rotation state, wrapping at the
    /// kind's state count.
    #[must_use]
    pub fn rotated(self) -> Self {
        self.with_rotation(self.rotation + 1)
    }

    /// Returns the piece in the given rotation state, normalized modulo the
    /// kind's state count.
    #[must_use]
    pub fn with_rotation(self, rotation: u8) -> Self {
        Self {
            rotation: rotation % self.kind.rotation_count(),
            ..self
        }
    }

    /// Board coordinates `(x, y)` of the four occupied cells at the current
    /// placement. Coordinates may be negative or past the board edges; the
    /// board decides what that means.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.kind
            .occupied_offsets(self.rotation)
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// Z-piece.
    Z = 1,
    /// S-piece.
    S = 2,
    /// J-piece.
    J = 3,
    /// L-piece.
    L = 4,
    /// T-piece.
    T = 5,
    /// O-piece (the square; a single rotation state).
    O = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::Z,
            2 => PieceKind::S,
            3 => PieceKind::J,
            4 => PieceKind::L,
            5 => PieceKind::T,
            _ => PieceKind::O,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// Number of distinct rotation states for this kind (1 for the O-piece,
    /// 2 or 4 for the others).
    #[must_use]
    pub fn rotation_count(self) -> u8 {
        u8::try_from(ROTATION_STATES[self as usize].len()).unwrap()
    }

    /// Cells occupied in the given rotation state, as row-major indices 0-15
    /// within the 4×4 bounding box (index = row * 4 + col). `rotation` is
    /// taken modulo the kind's rotation-state count.
    #[must_use]
    pub fn cell_indices(self, rotation: u8) -> [u8; 4] {
        let states = ROTATION_STATES[self as usize];
        states[rotation as usize % states.len()]
    }

    /// `(dx, dy)` offsets of the occupied cells within the bounding box.
    pub fn occupied_offsets(self, rotation: u8) -> impl Iterator<Item = (i32, i32)> {
        self.cell_indices(rotation)
            .into_iter()
            .map(|index| (i32::from(index % 4), i32::from(index / 4)))
    }
}

/// Rotation states for each piece kind.
///
/// Each state is the set of four occupied cells as row-major indices into the
/// 4×4 bounding box. State 0 is the spawn orientation; rotating advances
/// through the list in order and wraps.
const ROTATION_STATES: [&[[u8; 4]]; PieceKind::LEN] = [
    // I-piece
    &[[1, 5, 9, 13], [4, 5, 6, 7]],
    // Z-piece
    &[[4, 5, 9, 10], [2, 6, 5, 9]],
    // S-piece
    &[[6, 7, 9, 10], [1, 5, 6, 10]],
    // J-piece
    &[[1, 2, 5, 9], [0, 4, 5, 6], [1, 5, 9, 8], [4, 5, 6, 10]],
    // L-piece
    &[[1, 2, 6, 10], [5, 6, 7, 9], [2, 6, 10, 11], [3, 5, 6, 7]],
    // T-piece
    &[[1, 4, 5, 6], [1, 4, 5, 9], [4, 5, 6, 9], [1, 5, 6, 9]],
    // O-piece
    &[[0, 1, 4, 5]],
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL_KINDS: [PieceKind; PieceKind::LEN] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
        PieceKind::O,
    ];

    #[test]
    fn test_every_state_has_four_distinct_cells_in_bounds() {
        for kind in ALL_KINDS {
            for rotation in 0..kind.rotation_count() {
                let cells: HashSet<u8> = kind.cell_indices(rotation).into_iter().collect();
                assert_eq!(cells.len(), 4, "{kind:?} rotation {rotation}");
                for index in cells {
                    assert!(index < 16, "{kind:?} rotation {rotation} cell {index}");
                }
                for (dx, dy) in kind.occupied_offsets(rotation) {
                    assert!((0..4).contains(&dx));
                    assert!((0..4).contains(&dy));
                }
            }
        }
    }

    #[test]
    fn test_rotation_counts() {
        assert_eq!(PieceKind::I.rotation_count(), 2);
        assert_eq!(PieceKind::Z.rotation_count(), 2);
        assert_eq!(PieceKind::S.rotation_count(), 2);
        assert_eq!(PieceKind::J.rotation_count(), 4);
        assert_eq!(PieceKind::L.rotation_count(), 4);
        assert_eq!(PieceKind::T.rotation_count(), 4);
        assert_eq!(PieceKind::O.rotation_count(), 1);
    }

    #[test]
    fn test_full_rotation_cycle_returns_to_spawn_state() {
        for kind in ALL_KINDS {
            let mut piece = Piece::spawn(kind, ColorId::new(1));
            for _ in 0..kind.rotation_count() {
                piece = piece.rotated();
            }
            assert_eq!(piece.rotation(), 0, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_lookup_is_normalized() {
        for kind in ALL_KINDS {
            let count = kind.rotation_count();
            for rotation in 0..count {
                assert_eq!(
                    kind.cell_indices(rotation),
                    kind.cell_indices(rotation + count),
                    "{kind:?} rotation {rotation}"
                );
            }
        }
    }

    #[test]
    fn test_spawn_anchor() {
        let piece = Piece::spawn(PieceKind::S, ColorId::new(3));
        assert_eq!((piece.x(), piece.y()), (3, 0));
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.color(), ColorId::new(3));
    }

    #[test]
    fn test_occupied_cells_follow_the_anchor() {
        let piece = Piece::spawn(PieceKind::O, ColorId::new(1)).moved_to(-1, 2);
        let cells: Vec<(i32, i32)> = piece.occupied_cells().collect();
        assert_eq!(cells, vec![(-1, 2), (0, 2), (-1, 3), (0, 3)]);
    }

    #[test]
    fn test_moved_by_accumulates() {
        let piece = Piece::spawn(PieceKind::T, ColorId::new(2))
            .moved_by(2, 5)
            .moved_by(-1, 1);
        assert_eq!((piece.x(), piece.y()), (4, 6));
    }
}
