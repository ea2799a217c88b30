//! Active piece - the single currently-falling piece
//!
//! A pure coordinate holder: it knows its matrix, origin, and kind, and can
//! produce translated or rotated copies. Validation is the controller's job
//! via the collision detector; this type never inspects the board.

use crate::core::shapes::{canonical_shape, ShapeMatrix};
use crate::types::{PieceKind, BOARD_WIDTH};

/// The falling piece: matrix, top-left origin in board coordinates, kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Spawn at the top, horizontally centered on the board.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = canonical_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (matrix.width() / 2) as i8;
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    /// A copy translated by (dx, dy). No validation.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// A copy rotated 90 degrees clockwise about the origin. No wall kicks:
    /// the origin stays fixed, and the caller discards the copy on collision.
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let matrix = self.matrix;
        let (ox, oy) = (self.x, self.y);
        (0..matrix.height()).flat_map(move |y| {
            (0..matrix.width())
                .filter(move |&x| matrix.is_set(x, y))
                .map(move |x| (ox + x as i8, oy + y as i8))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_horizontally() {
        // floor(10/2) - floor(4/2) = 3
        assert_eq!(ActivePiece::spawn(PieceKind::I).x, 3);
        // floor(10/2) - floor(2/2) = 4
        assert_eq!(ActivePiece::spawn(PieceKind::O).x, 4);
        // floor(10/2) - floor(3/2) = 4
        assert_eq!(ActivePiece::spawn(PieceKind::T).x, 4);
    }

    #[test]
    fn test_spawn_starts_at_top() {
        for kind in PieceKind::ALL {
            assert_eq!(ActivePiece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn test_translated_moves_origin_only() {
        let piece = ActivePiece::spawn(PieceKind::S);
        let moved = piece.translated(-1, 2);

        assert_eq!(moved.x, piece.x - 1);
        assert_eq!(moved.y, piece.y + 2);
        assert_eq!(moved.matrix, piece.matrix);
        assert_eq!(moved.kind, piece.kind);
    }

    #[test]
    fn test_rotated_keeps_origin() {
        let piece = ActivePiece::spawn(PieceKind::L);
        let rotated = piece.rotated();

        assert_eq!(rotated.x, piece.x);
        assert_eq!(rotated.y, piece.y);
        assert_eq!(rotated.matrix, piece.matrix.rotated_cw());
    }

    #[test]
    fn test_cells_are_offset_by_origin() {
        let piece = ActivePiece::spawn(PieceKind::O).translated(1, 3);
        let mut cells: Vec<(i8, i8)> = piece.cells().collect();
        cells.sort();

        assert_eq!(cells, vec![(5, 3), (5, 4), (6, 3), (6, 4)]);
    }
}
