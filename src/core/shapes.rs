//! Shape catalog and rotation transform
//!
//! The seven canonical piece matrices with their paired kind identifiers,
//! plus the clockwise rotation transform. Everything here is pure data
//! manipulation with no board or game-state knowledge.

use crate::core::rng::SimpleRng;
use crate::types::PieceKind;

/// Largest dimension any shape can reach (the vertical I piece).
const MAX_SHAPE_DIM: usize = 4;

/// A boolean piece matrix with explicit bounding-box dimensions.
///
/// Rotation swaps the dimensions, so `width`/`height` travel with the cells
/// rather than being fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl ShapeMatrix {
    /// Build from row slices (1 = filled). Rows must share one length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            cells,
            width: rows[0].len() as u8,
            height: rows.len() as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (x, y) inside the bounding box is filled.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Rotate 90 degrees clockwise: `new[i][j] = old[h-1-j][i]`.
    ///
    /// Returns a new matrix with swapped dimensions; the receiver is
    /// untouched, so callers can discard the result on collision.
    pub fn rotated_cw(&self) -> Self {
        let mut out = Self {
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
            width: self.height,
            height: self.width,
        };
        for i in 0..out.height as usize {
            for j in 0..out.width as usize {
                out.cells[i][j] = self.cells[self.height as usize - 1 - j][i];
            }
        }
        out
    }
}

/// The canonical spawn matrix for a piece kind.
pub fn canonical_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    }
}

/// Draw a uniformly random kind from the catalog.
///
/// Each call is an independent uniform index over the seven kinds; there is
/// no bag and no fairness guarantee across draws.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dimensions() {
        assert_eq!(canonical_shape(PieceKind::I).width(), 4);
        assert_eq!(canonical_shape(PieceKind::I).height(), 1);
        assert_eq!(canonical_shape(PieceKind::O).width(), 2);
        assert_eq!(canonical_shape(PieceKind::O).height(), 2);

        for kind in [
            PieceKind::T,
            PieceKind::L,
            PieceKind::J,
            PieceKind::S,
            PieceKind::Z,
        ] {
            let shape = canonical_shape(kind);
            assert_eq!(shape.width(), 3, "{:?}", kind);
            assert_eq!(shape.height(), 2, "{:?}", kind);
        }
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let shape = canonical_shape(kind);
            let count = (0..shape.height())
                .flat_map(|y| (0..shape.width()).map(move |x| (x, y)))
                .filter(|&(x, y)| shape.is_set(x, y))
                .count();
            assert_eq!(count, 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let horizontal = canonical_shape(PieceKind::I);
        let vertical = horizontal.rotated_cw();

        assert_eq!(vertical.width(), 1);
        assert_eq!(vertical.height(), 4);
        for y in 0..4 {
            assert!(vertical.is_set(0, y));
        }
    }

    #[test]
    fn test_rotate_t_points_left() {
        // ###      .#
        // .#.  ->  ##
        //          .#
        let rotated = canonical_shape(PieceKind::T).rotated_cw();

        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert!(!rotated.is_set(0, 0));
        assert!(rotated.is_set(1, 0));
        assert!(rotated.is_set(0, 1));
        assert!(rotated.is_set(1, 1));
        assert!(!rotated.is_set(0, 2));
        assert!(rotated.is_set(1, 2));
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for kind in PieceKind::ALL {
            let shape = canonical_shape(kind);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(shape, back, "{:?}", kind);
        }
    }

    #[test]
    fn test_random_kind_is_in_catalog() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..100 {
            let kind = random_kind(&mut rng);
            assert!(PieceKind::ALL.contains(&kind));
        }
    }

    #[test]
    fn test_random_kind_eventually_draws_everything() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = random_kind(&mut rng);
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
