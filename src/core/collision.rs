//! Collision detector
//!
//! The single gate consulted before committing any move, rotation, or
//! descent. Pure: combines the board's occupancy rules with the piece's
//! cell coordinates and mutates nothing.

use crate::core::board::Board;
use crate::core::piece::ActivePiece;

/// True when any filled cell of the piece lands on an occupied coordinate
/// (settled cell, side wall, or floor).
pub fn collides(board: &Board, piece: &ActivePiece) -> bool {
    piece.cells().any(|(x, y)| board.is_occupied(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, BOARD_HEIGHT};

    #[test]
    fn test_no_collision_inside_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            let piece = ActivePiece::spawn(kind).translated(0, 5);
            assert!(!collides(&board, &piece), "{:?}", kind);
        }
    }

    #[test]
    fn test_collides_with_side_walls() {
        let board = Board::new();
        let piece = ActivePiece::spawn(PieceKind::O);

        assert!(collides(&board, &piece.translated(-5, 0)));
        assert!(collides(&board, &piece.translated(5, 0)));
    }

    #[test]
    fn test_collides_with_floor() {
        let board = Board::new();
        let piece = ActivePiece::spawn(PieceKind::I);

        assert!(!collides(&board, &piece.translated(0, BOARD_HEIGHT as i8 - 1)));
        assert!(collides(&board, &piece.translated(0, BOARD_HEIGHT as i8)));
    }

    #[test]
    fn test_collides_with_settled_cells() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::Z));

        // O spawns at x=4 covering (4,0)-(5,1).
        let piece = ActivePiece::spawn(PieceKind::O);
        assert!(collides(&board, &piece));
    }

    #[test]
    fn test_cells_above_top_do_not_collide() {
        // Above-top cells are open even when the board below is filled.
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 0, Some(PieceKind::I));
        }
        let hovering = ActivePiece::spawn(PieceKind::I).translated(0, -1);
        assert!(!collides(&board, &hovering));
    }
}
