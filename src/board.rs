// Copyright (C) 2020-2026 Andy Kurnia.

use super::{matrix, move_set};

// Tiles only. Premiums live in the board layout and never change, so two
// boards of one game differ only in their tiles.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    dim: matrix::Dim,
    tiles: Box<[u8]>,
}

impl Board {
    pub fn new(dim: matrix::Dim) -> Self {
        Self {
            dim,
            tiles: vec![0u8; dim.num_squares()].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    // None for empty squares and for squares off the board.
    #[inline(always)]
    pub fn at(&self, location: matrix::Location) -> Option<u8> {
        if !self.dim.contains(location) {
            return None;
        }
        match self.tiles[self.dim.at(location)] {
            0 => None,
            tile => Some(tile),
        }
    }

    #[inline(always)]
    pub fn is_occupied(&self, location: matrix::Location) -> bool {
        self.at(location).is_some()
    }

    #[inline(always)]
    pub fn set(&mut self, location: matrix::Location, tile: u8) {
        self.tiles[self.dim.at(location)] = tile;
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|&tile| tile == 0)
    }

    pub fn occupied(&self) -> impl Iterator<Item = move_set::Placement> + '_ {
        self.dim
            .locations()
            .filter_map(move |location| {
                self.at(location)
                    .map(|tile| move_set::Placement { location, tile })
            })
    }

    pub fn place(&mut self, move_set: &move_set::MoveSet) {
        for placement in move_set.placements() {
            self.set(placement.location, placement.tile);
        }
    }

    // the board as it would be after the move.
    pub fn with_move(&self, move_set: &move_set::MoveSet) -> Self {
        let mut board = self.clone();
        board.place(move_set);
        board
    }
}

// same dimensions and same tile on every square. blank-as-A differs from A.
#[inline(always)]
pub fn boards_are_equivalent(board_1: &Board, board_2: &Board) -> bool {
    board_1 == board_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix::Location;

    fn cat_board() -> Board {
        let mut board = Board::new(matrix::Dim { rows: 5, cols: 5 });
        board.set(Location::new(0, 0), 3);
        board.set(Location::new(1, 0), 1);
        board.set(Location::new(2, 0), 20);
        board
    }

    #[test]
    fn clones_are_independent() {
        let board = cat_board();
        let mut sibling_1 = board.clone();
        let sibling_2 = board.clone();
        sibling_1.set(Location::new(4, 4), 5);
        assert!(boards_are_equivalent(&board, &sibling_2));
        assert!(!boards_are_equivalent(&board, &sibling_1));
        assert!(!boards_are_equivalent(&sibling_1, &sibling_2));
        assert_eq!(board.at(Location::new(4, 4)), None);
    }

    #[test]
    fn equivalence_is_reflexive_and_symmetric() {
        let board = cat_board();
        let copy = board.clone();
        assert!(boards_are_equivalent(&board, &board));
        assert!(boards_are_equivalent(&board, &copy));
        assert!(boards_are_equivalent(&copy, &board));
        let mut blanked = board.clone();
        blanked.set(Location::new(1, 0), 0x81);
        assert!(!boards_are_equivalent(&board, &blanked));
        assert!(!boards_are_equivalent(&blanked, &board));
    }

    #[test]
    fn occupied_lists_tiles_row_major() {
        let board = cat_board();
        let tiles = board.occupied().map(|p| p.tile).collect::<Vec<_>>();
        assert_eq!(tiles, [3, 1, 20]);
        assert!(!board.is_empty());
        assert!(Board::new(board.dim()).is_empty());
        assert_eq!(board.at(Location::new(-1, 0)), None);
    }
}
