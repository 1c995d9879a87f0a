// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, matrix};

// One tile on one square. Tiles use the board representation, so a
// designated blank keeps its 0x80 bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    pub location: matrix::Location,
    pub tile: u8,
}

// The tiles one turn adds to the board, sorted by location.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveSet(Box<[Placement]>);

impl MoveSet {
    // None if there is nothing to place.
    pub fn new(mut placements: Vec<Placement>) -> Option<Self> {
        if placements.is_empty() {
            return None;
        }
        placements.sort_unstable();
        placements.dedup();
        Some(Self(placements.into_boxed_slice()))
    }

    #[inline(always)]
    pub fn placements(&self) -> &[Placement] {
        &self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn locations(&self) -> impl Iterator<Item = matrix::Location> + '_ {
        self.0.iter().map(|p| p.location)
    }

    pub fn contains_location(&self, location: matrix::Location) -> bool {
        self.0.binary_search_by(|p| p.location.cmp(&location)).is_ok()
    }

    // what the mover must have held to make this move.
    pub fn rack_tiles(&self) -> Vec<u8> {
        self.0.iter().map(|p| alphabet::to_rack(p.tile)).collect()
    }

    // Some(down) if all tiles share one lane. a single tile is in both, and
    // reports across.
    pub fn orientation(&self) -> Option<bool> {
        let first = self.0[0].location;
        if self.0.iter().all(|p| p.location.row == first.row) {
            Some(false)
        } else if self.0.iter().all(|p| p.location.col == first.col) {
            Some(true)
        } else {
            None
        }
    }

    pub fn fmt(&self, alphabet: &alphabet::Alphabet) -> String {
        self.0
            .iter()
            .map(|p| {
                format!(
                    "{}{}",
                    p.location,
                    alphabet.of_board(p.tile).unwrap_or("?")
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix::Location;

    fn p(col: i8, row: i8, tile: u8) -> Placement {
        Placement {
            location: Location::new(col, row),
            tile,
        }
    }

    #[test]
    fn equal_regardless_of_input_order() {
        let a = MoveSet::new(vec![p(2, 0, 20), p(0, 0, 3), p(1, 0, 1)]);
        let b = MoveSet::new(vec![p(0, 0, 3), p(1, 0, 1), p(2, 0, 20)]);
        assert_eq!(a, b);
        assert!(MoveSet::new(Vec::new()).is_none());
    }

    #[test]
    fn orientation_and_rack() {
        let across = MoveSet::new(vec![p(0, 3, 3), p(1, 3, 0x81)]).unwrap();
        assert_eq!(across.orientation(), Some(false));
        assert_eq!(across.rack_tiles(), [3, 0]);
        assert!(across.contains_location(Location::new(1, 3)));
        assert!(!across.contains_location(Location::new(1, 4)));
        let down = MoveSet::new(vec![p(4, 1, 3), p(4, 2, 1)]).unwrap();
        assert_eq!(down.orientation(), Some(true));
        let bent = MoveSet::new(vec![p(4, 1, 3), p(5, 2, 1)]).unwrap();
        assert_eq!(bent.orientation(), None);
        let alphabet = alphabet::make_english_alphabet();
        assert_eq!(across.fmt(&alphabet), "a4C b4a");
    }
}
