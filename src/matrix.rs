// Copyright (C) 2020-2026 Andy Kurnia.

// A square on the grid. Ordered column first, then row, so the smallest
// location of a word is its leftmost (across) or topmost (down) square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub col: i8,
    pub row: i8,
}

impl Location {
    #[inline(always)]
    pub fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    // (lane, idx) as seen by a strider in the given orientation.
    #[inline(always)]
    pub fn lane_idx(&self, down: bool) -> (i8, i8) {
        if down {
            (self.col, self.row)
        } else {
            (self.row, self.col)
        }
    }

    #[inline(always)]
    pub fn of_lane_idx(down: bool, lane: i8, idx: i8) -> Self {
        if down {
            Self::new(lane, idx)
        } else {
            Self::new(idx, lane)
        }
    }
}

// a1 is the top left square.
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ((self.col as u8) + 0x61) as char, self.row + 1)
    }
}

#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn base(&self) -> i16 {
        self.base
    }

    #[inline(always)]
    pub fn step(&self) -> i8 {
        self.step
    }

    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: i8) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn at(&self, location: Location) -> usize {
        self.at_row_col(location.row, location.col)
    }

    #[inline(always)]
    pub fn contains(&self, location: Location) -> bool {
        (0..self.rows).contains(&location.row) && (0..self.cols).contains(&location.col)
    }

    #[inline(always)]
    pub fn num_squares(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    // row-major, matching the board_tiles layout.
    pub fn locations(self) -> impl Iterator<Item = Location> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Location::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_order_column_first() {
        let mut v = vec![
            Location::new(1, 0),
            Location::new(0, 2),
            Location::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            [Location::new(0, 1), Location::new(0, 2), Location::new(1, 0)]
        );
        assert_eq!(Location::new(7, 7).to_string(), "h8");
    }

    #[test]
    fn striders_agree_with_locations() {
        let dim = Dim { rows: 4, cols: 5 };
        let loc = Location::new(3, 2);
        let (lane, idx) = loc.lane_idx(false);
        assert_eq!(dim.across(lane).at(idx), dim.at(loc));
        let (lane, idx) = loc.lane_idx(true);
        assert_eq!(dim.down(lane).at(idx), dim.at(loc));
        assert_eq!(Location::of_lane_idx(true, lane, idx), loc);
        assert_eq!(dim.locations().count(), dim.num_squares());
        assert!(!dim.contains(Location::new(5, 0)));
        assert!(!dim.contains(Location::new(0, -1)));
    }
}
