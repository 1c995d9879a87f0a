// Copyright (C) 2020-2026 Andy Kurnia.

pub struct Tile<'a> {
    label: &'a str,
    blank_label: &'a str,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
    num_tiles: u16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

// board tiles: 0 is empty, 1 is A, 0x81 is blank-as-A.
// rack tiles: 0 is blank, 1 is A.
impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.num_tiles,
        }
    }

    #[inline(always)]
    pub fn of_board(&self, idx: u8) -> Option<&'a str> {
        let c = idx & 0x7f;
        if c == 0 || c >= self.len() {
            None
        } else if idx & 0x80 == 0 {
            Some(self.get(c).label)
        } else {
            Some(self.get(c).blank_label)
        }
    }

    #[inline(always)]
    pub fn of_rack(&self, idx: u8) -> Option<&'a str> {
        if idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    // designated blanks score as the blank.
    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.get(to_rack(idx)).score
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    // inverse of of_board. "?" is not a board label.
    pub fn board_tile_of(&self, label: &str) -> Option<u8> {
        (1..self.len()).find_map(|tile| {
            let t = self.get(tile);
            if t.label == label {
                Some(tile)
            } else if t.blank_label == label {
                Some(tile | 0x80)
            } else {
                None
            }
        })
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter().filter_map(|&tile| self.of_rack(tile)).collect()
    }
}

// the rack tile that was spent to place this board tile.
#[inline(always)]
pub fn to_rack(board_tile: u8) -> u8 {
    board_tile & !((board_tile as i8) >> 7) as u8
}

static ENGLISH_TILES: &[Tile] = &[
        Tile {
            label: "?",
            blank_label: "?",
            freq: 2,
            score: 0,
        },
        Tile {
            label: "A",
            blank_label: "a",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "B",
            blank_label: "b",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "C",
            blank_label: "c",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "D",
            blank_label: "d",
            freq: 4,
            score: 2,
        },
        Tile {
            label: "E",
            blank_label: "e",
            freq: 12,
            score: 1,
        },
        Tile {
            label: "F",
            blank_label: "f",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "G",
            blank_label: "g",
            freq: 3,
            score: 2,
        },
        Tile {
            label: "H",
            blank_label: "h",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "I",
            blank_label: "i",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "J",
            blank_label: "j",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "K",
            blank_label: "k",
            freq: 1,
            score: 5,
        },
        Tile {
            label: "L",
            blank_label: "l",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "M",
            blank_label: "m",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "N",
            blank_label: "n",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "O",
            blank_label: "o",
            freq: 8,
            score: 1,
        },
        Tile {
            label: "P",
            blank_label: "p",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "Q",
            blank_label: "q",
            freq: 1,
            score: 10,
        },
        Tile {
            label: "R",
            blank_label: "r",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "S",
            blank_label: "s",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "T",
            blank_label: "t",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "U",
            blank_label: "u",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "V",
            blank_label: "v",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "W",
            blank_label: "w",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "X",
            blank_label: "x",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "Y",
            blank_label: "y",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "Z",
            blank_label: "z",
            freq: 1,
            score: 10,
        },
];

pub fn make_english_alphabet<'a>() -> Alphabet<'a> {
    Alphabet::Static(StaticAlphabet {
        tiles: ENGLISH_TILES,
        num_tiles: 100,
    })
}
