// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

pub const TWS: Premium = Premium {
    word_multiplier: 3,
    tile_multiplier: 1,
};
pub const DWS: Premium = Premium {
    word_multiplier: 2,
    tile_multiplier: 1,
};
pub const TLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 3,
};
pub const DLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 2,
};
pub const FVS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 1,
};

static STANDARD_PREMIUMS: &[Premium] = &[
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];

pub struct StaticBoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout {
    Static(StaticBoardLayout),
}

impl BoardLayout {
    // premiums are row-major.
    pub fn new(
        dim: matrix::Dim,
        premiums: Box<[Premium]>,
        star: matrix::Location,
    ) -> error::Returns<Self> {
        if dim.rows <= 0 || dim.cols <= 0 || dim.cols > 26 {
            return_error!(format!("invalid board dimensions {:?}", dim));
        }
        if premiums.len() != dim.num_squares() {
            return_error!(format!(
                "need {} premiums for {}x{} board, found {}",
                dim.num_squares(),
                dim.rows,
                dim.cols,
                premiums.len()
            ));
        }
        if !dim.contains(star) {
            return_error!(format!("star square {} is off the board", star));
        }
        Ok(BoardLayout::Static(StaticBoardLayout {
            premiums,
            dim,
            star_row: star.row,
            star_col: star.col,
        }))
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn star(&self) -> matrix::Location {
        matrix::Location::new(self.star_col(), self.star_row())
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        match self {
            BoardLayout::Static(x) => &x.premiums,
        }
    }

    #[inline(always)]
    pub fn premium_at(&self, location: matrix::Location) -> Premium {
        self.premiums()[self.dim().at(location)]
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout::Static(StaticBoardLayout {
        premiums: STANDARD_PREMIUMS.into(),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    })
}

// no premiums, star in the middle.
pub fn make_plain_board_layout(rows: i8, cols: i8) -> error::Returns<BoardLayout> {
    let dim = matrix::Dim { rows, cols };
    BoardLayout::new(
        dim,
        vec![FVS; dim.num_squares()].into_boxed_slice(),
        matrix::Location::new(cols / 2, rows / 2),
    )
}
