// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error};

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    bingo_bonus: i16,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_played >= x.rack_size as usize {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }
}

pub fn make_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        bingo_bonus: 50,
    })
}

// English tiles on another board.
pub fn make_game_config_with_layout<'a>(
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
) -> error::Returns<GameConfig<'a>> {
    if rack_size <= 0 {
        return_error!(format!("invalid rack size {}", rack_size));
    }
    Ok(GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout,
        rack_size,
        bingo_bonus: 50,
    }))
}
