// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, game_config, matrix};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, location: matrix::Location) -> &'static str {
    if location == board_layout.star() {
        return "*";
    }
    let premium = board_layout.premium_at(location);
    match premium.word_multiplier {
        3 => "=",
        2 => "-",
        _ => match premium.tile_multiplier {
            3 => "\"",
            2 => "\'",
            _ => " ",
        },
    }
}

fn fmt_column_labels(s: &mut String, dim: matrix::Dim) {
    s.push_str("  ");
    for c in 0..dim.cols {
        s.push(' ');
        s.push(((c as u8) + 0x61) as char);
    }
    s.push('\n');
}

fn fmt_border(s: &mut String, dim: matrix::Dim) {
    s.push_str("  +");
    for _ in 1..dim.cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn fmt_board(game_config: &game_config::GameConfig, board: &board::Board) -> String {
    let alphabet = game_config.alphabet();
    let board_layout = game_config.board_layout();
    let dim = board.dim();
    let mut s = String::new();
    fmt_column_labels(&mut s, dim);
    fmt_border(&mut s, dim);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            let location = matrix::Location::new(c, r);
            s.push_str(
                board
                    .at(location)
                    .and_then(|tile| alphabet.of_board(tile))
                    .unwrap_or_else(|| empty_label(board_layout, location)),
            );
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    fmt_border(&mut s, dim);
    fmt_column_labels(&mut s, dim);
    s
}
