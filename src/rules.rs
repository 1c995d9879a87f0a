// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_config, matrix, move_set};
use std::collections::BTreeSet;

// The maximal run of tiles through location in one orientation, in order.
// Empty if location itself is empty.
fn run_through(board: &board::Board, location: matrix::Location, down: bool) -> Vec<matrix::Location> {
    let mut run = Vec::new();
    if !board.is_occupied(location) {
        return run;
    }
    let (lane, idx) = location.lane_idx(down);
    let mut start = idx;
    while board.is_occupied(matrix::Location::of_lane_idx(down, lane, start - 1)) {
        start -= 1;
    }
    let mut i = start;
    loop {
        let here = matrix::Location::of_lane_idx(down, lane, i);
        if !board.is_occupied(here) {
            break;
        }
        run.push(here);
        i += 1;
    }
    run
}

// Every word of two or more tiles crossing any of these locations.
pub fn word_set<II: IntoIterator<Item = matrix::Location>>(
    board: &board::Board,
    locations: II,
) -> BTreeSet<Vec<matrix::Location>> {
    let mut words = BTreeSet::new();
    for location in locations {
        for down in [false, true] {
            let run = run_through(board, location, down);
            if run.len() >= 2 {
                words.insert(run);
            }
        }
    }
    words
}

fn touches_existing_tile(board: &board::Board, location: matrix::Location) -> bool {
    [(-1, 0), (1, 0), (0, -1), (0, 1)].iter().any(|&(dc, dr)| {
        board.is_occupied(matrix::Location::new(location.col + dc, location.row + dr))
    })
}

// Placement rules only. Whether the words formed are in any lexicon is not
// checked here.
pub fn move_is_legal(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    move_number: u16,
    move_set: &move_set::MoveSet,
) -> bool {
    let dim = board.dim();
    if move_set.is_empty() || move_set.len() > game_config.rack_size() as usize {
        return false;
    }
    let placements = move_set.placements();
    if placements
        .windows(2)
        .any(|w| w[0].location == w[1].location)
    {
        return false;
    }
    if placements
        .iter()
        .any(|p| !dim.contains(p.location) || board.is_occupied(p.location) || p.tile & 0x7f == 0)
    {
        return false;
    }
    let down = match move_set.orientation() {
        Some(down) => down,
        None => return false,
    };

    // no gaps between the first and last tile placed.
    let (lane, first_idx) = placements[0].location.lane_idx(down);
    let last_idx = placements[placements.len() - 1].location.lane_idx(down).1;
    for idx in first_idx..=last_idx {
        let here = matrix::Location::of_lane_idx(down, lane, idx);
        if !move_set.contains_location(here) && !board.is_occupied(here) {
            return false;
        }
    }

    if move_number == 0 {
        if !move_set.contains_location(game_config.board_layout().star()) {
            return false;
        }
    } else if !placements
        .iter()
        .any(|p| touches_existing_tile(board, p.location))
    {
        return false;
    }

    !word_set(&board.with_move(move_set), move_set.locations()).is_empty()
}

// Score of the move, given the board with the move already on it.
pub fn score_move(
    game_config: &game_config::GameConfig,
    board_after: &board::Board,
    move_set: &move_set::MoveSet,
) -> i16 {
    let alphabet = game_config.alphabet();
    let board_layout = game_config.board_layout();
    let mut score = 0i16;
    for word in word_set(board_after, move_set.locations()) {
        let mut word_multiplier = 1;
        let mut word_score = 0i16;
        for location in word {
            let Some(tile) = board_after.at(location) else {
                continue;
            };
            let tile_multiplier = if move_set.contains_location(location) {
                let premium = board_layout.premium_at(location);
                word_multiplier *= premium.word_multiplier as i16;
                premium.tile_multiplier
            } else {
                1
            };
            word_score += alphabet.score(tile) as i16 * tile_multiplier as i16;
        }
        score += word_score * word_multiplier;
    }
    score + game_config.num_played_bonus(move_set.len())
}
