// Copyright (C) 2020-2026 Andy Kurnia.

// Brute force: every square, every arrangement of rack tiles, both
// directions. Slow, but needs nothing beyond the placement rules.

use super::{board, combinations, game_state, lexicon, matrix, move_set, rules};
use std::collections::BTreeSet;

pub struct BestMove {
    pub location: matrix::Location,
    pub down: bool,
    // rack tiles in the order laid down.
    pub word: Vec<u8>,
    pub move_set: move_set::MoveSet,
    pub score: i16,
}

// Distinct orderings of every sub-multiset of the rack, shortest first.
// Blanks are kept back.
pub fn rack_words(rack: &[u8]) -> Vec<Vec<u8>> {
    let mut tiles = rack.iter().copied().filter(|&t| t != 0).collect::<Vec<_>>();
    tiles.sort_unstable();
    let mut words = Vec::new();
    for k in 1..=tiles.len() {
        let mut subsets = BTreeSet::new();
        combinations::for_each_combination(&tiles, k, &mut |c: &[u8]| {
            subsets.insert(c.to_vec());
        });
        for mut word in subsets {
            loop {
                words.push(word.clone());
                if !combinations::next_permutation(&mut word) {
                    break;
                }
            }
        }
    }
    words
}

// The empty squares a word starting at location would fill, in order.
fn free_squares(
    board: &board::Board,
    location: matrix::Location,
    down: bool,
    max_len: usize,
) -> Vec<matrix::Location> {
    let dim = board.dim();
    let (lane, mut idx) = location.lane_idx(down);
    let mut squares = Vec::with_capacity(max_len);
    while squares.len() < max_len {
        let here = matrix::Location::of_lane_idx(down, lane, idx);
        if !dim.contains(here) {
            break;
        }
        if !board.is_occupied(here) {
            squares.push(here);
        }
        idx += 1;
    }
    squares
}

fn lay_down(squares: &[matrix::Location], word: &[u8]) -> Option<move_set::MoveSet> {
    move_set::MoveSet::new(
        squares
            .iter()
            .zip(word.iter())
            .map(|(&location, &tile)| move_set::Placement { location, tile })
            .collect(),
    )
}

// The highest scoring move for the player to move. Ties go to whichever
// was found first. None if nothing scores above zero.
pub fn find_best_move(
    game: &game_state::GameState,
    lexicon: &dyn lexicon::Lexicon,
) -> Option<BestMove> {
    let game_config = game.game_config;
    let board = &game.board;
    let words = rack_words(&game.current_player().rack);
    let max_len = words.iter().map(|w| w.len()).max()?;
    let mut word_buf = Vec::new();
    let mut best = None;
    let mut high_score = 0;
    for location in board.dim().locations() {
        if board.is_occupied(location) {
            continue;
        }
        for down in [true, false] {
            let squares = free_squares(board, location, down, max_len);
            // placement rules do not look at letters.
            let playable = (1..=squares.len())
                .map(|n| {
                    lay_down(&squares[..n], &vec![1; n]).is_some_and(|m| {
                        rules::move_is_legal(game_config, board, game.move_number, &m)
                    })
                })
                .collect::<Vec<_>>();
            for word in &words {
                let n = word.len();
                if n > squares.len() || !playable[n - 1] {
                    continue;
                }
                let Some(move_set) = lay_down(&squares, word) else {
                    continue;
                };
                let board_after = board.with_move(&move_set);
                let all_words_ok = rules::word_set(&board_after, move_set.locations())
                    .iter()
                    .all(|formed| {
                        word_buf.clear();
                        word_buf.extend(
                            formed
                                .iter()
                                .filter_map(|&l| board_after.at(l))
                                .map(|tile| tile & 0x7f),
                        );
                        lexicon.accepts(&word_buf)
                    });
                if !all_words_ok {
                    continue;
                }
                let score = rules::score_move(game_config, &board_after, &move_set);
                if score > high_score {
                    high_score = score;
                    best = Some(BestMove {
                        location,
                        down,
                        word: word.clone(),
                        move_set,
                        score,
                    });
                }
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board_layout, game_config};

    fn config_5x5<'a>() -> game_config::GameConfig<'a> {
        game_config::make_game_config_with_layout(
            board_layout::make_plain_board_layout(5, 5).unwrap(),
            7,
        )
        .unwrap()
    }

    #[test]
    fn rack_words_are_distinct() {
        let words = rack_words(&[1, 1, 2, 0]);
        // A, B, AA, AB, BA, AAB, ABA, BAA.
        assert_eq!(words.len(), 8);
        assert_eq!(words[0], [1]);
        assert_eq!(words[7], [2, 1, 1]);
        assert!(rack_words(&[0]).is_empty());
    }

    #[test]
    fn first_found_wins_ties() {
        let game_config = config_5x5();
        let mut game = game_state::GameState::new(&game_config, 1);
        game.fabricate_rack(0, [20, 1, 3]);
        let best = find_best_move(&game, &lexicon::AcceptAll).unwrap();
        // c1 down is the first start reaching the star with three tiles.
        assert_eq!(best.location, matrix::Location::new(2, 0));
        assert!(best.down);
        assert_eq!(best.word, [1, 3, 20]);
        assert_eq!(best.score, 5);
    }

    #[test]
    fn respects_lexicon() {
        let game_config = config_5x5();
        let alphabet = game_config.alphabet();
        let lexicon = lexicon::WordList::from_text(alphabet, "CAT").unwrap();
        let mut game = game_state::GameState::new(&game_config, 1);
        game.fabricate_rack(0, [20, 1, 3]);
        let best = find_best_move(&game, &lexicon).unwrap();
        assert_eq!(best.word, [3, 1, 20]);
        assert_eq!(best.score, 5);
        game.play(&best.move_set).unwrap();
        assert_eq!(game.players[0].turn_scores, [5]);
    }

    #[test]
    fn nothing_to_play() {
        let game_config = config_5x5();
        let game = game_state::GameState::new(&game_config, 2);
        assert!(find_best_move(&game, &lexicon::AcceptAll).is_none());
    }
}
