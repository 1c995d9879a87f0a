// Copyright (C) 2020-2026 Andy Kurnia.

// Recovers the moves of a finished game from its final board and the score
// of every turn. Each ply tries every placement of not-yet-placed tiles that
// scores exactly what the mover scored, depth first. A history is complete
// when all plies are used up and the board matches.

use super::{board, combinations, game_config, game_state, move_set, reference, rules};
use std::collections::BTreeSet;

// Tiles on the reference board whose squares are still empty on the working
// board.
pub fn undiscovered_tiles(
    reference_board: &board::Board,
    working_board: &board::Board,
) -> BTreeSet<move_set::Placement> {
    reference_board
        .occupied()
        .filter(|p| !working_board.is_occupied(p.location))
        .collect()
}

// Every tile of the move is on the reference board, with the same label.
pub fn move_is_board_subset(move_set: &move_set::MoveSet, reference_board: &board::Board) -> bool {
    move_set
        .placements()
        .iter()
        .all(|p| reference_board.at(p.location) == Some(p.tile))
}

// The acceptable candidates with their scores.
pub fn legal_moves<II: IntoIterator<Item = move_set::MoveSet>>(
    game_config: &game_config::GameConfig,
    reference_board: &board::Board,
    working_board: &board::Board,
    move_number: u16,
    candidates: II,
) -> Vec<(i16, move_set::MoveSet)> {
    candidates
        .into_iter()
        .filter(|candidate| {
            move_is_board_subset(candidate, reference_board)
                && rules::move_is_legal(game_config, working_board, move_number, candidate)
        })
        .map(|candidate| {
            let board_after = working_board.with_move(&candidate);
            (
                rules::score_move(game_config, &board_after, &candidate),
                candidate,
            )
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes_expanded: u64,
    pub candidates_generated: u64,
    pub candidates_legal: u64,
    pub candidates_matching: u64,
    pub candidates_rejected: u64,
    pub dead_ends: u64,
    pub solutions: u64,
}

struct Frame<'a> {
    game: game_state::GameState<'a>,
    moves: Vec<move_set::MoveSet>,
    candidates: std::vec::IntoIter<move_set::MoveSet>,
}

// Lazily yields every history consistent with the reference game. Dropping
// it abandons whatever has not been explored.
pub struct Solutions<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    reference: &'a reference::ReferenceGame,
    stack: Vec<Frame<'a>>,
    // a game with no turns at all has nothing to search.
    pending_trivial: Option<Vec<move_set::MoveSet>>,
    stats: SearchStats,
}

pub fn search<'a>(
    game_config: &'a game_config::GameConfig<'a>,
    reference: &'a reference::ReferenceGame,
) -> Solutions<'a> {
    let game = game_state::GameState::new(game_config, reference.num_players());
    let mut solutions = Solutions {
        game_config,
        reference,
        stack: Vec::new(),
        pending_trivial: None,
        stats: SearchStats::default(),
    };
    if reference.move_count == 0 {
        if board::boards_are_equivalent(&game.board, &reference.board) {
            solutions.pending_trivial = Some(Vec::new());
        }
    } else {
        solutions.push_frame(game, Vec::new());
    }
    solutions
}

impl<'a> Solutions<'a> {
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    // The moves for the player to move that score exactly what they scored.
    fn matching_moves(&mut self, game: &game_state::GameState) -> Vec<move_set::MoveSet> {
        let Some(target_score) = self.reference.target_score(game.move_number) else {
            return Vec::new();
        };
        let candidates = combinations::collinear_combinations(
            &undiscovered_tiles(&self.reference.board, &game.board),
            game.board.dim(),
            self.game_config.rack_size() as usize,
        );
        self.stats.candidates_generated += candidates.len() as u64;
        let legal = legal_moves(
            self.game_config,
            &self.reference.board,
            &game.board,
            game.move_number,
            candidates,
        );
        self.stats.candidates_legal += legal.len() as u64;
        let matching = legal
            .into_iter()
            .filter_map(|(score, m)| (score == target_score).then_some(m))
            .collect::<Vec<_>>();
        self.stats.candidates_matching += matching.len() as u64;
        matching
    }

    fn push_frame(&mut self, game: game_state::GameState<'a>, moves: Vec<move_set::MoveSet>) {
        self.stats.nodes_expanded += 1;
        let candidates = self.matching_moves(&game);
        if candidates.is_empty() {
            self.stats.dead_ends += 1;
            return;
        }
        self.stack.push(Frame {
            game,
            moves,
            candidates: candidates.into_iter(),
        });
    }
}

impl Iterator for Solutions<'_> {
    type Item = Vec<move_set::MoveSet>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(moves) = self.pending_trivial.take() {
            self.stats.solutions += 1;
            return Some(moves);
        }
        loop {
            let frame = self.stack.last_mut()?;
            let Some(candidate) = frame.candidates.next() else {
                self.stack.pop();
                continue;
            };
            let mut game = frame.game.clone();
            let turn = game.turn();
            game.fabricate_rack(turn, candidate.rack_tiles());
            if game.play(&candidate).is_err() {
                self.stats.candidates_rejected += 1;
                continue;
            }
            let mut moves = frame.moves.clone();
            moves.push(candidate);
            if game.move_number >= self.reference.move_count {
                if board::boards_are_equivalent(&game.board, &self.reference.board) {
                    self.stats.solutions += 1;
                    return Some(moves);
                }
                self.stats.dead_ends += 1;
                continue;
            }
            self.push_frame(game, moves);
        }
    }
}
