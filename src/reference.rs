// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, game_config, game_state, matrix};

// board: rows of cells. "A" is a tile, "a" is a blank designated as A.
// null, "", false and 0 are empty squares.
// scores: per player, the score of each of that player's turns in order.
#[derive(serde::Deserialize, serde::Serialize)]
pub struct GameRecord {
    pub board: Vec<Vec<serde_json::Value>>,
    pub scores: Vec<Vec<i16>>,
}

impl GameRecord {
    pub fn of_game(game: &game_state::GameState) -> Self {
        let alphabet = game.game_config.alphabet();
        let dim = game.board.dim();
        Self {
            board: (0..dim.rows)
                .map(|row| {
                    (0..dim.cols)
                        .map(|col| {
                            serde_json::Value::String(
                                game.board
                                    .at(matrix::Location::new(col, row))
                                    .and_then(|tile| alphabet.of_board(tile))
                                    .unwrap_or("")
                                    .to_string(),
                            )
                        })
                        .collect()
                })
                .collect(),
            scores: game
                .players
                .iter()
                .map(|player| player.turn_scores.clone())
                .collect(),
        }
    }
}

// The finished game as recorded. Read-only once loaded.
pub struct ReferenceGame {
    pub board: board::Board,
    pub player_score_lists: Vec<Vec<i16>>,
    // total plies, over all players.
    pub move_count: u16,
}

fn is_empty_cell(cell: &serde_json::Value) -> bool {
    match cell {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

impl ReferenceGame {
    pub fn from_record(
        game_config: &game_config::GameConfig,
        record: &GameRecord,
    ) -> error::Returns<Self> {
        let alphabet = game_config.alphabet();
        let expected_dim = game_config.board_layout().dim();
        if record.board.len() != expected_dim.rows as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                expected_dim.rows,
                record.board.len()
            ));
        }
        let mut board = board::Board::new(expected_dim);
        for (row_num, row) in (0..).zip(record.board.iter()) {
            if row.len() != expected_dim.cols as usize {
                return_error!(format!(
                    "board row {} (0-based): need {} cols, found {} cols",
                    row_num,
                    expected_dim.cols,
                    row.len()
                ));
            }
            for (col_num, cell) in (0..).zip(row.iter()) {
                if is_empty_cell(cell) {
                    continue;
                }
                let tile = cell
                    .as_str()
                    .and_then(|label| alphabet.board_tile_of(label));
                match tile {
                    Some(tile) => board.set(matrix::Location::new(col_num, row_num), tile),
                    None => {
                        return_error!(format!(
                            "board row {} col {} (0-based): invalid tile {}",
                            row_num, col_num, cell
                        ));
                    }
                }
            }
        }

        let num_players = record.scores.len();
        if num_players == 0 {
            return_error!("scores: need at least one player".into());
        }
        if num_players > u8::MAX as usize {
            return_error!(format!("scores: too many players ({})", num_players));
        }
        // players take turns in order, so nobody is more than one turn
        // behind the first player or ahead of an earlier player.
        let first_len = record.scores[0].len();
        for (player, w) in (1..).zip(record.scores.windows(2)) {
            let (earlier, later) = (w[0].len(), w[1].len());
            if later > earlier || later + 1 < first_len {
                return_error!(format!(
                    "scores: player {} has {} turns after player {} with {} turns",
                    player + 1,
                    later,
                    player,
                    earlier
                ));
            }
        }
        let move_count = record.scores.iter().map(|s| s.len()).sum::<usize>();
        if move_count > u16::MAX as usize {
            return_error!(format!("scores: too many turns ({})", move_count));
        }

        Ok(Self {
            board,
            player_score_lists: record.scores.clone(),
            move_count: move_count as u16,
        })
    }

    pub fn from_json(game_config: &game_config::GameConfig, data: &str) -> error::Returns<Self> {
        let record = serde_json::from_str::<GameRecord>(data)?;
        Self::from_record(game_config, &record)
    }

    pub fn from_file(game_config: &game_config::GameConfig, filename: &str) -> error::Returns<Self> {
        Self::from_json(game_config, &std::fs::read_to_string(filename)?)
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        self.player_score_lists.len() as u8
    }

    // the recorded score for the move at this ply.
    pub fn target_score(&self, move_number: u16) -> Option<i16> {
        let num_players = self.player_score_lists.len();
        let player = move_number as usize % num_players;
        let player_move_number = move_number as usize / num_players;
        self.player_score_lists[player]
            .get(player_move_number)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_layout;

    fn small_config<'a>() -> game_config::GameConfig<'a> {
        game_config::make_game_config_with_layout(
            board_layout::make_plain_board_layout(3, 3).unwrap(),
            7,
        )
        .unwrap()
    }

    #[test]
    fn reads_tiles_and_blanks() {
        let game_config = small_config();
        let reference = ReferenceGame::from_json(
            &game_config,
            r#"{ "board": [["C", "a", "T"], [null, "", false], [0, "", ""]],
                 "scores": [[3], [2]] }"#,
        )
        .unwrap();
        assert_eq!(reference.board.at(matrix::Location::new(0, 0)), Some(3));
        assert_eq!(reference.board.at(matrix::Location::new(1, 0)), Some(0x81));
        assert_eq!(reference.board.occupied().count(), 3);
        assert_eq!(reference.move_count, 2);
        assert_eq!(reference.target_score(0), Some(3));
        assert_eq!(reference.target_score(1), Some(2));
        assert_eq!(reference.target_score(2), None);
    }

    #[test]
    fn rejects_malformed_input() {
        let game_config = small_config();
        for data in [
            r#"{ "board": [["C", "A", "T"]], "scores": [[3]] }"#,
            r#"{ "board": [["C", "A"], ["", ""], ["", ""]], "scores": [[3]] }"#,
            r#"{ "board": [["CA", "", ""], ["", "", ""], ["", "", ""]], "scores": [[3]] }"#,
            r#"{ "board": [["?", "", ""], ["", "", ""], ["", "", ""]], "scores": [[3]] }"#,
            r#"{ "board": [[1, "", ""], ["", "", ""], ["", "", ""]], "scores": [[3]] }"#,
            r#"{ "board": [["", "", ""], ["", "", ""], ["", "", ""]], "scores": [] }"#,
            r#"{ "board": [["", "", ""], ["", "", ""], ["", "", ""]], "scores": [[1], [2, 3]] }"#,
            r#"{ "board": [["", "", ""], ["", "", ""], ["", "", ""]], "scores": [[1, 2, 3], [2]] }"#,
            r#"{ "board": [["", "", ""], ["", "", ""], ["", "", ""]] }"#,
            "not json",
        ] {
            assert!(ReferenceGame::from_json(&game_config, data).is_err(), "{}", data);
        }
    }

    #[test]
    fn record_of_game_round_trips() {
        let game_config = small_config();
        let data = r#"{ "board": [["", "", ""], ["C", "a", "T"], ["", "", ""]], "scores": [[5]] }"#;
        let reference = ReferenceGame::from_json(&game_config, data).unwrap();
        let mut game = game_state::GameState::new(&game_config, 1);
        game.board = reference.board.clone();
        game.players[0].turn_scores.push(5);
        let record = GameRecord::of_game(&game);
        let again = ReferenceGame::from_record(&game_config, &record).unwrap();
        assert_eq!(again.board, reference.board);
        assert_eq!(again.player_score_lists, [[5]]);
    }
}
