// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, game_config, game_state, matrix, move_set, rules};

// (anchor, word) for every word a move forms. Letters already on the board
// are in parentheses.
pub type MoveNotation = Vec<(matrix::Location, String)>;

// Replays the moves from an empty board. Per player, per turn of that
// player, the words formed.
pub fn render_solution(
    game_config: &game_config::GameConfig,
    num_players: u8,
    moves: &[move_set::MoveSet],
) -> error::Returns<Vec<Vec<MoveNotation>>> {
    let alphabet = game_config.alphabet();
    let mut game = game_state::GameState::new(game_config, num_players);
    let mut notations = vec![Vec::new(); num_players as usize];
    for move_set in moves {
        let turn = game.turn();
        game.fabricate_rack(turn, move_set.rack_tiles());
        game.play(move_set)?;
        let mut notation_words = MoveNotation::new();
        for word in rules::word_set(&game.board, move_set.locations()) {
            let Some(&anchor) = word.iter().min() else {
                continue;
            };
            let mut rendered = String::new();
            let mut in_parens = false;
            for &location in &word {
                let Some(tile) = game.board.at(location) else {
                    continue;
                };
                let placed_now = move_set.contains_location(location);
                if !placed_now && !in_parens {
                    rendered.push('(');
                    in_parens = true;
                } else if placed_now && in_parens {
                    rendered.push(')');
                    in_parens = false;
                }
                rendered.push_str(alphabet.of_board(tile).ok_or("invalid tile")?);
            }
            if in_parens {
                rendered.push(')');
            }
            notation_words.push((anchor, rendered));
        }
        notations[turn].push(notation_words);
    }
    Ok(notations)
}

// p1: h8 CAT | i6 BO(A)
pub fn fmt_solution(notations: &[Vec<MoveNotation>]) -> String {
    let mut s = String::new();
    for (i, player_moves) in (1..).zip(notations.iter()) {
        if i > 1 {
            s.push('\n');
        }
        s.push_str(&format!("p{}:", i));
        for (j, notation_words) in player_moves.iter().enumerate() {
            s.push_str(if j == 0 { " " } else { " | " });
            let words = notation_words
                .iter()
                .map(|(anchor, word)| format!("{} {}", anchor, word))
                .collect::<Vec<_>>();
            s.push_str(&words.join(", "));
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix::Location;
    use move_set::Placement;

    fn m(placements: &[(i8, i8, u8)]) -> move_set::MoveSet {
        move_set::MoveSet::new(
            placements
                .iter()
                .map(|&(col, row, tile)| Placement {
                    location: Location::new(col, row),
                    tile,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn crossing_letters_are_parenthesized() {
        let game_config = game_config::make_english_game_config();
        // CAT across h8, then B and T down through the A: BAT.
        let moves = [
            m(&[(6, 7, 3), (7, 7, 1), (8, 7, 20)]),
            m(&[(7, 6, 2), (7, 8, 20)]),
        ];
        let notations = render_solution(&game_config, 2, &moves).unwrap();
        assert_eq!(notations[0], [vec![(Location::new(6, 7), "CAT".to_string())]]);
        assert_eq!(notations[1], [vec![(Location::new(7, 6), "B(A)T".to_string())]]);
        assert_eq!(fmt_solution(&notations), "p1: g8 CAT\np2: h7 B(A)T");
    }

    #[test]
    fn hooks_render_every_word() {
        let game_config = game_config::make_english_game_config();
        // CAT, then S making CATS and designated blank-as-O at j9 making SO.
        let moves = [
            m(&[(6, 7, 3), (7, 7, 1), (8, 7, 20)]),
            m(&[(9, 7, 19), (9, 8, 0x8f)]),
        ];
        let notations = render_solution(&game_config, 1, &moves).unwrap();
        assert_eq!(notations.len(), 1);
        assert_eq!(notations[0].len(), 2);
        let second = &notations[0][1];
        assert!(second.contains(&(Location::new(6, 7), "(CAT)S".to_string())));
        assert!(second.contains(&(Location::new(9, 7), "So".to_string())));
        assert_eq!(
            fmt_solution(&notations),
            "p1: g8 CAT | g8 (CAT)S, j8 So"
        );
    }

    #[test]
    fn bad_history_is_an_error() {
        let game_config = game_config::make_english_game_config();
        let moves = [m(&[(0, 0, 3), (1, 0, 1)])];
        assert!(render_solution(&game_config, 1, &moves).is_err());
    }
}
