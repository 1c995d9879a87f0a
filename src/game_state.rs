// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, bag, board, error, game_config, move_set, rules};
use rand::prelude::*;

fn use_tiles<II: IntoIterator<Item = u8>>(
    rack: &mut Vec<u8>,
    tiles_iter: II,
) -> error::Returns<()> {
    for tile in tiles_iter {
        let pos = rack.iter().rposition(|&t| t == tile).ok_or("bad tile")?;
        rack.swap_remove(pos);
    }
    Ok(())
}

pub struct GamePlayer {
    pub score: i16,
    pub rack: Vec<u8>,
    // one entry per turn taken.
    pub turn_scores: Vec<i16>,
}

impl Clone for GamePlayer {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            score: self.score,
            rack: self.rack.clone(),
            turn_scores: self.turn_scores.clone(),
        }
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.score.clone_from(&source.score);
        self.rack.clone_from(&source.rack);
        self.turn_scores.clone_from(&source.turn_scores);
    }
}

pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    // plies played so far, whoever played them.
    pub move_number: u16,
}

impl Clone for GameState<'_> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            game_config: self.game_config,
            players: self.players.clone(),
            board: self.board.clone(),
            bag: self.bag.clone(),
            move_number: self.move_number,
        }
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.game_config = source.game_config;
        self.players.clone_from(&source.players);
        self.board.clone_from(&source.board);
        self.bag.clone_from(&source.bag);
        self.move_number.clone_from(&source.move_number);
    }
}

impl<'a> GameState<'a> {
    // empty board, empty racks, empty bag.
    pub fn new(game_config: &'a game_config::GameConfig, num_players: u8) -> Self {
        let rack_size = game_config.rack_size() as usize;
        Self {
            game_config,
            players: (0..num_players)
                .map(|_| GamePlayer {
                    score: 0,
                    rack: Vec::with_capacity(rack_size),
                    turn_scores: Vec::new(),
                })
                .collect(),
            board: board::Board::new(game_config.board_layout().dim()),
            bag: bag::Bag::empty(),
            move_number: 0,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    #[inline(always)]
    pub fn turn(&self) -> usize {
        self.move_number as usize % self.num_players()
    }

    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn()]
    }

    // Fill the bag with whatever is not on the board or on a rack, shuffle,
    // and top up every rack.
    pub fn deal(&mut self, rng: &mut dyn RngCore) -> error::Returns<()> {
        let mut bag = bag::Bag::new(self.game_config.alphabet());
        let in_play = self
            .board
            .tiles()
            .iter()
            .filter(|&&tile| tile != 0)
            .map(|&tile| alphabet::to_rack(tile))
            .chain(self.players.iter().flat_map(|player| player.rack.iter().copied()))
            .collect::<Vec<_>>();
        if !bag.remove_tiles(in_play) {
            return_error!("more tiles in play than the distribution has".into());
        }
        bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            bag.replenish(&mut player.rack, rack_size);
        }
        self.bag = bag;
        Ok(())
    }

    // Replaces the rack outright, bypassing the bag. Only for making a move
    // playable when the real rack is unknown.
    pub fn fabricate_rack<II: IntoIterator<Item = u8>>(&mut self, player: usize, tiles: II) {
        let rack = &mut self.players[player].rack;
        rack.clear();
        rack.extend(tiles);
    }

    // Plays for the player to move and passes the turn. The move must be
    // legal and its tiles must be on that player's rack.
    pub fn play(&mut self, move_set: &move_set::MoveSet) -> error::Returns<i16> {
        if !rules::move_is_legal(self.game_config, &self.board, self.move_number, move_set) {
            return_error!(format!(
                "illegal move {}",
                move_set.fmt(self.game_config.alphabet())
            ));
        }
        let turn = self.turn();
        let current_player = &mut self.players[turn];
        use_tiles(&mut current_player.rack, move_set.rack_tiles())?;
        self.board.place(move_set);
        let score = rules::score_move(self.game_config, &self.board, move_set);
        current_player.score += score;
        current_player.turn_scores.push(score);
        self.bag.replenish(
            &mut current_player.rack,
            self.game_config.rack_size() as usize,
        );
        self.move_number += 1;
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Location;
    use rand::SeedableRng;
    use move_set::Placement;

    fn cat() -> move_set::MoveSet {
        move_set::MoveSet::new(
            [(6, 3), (7, 1), (8, 20)]
                .iter()
                .map(|&(col, tile)| Placement {
                    location: Location::new(col, 7),
                    tile,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn play_needs_the_tiles() {
        let game_config = game_config::make_english_game_config();
        let mut game = GameState::new(&game_config, 2);
        assert!(game.play(&cat()).is_err());
        assert_eq!(game.move_number, 0);
        game.fabricate_rack(0, cat().rack_tiles());
        assert_eq!(game.play(&cat()).unwrap(), 10);
        assert_eq!(game.move_number, 1);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.players[0].turn_scores, [10]);
        assert!(game.players[0].rack.is_empty());
        assert!(game.players[1].turn_scores.is_empty());
    }

    #[test]
    fn clones_do_not_share_state() {
        let game_config = game_config::make_english_game_config();
        let mut game = GameState::new(&game_config, 1);
        let snapshot = game.clone();
        game.fabricate_rack(0, cat().rack_tiles());
        game.play(&cat()).unwrap();
        assert!(snapshot.board.is_empty());
        assert_eq!(snapshot.move_number, 0);
        assert!(snapshot.players[0].turn_scores.is_empty());
    }

    #[test]
    fn deal_accounts_for_board() {
        let game_config = game_config::make_english_game_config();
        let mut game = GameState::new(&game_config, 2);
        game.fabricate_rack(0, cat().rack_tiles());
        game.play(&cat()).unwrap();
        game.deal(&mut rand_chacha::ChaCha20Rng::seed_from_u64(1)).unwrap();
        assert_eq!(game.players[0].rack.len(), 7);
        assert_eq!(game.players[1].rack.len(), 7);
        assert_eq!(game.bag.0.len(), 100 - 3 - 14);
    }
}
