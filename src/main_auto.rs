// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use recover::{best_move, display, error, game_config, game_state, lexicon, reference};

// auto [SEED] [WORDLIST]
pub fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let game_config = game_config::make_english_game_config();
    let mut rng = match args.get(1) {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed.parse()?),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let lexicon: Box<dyn lexicon::Lexicon> = match args.get(2) {
        Some(filename) => {
            let t0 = std::time::Instant::now();
            let word_list = lexicon::WordList::from_file(game_config.alphabet(), filename)?;
            eprintln!(
                "{:10}ns to read {} words from {}",
                t0.elapsed().as_nanos(),
                word_list.len(),
                filename
            );
            Box::new(word_list)
        }
        None => Box::new(lexicon::AcceptAll),
    };

    let mut game_state = game_state::GameState::new(&game_config, 2);
    game_state.deal(&mut rng)?;

    loop {
        eprint!("{}", display::fmt_board(&game_config, &game_state.board));
        for (i, player) in (1..).zip(game_state.players.iter()) {
            eprint!("player {}: {}, ", i, player.score);
        }
        eprintln!("turn: player {}", game_state.turn() + 1);
        eprintln!(
            "pool {:2}: {}",
            game_state.bag.0.len(),
            game_config.alphabet().fmt_rack(&game_state.bag.0)
        );
        for (i, player) in (1..).zip(game_state.players.iter()) {
            eprintln!("p{} rack: {}", i, game_config.alphabet().fmt_rack(&player.rack));
        }

        let t0 = std::time::Instant::now();
        let best = best_move::find_best_move(&game_state, lexicon.as_ref());
        eprintln!("{:10}ns to find the best move", t0.elapsed().as_nanos());
        let Some(best) = best else {
            eprintln!("no move for player {}, game over", game_state.turn() + 1);
            break;
        };
        eprintln!(
            "{} {} {}: {}",
            best.location,
            if best.down { "down" } else { "across" },
            best.move_set.fmt(game_config.alphabet()),
            best.score
        );
        game_state.play(&best.move_set)?;
        if game_state.players.iter().any(|player| player.rack.is_empty()) {
            eprintln!("a rack is empty, game over");
            break;
        }
    }
    eprint!("{}", display::fmt_board(&game_config, &game_state.board));

    let record = reference::GameRecord::of_game(&game_state);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
