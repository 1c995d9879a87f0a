// Copyright (C) 2020-2026 Andy Kurnia.

use recover::{display, error, game_config, notation, recovery, reference};

fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 2 {
        println!("Usage: recover [INPUT_FILENAME]");
        return Ok(());
    }
    let game_config = game_config::make_english_game_config();

    let t0 = std::time::Instant::now();
    let reference = reference::ReferenceGame::from_file(&game_config, &args[1])?;
    let t1 = std::time::Instant::now();
    eprintln!(
        "{:10}ns to read the game from {} ({} players, {} turns, {} tiles)",
        (t1 - t0).as_nanos(),
        args[1],
        reference.num_players(),
        reference.move_count,
        reference.board.occupied().count(),
    );
    eprint!("{}", display::fmt_board(&game_config, &reference.board));

    let mut solutions = recovery::search(&game_config, &reference);
    let mut num_found = 0u64;
    for moves in solutions.by_ref() {
        num_found += 1;
        eprintln!(
            "{:10}ns to find solution {}",
            t1.elapsed().as_nanos(),
            num_found
        );
        let notations = notation::render_solution(&game_config, reference.num_players(), &moves)?;
        println!("{}", notation::fmt_solution(&notations));
        println!();
    }
    let t2 = std::time::Instant::now();
    let stats = solutions.stats();
    eprintln!(
        "{:10}ns to search, found {} solutions",
        (t2 - t1).as_nanos(),
        num_found
    );
    eprintln!(
        "nodes: {}, candidates: {} generated, {} legal, {} matching, {} rejected, dead ends: {}",
        stats.nodes_expanded,
        stats.candidates_generated,
        stats.candidates_legal,
        stats.candidates_matching,
        stats.candidates_rejected,
        stats.dead_ends,
    );
    Ok(())
}
