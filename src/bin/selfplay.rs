//! Bot-vs-bot demo game.
//!
//! Plays both sides with the library engine and prints every move plus
//! the final board. Usage: `selfplay [max_turns] [depth]`.

use std::env;

use draughts_engine::{Engine, EngineConfig, Side};

fn main() {
    let args: Vec<String> = env::args().collect();
    let max_turns: u32 = args
        .get(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(130);
    let depth: u32 = args.get(2).and_then(|arg| arg.parse().ok()).unwrap_or(4);

    let mut engine = Engine::new(EngineConfig::default().with_depths(depth));
    let mut side = Side::White;
    let mut turn = 0;
    while turn < max_turns {
        let sequence = engine.find_best_sequence(side);
        if sequence.is_empty() {
            break;
        }
        for mv in sequence {
            println!("{:>3}. {side} {mv}", turn + 1);
            engine.apply(mv);
        }
        side = side.opponent();
        turn += 1;
    }

    println!("{}", engine.position());
    if turn == max_turns {
        println!("Draw by move limit ({max_turns} turns)");
    } else {
        println!("{} wins after {turn} turns", side.opponent());
    }
}
