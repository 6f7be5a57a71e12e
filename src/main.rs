use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boggle_engine::{Boggle, Config, Dictionary};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // A missing word list is fatal; there is no degraded mode.
    let dictionary = Dictionary::load(&config.game.dictionary_path)?;

    let mut game = Boggle::classic(dictionary);
    match config.game.board_seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            game.shuffle_and_roll_with(&mut rng);
            tracing::info!(seed, "Board shuffled with fixed seed");
        }
        None => game.shuffle_and_roll(),
    }

    println!("Type a word to check it, '!roll' to reshuffle, or an empty line to quit.");
    print_board(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input.is_empty() {
            break;
        }
        if input == "!roll" {
            game.shuffle_and_roll();
            print_board(&game);
            continue;
        }

        if game.is_a_boggle_word(input) {
            println!("'{}' is a Boggle word", input);
        } else {
            println!("'{}' is not a Boggle word", input);
        }
    }

    Ok(())
}

fn print_board(game: &Boggle) {
    let dice = game.dice();
    for row_dice in dice.chunks(game.board().cols()) {
        let row: Vec<&str> = row_dice.iter().map(|d| d.value()).collect();
        println!("{}", row.join(" "));
    }
}
