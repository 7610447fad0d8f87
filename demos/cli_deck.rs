//! CLI deck example.
//!
//! Prints the standard deck, shuffles it, and then deals sorted hands until
//! the deck runs out.
//!
//! ```text
//! cargo run --example cli_deck -- --seed 42 --space-width 0
//! ```

use std::io::{self, Write};

use clap::Parser;
use deckrs::{DEFAULT_HAND_SIZE, Deck, FrenchDeck, RenderOptions};

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for the shared random source.
    #[clap(long)]
    seed: Option<u64>,
    /// Default number of cards per hand.
    #[clap(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand: usize,
    /// Spacing between drawn hand cards, negative values overlap.
    #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
    space_width: i32,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .parse_default_env()
        .init();

    let args = Cli::parse();

    if let Some(seed) = args.seed {
        deckrs::seed(seed);
    }

    let mut deck = FrenchDeck::build();
    println!("{}", deck.gen_shape(&[], RenderOptions::default()));

    deck.shuffle();
    println!("{}", deck.gen_shape(&[], RenderOptions::default()));

    let hand_options = RenderOptions::default()
        .with_space_width(args.space_width)
        .with_show_all(true);

    while !deck.is_empty() {
        let prompt = format!(
            "Cards to draw (default {}, {} left, 'q' to quit): ",
            args.hand,
            deck.len()
        );
        let Some(count) = prompt_usize(&prompt, args.hand) else {
            break;
        };

        let mut hand = Deck::new(deck.make_hand(count));
        if hand.is_empty() {
            continue;
        }
        hand.sort(false);
        println!("{}", hand.gen_shape(&[], hand_options));
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str, default: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        match input.as_str() {
            "q" | "quit" => return None,
            "" => return Some(default),
            _ => {}
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
