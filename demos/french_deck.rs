//! Walks through the sequence operations of a French deck.

use core::num::NonZeroIsize;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, SliceRange, spades_high};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const STRIDE: NonZeroIsize = match NonZeroIsize::new(13) {
    Some(step) => step,
    None => unreachable!(),
};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .init();

    let deck = Deck::new();
    println!("{}", deck.len());

    println!("Get the first and the last card");
    for index in [0, -1] {
        match deck.get(index) {
            Ok(card) => println!("{card}"),
            Err(err) => log::error!("{err}"),
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::info!("drawing with seed {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("Pick a random card:");
    if let Some(card) = deck.choose(&mut rng) {
        println!("{card}");
    }

    println!("Slicing example");
    println!("{}", join(&deck.slice(SliceRange::up_to(3))));
    println!(
        "{}",
        join(&deck.slice(SliceRange::from_start(12).with_step(STRIDE)))
    );

    println!("Sorted, spades high:");
    for card in deck.sorted_by_key(spades_high) {
        println!("{card}");
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
