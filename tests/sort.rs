//! Sort key and card text tests.

use deckrs::{
    Card, Deck, Rank, SUIT_VALUES, SliceError, SliceRange, Suit, SymbolError, spades_high,
    spades_high_symbols, suit_value,
};

#[test]
fn suit_values_match_table() {
    for (suit, value) in SUIT_VALUES {
        assert_eq!(suit_value(suit), value);
    }
    assert_eq!(suit_value(Suit::Spades), 3);
    assert_eq!(suit_value(Suit::Hearts), 2);
    assert_eq!(suit_value(Suit::Diamonds), 1);
    assert_eq!(suit_value(Suit::Clubs), 0);
}

#[test]
fn spades_high_key_values() {
    assert_eq!(spades_high(&Card::new(Rank::Two, Suit::Clubs)), 0);
    assert_eq!(spades_high(&Card::new(Rank::Two, Suit::Spades)), 3);
    assert_eq!(spades_high(&Card::new(Rank::Three, Suit::Clubs)), 4);
    assert_eq!(spades_high(&Card::new(Rank::Ten, Suit::Hearts)), 8 * 4 + 2);
    assert_eq!(spades_high(&Card::new(Rank::Ace, Suit::Spades)), 51);
}

#[test]
fn spades_high_keys_are_unique() {
    let mut keys: Vec<u8> = Deck::new().iter().map(spades_high).collect();
    keys.sort_unstable();
    assert_eq!(keys, (0..52).collect::<Vec<u8>>());
}

#[test]
fn sorted_deck_orders_rank_then_suit() {
    let sorted = Deck::new().sorted_spades_high();
    assert_eq!(sorted.len(), 52);
    assert_eq!(sorted[0], Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(sorted[51], Card::new(Rank::Ace, Suit::Spades));

    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.rank <= b.rank, "{a} before {b}");
        if a.rank == b.rank {
            assert!(suit_value(a.suit) < suit_value(b.suit), "{a} before {b}");
        }
    }

    let twos: Vec<Suit> = sorted[..4].iter().map(|c| c.suit).collect();
    assert_eq!(
        twos,
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
    );
}

#[test]
fn spades_high_from_symbols() {
    assert_eq!(spades_high_symbols("2", "clubs"), Ok(0));
    assert_eq!(spades_high_symbols("10", "hearts"), Ok(34));
    assert_eq!(spades_high_symbols("A", "spades"), Ok(51));
}

#[test]
fn spades_high_rejects_unknown_symbols() {
    assert_eq!(
        spades_high_symbols("1", "spades"),
        Err(SymbolError::UnknownRank("1".to_string()))
    );
    assert_eq!(
        spades_high_symbols("a", "spades"),
        Err(SymbolError::UnknownRank("a".to_string()))
    );
    assert_eq!(
        spades_high_symbols("K", "stars"),
        Err(SymbolError::UnknownSuit("stars".to_string()))
    );
    assert_eq!(
        spades_high_symbols("K", "Spades"),
        Err(SymbolError::UnknownSuit("Spades".to_string()))
    );
}

#[test]
fn card_text_forms() {
    let queen = Card::new(Rank::Queen, Suit::Hearts);
    assert_eq!(queen.to_string(), "Q of hearts");
    assert_eq!("Q of hearts".parse::<Card>(), Ok(queen));
    assert_eq!(
        "10 of clubs".parse::<Card>(),
        Ok(Card::new(Rank::Ten, Suit::Clubs))
    );

    for card in &Deck::new() {
        assert_eq!(card.to_string().parse::<Card>().as_ref(), Ok(card));
    }
}

#[test]
fn card_parse_errors() {
    assert_eq!(
        "Q hearts".parse::<Card>(),
        Err(SymbolError::MalformedCard("Q hearts".to_string()))
    );
    assert_eq!(
        "11 of hearts".parse::<Card>(),
        Err(SymbolError::UnknownRank("11".to_string()))
    );
    assert_eq!(
        "J of cups".parse::<Card>(),
        Err(SymbolError::UnknownSuit("cups".to_string()))
    );
    assert_eq!(
        SymbolError::UnknownSuit("cups".to_string()).to_string(),
        "unknown suit \"cups\""
    );
}

#[test]
fn rank_order_and_index() {
    for (i, rank) in Rank::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(rank.index()), i);
    }
    assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(Rank::Ten.symbol(), "10");
    assert_eq!("J".parse::<Rank>(), Ok(Rank::Jack));
}

#[test]
fn zero_step_is_rejected_at_construction() {
    assert_eq!(
        SliceRange::full().try_with_step(0),
        Err(SliceError::ZeroStep)
    );
    let range = SliceRange::full().try_with_step(-2).unwrap();
    assert_eq!(range.indices(5).collect::<Vec<_>>(), [4, 2, 0]);
    assert_eq!(range.indices(0).len(), 0);
}
