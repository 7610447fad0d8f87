//! Card integration tests.

use std::collections::{HashMap, HashSet};

use deckrs::{Card, CardError, RANKS, RankInput, Suit, SuitInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(rank: &str, suit: &str) -> Card {
    Card::new(rank, suit).unwrap()
}

#[test]
fn every_rank_and_suit_reads_back_canonically() {
    for (rank_index, rank) in RANKS.iter().enumerate() {
        for suit in Suit::ALL {
            let card = Card::new(*rank, suit).unwrap();
            assert_eq!(card.rank(), *rank);
            assert_eq!(card.suit(), suit);
            assert_eq!(card.rank_index(), rank_index);
            assert_eq!(card.sort_key(), rank_index * 4 + suit.index());
            assert!(card.sort_key() <= 51);
        }
    }
}

#[test]
fn numeric_and_text_ranks_coincide() {
    assert_eq!(Card::new("2", "♠").unwrap(), Card::new(2, "♠").unwrap());
    assert_eq!(Card::new(2, "♠").unwrap(), Card::new(2, Suit::Spades).unwrap());
    assert_eq!(Card::new(1, "♠").unwrap(), card("A", "♠"));
    assert_eq!(Card::new("1", "♠").unwrap(), card("A", "♠"));
    assert_eq!(Card::new(1, Suit::Spades).unwrap(), card("A", "♠"));
    assert_eq!(Card::new(10, "♡").unwrap(), card("10", "♡"));
    assert_eq!(Card::new(13, "♠").unwrap(), card("K", "♠"));
    assert_eq!(Card::new(11, "♢").unwrap(), card("J", "♢"));
}

#[test]
fn text_ranks_are_case_insensitive() {
    assert_eq!(card("a", "♠"), card("A", "♠"));
    assert_eq!(card("k", "♣"), card("K", "♣"));
    assert_eq!(card("q", "♡"), card("Q", "♡"));
    assert_eq!(card("j", "♢"), card("J", "♢"));
    assert_eq!(Card::new('a', '♠').unwrap(), card("A", "♠"));
}

#[test]
fn typed_suit_and_symbol_coincide() {
    let card = Card::new("A", Suit::Spades).unwrap();
    assert_eq!(card.rank(), "A");
    assert_eq!(card.suit().symbol(), "♠");
    assert_eq!(card, Card::new("A", "♠").unwrap());
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        Card::new(0, "♠"),
        Err(CardError::InvalidRank("0".to_string()))
    );
    assert_eq!(
        Card::new(14, "♠"),
        Err(CardError::InvalidRank("14".to_string()))
    );
    assert_eq!(
        Card::new(-3, "♠"),
        Err(CardError::InvalidRank("-3".to_string()))
    );
    assert_eq!(
        Card::new("B", "♠"),
        Err(CardError::InvalidRank("B".to_string()))
    );
    assert_eq!(
        Card::new("", "♠"),
        Err(CardError::InvalidRank(String::new()))
    );
    assert_eq!(
        Card::new(2, "X"),
        Err(CardError::InvalidSuit("X".to_string()))
    );
    assert_eq!(
        Card::new(2, "♤"),
        Err(CardError::InvalidSuit("♤".to_string()))
    );
}

#[test]
fn suit_is_checked_before_rank() {
    assert_eq!(
        Card::new("Z", "X"),
        Err(CardError::InvalidSuit("X".to_string()))
    );
}

#[test]
fn error_messages_name_the_input() {
    assert_eq!(
        Card::new(0, "♠").unwrap_err().to_string(),
        "invalid rank: 0"
    );
    assert_eq!(
        Card::new(2, "X").unwrap_err().to_string(),
        "invalid suit: X"
    );
    assert_eq!(
        Card::from_sort_key(60).unwrap_err().to_string(),
        "invalid sort key: 60"
    );
}

#[test]
fn sort_key_is_a_bijection() {
    let mut seen = HashSet::new();
    for key in 0..52 {
        let card = Card::from_sort_key(key).unwrap();
        assert_eq!(card.sort_key(), key);
        assert!(seen.insert((card.rank(), card.suit())));
        assert_eq!(Card::new(card.rank(), card.suit()).unwrap(), card);
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(Card::from_sort_key(52), Err(CardError::InvalidSortKey(52)));
}

#[test]
fn cards_are_ordered_by_rank_then_suit() {
    assert!(card("A", "♠") > card("A", "♡"));
    assert!(card("A", "♡") > card("K", "♠"));
    assert!(card("2", "♢") < card("2", "♣"));
    assert!(card("2", "♡") < card("2", "♠"));

    let mut cards = vec![card("A", "♠"), card("K", "♠"), card("A", "♡")];
    cards.sort();
    assert_eq!(cards, vec![card("K", "♠"), card("A", "♡"), card("A", "♠")]);
}

#[test]
fn sorting_matches_sort_key_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let cards: Vec<Card> = (0..30).map(|_| Card::random_with(&mut rng)).collect();

    let mut sorted = cards.clone();
    sorted.sort();
    let mut by_key = cards;
    by_key.sort_by_key(|card| card.sort_key());

    assert_eq!(sorted, by_key);
}

#[test]
fn cards_hash_by_sort_key() {
    let mut card_map: HashMap<Card, &str> = HashMap::new();
    card_map.insert(card("A", "♠"), "Biggest card");
    card_map.insert(card("2", "♢"), "Smallest card");

    assert_eq!(card_map[&Card::new(1, "♠").unwrap()], "Biggest card");
    assert_eq!(card_map[&Card::new(2, Suit::Diamonds).unwrap()], "Smallest card");
}

#[test]
fn missing_inputs_are_drawn_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let ace = Card::resolve_with(Some(RankInput::from("A")), None, &mut rng).unwrap();
    assert_eq!(ace.rank(), "A");

    let spade = Card::resolve_with(None, Some(SuitInput::from(Suit::Spades)), &mut rng).unwrap();
    assert_eq!(spade.suit(), Suit::Spades);

    let any = Card::resolve_with(None, None, &mut rng).unwrap();
    assert!(any.sort_key() < 52);
    assert_eq!(any, any);

    let all_aces: Vec<Card> = Suit::ALL.iter().map(|suit| card("A", suit.symbol())).collect();
    assert!(all_aces.contains(&Card::resolve(Some("A".into()), None).unwrap()));
    assert!(Card::random().sort_key() < 52);
}

#[test]
fn provided_inputs_are_still_validated() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    assert_eq!(
        Card::resolve_with(Some(RankInput::from(0)), None, &mut rng),
        Err(CardError::InvalidRank("0".to_string()))
    );
    assert_eq!(
        Card::resolve_with(None, Some("X".into()), &mut rng),
        Err(CardError::InvalidSuit("X".to_string()))
    );
}

#[test]
fn text_forms() {
    let ace = card("A", "♠");
    assert_eq!(ace.to_string(), "A♠");
    assert_eq!(format!("{ace:?}"), r#"Card { rank: "A", suit: "♠" }"#);
    assert_eq!(card("10", "♡").to_string(), "10♡");

    assert_eq!("10♡".parse::<Card>().unwrap(), card("10", "♡"));
    assert_eq!("1♠".parse::<Card>().unwrap(), ace);
    assert_eq!(Card::try_from("q♣").unwrap(), card("Q", "♣"));
    assert_eq!("".parse::<Card>(), Err(CardError::InvalidSuit(String::new())));
    assert_eq!(
        "A".parse::<Card>(),
        Err(CardError::InvalidSuit("A".to_string()))
    );
}

#[test]
fn suit_symbols() {
    let symbols: Vec<&str> = Suit::ALL.iter().map(|suit| suit.symbol()).collect();
    assert_eq!(symbols, vec!["♢", "♣", "♡", "♠"]);

    assert_eq!(Suit::from_symbol("♡"), Some(Suit::Hearts));
    assert_eq!(Suit::from_symbol("H"), None);
    assert_eq!(Suit::from_index(1), Some(Suit::Clubs));
    assert_eq!(Suit::from_index(4), None);
    assert_eq!("♣".parse::<Suit>(), Ok(Suit::Clubs));
    assert_eq!(
        "clubs".parse::<Suit>(),
        Err(CardError::InvalidSuit("clubs".to_string()))
    );
    assert_eq!(format!("{:<3}|", Suit::Hearts), "♡  |");
    assert_eq!(format!("{:>3}|", Suit::Hearts), "  ♡|");
}

#[test]
fn shape_of_ten() {
    let expected = [
        "┌─────────┐",
        "│ 10      │",
        "│ ♠       │",
        "│         │",
        "│       ♠ │",
        "│      10 │",
        "└─────────┘",
    ]
    .join("\n");

    assert_eq!(card("10", "♠").shape(), expected);
}

#[test]
fn shape_lines_have_fixed_width() {
    for key in 0..52 {
        let shape = Card::from_sort_key(key).unwrap().shape();
        assert_eq!(shape.lines().count(), 7);
        assert!(shape.lines().all(|line| line.chars().count() == 11));
    }
}
