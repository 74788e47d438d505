use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;

use crate::error::{SimError, SimResult};

pub const RANKS_STR: &str = "23456789TJQKA";
pub const SUITS_STR: &str = "cdhs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "\u{2663}",
            Suit::Diamonds => "\u{2666}",
            Suit::Hearts => "\u{2665}",
            Suit::Spades => "\u{2660}",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// The 52-card universe in a fixed enumeration order (ranks low to high,
/// suits within each rank). The order is only an enumeration source.
static FULL_DECK: Lazy<Vec<Card>> = Lazy::new(|| {
    ALL_RANKS
        .iter()
        .flat_map(|&r| ALL_SUITS.iter().map(move |&s| Card::new(r, s)))
        .collect()
});

pub fn full_deck() -> &'static [Card] {
    &FULL_DECK
}

/// Deck minus `known`, preserving deck order.
pub fn available_cards(known: &[Card]) -> Vec<Card> {
    let known_set: HashSet<Card> = known.iter().copied().collect();
    FULL_DECK
        .iter()
        .copied()
        .filter(|c| !known_set.contains(c))
        .collect()
}

/// Parses a 2-character code like "As" or "td", or the 3-character "10x"
/// form (mapped to rank T).
pub fn parse_card(code: &str) -> SimResult<Card> {
    let code = code.trim();
    let chars: Vec<char> = code.chars().collect();
    let (rank_char, suit_char) = match chars.len() {
        2 => (chars[0], chars[1]),
        3 if chars[0] == '1' && chars[1] == '0' => ('T', chars[2]),
        _ => return Err(SimError::InvalidCardCode(code.to_string())),
    };
    let rank = Rank::from_char(rank_char)
        .ok_or_else(|| SimError::InvalidCardCode(code.to_string()))?;
    let suit = Suit::from_char(suit_char)
        .ok_or_else(|| SimError::InvalidCardCode(code.to_string()))?;
    Ok(Card::new(rank, suit))
}

/// Parses a concatenated card list like "AsKd5c", with optional spaces or
/// commas between codes. The "10x" form is accepted mid-list.
pub fn parse_cards(notation: &str) -> SimResult<Vec<Card>> {
    let cleaned = notation.trim().replace(' ', "").replace(',', "");
    let chars: Vec<char> = cleaned.chars().collect();
    let mut cards = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let take = if chars[i] == '1' && i + 2 < chars.len() && chars[i + 1] == '0' {
            3
        } else {
            2
        };
        if i + take > chars.len() {
            return Err(SimError::InvalidCardCode(
                chars[i..].iter().collect::<String>(),
            ));
        }
        let code: String = chars[i..i + take].iter().collect();
        cards.push(parse_card(&code)?);
        i += take;
    }
    Ok(cards)
}
