use std::fmt;

use itertools::Itertools;

use crate::cards::Card;
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

/// Comparable strength of a 5-card hand. Tiebreak slots a category does not
/// use are zero-filled, so the derived lexicographic order is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandValue {
    pub category: HandCategory,
    pub tiebreaks: [u8; 5],
}

impl HandValue {
    fn new(category: HandCategory, tiebreaks: [u8; 5]) -> HandValue {
        HandValue {
            category,
            tiebreaks,
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Highest straight top card present in `counts`, if any. The wheel
/// (A-2-3-4-5) reports 5, not 14.
fn straight_high(counts: &[u8; 15]) -> Option<u8> {
    for high in (6..=14u8).rev() {
        if (0..5u8).all(|i| counts[(high - i) as usize] > 0) {
            return Some(high);
        }
    }
    if counts[14] > 0 && (2..=5usize).all(|v| counts[v] > 0) {
        return Some(5);
    }
    None
}

pub fn evaluate_five(cards: &[Card; 5]) -> HandValue {
    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for c in cards {
        rank_counts[c.value() as usize] += 1;
        suit_counts[c.suit.index()] += 1;
    }

    let flush = suit_counts.iter().any(|&n| n == 5);
    let straight = straight_high(&rank_counts);

    if flush {
        if let Some(high) = straight {
            return HandValue::new(HandCategory::StraightFlush, [high, 0, 0, 0, 0]);
        }
    }

    // Scan ranks high to low so the highest quad/trip/pair wins when
    // multiple exist.
    let mut quad = 0u8;
    let mut trip = 0u8;
    let mut pairs: Vec<u8> = Vec::new();
    let mut singles: Vec<u8> = Vec::new();
    for v in (2..=14u8).rev() {
        match rank_counts[v as usize] {
            4 => quad = v,
            3 => trip = v,
            2 => pairs.push(v),
            1 => singles.push(v),
            _ => {}
        }
    }

    if quad > 0 {
        return HandValue::new(HandCategory::FourOfAKind, [quad, singles[0], 0, 0, 0]);
    }
    if trip > 0 && !pairs.is_empty() {
        return HandValue::new(HandCategory::FullHouse, [trip, pairs[0], 0, 0, 0]);
    }
    if flush {
        return HandValue::new(
            HandCategory::Flush,
            [singles[0], singles[1], singles[2], singles[3], singles[4]],
        );
    }
    if let Some(high) = straight {
        return HandValue::new(HandCategory::Straight, [high, 0, 0, 0, 0]);
    }
    if trip > 0 {
        return HandValue::new(
            HandCategory::ThreeOfAKind,
            [trip, singles[0], singles[1], 0, 0],
        );
    }
    if pairs.len() == 2 {
        return HandValue::new(HandCategory::TwoPair, [pairs[0], pairs[1], singles[0], 0, 0]);
    }
    if pairs.len() == 1 {
        return HandValue::new(
            HandCategory::OnePair,
            [pairs[0], singles[0], singles[1], singles[2], 0],
        );
    }
    HandValue::new(
        HandCategory::HighCard,
        [singles[0], singles[1], singles[2], singles[3], singles[4]],
    )
}

/// Best 5-card hand achievable from 5, 6, or 7 cards, by enumerating every
/// 5-card combination.
pub fn evaluate_best(cards: &[Card]) -> SimResult<HandValue> {
    if cards.len() < 5 {
        return Err(SimError::NotEnoughCards {
            need: 5,
            got: cards.len(),
        });
    }

    let mut best: Option<HandValue> = None;
    for combo in cards.iter().combinations(5) {
        let five: [Card; 5] = [*combo[0], *combo[1], *combo[2], *combo[3], *combo[4]];
        let value = evaluate_five(&five);
        if best.map_or(true, |b| value > b) {
            best = Some(value);
        }
    }
    Ok(best.unwrap())
}
