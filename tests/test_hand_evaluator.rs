use oddsmith::cards::{parse_cards, Card};
use oddsmith::hand_evaluator::*;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cards(notation: &str) -> Vec<Card> {
    parse_cards(notation).unwrap()
}

fn five(notation: &str) -> [Card; 5] {
    let c = cards(notation);
    [c[0], c[1], c[2], c[3], c[4]]
}

#[test]
fn test_royal_flush_is_top_straight_flush() {
    let v = evaluate_best(&cards("AsKsQsTsJs2h3d")).unwrap();
    assert_eq!(v.category, HandCategory::StraightFlush);
    assert_eq!(v.tiebreaks[0], 14);
}

#[test]
fn test_straight_flush() {
    let v = evaluate_best(&cards("9h8h7h6h5hAcKd")).unwrap();
    assert_eq!(v.category, HandCategory::StraightFlush);
    assert_eq!(v.tiebreaks[0], 9);
}

#[test]
fn test_four_of_a_kind() {
    let v = evaluate_best(&cards("KsKhKdKc5s2h3d")).unwrap();
    assert_eq!(v.category, HandCategory::FourOfAKind);
    assert_eq!(v.tiebreaks[..2], [13, 5]);
}

#[test]
fn test_full_house() {
    let v = evaluate_best(&cards("AsAhAdKsKh2c3d")).unwrap();
    assert_eq!(v.category, HandCategory::FullHouse);
    assert_eq!(v.tiebreaks[..2], [14, 13]);
}

#[test]
fn test_two_trips_make_a_full_house() {
    // Seven cards with two sets: the lower trip supplies the pair.
    let v = evaluate_best(&cards("QsQhQd7s7h7cKd")).unwrap();
    assert_eq!(v.category, HandCategory::FullHouse);
    assert_eq!(v.tiebreaks[..2], [12, 7]);
}

#[test]
fn test_flush_kickers_descend() {
    let v = evaluate_best(&cards("AsTs8s5s2sKdQh")).unwrap();
    assert_eq!(v.category, HandCategory::Flush);
    assert_eq!(v.tiebreaks, [14, 10, 8, 5, 2]);
}

#[test]
fn test_straight() {
    let v = evaluate_best(&cards("9s8h7d6c5sAhKd")).unwrap();
    assert_eq!(v.category, HandCategory::Straight);
    assert_eq!(v.tiebreaks[0], 9);
}

#[test]
fn test_wheel_reports_five_high() {
    let v = evaluate_best(&cards("As2h3d4c5sKhQd")).unwrap();
    assert_eq!(v.category, HandCategory::Straight);
    assert_eq!(v.tiebreaks[0], 5);
}

#[test]
fn test_three_of_a_kind() {
    let v = evaluate_best(&cards("QsQhQd7s3h2cKd")).unwrap();
    assert_eq!(v.category, HandCategory::ThreeOfAKind);
    assert_eq!(v.tiebreaks[..3], [12, 13, 7]);
}

#[test]
fn test_two_pair_kicker() {
    let v = evaluate_best(&cards("AsAdKsKh5c2h3d")).unwrap();
    assert_eq!(v.category, HandCategory::TwoPair);
    assert_eq!(v.tiebreaks[..3], [14, 13, 5]);
}

#[test]
fn test_one_pair_kickers_descend() {
    let v = evaluate_best(&cards("AsAhKd7s3c2h5d")).unwrap();
    assert_eq!(v.category, HandCategory::OnePair);
    assert_eq!(v.tiebreaks, [14, 13, 7, 5, 0]);
}

#[test]
fn test_high_card() {
    let v = evaluate_best(&cards("AsKhQd9s3c")).unwrap();
    assert_eq!(v.category, HandCategory::HighCard);
    assert_eq!(v.tiebreaks, [14, 13, 12, 9, 3]);
}

#[test]
fn test_not_enough_cards() {
    assert!(evaluate_best(&cards("AsKhQd2c")).is_err());
    assert!(evaluate_best(&[]).is_err());
}

#[test]
fn test_flush_beats_straight() {
    let flush = evaluate_best(&cards("As2s7s6s5s")).unwrap();
    let straight = evaluate_best(&cards("8h9d7s6s5s")).unwrap();
    assert!(flush > straight);
}

#[test]
fn test_kicker_decides_between_equal_pairs() {
    let with_king = evaluate_best(&cards("AdKhAs5d8c")).unwrap();
    let with_queen = evaluate_best(&cards("AhQdAs5d8c")).unwrap();
    assert!(with_king > with_queen);
}

#[test]
fn test_board_plays_for_a_tie() {
    let board = cards("AsKdQhJsTh");
    let mut h1 = board.clone();
    h1.extend(cards("2h3d"));
    let mut h2 = board;
    h2.extend(cards("4h5d"));
    assert_eq!(evaluate_best(&h1).unwrap(), evaluate_best(&h2).unwrap());
}

#[test]
fn test_category_and_tiebreak_bounds_on_random_hands() {
    use rand::seq::SliceRandom;

    let mut rng = StdRng::seed_from_u64(12345);
    let mut deck: Vec<Card> = oddsmith::cards::full_deck().to_vec();
    for _ in 0..10_000 {
        deck.shuffle(&mut rng);
        let v = evaluate_best(&deck[..5]).unwrap();
        assert!(v.category >= HandCategory::HighCard);
        assert!(v.category <= HandCategory::StraightFlush);
        assert!(v.tiebreaks.iter().all(|&t| t <= 14));
    }
}

#[test]
fn test_seven_card_royal_dominates_all_subsets() {
    let seven = cards("AsKsQsJsTs9h2d");
    let best = evaluate_best(&seven).unwrap();
    assert_eq!(best.category, HandCategory::StraightFlush);
    assert_eq!(best.tiebreaks[0], 14);

    for combo in seven.iter().combinations(5) {
        let subset: Vec<Card> = combo.into_iter().copied().collect();
        assert!(evaluate_best(&subset).unwrap() <= best);
    }
}
