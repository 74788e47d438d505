use itertools::Itertools;

use crate::cards::Card;
use crate::error::SimResult;
use crate::hand_evaluator::evaluate_best;
use crate::request::ValidatedRequest;

/// Outs and improvement odds from exact enumeration of the unseen cards.
/// Only meaningful at the flop (board 3) or turn (board 4); all fields are
/// None elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Improvement {
    pub outs: Option<usize>,
    pub improve_turn_pct: Option<f64>,
    pub improve_river_pct: Option<f64>,
}

pub fn analyze_improvement(v: &ValidatedRequest) -> SimResult<Improvement> {
    if !matches!(v.board.len(), 3 | 4) {
        return Ok(Improvement::default());
    }

    let mut known: Vec<Card> = Vec::with_capacity(7);
    known.extend_from_slice(&v.hero);
    known.extend_from_slice(&v.board);
    let baseline = evaluate_best(&known)?;

    // Every unseen card, one at a time; strictly-better hands count.
    let mut outs = 0usize;
    for &candidate in &v.available {
        known.push(candidate);
        if evaluate_best(&known)? > baseline {
            outs += 1;
        }
        known.pop();
    }
    let single_pct = outs as f64 / v.available.len() as f64 * 100.0;

    if v.board.len() == 4 {
        // At the turn the one remaining card is the river.
        return Ok(Improvement {
            outs: Some(outs),
            improve_turn_pct: None,
            improve_river_pct: Some(single_pct),
        });
    }

    // At the flop, also enumerate every unordered pair of unseen cards for
    // the by-the-river improvement. Exhaustive, never sampled.
    let mut improved_pairs = 0usize;
    let mut total_pairs = 0usize;
    for (&a, &b) in v.available.iter().tuple_combinations() {
        known.push(a);
        known.push(b);
        if evaluate_best(&known)? > baseline {
            improved_pairs += 1;
        }
        known.pop();
        known.pop();
        total_pairs += 1;
    }

    Ok(Improvement {
        outs: Some(outs),
        improve_turn_pct: Some(single_pct),
        improve_river_pct: Some(improved_pairs as f64 / total_pairs as f64 * 100.0),
    })
}
