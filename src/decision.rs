use crate::cards::Card;
use crate::error::SimResult;
use crate::hand_evaluator::evaluate_best;

/// Break-even equity threshold for a call, as a percentage of the pot after
/// calling. Zero when there is nothing to call.
pub fn pot_odds_pct(pot_size: f64, to_call: f64) -> f64 {
    if to_call > 0.0 {
        to_call / (pot_size + to_call) * 100.0
    } else {
        0.0
    }
}

/// Expected value of calling given equity as a percentage.
pub fn ev_call(equity_pct: f64, pot_size: f64, to_call: f64) -> f64 {
    if to_call > 0.0 {
        equity_pct / 100.0 * (pot_size + to_call) - to_call
    } else {
        0.0
    }
}

/// Name of the hero's current made hand from known cards only.
pub fn made_hand_name(hero: &[Card], board: &[Card]) -> SimResult<String> {
    if hero.len() + board.len() < 5 {
        return Ok("Preflop (no made hand yet)".to_string());
    }
    let mut known: Vec<Card> = Vec::with_capacity(hero.len() + board.len());
    known.extend_from_slice(hero);
    known.extend_from_slice(board);
    Ok(evaluate_best(&known)?.category.to_string())
}

/// Call/fold guidance from the equity edge over pot odds.
pub fn recommendation(equity_pct: f64, pot_odds_pct: f64, to_call: f64) -> String {
    if to_call <= 0.0 {
        return "No call required. Bet or check based on your read.".to_string();
    }
    let edge = equity_pct - pot_odds_pct;
    if edge >= 5.0 {
        format!("Strong +EV call: equity beats pot odds by {:.1}%.", edge)
    } else if edge >= 1.0 {
        format!("Small +EV call: equity beats pot odds by {:.1}%.", edge)
    } else if edge > -2.0 {
        "Marginal spot: equity is close to pot odds either way.".to_string()
    } else {
        format!(
            "Negative EV call: equity falls {:.1}% short of pot odds. Fold is usually better.",
            -edge
        )
    }
}
