use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::cards::Card;
use crate::decision::{ev_call, made_hand_name, pot_odds_pct, recommendation};
use crate::error::SimResult;
use crate::hand_evaluator::evaluate_best;
use crate::improve::analyze_improvement;
use crate::request::{SimulationRequest, ValidatedRequest};
use crate::sampler::draw_without_replacement;

/// Trials per rayon shard. Fixed so that per-shard RNG streams, and hence
/// the accumulated counts, do not depend on thread scheduling.
const SHARD_SIZE: usize = 4_096;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrialCounts {
    pub wins: u64,
    pub tie_trials: u64,
    pub losses: u64,
    /// Tie-trials binned by the number of tying opponents (index k-1, at
    /// most 9 opponents). Kept as integers so merging shards is exact in
    /// any order; the fractional 1/(k+1) shares are derived once at the
    /// end.
    pub ties_by_opponents: [u64; 9],
}

impl TrialCounts {
    fn merge(self, other: TrialCounts) -> TrialCounts {
        let mut ties_by_opponents = self.ties_by_opponents;
        for (bin, n) in ties_by_opponents.iter_mut().zip(other.ties_by_opponents) {
            *bin += n;
        }
        TrialCounts {
            wins: self.wins + other.wins,
            tie_trials: self.tie_trials + other.tie_trials,
            losses: self.losses + other.losses,
            ties_by_opponents,
        }
    }

    /// Sum of per-trial equity shares 1/(k+1) over tie-trials.
    pub fn tie_share(&self) -> f64 {
        self.ties_by_opponents
            .iter()
            .enumerate()
            .map(|(i, &n)| n as f64 / (i + 2) as f64)
            .sum()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub win_pct: f64,
    pub tie_pct: f64,
    pub lose_pct: f64,
    pub equity_pct: f64,
    pub pot_odds_pct: f64,
    pub ev_call: f64,
    pub made_hand: String,
    pub outs: Option<usize>,
    pub improve_turn_pct: Option<f64>,
    pub improve_river_pct: Option<f64>,
    pub recommendation: String,
    pub method: String,
    pub iterations: usize,
    pub elapsed_ms: f64,
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win {:.1}% | Tie {:.1}% | Lose {:.1}% (equity: {:.1}%)",
            self.win_pct, self.tie_pct, self.lose_pct, self.equity_pct,
        )
    }
}

fn mix_seed(base: u64, shard: u64) -> u64 {
    // splitmix64 finalizer over (base, shard) keeps shard streams apart
    // even for adjacent base seeds.
    let mut z = base ^ shard.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn run_shard(v: &ValidatedRequest, trials: usize, rng: &mut StdRng) -> TrialCounts {
    let opponents = v.player_count - 1;
    let hole_cards = opponents * 2;

    // Buffers reused across trials: a draw permutes the pool but keeps its
    // contents, so no reset is needed.
    let mut pool: Vec<Card> = v.available.clone();
    let mut hero_seven: Vec<Card> = Vec::with_capacity(7);
    let mut opp_seven: Vec<Card> = Vec::with_capacity(7);

    let mut counts = TrialCounts::default();
    for _ in 0..trials {
        let drawn = draw_without_replacement(&mut pool, v.required, rng);
        let (holes, runout) = drawn.split_at(hole_cards);

        hero_seven.clear();
        hero_seven.extend_from_slice(&v.hero);
        hero_seven.extend_from_slice(&v.board);
        hero_seven.extend_from_slice(runout);
        let hero_value = evaluate_best(&hero_seven).unwrap();

        let mut beaten = false;
        let mut tying = 0usize;
        for pair in holes.chunks_exact(2) {
            opp_seven.clear();
            opp_seven.extend_from_slice(pair);
            opp_seven.extend_from_slice(&v.board);
            opp_seven.extend_from_slice(runout);
            let opp_value = evaluate_best(&opp_seven).unwrap();
            if opp_value > hero_value {
                beaten = true;
                break;
            }
            if opp_value == hero_value {
                tying += 1;
            }
        }

        if beaten {
            counts.losses += 1;
        } else if tying > 0 {
            counts.tie_trials += 1;
            counts.ties_by_opponents[tying - 1] += 1;
        } else {
            counts.wins += 1;
        }
    }
    counts
}

/// Runs the full trial loop, sharded across rayon workers. For a fixed seed
/// the result is byte-identical regardless of scheduling; without a seed a
/// random base seed is drawn per request.
pub fn run_trials(v: &ValidatedRequest) -> TrialCounts {
    let base_seed = v.seed.unwrap_or_else(rand::random);
    let full_shards = v.iterations / SHARD_SIZE;
    let remainder = v.iterations % SHARD_SIZE;
    let shard_count = full_shards + usize::from(remainder > 0);

    (0..shard_count)
        .into_par_iter()
        .map(|shard| {
            let trials = if shard < full_shards {
                SHARD_SIZE
            } else {
                remainder
            };
            let mut rng = StdRng::seed_from_u64(mix_seed(base_seed, shard as u64));
            run_shard(v, trials, &mut rng)
        })
        .reduce(TrialCounts::default, TrialCounts::merge)
}

/// Validates the request, runs the Monte Carlo trial loop, the improvement
/// enumeration, and the decision summary. The single entry point of the
/// engine.
pub fn simulate(request: &SimulationRequest) -> SimResult<SimulationResult> {
    let start = Instant::now();
    let v = request.validate()?;

    let counts = run_trials(&v);
    let iters = v.iterations as f64;
    let win_pct = counts.wins as f64 / iters * 100.0;
    let tie_pct = counts.tie_trials as f64 / iters * 100.0;
    let lose_pct = counts.losses as f64 / iters * 100.0;
    let equity_pct = (counts.wins as f64 + counts.tie_share()) / iters * 100.0;

    let improvement = analyze_improvement(&v)?;
    let pot_odds = pot_odds_pct(v.pot_size, v.to_call);
    let ev = ev_call(equity_pct, v.pot_size, v.to_call);

    Ok(SimulationResult {
        win_pct,
        tie_pct,
        lose_pct,
        equity_pct,
        pot_odds_pct: pot_odds,
        ev_call: ev,
        made_hand: made_hand_name(&v.hero, &v.board)?,
        outs: improvement.outs,
        improve_turn_pct: improvement.improve_turn_pct,
        improve_river_pct: improvement.improve_river_pct,
        recommendation: recommendation(equity_pct, pot_odds, v.to_call),
        method: v.mode.method_name().to_string(),
        iterations: v.iterations,
        elapsed_ms: start.elapsed().as_secs_f64() * 1_000.0,
    })
}
