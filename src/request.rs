use std::collections::HashSet;

use serde::Deserialize;

use crate::cards::{available_cards, parse_card, Card};
use crate::error::{SimError, SimResult};

pub const MIN_ITERATIONS: usize = 1_000;
pub const MAX_ITERATIONS: usize = 300_000;
pub const DEFAULT_ITERATIONS: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Mode {
    MonteCarlo,
    Exact,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::MonteCarlo
    }
}

impl Mode {
    /// "Exact" is accepted but serviced by the Monte Carlo path; the method
    /// string makes the fallback visible to the caller.
    pub fn method_name(self) -> &'static str {
        match self {
            Mode::MonteCarlo => "MonteCarlo",
            Mode::Exact => "MonteCarlo (exact fallback)",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    #[serde(default = "default_variant")]
    pub variant: String,
    pub player_count: usize,
    pub hero_cards: Vec<String>,
    #[serde(default)]
    pub board_cards: Vec<String>,
    #[serde(default)]
    pub dead_cards: Vec<String>,
    #[serde(default)]
    pub pot_size: Option<f64>,
    #[serde(default)]
    pub to_call: Option<f64>,
    #[serde(default)]
    pub iterations: Option<i64>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_variant() -> String {
    "NLHE".to_string()
}

/// A request with all cards parsed and every input rule checked. Produced
/// before any simulation work begins.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub player_count: usize,
    pub hero: Vec<Card>,
    pub board: Vec<Card>,
    pub dead: Vec<Card>,
    pub available: Vec<Card>,
    /// Unknown cards each trial must draw: opponents' holes plus the board
    /// completion.
    pub required: usize,
    pub iterations: usize,
    pub pot_size: f64,
    pub to_call: f64,
    pub mode: Mode,
    pub seed: Option<u64>,
}

fn parse_all(codes: &[String]) -> SimResult<Vec<Card>> {
    codes.iter().map(|c| parse_card(c)).collect()
}

pub fn clamp_iterations(requested: Option<i64>) -> usize {
    let n = match requested {
        Some(n) if n > 0 => n as usize,
        _ => DEFAULT_ITERATIONS,
    };
    n.clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}

impl SimulationRequest {
    pub fn validate(&self) -> SimResult<ValidatedRequest> {
        if self.variant != "NLHE" {
            return Err(SimError::UnsupportedVariant(self.variant.clone()));
        }
        if !(2..=10).contains(&self.player_count) {
            return Err(SimError::InvalidPlayerCount(self.player_count));
        }
        if self.hero_cards.len() != 2 {
            return Err(SimError::InvalidCardCount {
                what: "hero",
                got: self.hero_cards.len(),
                expected: "exactly 2",
            });
        }
        if !matches!(self.board_cards.len(), 0 | 3 | 4 | 5) {
            return Err(SimError::InvalidCardCount {
                what: "board",
                got: self.board_cards.len(),
                expected: "0, 3, 4, or 5",
            });
        }

        let hero = parse_all(&self.hero_cards)?;
        let board = parse_all(&self.board_cards)?;
        let dead = parse_all(&self.dead_cards)?;

        // First duplicate across hero -> board -> dead is the one reported.
        let mut seen: HashSet<Card> = HashSet::new();
        for card in hero.iter().chain(board.iter()).chain(dead.iter()) {
            if !seen.insert(*card) {
                return Err(SimError::DuplicateCard(card.to_string()));
            }
        }

        let known: Vec<Card> = seen.iter().copied().collect();
        let available = available_cards(&known);
        let required = (self.player_count - 1) * 2 + (5 - board.len());
        if available.len() < required {
            return Err(SimError::InsufficientCards {
                required,
                available: available.len(),
            });
        }

        Ok(ValidatedRequest {
            player_count: self.player_count,
            hero,
            board,
            dead,
            available,
            required,
            iterations: clamp_iterations(self.iterations),
            pot_size: self.pot_size.unwrap_or(0.0).max(0.0),
            to_call: self.to_call.unwrap_or(0.0).max(0.0),
            mode: self.mode,
            seed: self.seed,
        })
    }
}
