use approx::assert_abs_diff_eq;
use oddsmith::error::SimError;
use oddsmith::request::{Mode, SimulationRequest};
use oddsmith::simulate;

fn request(hero: &[&str], board: &[&str], players: usize) -> SimulationRequest {
    SimulationRequest {
        variant: "NLHE".to_string(),
        player_count: players,
        hero_cards: hero.iter().map(|s| s.to_string()).collect(),
        board_cards: board.iter().map(|s| s.to_string()).collect(),
        dead_cards: vec![],
        pot_size: None,
        to_call: None,
        iterations: Some(20_000),
        mode: Mode::MonteCarlo,
        seed: Some(42),
    }
}

#[test]
fn test_made_royal_flush_never_loses() {
    // Board is complete; no two hole cards can beat a royal flush.
    let req = request(&["As", "Ks"], &["Qs", "Js", "Ts", "2h", "3d"], 2);
    let result = simulate(&req).unwrap();
    assert_eq!(result.win_pct, 100.0);
    assert_eq!(result.tie_pct, 0.0);
    assert_eq!(result.lose_pct, 0.0);
    assert_eq!(result.equity_pct, 100.0);
    assert_eq!(result.made_hand, "Straight Flush");
}

#[test]
fn test_weak_hand_preflop_equity_band() {
    // 3-2 suited vs one random hand is a well-known ~36% spot; a generous
    // band still catches a biased sampler.
    let mut req = request(&["2h", "3h"], &[], 2);
    req.iterations = Some(50_000);
    let result = simulate(&req).unwrap();
    assert!(
        result.equity_pct > 32.0 && result.equity_pct < 40.0,
        "equity={}",
        result.equity_pct
    );
}

#[test]
fn test_aces_dominate_one_random_hand() {
    let result = simulate(&request(&["As", "Ah"], &[], 2)).unwrap();
    assert!(result.equity_pct > 80.0, "equity={}", result.equity_pct);
}

#[test]
fn test_equity_shrinks_with_more_players() {
    let heads_up = simulate(&request(&["As", "Ah"], &[], 2)).unwrap();
    let full_ring = simulate(&request(&["As", "Ah"], &[], 9)).unwrap();
    assert!(full_ring.equity_pct < heads_up.equity_pct);
}

#[test]
fn test_percentages_sum_to_one_hundred() {
    for players in [2, 4, 10] {
        let result = simulate(&request(&["7c", "8d"], &[], players)).unwrap();
        assert_abs_diff_eq!(
            result.win_pct + result.tie_pct + result.lose_pct,
            100.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let req = request(&["Qc", "Jd"], &["9h", "8s", "2c"], 4);
    let a = simulate(&req).unwrap();
    let b = simulate(&req).unwrap();
    assert_eq!(a.win_pct, b.win_pct);
    assert_eq!(a.tie_pct, b.tie_pct);
    assert_eq!(a.lose_pct, b.lose_pct);
    assert_eq!(a.equity_pct, b.equity_pct);
    assert_eq!(a.outs, b.outs);
    assert_eq!(a.improve_turn_pct, b.improve_turn_pct);
    assert_eq!(a.improve_river_pct, b.improve_river_pct);
    assert_eq!(a.recommendation, b.recommendation);
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn test_fixed_seed_identical_across_thread_counts() {
    // Shard counts are merged as integers, so the grouping rayon happens
    // to use must not change a single bit of the result.
    let mut req = request(&["7c", "8d"], &[], 10);
    req.iterations = Some(40_000);

    let baseline = simulate(&req).unwrap();
    for threads in [1usize, 2, 4, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let result = pool.install(|| simulate(&req)).unwrap();
        assert_eq!(
            result.equity_pct.to_bits(),
            baseline.equity_pct.to_bits(),
            "threads={}: {} vs {}",
            threads,
            result.equity_pct,
            baseline.equity_pct
        );
        assert_eq!(result.win_pct, baseline.win_pct);
        assert_eq!(result.tie_pct, baseline.tie_pct);
        assert_eq!(result.lose_pct, baseline.lose_pct);
    }
}

#[test]
fn test_exact_mode_falls_back_to_monte_carlo() {
    let mut req = request(&["As", "Kd"], &[], 2);
    req.mode = Mode::Exact;
    let result = simulate(&req).unwrap();
    assert_eq!(result.method, "MonteCarlo (exact fallback)");

    let default = simulate(&request(&["As", "Kd"], &[], 2)).unwrap();
    assert_eq!(default.method, "MonteCarlo");
}

#[test]
fn test_iterations_reported_after_clamping() {
    let mut req = request(&["As", "Kd"], &[], 2);
    req.iterations = Some(10);
    let result = simulate(&req).unwrap();
    assert_eq!(result.iterations, 1_000);

    req.iterations = None;
    let result = simulate(&req).unwrap();
    assert_eq!(result.iterations, 50_000);
}

#[test]
fn test_duplicate_card_named() {
    let req = request(&["As", "As"], &[], 2);
    match simulate(&req) {
        Err(SimError::DuplicateCard(name)) => assert_eq!(name, "As"),
        other => panic!("expected DuplicateCard, got {:?}", other.map(|r| r.equity_pct)),
    }
}

#[test]
fn test_duplicate_across_board_and_dead() {
    let mut req = request(&["As", "Kd"], &["Qh", "Jh", "2c"], 2);
    req.dead_cards = vec!["Qh".to_string()];
    assert!(matches!(simulate(&req), Err(SimError::DuplicateCard(name)) if name == "Qh"));
}

#[test]
fn test_insufficient_cards_rejected_before_sampling() {
    // 10 players need 23 unknown cards; 45 dead + 2 hero leaves only 5.
    let mut req = request(&["As", "Kd"], &[], 10);
    req.dead_cards = oddsmith::cards::full_deck()
        .iter()
        .map(|c| c.to_string())
        .filter(|c| c != "As" && c != "Kd")
        .take(45)
        .collect();
    assert!(matches!(
        simulate(&req),
        Err(SimError::InsufficientCards {
            required: 23,
            available: 5
        })
    ));
}

#[test]
fn test_unsupported_variant() {
    let mut req = request(&["As", "Kd"], &[], 2);
    req.variant = "Omaha".to_string();
    assert!(matches!(
        simulate(&req),
        Err(SimError::UnsupportedVariant(v)) if v == "Omaha"
    ));
}

#[test]
fn test_invalid_player_count() {
    assert!(matches!(
        simulate(&request(&["As", "Kd"], &[], 1)),
        Err(SimError::InvalidPlayerCount(1))
    ));
    assert!(matches!(
        simulate(&request(&["As", "Kd"], &[], 11)),
        Err(SimError::InvalidPlayerCount(11))
    ));
}

#[test]
fn test_result_serializes_camel_case() {
    let result = simulate(&request(&["As", "Ah"], &[], 2)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"winPct\""));
    assert!(json.contains("\"equityPct\""));
    assert!(json.contains("\"improveTurnPct\""));
    assert!(json.contains("\"elapsedMs\""));
}

#[test]
fn test_request_deserializes_external_contract() {
    let json = r#"{
        "variant": "NLHE",
        "playerCount": 3,
        "heroCards": ["As", "Kd"],
        "boardCards": ["Qh", "Jh", "2c"],
        "deadCards": ["9d"],
        "potSize": 120.0,
        "toCall": 40.0,
        "iterations": 5000,
        "mode": "Exact",
        "seed": 7
    }"#;
    let req: SimulationRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.player_count, 3);
    assert_eq!(req.mode, Mode::Exact);
    let result = simulate(&req).unwrap();
    assert_eq!(result.iterations, 5_000);
    assert_eq!(result.method, "MonteCarlo (exact fallback)");
}
