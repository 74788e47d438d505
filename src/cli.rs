use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{parse_cards, Card};
use crate::decision::{ev_call, pot_odds_pct, recommendation};
use crate::display::{board_display, equity_bar, print_error, result_table};
use crate::equity::simulate;
use crate::error::SimResult;
use crate::hand_evaluator::evaluate_best;
use crate::improve::analyze_improvement;
use crate::request::{Mode, SimulationRequest};

#[derive(Parser)]
#[command(
    name = "oddsmith",
    version = "1.0.0",
    about = "Hold'em equity simulator — win/tie/lose odds, outs, pot odds, and EV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliMode {
    #[value(name = "montecarlo")]
    MonteCarlo,
    #[value(name = "exact")]
    Exact,
}

impl CliMode {
    fn to_mode(self) -> Mode {
        match self {
            CliMode::MonteCarlo => Mode::MonteCarlo,
            CliMode::Exact => Mode::Exact,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate hero equity against random opponents
    Simulate {
        /// Hero hole cards (e.g., AsKs)
        hero: String,
        /// Board cards (e.g., Qs Js Ts)
        #[arg(short, long)]
        board: Option<String>,
        /// Dead cards excluded from sampling
        #[arg(short, long)]
        dead: Option<String>,
        /// Number of players at the table (hero included)
        #[arg(short, long, default_value = "2")]
        players: usize,
        /// Current pot size
        #[arg(long)]
        pot: Option<f64>,
        /// Amount hero must call
        #[arg(long)]
        call: Option<f64>,
        /// Number of Monte Carlo iterations
        #[arg(short = 'n', long)]
        iterations: Option<i64>,
        /// Random seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Simulation mode
        #[arg(long, default_value = "montecarlo")]
        mode: CliMode,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count outs and improvement odds from exact enumeration
    Outs {
        /// Hero hole cards (e.g., AhKh)
        hero: String,
        /// Board cards — flop or turn (e.g., QhJh2c)
        board: String,
        /// Dead cards excluded from enumeration
        #[arg(short, long)]
        dead: Option<String>,
    },
    /// Pot odds and EV of calling
    Odds {
        /// Current pot size
        pot: f64,
        /// Amount to call
        call: f64,
        /// Your equity (percent) to calculate EV and a recommendation
        #[arg(short, long)]
        equity: Option<f64>,
    },
    /// Evaluate the best 5-card hand from 5-7 cards
    Eval {
        /// Cards (e.g., AsKsQsJsTs2h)
        cards: String,
    },
    /// Run a JSON file of simulation requests
    Batch {
        /// Path to a JSON array of requests
        file: String,
        /// Emit all results as a JSON array
        #[arg(long)]
        json: bool,
    },
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

pub fn run_with_args(args: Vec<String>) {
    let cli = Cli::parse_from(args);
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    match cli.command {
        Commands::Simulate {
            hero,
            board,
            dead,
            players,
            pot,
            call,
            iterations,
            seed,
            mode,
            json,
        } => cmd_simulate(
            hero, board, dead, players, pot, call, iterations, seed, mode, json,
        ),
        Commands::Outs { hero, board, dead } => cmd_outs(hero, board, dead),
        Commands::Odds { pot, call, equity } => cmd_odds(pot, call, equity),
        Commands::Eval { cards } => cmd_eval(cards),
        Commands::Batch { file, json } => cmd_batch(file, json),
    }
}

fn codes_of(notation: &str) -> SimResult<Vec<String>> {
    Ok(parse_cards(notation)?
        .iter()
        .map(|c| c.to_string())
        .collect())
}

#[allow(clippy::too_many_arguments)]
fn cmd_simulate(
    hero: String,
    board: Option<String>,
    dead: Option<String>,
    players: usize,
    pot: Option<f64>,
    call: Option<f64>,
    iterations: Option<i64>,
    seed: Option<u64>,
    mode: CliMode,
    json: bool,
) {
    let request = match build_request(
        &hero, &board, &dead, players, pot, call, iterations, seed, mode,
    ) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    let result = match simulate(&request) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{}", s),
            Err(e) => print_error(&e.to_string()),
        }
        return;
    }

    let board_cards: Vec<Card> = board
        .as_deref()
        .map(|b| parse_cards(b).unwrap_or_default())
        .unwrap_or_default();
    let board_str = if board_cards.is_empty() {
        String::new()
    } else {
        format!(" on {}", board_display(&board_cards))
    };

    println!();
    println!(
        "  {} vs {} random {}{}",
        hero.bold(),
        players - 1,
        if players == 2 { "hand" } else { "hands" },
        board_str,
    );
    println!();
    println!("  Hero:   {}", equity_bar(result.equity_pct, 30));
    println!("  Field:  {}", equity_bar(100.0 - result.equity_pct, 30));
    println!();
    println!("{}", result_table(&result));
    println!();
    println!("  {}", result.recommendation.bold());
    println!();
}

#[allow(clippy::too_many_arguments)]
fn build_request(
    hero: &str,
    board: &Option<String>,
    dead: &Option<String>,
    players: usize,
    pot: Option<f64>,
    call: Option<f64>,
    iterations: Option<i64>,
    seed: Option<u64>,
    mode: CliMode,
) -> SimResult<SimulationRequest> {
    Ok(SimulationRequest {
        variant: "NLHE".to_string(),
        player_count: players,
        hero_cards: codes_of(hero)?,
        board_cards: board.as_deref().map(codes_of).transpose()?.unwrap_or_default(),
        dead_cards: dead.as_deref().map(codes_of).transpose()?.unwrap_or_default(),
        pot_size: pot,
        to_call: call,
        iterations,
        mode: mode.to_mode(),
        seed,
    })
}

fn cmd_outs(hero: String, board: String, dead: Option<String>) {
    let run = || -> SimResult<()> {
        let request = SimulationRequest {
            variant: "NLHE".to_string(),
            player_count: 2,
            hero_cards: codes_of(&hero)?,
            board_cards: codes_of(&board)?,
            dead_cards: dead.as_deref().map(codes_of).transpose()?.unwrap_or_default(),
            pot_size: None,
            to_call: None,
            iterations: None,
            mode: Mode::MonteCarlo,
            seed: None,
        };
        let v = request.validate()?;
        let improvement = analyze_improvement(&v)?;

        println!();
        println!(
            "  {} on {}",
            hero.bold(),
            board_display(&v.board),
        );
        println!();

        match improvement.outs {
            Some(outs) => {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(vec![
                    Cell::new("Metric").set_alignment(CellAlignment::Left),
                    Cell::new("Value").set_alignment(CellAlignment::Right),
                ]);
                table.add_row(vec![
                    Cell::new("Outs".bold().to_string()),
                    Cell::new(format!("{}", outs)),
                ]);
                if let Some(pct) = improvement.improve_turn_pct {
                    table.add_row(vec![
                        Cell::new("Improve by turn".bold().to_string()),
                        Cell::new(format!("{:.1}%", pct)),
                    ]);
                }
                if let Some(pct) = improvement.improve_river_pct {
                    table.add_row(vec![
                        Cell::new("Improve by river".bold().to_string()),
                        Cell::new(format!("{:.1}%", pct)),
                    ]);
                }
                println!("{}", table);
            }
            None => println!("  Outs only apply on the flop or turn."),
        }
        println!();
        Ok(())
    };

    if let Err(e) = run() {
        print_error(&e.to_string());
    }
}

fn cmd_odds(pot: f64, call: f64, equity: Option<f64>) {
    let odds = pot_odds_pct(pot, call);

    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric").set_alignment(CellAlignment::Left),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Pot"), Cell::new(format!("${:.0}", pot))]);
    table.add_row(vec![
        Cell::new("To call"),
        Cell::new(format!("${:.0}", call)),
    ]);
    table.add_row(vec![
        Cell::new("Pot odds"),
        Cell::new(format!("{:.1}%", odds)),
    ]);

    if let Some(eq) = equity {
        let ev = ev_call(eq, pot, call);
        let ev_str = if ev >= 0.0 {
            format!("${:+.2}", ev).green().to_string()
        } else {
            format!("${:+.2}", ev).red().to_string()
        };
        table.add_row(vec![Cell::new("EV of call"), Cell::new(ev_str)]);
    }
    println!("{}", table);

    if let Some(eq) = equity {
        println!();
        println!("  {}", recommendation(eq, odds, call).bold());
    }
    println!();
}

fn cmd_eval(cards: String) {
    let run = || -> SimResult<()> {
        let parsed = parse_cards(&cards)?;
        let value = evaluate_best(&parsed)?;
        println!();
        println!("  {}", board_display(&parsed));
        println!(
            "  {} (tiebreaks: {:?})",
            value.category.to_string().bold(),
            value.tiebreaks,
        );
        println!();
        Ok(())
    };

    if let Err(e) = run() {
        print_error(&e.to_string());
    }
}

fn cmd_batch(file: String, json: bool) {
    let run = || -> SimResult<()> {
        let contents = std::fs::read_to_string(&file)?;
        let requests: Vec<SimulationRequest> = serde_json::from_str(&contents)?;
        let total = requests.len();

        println!();
        println!(
            "  {} Batch: {} requests from {}",
            "oddsmith".bold(),
            total.to_string().bold(),
            file,
        );
        println!();

        let batch_start = Instant::now();
        let mut results = Vec::with_capacity(total);
        for (i, request) in requests.iter().enumerate() {
            let spot = request.hero_cards.join("");
            match simulate(request) {
                Ok(result) => {
                    println!(
                        "  [{}/{}] {} vs {} ... equity {:.1}% ({:.0} ms)",
                        i + 1,
                        total,
                        spot,
                        request.player_count - 1,
                        result.equity_pct,
                        result.elapsed_ms,
                    );
                    results.push(result);
                }
                Err(e) => {
                    println!(
                        "  [{}/{}] {} ... {}",
                        i + 1,
                        total,
                        spot,
                        format!("error: {}", e).red(),
                    );
                }
            }
        }

        println!();
        println!(
            "  Complete: {} of {} in {:.1}s",
            results.len().to_string().bold(),
            total,
            batch_start.elapsed().as_secs_f64(),
        );
        println!();

        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Ok(())
    };

    if let Err(e) = run() {
        print_error(&e.to_string());
    }
}
