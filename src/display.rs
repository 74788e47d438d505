use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::equity::SimulationResult;

pub fn equity_bar(equity: f64, width: usize) -> String {
    let filled = ((equity / 100.0) * width as f64) as usize;
    let filled = filled.min(width);
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", equity);

    if equity >= 60.0 {
        format!("{} {}", bar.green(), pct)
    } else if equity >= 40.0 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let rank = card.rank.to_char();
            let symbol = card.suit.symbol();
            match card.suit {
                Suit::Spades => format!("{}{}", rank, symbol).white().to_string(),
                Suit::Hearts => format!("{}{}", rank, symbol).red().to_string(),
                Suit::Diamonds => format!("{}{}", rank, symbol).blue().to_string(),
                Suit::Clubs => format!("{}{}", rank, symbol).green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn result_table(result: &SimulationResult) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric").set_alignment(CellAlignment::Left),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);

    table.add_row(vec![
        Cell::new("Win".bold().to_string()),
        Cell::new(format!("{:.1}%", result.win_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Tie".bold().to_string()),
        Cell::new(format!("{:.1}%", result.tie_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Lose".bold().to_string()),
        Cell::new(format!("{:.1}%", result.lose_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Equity".bold().to_string()),
        Cell::new(format!("{:.1}%", result.equity_pct).bold().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Made hand".bold().to_string()),
        Cell::new(result.made_hand.clone()),
    ]);

    if let Some(outs) = result.outs {
        table.add_row(vec![
            Cell::new("Outs".bold().to_string()),
            Cell::new(format!("{}", outs)),
        ]);
    }
    if let Some(pct) = result.improve_turn_pct {
        table.add_row(vec![
            Cell::new("Improve by turn".bold().to_string()),
            Cell::new(format!("{:.1}%", pct)),
        ]);
    }
    if let Some(pct) = result.improve_river_pct {
        table.add_row(vec![
            Cell::new("Improve by river".bold().to_string()),
            Cell::new(format!("{:.1}%", pct)),
        ]);
    }

    if result.pot_odds_pct > 0.0 {
        table.add_row(vec![
            Cell::new("Pot odds".bold().to_string()),
            Cell::new(format!("{:.1}%", result.pot_odds_pct)),
        ]);
        let ev_str = if result.ev_call >= 0.0 {
            format!("{:+.2}", result.ev_call).green().to_string()
        } else {
            format!("{:+.2}", result.ev_call).red().to_string()
        };
        table.add_row(vec![
            Cell::new("EV of call".bold().to_string()),
            Cell::new(ev_str),
        ]);
    }

    table.add_row(vec![
        Cell::new("Method".bold().to_string()),
        Cell::new(result.method.clone()),
    ]);
    table.add_row(vec![
        Cell::new("Iterations".bold().to_string()),
        Cell::new(format!("{}", result.iterations)),
    ]);
    table.add_row(vec![
        Cell::new("Elapsed".bold().to_string()),
        Cell::new(format!("{:.0} ms", result.elapsed_ms)),
    ]);

    table.to_string()
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
