//! Swing and tipping-line reports for a state roster.

use anyhow::Context;
use efw_core::roster::{load_state_rows, total_evs};
use efw_core::swing::{
    apply_swing, rank_rows, tiebreaker_majority, tipping_line, StateRow, Swing, SwingReport,
};
use log::info;
use std::fs;

fn load_roster(states_csv: &str) -> anyhow::Result<Vec<StateRow>> {
    let csv_data = fs::read_to_string(states_csv)
        .with_context(|| format!("reading state roster {states_csv}"))?;
    load_state_rows(&csv_data).with_context(|| format!("parsing state roster {states_csv}"))
}

/// Run the swing report for a roster file.
pub fn run_swing(
    states_csv: &str,
    points: f64,
    total: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let rows = load_roster(states_csv)?;
    let total = total.unwrap_or_else(|| total_evs(&rows));
    let swing = Swing(points);
    info!("Applying swing {} to {} states ({} EVs)", swing, rows.len(), total);

    let report = apply_swing(&rows, swing, total);
    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&rows, &report))?);
    } else {
        print!("{}", render_swing_report(&rows, &report));
    }
    Ok(())
}

/// Run the tipping-line report for a roster file.
pub fn run_tipping(states_csv: &str, total: Option<u32>) -> anyhow::Result<()> {
    let rows = load_roster(states_csv)?;
    let total = total.unwrap_or_else(|| total_evs(&rows));
    print!("{}", render_tipping_report(&rows, total));
    Ok(())
}

pub fn render_swing_report(rows: &[StateRow], report: &SwingReport) -> String {
    let mut out = format!("Swing: {}\n", report.swing);
    for (row, outcome) in rows.iter().zip(&report.rows) {
        out.push_str(&format!(
            "{:<4}{:<22}{:>4}  {:<8}{}\n",
            row.code,
            row.name,
            row.evs,
            outcome.call.text(),
            outcome.call.class()
        ));
    }
    let t = report.totals;
    out.push_str(&format!("D {}  R {}  Tie {}\n", t.dem, t.gop, t.tie));
    out
}

pub fn render_tipping_report(rows: &[StateRow], total: u32) -> String {
    let majority = tiebreaker_majority(total);
    let mut out = String::new();
    for ranked in rank_rows(rows, total) {
        if ranked.tipping {
            out.push_str(&format!("---- {majority} to win ----\n"));
        }
        out.push_str(&format!(
            "{:<4}{:>6.1}  D {:>3}  R {:>3}\n",
            ranked.row.code, ranked.row.margin, ranked.dem_ev, ranked.gop_ev
        ));
    }
    match tipping_line(rows, total) {
        Some(state) => out.push_str(&format!("Tipping line: above {}\n", state.name)),
        None => out.push_str("Tipping line: majority not reached\n"),
    }
    out
}

fn report_json(rows: &[StateRow], report: &SwingReport) -> serde_json::Value {
    let states: Vec<serde_json::Value> = rows
        .iter()
        .zip(&report.rows)
        .map(|(row, outcome)| {
            serde_json::json!({
                "id": row.id,
                "code": row.code,
                "evs": row.evs,
                "base_margin": row.margin,
                "margin": outcome.margin,
                "text": outcome.call.text(),
                "class": outcome.call.class(),
                "fill": outcome.call.fill(),
            })
        })
        .collect();
    serde_json::json!({
        "swing": report.swing.points(),
        "label": report.swing.label(),
        "states": states,
        "totals": report.totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<StateRow> {
        efw_core::roster::load_state_rows(
            "ID,CODE,NAME,EVS,MARGIN\n0,A,Alpha,40,10.0\n1,B,Beta,20,0.5\n2,C,Gamma,40,-3.0\n",
        )
        .unwrap()
    }

    #[test]
    fn test_render_swing_report() {
        let rows = rows();
        let report = apply_swing(&rows, Swing(1.0), 100);
        let text = render_swing_report(&rows, &report);
        assert!(text.starts_with("Swing: D+1\n"));
        assert!(text.contains("D+1.5"));
        assert!(text.contains("R+2.0"));
        assert!(text.ends_with("D 60  R 40  Tie 0\n"));
    }

    #[test]
    fn test_render_tipping_report() {
        let text = render_tipping_report(&rows(), 100);
        assert!(text.contains("---- 51 to win ----\nC "));
        assert!(text.ends_with("Tipping line: above Gamma\n"));
    }

    #[test]
    fn test_report_json() {
        let rows = rows();
        let report = apply_swing(&rows, Swing::NONE, 100);
        let value = report_json(&rows, &report);
        assert_eq!(value["label"], "None");
        assert_eq!(value["states"][1]["text"], "Tie");
        assert_eq!(value["totals"]["tie"], 20);
    }
}
