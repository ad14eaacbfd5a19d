//! Uniform swing applied to every state's margin.
//!
//! The meter page shows each state's margin, its map color, and the
//! electoral-vote totals. Moving the slider shifts every margin by the same
//! amount and everything is recomputed from the baseline rows; nothing is
//! carried over between slider ticks.

use crate::margin::{clamp_margin, MarginCall};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Electoral votes across all states and DC.
pub const DEFAULT_TOTAL_EVS: u32 = 538;

/// A swing in percentage points, positive toward the Democrat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Swing(pub f64);

impl Swing {
    pub const NONE: Swing = Swing(0.0);

    /// The slider moves in half-point steps, so its raw value is doubled points.
    pub fn from_slider(raw: f64) -> Self {
        Swing(raw / 2.0)
    }

    pub fn points(self) -> f64 {
        self.0
    }

    /// "D+1.5", "R+2", or "None".
    pub fn label(self) -> String {
        if self.0 < 0.0 {
            format!("R+{}", self.0.abs())
        } else if self.0 > 0.0 {
            format!("D+{}", self.0)
        } else {
            "None".to_string()
        }
    }
}

impl fmt::Display for Swing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One state on the meter, with its baseline polling margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRow {
    /// Position on the page; the DOM row is `state_<id>`.
    pub id: u32,
    /// Postal code, also the id of the state's shape on the map.
    pub code: String,
    pub name: String,
    pub evs: u32,
    pub margin: f64,
}

/// A row after the swing has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    pub id: u32,
    pub code: String,
    pub margin: f64,
    pub call: MarginCall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EvTotals {
    pub dem: u32,
    pub gop: u32,
    pub tie: u32,
}

impl EvTotals {
    pub fn sum(&self) -> u32 {
        self.dem + self.gop + self.tie
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwingReport {
    pub swing: Swing,
    pub rows: Vec<RowOutcome>,
    pub totals: EvTotals,
}

/// Shift a baseline margin and clamp it to the displayable range.
pub fn swung_margin(base: f64, swing: Swing) -> f64 {
    clamp_margin(base + swing.points())
}

/// Recompute every row and the EV totals for a swing.
///
/// Tied states count toward neither side; whatever is left of `total_evs`
/// is reported as the tie total.
pub fn apply_swing(rows: &[StateRow], swing: Swing, total_evs: u32) -> SwingReport {
    let mut dem = 0u32;
    let mut gop = 0u32;

    let outcomes: Vec<RowOutcome> = rows
        .iter()
        .map(|row| {
            let margin = swung_margin(row.margin, swing);
            let call = MarginCall::classify(margin);
            match call {
                MarginCall::Dem { .. } => dem += row.evs,
                MarginCall::Gop { .. } => gop += row.evs,
                MarginCall::Tie => {}
            }
            RowOutcome { id: row.id, code: row.code.clone(), margin, call }
        })
        .collect();

    if dem + gop > total_evs {
        log::warn!(
            "swing {}: decided EVs {} exceed total {}",
            swing,
            dem + gop,
            total_evs
        );
    }

    SwingReport {
        swing,
        rows: outcomes,
        totals: EvTotals { dem, gop, tie: total_evs.saturating_sub(dem + gop) },
    }
}

/// Votes needed to win outright, e.g. 270 of 538.
pub fn tiebreaker_majority(total: u32) -> u32 {
    total / 2 + 1
}

/// A row in the ranked margin table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub row: StateRow,
    /// Republican EVs still available before this row is added to the Democrat.
    pub gop_ev: u32,
    /// Democratic EVs once this row and everything above it is won.
    pub dem_ev: u32,
    pub tipping: bool,
}

impl RankedRow {
    pub fn class(&self) -> &'static str {
        if self.tipping {
            "margin_row_tipping"
        } else {
            "margin_row_normal"
        }
    }
}

/// Sort rows from most Democratic to most Republican and mark the tipping line.
///
/// Walking down the list, the Democrat accumulates each state's votes. The
/// first row reached once that running total already holds a majority is
/// flagged; the page draws the tipping line above it.
pub fn rank_rows(rows: &[StateRow], total_evs: u32) -> Vec<RankedRow> {
    let mut sorted: Vec<StateRow> = rows.to_vec();
    sorted.sort_by(|a, b| b.margin.partial_cmp(&a.margin).unwrap_or(Ordering::Equal));

    let win_evs = tiebreaker_majority(total_evs);
    let mut dem_ev = 0u32;
    let mut gop_ev = total_evs;
    let mut marked = false;

    sorted
        .into_iter()
        .map(|row| {
            let tipping = !marked && dem_ev >= win_evs;
            marked |= tipping;
            let ranked_gop = gop_ev;
            dem_ev += row.evs;
            gop_ev = gop_ev.saturating_sub(row.evs);
            RankedRow { row, gop_ev: ranked_gop, dem_ev, tipping }
        })
        .collect()
}

/// The state the tipping line sits on, if the Democrat reaches a majority
/// before the last row.
pub fn tipping_line(rows: &[StateRow], total_evs: u32) -> Option<StateRow> {
    rank_rows(rows, total_evs)
        .into_iter()
        .find(|r| r.tipping)
        .map(|r| r.row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, code: &str, evs: u32, margin: f64) -> StateRow {
        StateRow { id, code: code.to_string(), name: code.to_string(), evs, margin }
    }

    fn sample() -> Vec<StateRow> {
        vec![
            row(0, "CA", 54, 25.0),
            row(1, "PA", 19, 0.5),
            row(2, "TX", 40, -7.0),
            row(3, "GA", 16, -1.2),
            row(4, "WY", 3, -45.0),
        ]
    }

    #[test]
    fn test_slider_halves() {
        assert_eq!(Swing::from_slider(5.0).points(), 2.5);
        assert_eq!(Swing::from_slider(-4.0).points(), -2.0);
    }

    #[test]
    fn test_swing_label() {
        assert_eq!(Swing::from_slider(3.0).label(), "D+1.5");
        assert_eq!(Swing::from_slider(-4.0).label(), "R+2");
        assert_eq!(Swing::from_slider(0.0).label(), "None");
        assert_eq!(Swing::from_slider(-0.0).label(), "None");
    }

    #[test]
    fn test_half_point_becomes_lean() {
        let report = apply_swing(&[row(0, "PA", 19, 0.5)], Swing(2.0), 19);
        let pa = &report.rows[0];
        assert_eq!(pa.margin, 2.5);
        assert_eq!(pa.call.text(), "D+2.5");
        assert_eq!(pa.call.class(), "leans_dem");
        assert_eq!(report.totals, EvTotals { dem: 19, gop: 0, tie: 0 });
    }

    #[test]
    fn test_quarter_point_baseline_rounds_up_on_half_steps() {
        // 1.75 plus a half-point swing lands exactly on 2.25.
        let report = apply_swing(&[row(0, "NV", 6, 1.75)], Swing::from_slider(1.0), 6);
        assert_eq!(report.rows[0].margin, 2.25);
        assert_eq!(report.rows[0].call.text(), "D+2.3");

        let report = apply_swing(&[row(0, "NV", 6, -1.75)], Swing::from_slider(1.0), 6);
        assert_eq!(report.rows[0].call.text(), "R+1.3");
    }

    #[test]
    fn test_no_swing_totals() {
        let report = apply_swing(&sample(), Swing::NONE, 538);
        assert_eq!(report.totals.dem, 54);
        assert_eq!(report.totals.gop, 40 + 16 + 3);
        assert_eq!(report.totals.tie, 538 - 54 - 59);
        assert!(report.rows[1].call.is_tie());
    }

    #[test]
    fn test_margins_clamped() {
        let report = apply_swing(&sample(), Swing(80.0), 538);
        assert_eq!(report.rows[0].margin, 99.0);
        let report = apply_swing(&sample(), Swing(-80.0), 538);
        assert_eq!(report.rows[4].margin, -99.0);
        for r in &report.rows {
            assert!(r.margin.abs() <= 99.0);
        }
    }

    #[test]
    fn test_totals_always_sum_to_total() {
        let rows = sample();
        let total: u32 = rows.iter().map(|r| r.evs).sum();
        for raw in -60..=60 {
            let report = apply_swing(&rows, Swing::from_slider(f64::from(raw)), total);
            assert_eq!(report.totals.sum(), total, "raw slider {raw}");
        }
    }

    #[test]
    fn test_swing_moves_states_across_the_line() {
        // GA is R+1.2; a half-point Dem swing makes it a tie, a full 2.5 flips it.
        let report = apply_swing(&sample(), Swing(0.5), 538);
        assert!(report.rows[3].call.is_tie());
        let report = apply_swing(&sample(), Swing(2.5), 538);
        assert_eq!(report.rows[3].call.text(), "D+1.3");
        assert_eq!(report.rows[3].call.fill(), "#99ccff");
    }

    #[test]
    fn test_majority() {
        assert_eq!(tiebreaker_majority(538), 270);
        assert_eq!(tiebreaker_majority(100), 51);
    }

    #[test]
    fn test_rank_rows_marks_tipping_line() {
        let rows = vec![
            row(0, "A", 40, 10.0),
            row(1, "B", 20, 5.0),
            row(2, "C", 30, -2.0),
            row(3, "D", 10, -8.0),
        ];
        // Majority of 100 is 51; after A and B the Democrat has 60.
        let ranked = rank_rows(&rows, 100);
        let codes: Vec<&str> = ranked.iter().map(|r| r.row.code.as_str()).collect();
        assert_eq!(codes, ["A", "B", "C", "D"]);
        assert!(!ranked[1].tipping);
        assert!(ranked[2].tipping);
        assert_eq!(ranked[2].class(), "margin_row_tipping");
        assert_eq!(ranked[3].class(), "margin_row_normal");
        assert_eq!(ranked[2].gop_ev, 40);
        assert_eq!(ranked[2].dem_ev, 90);
        assert_eq!(tipping_line(&rows, 100).map(|r| r.code), Some("C".to_string()));
    }

    #[test]
    fn test_rank_rows_sorts_by_margin() {
        let ranked = rank_rows(&sample(), 538);
        let codes: Vec<&str> = ranked.iter().map(|r| r.row.code.as_str()).collect();
        assert_eq!(codes, ["CA", "PA", "GA", "TX", "WY"]);
        // 132 EVs never reach 270.
        assert_eq!(tipping_line(&sample(), 538), None);
    }
}
