//! Win probability display cycle.
//!
//! A probability cell on the forecast page starts out showing a rating
//! ("Leans D"). Each click advances it one step:
//!
//! ```text
//! Rating -> Percent ("D 63%") -> Fraction ("D 5 in 8") -> Rating
//! ```
//!
//! A tied probability has no useful fraction, so the percent text is shown
//! and the cell goes straight to the last step; the next click restores the
//! rating.
//!
//! The per-cell state lives in [`OddsToggle`], keyed by whatever identifies the
//! cell (the DOM element id in the browser bindings).

use crate::error::ForecastError;
use std::collections::HashMap;

/// Odds for a leading probability of 0..=100 percent, as (numerator, denominator).
///
/// Only indices 50..=100 are reachable from the display cycle since the
/// probability is mirrored to the leading side first.
pub const FRACTIONS: [(u8, u8); 101] = [
    (1, 10), (1, 10), (1, 10), (1, 10), (1, 10), (1, 10), (1, 10), (1, 10), (1, 10),
    (1, 10), (1, 10), (1, 9), (1, 8), (1, 8), (1, 7), (1, 7), (1, 6), (1, 6), (1, 6),
    (1, 5), (1, 5), (1, 5), (2, 9), (2, 9), (1, 4), (1, 4), (1, 4), (2, 7), (2, 7),
    (2, 7), (3, 10), (3, 10), (1, 3), (1, 3), (1, 3), (1, 3), (3, 8), (3, 8), (3, 8),
    (2, 5), (2, 5), (2, 5), (3, 7), (3, 7), (4, 9), (4, 9), (4, 9), (4, 9), (1, 2),
    (1, 2), (1, 2), (1, 2), (1, 2), (5, 9), (5, 9), (5, 9), (5, 9), (4, 7), (4, 7),
    (3, 5), (3, 5), (3, 5), (5, 8), (5, 8), (5, 8), (2, 3), (2, 3), (2, 3), (2, 3),
    (7, 10), (7, 10), (5, 7), (5, 7), (5, 7), (3, 4), (3, 4), (3, 4), (7, 9), (7, 9),
    (4, 5), (4, 5), (4, 5), (5, 6), (5, 6), (5, 6), (6, 7), (6, 7), (7, 8), (7, 8),
    (8, 9), (9, 10), (9, 10), (9, 10), (9, 10), (9, 10), (9, 10), (9, 10), (9, 10),
    (9, 10), (9, 10), (9, 10),
];

/// Which side a probability favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leader {
    Dem,
    Gop,
    Even,
}

impl Leader {
    pub fn prefix(self) -> &'static str {
        match self {
            Leader::Dem => "D",
            Leader::Gop => "R",
            Leader::Even => "Even",
        }
    }
}

/// Democratic win probability, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinProbability(f64);

impl WinProbability {
    pub fn new(pct: f64) -> Result<Self, ForecastError> {
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(ForecastError::ProbabilityOutOfRange(pct));
        }
        Ok(Self(pct))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn leader(self) -> Leader {
        if self.0 < 50.0 {
            Leader::Gop
        } else if self.0 > 50.0 {
            Leader::Dem
        } else {
            Leader::Even
        }
    }

    /// Probability of the leading side, truncated to a whole percent.
    pub fn leading_percent(self) -> u8 {
        let mirrored = if self.0 < 50.0 { 100.0 - self.0 } else { self.0 };
        // Always within 50..=100 after mirroring.
        mirrored.trunc() as u8
    }
}

/// Look up the odds for a whole percentage, saturating past the end of the table.
pub fn fraction_for(percent: u8) -> (u8, u8) {
    FRACTIONS[usize::from(percent).min(FRACTIONS.len() - 1)]
}

/// "D 63%", "R 70%", or "Even 50%".
pub fn percent_text(p: WinProbability) -> String {
    format!("{} {}%", p.leader().prefix(), p.leading_percent())
}

/// "D 5 in 8".
pub fn fraction_text(p: WinProbability) -> String {
    let (num, den) = fraction_for(p.leading_percent());
    format!("{} {} in {}", p.leader().prefix(), num, den)
}

/// What a probability cell is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OddsMode {
    #[default]
    Rating,
    Percent,
    Fraction,
}

#[derive(Debug, Clone, Default)]
struct CellState {
    mode: OddsMode,
    rating_text: String,
}

/// Display state for every probability cell on a page.
#[derive(Debug, Default)]
pub struct OddsToggle {
    cells: HashMap<String, CellState>,
}

impl OddsToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode of a cell. Cells never clicked are in `Rating`.
    pub fn mode(&self, key: &str) -> OddsMode {
        self.cells.get(key).map(|c| c.mode).unwrap_or_default()
    }

    /// Advance one step and return the text the cell should show next.
    ///
    /// `current_text` is only read when leaving `Rating`; it is what gets
    /// restored at the end of the cycle.
    pub fn advance(&mut self, key: &str, current_text: &str, p: WinProbability) -> String {
        let cell = self.cells.entry(key.to_string()).or_default();
        match cell.mode {
            OddsMode::Rating => {
                cell.rating_text = current_text.to_string();
                cell.mode = if p.leader() == Leader::Even {
                    OddsMode::Fraction
                } else {
                    OddsMode::Percent
                };
                percent_text(p)
            }
            OddsMode::Percent => {
                cell.mode = OddsMode::Fraction;
                fraction_text(p)
            }
            OddsMode::Fraction => {
                cell.mode = OddsMode::Rating;
                std::mem::take(&mut cell.rating_text)
            }
        }
    }

    /// Forget a cell, e.g. after the page re-rendered it.
    pub fn reset(&mut self, key: &str) {
        self.cells.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prob(p: f64) -> WinProbability {
        WinProbability::new(p).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(WinProbability::new(-0.1).is_err());
        assert!(WinProbability::new(100.5).is_err());
        assert!(WinProbability::new(f64::NAN).is_err());
        assert!(WinProbability::new(0.0).is_ok());
        assert!(WinProbability::new(100.0).is_ok());
    }

    #[test]
    fn test_leader_and_mirroring() {
        assert_eq!(prob(63.0).leader(), Leader::Dem);
        assert_eq!(prob(63.0).leading_percent(), 63);
        assert_eq!(prob(30.0).leader(), Leader::Gop);
        assert_eq!(prob(30.0).leading_percent(), 70);
        assert_eq!(prob(50.0).leader(), Leader::Even);
        assert_eq!(prob(50.0).leading_percent(), 50);
    }

    #[test]
    fn test_mirrored_percent_for_every_whole_value() {
        for p in 1..50u8 {
            let text = percent_text(prob(f64::from(p)));
            assert_eq!(text, format!("R {}%", 100 - p));
        }
        for p in 51..100u8 {
            let text = percent_text(prob(f64::from(p)));
            assert_eq!(text, format!("D {}%", p));
        }
    }

    #[test]
    fn test_fraction_truncates_before_lookup() {
        // 63.9 truncates to 63, not 64.
        assert_eq!(prob(63.9).leading_percent(), 63);
        assert_eq!(fraction_text(prob(63.9)), "D 5 in 8");
        // 36.6 mirrors to 63.4.
        assert_eq!(fraction_text(prob(36.6)), "R 5 in 8");
        assert_eq!(fraction_for(100), (9, 10));
        assert_eq!(fraction_for(255), (9, 10));
    }

    #[test]
    fn test_cycle_sixty_three() {
        let mut toggle = OddsToggle::new();
        let p = prob(63.0);

        let pct = toggle.advance("pres", "Leans D", p);
        assert_eq!(pct, "D 63%");
        assert_eq!(toggle.mode("pres"), OddsMode::Percent);

        let frac = toggle.advance("pres", &pct, p);
        assert_eq!(frac, "D 5 in 8");
        assert_eq!(toggle.mode("pres"), OddsMode::Fraction);

        let back = toggle.advance("pres", &frac, p);
        assert_eq!(back, "Leans D");
        assert_eq!(toggle.mode("pres"), OddsMode::Rating);
    }

    #[test]
    fn test_three_steps_restore_rating() {
        for p in [0.0, 12.5, 49.9, 50.1, 77.0, 100.0] {
            let mut toggle = OddsToggle::new();
            let p = prob(p);
            let mut text = "Safe R".to_string();
            for _ in 0..3 {
                text = toggle.advance("cell", &text, p);
            }
            assert_eq!(text, "Safe R");
        }
    }

    #[test]
    fn test_tossup_skips_fraction() {
        let mut toggle = OddsToggle::new();
        let p = prob(50.0);
        assert_eq!(toggle.advance("sen", "Tossup", p), "Even 50%");
        assert_eq!(toggle.mode("sen"), OddsMode::Fraction);
        assert_eq!(toggle.advance("sen", "Even 50%", p), "Tossup");
    }

    #[test]
    fn test_cells_are_independent() {
        let mut toggle = OddsToggle::new();
        toggle.advance("a", "Leans D", prob(60.0));
        assert_eq!(toggle.mode("a"), OddsMode::Percent);
        assert_eq!(toggle.mode("b"), OddsMode::Rating);

        toggle.reset("a");
        assert_eq!(toggle.mode("a"), OddsMode::Rating);
    }
}
