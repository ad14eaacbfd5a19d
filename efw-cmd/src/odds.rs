//! Probability display cycle preview.

use efw_core::odds::{OddsMode, OddsToggle, WinProbability};
use efw_core::rating::parse_rating;

pub fn run_odds(pct: f64, rating: &str) -> anyhow::Result<()> {
    for line in odds_cycle(pct, rating)? {
        println!("{line}");
    }
    Ok(())
}

/// Texts shown on successive clicks, ending back at the rating.
pub fn odds_cycle(pct: f64, rating: &str) -> anyhow::Result<Vec<String>> {
    let p = WinProbability::new(pct)?;
    let start = parse_rating(rating)
        .map(|l| l.text)
        .unwrap_or_else(|| rating.to_string());

    let mut toggle = OddsToggle::new();
    let mut texts = vec![start.clone()];
    let mut current = start;
    loop {
        current = toggle.advance("cli", &current, p);
        texts.push(current.clone());
        if toggle.mode("cli") == OddsMode::Rating {
            break;
        }
    }
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odds_cycle() {
        let texts = odds_cycle(63.0, "leans dem").unwrap();
        assert_eq!(texts, ["Leans D", "D 63%", "D 5 in 8", "Leans D"]);
    }

    #[test]
    fn test_tossup_cycle_is_short() {
        let texts = odds_cycle(50.0, "tossup").unwrap();
        assert_eq!(texts, ["Tossup", "Even 50%", "Tossup"]);
    }

    #[test]
    fn test_bad_probability() {
        assert!(odds_cycle(101.0, "tossup").is_err());
    }
}
