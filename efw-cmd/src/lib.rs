//! Command implementations for the EFW CLI.
//!
//! Each subcommand renders the same text the browser widgets would show,
//! which makes it easy to check a roster before publishing a page.

use clap::Subcommand;

pub mod odds;
pub mod swing;

#[derive(Subcommand)]
pub enum Command {
    /// Apply a uniform swing to every state and print margins and EV totals
    Swing {
        /// Path to the state roster CSV (ID,CODE,NAME,EVS,MARGIN)
        #[arg(short = 's', long = "states")]
        states_csv: String,

        /// Swing in points, positive toward the Democrat
        #[arg(short = 'p', long, allow_hyphen_values = true, default_value_t = 0.0)]
        points: f64,

        /// Grand total of electoral votes (defaults to the roster sum)
        #[arg(long)]
        total_evs: Option<u32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the tipping-line state for a roster
    Tipping {
        /// Path to the state roster CSV (ID,CODE,NAME,EVS,MARGIN)
        #[arg(short = 's', long = "states")]
        states_csv: String,

        /// Grand total of electoral votes (defaults to the roster sum)
        #[arg(long)]
        total_evs: Option<u32>,
    },

    /// Print each step of the probability display cycle
    Odds {
        /// Democratic win probability, 0..=100
        #[arg(long)]
        pct: f64,

        /// Pundit rating shown before the first click (e.g. "leans dem")
        #[arg(long, default_value = "tossup")]
        rating: String,
    },

    /// Print the slider tick labels
    Ticks,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Swing {
            states_csv,
            points,
            total_evs,
            json,
        } => swing::run_swing(&states_csv, points, total_evs, json),
        Command::Tipping {
            states_csv,
            total_evs,
        } => swing::run_tipping(&states_csv, total_evs),
        Command::Odds { pct, rating } => odds::run_odds(pct, &rating),
        Command::Ticks => {
            let labels: Vec<String> = efw_core::ticks::range_ticks().map(|(_, l)| l).collect();
            println!("{}", labels.join(" "));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_swing_takes_states_flag() {
        let parsed =
            Harness::try_parse_from(["efw", "swing", "--states", "fixtures/states.csv", "--points", "-2.5"])
                .unwrap();
        match parsed.command {
            Command::Swing { states_csv, points, total_evs, json } => {
                assert_eq!(states_csv, "fixtures/states.csv");
                assert_eq!(points, -2.5);
                assert_eq!(total_evs, None);
                assert!(!json);
            }
            _ => panic!("expected swing"),
        }
    }

    #[test]
    fn test_tipping_takes_short_states_flag() {
        let parsed = Harness::try_parse_from(["efw", "tipping", "-s", "roster.csv"]).unwrap();
        assert!(matches!(
            parsed.command,
            Command::Tipping { ref states_csv, total_evs: None } if states_csv == "roster.csv"
        ));
        assert!(Harness::try_parse_from(["efw", "tipping", "--states-csv", "roster.csv"]).is_err());
    }
}
