//! Clickable win probability badge.

use dioxus::prelude::*;
use efw_core::odds::{OddsToggle, WinProbability};
use efw_core::rating::parse_rating;

#[derive(Props, Clone, PartialEq)]
pub struct OddsBadgeProps {
    /// Key for this badge's display state
    pub id: String,
    /// Democratic win probability, 0..=100
    pub dem_win_pct: f64,
    /// Rating shown before the first click, e.g. "leans dem"
    pub rating: String,
}

/// Shows the rating, then cycles through percent and fraction on each click.
#[component]
pub fn OddsBadge(props: OddsBadgeProps) -> Element {
    let label = parse_rating(&props.rating);
    let rating_text = label.as_ref().map(|l| l.text.clone()).unwrap_or(props.rating.clone());
    let class = label.map(|l| l.class).unwrap_or_else(|| "tie".to_string());

    let mut toggle = use_signal(OddsToggle::new);
    let mut text = use_signal(|| rating_text.clone());

    let probability = WinProbability::new(props.dem_win_pct);
    let key = props.id.clone();
    let on_click = move |_| match &probability {
        Ok(p) => {
            let next = toggle.write().advance(&key, &text.read(), *p);
            text.set(next);
        }
        Err(e) => log::warn!("odds badge {key}: {e}"),
    };

    rsx! {
        span {
            id: "{props.id}",
            class: "odds {class}",
            style: "cursor: pointer;",
            title: "Click to show odds",
            onclick: on_click,
            "{text}"
        }
    }
}
