//! Tick marks under the swing slider.

/// Tick offsets in points, left (Republican) to right (Democratic).
pub const RANGE_TICKS: [i32; 11] = [-10, -8, -6, -4, -2, 0, 2, 4, 6, 8, 10];

/// CSS class for each tick span.
pub const TICK_CLASS: &str = "tick";

pub fn tick_label(offset: i32) -> String {
    match offset {
        o if o > 0 => format!("D+{o}"),
        o if o < 0 => format!("R+{}", o.unsigned_abs()),
        _ => "0".to_string(),
    }
}

/// `(offset, label)` for every tick, in display order.
pub fn range_ticks() -> impl Iterator<Item = (i32, String)> {
    RANGE_TICKS.iter().map(|&t| (t, tick_label(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_labels() {
        let labels: Vec<String> = range_ticks().map(|(_, l)| l).collect();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels.first().map(String::as_str), Some("R+10"));
        assert_eq!(labels[5], "0");
        assert_eq!(labels[6], "D+2");
        assert_eq!(labels.last().map(String::as_str), Some("D+10"));
    }
}
