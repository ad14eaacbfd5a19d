//! Margin classification and map colors.
//!
//! A margin is a signed lead in percentage points, positive for the
//! Democrat. Anything within one point either way is a tie.

/// Largest margin the meter will show in either direction.
pub const MAX_MARGIN: f64 = 99.0;

/// Fill for tied states on the map.
pub const TIE_FILL: &str = "#d3d3d3";

/// Class for tied margin cells.
pub const TIE_CLASS: &str = "tie";

/// One row of a color threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginColor {
    pub threshold: f64,
    pub hex: &'static str,
    pub class: &'static str,
}

/// Democratic buckets, highest threshold first.
pub const DEM_MARGIN_COLORS: [MarginColor; 3] = [
    MarginColor { threshold: 10.0, hex: "#0000ff", class: "dem" },
    MarginColor { threshold: 5.0, hex: "#3399ff", class: "maybe_dem" },
    MarginColor { threshold: 0.0, hex: "#99ccff", class: "leans_dem" },
];

/// Republican buckets, highest threshold first.
pub const GOP_MARGIN_COLORS: [MarginColor; 3] = [
    MarginColor { threshold: 10.0, hex: "#ff0000", class: "gop" },
    MarginColor { threshold: 5.0, hex: "#ec7063", class: "maybe_gop" },
    MarginColor { threshold: 0.0, hex: "#f5b7b1", class: "leans_gop" },
];

/// Returned when a margin falls below every threshold (only NaN does).
pub const NEUTRAL_COLOR: MarginColor = MarginColor {
    threshold: f64::NEG_INFINITY,
    hex: "#000000",
    class: "none",
};

/// True when the margin is too close to call.
///
/// NaN counts as slim so malformed input renders as a tie.
pub fn is_slim_margin(margin: f64) -> bool {
    margin.is_nan() || margin.abs() < 1.0
}

pub fn clamp_margin(margin: f64) -> f64 {
    margin.clamp(-MAX_MARGIN, MAX_MARGIN)
}

/// Pick the color bucket for a margin. Positive margins use the Democratic
/// table, everything else the Republican one.
pub fn color_for_margin(margin: f64) -> MarginColor {
    let colors = if margin > 0.0 {
        &DEM_MARGIN_COLORS
    } else {
        &GOP_MARGIN_COLORS
    };
    let abs_margin = margin.abs();
    colors
        .iter()
        .find(|c| abs_margin >= c.threshold)
        .copied()
        .unwrap_or(NEUTRAL_COLOR)
}

/// "D+2.5" or "R+3.0".
pub fn format_margin(margin: f64) -> String {
    let side = if margin < 0.0 { "R" } else { "D" };
    format!("{side}+{}", one_decimal(margin.abs()))
}

/// Format a non-negative value to one decimal place, rounding an exact half
/// away from zero.
///
/// `{:.1}` rounds exact halves to even, so 2.25 would print as "2.2". The
/// decision here is made on the exact binary value: 2.25 is a true half and
/// becomes "2.3", while 1.45 is stored just below 1.45 and stays "1.4".
fn one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.1}");
    }
    let bits = value.to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    // value == mantissa * 2^exponent
    let (mantissa, exponent) = if biased_exp == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exp - 1075)
    };
    if exponent >= 0 {
        // Whole number; no rounding to do.
        return format!("{value:.1}");
    }
    let shift = exponent.unsigned_abs();
    if shift >= 127 {
        return "0.0".to_string();
    }

    let scaled = u128::from(mantissa) * 10;
    let unit = 1u128 << shift;
    let mut tenths = scaled >> shift;
    if (scaled & (unit - 1)) * 2 >= unit {
        tenths += 1;
    }
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// The outcome of classifying a single margin.
#[derive(Debug, Clone, PartialEq)]
pub enum MarginCall {
    Tie,
    Dem { margin: f64, color: MarginColor },
    Gop { margin: f64, color: MarginColor },
}

impl MarginCall {
    pub fn classify(margin: f64) -> Self {
        if is_slim_margin(margin) {
            MarginCall::Tie
        } else if margin > 0.0 {
            MarginCall::Dem { margin, color: color_for_margin(margin) }
        } else {
            MarginCall::Gop { margin, color: color_for_margin(margin) }
        }
    }

    pub fn text(&self) -> String {
        match self {
            MarginCall::Tie => "Tie".to_string(),
            MarginCall::Dem { margin, .. } | MarginCall::Gop { margin, .. } => {
                format_margin(*margin)
            }
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            MarginCall::Tie => TIE_CLASS,
            MarginCall::Dem { color, .. } | MarginCall::Gop { color, .. } => color.class,
        }
    }

    pub fn fill(&self) -> &'static str {
        match self {
            MarginCall::Tie => TIE_FILL,
            MarginCall::Dem { color, .. } | MarginCall::Gop { color, .. } => color.hex,
        }
    }

    /// Inline style for the map shape, e.g. `fill: #0000ff`.
    pub fn fill_style(&self) -> String {
        format!("fill: {}", self.fill())
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, MarginCall::Tie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slim_margins_are_ties_either_side() {
        for m in [0.0, 0.5, -0.5, 0.99, -0.99, f64::NAN] {
            assert!(is_slim_margin(m), "{m} should be slim");
            assert!(MarginCall::classify(m).is_tie());
        }
        assert!(!is_slim_margin(1.0));
        assert!(!is_slim_margin(-1.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_margin(120.0), 99.0);
        assert_eq!(clamp_margin(-150.0), -99.0);
        assert_eq!(clamp_margin(12.3), 12.3);
    }

    #[test]
    fn test_color_buckets() {
        assert_eq!(color_for_margin(12.0).class, "dem");
        assert_eq!(color_for_margin(10.0).class, "dem");
        assert_eq!(color_for_margin(7.0).class, "maybe_dem");
        assert_eq!(color_for_margin(2.5).class, "leans_dem");
        assert_eq!(color_for_margin(-12.0).hex, "#ff0000");
        assert_eq!(color_for_margin(-5.0).class, "maybe_gop");
        assert_eq!(color_for_margin(-1.5).class, "leans_gop");
        assert_eq!(color_for_margin(f64::NAN), NEUTRAL_COLOR);
    }

    #[test]
    fn test_format_rounds_exact_halves_up() {
        assert_eq!(format_margin(2.25), "D+2.3");
        assert_eq!(format_margin(-1.25), "R+1.3");
        assert_eq!(format_margin(0.75), "D+0.8");
        assert_eq!(format_margin(-10.75), "R+10.8");
        // Stored as 1.4499..., so it stays below the half.
        assert_eq!(format_margin(1.45), "D+1.4");
        // Stored as 0.05000...03, just above the half.
        assert_eq!(format_margin(0.05), "D+0.1");
    }

    #[test]
    fn test_format_plain_values() {
        assert_eq!(format_margin(29.2), "D+29.2");
        assert_eq!(format_margin(-3.0), "R+3.0");
        assert_eq!(format_margin(99.0), "D+99.0");
        assert_eq!(format_margin(0.0), "D+0.0");
        assert_eq!(format_margin(12.34), "D+12.3");
        assert_eq!(format_margin(-7.96), "R+8.0");
        assert_eq!(format_margin(9.99), "D+10.0");
    }

    #[test]
    fn test_call_text_and_fill() {
        let dem = MarginCall::classify(2.5);
        assert_eq!(dem.text(), "D+2.5");
        assert_eq!(dem.class(), "leans_dem");
        assert_eq!(dem.fill_style(), "fill: #99ccff");

        let gop = MarginCall::classify(-3.0);
        assert_eq!(gop.text(), "R+3.0");
        assert_eq!(gop.fill(), "#f5b7b1");

        let tie = MarginCall::classify(-0.4);
        assert_eq!(tie.text(), "Tie");
        assert_eq!(tie.class(), "tie");
        assert_eq!(tie.fill_style(), "fill: #d3d3d3");
    }
}
