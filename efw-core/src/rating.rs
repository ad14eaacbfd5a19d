//! Pundit ratings such as "leans dem" or "tossup".
//!
//! Races without a usable poll margin show a rating instead. The rating is
//! also the text a probability cell starts out with before it is toggled.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingLabel {
    /// Display text, e.g. "Likely R".
    pub text: String,
    /// CSS class, e.g. "maybe_gop".
    pub class: String,
}

/// Parse a rating of the form `<strength> [dem|gop]`.
///
/// Returns `None` for an unknown strength.
pub fn parse_rating(rating: &str) -> Option<RatingLabel> {
    let mut parts = rating.split_whitespace();
    let (text, class_prefix) = match parts.next()? {
        "tossup" => ("Tossup", ""),
        "leans" => ("Leans", "leans_"),
        "likely" => ("Likely", "maybe_"),
        "safe" => ("Safe", ""),
        _ => return None,
    };
    let side = parts.next();
    let (text_suffix, class_suffix) = match (side, parts.next()) {
        (Some("dem"), None) => (" D", "dem"),
        (Some("gop"), None) => (" R", "gop"),
        _ => ("", "tie"),
    };
    Some(RatingLabel {
        text: format!("{text}{text_suffix}"),
        class: format!("{class_prefix}{class_suffix}"),
    })
}
