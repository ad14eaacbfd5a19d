//! Expand/collapse state for the per-race poll panels.

use std::collections::HashMap;

/// Class added to the trigger while its panel is open.
pub const ROTATE_CLASS: &str = "rotate";
/// Class that hides a collapsed panel.
pub const INVISIBLE_CLASS: &str = "invisible";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub expanded: bool,
}

/// Open/closed flag per trigger. Panels start collapsed.
#[derive(Debug, Default)]
pub struct PollPanels {
    expanded: HashMap<String, bool>,
}

impl PollPanels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    /// Flip the panel behind `key` and return its new state.
    pub fn toggle(&mut self, key: &str) -> PanelState {
        let flag = self.expanded.entry(key.to_string()).or_insert(false);
        *flag = !*flag;
        PanelState { expanded: *flag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut panels = PollPanels::new();
        assert!(!panels.is_expanded("polls_ohio"));
        assert!(panels.toggle("polls_ohio").expanded);
        assert!(panels.is_expanded("polls_ohio"));
        assert!(!panels.toggle("polls_ohio").expanded);
        assert!(!panels.is_expanded("polls_ohio"));
    }

    #[test]
    fn test_independent_triggers() {
        let mut panels = PollPanels::new();
        panels.toggle("a");
        assert!(panels.is_expanded("a"));
        assert!(!panels.is_expanded("b"));
    }
}
