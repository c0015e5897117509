//! Display limits for the interactive picker.

use crate::session::MAX_VISIBLE_RESULTS;

/// Longest entry, in chars, drawn before it is cut with an ellipsis
pub const MAX_DISPLAY_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    /// Ranked entries drawn (and reachable with the cursor)
    pub max_visible_results: usize,
    /// Per-entry display cap in chars
    pub max_display_chars: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self { max_visible_results: MAX_VISIBLE_RESULTS, max_display_chars: MAX_DISPLAY_CHARS }
    }
}
