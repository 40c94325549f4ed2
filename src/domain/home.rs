//! Home section promotion rules.

use serde::{Deserialize, Serialize};

/// Top-level sets at or below this size are shown on home entirely.
pub const SHOW_ON_HOME_LIMIT: usize = 5;
/// Titles containing this marker are promoted explicitly.
pub const SHOW_ON_HOME_MARKER: char = '#';
/// Leading categories always promoted in large sets.
pub const SHOW_ON_HOME_FALLBACK_LIMIT: usize = 3;

/// Thresholds deciding which top-level categories reach the home section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeRules {
    /// Show every top-level category when there are at most this many
    pub limit: usize,
    /// Promote categories whose title contains this character
    pub marker: char,
    /// Promote categories whose index is below this
    pub fallback_limit: usize,
}

impl Default for HomeRules {
    fn default() -> Self {
        Self {
            limit: SHOW_ON_HOME_LIMIT,
            marker: SHOW_ON_HOME_MARKER,
            fallback_limit: SHOW_ON_HOME_FALLBACK_LIMIT,
        }
    }
}

impl HomeRules {
    /// Decide whether a category is promoted to the home section.
    ///
    /// Nested categories never are. A top-level category is when the set is
    /// small, when its title carries the marker, or when it is among the
    /// leading `fallback_limit` entries.
    pub fn show_on_home(
        &self,
        top_level_count: usize,
        index: usize,
        title: &str,
        is_top_level: bool,
    ) -> bool {
        if !is_top_level {
            return false;
        }

        top_level_count <= self.limit
            || title.contains(self.marker)
            || index < self.fallback_limit
    }
}

/// [`HomeRules::show_on_home`] with the default thresholds.
pub fn should_show_on_home(
    top_level_count: usize,
    index: usize,
    title: &str,
    is_top_level: bool,
) -> bool {
    HomeRules::default().show_on_home(top_level_count, index, title, is_top_level)
}
