//! Shared constants used across the application

use std::time::Duration;

/// Unified tick rate for spinner animation (70ms ≈ 14 fps). Balances smooth
/// animation with keyboard responsiveness. Exactly one tick chain runs at
/// this cadence at any time.
pub const TICK_INTERVAL: Duration = Duration::from_millis(70);

/// How often the scoreboard is refetched by default.
pub const DEFAULT_REFRESH_SECONDS: u64 = 30;

/// Feed endpoint used when neither config nor MATCHDAY_API_BASE provide one.
pub const DEFAULT_API_BASE: &str = "https://api.matchday.permacommons.org/v1";

/// Placeholder shown in the detail panel when nothing is selected.
pub const EMPTY_DETAILS_PLACEHOLDER: &str = "Select a match to view details";

/// Message shown in the list panel when the scoreboard is empty.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No live matches right now";

/// Fallback text for the animation region when the glyph render is empty.
pub const LOADING_FALLBACK: &str = "Loading...";

/// Title of the list panel.
pub const PANEL_LIVE_MATCHES: &str = "Live Matches";

/// Title of the stats panel.
pub const PANEL_MATCH_STATS: &str = "Match Stats";

/// Message shown when the stats window holds no finished matches.
pub const EMPTY_FINISHED_PLACEHOLDER: &str = "No finished matches";

/// Hint appended under the empty finished list.
pub const EMPTY_FINISHED_HINT: &str = "Try selecting a different date range (h/l keys)";

/// Message shown when today has no remaining fixtures.
pub const EMPTY_UPCOMING_PLACEHOLDER: &str = "No upcoming matches scheduled for today";
