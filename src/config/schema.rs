//! Configuration schema definitions.
//!
//! The option types derive Serde traits so a router can be configured from a
//! TOML file as well as from code.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Poll interval used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Addressing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The fragment identifier (`#...`) is the logical path.
    Hash,
    /// The real path, written via a history-style push primitive, is the
    /// logical path.
    History,
}

impl Mode {
    /// Parse a mode string. Anything other than `"history"` coerces to
    /// [`Mode::Hash`], silently.
    pub fn coerce(value: &str) -> Mode {
        match value {
            "history" => Mode::History,
            _ => Mode::Hash,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Hash => "hash",
            Mode::History => "history",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied router options.
///
/// All fields are optional; supplying no fields at all is rejected by
/// validation when passed to `Router::config`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Addressing mode, `"hash"` or `"history"`. Unrecognized values coerce
    /// to `"hash"`.
    pub mode: Option<String>,

    /// Root prefix all logical paths are relative to.
    pub root: Option<String>,

    /// Change-listener poll interval in milliseconds.
    pub poll_interval_ms: Option<u64>,
}

impl RouterOptions {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.root.is_none() && self.poll_interval_ms.is_none()
    }
}

/// Validated, stored router configuration.
///
/// Held behind an `ArcSwap` so the listener loop reads it lock-free while
/// `config()` swaps it atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveConfig {
    /// Unset until `config()` is first called.
    pub mode: Option<Mode>,

    /// Always starts and ends with `/`.
    pub root: String,

    /// Interval between listener polls.
    pub poll_interval: Duration,
}

impl Default for ActiveConfig {
    fn default() -> Self {
        Self {
            mode: None,
            root: "/".to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ActiveConfig {
    /// Build the stored configuration from caller options.
    ///
    /// A successful `config()` call overwrites the whole configuration:
    /// an absent mode becomes `hash`, an absent root becomes `/`.
    pub fn from_options(options: &RouterOptions) -> Self {
        Self {
            mode: Some(
                options
                    .mode
                    .as_deref()
                    .map(Mode::coerce)
                    .unwrap_or(Mode::Hash),
            ),
            root: options
                .root
                .as_deref()
                .map(normalize_root)
                .unwrap_or_else(|| "/".to_string()),
            poll_interval: options
                .poll_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_POLL_INTERVAL),
        }
    }

    /// The mode dispatch and navigation act under; `hash` until configured.
    pub fn effective_mode(&self) -> Mode {
        self.mode.unwrap_or(Mode::Hash)
    }
}

/// Normalize a root prefix to start and end with exactly one `/`.
pub fn normalize_root(root: &str) -> String {
    let trimmed = root.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
