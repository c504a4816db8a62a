//! Location subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(path):
//!     normalize path (single leading /, no trailing /)
//!     → mode adapter composes the address write
//!         hash:    set fragment to the normalized path
//!         history: push root + path as the real path
//!     → AddressBar mutation → change notification
//!
//! fragment():
//!     AddressBar href
//!     → mode adapter extracts the logical path
//!         hash:    part after '#', minus root prefix
//!         history: real path minus root, hash suffix dropped
//!     → slash-trimmed fragment ("about/test")
//! ```
//!
//! # Design Decisions
//! - The address bar is a trait so the core runs without a live browser;
//!   tests and the CLI inject the in-process implementation
//! - Mode adapters are stateless; mode and root are passed per call

pub mod address;
pub mod hash;
pub mod history;

pub use address::{AddressBar, MemoryAddressBar};
pub use hash::HashAdapter;
pub use history::HistoryAdapter;

use crate::config::Mode;

/// Mode-specific translation between logical paths and the address bar.
pub trait LocationAdapter: Send + Sync {
    /// Write the address for a navigation to `path` under `root`.
    fn navigate(&self, bar: &dyn AddressBar, root: &str, path: &str);

    /// Extract the logical fragment from the current address.
    fn fragment(&self, bar: &dyn AddressBar, root: &str) -> String;
}

/// The adapter for a given addressing mode.
pub fn adapter_for(mode: Mode) -> &'static dyn LocationAdapter {
    match mode {
        Mode::Hash => &HashAdapter,
        Mode::History => &HistoryAdapter,
    }
}

/// Normalize a navigation path: single leading `/`, trailing `/` stripped
/// except for the bare root path.
pub fn normalize_path(path: &str) -> String {
    let trimmed = trim_slashes(path);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Strip leading and trailing slashes.
pub fn trim_slashes(s: &str) -> &str {
    s.trim_matches('/')
}

/// Strip `root` off the front of a path-like string, when root is not bare.
pub(crate) fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    if root == "/" {
        return path;
    }
    path.strip_prefix(root.trim_end_matches('/')).unwrap_or(path)
}
