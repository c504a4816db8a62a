//! History-mode location adapter.

use url::Url;

use super::{normalize_path, strip_root, trim_slashes, AddressBar, LocationAdapter};

/// Addressing via the real path: navigating to `/about` under root `/dir/`
/// pushes a new entry at `/dir/about`.
///
/// # Known limitation
///
/// A path containing `#` does not navigate correctly: the address splits at
/// the first `#`, the remainder becomes the fragment identifier, and the
/// requested path does not round-trip through fragment extraction. Callers
/// relying on the current behavior keep it.
pub struct HistoryAdapter;

impl LocationAdapter for HistoryAdapter {
    fn navigate(&self, bar: &dyn AddressBar, root: &str, path: &str) {
        let path = normalize_path(path);
        let composed = format!("{}{}", root, path.trim_start_matches('/'));
        bar.push(&composed);
    }

    fn fragment(&self, bar: &dyn AddressBar, root: &str) -> String {
        let href = bar.href();
        let path = match Url::parse(&href) {
            // Url::path never includes the query or the hash suffix.
            Ok(url) => url.path().to_string(),
            Err(_) => return String::new(),
        };
        trim_slashes(strip_root(&path, root)).to_string()
    }
}
