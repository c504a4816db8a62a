//! Hash-mode location adapter.

use url::Url;

use super::{normalize_path, strip_root, trim_slashes, AddressBar, LocationAdapter};

/// Addressing via the fragment identifier: navigating to `/about` makes the
/// address end in `#/about`; the real path never changes.
pub struct HashAdapter;

impl LocationAdapter for HashAdapter {
    fn navigate(&self, bar: &dyn AddressBar, _root: &str, path: &str) {
        bar.set_fragment(&normalize_path(path));
    }

    fn fragment(&self, bar: &dyn AddressBar, root: &str) -> String {
        let href = bar.href();
        let raw = match Url::parse(&href) {
            Ok(url) => url.fragment().unwrap_or("").to_string(),
            Err(_) => return String::new(),
        };
        trim_slashes(strip_root(&raw, root)).to_string()
    }
}
