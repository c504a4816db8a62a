//! Address bar abstraction.
//!
//! # Responsibilities
//! - Read the current full address
//! - Expose the two mode-specific write primitives
//! - Notify the change listener on every mutation
//!
//! # Design Decisions
//! - Change notification is a watch channel carrying a version counter:
//!   "latest value wins" matches address semantics, and a receiver that
//!   never fires is still correct because the listener also polls

use std::sync::RwLock;

use tokio::sync::watch;
use url::Url;

/// Contract to the host environment's address bar.
pub trait AddressBar: Send + Sync {
    /// Current full address.
    fn href(&self) -> String;

    /// Replace the fragment identifier (hash-mode write primitive).
    fn set_fragment(&self, fragment: &str);

    /// Push a new entry at the given path (history-mode write primitive).
    ///
    /// The path is taken as the address bar would take it: everything after
    /// the first `#` becomes the fragment identifier, not part of the real
    /// path.
    fn push(&self, path: &str);

    /// Subscribe to change notifications. The value is a version counter
    /// bumped on every mutation; an implementation without native
    /// notifications may return a receiver that never changes.
    fn changes(&self) -> watch::Receiver<u64>;
}

/// In-process address bar used by tests and the demo CLI.
pub struct MemoryAddressBar {
    url: RwLock<Url>,
    version: watch::Sender<u64>,
}

impl MemoryAddressBar {
    pub fn new() -> Self {
        let url = Url::parse("http://localhost/").expect("static origin parses");
        let (version, _) = watch::channel(0);
        Self {
            url: RwLock::new(url),
            version,
        }
    }

    /// Address bar starting at an arbitrary origin, e.g. `http://host/dir/`.
    pub fn with_origin(origin: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(origin)?;
        let (version, _) = watch::channel(0);
        Ok(Self {
            url: RwLock::new(url),
            version,
        })
    }

    /// Current real path.
    pub fn path(&self) -> String {
        self.url.read().unwrap().path().to_string()
    }

    fn bump(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBar for MemoryAddressBar {
    fn href(&self) -> String {
        self.url.read().unwrap().to_string()
    }

    fn set_fragment(&self, fragment: &str) {
        {
            let mut url = self.url.write().unwrap();
            url.set_fragment(Some(fragment));
        }
        self.bump();
    }

    fn push(&self, path: &str) {
        {
            let mut url = self.url.write().unwrap();
            // Url::set_path would percent-encode '#', so split the way an
            // address bar does: first '#' starts the fragment.
            match path.split_once('#') {
                Some((real, fragment)) => {
                    url.set_path(real);
                    url.set_fragment(Some(fragment));
                }
                None => {
                    url.set_path(path);
                    url.set_fragment(None);
                }
            }
            url.set_query(None);
        }
        self.bump();
    }

    fn changes(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }
}
