//! Client-style URL router.
//!
//! A table of path patterns mapped to handler callbacks, kept in sync with
//! an address bar: registering the first route starts a change listener
//! that invokes the first matching handler whenever the logical fragment
//! changes, whether by programmatic navigation or external address
//! mutation.
//!
//! # Architecture Overview
//!
//! ```text
//! navigate(path) ──▶ location (mode adapter + address bar) ──▶ address
//!                                                                │
//!                                              change notification / poll
//!                                                                │
//!                                                                ▼
//!            routing (ordered table, whole-fragment match) ◀── listener
//!                                │
//!                                ▼
//!                        handler(fragment)
//!
//!            config (mode, root, poll interval; atomic swap)
//! ```
//!
//! Two addressing modes: `hash` (the fragment identifier is the logical
//! path) and `history` (the real path under a root prefix is). The address
//! bar is injectable, so everything runs without a live browser.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod listener;
pub mod location;
pub mod router;
pub mod routing;

pub use config::loader::ConfigError;
pub use config::{Mode, RouterOptions};
pub use error::{RouterError, RouterResult};
pub use lifecycle::Shutdown;
pub use location::{AddressBar, MemoryAddressBar};
pub use router::{RemoveTarget, RouteSpec, Router};
pub use routing::{Handler, Route, RouteMap};
