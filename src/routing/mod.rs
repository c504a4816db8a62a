//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     dispatch / dispatch_all / on
//!     → table.rs (validate, append in order)
//!     → matcher.rs (compile pattern for matching)
//!
//! Dispatch:
//!     fragment observed by the change listener
//!     → table.rs find_match (ordered scan)
//!     → matcher.rs (whole-fragment literal or regex match)
//!     → Return: matched Route or no match
//! ```
//!
//! # Design Decisions
//! - Insertion order preserved and significant; first match wins
//! - Patterns match the whole fragment, never a prefix
//! - Duplicate detection by literal pattern text

pub mod matcher;
pub mod table;

pub use table::{Handler, Route, RouteMap, RouteTable};
