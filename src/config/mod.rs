//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! caller options (code or TOML file)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ActiveConfig (normalized mode/root)
//!     → atomic swap of Arc<ActiveConfig>
//!     → listener + navigation observe new config
//! ```
//!
//! # Design Decisions
//! - A successful `config()` overwrites the whole configuration; absent
//!   fields fall back to defaults rather than keeping prior values
//! - Unrecognized mode strings coerce to `hash` instead of erroring
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{ActiveConfig, Mode, RouterOptions};
