//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject option sets that carry no information
//!
//! # Design Decisions
//! - Validation is a pure function: RouterOptions → Result
//! - Runs before options are accepted into the router

use crate::config::schema::RouterOptions;
use crate::error::{RouterError, RouterResult};

/// Validate caller-supplied options before they are applied.
///
/// Mode strings are not validated here: unrecognized modes coerce to `hash`
/// by definition. The only rejected shape is an entirely empty option set.
pub fn validate_options(options: &RouterOptions) -> RouterResult<()> {
    if options.is_empty() {
        return Err(RouterError::InvalidArgument(
            "config options must not be empty",
        ));
    }
    Ok(())
}
