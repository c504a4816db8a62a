//! Route table storage.
//!
//! # Responsibilities
//! - Store routes in insertion order
//! - Detect duplicate patterns on insert
//! - Look up the first matching route for a fragment
//!
//! # Design Decisions
//! - Insertion order is significant: first match wins, and removal preserves
//!   the order of survivors
//! - Duplicate detection compares pattern text literally
//! - Handler identity is `Arc` pointer identity
//! - Batch insertion is all-or-nothing: the whole batch is validated before
//!   any entry is committed

use std::fmt;
use std::sync::Arc;

use crate::error::{RouterError, RouterResult};
use crate::routing::matcher::Pattern;

/// A route handler, invoked with the logical fragment that matched.
pub type Handler = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// A registered (pattern, handler) pair.
#[derive(Clone)]
pub struct Route {
    pub pattern: String,
    pub handler: Handler,
    compiled: Pattern,
}

impl Route {
    fn new(pattern: &str, handler: Handler) -> Self {
        Self {
            pattern: pattern.to_string(),
            handler,
            compiled: Pattern::new(pattern),
        }
    }

    /// True if the whole fragment matches this route's pattern.
    pub fn matches(&self, fragment: &str) -> bool {
        self.compiled.matches(fragment)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// An ordered pattern → handler map for batch registration.
#[derive(Clone, Default)]
pub struct RouteMap {
    entries: Vec<(String, Handler)>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; order of insertion is the order of registration.
    pub fn insert(mut self, pattern: impl Into<String>, handler: Handler) -> Self {
        self.entries.push((pattern.into(), handler));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Handler)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, Handler)> for RouteMap {
    fn from_iter<I: IntoIterator<Item = (String, Handler)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for RouteMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(pattern, _)| pattern))
            .finish()
    }
}

/// Ordered route storage, owned by one router instance.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.routes.iter().any(|route| route.pattern == pattern)
    }

    /// Register one route at the end of the table.
    pub fn add(&mut self, pattern: &str, handler: Handler) -> RouterResult<()> {
        if pattern.is_empty() {
            return Err(RouterError::BadArguments(
                "pattern must be a non-empty string",
            ));
        }
        if self.contains(pattern) {
            return Err(RouterError::DuplicateRoute(pattern.to_string()));
        }
        self.routes.push(Route::new(pattern, handler));
        Ok(())
    }

    /// Register every entry of the map, in map order.
    ///
    /// The whole batch is validated first; a failing entry leaves the table
    /// untouched.
    pub fn add_all(&mut self, map: RouteMap) -> RouterResult<()> {
        if map.is_empty() {
            return Err(RouterError::EmptyTarget);
        }

        let mut batch = std::collections::HashSet::new();
        for (pattern, _) in map.iter() {
            if pattern.is_empty() {
                return Err(RouterError::BadArguments(
                    "pattern must be a non-empty string",
                ));
            }
            if self.contains(pattern) || !batch.insert(pattern.clone()) {
                return Err(RouterError::DuplicateRoute(pattern.clone()));
            }
        }

        for (pattern, handler) in map.entries {
            self.routes.push(Route::new(&pattern, handler));
        }
        Ok(())
    }

    /// Remove every route whose pattern equals the given text.
    pub fn remove_pattern(&mut self, pattern: &str) -> usize {
        let before = self.routes.len();
        self.routes.retain(|route| route.pattern != pattern);
        before - self.routes.len()
    }

    /// Remove every route sharing the given handler.
    pub fn remove_handler(&mut self, handler: &Handler) -> usize {
        let before = self.routes.len();
        self.routes
            .retain(|route| !Arc::ptr_eq(&route.handler, handler));
        before - self.routes.len()
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// First route matching the fragment, in insertion order.
    pub fn find_match(&self, fragment: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(fragment))
    }

    /// Ordered copy of the current routes.
    pub fn snapshot(&self) -> Vec<Route> {
        self.routes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Handler {
        Arc::new(|_| {})
    }

    #[test]
    fn test_add_preserves_order() {
        let mut table = RouteTable::new();
        table.add("/about", noop()).unwrap();
        table.add("/homepage", noop()).unwrap();

        assert_eq!(table.len(), 2);
        let routes = table.snapshot();
        assert_eq!(routes[0].pattern, "/about");
        assert_eq!(routes[1].pattern, "/homepage");
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut table = RouteTable::new();
        let err = table.add("", noop()).unwrap_err();
        assert!(matches!(err, RouterError::BadArguments(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let mut table = RouteTable::new();
        let first = noop();
        table.add("/about", first.clone()).unwrap();
        table.add("/books", noop()).unwrap();

        let err = table.add("/about", noop()).unwrap_err();
        assert_eq!(err, RouterError::DuplicateRoute("/about".to_string()));

        // The original registration survives untouched.
        assert_eq!(table.len(), 2);
        let routes = table.snapshot();
        assert_eq!(routes[0].pattern, "/about");
        assert!(Arc::ptr_eq(&routes[0].handler, &first));
    }

    #[test]
    fn test_add_all_in_map_order() {
        let mut table = RouteTable::new();
        let map = RouteMap::new()
            .insert("/about", noop())
            .insert("/homepage", noop());
        table.add_all(map).unwrap();

        let routes = table.snapshot();
        assert_eq!(routes[0].pattern, "/about");
        assert_eq!(routes[1].pattern, "/homepage");
    }

    #[test]
    fn test_add_all_empty_map() {
        let mut table = RouteTable::new();
        assert_eq!(
            table.add_all(RouteMap::new()).unwrap_err(),
            RouterError::EmptyTarget
        );
    }

    #[test]
    fn test_add_all_is_atomic() {
        let mut table = RouteTable::new();
        table.add("/about", noop()).unwrap();

        // Second entry collides with the table; nothing from the batch lands.
        let map = RouteMap::new()
            .insert("/books", noop())
            .insert("/about", noop());
        let err = table.add_all(map).unwrap_err();
        assert_eq!(err, RouterError::DuplicateRoute("/about".to_string()));
        assert_eq!(table.len(), 1);

        // Duplicates within the batch itself fail the same way.
        let map = RouteMap::new()
            .insert("/books", noop())
            .insert("/books", noop());
        assert!(matches!(
            table.add_all(map).unwrap_err(),
            RouterError::DuplicateRoute(_)
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_by_pattern() {
        let mut table = RouteTable::new();
        table.add("/about", noop()).unwrap();
        table.add("/author", noop()).unwrap();

        assert_eq!(table.remove_pattern("/about"), 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.snapshot()[0].pattern, "/author");

        assert_eq!(table.remove_pattern("/missing"), 0);
    }

    #[test]
    fn test_remove_by_handler_removes_all_sharing_it() {
        let mut table = RouteTable::new();
        let shared = noop();
        table.add("/about", shared.clone()).unwrap();
        table.add("/author", shared.clone()).unwrap();
        table.add("/books", noop()).unwrap();

        assert_eq!(table.remove_handler(&shared), 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.snapshot()[0].pattern, "/books");
    }

    #[test]
    fn test_find_match_first_wins() {
        let mut table = RouteTable::new();
        table.add("/\\w+", noop()).unwrap();
        table.add("/about", noop()).unwrap();

        // Both patterns match; the earlier registration wins.
        let matched = table.find_match("about").unwrap();
        assert_eq!(matched.pattern, "/\\w+");
    }
}
