//! The router facade.
//!
//! # Responsibilities
//! - Own the configuration, route table, and address bar
//! - Expose registration, removal, navigation, and the observable state
//! - Activate the change listener on the first registration

use std::sync::{Arc, RwLock};

use arc_swap::ArcSwap;

use crate::config::schema::ActiveConfig;
use crate::config::validation::validate_options;
use crate::config::{Mode, RouterOptions};
use crate::error::{RouterError, RouterResult};
use crate::listener::ChangeListener;
use crate::location::{adapter_for, AddressBar, MemoryAddressBar};
use crate::routing::{Handler, Route, RouteMap, RouteTable};

/// State shared between a router and its listener task.
pub(crate) struct RouterShared {
    pub(crate) config: ArcSwap<ActiveConfig>,
    pub(crate) routes: RwLock<RouteTable>,
    pub(crate) bar: Arc<dyn AddressBar>,
}

impl RouterShared {
    /// The logical fragment for the current address, under the current
    /// mode and root.
    pub(crate) fn current_fragment(&self) -> String {
        let config = self.config.load();
        adapter_for(config.effective_mode()).fragment(&*self.bar, &config.root)
    }
}

/// Argument to [`Router::on`]: one route, or an ordered map of routes.
pub enum RouteSpec {
    Single { pattern: String, handler: Handler },
    Map(RouteMap),
}

impl From<(&str, Handler)> for RouteSpec {
    fn from((pattern, handler): (&str, Handler)) -> Self {
        RouteSpec::Single {
            pattern: pattern.to_string(),
            handler,
        }
    }
}

impl From<(String, Handler)> for RouteSpec {
    fn from((pattern, handler): (String, Handler)) -> Self {
        RouteSpec::Single { pattern, handler }
    }
}

impl From<RouteMap> for RouteSpec {
    fn from(map: RouteMap) -> Self {
        RouteSpec::Map(map)
    }
}

/// Argument to [`Router::remove`]: a pattern's text, or a handler whose
/// registrations should all go.
pub enum RemoveTarget {
    Pattern(String),
    Handler(Handler),
}

impl From<&str> for RemoveTarget {
    fn from(pattern: &str) -> Self {
        RemoveTarget::Pattern(pattern.to_string())
    }
}

impl From<String> for RemoveTarget {
    fn from(pattern: String) -> Self {
        RemoveTarget::Pattern(pattern)
    }
}

impl From<Handler> for RemoveTarget {
    fn from(handler: Handler) -> Self {
        RemoveTarget::Handler(handler)
    }
}

/// A client-style URL router.
///
/// Keeps an ordered table of (pattern, handler) routes in sync with an
/// address bar: registering the first route starts a polling listener that
/// invokes the first matching handler whenever the address's logical
/// fragment changes.
pub struct Router {
    shared: Arc<RouterShared>,
    listener: ChangeListener,
}

impl Router {
    /// An unconfigured router over an in-process address bar.
    pub fn new() -> Self {
        Self::with_address_bar(Arc::new(MemoryAddressBar::new()))
    }

    /// An unconfigured router over the given address bar.
    pub fn with_address_bar(bar: Arc<dyn AddressBar>) -> Self {
        Self {
            shared: Arc::new(RouterShared {
                config: ArcSwap::from_pointee(ActiveConfig::default()),
                routes: RwLock::new(RouteTable::new()),
                bar,
            }),
            listener: ChangeListener::new(),
        }
    }

    /// A router configured at construction, over an in-process address bar.
    ///
    /// The options are validated exactly as [`Router::config`] validates
    /// them.
    pub fn with_options(options: RouterOptions) -> RouterResult<Self> {
        let router = Self::new();
        router.config(options)?;
        Ok(router)
    }

    /// Apply addressing options.
    ///
    /// A successful call overwrites mode and root (absent fields fall back
    /// to `hash` and `/`); the route table is never touched. Empty options
    /// are rejected and leave the prior configuration unchanged.
    pub fn config(&self, options: RouterOptions) -> RouterResult<()> {
        validate_options(&options)?;
        let next = ActiveConfig::from_options(&options);
        tracing::debug!(mode = %next.effective_mode(), root = %next.root, "router configured");
        self.shared.config.store(Arc::new(next));
        Ok(())
    }

    /// Register one route.
    ///
    /// The first successful registration activates the change listener,
    /// which requires an ambient Tokio runtime.
    pub fn dispatch(&self, pattern: &str, handler: Handler) -> RouterResult<()> {
        self.shared.routes.write().unwrap().add(pattern, handler)?;
        tracing::debug!(%pattern, "route registered");
        self.listener.activate(self.shared.clone());
        Ok(())
    }

    /// Register every route in the map, in map order, all-or-nothing.
    pub fn dispatch_all(&self, map: RouteMap) -> RouterResult<()> {
        let count = map.len();
        self.shared.routes.write().unwrap().add_all(map)?;
        tracing::debug!(count, "routes registered");
        self.listener.activate(self.shared.clone());
        Ok(())
    }

    /// Convenience registration: a single route or a route map.
    pub fn on<S: Into<RouteSpec>>(&self, spec: S) -> RouterResult<()> {
        match spec.into() {
            RouteSpec::Single { pattern, handler } => {
                if pattern.is_empty() {
                    return Err(RouterError::InvalidArgument(
                        "expected a non-empty pattern or a route map",
                    ));
                }
                self.dispatch(&pattern, handler)
            }
            RouteSpec::Map(map) => {
                if map.is_empty() {
                    return Err(RouterError::EmptyTarget);
                }
                self.dispatch_all(map)
            }
        }
    }

    /// Remove routes by pattern text or by handler identity. Removing
    /// nothing is not an error.
    pub fn remove<T: Into<RemoveTarget>>(&self, target: T) {
        let removed = {
            let mut table = self.shared.routes.write().unwrap();
            match target.into() {
                RemoveTarget::Pattern(pattern) => table.remove_pattern(&pattern),
                RemoveTarget::Handler(handler) => table.remove_handler(&handler),
            }
        };
        if removed > 0 {
            tracing::debug!(removed, "routes removed");
        }
    }

    /// Clear all routes and reset the configuration to its empty state.
    ///
    /// The listener stays engaged; each subsequent poll simply finds no
    /// matching route. Use [`Router::stop_listening`] for teardown.
    pub fn flush(&self) {
        self.shared.routes.write().unwrap().clear();
        self.shared.config.store(Arc::new(ActiveConfig::default()));
        tracing::debug!("router flushed");
    }

    /// Change the address to the given logical path under the current mode
    /// and root.
    ///
    /// Returns after the address mutation; the matching handler (if any)
    /// runs on the listener's next wakeup, never synchronously.
    pub fn navigate(&self, path: &str) {
        let config = self.shared.config.load();
        adapter_for(config.effective_mode()).navigate(&*self.shared.bar, &config.root, path);
        tracing::debug!(%path, mode = %config.effective_mode(), "navigated");
    }

    /// Historical alias for [`Router::navigate`].
    pub fn go(&self, path: &str) {
        self.navigate(path)
    }

    /// The current logical fragment, relative to root.
    pub fn fragment(&self) -> String {
        self.shared.current_fragment()
    }

    /// Configured mode; `None` until `config()` has been called.
    pub fn mode(&self) -> Option<Mode> {
        self.shared.config.load().mode
    }

    /// Configured root, always starting and ending with `/`.
    pub fn root(&self) -> String {
        self.shared.config.load().root.clone()
    }

    /// Ordered copy of the registered routes.
    pub fn routes(&self) -> Vec<Route> {
        self.shared.routes.read().unwrap().snapshot()
    }

    /// True once the change listener has been activated.
    pub fn listening(&self) -> bool {
        self.listener.is_active()
    }

    /// Halt the change listener. Registered routes stay in place but no
    /// further dispatches occur.
    pub fn stop_listening(&self) {
        self.listener.stop();
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
