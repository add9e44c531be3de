//! The page registry: every route of the site, fixed at startup.
use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::errors::RegistryError;
use crate::route::{Route, RouteTable};

/// Ordered set of [`Route`]s keyed by their exact path.
///
/// Filled once during startup and then handed over to a [`Router`](crate::router::Router). There is no way to remove a route.
#[derive(Debug, Default, Clone)]
pub struct PageRegistry {
    routes: Vec<Route>,
    by_path: FxHashMap<String, usize>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every route of `table` in order. Stops at the first duplicate path.
    pub fn from_table(table: &RouteTable) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for route in &table.routes {
            registry.register(route.clone())?;
        }

        Ok(registry)
    }

    /// Declares a new page.
    ///
    /// Fails with [`RegistryError::DuplicateRoute`] if `path` is already taken, in which case the registry is left untouched.
    ///
    /// ## Example
    /// ```rs
    /// use docroute::PageRegistry;
    ///
    /// let mut registry = PageRegistry::new();
    /// registry.register_route("/about", "src/about.html", None)?;
    /// registry.register_route("/reference/contribute", "src/reference/contribute.html", Some("Contribute"))?;
    ///
    /// assert!(registry.register_route("/about", "src/other.html", None).is_err());
    /// ```
    pub fn register_route(
        &mut self,
        path: &str,
        template_ref: &str,
        title: Option<&str>,
    ) -> Result<(), RegistryError> {
        self.register(Route::new(path, template_ref, title))
    }

    pub fn register(&mut self, route: Route) -> Result<(), RegistryError> {
        if self.by_path.contains_key(route.path()) {
            debug!(target: "registry", "rejected duplicate route {}", route.path());
            return Err(RegistryError::DuplicateRoute {
                path: route.path().to_string(),
            });
        }

        trace!(target: "registry", "{} -> {}", route.path(), route.template_ref());

        self.by_path.insert(route.path().to_string(), self.routes.len());
        self.routes.push(route);

        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&index| &self.routes[index])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// The `(path, title)` of every titled route, in registration order. Used to render the reference navigation.
    pub fn list_reference_pages(&self) -> Vec<(&str, &str)> {
        self.routes
            .iter()
            .filter_map(|route| route.title().map(|title| (route.path(), title)))
            .collect()
    }

    /// All routes, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
