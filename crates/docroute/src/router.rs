//! Matching locations against the page registry.
//!
//! The [`Router`] owns the [`PageRegistry`] built at startup. Every navigation resolves synchronously: the location's path is looked up with exact string equality, unknown paths are redirected to the fallback route, the page's template is loaded from a [`TemplateStore`] and the post-navigation listeners are called, in registration order, before [`Router::navigate`] returns.
use std::time::Instant;

use log::{debug, info};

use crate::errors::RouterError;
use crate::location::{Location, LocationProvider};
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};
use crate::registry::PageRegistry;
use crate::route::Route;
use crate::templates::TemplateStore;

/// Outcome of [`Router::resolve_location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a Route),
    /// No registered path matched, the fallback route is served instead.
    Fallback(&'a Route),
}

impl<'a> Resolution<'a> {
    pub fn route(&self) -> &'a Route {
        match self {
            Resolution::Matched(route) | Resolution::Fallback(route) => route,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// What the router shows after a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    matched_route: Option<Route>,
    hash_fragment: Option<String>,
}

impl NavigationState {
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The route that was requested, `None` when the location fell back.
    pub fn matched_route(&self) -> Option<&Route> {
        self.matched_route.as_ref()
    }

    pub fn hash_fragment(&self) -> Option<&str> {
        self.hash_fragment.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState<'a> {
    Idle,
    Navigated(&'a NavigationState),
}

impl<'a> RouterState<'a> {
    pub fn navigation(&self) -> Option<&'a NavigationState> {
        match *self {
            RouterState::Idle => None,
            RouterState::Navigated(state) => Some(state),
        }
    }

    pub fn current_path(&self) -> Option<&'a str> {
        self.navigation().map(NavigationState::current_path)
    }
}

/// Passed to every post-navigation listener.
pub struct NavigationEvent<'a> {
    /// The route being displayed, the fallback route when the location was unmatched.
    pub route: &'a Route,
    pub state: &'a NavigationState,
    /// Every page of the site, e.g. to render the reference navigation next to the content.
    pub registry: &'a PageRegistry,
    /// The loaded template of `route`.
    pub content: &'a str,
    pub fallback: bool,
}

pub type NavigationListener = Box<dyn FnMut(&NavigationEvent)>;

pub struct Router {
    registry: PageRegistry,
    fallback: Route,
    /// `None` until the first navigation.
    navigation: Option<NavigationState>,
    listeners: Vec<NavigationListener>,
}

impl Router {
    /// Takes ownership of a fully built registry. `fallback` must be one of its paths.
    pub fn new(registry: PageRegistry, fallback: &str) -> Result<Self, RouterError> {
        let Some(fallback) = registry.get(fallback).cloned() else {
            return Err(RouterError::UnknownFallback {
                path: fallback.to_string(),
            });
        };

        Ok(Self {
            registry,
            fallback,
            navigation: None,
            listeners: Vec::new(),
        })
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn fallback_route(&self) -> &Route {
        &self.fallback
    }

    /// Returns the route registered under `path`, or the fallback route.
    pub fn resolve(&self, path: &str) -> &Route {
        self.resolve_location(path).route()
    }

    pub fn resolve_location(&self, path: &str) -> Resolution<'_> {
        match self.registry.get(path) {
            Some(route) => Resolution::Matched(route),
            None => {
                debug!(
                    target: "router",
                    "unmatched path {}, falling back to {}",
                    path,
                    self.fallback.path()
                );
                Resolution::Fallback(&self.fallback)
            }
        }
    }

    /// The reference pages every page can link to, see [`PageRegistry::list_reference_pages`].
    pub fn reference_pages(&self) -> Vec<(&str, &str)> {
        self.registry.list_reference_pages()
    }

    pub fn state(&self) -> RouterState<'_> {
        match &self.navigation {
            Some(state) => RouterState::Navigated(state),
            None => RouterState::Idle,
        }
    }

    /// Registers a listener called after every successful navigation.
    pub fn on_navigated(&mut self, listener: impl FnMut(&NavigationEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Navigates to `location`.
    ///
    /// An unmatched path is not an error: the router redirects to the fallback route, dropping the fragment. The only failure is the template store not providing the page.
    ///
    /// ## Example
    /// ```rs
    /// router.navigate("#/reference/contribute#section2", &store)?;
    ///
    /// let state = router.state().navigation().unwrap();
    /// assert_eq!(state.current_path(), "/reference/contribute");
    /// assert_eq!(state.hash_fragment(), Some("section2"));
    /// ```
    pub fn navigate(
        &mut self,
        location: impl Into<Location>,
        store: &dyn TemplateStore,
    ) -> Result<&NavigationState, RouterError> {
        let start = Instant::now();
        let location = location.into();

        // Borrow fields separately, the listeners are called while the route is still borrowed.
        let (route, fallback) = match self.registry.get(location.path()) {
            Some(route) => (route, false),
            None => {
                debug!(
                    target: "router",
                    "unmatched path {}, redirecting to {}",
                    location.path(),
                    self.fallback.path()
                );
                (&self.fallback, true)
            }
        };

        let content = store.load_template(route.template_ref())?;

        let state = NavigationState {
            current_path: route.path().to_string(),
            matched_route: (!fallback).then(|| route.clone()),
            hash_fragment: if fallback {
                None
            } else {
                location.fragment().map(str::to_string)
            },
        };

        let event = NavigationEvent {
            route,
            state: &state,
            registry: &self.registry,
            content: &content,
            fallback,
        };

        for listener in self.listeners.iter_mut() {
            listener(&event);
        }

        info!(
            target: "router",
            "{} -> {} {}",
            location,
            route.template_ref(),
            format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
        );

        Ok(self.navigation.insert(state))
    }

    /// Navigates to every location reported by `provider` until it runs dry. Returns the number of navigations.
    pub fn follow(
        &mut self,
        provider: &mut dyn LocationProvider,
        store: &dyn TemplateStore,
    ) -> Result<usize, RouterError> {
        let mut count = 0;
        while let Some(location) = provider.next_location() {
            self.navigate(location, store)?;
            count += 1;
        }

        Ok(count)
    }
}
