//! Locations, and the providers that report them to the router.
use std::collections::VecDeque;
use std::fmt;

/// A parsed location: the route path plus the in-page fragment, if any.
///
/// Hash-routed sites put the route inside the URL fragment, so `#/reference/contribute#section2` has the path `/reference/contribute` and the fragment `section2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    fragment: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>, fragment: Option<&str>) -> Self {
        Self {
            path: path.into(),
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        }
    }

    /// Parses a raw location.
    ///
    /// - a leading `#` directly followed by `/` is the hash-routing prefix and is dropped
    /// - a `?query` following the path is ignored
    /// - the first `#` after the path starts the fragment, an empty fragment is no fragment
    /// - an empty path is `/`
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = raw
            .strip_prefix('#')
            .filter(|rest| rest.starts_with('/'))
            .unwrap_or(raw);

        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (raw, None),
        };

        let path = match rest.split_once('?') {
            Some((path, _query)) => path,
            None => rest,
        };

        let path = if path.is_empty() { "/" } else { path };

        Self::new(path, fragment)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Location::parse(raw)
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Location::parse(&raw)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "#{}#{}", self.path, fragment),
            None => write!(f, "#{}", self.path),
        }
    }
}

/// Source of location changes, e.g. the address bar.
///
/// The router pulls changes one by one with [`Router::follow`](crate::router::Router::follow) until the provider returns `None`.
pub trait LocationProvider {
    fn next_location(&mut self) -> Option<Location>;
}

/// A [`LocationProvider`] replaying a fixed list of locations.
#[derive(Debug, Default, Clone)]
pub struct ScriptedLocations {
    pending: VecDeque<Location>,
}

impl ScriptedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, location: impl Into<Location>) {
        self.pending.push_back(location.into());
    }
}

impl<L: Into<Location>> FromIterator<L> for ScriptedLocations {
    fn from_iter<T: IntoIterator<Item = L>>(iter: T) -> Self {
        Self {
            pending: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl LocationProvider for ScriptedLocations {
    fn next_location(&mut self) -> Option<Location> {
        self.pending.pop_front()
    }
}
