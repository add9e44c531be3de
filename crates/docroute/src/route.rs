//! Routes and the declarative tables they are declared in.
//!
//! A [`Route`] maps one exact path to a template reference, and optionally to a title. Routes with a title are listed as reference pages, see [`PageRegistry::list_reference_pages`](crate::registry::PageRegistry::list_reference_pages).
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::registry::PageRegistry;
use crate::router::Router;

/// A page of the site.
///
/// Routes are immutable once registered. The path is matched with exact string equality, there are no parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    pub(crate) path: String,
    #[serde(rename = "template")]
    pub(crate) template_ref: String,
    #[serde(default)]
    pub(crate) title: Option<String>,
}

impl Route {
    pub fn new(
        path: impl Into<String>,
        template_ref: impl Into<String>,
        title: Option<&str>,
    ) -> Self {
        Self {
            path: path.into(),
            template_ref: template_ref.into(),
            title: title.map(str::to_string),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Identifier handed to the [`TemplateStore`](crate::templates::TemplateStore) to load this page's content.
    pub fn template_ref(&self) -> &str {
        &self.template_ref
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether this route shows up in the reference navigation.
    pub fn is_reference_page(&self) -> bool {
        self.title.is_some()
    }
}

/// A full route table: every route of a site plus the path unmatched locations fall back to.
///
/// ## Example
/// ```rs
/// use docroute::route::RouteTable;
///
/// let table = RouteTable::from_yaml(r#"
/// fallback: /about
/// routes:
///   - path: /about
///     template: src/about.html
///   - path: /reference/contribute
///     template: src/reference/contribute.html
///     title: Contribute
/// "#)?;
///
/// let router = table.into_router()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteTable {
    pub fallback: String,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(fallback: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            fallback: fallback.into(),
            routes,
        }
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Registers every route of the table and builds a router falling back to the table's fallback path.
    pub fn into_router(self) -> Result<Router, ConfigError> {
        let registry = PageRegistry::from_table(&self)?;
        Ok(Router::new(registry, &self.fallback)?)
    }
}
