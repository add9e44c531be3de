use maud::{Markup, Render, html};

use crate::GENERATOR;
use crate::location::Location;
use crate::router::Router;

impl Render for Location {
    fn render(&self) -> Markup {
        html! { (self.to_string()) }
    }
}

/// Renders the navigation menu of the reference pages, marking `current_path` as active.
///
/// Links use hash routing, so `/reference/contribute` is linked as `#/reference/contribute`.
///
/// ## Example
/// ```rs
/// use docroute::maud::reference_nav;
///
/// let nav = reference_nav(&router.reference_pages(), Some("/reference/contribute"));
/// ```
pub fn reference_nav(pages: &[(&str, &str)], current_path: Option<&str>) -> Markup {
    html! {
        nav."reference-nav" {
            ul {
                @for (path, title) in pages {
                    @let is_current_page = current_path == Some(*path);
                    li class=[is_current_page.then_some("active")] {
                        a href=(Location::new(*path, None)) { (title) }
                    }
                }
            }
        }
    }
}

/// Shortcut for [`reference_nav`] using the router's registry and current location.
pub fn router_nav(router: &Router) -> Markup {
    reference_nav(&router.reference_pages(), router.state().current_path())
}

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}
