#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod anchor;
pub mod errors;
pub mod location;
pub mod registry;
pub mod route;
pub mod router;
pub mod templates;

// Exports for end-users
pub use location::{Location, LocationProvider, ScriptedLocations};
pub use options::SiteOptions;
pub use registry::PageRegistry;
pub use route::{Route, RouteTable};
pub use router::{NavigationEvent, NavigationState, Router, RouterState};

mod options;
mod templating;

#[cfg(feature = "maud")]
#[cfg_attr(docsrs, doc(cfg(feature = "maud")))]
pub mod maud {
    //! Traits and methods for [Maud](https://maud.lambda.xyz), a macro for writing HTML templates.
    //!
    //! ## Example
    //! ```rs
    //! use docroute::maud::reference_nav;
    //! use maud::{html, Markup, PreEscaped};
    //!
    //! fn layout(event: &docroute::NavigationEvent) -> Markup {
    //!   html! {
    //!     (reference_nav(&event.registry.list_reference_pages(), Some(event.state.current_path())))
    //!     main { (PreEscaped(event.content)) }
    //!   }
    //! }
    //! ```
    pub use crate::templating::maud_ext::*;
}

// Internal modules
mod logging;

use anchor::{LogScroller, anchor_scroll};
use errors::DocrouteError;
use logging::{init_logging, print_title};
use templates::DirTemplateStore;

/// Helps to declare every route of a site, in order.
///
/// Each entry is `path => template`, followed by `; title` for pages listed in the reference navigation.
///
/// ## Example
/// ```rs
/// use docroute::routes;
///
/// let routes = routes![
///     "/about" => "src/about.html",
///     "/reference/limitations" => "src/reference/limitations.html"; "Limitations",
/// ];
/// ```
///
/// ## Expand
/// ```rs
/// vec![
///     docroute::Route::new("/about", "src/about.html", None),
///     docroute::Route::new("/reference/limitations", "src/reference/limitations.html", Some("Limitations")),
/// ];
/// ```
#[macro_export]
macro_rules! routes {
    (@title) => {
        None
    };
    (@title $title:expr) => {
        Some($title)
    };
    [$($path:expr => $template:expr $(; $title:expr)?),* $(,)?] => {
        vec![$($crate::Route::new($path, $template, $crate::routes!(@title $($title)?))),*]
    };
}

/// The version of docroute being used.
///
/// Can be used to create a generator tag in the output HTML.
pub const GENERATOR: &str = concat!("docroute v", env!("CARGO_PKG_VERSION"));

/// A router paired with the directory its templates live in.
pub struct Site {
    pub router: Router,
    pub store: DirTemplateStore,
}

impl Site {
    pub fn navigate(
        &mut self,
        location: impl Into<Location>,
    ) -> Result<&NavigationState, DocrouteError> {
        Ok(self.router.navigate(location, &self.store)?)
    }

    pub fn follow(&mut self, provider: &mut dyn LocationProvider) -> Result<usize, DocrouteError> {
        Ok(self.router.follow(provider, &self.store)?)
    }
}

/// Registers `routes` in order and builds the site described by `options`.
///
/// Fails if two routes share a path, or if `options.fallback` is not one of `routes`.
pub fn open_site(routes: Vec<Route>, options: SiteOptions) -> Result<Site, DocrouteError> {
    let table = RouteTable::new(options.fallback, routes);
    let mut router = table.into_router()?;

    if options.anchor_scroll {
        router.on_navigated(anchor_scroll(LogScroller));
    }

    Ok(Site {
        router,
        store: DirTemplateStore::new(options.template_root),
    })
}

/// docroute entrypoint. Opens the site, then navigates to every location `provider` reports until it is exhausted.
///
/// `setup` is called once before the first navigation, typically to register listeners displaying the pages.
///
/// ## Example
/// Should be called from the main function of the binary crate.
/// ```rs
/// use docroute::{ScriptedLocations, SiteOptions, routes, run};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let mut locations: ScriptedLocations = ["#/about"].into_iter().collect();
///   run(routes!["/about" => "src/about.html"], SiteOptions::default(), &mut locations, |_| {})?;
///   Ok(())
/// }
/// ```
pub fn run(
    routes: Vec<Route>,
    options: SiteOptions,
    provider: &mut dyn LocationProvider,
    setup: impl FnOnce(&mut Router),
) -> Result<usize, Box<dyn std::error::Error>> {
    init_logging();

    let mut site = open_site(routes, options)?;
    print_title(&format!(
        "{} pages, {} in reference",
        site.router.registry().len(),
        site.router.reference_pages().len()
    ));

    setup(&mut site.router);

    Ok(site.follow(provider)?)
}
