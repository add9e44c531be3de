//! Scrolling to in-page anchors after a navigation.
//!
//! Locations like `#/reference/contribute#section2` point at an element inside the page. Once the router has loaded the page, the listener built by [`anchor_scroll`] looks the fragment up in the loaded HTML and asks an [`AnchorScroller`] to bring it into view.
use std::cell::Cell;

use log::{debug, info};
use lol_html::{RewriteStrSettings, element, rewrite_str};

use crate::router::NavigationEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// An element of the page whose `id` (or `<a name>`) matches the fragment.
    Anchor(String),
    /// The fragment matches nothing on the page, scroll back to the top instead.
    Top,
}

/// Performs the actual scrolling side effect.
pub trait AnchorScroller {
    fn scroll_to(&mut self, target: ScrollTarget);
}

impl<F: FnMut(ScrollTarget)> AnchorScroller for F {
    fn scroll_to(&mut self, target: ScrollTarget) {
        self(target)
    }
}

/// An [`AnchorScroller`] that only reports where it would scroll to.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogScroller;

impl AnchorScroller for LogScroller {
    fn scroll_to(&mut self, target: ScrollTarget) {
        match target {
            ScrollTarget::Anchor(id) => info!(target: "anchor", "scrolled to #{}", id),
            ScrollTarget::Top => info!(target: "anchor", "scrolled to top"),
        }
    }
}

/// Returns whether `html` contains an element with the given `id`, or an `<a>` with the given `name`.
pub fn has_anchor(html: &str, fragment: &str) -> bool {
    let found = Cell::new(false);

    let result = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("[id]", |el| {
                    if el.get_attribute("id").as_deref() == Some(fragment) {
                        found.set(true);
                    }
                    Ok(())
                }),
                element!("a[name]", |el| {
                    if el.get_attribute("name").as_deref() == Some(fragment) {
                        found.set(true);
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    );

    if let Err(err) = result {
        debug!(target: "anchor", "could not scan page for #{}: {}", fragment, err);
        return false;
    }

    found.get()
}

pub fn scroll_target(html: &str, fragment: &str) -> ScrollTarget {
    if has_anchor(html, fragment) {
        ScrollTarget::Anchor(fragment.to_string())
    } else {
        ScrollTarget::Top
    }
}

/// Builds the post-navigation listener scrolling to the location's fragment.
///
/// Navigations without a fragment leave the scroller alone. Otherwise `scroller` is called exactly once per navigation.
///
/// ## Example
/// ```rs
/// use docroute::anchor::{anchor_scroll, LogScroller};
///
/// router.on_navigated(anchor_scroll(LogScroller));
/// ```
pub fn anchor_scroll(mut scroller: impl AnchorScroller) -> impl FnMut(&NavigationEvent) {
    move |event| {
        if let Some(fragment) = event.state.hash_fragment() {
            scroller.scroll_to(scroll_target(event.content, fragment));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::registry::PageRegistry;
    use crate::router::Router;
    use crate::templates::MemoryTemplateStore;

    const CONTRIBUTE: &str = r#"
<h1>Contribute</h1>
<h2 id="section1">Getting the code</h2>
<p>...</p>
<h2 id="section2">Submitting changes</h2>
<a name="legacy-anchor"></a>
"#;

    fn contribute_site() -> (Router, MemoryTemplateStore) {
        let mut registry = PageRegistry::new();
        registry.register_route("/about", "about.html", None).unwrap();
        registry
            .register_route("/reference/contribute", "contribute.html", Some("Contribute"))
            .unwrap();

        let store = [
            ("about.html", "<h1 id=\"section2\">About</h1>"),
            ("contribute.html", CONTRIBUTE),
        ]
        .into_iter()
        .collect();

        (Router::new(registry, "/about").unwrap(), store)
    }

    fn recording_router() -> (Router, MemoryTemplateStore, Rc<RefCell<Vec<ScrollTarget>>>) {
        let (mut router, store) = contribute_site();
        let scrolls = Rc::new(RefCell::new(Vec::new()));

        let scrolls_clone = scrolls.clone();
        router.on_navigated(anchor_scroll(move |target: ScrollTarget| {
            scrolls_clone.borrow_mut().push(target)
        }));

        (router, store, scrolls)
    }

    #[test]
    fn test_has_anchor_by_id() {
        assert!(has_anchor(CONTRIBUTE, "section2"));
        assert!(!has_anchor(CONTRIBUTE, "section3"));
    }

    #[test]
    fn test_has_anchor_by_name() {
        assert!(has_anchor(CONTRIBUTE, "legacy-anchor"));
        assert!(!has_anchor("<div name=\"legacy-anchor\"></div>", "legacy-anchor"));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(
            scroll_target(CONTRIBUTE, "section1"),
            ScrollTarget::Anchor("section1".to_string())
        );
        assert_eq!(scroll_target(CONTRIBUTE, "nowhere"), ScrollTarget::Top);
    }

    #[test]
    fn test_fragment_scrolls_once_per_navigation() {
        let (mut router, store, scrolls) = recording_router();

        router
            .navigate("#/reference/contribute#section2", &store)
            .unwrap();

        assert_eq!(
            *scrolls.borrow(),
            vec![ScrollTarget::Anchor("section2".to_string())]
        );

        router
            .navigate("#/reference/contribute#section2", &store)
            .unwrap();

        assert_eq!(scrolls.borrow().len(), 2);
    }

    #[test]
    fn test_no_fragment_no_scroll() {
        let (mut router, store, scrolls) = recording_router();

        router.navigate("#/reference/contribute", &store).unwrap();
        router.navigate("#/about", &store).unwrap();

        assert!(scrolls.borrow().is_empty());
    }

    #[test]
    fn test_missing_anchor_scrolls_to_top() {
        let (mut router, store, scrolls) = recording_router();

        router
            .navigate("#/reference/contribute#section9", &store)
            .unwrap();

        assert_eq!(*scrolls.borrow(), vec![ScrollTarget::Top]);
    }

    #[test]
    fn test_fallback_does_not_scroll() {
        let (mut router, store, scrolls) = recording_router();

        router.navigate("#/unknown#section2", &store).unwrap();

        assert!(scrolls.borrow().is_empty());
    }
}
