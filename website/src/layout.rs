use std::io::Write;

use docroute::NavigationEvent;
use docroute::maud::{generator, reference_nav};
use log::error;
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub fn layout(event: &NavigationEvent) -> Markup {
    let title = match event.route.title() {
        Some(title) => format!("{} - PropWare", title),
        None => "PropWare".to_string(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                (generator())
            }
            body {
                @if event.route.path().starts_with("/reference/") {
                    aside {
                        (reference_nav(
                            &event.registry.list_reference_pages(),
                            Some(event.state.current_path()),
                        ))
                    }
                }
                main {
                    (PreEscaped(event.content))
                }
            }
        }
    }
}

pub fn print_page(event: &NavigationEvent) {
    let page = layout(event).into_string();
    if let Err(err) = writeln!(std::io::stdout().lock(), "{}", page) {
        error!(target: "layout", "failed to print {}: {}", event.state.current_path(), err);
    }
}
