use docroute::{Route, routes};

/// Every page of the PropWare documentation.
///
/// Reference pages are declared in the order they appear in the reference navigation.
pub fn propware_routes() -> Vec<Route> {
    routes![
        "/about" => "src/about.html",
        "/getting-started" => "src/getting-started.html",
        "/download" => "src/download.html",
        "/related-links" => "src/related-links.html",

        // Reference
        "/reference/cmake-overview" => "src/reference/cmake-overview.html"; "CMake Overview",
        "/reference/cmake-by-example" => "src/reference/cmake-by-example.html"; "CMake by Example",
        "/reference/cmake-reference" => "src/reference/cmake-reference.html"; "CMake Reference",
        "/reference/using-an-ide" => "src/reference/using-an-ide.html"; "Using an IDE",
        "/reference/cxx-crash-course" => "src/reference/cxx-crash-course.html"; "C++ Crash Course",
        "/reference/limitations" => "src/reference/limitations.html"; "Limitations",
        "/reference/build-from-source" =>
            "src/reference/build-from-source.html"; "Build from Source",
        "/reference/troubleshooting" => "src/reference/troubleshooting.html"; "Troubleshooting",
        "/reference/contribute" => "src/reference/contribute.html"; "Contribute",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use docroute::{PageRegistry, Router, RouteTable};

    fn router() -> Router {
        RouteTable::new("/about", propware_routes())
            .into_router()
            .unwrap()
    }

    #[test]
    fn test_routes_are_unique() {
        let table = RouteTable::new("/about", propware_routes());
        assert_eq!(PageRegistry::from_table(&table).unwrap().len(), 13);
    }

    #[test]
    fn test_reference_navigation_order() {
        let router = router();
        let titles: Vec<_> = router
            .reference_pages()
            .into_iter()
            .map(|(_, title)| title)
            .collect();

        assert_eq!(
            titles,
            vec![
                "CMake Overview",
                "CMake by Example",
                "CMake Reference",
                "Using an IDE",
                "C++ Crash Course",
                "Limitations",
                "Build from Source",
                "Troubleshooting",
                "Contribute",
            ]
        );
    }

    #[test]
    fn test_unknown_pages_go_to_about() {
        let router = router();

        assert_eq!(router.resolve("/").template_ref(), "src/about.html");
        assert_eq!(router.resolve("/reference").template_ref(), "src/about.html");
        assert_eq!(
            router.resolve("/reference/contribute").template_ref(),
            "src/reference/contribute.html"
        );
    }
}
