use docroute::{SiteOptions, run};

mod layout;
mod locations;
mod routes;

use layout::print_page;
use locations::StdinLocations;
use routes::propware_routes;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut locations = StdinLocations::new(std::io::stdin().lock());

    run(
        propware_routes(),
        SiteOptions {
            template_root: "docs/static-web".into(),
            fallback: "/about".to_string(),
            ..Default::default()
        },
        &mut locations,
        |router| router.on_navigated(print_page),
    )?;

    Ok(())
}
