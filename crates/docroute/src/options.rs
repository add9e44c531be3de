use std::path::PathBuf;

/// Site options. Should be passed to [`open_site()`](crate::open_site()) or [`run()`](crate::run()).
///
/// ## Examples
/// ```rs
/// use docroute::{SiteOptions, open_site, routes};
///
/// let site = open_site(
///   routes![
///     "/about" => "src/about.html",
///     "/reference/contribute" => "src/reference/contribute.html"; "Contribute"
///   ],
///   SiteOptions {
///     template_root: "docs/static-web".into(),
///     ..Default::default()
///   },
/// )?;
/// ```
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Directory template references are resolved against. Defaults to the current directory.
    pub template_root: PathBuf,

    /// Path every unmatched location is redirected to. Must be one of the site's routes.
    /// Defaults to `/about`.
    pub fallback: String,

    /// Whether to scroll to the location's fragment after each navigation, see [`anchor_scroll`](crate::anchor::anchor_scroll).
    pub anchor_scroll: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            template_root: ".".into(),
            fallback: "/about".to_string(),
            anchor_scroll: true,
        }
    }
}
