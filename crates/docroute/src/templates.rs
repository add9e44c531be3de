//! Where page content comes from.
//!
//! The router never reads HTML itself, it asks a [`TemplateStore`] for the content behind a route's template reference.
use std::path::{Component, Path, PathBuf};

use log::debug;
use rustc_hash::FxHashMap;

use crate::errors::TemplateError;

pub trait TemplateStore {
    fn load_template(&self, template_ref: &str) -> Result<String, TemplateError>;
}

/// Loads templates from files below a root directory, the template reference being the path relative to that root.
#[derive(Debug, Clone)]
pub struct DirTemplateStore {
    root: PathBuf,
}

impl DirTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve_path(&self, template_ref: &str) -> Option<PathBuf> {
        let relative = Path::new(template_ref);
        let stays_inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

        stays_inside.then(|| self.root.join(relative))
    }
}

impl TemplateStore for DirTemplateStore {
    fn load_template(&self, template_ref: &str) -> Result<String, TemplateError> {
        let not_found = || TemplateError::NotFound {
            template: template_ref.to_string(),
        };

        let path = self.resolve_path(template_ref).ok_or_else(not_found)?;

        if !path.is_file() {
            debug!(target: "templates", "{} does not exist", path.display());
            return Err(not_found());
        }

        std::fs::read_to_string(&path).map_err(|source| TemplateError::ReadFailed { path, source })
    }
}

/// Keeps templates in memory. Handy for tests and for sites embedding their pages in the binary.
#[derive(Debug, Default, Clone)]
pub struct MemoryTemplateStore {
    templates: FxHashMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template_ref: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(template_ref.into(), content.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryTemplateStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load_template(&self, template_ref: &str) -> Result<String, TemplateError> {
        self.templates
            .get(template_ref)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound {
                template: template_ref.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_template_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/reference")).unwrap();
        std::fs::write(dir.path().join("src/about.html"), "<h1>About</h1>").unwrap();
        std::fs::write(
            dir.path().join("src/reference/contribute.html"),
            "<h1>Contribute</h1>",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_dir_store_loads_nested_template() {
        let dir = setup_template_dir();
        let store = DirTemplateStore::new(dir.path());

        assert_eq!(store.load_template("src/about.html").unwrap(), "<h1>About</h1>");
        assert_eq!(
            store.load_template("src/reference/contribute.html").unwrap(),
            "<h1>Contribute</h1>"
        );
    }

    #[test]
    fn test_dir_store_missing_template() {
        let dir = setup_template_dir();
        let store = DirTemplateStore::new(dir.path());

        assert!(matches!(
            store.load_template("src/download.html"),
            Err(TemplateError::NotFound { template }) if template == "src/download.html"
        ));
    }

    #[test]
    fn test_dir_store_rejects_escaping_refs() {
        let dir = setup_template_dir();
        let store = DirTemplateStore::new(dir.path().join("src"));

        assert!(matches!(
            store.load_template("../src/about.html"),
            Err(TemplateError::NotFound { .. })
        ));
        assert!(matches!(
            store.load_template("/etc/hostname"),
            Err(TemplateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_dir_store_directory_is_not_a_template() {
        let dir = setup_template_dir();
        let store = DirTemplateStore::new(dir.path());

        assert!(matches!(
            store.load_template("src/reference"),
            Err(TemplateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_memory_store() {
        let mut store: MemoryTemplateStore =
            [("about.html", "<h1>About</h1>")].into_iter().collect();
        store.insert("download.html", "<h1>Download</h1>");

        assert_eq!(store.load_template("about.html").unwrap(), "<h1>About</h1>");
        assert_eq!(store.load_template("download.html").unwrap(), "<h1>Download</h1>");
        assert!(store.load_template("missing.html").is_err());
    }
}
