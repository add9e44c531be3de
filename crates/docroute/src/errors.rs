//! Error types for docroute.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, but thiserror implements Display.
                    // Redirect one to the other so the user sees the readable message.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Raised while the page registry is being filled at startup. Always fatal.
#[derive(Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Route `{path}` is already registered. Every path may only be declared once.")]
    DuplicateRoute { path: String },
}

#[derive(Error)]
pub enum RouterError {
    #[error(
        "The fallback route `{path}` is not registered. Unmatched locations must be able to fall back to a real page."
    )]
    UnknownFallback { path: String },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Error)]
pub enum TemplateError {
    #[error("Template `{template}` not found")]
    NotFound { template: String },
    #[error("Failed to read template file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error)]
pub enum ConfigError {
    #[error("Failed to parse route table")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Router(#[from] RouterError),
}

#[derive(Error, Debug)]
pub enum DocrouteError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(RegistryError, RouterError, TemplateError, ConfigError);
