use std::{fmt::Display, path::PathBuf};

/// A little helper trait for reporting results we can't recover from
pub trait UnwrapOrDie<T, E> {
    // print_msg should be a closure that logs a message before termination
    fn unwrap_or_die(self, print_msg: impl FnOnce(E)) -> T;
}

impl<T, E: Display> UnwrapOrDie<T, E> for Result<T, E> {
    fn unwrap_or_die(self, print_msg: impl FnOnce(E)) -> T {
        match self {
            Ok(val) => val,
            Err(e) => {
                print_msg(e);
                std::process::exit(1)
            }
        }
    }
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not create output directory '{}': '{source}'", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("fetching catalog failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("writing manifest failed: {0}")]
    Manifest(#[from] ManifestError),
    #[error("cancelled")]
    Cancelled,
}

/// Ways fetching the font catalog can fail
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("request failed: '{0}'")]
    Transport(String),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    #[error("malformed catalog: '{0}'")]
    Decode(#[from] serde_json::Error),
    #[error("cancelled")]
    Cancelled,
}

/// Ways a single variant download can fail.
///
/// These are reported and skipped; they never abort a run.
#[derive(Debug, thiserror::Error)]
pub enum VariantError {
    #[error("request failed: '{0}'")]
    Transport(String),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    #[error("failed to read response body: '{0}'")]
    ReadBody(std::io::Error),
    #[error("failed to write '{}': '{source}'", .path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cancelled")]
    Cancelled,
}

/// Ways writing the manifest can fail
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to serialize manifest: '{0}'")]
    Encode(serde_json::Error),
    #[error("failed to write '{}': '{source}'", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The failure modes shared by every request, before the caller gives them
/// a more specific meaning.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    Transport(String),
    #[error("cancelled")]
    Cancelled,
}

impl From<RequestError> for CatalogError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Transport(msg) => CatalogError::Transport(msg),
            RequestError::Cancelled => CatalogError::Cancelled,
        }
    }
}

impl From<RequestError> for VariantError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Transport(msg) => VariantError::Transport(msg),
            RequestError::Cancelled => VariantError::Cancelled,
        }
    }
}
