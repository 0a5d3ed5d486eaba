//! Error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Section tracking errors
///
/// These are configuration errors: they point at integration bugs in the
/// host (bad registration, stale navigation targets) rather than runtime noise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Two registered sections share an id
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    /// Navigation target was never registered
    #[error("unknown section id: {0}")]
    UnknownSection(String),

    /// Tracker was used after `dispose()`
    #[error("section tracker has been disposed")]
    Disposed,
}

/// Portfolio content loading errors
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid TOML for the portfolio schema
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] toml::de::Error),

    /// Content parsed but violates a constraint
    #[error("invalid portfolio content: {0}")]
    Invalid(String),
}

/// Contact form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required field is blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Email address is malformed
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// A submission is already in flight
    #[error("a message is already being sent")]
    Busy,
}
