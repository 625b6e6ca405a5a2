//! Unified error types for the fbgen toolkit.

use std::path::PathBuf;
use thiserror::Error;

use crate::templates::TemplateKind;

/// All errors that can occur during fbgen operations.
#[derive(Error, Debug)]
pub enum FbgenError {
    // --- Configuration ---

    /// The generator configuration file was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A module entry has a key or display name that cannot be scaffolded.
    #[error("invalid module '{key}': {reason}")]
    InvalidModule { key: String, reason: String },

    /// Two module entries share the same key and would write to the same directory.
    #[error("duplicate module key: {0}")]
    DuplicateModule(String),

    // --- Templates ---

    /// A template set lists the same kind twice.
    #[error("template set contains more than one {0} template")]
    DuplicateTemplate(TemplateKind),

    /// A template references a placeholder that its context does not define.
    ///
    /// Templates are compiled-in configuration, so this is a defect in the
    /// template set and stops the whole run.
    #[error("unbound placeholder '{marker}' in {kind} template")]
    UnboundPlaceholder { kind: TemplateKind, marker: String },

    /// Handlebars rejected a template for any other reason (syntax, helpers).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Scaffolding ---

    /// Creating a scaffold directory or writing one of its files failed.
    #[error("failed to write {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Tools ---

    /// The file given to one of the standalone tools does not exist.
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// A tool parameter is outside the range it supports.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, FbgenError>`.
pub type Result<T> = std::result::Result<T, FbgenError>;
