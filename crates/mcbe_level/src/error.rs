//! Error types that can be emitted from this library

use std::path::PathBuf;

use mcbe_nbt::TagType;
use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`walkdir::Error`]
    #[error(transparent)]
    WalkDirError(#[from] walkdir::Error),

    /// Transparent warpper for [`mcbe_nbt::error::Error`]
    #[error(transparent)]
    #[diagnostic(transparent)]
    Nbt(#[from] mcbe_nbt::error::Error),

    /// no level.dat at {0}
    #[error("no level.dat at {0}")]
    LevelDatNotFound(PathBuf),
}

/// Error type to provide further information when an update is declined
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// nothing at {0}
    #[error("nothing at {0}")]
    NotFound(String),

    /// {0} is not a compound
    #[error("{0} is not a compound")]
    NotCompound(String),

    /// {path} is a {kind} and cannot be set from text
    #[error("{path} is a {kind} and cannot be set from text")]
    NotEditable {
        /// Path of the tag
        path: String,
        /// Type of the tag
        kind: TagType,
    },

    /// {value:?} is not a valid {kind}
    #[error("{value:?} is not a valid {kind}")]
    InvalidValue {
        /// Text that was given
        value: String,
        /// Type of the tag
        kind: TagType,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
