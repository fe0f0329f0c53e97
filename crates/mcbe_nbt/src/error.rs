//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

use crate::tag::TagType;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// input is not a valid document
    #[error("input is not a valid document")]
    Format(#[from] FormatError),

    /// document cannot be encoded
    #[error("document cannot be encoded")]
    Encoding(#[from] EncodingError),
}

/// Error type to provide further information when the input is malformed
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// input of {0} bytes is too small to hold a header
    #[error("input of {0} bytes is too small to hold a header")]
    TooSmall(usize),

    /// unexpected end of input
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// unknown tag type {0}
    #[error("unknown tag type {0}")]
    UnknownTag(u8),

    /// root tag is a {0}, not a compound
    #[error("root tag is a {0}, not a compound")]
    RootNotCompound(TagType),

    /// invalid {kind} length {len}
    #[error("invalid {kind} length {len}")]
    InvalidLength {
        /// Type of the array or list
        kind: TagType,
        /// Declared length
        len: i32,
    },

    /// {kind} length {len} exceeds the {remaining} bytes left in the buffer
    #[error("{kind} length {len} exceeds the {remaining} bytes left in the buffer")]
    LengthExceedsBuffer {
        /// Type of the array or list
        kind: TagType,
        /// Declared length
        len: i32,
        /// Bytes left when the length was read
        remaining: usize,
    },

    /// list of End has {0} elements
    #[error("list of End has {0} elements")]
    NonEmptyEndList(i32),

    /// tags are nested deeper than {0} levels
    #[error("tags are nested deeper than {0} levels")]
    DepthExceeded(usize),
}

/// Error type to provide further information when a value has no binary representation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// string of {0} bytes exceeds maximum of u16::MAX
    #[error("string of {0} bytes exceeds maximum of u16::MAX")]
    StringTooLong(usize),

    /// {kind} of length {len} exceeds maximum of i32::MAX
    #[error("{kind} of length {len} exceeds maximum of i32::MAX")]
    LengthTooLong {
        /// Type of the array or list
        kind: TagType,
        /// Actual length
        len: usize,
    },

    /// payload of {0} bytes exceeds maximum of i32::MAX
    #[error("payload of {0} bytes exceeds maximum of i32::MAX")]
    PayloadTooLong(usize),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
