//! Error taxonomy for data access.

use std::io;

use crate::types::TypeKind;

/// Errors raised while resolving or accessing structured data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Name lookup failed on a compound.
    #[error("'{name}' is not a member of compound '{compound}'")]
    UnknownMember { name: String, compound: String },

    #[error("index {index} is out of range for '{collection}' with {count} elements")]
    IndexOutOfRange {
        index: usize,
        count: usize,
        collection: String,
    },

    /// Accessor kind does not match the member's declared kind.
    #[error("member {index} of '{collection}' is a {actual}, not a {expected}")]
    KindMismatch {
        index: usize,
        collection: String,
        expected: TypeKind,
        actual: TypeKind,
    },

    #[error("invalid field path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    #[error("invalid {kind} value '{text}'")]
    InvalidValue {
        text: String,
        kind: binio_core::ScalarKind,
    },

    /// Access beyond the current extent of the backing resource.
    #[error("access of {len} bytes at offset {position:#x} exceeds resource extent {extent:#x}")]
    OutOfBounds {
        position: u64,
        len: usize,
        extent: u64,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Sizes, counts or type references are inconsistent. Never retried.
    #[error("layout error in '{type_name}': {message}")]
    Layout { type_name: String, message: String },

    #[error("layout file: {0}")]
    LayoutFile(#[from] binio_core::LayoutError),
}

/// Coarse error category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown name, kind mismatch, index out of range, bad path or value.
    DataAccess,
    /// Backing resource failure.
    Io,
    /// Malformed type description or corrupt data.
    Layout,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownMember { .. }
            | Self::IndexOutOfRange { .. }
            | Self::KindMismatch { .. }
            | Self::InvalidPath { .. }
            | Self::InvalidValue { .. } => ErrorKind::DataAccess,
            Self::OutOfBounds { .. } | Self::Io(_) => ErrorKind::Io,
            Self::Layout { .. } | Self::LayoutFile(_) => ErrorKind::Layout,
        }
    }

    pub(crate) fn layout(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Layout {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// Result type for data access operations.
pub type Result<T> = std::result::Result<T, Error>;
