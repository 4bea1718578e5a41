// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error type.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the filter. Hashing, bit operations and
/// membership queries never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// An input source could not be opened or read.
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        /// Path of the source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Filter parameters are out of range.
    #[error("invalid filter configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
