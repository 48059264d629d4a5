//! Error types for font diffing and patch application.

use read_fonts::ReadError;
use shared_brotli::{DecodeError, EncodeError};
use thiserror::Error;

/// An error that occurs while computing a font diff.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    #[error("Failed to parse font data: {0}")]
    FontParsingFailed(#[from] ReadError),

    #[error("Internal constraint violated: {0}")]
    InternalError(&'static str),

    #[error("Failed to author the patch stream: {0}")]
    Encoding(#[from] EncodeError),
}

/// An error that occurs while applying a patch to a font.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatchingError {
    #[error("Invalid patch file: '{0}'")]
    InvalidPatch(&'static str),

    #[error("Failed to parse font data: {0}")]
    FontParsingFailed(#[from] ReadError),

    #[error("Failed to decode the patch stream: {0}")]
    Decoding(#[from] DecodeError),
}
