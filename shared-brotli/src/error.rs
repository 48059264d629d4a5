//! Error types shared by the encode and decode halves of the crate.

use std::fmt;

/// An error raised while authoring a shared brotli stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A backward reference of exactly one byte was requested. Brotli has no
    /// copy length of one, callers must re-emit the byte as a literal.
    OneByteReference,
    /// The stream offset (dictionary size plus bytes already emitted) no
    /// longer fits inside the configured window.
    StreamOffsetExceedsWindow,
    /// The encoder rejected the shared dictionary bytes.
    DictionaryCreationFailed,
    /// Failed to initialize or configure the brotli encoder.
    InitFailure,
    /// The brotli encoder reported an error or never reached its terminal
    /// state.
    EncoderFailure,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::OneByteReference => {
                write!(f, "A 1 byte backward reference is not representable.")
            }
            EncodeError::StreamOffsetExceedsWindow => {
                write!(f, "Stream offset exceeds the window size.")
            }
            EncodeError::DictionaryCreationFailed => {
                write!(f, "Failed to create the shared brotli dictionary.")
            }
            EncodeError::InitFailure => write!(f, "Failed to initialize the brotli encoder."),
            EncodeError::EncoderFailure => write!(f, "The brotli encoder reported an error."),
        }
    }
}

impl std::error::Error for EncodeError {}

/// An error raised while decoding a shared brotli stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Failed to initialize the brotli decoder.
    InitFailure,
    /// The compressed stream is malformed.
    InvalidStream,
    /// The shared dictionary was rejected by the decoder.
    InvalidDictionary,
    /// Decompressed output would exceed the caller supplied maximum.
    MaxSizeExceeded,
    /// Input data remains after the compressed stream ended.
    ExcessInputData,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InitFailure => write!(f, "Failed to initialize the brotli decoder."),
            DecodeError::InvalidStream => {
                write!(f, "Brotli compressed stream is invalid, decoding failed.")
            }
            DecodeError::InvalidDictionary => write!(f, "Shared dictionary format is invalid."),
            DecodeError::MaxSizeExceeded => write!(f, "Decompressed size greater than maximum."),
            DecodeError::ExcessInputData => write!(
                f,
                "There is unconsumed data in the input stream after decoding."
            ),
        }
    }
}

impl std::error::Error for DecodeError {}
