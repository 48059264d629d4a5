//! Construction and decoding of shared brotli byte streams.
//!
//! Shared brotli (<https://datatracker.ietf.org/doc/draft-vandevenne-shared-brotli-format/>) is an
//! extension of brotli (<https://datatracker.ietf.org/doc/html/rfc7932>) which allows compression
//! and decompression against a raw LZ77 dictionary.
//!
//! On top of the usual encode/decode wrappers this crate provides [`BrotliStream`], a writer that
//! can interleave three kinds of content into one valid brotli stream:
//!
//! 1. uncompressed literal bytes,
//! 2. ordinary compressed bytes produced by the brotli encoder, and
//! 3. hand-authored backward references into the shared dictionary, emitted as
//!    single-symbol prefix-code meta-blocks.
//!
//! A decoder given the shared dictionary reproduces the interleaved content byte for byte.

pub mod bit_buffer;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod stream;

pub use bit_buffer::BitBuffer;
pub use decoder::shared_brotli_decode;
pub use encoder::{shared_brotli_encode, DEFAULT_QUALITY};
pub use error::{DecodeError, EncodeError};
pub use stream::BrotliStream;
