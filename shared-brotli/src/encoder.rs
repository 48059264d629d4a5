//! Owned wrappers around the brotli C encoder.
//!
//! The encoder is driven through the streaming API so its output can be
//! spliced into a [`BrotliStream`](crate::stream::BrotliStream) between hand
//! authored meta-blocks. The two knobs that make that possible are
//! `BROTLI_PARAM_STREAM_OFFSET` (the encoder's virtual position within the
//! logical uncompressed stream) and an attached prepared dictionary.

use core::ptr;

use brotlic_sys::{
    BrotliEncoderAttachPreparedDictionary, BrotliEncoderCompressStream,
    BrotliEncoderCreateInstance, BrotliEncoderDestroyInstance,
    BrotliEncoderDestroyPreparedDictionary, BrotliEncoderHasMoreOutput, BrotliEncoderIsFinished,
    BrotliEncoderMode_BROTLI_MODE_FONT, BrotliEncoderOperation,
    BrotliEncoderOperation_BROTLI_OPERATION_FINISH, BrotliEncoderOperation_BROTLI_OPERATION_FLUSH,
    BrotliEncoderOperation_BROTLI_OPERATION_PROCESS, BrotliEncoderParameter,
    BrotliEncoderParameter_BROTLI_PARAM_LGBLOCK, BrotliEncoderParameter_BROTLI_PARAM_LGWIN,
    BrotliEncoderParameter_BROTLI_PARAM_MODE, BrotliEncoderParameter_BROTLI_PARAM_QUALITY,
    BrotliEncoderParameter_BROTLI_PARAM_STREAM_OFFSET, BrotliEncoderPrepareDictionary,
    BrotliEncoderPreparedDictionary, BrotliEncoderSetParameter, BrotliEncoderState,
    BrotliEncoderTakeOutput,
    BrotliSharedDictionaryType_BROTLI_SHARED_DICTIONARY_RAW, BROTLI_FALSE, BROTLI_MAX_QUALITY,
};

use crate::error::EncodeError;

/// Compression quality used when the caller does not request one.
pub const DEFAULT_QUALITY: u32 = 5;

// 128 kb window for standalone streams, 64 kb input blocks.
pub(crate) const ENCODER_WINDOW_BITS: u32 = 17;
const ENCODER_BLOCK_BITS: u32 = 16;

/// A raw LZ77 dictionary prepared for attachment to encoder instances.
///
/// The underlying handle is released when the value is dropped.
pub struct PreparedDictionary {
    ptr: *mut BrotliEncoderPreparedDictionary,
}

impl PreparedDictionary {
    pub fn new(data: &[u8]) -> Result<PreparedDictionary, EncodeError> {
        let ptr = unsafe {
            BrotliEncoderPrepareDictionary(
                BrotliSharedDictionaryType_BROTLI_SHARED_DICTIONARY_RAW,
                data.len(),
                data.as_ptr(),
                BROTLI_MAX_QUALITY as i32,
                None,
                None,
                ptr::null_mut(),
            )
        };
        if ptr.is_null() {
            log::warn!("Failed to create brotli dictionary.");
            return Err(EncodeError::DictionaryCreationFailed);
        }
        Ok(PreparedDictionary { ptr })
    }
}

impl Drop for PreparedDictionary {
    fn drop(&mut self) {
        unsafe {
            BrotliEncoderDestroyPreparedDictionary(self.ptr);
        }
    }
}

/// An owned brotli encoder instance.
///
/// Scoped to a single compression: configure at construction, pump input
/// through [`compress_to_sink`](Encoder::compress_to_sink), drop.
pub struct Encoder {
    state: *mut BrotliEncoderState,
}

impl Encoder {
    /// Creates an encoder positioned at `stream_offset` bytes into the
    /// logical uncompressed stream.
    ///
    /// With a non-zero offset the encoder does not emit a stream header and
    /// produces backward references as if `stream_offset` bytes preceded its
    /// input, which is what allows its output to continue an existing
    /// stream.
    pub fn new(
        quality: u32,
        window_bits: u32,
        stream_offset: u32,
        dictionary: Option<&PreparedDictionary>,
    ) -> Result<Encoder, EncodeError> {
        let state = unsafe { BrotliEncoderCreateInstance(None, None, ptr::null_mut()) };
        if state.is_null() {
            log::warn!("Failed to create brotli encoder.");
            return Err(EncodeError::InitFailure);
        }
        let encoder = Encoder { state };

        encoder.set_parameter(BrotliEncoderParameter_BROTLI_PARAM_QUALITY, quality)?;
        encoder.set_parameter(
            BrotliEncoderParameter_BROTLI_PARAM_MODE,
            BrotliEncoderMode_BROTLI_MODE_FONT as u32,
        )?;
        encoder.set_parameter(BrotliEncoderParameter_BROTLI_PARAM_LGWIN, window_bits)?;
        encoder.set_parameter(BrotliEncoderParameter_BROTLI_PARAM_LGBLOCK, ENCODER_BLOCK_BITS)?;
        encoder.set_parameter(
            BrotliEncoderParameter_BROTLI_PARAM_STREAM_OFFSET,
            stream_offset,
        )?;

        if let Some(dictionary) = dictionary {
            if unsafe { BrotliEncoderAttachPreparedDictionary(encoder.state, dictionary.ptr) }
                == BROTLI_FALSE
            {
                log::warn!("Failed to attach dictionary.");
                return Err(EncodeError::InitFailure);
            }
        }

        Ok(encoder)
    }

    fn set_parameter(&self, param: BrotliEncoderParameter, value: u32) -> Result<(), EncodeError> {
        if unsafe { BrotliEncoderSetParameter(self.state, param, value) } == BROTLI_FALSE {
            log::warn!("Failed to set brotli encoder parameter.");
            return Err(EncodeError::InitFailure);
        }
        Ok(())
    }

    /// Pumps `input` through the encoder, appending all produced output to
    /// `sink`.
    ///
    /// Finishes with FINISH when `is_last`, otherwise with FLUSH so that the
    /// emitted bytes end on a byte boundary and the stream can be continued.
    pub fn compress_to_sink(
        &mut self,
        input: &[u8],
        is_last: bool,
        sink: &mut Vec<u8>,
    ) -> Result<(), EncodeError> {
        let final_op = if is_last {
            BrotliEncoderOperation_BROTLI_OPERATION_FINISH
        } else {
            BrotliEncoderOperation_BROTLI_OPERATION_FLUSH
        };

        let mut source_index: usize = 0;
        let mut current_op = BrotliEncoderOperation_BROTLI_OPERATION_PROCESS;
        while source_index < input.len() || !self.is_finished(current_op, is_last) {
            let remaining = &input[source_index..];
            let mut available_in = remaining.len();
            let mut next_in = if available_in > 0 {
                remaining.as_ptr()
            } else {
                ptr::null()
            };
            current_op = if available_in > 0 {
                BrotliEncoderOperation_BROTLI_OPERATION_PROCESS
            } else {
                final_op
            };

            let mut available_out: usize = 0;
            let result = unsafe {
                BrotliEncoderCompressStream(
                    self.state,
                    current_op,
                    &mut available_in,
                    &mut next_in,
                    &mut available_out,
                    ptr::null_mut(),
                    ptr::null_mut(),
                )
            };
            if result == BROTLI_FALSE {
                log::warn!("Brotli encoder failed to compress.");
                return Err(EncodeError::EncoderFailure);
            }

            let mut buffer_size: usize = 0;
            let buffer = unsafe { BrotliEncoderTakeOutput(self.state, &mut buffer_size) };
            if buffer_size > 0 {
                sink.extend_from_slice(unsafe { std::slice::from_raw_parts(buffer, buffer_size) });
            }

            source_index += remaining.len() - available_in;
        }

        Ok(())
    }

    fn is_finished(&self, current_op: BrotliEncoderOperation, is_last: bool) -> bool {
        if current_op == BrotliEncoderOperation_BROTLI_OPERATION_PROCESS {
            return false;
        }
        if is_last {
            unsafe { BrotliEncoderIsFinished(self.state) } != BROTLI_FALSE
        } else {
            unsafe { BrotliEncoderHasMoreOutput(self.state) } == BROTLI_FALSE
        }
    }
}

impl Drop for Encoder {
    fn drop(&mut self) {
        unsafe {
            BrotliEncoderDestroyInstance(self.state);
        }
    }
}

/// Compresses `plain` as one complete brotli stream, optionally against a raw
/// shared dictionary.
///
/// The inverse of [`shared_brotli_decode`](crate::decoder::shared_brotli_decode)
/// with the same dictionary.
pub fn shared_brotli_encode(
    plain: &[u8],
    shared_dictionary: Option<&[u8]>,
    quality: u32,
) -> Result<Vec<u8>, EncodeError> {
    // There's a decent amount of overhead in creating a dictionary even when
    // it's empty, so only create one when it's non-empty.
    let dictionary = match shared_dictionary {
        Some(data) if !data.is_empty() => Some(PreparedDictionary::new(data)?),
        _ => None,
    };

    let mut encoder = Encoder::new(quality, ENCODER_WINDOW_BITS, 0, dictionary.as_ref())?;
    let mut sink = Vec::new();
    encoder.compress_to_sink(plain, true, &mut sink)?;
    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::shared_brotli_decode;

    #[test]
    fn encode_decode_round_trip() {
        let data = b"Hello Hello Hello Hello ";
        let encoded = shared_brotli_encode(data, None, DEFAULT_QUALITY).unwrap();
        assert!(encoded.len() < data.len());

        let decoded = shared_brotli_decode(&encoded, None, data.len()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn encode_decode_with_dictionary() {
        let dict = b"incremental font transfer\n";
        let data = b"patches for incremental font transfer, incrementally\n";

        let with_dict = shared_brotli_encode(data, Some(dict), DEFAULT_QUALITY).unwrap();
        let without_dict = shared_brotli_encode(data, None, DEFAULT_QUALITY).unwrap();
        assert!(with_dict.len() <= without_dict.len());

        let decoded = shared_brotli_decode(&with_dict, Some(dict), data.len()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn encode_empty_input() {
        let encoded = shared_brotli_encode(&[], None, DEFAULT_QUALITY).unwrap();
        let decoded = shared_brotli_decode(&encoded, None, 0).unwrap();
        assert!(decoded.is_empty());
    }
}
