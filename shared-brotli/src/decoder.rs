//! Decoding of shared brotli streams through the brotli C decoder.

use core::ptr;

use brotlic_sys::{
    BrotliDecoderAttachDictionary, BrotliDecoderCreateInstance, BrotliDecoderDecompressStream,
    BrotliDecoderDestroyInstance, BrotliDecoderResult_BROTLI_DECODER_RESULT_ERROR,
    BrotliDecoderResult_BROTLI_DECODER_RESULT_NEEDS_MORE_INPUT,
    BrotliDecoderResult_BROTLI_DECODER_RESULT_NEEDS_MORE_OUTPUT,
    BrotliDecoderResult_BROTLI_DECODER_RESULT_SUCCESS, BrotliDecoderState,
    BrotliDecoderTakeOutput, BrotliSharedDictionaryType_BROTLI_SHARED_DICTIONARY_RAW, BROTLI_FALSE,
};

use crate::error::DecodeError;

struct Decoder {
    state: *mut BrotliDecoderState,
}

impl Drop for Decoder {
    fn drop(&mut self) {
        unsafe {
            BrotliDecoderDestroyInstance(self.state);
        }
    }
}

/// Decodes a shared brotli stream using the optional raw shared dictionary.
///
/// The shared dictionary is a raw LZ77 style dictionary, see:
/// <https://datatracker.ietf.org/doc/html/draft-vandevenne-shared-brotli-format#section-3.2>
///
/// Fails if the decoded result would be larger than `max_uncompressed_length`.
/// Data left in `encoded` after the compressed stream finishes is also an
/// error.
pub fn shared_brotli_decode(
    encoded: &[u8],
    shared_dictionary: Option<&[u8]>,
    max_uncompressed_length: usize,
) -> Result<Vec<u8>, DecodeError> {
    let state = unsafe { BrotliDecoderCreateInstance(None, None, ptr::null_mut()) };
    if state.is_null() {
        return Err(DecodeError::InitFailure);
    }
    let decoder = Decoder { state };

    if let Some(shared_dictionary) = shared_dictionary {
        if unsafe {
            BrotliDecoderAttachDictionary(
                decoder.state,
                BrotliSharedDictionaryType_BROTLI_SHARED_DICTIONARY_RAW,
                shared_dictionary.len(),
                shared_dictionary.as_ptr(),
            )
        } == BROTLI_FALSE
        {
            return Err(DecodeError::InvalidDictionary);
        }
    }

    let mut sink: Vec<u8> = Vec::new();
    let mut next_in = encoded.as_ptr();
    let mut available_in = encoded.len();

    loop {
        let mut available_out: usize = 0;
        let result = unsafe {
            BrotliDecoderDecompressStream(
                decoder.state,
                &mut available_in,
                &mut next_in,
                &mut available_out,
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };

        // Drain everything the decoder produced for this step.
        loop {
            let mut buffer_size: usize = 0;
            let buffer = unsafe { BrotliDecoderTakeOutput(decoder.state, &mut buffer_size) };
            if buffer_size == 0 {
                break;
            }
            if sink.len() + buffer_size > max_uncompressed_length {
                return Err(DecodeError::MaxSizeExceeded);
            }
            sink.extend_from_slice(unsafe { std::slice::from_raw_parts(buffer, buffer_size) });
        }

        #[allow(non_upper_case_globals)]
        match result {
            BrotliDecoderResult_BROTLI_DECODER_RESULT_SUCCESS => break,
            BrotliDecoderResult_BROTLI_DECODER_RESULT_ERROR => {
                return Err(DecodeError::InvalidStream)
            }
            BrotliDecoderResult_BROTLI_DECODER_RESULT_NEEDS_MORE_INPUT => {
                // All input was consumed but the stream didn't finish.
                return Err(DecodeError::InvalidStream);
            }
            BrotliDecoderResult_BROTLI_DECODER_RESULT_NEEDS_MORE_OUTPUT => continue,
            _ => continue,
        }
    }

    if available_in > 0 {
        // There is data left in the input stream, which is not allowed.
        return Err(DecodeError::ExcessInputData);
    }

    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{shared_brotli_encode, DEFAULT_QUALITY};

    const TARGET: &[u8] = b"the quick onyx goblin jumps over the lazy dwarf\n";
    const BASE: &[u8] = b"the lazy dwarf\n";

    #[test]
    fn decode_with_shared_dict() {
        let patch = shared_brotli_encode(TARGET, Some(BASE), DEFAULT_QUALITY).unwrap();
        assert_eq!(
            Ok(TARGET.to_vec()),
            shared_brotli_decode(&patch, Some(BASE), TARGET.len())
        );
    }

    #[test]
    fn decode_without_shared_dict() {
        let patch = shared_brotli_encode(TARGET, None, DEFAULT_QUALITY).unwrap();
        assert_eq!(
            Ok(TARGET.to_vec()),
            shared_brotli_decode(&patch, None, TARGET.len())
        );

        // An empty dictionary behaves the same as no dictionary.
        assert_eq!(
            Ok(TARGET.to_vec()),
            shared_brotli_decode(&patch, Some(&[]), TARGET.len())
        );
    }

    #[test]
    fn decode_too_little_output_space() {
        let patch = shared_brotli_encode(TARGET, Some(BASE), DEFAULT_QUALITY).unwrap();
        assert_eq!(
            Err(DecodeError::MaxSizeExceeded),
            shared_brotli_decode(&patch, Some(BASE), TARGET.len() - 1)
        );
    }

    #[test]
    fn decode_excess_output_space() {
        let patch = shared_brotli_encode(TARGET, Some(BASE), DEFAULT_QUALITY).unwrap();
        assert_eq!(
            Ok(TARGET.to_vec()),
            shared_brotli_decode(&patch, Some(BASE), TARGET.len() + 1)
        );
    }

    #[test]
    fn decode_truncated_input() {
        let patch = shared_brotli_encode(TARGET, None, DEFAULT_QUALITY).unwrap();
        let truncated = &patch[..patch.len() - 1];
        assert!(matches!(
            shared_brotli_decode(truncated, None, TARGET.len()),
            Err(DecodeError::InvalidStream)
        ));
    }

    #[test]
    fn decode_excess_input() {
        let mut patch = shared_brotli_encode(TARGET, None, DEFAULT_QUALITY).unwrap();
        patch.push(0u8);
        assert_eq!(
            Err(DecodeError::ExcessInputData),
            shared_brotli_decode(&patch, None, TARGET.len())
        );
    }

    #[test]
    fn decode_invalid_input() {
        let patch = [0xFF, 0xFF, 0xFFu8];
        assert!(matches!(
            shared_brotli_decode(&patch, None, 10),
            Err(DecodeError::InvalidStream)
        ));
    }
}
