//! A writer for brotli streams that interleave literal, compressed, and
//! dictionary referenced content.
//!
//! Meta-block headers are authored bit by bit following:
//! <https://datatracker.ietf.org/doc/html/rfc7932#section-9.2>

use crate::bit_buffer::BitBuffer;
use crate::encoder::{Encoder, PreparedDictionary, DEFAULT_QUALITY};
use crate::error::EncodeError;

const MAX_METABLOCK_SIZE: u32 = 1 << 24;

// Extra bit widths of the copy length codes from RFC 7932 section 5.
const COPY_CODE_EXTRA_BITS: [u32; 24] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10, 24,
];

// Stream header codes for WBITS 10 through 24, from RFC 7932 section 9.1.
const WINDOW_CODES: [(u32, u32); 15] = [
    (0b0100001, 7), // 10
    (0b0110001, 7), // 11
    (0b1000001, 7), // 12
    (0b1010001, 7), // 13
    (0b1100001, 7), // 14
    (0b1110001, 7), // 15
    (0b0, 1),       // 16
    (0b0000001, 7), // 17
    (0b0011, 4),    // 18
    (0b0101, 4),    // 19
    (0b0111, 4),    // 20
    (0b1001, 4),    // 21
    (0b1011, 4),    // 22
    (0b1101, 4),    // 23
    (0b1111, 4),    // 24
];

/// Generates a brotli compressed stream as a sequence of meta-blocks.
///
/// Three kinds of content can be mixed freely: raw literal bytes
/// ([`insert_uncompressed`](Self::insert_uncompressed)), output of the
/// regular brotli encoder ([`insert_compressed`](Self::insert_compressed)),
/// and hand authored backward references into a shared dictionary
/// ([`insert_from_dictionary`](Self::insert_from_dictionary)). Decoding the
/// finished stream against the same dictionary reproduces the inserted
/// content byte for byte.
pub struct BrotliStream {
    buffer: BitBuffer,
    window_bits: u32,
    window_size: u32,
    dictionary_size: u32,
    // Bytes of the logical uncompressed stream produced so far, including
    // the initial stream offset.
    uncompressed_size: u32,
    offset: u32,
    header_emitted: bool,
}

impl BrotliStream {
    /// Creates a stream writer. `window_bits` is clamped to [10, 24].
    pub fn new(window_bits: u32, dictionary_size: u32) -> BrotliStream {
        Self::with_offset(window_bits, dictionary_size, 0)
    }

    /// Creates a stream writer that continues a logical stream which already
    /// produced `offset` uncompressed bytes.
    ///
    /// Such a stream never emits a stream header; it is meant to be spliced
    /// after a head stream with [`append`](Self::append).
    pub fn with_offset(window_bits: u32, dictionary_size: u32, offset: u32) -> BrotliStream {
        let window_bits = window_bits.clamp(10, 24);
        BrotliStream {
            buffer: BitBuffer::new(),
            window_bits,
            window_size: (1u32 << window_bits) - 16,
            dictionary_size,
            uncompressed_size: offset,
            offset,
            header_emitted: offset != 0,
        }
    }

    /// Smallest window bits value in [10, 24] whose window covers `size`
    /// bytes, or 24 if none does.
    pub fn window_bits_for(size: u32) -> u32 {
        for bits in 10..=24 {
            if (1u32 << bits) - 16 >= size {
                return bits;
            }
        }
        24
    }

    pub fn window_bits(&self) -> u32 {
        self.window_bits
    }

    pub fn dictionary_size(&self) -> u32 {
        self.dictionary_size
    }

    /// Bytes of the logical uncompressed stream produced so far, including
    /// the initial stream offset.
    pub fn uncompressed_size(&self) -> u32 {
        self.uncompressed_size
    }

    /// The compressed bytes produced so far.
    pub fn data(&self) -> &[u8] {
        self.buffer.data()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_bytes()
    }

    /// Inserts bytes into the stream raw, with no compression applied.
    pub fn insert_uncompressed(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        // Bytes beyond what one meta-block can carry are split across
        // several.
        for chunk in bytes.chunks(MAX_METABLOCK_SIZE as usize) {
            self.add_mlen(chunk.len() as u32);
            self.buffer.append_number(0b1, 1); // ISUNCOMPRESSED
            self.buffer.pad_to_end_of_byte();
            self.buffer.append_raw(chunk);
            self.uncompressed_size += chunk.len() as u32;
        }
    }

    /// Inserts `length` bytes of the shared dictionary range
    /// `[offset, offset + length)` into the uncompressed stream, encoded as
    /// a backward reference.
    pub fn insert_from_dictionary(&mut self, offset: u32, length: u32) -> Result<(), EncodeError> {
        if length == 0 {
            return Ok(());
        }
        if length == 1 {
            // A length of 1 can't be encoded as a backwards ref.
            return Err(EncodeError::OneByteReference);
        }
        if self.uncompressed_size.saturating_add(self.dictionary_size) > self.window_size {
            log::warn!("Stream offset exceeds window size.");
            return Err(EncodeError::StreamOffsetExceedsWindow);
        }

        if length > MAX_METABLOCK_SIZE {
            // Too big for one meta-block, break into two pieces. The second
            // piece must never degenerate to a single byte.
            let mut remainder = length - MAX_METABLOCK_SIZE;
            if remainder <= 1 {
                remainder = 2;
            }
            self.insert_from_dictionary(offset, length - remainder)?;
            return self.insert_from_dictionary(offset + (length - remainder), remainder);
        }

        // Backwards distance to the region in the dictionary starting at
        // `offset`.
        let distance =
            (self.dictionary_size + self.window_size.min(self.uncompressed_size)) - offset;
        let postfix_bits = num_postfix_bits(distance);

        self.add_mlen(length);

        self.buffer.append_number(0b0, 1); // ISUNCOMPRESSED
        self.buffer.append_number(0b0, 1); // NBLTYPESL = 1
        self.buffer.append_number(0b0, 1); // NBLTYPESI = 1
        self.buffer.append_number(0b0, 1); // NBLTYPESD = 1
        self.buffer.append_number(postfix_bits, 2); // NPOSTFIX
        self.buffer.append_number(0b0000, 4); // NDIRECT
        self.buffer.append_number(0b00, 2); // Literal block type context mode
        self.buffer.append_number(0b0, 1); // NTREESL = 1
        self.buffer.append_number(0b0, 1); // NTREESD = 1

        // Prefix code for literals: no literals are used so just a single
        // symbol tree containing the zero literal.
        self.add_prefix_tree(0, 8);

        // Prefix code for insert-and-copy lengths. Width is 10 since the
        // alphabet has 704 codes.
        let (copy_code, copy_extra_bits, copy_num_extra_bits) = insert_and_copy_code(length);
        self.add_prefix_tree(copy_code, 10);

        // Prefix code for distances. The alphabet size depends on NPOSTFIX.
        let alphabet_size = 16 + (48u32 << postfix_bits);
        let distance_code_width = 32 - (alphabet_size - 1).leading_zeros();
        let (distance_code, dist_extra_bits, dist_num_extra_bits) =
            to_distance_code(distance, postfix_bits);
        self.add_prefix_tree(distance_code, distance_code_width);

        // The command. Both symbols come from single entry trees and take
        // zero bits, only the extra bits appear. No literals are emitted.
        self.buffer.append_number(copy_extra_bits, copy_num_extra_bits);
        self.buffer.append_number(dist_extra_bits, dist_num_extra_bits);

        self.uncompressed_size += length;
        Ok(())
    }

    /// Inserts bytes compressed by the brotli encoder. No shared dictionary
    /// is used.
    pub fn insert_compressed(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.insert_compressed_with_partial_dict(bytes, &[])
    }

    /// Inserts bytes compressed against a prefix of the shared dictionary.
    ///
    /// `partial_dict` must be a prefix of the full shared dictionary; at
    /// most `dictionary_size` bytes of it are used.
    pub fn insert_compressed_with_partial_dict(
        &mut self,
        bytes: &[u8],
        partial_dict: &[u8],
    ) -> Result<(), EncodeError> {
        if bytes.is_empty() {
            return Ok(());
        }

        let mut partial_dict = partial_dict;
        if partial_dict.len() > self.dictionary_size as usize {
            partial_dict = &partial_dict[..self.dictionary_size as usize];
        }

        // dictionary_size is added to the stream offset so that static
        // dictionary references (which are window + dictionary size + word
        // id) are created with the right distance.
        let stream_offset =
            self.uncompressed_size + self.dictionary_size - partial_dict.len() as u32;
        if stream_offset > self.window_size {
            // The encoder internally uses min(stream_offset, window_size),
            // so larger offsets would produce wrong distances.
            log::warn!("Stream offset exceeds window size.");
            return Err(EncodeError::StreamOffsetExceedsWindow);
        }

        if !self.header_emitted {
            if stream_offset > 0 {
                // The encoder only emits a stream header at offset zero, so
                // one has to be added by hand for the concatenated stream to
                // be decodable as one.
                self.ensure_stream_header();
            } else {
                self.header_emitted = true;
            }
        }

        // The regular brotli encoder starts byte aligned.
        self.byte_align();

        let dictionary = if !partial_dict.is_empty() {
            Some(PreparedDictionary::new(partial_dict)?)
        } else {
            None
        };

        let mut encoder = Encoder::new(
            DEFAULT_QUALITY,
            self.window_bits,
            stream_offset,
            dictionary.as_ref(),
        )?;
        encoder.compress_to_sink(bytes, false, self.buffer.sink())?;

        self.uncompressed_size += bytes.len() as u32;
        Ok(())
    }

    /// Aligns the stream to the nearest byte boundary.
    pub fn byte_align(&mut self) {
        if self.buffer.is_byte_aligned() {
            return;
        }
        self.add_mlen(0);
    }

    /// Pads the uncompressed stream with zero bytes until its length is a
    /// multiple of four.
    pub fn four_byte_align_uncompressed(&mut self) {
        let remainder = (self.uncompressed_size % 4) as usize;
        if remainder != 0 {
            self.insert_uncompressed(&[0u8; 4][..4 - remainder]);
        }
    }

    /// Appends another stream's bytes after this stream's.
    ///
    /// The tail must have been created with [`with_offset`](Self::with_offset)
    /// at this stream's current uncompressed size and with the same window
    /// and dictionary configuration.
    pub fn append(&mut self, other: BrotliStream) {
        self.byte_align();
        let logical_size = other.uncompressed_size - other.offset;
        let bytes = other.buffer.into_bytes();
        self.buffer.append_raw(&bytes);
        self.uncompressed_size += logical_size;
    }

    /// Inserts a meta-block that signals the end of the stream.
    pub fn end_stream(&mut self) {
        self.ensure_stream_header();
        self.buffer.append_number(0b1, 1); // ISLAST
        self.buffer.append_number(0b1, 1); // ISLASTEMPTY
        self.buffer.pad_to_end_of_byte();
    }

    // Emits a meta-block header announcing `size` bytes of content, or an
    // empty meta-block when `size` is zero. `size` must not exceed
    // MAX_METABLOCK_SIZE.
    fn add_mlen(&mut self, size: u32) {
        self.ensure_stream_header();
        if size == 0 {
            // An empty meta-block. Re-aligns the stream to a byte boundary.
            self.buffer.append_number(0b0, 1); // ISLAST
            self.buffer.append_number(0b11, 2); // MNIBBLES
            self.buffer.append_number(0b0, 1); // Reserved
            self.buffer.append_number(0b00, 2); // MSKIPBYTES
            self.buffer.pad_to_end_of_byte();
            return;
        }

        debug_assert!(size <= MAX_METABLOCK_SIZE);
        let (num_nibbles, num_nibbles_code) = if size <= (1 << 16) {
            (4, 0b00)
        } else if size <= (1 << 20) {
            (5, 0b01)
        } else {
            (6, 0b10)
        };

        self.buffer.append_number(0b0, 1); // ISLAST
        self.buffer.append_number(num_nibbles_code, 2); // MNIBBLES
        self.buffer.append_number(size - 1, num_nibbles * 4); // MLEN - 1
    }

    fn ensure_stream_header(&mut self) {
        if self.header_emitted {
            return;
        }
        self.header_emitted = true;
        let (code, count) = WINDOW_CODES[(self.window_bits - 10) as usize];
        self.buffer.append_number(code, count);
    }

    // A simple prefix code (RFC 7932 section 3.4) holding a single symbol,
    // which therefore takes zero bits to reference.
    fn add_prefix_tree(&mut self, code: u32, width: u32) {
        self.buffer.append_number(0b01, 2); // Simple tree
        self.buffer.append_number(0b00, 2); // NSYM = 1
        self.buffer.append_number(code, width); // Symbol 1
    }
}

// NPOSTFIX required for `distance` to be representable. Max distances per
// postfix value worked out from the encoding scheme in RFC 7932 section 4.
fn num_postfix_bits(distance: u32) -> u32 {
    if distance <= 67_108_860 {
        0b00
    } else if distance <= 134_217_720 {
        0b01
    } else if distance <= 268_435_440 {
        0b10
    } else {
        0b11
    }
}

// The lowest copy length code of RFC 7932 section 5 whose range contains
// `length`. Returns (code, extra bits value, extra bits count).
fn to_copy_code(length: u32) -> (u32, u32, u32) {
    let mut code = 0usize;
    let mut max_length = 2u32;
    let mut prev_max_length = 1u32;
    loop {
        if length <= max_length || code == 23 {
            return (
                code as u32,
                length - prev_max_length - 1,
                COPY_CODE_EXTRA_BITS[code],
            );
        }
        code += 1;
        prev_max_length = max_length;
        max_length += 1 << COPY_CODE_EXTRA_BITS[code];
    }
}

// Composite insert-and-copy code (RFC 7932 section 5) for an insert length
// of zero, an explicit distance, and the given copy length.
fn insert_and_copy_code(copy_length: u32) -> (u32, u32, u32) {
    let (copy_code, extra_bits, num_extra_bits) = to_copy_code(copy_length);
    let (prefix, copy_code) = if copy_code <= 7 {
        (128, copy_code)
    } else if copy_code <= 15 {
        (192, copy_code - 8)
    } else {
        (384, copy_code - 16)
    };
    (prefix | copy_code, extra_bits, num_extra_bits)
}

// Distance code and extra bits for an explicit distance with NDIRECT = 0,
// derived from the dcode -> distance mapping of RFC 7932 section 4.
fn to_distance_code(distance: u32, postfix_bits: u32) -> (u32, u32, u32) {
    let dist = (1u32 << (postfix_bits + 2)) + (distance - 1);
    let bucket = (31 - dist.leading_zeros()) - 1;
    let postfix_mask = (1u32 << postfix_bits) - 1;
    let postfix = dist & postfix_mask;
    let prefix = (dist >> bucket) & 1;
    let offset = (2 + prefix) << bucket;
    let nbits = bucket - postfix_bits;
    let code = 16 + ((2 * (nbits - 1) + prefix) << postfix_bits) + postfix;
    let extra = (dist - offset) >> postfix_bits;
    (code, extra, nbits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::shared_brotli_decode;

    fn check_decompresses_to(stream: &BrotliStream, expected: &[u8], dict: &[u8]) {
        let dict = if dict.is_empty() { None } else { Some(dict) };
        let decoded = shared_brotli_decode(stream.data(), dict, expected.len()).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn insert_compressed() {
        let mut stream = BrotliStream::new(22, 0);
        let data = b"Hello Hello Hello Hello ";
        stream.insert_compressed(data).unwrap();
        stream.end_stream();

        assert!(stream.data().len() < data.len());
        check_decompresses_to(&stream, data, &[]);
    }

    #[test]
    fn insert_compressed_with_dict() {
        let mut stream = BrotliStream::new(22, 100);
        let data = b"Hello Hello Hello Hello Hello ";
        stream.insert_compressed(data).unwrap();
        stream.end_stream();

        let dict = vec![0u8; 100];
        check_decompresses_to(&stream, data, &dict);
    }

    #[test]
    fn insert_compressed_with_partial_dict() {
        let dict: Vec<u8> = (0..500u32).map(|i| (i % 256) as u8).collect();
        let data = &dict[5..105];

        let mut stream = BrotliStream::new(22, dict.len() as u32);
        stream
            .insert_compressed_with_partial_dict(data, &dict[..200])
            .unwrap();
        stream.end_stream();

        assert!(stream.data().len() < 100);
        check_decompresses_to(&stream, data, &dict);
    }

    #[test]
    fn insert_multiple_compressed_with_partial_dict() {
        let dict: Vec<u8> = (0..500u32).map(|i| (i % 256) as u8).collect();
        let data = &dict[5..155];

        let mut stream = BrotliStream::new(22, dict.len() as u32);
        stream
            .insert_compressed_with_partial_dict(&data[..75], &dict[..100])
            .unwrap();
        stream
            .insert_compressed_with_partial_dict(&data[75..], &dict[..200])
            .unwrap();
        stream.end_stream();

        check_decompresses_to(&stream, data, &dict);
    }

    #[test]
    fn insert_uncompressed() {
        let mut stream = BrotliStream::new(22, 0);
        let data = b"Hello world";
        stream.insert_uncompressed(data);
        stream.end_stream();

        check_decompresses_to(&stream, data, &[]);
    }

    #[test]
    fn insert_uncompressed_multiple() {
        let mut stream = BrotliStream::new(22, 0);
        stream.insert_uncompressed(b"Hello world");
        stream.insert_uncompressed(b"test");
        stream.end_stream();

        check_decompresses_to(&stream, b"Hello worldtest", &[]);
    }

    #[test]
    fn insert_uncompressed_large() {
        // Larger than one meta-block can carry, forcing a split.
        let mut data = vec![0u8; (1 << 24) + 5];
        data[7] = 1;
        data[12_345_678] = 99;
        data[1 << 24] = 7;

        let mut stream = BrotliStream::new(22, 0);
        stream.insert_uncompressed(&data);
        stream.end_stream();

        check_decompresses_to(&stream, &data, &[]);
    }

    #[test]
    fn insert_from_dictionary() {
        let dict = b"Hello world";
        let mut stream = BrotliStream::new(22, dict.len() as u32);

        stream.insert_from_dictionary(1, 4).unwrap();
        stream.insert_from_dictionary(6, 3).unwrap();
        stream.end_stream();

        check_decompresses_to(&stream, b"ellowor", dict);
    }

    #[test]
    fn insert_mixed() {
        let dict = b"Hello world";
        let mut stream = BrotliStream::new(22, dict.len() as u32);

        stream.insert_from_dictionary(1, 4).unwrap();
        stream.insert_uncompressed(b"123");
        stream.insert_from_dictionary(6, 3).unwrap();
        stream.insert_compressed(b"6789").unwrap();
        stream.insert_from_dictionary(0, 2).unwrap();
        stream.end_stream();

        check_decompresses_to(&stream, b"ello123wor6789He", dict);
    }

    #[test]
    fn append_streams() {
        let dict = b"Hello world";

        let mut a = BrotliStream::new(22, 11);
        let mut b = BrotliStream::with_offset(22, 11, 4);
        let mut c = BrotliStream::with_offset(22, 11, 9);

        a.insert_from_dictionary(0, 4).unwrap();
        b.insert_from_dictionary(6, 5).unwrap();
        c.insert_from_dictionary(4, 3).unwrap();

        a.append(b);
        a.append(c);
        a.end_stream();

        check_decompresses_to(&a, b"Hellworldo w", dict);
    }

    #[test]
    fn four_byte_align() {
        let dict = b"1234";
        let mut stream = BrotliStream::new(22, 4);

        stream.four_byte_align_uncompressed();
        assert_eq!(stream.uncompressed_size(), 0);

        stream.insert_from_dictionary(0, 2).unwrap();
        stream.four_byte_align_uncompressed();
        assert_eq!(stream.uncompressed_size(), 4);
        stream.four_byte_align_uncompressed();
        assert_eq!(stream.uncompressed_size(), 4);

        stream.end_stream();

        check_decompresses_to(&stream, b"12\0\0", dict);
    }

    #[test]
    fn one_byte_reference_fails() {
        let mut stream = BrotliStream::new(22, 11);
        assert_eq!(
            stream.insert_from_dictionary(0, 1),
            Err(EncodeError::OneByteReference)
        );
        // Zero length references are a no-op.
        assert_eq!(stream.insert_from_dictionary(0, 0), Ok(()));
        assert_eq!(stream.uncompressed_size(), 0);
    }

    #[test]
    fn dictionary_larger_than_window_fails() {
        // Window for 10 bits is 1008 bytes, smaller than the dictionary.
        let mut stream = BrotliStream::new(10, 2000);
        assert_eq!(
            stream.insert_from_dictionary(0, 2),
            Err(EncodeError::StreamOffsetExceedsWindow)
        );
        assert_eq!(
            stream.insert_compressed(b"abc"),
            Err(EncodeError::StreamOffsetExceedsWindow)
        );
    }

    #[test]
    fn empty_stream() {
        let mut stream = BrotliStream::new(22, 0);
        stream.end_stream();
        check_decompresses_to(&stream, &[], &[]);
    }

    #[test]
    fn window_bits_for_sizes() {
        assert_eq!(BrotliStream::window_bits_for(0), 10);
        assert_eq!(BrotliStream::window_bits_for(1008), 10);
        assert_eq!(BrotliStream::window_bits_for(1009), 11);
        assert_eq!(BrotliStream::window_bits_for(1 << 20), 21);
        assert_eq!(BrotliStream::window_bits_for(u32::MAX), 24);
    }
}
