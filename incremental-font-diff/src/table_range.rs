//! Run bookkeeping for one table of a font diff.

use shared_brotli::{BrotliStream, EncodeError};

use crate::error::DiffError;

/// Tracks diff progress through the base and derived copies of one table,
/// feeding an owned brotli stream scoped to that table.
///
/// The stream's initial offset is the derived table's position within the
/// font file, so that once the per table streams are appended in file order
/// every backward distance comes out right.
pub(crate) struct TableRange<'a> {
    derived: &'a [u8],
    base_table_offset: u32,
    base_offset: u32,
    derived_offset: u32,
    base_pending: u32,
    derived_pending: u32,
    stream: BrotliStream,
}

impl<'a> TableRange<'a> {
    pub fn new(
        derived: &'a [u8],
        derived_table_offset: u32,
        base_table_offset: u32,
        window_bits: u32,
        dictionary_size: u32,
    ) -> TableRange<'a> {
        TableRange {
            derived,
            base_table_offset,
            base_offset: 0,
            derived_offset: 0,
            base_pending: 0,
            derived_pending: 0,
            stream: BrotliStream::with_offset(window_bits, dictionary_size, derived_table_offset),
        }
    }

    /// The derived table's bytes.
    pub fn data(&self) -> &'a [u8] {
        self.derived
    }

    pub fn stream_mut(&mut self) -> &mut BrotliStream {
        &mut self.stream
    }

    pub fn into_stream(self) -> BrotliStream {
        self.stream
    }

    /// Accumulates lengths onto the in-progress run.
    pub fn extend(&mut self, base_length: u32, derived_length: u32) {
        self.base_pending += base_length;
        self.derived_pending += derived_length;
    }

    /// Commits the pending run as freshly compressed derived bytes.
    pub fn commit_new(&mut self) -> Result<(), DiffError> {
        let run = self.pending_derived_bytes()?;
        self.stream.insert_compressed(run)?;
        self.advance();
        Ok(())
    }

    /// Commits the pending run as a backward reference to the matching base
    /// bytes.
    pub fn commit_existing(&mut self) -> Result<(), DiffError> {
        match self.stream.insert_from_dictionary(
            self.base_table_offset + self.base_offset,
            self.derived_pending,
        ) {
            Ok(()) => {}
            Err(EncodeError::OneByteReference) => {
                // 1 byte backwards refs must be inserted as literals.
                let run = self.pending_derived_bytes()?;
                self.stream.insert_uncompressed(run);
            }
            Err(e) => return Err(e.into()),
        }
        self.advance();
        Ok(())
    }

    fn pending_derived_bytes(&self) -> Result<&'a [u8], DiffError> {
        let start = self.derived_offset as usize;
        let end = start + self.derived_pending as usize;
        self.derived
            .get(start..end)
            .ok_or(DiffError::InternalError("run extends past the derived table"))
    }

    fn advance(&mut self) {
        self.derived_offset += self.derived_pending;
        self.base_offset += self.base_pending;
        self.base_pending = 0;
        self.derived_pending = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_brotli::shared_brotli_decode;

    #[test]
    fn existing_runs_reference_the_base() {
        let base: Vec<u8> = (0..64u8).collect();
        // The derived table duplicates base bytes 8..24 at table offset 16.
        let derived: Vec<u8> = (100..116u8).chain(8..24u8).collect();

        let mut range = TableRange::new(&derived, 0, 0, 22, base.len() as u32);
        range.extend(0, 16);
        range.commit_new().unwrap();
        range.extend(8, 0); // skip base bytes 0..8
        range.commit_existing().unwrap();
        range.extend(16, 16);
        range.commit_existing().unwrap();

        let mut stream = range.into_stream();
        stream.end_stream();

        let decoded = shared_brotli_decode(stream.data(), Some(&base), derived.len()).unwrap();
        assert_eq!(decoded, derived);
    }

    #[test]
    fn one_byte_run_falls_back_to_literals() {
        let base = [7u8, 8, 9, 10];
        let derived = [9u8];

        let mut range = TableRange::new(&derived, 0, 0, 22, base.len() as u32);
        range.extend(2, 0);
        range.extend(0, 1);
        range.commit_existing().unwrap();

        let mut stream = range.into_stream();
        stream.end_stream();

        let decoded = shared_brotli_decode(stream.data(), Some(&base), derived.len()).unwrap();
        assert_eq!(decoded, derived);
    }
}
