//! Byte range access to the tables of a font file.
//!
//! The differ only ever sees tables as `(offset, length)` ranges within the
//! font's bytes; lengths are padded to the four byte boundaries tables are
//! laid out on.

use std::collections::HashMap;
use std::ops::Range;

use font_types::Tag;
use read_fonts::{FontData, FontRef, ReadError, TableProvider};

use crate::error::DiffError;

pub(crate) const LOCA: Tag = Tag::new(b"loca");
pub(crate) const GLYF: Tag = Tag::new(b"glyf");

const TABLE_RECORD_LEN: usize = 16;
const DIRECTORY_HEADER_LEN: usize = 12;

/// Byte range of a table within the font file, with the length rounded up
/// to the four byte boundary tables are padded to. The end of the range is
/// clamped to the file size.
pub(crate) fn padded_table_range(font_data: &[u8], tag: Tag) -> Option<Range<usize>> {
    let data = FontData::new(font_data);
    let num_tables: u16 = data.read_at(4).ok()?;
    for i in 0..num_tables as usize {
        let record = DIRECTORY_HEADER_LEN + i * TABLE_RECORD_LEN;
        let record_tag: Tag = data.read_at(record).ok()?;
        if record_tag != tag {
            continue;
        }
        let offset: u32 = data.read_at(record + 8).ok()?;
        let length: u32 = data.read_at(record + 12).ok()?;
        let start = offset as usize;
        let padded = length.checked_add(3)? as usize & !3;
        let end = start.checked_add(padded)?.min(font_data.len());
        if start > end {
            return None;
        }
        return Some(start..end);
    }
    None
}

// Whether the font uses the short (16 bit, halved) loca format.
pub(crate) fn is_short_loca(font: &FontRef) -> Result<bool, ReadError> {
    Ok(font.head()?.index_to_loc_format() == 0)
}

pub(crate) fn glyph_count(font: &FontRef) -> Result<u32, ReadError> {
    Ok(font.maxp()?.num_glyphs() as u32)
}

/// Re-serializes a font so that the loca table is immediately followed by
/// glyf in file order.
///
/// [`BrotliFontDiff`](crate::font_diff::BrotliFontDiff) requires this layout
/// of both of its inputs so that the two tables form one contiguous region
/// in file order. The table directory stays sorted by tag; only the
/// physical placement of the table data changes.
pub fn sort_for_diff(font_data: &[u8]) -> Result<Vec<u8>, DiffError> {
    let font = FontRef::new(font_data)?;
    let mut tags: Vec<Tag> = font
        .table_directory
        .table_records()
        .iter()
        .map(|r| r.tag())
        .collect();
    tags.sort_unstable();
    tags.dedup();

    // Physical order is tag order, except loca moves to sit immediately
    // before glyf.
    let mut order: Vec<Tag> = tags.iter().copied().filter(|tag| *tag != LOCA).collect();
    if tags.contains(&LOCA) {
        match order.iter().position(|tag| *tag == GLYF) {
            Some(pos) => order.insert(pos, LOCA),
            None => order.push(LOCA),
        }
    }

    let sfnt_version: u32 = FontData::new(font_data)
        .read_at(0)
        .map_err(DiffError::FontParsingFailed)?;

    let num_tables = tags.len() as u16;
    let (entry_selector, search_range) = if num_tables == 0 {
        (0, 0)
    } else {
        let entry_selector = 15 - num_tables.leading_zeros() as u16;
        (entry_selector, (1u16 << entry_selector) * 16)
    };
    let range_shift = num_tables * 16 - search_range;

    let header_len = DIRECTORY_HEADER_LEN + tags.len() * TABLE_RECORD_LEN;
    let mut placements: HashMap<Tag, (u32, u32)> = HashMap::new();
    let mut position = header_len as u32;
    for tag in &order {
        let table = font
            .table_data(*tag)
            .ok_or(DiffError::InternalError("table in the directory has no data"))?;
        let length = table.len() as u32;
        placements.insert(*tag, (position, length));
        position += (length + 3) & !3;
    }

    let mut out = Vec::with_capacity(position as usize);
    out.extend_from_slice(&sfnt_version.to_be_bytes());
    out.extend_from_slice(&num_tables.to_be_bytes());
    out.extend_from_slice(&search_range.to_be_bytes());
    out.extend_from_slice(&entry_selector.to_be_bytes());
    out.extend_from_slice(&range_shift.to_be_bytes());

    for tag in &tags {
        let (offset, length) = placements[tag];
        let table = font
            .table_data(*tag)
            .ok_or(DiffError::InternalError("table in the directory has no data"))?;
        out.extend_from_slice(&tag.to_be_bytes());
        out.extend_from_slice(&checksum(table.as_bytes()).to_be_bytes());
        out.extend_from_slice(&offset.to_be_bytes());
        out.extend_from_slice(&length.to_be_bytes());
    }

    for tag in &order {
        let table = font
            .table_data(*tag)
            .ok_or(DiffError::InternalError("table in the directory has no data"))?;
        out.extend_from_slice(table.as_bytes());
        let padding = (4 - table.len() % 4) % 4;
        out.extend(std::iter::repeat(0u8).take(padding));
    }

    Ok(out)
}

fn checksum(table: &[u8]) -> u32 {
    let mut sum = 0u32;
    let mut iter = table.chunks_exact(4);
    for quad in &mut iter {
        let array: [u8; 4] = quad.try_into().unwrap_or_default();
        sum = sum.wrapping_add(u32::from_be_bytes(array));
    }
    let rem = match *iter.remainder() {
        [a] => u32::from_be_bytes([a, 0, 0, 0]),
        [a, b] => u32::from_be_bytes([a, b, 0, 0]),
        [a, b, c] => u32::from_be_bytes([a, b, c, 0]),
        _ => 0,
    };
    sum.wrapping_add(rem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use write_fonts::FontBuilder;

    fn test_font() -> Vec<u8> {
        let mut builder = FontBuilder::new();
        builder.add_raw(Tag::new(b"cmap"), vec![1u8; 6]);
        builder.add_raw(GLYF, vec![2u8; 10]);
        builder.add_raw(Tag::new(b"head"), vec![3u8; 54]);
        builder.add_raw(LOCA, vec![4u8; 8]);
        builder.add_raw(Tag::new(b"maxp"), vec![5u8; 6]);
        builder.build()
    }

    #[test]
    fn places_loca_immediately_before_glyf() {
        let font_data = sort_for_diff(&test_font()).unwrap();

        let loca = padded_table_range(&font_data, LOCA).unwrap();
        let glyf = padded_table_range(&font_data, GLYF).unwrap();
        assert_eq!(loca.end, glyf.start);

        // Table contents survive the reordering.
        let font = FontRef::new(&font_data).unwrap();
        assert_eq!(
            font.table_data(Tag::new(b"cmap")).unwrap().as_bytes(),
            &[1u8; 6]
        );
        assert_eq!(font.table_data(GLYF).unwrap().as_bytes(), &[2u8; 10]);
        assert_eq!(font.table_data(LOCA).unwrap().as_bytes(), &[4u8; 8]);
        assert_eq!(
            font.table_data(Tag::new(b"maxp")).unwrap().as_bytes(),
            &[5u8; 6]
        );
    }

    #[test]
    fn sort_is_idempotent() {
        let sorted = sort_for_diff(&test_font()).unwrap();
        assert_eq!(sort_for_diff(&sorted).unwrap(), sorted);
    }

    #[test]
    fn padded_range_rounds_up() {
        let font_data = sort_for_diff(&test_font()).unwrap();
        // cmap is 6 bytes long, its padded range covers 8.
        let cmap = padded_table_range(&font_data, Tag::new(b"cmap")).unwrap();
        assert_eq!(cmap.len(), 8);
        assert!(padded_table_range(&font_data, Tag::new(b"mist")).is_none());
    }
}
