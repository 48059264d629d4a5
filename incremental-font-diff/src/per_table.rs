//! Table keyed binary patches for the non glyph tables of a font.
//!
//! The container is a keyed record of per table patches plus the set of
//! tables removed between the two fonts. Each table's patch is an opaque
//! byte string produced by whichever [`BinaryDiff`] implementation the
//! differ was constructed with.

use std::collections::{BTreeMap, BTreeSet};

use font_types::Tag;
use read_fonts::{FontData, FontRef};
use write_fonts::FontBuilder;

use crate::binary_diff::{BinaryDiff, BinaryPatch};
use crate::error::{DiffError, PatchingError};

// Container layout, all values big endian:
//   Tag   format ('ptbd')
//   u16   patch count
//   u16   removed count
//   Tag[] removed tags, sorted
//   then per patch, sorted by tag:
//     Tag  table tag
//     u32  uncompressed length of the patched table
//     u32  patch byte length
//     u8[] patch bytes
const FORMAT: Tag = Tag::new(b"ptbd");

/// One table's patch within a [`PerTablePatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePatch {
    /// Size of the table the patch reconstructs.
    pub uncompressed_length: u32,
    pub data: Vec<u8>,
}

/// A parsed or under construction per table patch container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerTablePatch {
    pub table_patches: BTreeMap<Tag, TablePatch>,
    pub removed_tables: BTreeSet<Tag>,
}

impl PerTablePatch {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&FORMAT.to_be_bytes());
        out.extend_from_slice(&(self.table_patches.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.removed_tables.len() as u16).to_be_bytes());
        for tag in &self.removed_tables {
            out.extend_from_slice(&tag.to_be_bytes());
        }
        for (tag, patch) in &self.table_patches {
            out.extend_from_slice(&tag.to_be_bytes());
            out.extend_from_slice(&patch.uncompressed_length.to_be_bytes());
            out.extend_from_slice(&(patch.data.len() as u32).to_be_bytes());
            out.extend_from_slice(&patch.data);
        }
        out
    }

    pub fn parse(data: &[u8]) -> Result<PerTablePatch, PatchingError> {
        let font_data = FontData::new(data);
        let truncated = PatchingError::InvalidPatch("Patch container is truncated.");

        let format: Tag = font_data.read_at(0).map_err(|_| truncated.clone())?;
        if format != FORMAT {
            return Err(PatchingError::InvalidPatch(
                "Patch container tag is not 'ptbd'.",
            ));
        }
        let patch_count: u16 = font_data.read_at(4).map_err(|_| truncated.clone())?;
        let removed_count: u16 = font_data.read_at(6).map_err(|_| truncated.clone())?;

        let mut removed_tables = BTreeSet::new();
        let mut offset = 8usize;
        for _ in 0..removed_count {
            let tag: Tag = font_data.read_at(offset).map_err(|_| truncated.clone())?;
            removed_tables.insert(tag);
            offset += 4;
        }

        let mut table_patches = BTreeMap::new();
        for _ in 0..patch_count {
            let tag: Tag = font_data.read_at(offset).map_err(|_| truncated.clone())?;
            let uncompressed_length: u32 =
                font_data.read_at(offset + 4).map_err(|_| truncated.clone())?;
            let length: u32 = font_data.read_at(offset + 8).map_err(|_| truncated.clone())?;
            let start = offset + 12;
            let end = start
                .checked_add(length as usize)
                .ok_or(truncated.clone())?;
            let patch_data = data.get(start..end).ok_or(truncated.clone())?;
            table_patches.insert(
                tag,
                TablePatch {
                    uncompressed_length,
                    data: patch_data.to_vec(),
                },
            );
            offset = end;
        }

        Ok(PerTablePatch {
            table_patches,
            removed_tables,
        })
    }
}

/// Diffs two fonts table by table with a generic binary differ.
pub struct PerTableDiff<D> {
    differ: D,
    // Empty means every table is diffed.
    target_tags: BTreeSet<Tag>,
}

impl<D: BinaryDiff> PerTableDiff<D> {
    pub fn new(differ: D) -> PerTableDiff<D> {
        PerTableDiff {
            differ,
            target_tags: BTreeSet::new(),
        }
    }

    /// Restricts the diff to the given tags; other tables are ignored
    /// entirely.
    pub fn with_target_tags(differ: D, tags: impl IntoIterator<Item = Tag>) -> PerTableDiff<D> {
        PerTableDiff {
            differ,
            target_tags: tags.into_iter().collect(),
        }
    }

    /// Produces a serialized [`PerTablePatch`] transforming `base` into
    /// `derived`.
    pub fn diff(&self, base: &[u8], derived: &[u8]) -> Result<Vec<u8>, DiffError> {
        let base_font = FontRef::new(base)?;
        let derived_font = FontRef::new(derived)?;

        let base_tags = tags_of(&base_font);
        let derived_tags = tags_of(&derived_font);

        let mut patch = PerTablePatch::default();
        for tag in base_tags.union(&derived_tags) {
            if !self.target_tags.is_empty() && !self.target_tags.contains(tag) {
                continue;
            }

            let Some(derived_table) = derived_font.table_data(*tag) else {
                // Present only in the base.
                patch.removed_tables.insert(*tag);
                continue;
            };
            let derived_table = derived_table.as_bytes();
            let base_table = base_font
                .table_data(*tag)
                .map(|data| data.as_bytes())
                .unwrap_or_default();

            let table_patch = self.differ.diff(base_table, derived_table)?;
            patch.table_patches.insert(
                *tag,
                TablePatch {
                    uncompressed_length: derived_table.len() as u32,
                    data: table_patch,
                },
            );
        }

        Ok(patch.to_bytes())
    }
}

/// Rebuilds a font from a base and a serialized [`PerTablePatch`].
pub struct PerTablePatcher<P> {
    patcher: P,
}

impl<P: BinaryPatch> PerTablePatcher<P> {
    pub fn new(patcher: P) -> PerTablePatcher<P> {
        PerTablePatcher { patcher }
    }

    /// Applies the container: patched tables are reconstructed, unpatched
    /// ones pass through, removed ones are dropped, and tables new to the
    /// patch are materialized from an empty base.
    pub fn patch(&self, base: &[u8], patch: &[u8]) -> Result<Vec<u8>, PatchingError> {
        let patch = PerTablePatch::parse(patch)?;
        let font = FontRef::new(base)?;

        let mut tags = tags_of(&font);
        tags.extend(patch.table_patches.keys().copied());
        for tag in &patch.removed_tables {
            tags.remove(tag);
        }

        let mut builder = FontBuilder::new();
        for tag in tags {
            let base_table = font.table_data(tag);
            if let Some(table_patch) = patch.table_patches.get(&tag) {
                let base_bytes = base_table
                    .as_ref()
                    .map(|data| data.as_bytes())
                    .unwrap_or_default();
                let derived = self.patcher.patch(
                    base_bytes,
                    &table_patch.data,
                    table_patch.uncompressed_length as usize,
                )?;
                builder.add_raw(tag, derived);
            } else if let Some(data) = base_table {
                // No patch for this table, just pass it through.
                builder.add_raw(tag, data.as_bytes());
            }
        }

        Ok(builder.build())
    }
}

fn tags_of(font: &FontRef) -> BTreeSet<Tag> {
    font.table_directory
        .table_records()
        .iter()
        .map(|record| record.tag())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_diff::{SharedBrotliDiff, SharedBrotliPatch};

    const TABLE_1_BASE: &[u8] = b"glyph outlines, first batch\n";
    const TABLE_1_DERIVED: &[u8] = b"glyph outlines, first batch\nglyph outlines, second batch\n";
    const TABLE_2: &[u8] = b"unchanged but still diffed\n";
    const TABLE_3: &[u8] = b"only in the base\n";
    const TABLE_4: &[u8] = b"brand new table contents\n";

    fn base_font() -> Vec<u8> {
        let mut builder = FontBuilder::new();
        builder.add_raw(Tag::new(b"tab1"), TABLE_1_BASE);
        builder.add_raw(Tag::new(b"tab2"), TABLE_2);
        builder.add_raw(Tag::new(b"tab3"), TABLE_3);
        builder.build()
    }

    fn derived_font() -> Vec<u8> {
        let mut builder = FontBuilder::new();
        builder.add_raw(Tag::new(b"tab1"), TABLE_1_DERIVED);
        builder.add_raw(Tag::new(b"tab2"), TABLE_2);
        builder.add_raw(Tag::new(b"tab4"), TABLE_4);
        builder.build()
    }

    #[test]
    fn per_table_round_trip() {
        let base = base_font();
        let derived = derived_font();

        let patch = PerTableDiff::new(SharedBrotliDiff::new())
            .diff(&base, &derived)
            .unwrap();
        let patched = PerTablePatcher::new(SharedBrotliPatch)
            .patch(&base, &patch)
            .unwrap();

        let font = FontRef::new(&patched).unwrap();
        assert_eq!(
            font.table_data(Tag::new(b"tab1")).unwrap().as_bytes(),
            TABLE_1_DERIVED
        );
        assert_eq!(
            font.table_data(Tag::new(b"tab2")).unwrap().as_bytes(),
            TABLE_2
        );
        assert!(font.table_data(Tag::new(b"tab3")).is_none());
        assert_eq!(
            font.table_data(Tag::new(b"tab4")).unwrap().as_bytes(),
            TABLE_4
        );
    }

    #[test]
    fn records_removed_tables() {
        let base = base_font();
        let derived = derived_font();

        let patch_bytes = PerTableDiff::new(SharedBrotliDiff::new())
            .diff(&base, &derived)
            .unwrap();
        let patch = PerTablePatch::parse(&patch_bytes).unwrap();

        assert_eq!(
            patch.removed_tables.iter().copied().collect::<Vec<_>>(),
            vec![Tag::new(b"tab3")]
        );
        assert_eq!(patch.table_patches.len(), 3);
    }

    #[test]
    fn target_tags_filter() {
        let base = base_font();
        let derived = derived_font();

        let patch_bytes =
            PerTableDiff::with_target_tags(SharedBrotliDiff::new(), [Tag::new(b"tab1")])
                .diff(&base, &derived)
                .unwrap();
        let patch = PerTablePatch::parse(&patch_bytes).unwrap();

        assert_eq!(patch.table_patches.len(), 1);
        assert!(patch.table_patches.contains_key(&Tag::new(b"tab1")));
        assert!(patch.removed_tables.is_empty());

        // Unpatched tables pass through on application.
        let patched = PerTablePatcher::new(SharedBrotliPatch)
            .patch(&base, &patch_bytes)
            .unwrap();
        let font = FontRef::new(&patched).unwrap();
        assert_eq!(
            font.table_data(Tag::new(b"tab1")).unwrap().as_bytes(),
            TABLE_1_DERIVED
        );
        assert_eq!(
            font.table_data(Tag::new(b"tab3")).unwrap().as_bytes(),
            TABLE_3
        );
    }

    #[test]
    fn container_serialization_round_trip() {
        let mut patch = PerTablePatch::default();
        patch.removed_tables.insert(Tag::new(b"tab9"));
        patch.table_patches.insert(
            Tag::new(b"tab1"),
            TablePatch {
                uncompressed_length: 42,
                data: vec![1, 2, 3],
            },
        );
        patch.table_patches.insert(
            Tag::new(b"tab2"),
            TablePatch {
                uncompressed_length: 0,
                data: vec![],
            },
        );

        let bytes = patch.to_bytes();
        assert_eq!(PerTablePatch::parse(&bytes).unwrap(), patch);
    }

    #[test]
    fn parse_rejects_bad_format() {
        let mut patch = PerTablePatch::default().to_bytes();
        patch[0] = b'x';
        assert_eq!(
            PerTablePatch::parse(&patch),
            Err(PatchingError::InvalidPatch(
                "Patch container tag is not 'ptbd'."
            ))
        );
    }

    #[test]
    fn parse_rejects_truncated_input() {
        let mut patch = PerTablePatch::default();
        patch.table_patches.insert(
            Tag::new(b"tab1"),
            TablePatch {
                uncompressed_length: 4,
                data: vec![1, 2, 3, 4],
            },
        );
        let bytes = patch.to_bytes();

        for len in [2, 6, 10, bytes.len() - 1] {
            assert!(
                PerTablePatch::parse(&bytes[..len]).is_err(),
                "length {len} should not parse"
            );
        }
    }
}
