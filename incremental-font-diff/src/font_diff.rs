//! Brotli font diffs driven by the glyph tables.
//!
//! The differ never compares glyph bytes. It walks the derived subset's
//! glyph ids, classifies each one through the two subset plans as either
//! present in the base or new, merges neighbouring classifications into
//! maximal runs, and emits every run either as a backward reference into
//! the base font (acting as the decoder's shared dictionary) or as freshly
//! compressed data. A parallel loca patch is produced at the same time.

use font_types::Tag;
use read_fonts::FontRef;
use shared_brotli::{shared_brotli_decode, BrotliStream};

use crate::error::{DiffError, PatchingError};
use crate::font::{glyph_count, is_short_loca, padded_table_range, GLYF, LOCA};
use crate::plan::SubsetPlan;
use crate::table_range::TableRange;

/// Computes and applies brotli font patches.
pub struct BrotliFontDiff;

impl BrotliFontDiff {
    /// Writes out a brotli encoded copy of the derived subset using the base
    /// subset as a shared dictionary.
    ///
    /// Glyph ranges shared with the base are encoded as backward references
    /// and never re-transmitted. Both fonts must be laid out with loca
    /// immediately followed by glyf (see
    /// [`sort_for_diff`](crate::font::sort_for_diff)) and `derived` must
    /// extend the base's glyph coverage.
    pub fn diff(
        base_plan: &SubsetPlan,
        base: &[u8],
        derived_plan: &SubsetPlan,
        derived: &[u8],
    ) -> Result<Vec<u8>, DiffError> {
        let total_size = (base.len() as u64 + derived.len() as u64).min(u32::MAX as u64) as u32;
        let window_bits = BrotliStream::window_bits_for(total_size);

        if base.is_empty() {
            // Nothing to reference, the patch is plain compression of the
            // derived font.
            let mut out = BrotliStream::new(window_bits, 0);
            out.insert_compressed(derived)?;
            out.end_stream();
            return Ok(out.into_bytes());
        }

        let base_font = FontRef::new(base)?;
        let derived_font = FontRef::new(derived)?;

        let base_loca = table_range_of(base, LOCA)?;
        let base_glyf = table_range_of(base, GLYF)?;
        let derived_loca = table_range_of(derived, LOCA)?;
        let derived_glyf = table_range_of(derived, GLYF)?;

        if base_loca.end != base_glyf.start || derived_loca.end != derived_glyf.start {
            log::warn!("loca must immediately precede glyf.");
            return Err(DiffError::InternalError(
                "loca is not immediately followed by glyf",
            ));
        }

        let dictionary_size = base.len() as u32;
        let mut out = BrotliStream::new(window_bits, dictionary_size);

        // Everything in front of loca is compressed against the matching
        // prefix of the base acting as a partial dictionary.
        out.insert_compressed_with_partial_dict(
            &derived[..derived_loca.start],
            &base[..base_loca.start],
        )?;

        let glyf_diff = GlyfDiff::new(
            base_plan,
            &base_font,
            derived_plan,
            &derived_font,
            derived,
            base_loca.start as u32,
            base_glyf.start as u32,
            derived_loca.clone(),
            derived_glyf.clone(),
            window_bits,
            dictionary_size,
        )?;
        let (loca_stream, glyf_stream) = glyf_diff.make_diff()?;

        // Spliced in file order: loca then glyf.
        out.append(loca_stream);
        out.append(glyf_stream);

        // Tables following glyf carry no dictionary.
        if derived.len() > derived_glyf.end {
            out.insert_compressed(&derived[derived_glyf.end..])?;
        }

        out.end_stream();
        Ok(out.into_bytes())
    }

    /// Applies a patch produced by [`diff`](Self::diff), reconstructing the
    /// derived font from the base.
    ///
    /// `max_size` is an upper bound on the size of the reconstructed font.
    pub fn apply(base: &[u8], patch: &[u8], max_size: usize) -> Result<Vec<u8>, PatchingError> {
        let dictionary = (!base.is_empty()).then_some(base);
        Ok(shared_brotli_decode(patch, dictionary, max_size)?)
    }
}

fn table_range_of(font_data: &[u8], tag: Tag) -> Result<std::ops::Range<usize>, DiffError> {
    padded_table_range(font_data, tag).ok_or(DiffError::InternalError(
        "font is missing its loca or glyf table",
    ))
}

#[derive(Copy, Clone, PartialEq)]
enum Mode {
    Init,
    NewData,
    ExistingData,
}

// Notation:
// base_gid:      glyph id in the base subset glyph space.
// *_derived_gid: glyph id in the derived subset glyph space.
// *_old_gid:     glyph id in the original font glyph space.
struct GlyfDiff<'a> {
    glyf_range: TableRange<'a>,
    loca_range: TableRange<'a>,

    mode: Mode,
    loca_diverged: bool,

    base_gid: u32,
    derived_gid: u32,

    base_plan: &'a SubsetPlan,
    derived_plan: &'a SubsetPlan,

    base_glyph_count: u32,
    derived_glyph_count: u32,
    use_short_loca: bool,
    loca_width: u32,
    base_loca_width: u32,
    retain_gids: bool,
}

impl<'a> GlyfDiff<'a> {
    #[allow(clippy::too_many_arguments)]
    fn new(
        base_plan: &'a SubsetPlan,
        base_font: &FontRef,
        derived_plan: &'a SubsetPlan,
        derived_font: &FontRef,
        derived: &'a [u8],
        base_loca_offset: u32,
        base_glyf_offset: u32,
        derived_loca: std::ops::Range<usize>,
        derived_glyf: std::ops::Range<usize>,
        window_bits: u32,
        dictionary_size: u32,
    ) -> Result<GlyfDiff<'a>, DiffError> {
        let base_short_loca = is_short_loca(base_font)?;
        let derived_short_loca = is_short_loca(derived_font)?;
        let base_glyph_count = glyph_count(base_font)?;
        let derived_glyph_count = glyph_count(derived_font)?;

        // A sparse original-gid preserving plan maps fewer glyphs than the
        // face holds.
        let retain_gids = (base_plan.mapping_len() as u32) < base_glyph_count;

        Ok(GlyfDiff {
            glyf_range: TableRange::new(
                &derived[derived_glyf.clone()],
                derived_glyf.start as u32,
                base_glyf_offset,
                window_bits,
                dictionary_size,
            ),
            loca_range: TableRange::new(
                &derived[derived_loca.clone()],
                derived_loca.start as u32,
                base_loca_offset,
                window_bits,
                dictionary_size,
            ),
            mode: Mode::Init,
            // A format change means the loca tables can never match byte
            // for byte.
            loca_diverged: base_short_loca != derived_short_loca,
            base_gid: 0,
            derived_gid: 0,
            base_plan,
            derived_plan,
            base_glyph_count,
            derived_glyph_count,
            use_short_loca: derived_short_loca,
            loca_width: if derived_short_loca { 2 } else { 4 },
            base_loca_width: if base_short_loca { 2 } else { 4 },
            retain_gids,
        })
    }

    // Runs the per glyph state machine and returns the finished loca and
    // glyf streams, four byte aligned, ready to be appended in file order.
    fn make_diff(mut self) -> Result<(BrotliStream, BrotliStream), DiffError> {
        while self.derived_gid < self.derived_glyph_count {
            let base_derived_gid = self.base_to_derived_gid(self.base_gid);
            match self.mode {
                Mode::Init => {
                    self.start_range(base_derived_gid)?;
                }
                Mode::NewData => {
                    self.loca_diverged = true;
                    if base_derived_gid != Some(self.derived_gid) {
                        // Continue the current range.
                        let length = self.glyph_length(self.derived_gid)?;
                        self.glyf_range.extend(0, length);
                        self.loca_range.extend(0, self.loca_width);
                        self.derived_gid += 1;
                    } else {
                        self.commit_range()?;
                        self.start_range(base_derived_gid)?;
                    }
                }
                Mode::ExistingData => {
                    if base_derived_gid == Some(self.derived_gid) {
                        // Continue the current range.
                        let length = self.glyph_length(self.derived_gid)?;
                        self.glyf_range.extend(length, length);
                        self.loca_range.extend(self.base_loca_width, self.loca_width);
                        self.derived_gid += 1;
                        self.base_gid += 1;
                    } else {
                        self.commit_range()?;
                        self.start_range(base_derived_gid)?;
                    }
                }
            }
        }

        self.commit_range()?;

        // Loca has glyph count + 1 entries.
        self.loca_range.extend(self.base_loca_width, self.loca_width);
        if self.loca_diverged {
            self.loca_range.commit_new()?;
        } else {
            self.loca_range.commit_existing()?;
        }

        self.loca_range.stream_mut().four_byte_align_uncompressed();
        self.glyf_range.stream_mut().four_byte_align_uncompressed();
        Ok((
            self.loca_range.into_stream(),
            self.glyf_range.into_stream(),
        ))
    }

    // The derived subset gid holding the same glyph as `base_gid` in the
    // base subset, if any.
    fn base_to_derived_gid(&self, base_gid: u32) -> Option<u32> {
        if self.retain_gids {
            // With retain gids set, gids are equivalent in all three spaces.
            return (base_gid < self.base_glyph_count).then_some(base_gid);
        }
        let base_old_gid = self.base_plan.old_gid(base_gid)?;
        self.derived_plan.new_gid(base_old_gid)
    }

    fn commit_range(&mut self) -> Result<(), DiffError> {
        match self.mode {
            Mode::NewData => self.glyf_range.commit_new(),
            Mode::ExistingData => {
                self.glyf_range.commit_existing()?;
                if !self.loca_diverged {
                    self.loca_range.commit_existing()?;
                }
                Ok(())
            }
            Mode::Init => Ok(()),
        }
    }

    fn start_range(&mut self, base_derived_gid: Option<u32>) -> Result<(), DiffError> {
        let length = self.glyph_length(self.derived_gid)?;
        if base_derived_gid != Some(self.derived_gid) {
            self.mode = Mode::NewData;
            self.loca_diverged = true;
            self.glyf_range.extend(0, length);
            self.loca_range.extend(0, self.loca_width);
        } else {
            self.mode = Mode::ExistingData;
            self.glyf_range.extend(length, length);
            self.loca_range.extend(self.base_loca_width, self.loca_width);
            self.base_gid += 1;
        }
        self.derived_gid += 1;
        Ok(())
    }

    // Length in bytes of a glyph in the derived subset, read from the
    // derived loca.
    fn glyph_length(&self, gid: u32) -> Result<u32, DiffError> {
        let loca = self.loca_range.data();
        let truncated = DiffError::InternalError("derived loca is truncated");

        let (start, end) = if self.use_short_loca {
            let index = gid as usize * 2;
            // Short offsets store half the real value.
            let start = read_u16(loca, index).ok_or(truncated.clone())? * 2;
            let end = read_u16(loca, index + 2).ok_or(truncated.clone())? * 2;
            (start, end)
        } else {
            let index = gid as usize * 4;
            let start = read_u32(loca, index).ok_or(truncated.clone())?;
            let end = read_u32(loca, index + 4).ok_or(truncated.clone())?;
            (start, end)
        };

        end.checked_sub(start)
            .ok_or(DiffError::InternalError("derived loca is not monotonic"))
    }
}

fn read_u16(data: &[u8], index: usize) -> Option<u32> {
    let bytes = data.get(index..index + 2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]) as u32)
}

fn read_u32(data: &[u8], index: usize) -> Option<u32> {
    let bytes = data.get(index..index + 4)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::sort_for_diff;
    use write_fonts::FontBuilder;

    const GLYPH_A: &[u8] = b"AAAAAAAAAAAA";
    const GLYPH_B: &[u8] = b"BBBBBBBB";
    const GLYPH_C: &[u8] = b"CCCCCCCCCCCCCCCCCC";
    const GLYPH_D: &[u8] = b"DDDDDD";
    const GLYPH_E: &[u8] = b"EEEEEEEEEEEEEE";

    // Assembles a minimal subset font whose loca table immediately precedes
    // glyf. Glyph content is opaque to the differ, so arbitrary bytes work.
    fn build_subset_font(glyphs: &[&[u8]], long_loca: bool) -> Vec<u8> {
        let mut glyf: Vec<u8> = Vec::new();
        let mut offsets: Vec<u32> = vec![0];
        for glyph in glyphs {
            glyf.extend_from_slice(glyph);
            // Keep glyph data two byte aligned so short offsets stay
            // representable.
            if glyf.len() % 2 != 0 {
                glyf.push(0);
            }
            offsets.push(glyf.len() as u32);
        }

        let mut loca = Vec::new();
        for offset in &offsets {
            if long_loca {
                loca.extend_from_slice(&offset.to_be_bytes());
            } else {
                loca.extend_from_slice(&((offset / 2) as u16).to_be_bytes());
            }
        }

        let mut head = vec![0u8; 54];
        head[50..52].copy_from_slice(&(long_loca as u16).to_be_bytes());

        let mut maxp = Vec::new();
        maxp.extend_from_slice(&0x00005000u32.to_be_bytes());
        maxp.extend_from_slice(&(glyphs.len() as u16).to_be_bytes());

        let mut builder = FontBuilder::new();
        builder.add_raw(Tag::new(b"cmap"), vec![0xAAu8; 12]);
        builder.add_raw(GLYF, glyf);
        builder.add_raw(Tag::new(b"head"), head);
        builder.add_raw(LOCA, loca);
        builder.add_raw(Tag::new(b"maxp"), maxp);
        builder.add_raw(Tag::new(b"name"), vec![0x55u8; 20]);
        sort_for_diff(&builder.build()).unwrap()
    }

    fn check_patch(base: &[u8], patch: &[u8], derived: &[u8]) {
        let patched = BrotliFontDiff::apply(base, patch, derived.len()).unwrap();
        assert_eq!(patched, derived);
    }

    #[test]
    fn diff_extension() {
        let base = build_subset_font(&[GLYPH_A, GLYPH_B, GLYPH_D], false);
        let derived =
            build_subset_font(&[GLYPH_A, GLYPH_B, GLYPH_C, GLYPH_D, GLYPH_E], false);

        let base_plan = SubsetPlan::from_pairs([(0, 0), (1, 1), (2, 3)]);
        let derived_plan = SubsetPlan::from_pairs([(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

        let patch = BrotliFontDiff::diff(&base_plan, &base, &derived_plan, &derived).unwrap();
        check_patch(&base, &patch, &derived);
    }

    #[test]
    fn diff_identical_subsets() {
        let font = build_subset_font(&[GLYPH_A, GLYPH_B, GLYPH_C], false);
        let plan = SubsetPlan::identity(3);

        let patch = BrotliFontDiff::diff(&plan, &font, &plan, &font).unwrap();
        check_patch(&font, &patch, &font);

        // Every glyph run is dictionary referenced, so the patch stays far
        // below the size of the font itself.
        assert!(patch.len() < font.len() / 2);
    }

    #[test]
    fn diff_empty_base() {
        let derived = build_subset_font(&[GLYPH_A, GLYPH_B], false);
        let base_plan = SubsetPlan::default();
        let derived_plan = SubsetPlan::identity(2);

        let patch = BrotliFontDiff::diff(&base_plan, &[], &derived_plan, &derived).unwrap();
        check_patch(&[], &patch, &derived);
    }

    #[test]
    fn diff_base_exhausted() {
        // All base glyphs come first, the derived tail is entirely new.
        let base = build_subset_font(&[GLYPH_A], false);
        let derived = build_subset_font(&[GLYPH_A, GLYPH_D, GLYPH_E], false);

        let base_plan = SubsetPlan::from_pairs([(0, 0)]);
        let derived_plan = SubsetPlan::from_pairs([(0, 0), (1, 1), (2, 2)]);

        let patch = BrotliFontDiff::diff(&base_plan, &base, &derived_plan, &derived).unwrap();
        check_patch(&base, &patch, &derived);
    }

    #[test]
    fn diff_with_empty_glyphs() {
        let base = build_subset_font(&[GLYPH_A, b"", GLYPH_C], false);
        let derived = build_subset_font(&[GLYPH_A, b"", GLYPH_C, b"", GLYPH_E], false);

        let base_plan = SubsetPlan::from_pairs([(0, 0), (1, 1), (2, 2)]);
        let derived_plan =
            SubsetPlan::from_pairs([(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

        let patch = BrotliFontDiff::diff(&base_plan, &base, &derived_plan, &derived).unwrap();
        check_patch(&base, &patch, &derived);
    }

    #[test]
    fn diff_retain_gids() {
        // Sparse original-gid preserving subsets: dropped glyphs stay as
        // empty slots, added glyphs only appear past the base glyph count.
        let base = build_subset_font(&[GLYPH_A, b"", GLYPH_C, b""], false);
        let derived =
            build_subset_font(&[GLYPH_A, b"", GLYPH_C, b"", GLYPH_E, GLYPH_B], false);

        // Only two of the four base glyphs are mapped, which marks the plan
        // as gid preserving.
        let base_plan = SubsetPlan::from_pairs([(0, 0), (2, 2)]);
        let derived_plan = SubsetPlan::from_pairs([(0, 0), (2, 2), (4, 4), (5, 5)]);

        let patch = BrotliFontDiff::diff(&base_plan, &base, &derived_plan, &derived).unwrap();
        check_patch(&base, &patch, &derived);
    }

    #[test]
    fn diff_short_to_long_loca() {
        let base = build_subset_font(&[GLYPH_A, GLYPH_B], false);
        let derived = build_subset_font(&[GLYPH_A, GLYPH_B, GLYPH_C], true);

        let base_plan = SubsetPlan::from_pairs([(0, 0), (1, 1)]);
        let derived_plan = SubsetPlan::from_pairs([(0, 0), (1, 1), (2, 2)]);

        let patch = BrotliFontDiff::diff(&base_plan, &base, &derived_plan, &derived).unwrap();
        check_patch(&base, &patch, &derived);
    }

    #[test]
    fn diff_long_loca() {
        let base = build_subset_font(&[GLYPH_A, GLYPH_C], true);
        let derived = build_subset_font(&[GLYPH_A, GLYPH_B, GLYPH_C], true);

        let base_plan = SubsetPlan::from_pairs([(0, 0), (1, 2)]);
        let derived_plan = SubsetPlan::from_pairs([(0, 0), (1, 1), (2, 2)]);

        let patch = BrotliFontDiff::diff(&base_plan, &base, &derived_plan, &derived).unwrap();
        check_patch(&base, &patch, &derived);
    }

    #[test]
    fn diff_requires_adjacent_tables() {
        // A font straight out of the builder orders tables by tag, leaving
        // glyf in front of loca.
        let mut builder = FontBuilder::new();
        builder.add_raw(GLYF, vec![1u8; 8]);
        builder.add_raw(Tag::new(b"head"), vec![0u8; 54]);
        builder.add_raw(LOCA, vec![0u8; 6]);
        builder.add_raw(Tag::new(b"maxp"), {
            let mut maxp = 0x00005000u32.to_be_bytes().to_vec();
            maxp.extend_from_slice(&2u16.to_be_bytes());
            maxp
        });
        let font = builder.build();

        let plan = SubsetPlan::identity(2);
        assert_eq!(
            BrotliFontDiff::diff(&plan, &font, &plan, &font),
            Err(DiffError::InternalError(
                "loca is not immediately followed by glyf"
            ))
        );
    }
}
