//! Coverage entries of the patch mapping table.
//!
//! A patch map describes which subset space each patch extends the font
//! with. Codepoint coverage is stored biased by its minimum value and
//! serialized as a sparse bit set, which keeps the encoded tree shallow for
//! high unicode ranges.

use std::collections::BTreeSet;

use font_types::Tag;
use read_fonts::collections::IntSet;
use sparse_bit_set::{from_sparse_bit_set, to_sparse_bit_set, DecodingError};

/// The subset space covered by a single patch.
///
/// An empty codepoint or feature set means "matches everything" for that
/// axis. Equality is structural.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    pub codepoints: IntSet<u32>,
    pub features: BTreeSet<Tag>,
}

/// One entry of a patch map: a coverage and the index of the patch that
/// provides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchMapEntry {
    pub coverage: Coverage,
    pub patch_index: u32,
}

/// The wire form of a [`Coverage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedCoverage {
    /// Value subtracted from every codepoint before sparse bit set encoding.
    pub bias: u32,
    pub codepoint_set: Vec<u8>,
    /// Feature tags, sorted.
    pub features: Vec<Tag>,
}

impl Coverage {
    pub fn new(codepoints: IntSet<u32>) -> Coverage {
        Coverage {
            codepoints,
            features: BTreeSet::new(),
        }
    }

    /// Encodes the coverage, biasing codepoints by the set minimum.
    pub fn compress(&self) -> CompressedCoverage {
        let features: Vec<Tag> = self.features.iter().copied().collect();
        let Some(bias) = self.codepoints.first() else {
            return CompressedCoverage {
                bias: 0,
                codepoint_set: Vec::new(),
                features,
            };
        };

        let biased: IntSet<u32> = self.codepoints.iter().map(|cp| cp - bias).collect();
        CompressedCoverage {
            bias,
            codepoint_set: to_sparse_bit_set(&biased),
            features,
        }
    }

    /// Decodes a compressed coverage, re-applying the bias.
    pub fn decompress(compressed: &CompressedCoverage) -> Result<Coverage, DecodingError> {
        let biased = from_sparse_bit_set(&compressed.codepoint_set)?;
        let codepoints: IntSet<u32> = biased
            .iter()
            .map(|cp| cp.saturating_add(compressed.bias))
            .collect();
        Ok(Coverage {
            codepoints,
            features: compressed.features.iter().copied().collect(),
        })
    }

    /// True when this coverage intersects the given subset request.
    ///
    /// An unspecified (empty) coverage axis matches anything; an
    /// unspecified input axis matches only coverages that don't constrain
    /// that axis.
    pub fn intersects(&self, codepoints: &IntSet<u32>, features: &BTreeSet<Tag>) -> bool {
        if codepoints.is_empty() && !self.codepoints.is_empty() {
            return false;
        }
        if features.is_empty() && !self.features.is_empty() {
            return false;
        }

        if !codepoints.is_empty()
            && !self.codepoints.is_empty()
            && !self.codepoints.intersects_set(codepoints)
        {
            return false;
        }
        if !features.is_empty()
            && !self.features.is_empty()
            && self.features.intersection(features).next().is_none()
        {
            return false;
        }

        true
    }
}

impl PatchMapEntry {
    pub fn new(coverage: Coverage, patch_index: u32) -> PatchMapEntry {
        PatchMapEntry {
            coverage,
            patch_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codepoints(values: &[u32]) -> IntSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn compress_biases_by_minimum() {
        let coverage = Coverage::new(codepoints(&[0x4E00, 0x4E08, 0x4E31]));
        let compressed = coverage.compress();

        assert_eq!(compressed.bias, 0x4E00);
        // The encoded set covers only the biased values 0, 8, 0x31.
        assert_eq!(
            from_sparse_bit_set(&compressed.codepoint_set).unwrap(),
            codepoints(&[0, 8, 0x31])
        );

        assert_eq!(Coverage::decompress(&compressed).unwrap(), coverage);
    }

    #[test]
    fn compress_empty_coverage() {
        let mut coverage = Coverage::default();
        coverage.features.insert(Tag::new(b"smcp"));

        let compressed = coverage.compress();
        assert_eq!(compressed.bias, 0);
        assert!(compressed.codepoint_set.is_empty());
        assert_eq!(compressed.features, vec![Tag::new(b"smcp")]);

        assert_eq!(Coverage::decompress(&compressed).unwrap(), coverage);
    }

    #[test]
    fn entry_equality_is_structural() {
        let a = PatchMapEntry::new(Coverage::new(codepoints(&[1, 2, 3])), 7);
        let b = PatchMapEntry::new(Coverage::new(codepoints(&[1, 2, 3])), 7);
        let c = PatchMapEntry::new(Coverage::new(codepoints(&[1, 2, 4])), 7);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(
            a,
            PatchMapEntry::new(Coverage::new(codepoints(&[1, 2, 3])), 8)
        );
    }

    #[test]
    fn intersection_rules() {
        let mut coverage = Coverage::new(codepoints(&[10, 20]));
        coverage.features.insert(Tag::new(b"liga"));

        let mut features = BTreeSet::new();
        features.insert(Tag::new(b"liga"));

        assert!(coverage.intersects(&codepoints(&[20, 30]), &features));
        assert!(!coverage.intersects(&codepoints(&[30]), &features));
        assert!(!coverage.intersects(&codepoints(&[20]), &BTreeSet::new()));
        assert!(!coverage.intersects(&IntSet::empty(), &features));

        // Unconstrained coverage matches any request on that axis.
        let unconstrained = Coverage::default();
        assert!(unconstrained.intersects(&IntSet::empty(), &BTreeSet::new()));
        assert!(unconstrained.intersects(&codepoints(&[1]), &BTreeSet::new()));
    }
}
