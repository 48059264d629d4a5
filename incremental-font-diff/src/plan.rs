//! Glyph id mappings of a subset plan.

use std::collections::HashMap;

/// The glyph id mappings produced when a font is reduced to a subset.
///
/// Mirrors the data a subsetter exposes for its plan: glyph ids in the
/// subset ("new") mapped to and from glyph ids in the original font
/// ("old"). Glyphs dropped by the subset simply have no entry.
#[derive(Debug, Clone, Default)]
pub struct SubsetPlan {
    new_to_old: HashMap<u32, u32>,
    old_to_new: HashMap<u32, u32>,
}

impl SubsetPlan {
    /// Builds a plan from (new gid, old gid) pairs.
    pub fn from_pairs<I: IntoIterator<Item = (u32, u32)>>(pairs: I) -> SubsetPlan {
        let mut plan = SubsetPlan::default();
        for (new_gid, old_gid) in pairs {
            plan.new_to_old.insert(new_gid, old_gid);
            plan.old_to_new.insert(old_gid, new_gid);
        }
        plan
    }

    /// The plan of a font that kept all of its glyphs.
    pub fn identity(glyph_count: u32) -> SubsetPlan {
        Self::from_pairs((0..glyph_count).map(|gid| (gid, gid)))
    }

    /// The glyph id in the original font for a subset glyph id.
    pub fn old_gid(&self, new_gid: u32) -> Option<u32> {
        self.new_to_old.get(&new_gid).copied()
    }

    /// The glyph id in the subset for an original font glyph id.
    pub fn new_gid(&self, old_gid: u32) -> Option<u32> {
        self.old_to_new.get(&old_gid).copied()
    }

    /// Number of glyphs with an entry in the mapping.
    pub fn mapping_len(&self) -> usize {
        self.new_to_old.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mappings() {
        let plan = SubsetPlan::from_pairs([(0, 0), (1, 4), (2, 9)]);

        assert_eq!(plan.old_gid(1), Some(4));
        assert_eq!(plan.new_gid(9), Some(2));
        assert_eq!(plan.old_gid(3), None);
        assert_eq!(plan.new_gid(1), None);
        assert_eq!(plan.mapping_len(), 3);
    }

    #[test]
    fn identity() {
        let plan = SubsetPlan::identity(3);
        for gid in 0..3 {
            assert_eq!(plan.old_gid(gid), Some(gid));
            assert_eq!(plan.new_gid(gid), Some(gid));
        }
        assert_eq!(plan.old_gid(3), None);
    }
}
