//! Capability contracts for generic binary diffing and patching.
//!
//! Any pair of values satisfying [`BinaryDiff`] and [`BinaryPatch`] such
//! that `patch(base, diff(base, derived)) == derived` can be plugged into
//! the per table differ. The shared brotli implementations below are the
//! production pair.

use shared_brotli::{shared_brotli_decode, shared_brotli_encode, DEFAULT_QUALITY};

use crate::error::{DiffError, PatchingError};

/// Computes a binary patch that rewrites a base byte string into a derived
/// one.
pub trait BinaryDiff {
    fn diff(&self, base: &[u8], derived: &[u8]) -> Result<Vec<u8>, DiffError>;
}

/// Applies binary patches produced by a matching [`BinaryDiff`].
pub trait BinaryPatch {
    /// Reconstructs the derived byte string from `base` and `patch`.
    ///
    /// `max_size` bounds the size of the reconstruction.
    fn patch(&self, base: &[u8], patch: &[u8], max_size: usize) -> Result<Vec<u8>, PatchingError>;

    /// Applies a group of patches against a single base.
    fn patch_many(
        &self,
        base: &[u8],
        patches: &[Vec<u8>],
        max_size: usize,
    ) -> Result<Vec<u8>, PatchingError>;
}

impl<T: BinaryDiff + ?Sized> BinaryDiff for Box<T> {
    fn diff(&self, base: &[u8], derived: &[u8]) -> Result<Vec<u8>, DiffError> {
        self.as_ref().diff(base, derived)
    }
}

impl<T: BinaryPatch + ?Sized> BinaryPatch for Box<T> {
    fn patch(&self, base: &[u8], patch: &[u8], max_size: usize) -> Result<Vec<u8>, PatchingError> {
        self.as_ref().patch(base, patch, max_size)
    }

    fn patch_many(
        &self,
        base: &[u8],
        patches: &[Vec<u8>],
        max_size: usize,
    ) -> Result<Vec<u8>, PatchingError> {
        self.as_ref().patch_many(base, patches, max_size)
    }
}

/// Produces shared brotli binary diffs: the derived bytes compressed with
/// the base as a raw dictionary.
pub struct SharedBrotliDiff {
    quality: u32,
}

impl SharedBrotliDiff {
    pub fn new() -> SharedBrotliDiff {
        SharedBrotliDiff {
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn with_quality(quality: u32) -> SharedBrotliDiff {
        SharedBrotliDiff { quality }
    }
}

impl Default for SharedBrotliDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryDiff for SharedBrotliDiff {
    fn diff(&self, base: &[u8], derived: &[u8]) -> Result<Vec<u8>, DiffError> {
        let dictionary = (!base.is_empty()).then_some(base);
        Ok(shared_brotli_encode(derived, dictionary, self.quality)?)
    }
}

/// Applies shared brotli binary patches.
#[derive(Default)]
pub struct SharedBrotliPatch;

impl BinaryPatch for SharedBrotliPatch {
    fn patch(&self, base: &[u8], patch: &[u8], max_size: usize) -> Result<Vec<u8>, PatchingError> {
        let dictionary = (!base.is_empty()).then_some(base);
        Ok(shared_brotli_decode(patch, dictionary, max_size)?)
    }

    fn patch_many(
        &self,
        base: &[u8],
        patches: &[Vec<u8>],
        max_size: usize,
    ) -> Result<Vec<u8>, PatchingError> {
        match patches {
            [patch] => self.patch(base, patch, max_size),
            [] => Err(PatchingError::InvalidPatch(
                "Must provide at least one patch.",
            )),
            _ => Err(PatchingError::InvalidPatch(
                "Brotli binary patches cannot be applied independently.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_patch_round_trip() {
        let base = b"hello world hello world";
        let derived = b"hello world hello world and more";

        let patch = SharedBrotliDiff::new().diff(base, derived).unwrap();
        let patched = SharedBrotliPatch
            .patch(base, &patch, derived.len())
            .unwrap();
        assert_eq!(patched, derived);
    }

    #[test]
    fn diff_from_empty_base() {
        let derived = b"brand new table";

        let patch = SharedBrotliDiff::new().diff(&[], derived).unwrap();
        let patched = SharedBrotliPatch
            .patch(&[], &patch, derived.len())
            .unwrap();
        assert_eq!(patched, derived);
    }

    #[test]
    fn patch_many_requires_exactly_one() {
        let base = b"base";
        let derived = b"derived";
        let patch = SharedBrotliDiff::new().diff(base, derived).unwrap();

        assert_eq!(
            SharedBrotliPatch
                .patch_many(base, &[patch.clone()], derived.len())
                .unwrap(),
            derived
        );
        assert!(SharedBrotliPatch.patch_many(base, &[], 10).is_err());
        assert!(SharedBrotliPatch
            .patch_many(base, &[patch.clone(), patch], 10)
            .is_err());
    }

    #[test]
    fn works_as_trait_object() {
        let differ: Box<dyn BinaryDiff> = Box::new(SharedBrotliDiff::new());
        let patcher: Box<dyn BinaryPatch> = Box::new(SharedBrotliPatch);

        let base = b"cmap bytes";
        let derived = b"cmap bytescmap bytes";
        let patch = differ.diff(base, derived).unwrap();
        assert_eq!(patcher.patch(base, &patch, derived.len()).unwrap(), derived);
    }
}
