//! Produces and applies shared brotli patches between subsets of a font.
//!
//! This is the encoder side companion of the client portions of the
//! Incremental Font Transfer standard
//! (<https://w3c.github.io/IFT/Overview.html>): given a base subset and a
//! derived subset of the same source font it emits a compact patch which,
//! decoded against the base as a raw shared dictionary, reproduces the
//! derived subset byte for byte.
//!
//! Two diff strategies are provided:
//!
//! 1. [`BrotliFontDiff`] exploits the structure of the glyph tables: glyph
//!    ranges already present in the base are transmitted as backward
//!    references into it, only novel glyph data is compressed fresh.
//! 2. [`PerTableDiff`](per_table::PerTableDiff) wraps a generic binary
//!    differ applied table by table, producing a keyed patch container.
//!
//! The mapping table coverage entries that accompany patches live in
//! [`patch_map`].

pub mod binary_diff;
pub mod error;
pub mod font;
pub mod font_diff;
pub mod patch_map;
pub mod per_table;
pub mod plan;

mod table_range;

pub use binary_diff::{BinaryDiff, BinaryPatch, SharedBrotliDiff, SharedBrotliPatch};
pub use error::{DiffError, PatchingError};
pub use font::sort_for_diff;
pub use font_diff::BrotliFontDiff;
pub use plan::SubsetPlan;
