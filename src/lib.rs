//! Hierarchical locally consistent parsing (LCP) over small-alphabet
//! sequences, deepened level by level with deterministic coin tossing.
//!
//! See the individual modules for the design of each piece: [`alphabet`]
//! for symbol tables, [`core`] for the bit-packed core record, [`parse`]
//! for level-1/level-k recognition, [`dct`] for the reduction step that
//! sits between levels, [`container`] for the level-by-level lifecycle,
//! [`chunked`] for windowed building over large streams, and [`codec`]
//! for the on-disk format.

pub mod alphabet;
pub mod chunked;
pub mod codec;
pub mod config;
pub mod container;
pub mod core;
pub mod dct;
pub mod error;
pub mod hash;
pub mod parse;

pub use alphabet::{init_alphabet_default, init_alphabet_from_stream};
pub use chunked::build_chunked;
pub use codec::{dump, load};
pub use container::{equal, memsize, not_equal, ParseContainer};
pub use core::Core;
pub use error::LcpError;

/// Parses `bytes` into a level-1 [`ParseContainer`].
pub fn build(bytes: &[u8], reverse_complement: bool) -> ParseContainer {
    ParseContainer::build(bytes, reverse_complement)
}

/// Parses `bytes` into a level-1 [`ParseContainer`], reporting positions
/// shifted by `offset`.
pub fn build_with_offset(bytes: &[u8], offset: usize, reverse_complement: bool) -> ParseContainer {
    ParseContainer::build_with_offset(bytes, offset, reverse_complement)
}

/// Advances `container` exactly one level. See
/// [`ParseContainer::deepen_once`].
pub fn deepen_once(container: &mut ParseContainer) -> bool {
    container.deepen_once()
}

/// Advances `container` up to `target` levels. See
/// [`ParseContainer::deepen_to`].
pub fn deepen_to(container: &mut ParseContainer, target: u32) -> bool {
    container.deepen_to(target)
}
