//! Parse container and deepening lifecycle.
//!
//! A container holds one level's worth of cores for a single sequence.
//! `deepen_once` advances it exactly one level via one DCT sweep plus one
//! level-k reparse; `deepen_to` repeats that until the target level is
//! reached or a sweep stops producing new cores, whichever comes first.

use crate::config;
use crate::core::Core;
use crate::dct;
use crate::parse;

#[derive(Debug, Clone)]
pub struct ParseContainer {
    pub level: u32,
    pub cores: Vec<Core>,
}

impl ParseContainer {
    /// Builds a level-1 container from `bytes`, reporting positions from 0.
    pub fn build(bytes: &[u8], reverse_complement: bool) -> ParseContainer {
        ParseContainer::build_with_offset(bytes, 0, reverse_complement)
    }

    /// Builds a level-1 container from `bytes`, reporting positions
    /// shifted by `offset` — used by the chunked builder to stitch
    /// windows of a larger stream back into one coordinate space.
    pub fn build_with_offset(bytes: &[u8], offset: usize, reverse_complement: bool) -> ParseContainer {
        let cores = parse::level1::parse_level1(bytes, offset, reverse_complement);
        ParseContainer { level: 1, cores }
    }

    /// Advances the container exactly one level: one DCT sweep over the
    /// cores past the untouched prefix, followed by one level-k reparse
    /// of the result.
    ///
    /// Returns `false` when there are too few cores to sweep at all, or
    /// when the reparse recognizes nothing — both are "no progress"
    /// rather than errors. The former still marks the container empty
    /// and advances `level`, so a caller retrying `deepen_to` doesn't
    /// keep re-attempting the same no-op level.
    pub fn deepen_once(&mut self) -> bool {
        if self.cores.len() < config::DCT_ITERATION_COUNT + 1 {
            log::debug!(
                "deepen_once: level {} has only {} cores, nothing to sweep",
                self.level,
                self.cores.len()
            );
            self.cores.clear();
            self.level += 1;
            return false;
        }

        let mut reduced = self.cores.clone();
        dct::dct_pass(&mut reduced, config::DCT_ITERATION_COUNT);
        let composed = parse::levelk::parse_levelk(&reduced[config::DCT_ITERATION_COUNT..]);

        if composed.is_empty() {
            log::debug!(
                "deepen_once: level {} made no progress ({} cores)",
                self.level,
                self.cores.len()
            );
            return false;
        }

        let mut next = Vec::with_capacity(config::DCT_ITERATION_COUNT + composed.len());
        next.extend_from_slice(&self.cores[..config::DCT_ITERATION_COUNT]);
        next.extend(composed);
        self.cores = next;
        self.level += 1;
        log::debug!("deepen_once: reached level {} with {} cores", self.level, self.cores.len());
        true
    }

    /// Calls [`ParseContainer::deepen_once`] until `target` is reached or
    /// a sweep stops making progress. Returns `true` if the level
    /// actually advanced at all.
    pub fn deepen_to(&mut self, target: u32) -> bool {
        if self.level >= target {
            return false;
        }
        let mut progressed = false;
        while self.level < target {
            if !self.deepen_once() {
                break;
            }
            progressed = true;
        }
        progressed
    }
}

/// `true` if `a` and `b` hold the same core sequence, bit-for-bit,
/// irrespective of their recorded `start`/`end` positions.
pub fn equal(a: &ParseContainer, b: &ParseContainer) -> bool {
    a.cores.len() == b.cores.len()
        && a.cores
            .iter()
            .zip(b.cores.iter())
            .all(|(x, y)| x.bit_rep == y.bit_rep)
}

pub fn not_equal(a: &ParseContainer, b: &ParseContainer) -> bool {
    !equal(a, b)
}

/// Approximate resident size of a container's core list, in bytes.
pub fn memsize(container: &ParseContainer) -> usize {
    std::mem::size_of::<ParseContainer>() + container.cores.len() * std::mem::size_of::<Core>()
}
