//! Chunked builder: parse a stream window by window and stitch the
//! per-window containers back into one, instead of holding the whole
//! input's core list in memory at once.
//!
//! Each window is parsed and deepened independently, then merged against
//! the accumulator by matching trailing/leading cores on their `start`
//! position — the overlap between consecutive windows exists precisely
//! so that this match can succeed, trusting the same local-consistency
//! property the level-1 and level-k parsers are built on: two windows
//! that cover the same stretch of input produce the same cores there.

use crate::container::ParseContainer;
use crate::core::Core;

/// Builds a container covering all of `input` at `target_level`,
/// processing it in windows of roughly `window` bytes rather than all at
/// once. `window` is floored at 1; windows overlap by `window / 8` bytes
/// (at least 4, when the input allows it) to give the merge step
/// something to match on.
pub fn build_chunked(
    input: &[u8],
    target_level: u32,
    window: usize,
    reverse_complement: bool,
) -> ParseContainer {
    let n = input.len();
    let window = window.max(1);
    let overlap_bytes = (window / 8).max(4.min(n)).min(window.saturating_sub(1).max(0));

    let mut acc: Vec<Core> = Vec::new();
    let mut processed_end = 0usize;
    // Tracks the lowest level any window actually reached, since a
    // window too short to sweep further reports `deepen_to` failing
    // partway — the stitched container should never claim a level no
    // constituent window actually reached.
    let mut achieved_level = target_level;

    while processed_end < n {
        let start = processed_end.saturating_sub(overlap_bytes);
        let end = (start + window).min(n);

        let mut piece = ParseContainer::build_with_offset(&input[start..end], start, reverse_complement);
        piece.deepen_to(target_level);
        achieved_level = achieved_level.min(piece.level);

        let overlap = find_overlap(&acc, &piece.cores);
        if overlap > 0 || acc.is_empty() {
            log::trace!(
                "chunked: window [{}, {}) merged with {} overlapping core(s)",
                start,
                end,
                overlap
            );
            acc.truncate(acc.len() - overlap);
            acc.extend(piece.cores);
        } else {
            log::trace!(
                "chunked: window [{}, {}) found no matching overlap, appending past the seam",
                start,
                end
            );
            let already_covered = acc.last().map(|c| c.end).unwrap_or(0);
            acc.extend(piece.cores.into_iter().filter(|c| c.start >= already_covered));
        }

        if end >= n {
            break;
        }
        processed_end = end;
    }

    ParseContainer {
        level: if acc.is_empty() { 1 } else { achieved_level },
        cores: acc,
    }
}

/// Looks for the accumulator's trailing 2 cores matching the new piece's
/// leading 2 cores by `start` position, falling back to a 1-core match.
/// Returns the number of cores to drop from the accumulator's tail
/// before appending the new piece (0 if no match was found at all).
fn find_overlap(acc: &[Core], new: &[Core]) -> usize {
    for k in [2usize, 1usize] {
        if acc.len() >= k && new.len() >= k {
            let matches = acc[acc.len() - k..]
                .iter()
                .zip(new[..k].iter())
                .all(|(a, b)| a.start == b.start);
            if matches {
                return k;
            }
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn seq() -> &'static [u8] {
        b"GGGACCTGGTGACCCCAGCCCACGACAGCCAAGCGCCAGCTGAGCTCAGGTGTGAGGAGATCACAGTCCT"
    }

    #[test]
    fn single_window_matches_direct_build() {
        let _g = TEST_LOCK.lock().unwrap();
        crate::alphabet::init_alphabet_default(false);
        let direct = ParseContainer::build(seq(), false);
        let chunked = build_chunked(seq(), 1, seq().len() + 10, false);
        assert_eq!(direct.cores.len(), chunked.cores.len());
        for (a, b) in direct.cores.iter().zip(chunked.cores.iter()) {
            assert_eq!(a.bit_rep, b.bit_rep);
            assert_eq!(a.start, b.start);
        }
    }

    #[test]
    fn multi_window_covers_the_whole_input() {
        let _g = TEST_LOCK.lock().unwrap();
        crate::alphabet::init_alphabet_default(false);
        let chunked = build_chunked(seq(), 1, 20, false);
        assert!(!chunked.cores.is_empty());
        let first = chunked.cores.first().unwrap();
        let last = chunked.cores.last().unwrap();
        assert_eq!(first.start, 0);
        assert!(last.end <= seq().len());
        assert!(last.end > seq().len() / 2);
    }

    #[test]
    fn empty_input_yields_empty_container() {
        let _g = TEST_LOCK.lock().unwrap();
        crate::alphabet::init_alphabet_default(false);
        let chunked = build_chunked(b"", 1, 16, false);
        assert!(chunked.cores.is_empty());
    }
}
