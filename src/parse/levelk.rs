//! Level-k parsing: cores to composed cores.
//!
//! Identical to level-1 in shape — same scanner, same cursor-advance rule
//! — except the alphabet is core `bit_rep` values instead of symbol
//! codes, and there is no invalid-code concept: every position here is a
//! real core, so the suppression check SSEQ otherwise applies is dropped
//! and a gap between two recognized spans always bridges.

use crate::core::Core;

use super::scanner;

/// Parses a sequence of cores one level deeper, composing each recognized
/// span into a single core. Returns an empty vector for fewer
/// than 3 input cores.
pub fn parse_levelk(cores: &[Core]) -> Vec<Core> {
    if cores.len() < 3 {
        return Vec::new();
    }

    let codes: Vec<Option<u64>> = cores.iter().map(|c| Some(c.bit_rep)).collect();
    let spans = scanner::scan(&codes, false);

    spans
        .into_iter()
        .map(|span| Core::compose(&cores[span.start..span.end]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(n: u8) -> Core {
        Core::leaf(n % 4, (n + 1) % 4, (n + 2) % 4, 3, n as usize, n as usize + 3)
    }

    #[test]
    fn short_input_produces_no_cores() {
        let cores = vec![leaf(0), leaf(1)];
        assert!(parse_levelk(&cores).is_empty());
    }

    #[test]
    fn composed_cores_are_never_mistaken_for_level1() {
        let cores: Vec<Core> = (0..6).map(leaf).collect();
        for composed in parse_levelk(&cores) {
            assert!(!composed.is_level1());
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let cores: Vec<Core> = (0..8).map(leaf).collect();
        let a = parse_levelk(&cores);
        let b = parse_levelk(&cores);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.bit_rep, y.bit_rep);
        }
    }

    #[test]
    fn a_gap_between_two_recognized_spans_still_bridges() {
        // Every bit_rep here is a real core (never `None`), so the only
        // way to tell SSEQ fired is by the composed span count: with
        // bridging dropped entirely the gap between the two recognized
        // patterns would be lost instead of composed into its own core.
        let codes: Vec<Core> = vec![
            Core::leaf(3, 1, 2, 3, 0, 3),
            Core::leaf(1, 2, 3, 3, 3, 6),
            Core::leaf(2, 3, 0, 3, 6, 9),
            Core::leaf(3, 0, 1, 3, 9, 12),
            Core::leaf(0, 1, 2, 3, 12, 15),
            Core::leaf(1, 0, 3, 3, 15, 18),
            Core::leaf(3, 1, 2, 3, 18, 21),
            Core::leaf(1, 2, 3, 3, 21, 24),
        ];
        let composed = parse_levelk(&codes);
        assert!(!composed.is_empty());
    }
}
