// Verifies the defining property of locally consistent parsing: a
// sequence embedded with flanking context still produces, away from its
// own truncation edges, the same cores it would parsing on its own.

use std::sync::Mutex;

static TEST_LOCK: Mutex<()> = Mutex::new(());

const SEED: &[u8] = b"GGGACCTGGTGACCCCAGCCCACGACAGCCAAGCGCCAGCTGAGCTCAGGTGTGAGGAGATCACAGTCCT";

#[test]
fn interior_cores_survive_added_context() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let bare = lcptools::build(SEED, false);
    assert!(!bare.cores.is_empty());

    let mut padded = Vec::new();
    padded.extend_from_slice(b"TTAACCGGTT");
    padded.extend_from_slice(SEED);
    padded.extend_from_slice(b"TTAACCGGTT");
    let padded_container = lcptools::build_with_offset(&padded, 0, false);

    let interior: Vec<_> = bare
        .cores
        .iter()
        .filter(|c| c.start > 0 && c.end < SEED.len())
        .collect();
    assert!(!interior.is_empty(), "expected at least one non-boundary core");

    for core in interior {
        assert!(
            padded_container.cores.iter().any(|c| c.bit_rep == core.bit_rep),
            "interior core with bit_rep {:#x} did not reappear once embedded",
            core.bit_rep
        );
    }
}

#[test]
fn same_motif_in_two_different_contexts_shares_interior_cores() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let motif = b"GACCTGGTGACCC";
    let mut in_context_a = b"TTAACC".to_vec();
    in_context_a.extend_from_slice(motif);
    in_context_a.extend_from_slice(b"CCAATT");

    let mut in_context_b = b"GGTTCC".to_vec();
    in_context_b.extend_from_slice(motif);
    in_context_b.extend_from_slice(b"AAGGTT");

    let a = lcptools::build(&in_context_a, false);
    let b = lcptools::build(&in_context_b, false);

    let motif_start = 6;
    let motif_end = motif_start + motif.len();
    let interior_a: Vec<_> = a
        .cores
        .iter()
        .filter(|c| c.start > motif_start && c.end < motif_end)
        .collect();
    assert!(!interior_a.is_empty());

    for core in interior_a {
        assert!(
            b.cores.iter().any(|c| c.bit_rep == core.bit_rep),
            "motif-interior core with bit_rep {:#x} did not reappear in a different context",
            core.bit_rep
        );
    }
}

#[test]
fn deepening_preserves_core_ordering_monotonicity() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let mut container = lcptools::build(SEED, false);
    container.deepen_to(3);

    for window in container.cores.windows(2) {
        assert!(window[0].start <= window[1].start, "cores must stay in input order");
        assert!(window[0].end <= window[1].end);
    }
}
