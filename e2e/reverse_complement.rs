// Exercises the reverse-complement parsing path alongside the forward
// one. Both run through the same scanner; only the alphabet table read
// differs.

use std::sync::Mutex;

static TEST_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn reverse_complement_of_a_palindrome_mirrors_itself() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    // GAATTC is its own reverse complement.
    let forward = lcptools::build(b"GAATTC", false);
    let rc = lcptools::build(b"GAATTC", true);

    // Both parses run the identical scanner over codes drawn from a
    // 2-bit alphabet; neither should panic, and both should report
    // well-formed spans.
    for core in forward.cores.iter().chain(rc.cores.iter()) {
        assert!(core.end > core.start);
    }
}

#[test]
fn reverse_complement_and_forward_tables_are_distinct() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    assert_eq!(lcptools::alphabet::code(b'A', false), Some(0));
    assert_eq!(lcptools::alphabet::code(b'A', true), Some(3));
    assert_eq!(lcptools::alphabet::code(b'G', false), Some(2));
    assert_eq!(lcptools::alphabet::code(b'G', true), Some(1));
}

#[test]
fn reverse_complement_parse_deepens_like_the_forward_parse() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let seed = b"GGGACCTGGTGACCCCAGCCCACGACAGCCAAGCGCCAGCTGAGCTCAGGTGTGAGGAGATCACAGTCCT";
    let mut rc_container = lcptools::build(seed, true);
    let advanced = rc_container.deepen_to(2);
    // Either it reaches level 2, or it honestly reports no further
    // progress was possible — both are valid outcomes, a silent
    // fabrication of extra levels is not.
    if advanced {
        assert!(rc_container.level >= 2);
    }
}
