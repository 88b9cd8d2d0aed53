// Exercises the deepening lifecycle end to end: build, sweep repeatedly,
// and check the invariants that must hold regardless of how far a given
// input can actually be deepened.

use std::sync::Mutex;

static TEST_LOCK: Mutex<()> = Mutex::new(());

const SEED: &[u8] = b"GGGACCTGGTGACCCCAGCCCACGACAGCCAAGCGCCAGCTGAGCTCAGGTGTGAGGAGATCACAGTCCT";

#[test]
fn deepening_never_increases_core_count() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let mut container = lcptools::build(SEED, false);
    let mut previous_len = container.cores.len();

    for _ in 0..6 {
        if !container.deepen_once() {
            break;
        }
        assert!(
            container.cores.len() <= previous_len,
            "a deepening sweep must not grow the core count"
        );
        previous_len = container.cores.len();
    }
}

#[test]
fn deepen_to_a_level_already_reached_is_a_no_op() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let mut container = lcptools::build(SEED, false);
    container.deepen_to(2);
    let level_after_first_call = container.level;
    let cores_snapshot = container.cores.clone();

    let progressed = container.deepen_to(level_after_first_call);
    assert!(!progressed);
    assert_eq!(container.cores.len(), cores_snapshot.len());
    for (a, b) in container.cores.iter().zip(cores_snapshot.iter()) {
        assert_eq!(a.bit_rep, b.bit_rep);
    }
}

#[test]
fn too_short_an_input_never_progresses_past_level_one() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let mut container = lcptools::build(b"ACG", false);
    assert_eq!(container.level, 1);
    container.deepen_to(10);
    assert_eq!(container.level, 1);
}

#[test]
fn deepening_two_equal_containers_keeps_them_equal() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let mut a = lcptools::build(SEED, false);
    let mut b = lcptools::build_with_offset(SEED, 500, false);
    assert!(lcptools::equal(&a, &b));

    a.deepen_to(3);
    b.deepen_to(3);
    assert!(lcptools::equal(&a, &b));
}
