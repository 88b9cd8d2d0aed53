// End-to-end build -> deepen -> dump -> load roundtrip.

use std::sync::Mutex;

static TEST_LOCK: Mutex<()> = Mutex::new(());

const SEED: &[u8] = b"GGGACCTGGTGACCCCAGCCCACGACAGCCAAGCGCCAGCTGAGCTCAGGTGTGAGGAGATCACAGTCCT";

#[test]
fn dump_then_load_reproduces_a_deepened_container() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let mut built = lcptools::build(SEED, false);
    built.deepen_to(3);

    let bytes = lcptools::dump(&built);
    let loaded = lcptools::load(&bytes).expect("a dump just produced by this crate must load back");

    assert_eq!(loaded.level, built.level);
    assert!(lcptools::equal(&built, &loaded));
    assert_eq!(loaded.cores.len(), built.cores.len());
    for (a, b) in built.cores.iter().zip(loaded.cores.iter()) {
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.bit_size, b.bit_size);
    }
}

#[test]
fn chunked_build_also_roundtrips_through_the_codec() {
    let _g = TEST_LOCK.lock().unwrap();
    lcptools::init_alphabet_default(false);

    let chunked = lcptools::build_chunked(SEED, 2, 24, false);
    let bytes = lcptools::dump(&chunked);
    let loaded = lcptools::load(&bytes).unwrap();
    assert!(lcptools::equal(&chunked, &loaded));
}

#[test]
fn loading_truncated_or_malformed_bytes_never_panics() {
    lcptools::init_alphabet_default(false);
    let built = lcptools::build(SEED, false);
    let bytes = lcptools::dump(&built);

    for cut in [0, 1, 4, 8, bytes.len() / 2] {
        let slice = &bytes[..cut.min(bytes.len())];
        let result = lcptools::load(slice);
        assert!(result.is_err() || slice.len() >= bytes.len());
    }
}
