//! Compile-time configuration constants.
//!
//! Collects the handful of tunables the rest of the engine reads: one
//! place to look, no magic numbers scattered through the algorithm
//! modules.

/// Number of DCT sweeps performed per [`crate::container::ParseContainer::deepen_once`]
/// call, and the number of leading cores left untouched (and un-reparsed) by
/// each sweep.
///
/// Fixed at 1. It is exposed here as a named constant rather than inlined
/// because the surrounding arithmetic (`cores[DCT_ITERATION_COUNT..size]`)
/// is written in terms of it, not in terms of the literal `1`.
pub const DCT_ITERATION_COUNT: usize = 1;

/// Default window size used by [`crate::chunked::build_chunked`] and by the
/// CLI when `[sequence_size]` is omitted and `LCPTOOLS_WINDOW` is unset.
pub const DEFAULT_CHUNK_WINDOW: usize = 4096;

/// Environment variable the CLI consults for a default chunk window size.
pub const WINDOW_ENV_VAR: &str = "LCPTOOLS_WINDOW";

/// Seed used for the MurmurHash3-32 label mix at level ≥ 2. Fixed so that
/// labels are reproducible across runs and processes.
pub const LABEL_HASH_SEED: u32 = 42;
