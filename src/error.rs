//! Error types for the LCP engine.
//!
//! One plain enum, a hand-written `Display`, and a blanket
//! `std::error::Error` impl — no `anyhow` dependency here, that stays at
//! the CLI boundary (`src/cli`).

use core::fmt;

/// Errors surfaced by the engine's fallible operations.
///
/// `InsufficientInput` and "no progress" are deliberately *not* variants
/// here: the former is represented as an empty core list, the latter
/// as a `bool` return from `deepen_once`/`deepen_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcpError {
    /// Alphabet construction was refused (malformed line, or a code that
    /// does not fit in 2 bits). The process-wide tables are left
    /// unchanged.
    InvalidAlphabet,
    /// A binary dump ended before the declared `size` worth of core
    /// records was read.
    TruncatedInput,
    /// A binary dump's header declares a `size` that cannot possibly be
    /// backed by the remaining bytes (e.g. the byte count it implies
    /// overflows `usize`).
    InvalidHeader,
}

impl LcpError {
    fn message(&self) -> &'static str {
        match self {
            LcpError::InvalidAlphabet => "alphabet table is malformed or exceeds 2-bit codes",
            LcpError::TruncatedInput => "binary dump ended before the declared core count",
            LcpError::InvalidHeader => "binary dump header declares an impossible core count",
        }
    }
}

impl fmt::Display for LcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LcpError {}
