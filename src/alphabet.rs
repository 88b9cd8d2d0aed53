//! Forward and reverse-complement symbol→code tables.
//!
//! The two 128-entry tables are process-wide: written once at startup (or
//! by a later `init_*` call) and read-only afterward, mirroring the
//! "initialize once before use" lifecycle the design notes call for rather
//! than threading an `Alphabet` handle through every call in the engine.
//! A `RwLock` behind a `OnceLock` gives tests a hook to swap the tables
//! without reaching for `unsafe`.

use std::sync::{OnceLock, RwLock, RwLockReadGuard};

use crate::error::LcpError;

/// Sentinel stored in a code table slot with no mapping.
pub const INVALID: u8 = 0xFF;

/// Largest code value representable in 2 bits.
const MAX_CODE: u8 = 3;

#[derive(Clone)]
struct Tables {
    forward: [u8; 128],
    reverse_complement: [u8; 128],
}

impl Tables {
    fn empty() -> Self {
        Tables {
            forward: [INVALID; 128],
            reverse_complement: [INVALID; 128],
        }
    }

    /// The hard-coded DNA mapping: A=0, C=1, G=2, T=3; rc: A↔T, C↔G.
    /// Lowercase accepted.
    fn dna_default() -> Self {
        let mut t = Tables::empty();
        let entries: [(u8, u8, u8); 8] = [
            (b'A', 0, 3),
            (b'a', 0, 3),
            (b'C', 1, 2),
            (b'c', 1, 2),
            (b'G', 2, 1),
            (b'g', 2, 1),
            (b'T', 3, 0),
            (b't', 3, 0),
        ];
        for (ch, fwd, rc) in entries {
            t.forward[ch as usize] = fwd;
            t.reverse_complement[ch as usize] = rc;
        }
        t
    }

    fn max_code(&self) -> u8 {
        self.forward
            .iter()
            .chain(self.reverse_complement.iter())
            .filter(|&&c| c != INVALID)
            .copied()
            .max()
            .unwrap_or(0)
    }
}

static TABLES: OnceLock<RwLock<Tables>> = OnceLock::new();

fn tables() -> &'static RwLock<Tables> {
    TABLES.get_or_init(|| RwLock::new(Tables::dna_default()))
}

fn read() -> RwLockReadGuard<'static, Tables> {
    tables().read().expect("alphabet table lock poisoned")
}

/// Fills the two global tables with the hard-coded DNA mapping.
pub fn init_alphabet_default(verbose: bool) {
    let fresh = Tables::dna_default();
    *tables().write().expect("alphabet table lock poisoned") = fresh;
    if verbose {
        log::debug!("alphabet: loaded default DNA mapping, max_code={}", MAX_CODE);
    }
}

/// Replaces the global tables with one parsed from `<ch> <fwd> <rc>` lines.
///
/// On failure the previously-installed tables are left untouched.
pub fn init_alphabet_from_stream(bytes: &[u8], verbose: bool) -> Result<(), LcpError> {
    let text = std::str::from_utf8(bytes).map_err(|_| LcpError::InvalidAlphabet)?;
    let mut fresh = Tables::empty();
    let mut count = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let ch = parts.next().ok_or(LcpError::InvalidAlphabet)?;
        let fwd = parts.next().ok_or(LcpError::InvalidAlphabet)?;
        let rc = parts.next().ok_or(LcpError::InvalidAlphabet)?;
        if parts.next().is_some() {
            return Err(LcpError::InvalidAlphabet);
        }
        let ch_byte = {
            let mut chars = ch.chars();
            let c = chars.next().ok_or(LcpError::InvalidAlphabet)?;
            if chars.next().is_some() || !c.is_ascii() {
                return Err(LcpError::InvalidAlphabet);
            }
            c as u8
        };
        let fwd_code: u8 = fwd.parse().map_err(|_| LcpError::InvalidAlphabet)?;
        let rc_code: u8 = rc.parse().map_err(|_| LcpError::InvalidAlphabet)?;
        if ch_byte as usize >= 128 {
            return Err(LcpError::InvalidAlphabet);
        }
        fresh.forward[ch_byte as usize] = fwd_code;
        fresh.reverse_complement[ch_byte as usize] = rc_code;
        count += 1;
    }

    if count == 0 || fresh.max_code() > MAX_CODE {
        return Err(LcpError::InvalidAlphabet);
    }

    let max_code = fresh.max_code();
    *tables().write().expect("alphabet table lock poisoned") = fresh;
    if verbose {
        log::debug!(
            "alphabet: loaded {} entries from stream, max_code={}",
            count,
            max_code
        );
    }
    Ok(())
}

/// Looks up the code for `byte` in the forward or reverse-complement
/// table. Returns `None` for bytes with no mapping (stream discontinuity).
#[inline]
pub fn code(byte: u8, reverse_complement: bool) -> Option<u8> {
    if byte >= 128 {
        return None;
    }
    let tables = read();
    let v = if reverse_complement {
        tables.reverse_complement[byte as usize]
    } else {
        tables.forward[byte as usize]
    };
    if v == INVALID {
        None
    } else {
        Some(v)
    }
}

/// `true` if `byte` has a mapping in the selected table.
#[inline]
pub fn is_valid(byte: u8, reverse_complement: bool) -> bool {
    code(byte, reverse_complement).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Alphabet state is global; serialize tests that mutate it.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn default_forward_mapping() {
        let _g = TEST_LOCK.lock().unwrap();
        init_alphabet_default(false);
        assert_eq!(code(b'A', false), Some(0));
        assert_eq!(code(b'C', false), Some(1));
        assert_eq!(code(b'G', false), Some(2));
        assert_eq!(code(b'T', false), Some(3));
        assert_eq!(code(b'a', false), Some(0));
        assert_eq!(code(b'N', false), None);
    }

    #[test]
    fn reverse_complement_is_involution() {
        let _g = TEST_LOCK.lock().unwrap();
        init_alphabet_default(false);
        for &(fwd_ch, rc_ch) in &[(b'A', b'T'), (b'C', b'G'), (b'G', b'C'), (b'T', b'A')] {
            let f = code(fwd_ch, false).unwrap();
            let r = code(fwd_ch, true).unwrap();
            let expected = code(rc_ch, false).unwrap();
            assert_eq!(r, expected);
            let _ = f;
        }
    }

    #[test]
    fn from_stream_rejects_out_of_range_code() {
        let _g = TEST_LOCK.lock().unwrap();
        init_alphabet_default(false);
        let err = init_alphabet_from_stream(b"A 0 3\nC 4 2\n", false).unwrap_err();
        assert_eq!(err, LcpError::InvalidAlphabet);
        // previous (default) table must remain installed
        assert_eq!(code(b'A', false), Some(0));
    }

    #[test]
    fn from_stream_accepts_custom_table() {
        let _g = TEST_LOCK.lock().unwrap();
        init_alphabet_from_stream(b"A 0 1\nB 1 0\n", false).unwrap();
        assert_eq!(code(b'A', false), Some(0));
        assert_eq!(code(b'B', true), Some(0));
        init_alphabet_default(false); // restore for other tests
    }

    #[test]
    fn from_stream_rejects_malformed_line() {
        let _g = TEST_LOCK.lock().unwrap();
        init_alphabet_default(false);
        let err = init_alphabet_from_stream(b"A 0\n", false).unwrap_err();
        assert_eq!(err, LcpError::InvalidAlphabet);
    }
}
