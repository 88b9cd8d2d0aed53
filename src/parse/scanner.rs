//! Local-pattern recognition shared by the level-1 and level-k parsers.
//!
//! Both parsers walk a sequence and emit a span wherever it contains one
//! of four recognizable local patterns (LMIN, LMAX, RINT, SSEQ). The only
//! thing that differs between them is the element type being scanned
//! (symbol codes with gaps for level-1, always-valid core bit-reps for
//! level-k) and whether a gap between two recognized spans is ever
//! suppressed for containing an invalid element. Rather than duplicate
//! the walk twice, one generic `scan` takes both as parameters.

/// A half-open `[start, end)` range of positions recognized as one core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Scans `codes` for LMIN, LMAX, RINT and SSEQ spans, left to right.
///
/// `codes[i] == None` marks a position with no valid element at all (a
/// non-alphabet byte, for level-1); level-k callers never produce `None`
/// and so never hit that branch.
///
/// After a span is emitted the cursor resumes at the span's `end` — the
/// literal reading of "the cursor advances to its end" — rather than
/// backtracking into the span, which is what keeps local consistency: a
/// span's recognition depends only on the few elements inside its own
/// window, never on where a previous span happened to stop.
///
/// Whenever the cursor is about to emit a span starting later than where
/// the previous span ended, the gap between them is bridged with an SSEQ
/// span first, one position of overlap on each side. `suppress_on_invalid`
/// controls whether that bridge is withheld when an invalid element lies
/// strictly inside the gap: level-1 sets it, since a real discontinuity in
/// the input shouldn't be silently spanned; level-k clears it, since there
/// is no invalid-element concept once the alphabet is closed under
/// composition, so a gap between two recognized cores always bridges.
pub fn scan<T: Ord + Copy>(codes: &[Option<T>], suppress_on_invalid: bool) -> Vec<Span> {
    let n = codes.len();
    let mut spans = Vec::new();
    if n < 3 {
        return spans;
    }

    let mut i = 0usize;
    let mut last_end: Option<usize> = None;

    while i < n {
        if codes[i].is_none() {
            i += 1;
            continue;
        }

        if let Some((start, end)) = recognize(codes, i, n) {
            if let Some(p) = last_end {
                if p < start {
                    if let Some(bridge_span) = bridge(codes, p, start, suppress_on_invalid) {
                        spans.push(bridge_span);
                    }
                }
            }
            spans.push(Span { start, end });
            last_end = Some(end);
            i = end;
            continue;
        }

        i += 1;
    }

    spans
}

/// Tries LMIN, then LMAX, then RINT at position `i`, returning the
/// recognized `(start, end)` span of whichever matches first.
fn recognize<T: Ord + Copy>(codes: &[Option<T>], i: usize, n: usize) -> Option<(usize, usize)> {
    // LMIN: the middle element dips strictly below both neighbors.
    if i + 3 <= n {
        if let (Some(a), Some(b), Some(c)) = (codes[i], codes[i + 1], codes[i + 2]) {
            if b < a && b < c {
                return Some((i, i + 3));
            }
        }
    }

    // LMAX: the middle element rises strictly above both neighbors,
    // guarded by the elements just outside the window on either side so a
    // local peak that's merely the tail of a longer climb isn't double
    // counted. Structurally unsatisfiable at the very start or within 3
    // elements of the end of the scanned range.
    if i >= 1 && i + 3 < n {
        if let (Some(prev), Some(a), Some(b), Some(c), Some(next)) =
            (codes[i - 1], codes[i], codes[i + 1], codes[i + 2], codes[i + 3])
        {
            if a < b && b > c && prev <= a && c >= next {
                return Some((i, i + 3));
            }
        }
    }

    // RINT: a flanking element distinct from the run that follows it,
    // closed by one trailing guard position once the run ends.
    if i + 1 < n {
        if let (Some(a), Some(b)) = (codes[i], codes[i + 1]) {
            if a != b {
                let mut m = 1usize;
                while i + 1 + m < n && codes[i + 1 + m] == Some(b) {
                    m += 1;
                }
                if i + 2 + m < n {
                    return Some((i, i + 2 + m));
                }
            }
        }
    }

    None
}

/// Attempts an SSEQ span bridging the gap `[p, i)` between the previously
/// emitted span's end `p` and the about-to-emit span's start `i`, back to
/// the element before `p` and forward to the element at `i`. Returns
/// `None` when there's no actual gap (`p >= i`), when either flank falls
/// outside the scanned range, or when `suppress_on_invalid` is set and an
/// invalid element lies strictly inside `(p - 1, i + 1)`.
fn bridge<T: Ord + Copy>(codes: &[Option<T>], p: usize, i: usize, suppress_on_invalid: bool) -> Option<Span> {
    if p >= i || p < 1 || i + 1 > codes.len() {
        return None;
    }
    if codes[p - 1].is_none() {
        return None;
    }
    if suppress_on_invalid && codes[p..=i].iter().any(|c| c.is_none()) {
        return None;
    }
    Some(Span { start: p - 1, end: i + 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_yields_nothing() {
        let codes = [Some(1u8), Some(2u8)];
        assert!(scan(&codes, true).is_empty());
    }

    #[test]
    fn recognizes_local_minimum() {
        let codes = [Some(3u8), Some(1u8), Some(2u8)];
        let spans = scan(&codes, true);
        assert_eq!(spans, vec![Span { start: 0, end: 3 }]);
    }

    #[test]
    fn recognizes_guarded_local_maximum() {
        // prev <= a and c >= next must both hold for the peak at index 2.
        let codes = [
            Some(1u8),
            Some(1u8),
            Some(3u8),
            Some(2u8),
            Some(2u8),
        ];
        let spans = scan(&codes, true);
        assert!(spans.iter().any(|s| *s == Span { start: 1, end: 4 }));
    }

    #[test]
    fn rejects_maximum_too_close_to_either_edge() {
        // Same shape as the recognized case, but with nothing before index
        // 0 or after the window, so the neighbor guard can't be satisfied.
        let codes = [Some(1u8), Some(3u8), Some(2u8)];
        let spans = scan(&codes, true);
        assert!(spans.is_empty());
    }

    #[test]
    fn lmin_at_the_earlier_position_preempts_a_would_be_maximum() {
        // Failing the LMAX neighbor guard (prev <= a) always coincides
        // with an LMIN match one position earlier, since prev > a and
        // a < b is exactly LMIN's shape at i - 1. LMIN wins by being
        // recognized first, so the would-be maximum never fires at all.
        let codes = [
            Some(5u8),
            Some(1u8),
            Some(3u8),
            Some(2u8),
            Some(2u8),
        ];
        let spans = scan(&codes, true);
        assert_eq!(spans, vec![Span { start: 0, end: 3 }]);
    }

    #[test]
    fn recognizes_run_with_leading_flank_and_trailing_guard() {
        // flank(1) != run-start(2); run is just 2 (m = 1); trailing guard
        // at index 3 must exist but is not itself part of the span.
        let codes = [Some(1u8), Some(2u8), Some(2u8), Some(5u8)];
        let spans = scan(&codes, true);
        assert_eq!(spans, vec![Span { start: 0, end: 3 }]);
    }

    #[test]
    fn run_without_a_trailing_guard_is_not_recognized() {
        // The run extends all the way to the end with nothing left over
        // to serve as the trailing guard, so RINT must not fire here.
        let codes = [Some(1u8), Some(2u8), Some(2u8)];
        let spans = scan(&codes, true);
        assert!(spans.is_empty());
    }

    #[test]
    fn suppresses_the_bridge_when_an_invalid_element_lies_inside_the_gap() {
        let codes = [
            Some(3u8),
            Some(1u8),
            Some(2u8),
            None,
            Some(9u8),
            Some(3u8),
            Some(1u8),
            Some(2u8),
        ];
        let spans = scan(&codes, true);
        // The two LMIN spans must still be emitted, but no span may cross
        // the invalid position at index 3.
        assert!(spans.iter().all(|s| s.start > 3 || s.end <= 3));
    }

    #[test]
    fn bridges_the_gap_regardless_of_invalid_elements_when_not_suppressed() {
        // Same shape as the suppressed case above, but scanned with
        // suppress_on_invalid = false — the flag level-k passes, since it
        // never has an invalid-element concept to suppress on in the
        // first place. The bridge must fire even though the gap contains
        // a `None`.
        let codes = [
            Some(3u8),
            Some(1u8),
            Some(2u8),
            None,
            None,
            Some(3u8),
            Some(1u8),
            Some(2u8),
        ];
        let spans = scan(&codes, false);
        assert_eq!(
            spans,
            vec![
                Span { start: 0, end: 3 },
                Span { start: 2, end: 6 },
                Span { start: 5, end: 8 },
            ]
        );
    }
}
