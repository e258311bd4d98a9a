//! Scoring module
//!
//! A lock that clears `n` rows at once is worth `n²` points, so a four-row
//! clear (16) pays four times as much as four single clears (4).

/// Points for clearing `lines` rows in one pass
pub fn score_for_lines(lines: usize) -> u32 {
    let n = u32::try_from(lines).unwrap_or(u32::MAX);
    n.saturating_mul(n)
}
