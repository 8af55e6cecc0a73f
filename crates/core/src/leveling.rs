//! Level threshold table and lookup.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and any future reporting tooling.

/// Cumulative XP required to reach each level, ascending. Index `i` is the
/// threshold for level `i + 1`; index 0 must stay 0 so every user is at
/// least level 1.
pub const LEVEL_THRESHOLDS: [i64; 20] = [
    0, 200, 500, 900, 1400, 2000, 2700, 3500, 4400, 5400, //
    6500, 7700, 9000, 10400, 11900, 13500, 15200, 17000, 18900, 20900,
];

/// The highest level reachable from the threshold table.
pub const MAX_LEVEL: i32 = LEVEL_THRESHOLDS.len() as i32;

/// The level for a given XP total: one plus the highest threshold index
/// reached or exceeded. Monotonic in `xp` and never below 1.
pub fn level_for_xp(xp: i64) -> i32 {
    for (i, threshold) in LEVEL_THRESHOLDS.iter().enumerate().rev() {
        if xp >= *threshold {
            return i as i32 + 1;
        }
    }
    1
}

/// XP still needed to reach the next level, or `None` at the cap.
pub fn xp_to_next_level(xp: i64) -> Option<i64> {
    let level = level_for_xp(xp);
    LEVEL_THRESHOLDS
        .get(level as usize)
        .map(|next| next - xp)
}
