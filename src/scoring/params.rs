/// Default multiplier applied to wins.
pub const DEFAULT_MULTI: i64 = 3;

/// Default divisor applied to points.
pub const DEFAULT_DIVI: i64 = 3;

/// Tunable parameters of the battle points formula.
///
/// Both values are per-invocation and start from their defaults:
/// ```text
/// multi: 3   # wins multiplier
/// divi:  3   # points divisor
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    /// Multiplier for `twins` in the first term
    pub multi: i64,

    /// Divisor for `tpoints` in the ceiling term
    pub divi: i64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            multi: DEFAULT_MULTI,
            divi: DEFAULT_DIVI,
        }
    }
}

/// The three required inputs of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleRecord {
    /// Total wins
    pub twins: i64,
    /// Total points
    pub tpoints: i64,
    /// Max damage dealt
    pub mdamage: i64,
}
