use super::engine::{Score, ScoreError};

/// Player levels above this count as this.
pub const MAX_PLAYER_LEVEL: i64 = 50;

/// Level after applying the cap. There is no lower bound.
pub fn effective_level(plevel: i64) -> i64 {
    plevel.min(MAX_PLAYER_LEVEL)
}

/// Level bonus in half points (0.5 points per level).
pub fn bonus_halves(plevel: i64) -> i64 {
    effective_level(plevel)
}

/// Add the level bonus to whole battle points.
pub fn apply_level_bonus(points: i64, plevel: i64) -> Result<Score, ScoreError> {
    points
        .checked_mul(2)
        .and_then(|halves| halves.checked_add(bonus_halves(plevel)))
        .map(Score::Halves)
        .ok_or(ScoreError::Overflow)
}
