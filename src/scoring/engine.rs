use std::fmt;

use thiserror::Error;

use super::level;
use super::params::{BattleRecord, ScoringParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Divisor must be non-zero.")]
    DivisionByZero,
    #[error("Calculation overflowed the 64-bit integer range.")]
    Overflow,
}

/// A computed score: whole points, or half-point precision once a
/// player level bonus is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Whole(i64),
    /// Value in half points, e.g. `5` is 2.5
    Halves(i64),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Whole(n) => write!(f, "{}", n),
            Score::Halves(h) => {
                let sign = if *h < 0 { "-" } else { "" };
                let abs = h.unsigned_abs();
                let frac = if abs % 2 == 1 { 5 } else { 0 };
                write!(f, "{}{}.{}", sign, abs / 2, frac)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermContribution {
    pub label: String,       // e.g. "First", "Second", "Max damage"
    pub description: String, // e.g. "(2 * 3) - 5 = 1"
    pub before: Score,       // Running total before this term
    pub after: Score,        // Running total after this term
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub terms: Vec<TermContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// Whole battle points, before any level bonus
    pub points: i64,
    pub score: Score,
    pub breakdown: ScoreBreakdown,
}

/// Ceiling of `numerator / denominator`, rounding toward positive infinity
/// for either operand sign.
pub fn ceil_div(numerator: i64, denominator: i64) -> Result<i64, ScoreError> {
    if denominator == 0 {
        return Err(ScoreError::DivisionByZero);
    }
    // Only i64::MIN / -1 fails here
    let quotient = numerator
        .checked_div(denominator)
        .ok_or(ScoreError::Overflow)?;
    let remainder = numerator % denominator;
    if remainder != 0 && ((remainder > 0) == (denominator > 0)) {
        Ok(quotient + 1)
    } else {
        Ok(quotient)
    }
}

/// Battle points for a record:
/// `((twins * multi) - tpoints) + (ceil(tpoints / divi) - twins) + mdamage`
pub fn calculate_points(record: &BattleRecord, params: &ScoringParams) -> Result<i64, ScoreError> {
    calculate_score(record, params, None).map(|result| result.points)
}

/// Battle points with each term recorded; applies the player level bonus
/// when `plevel` is given.
pub fn calculate_score(
    record: &BattleRecord,
    params: &ScoringParams,
    plevel: Option<i64>,
) -> Result<ScoreResult, ScoreError> {
    let mut terms = Vec::new();

    let first = first_term(record, params)?;
    terms.push(TermContribution {
        label: "First".to_string(),
        description: format!(
            "({} * {}) - {} = {}",
            record.twins, params.multi, record.tpoints, first
        ),
        before: Score::Whole(0),
        after: Score::Whole(first),
    });

    let second = second_term(record, params)?;
    let running = first.checked_add(second).ok_or(ScoreError::Overflow)?;
    terms.push(TermContribution {
        label: "Second".to_string(),
        description: format!(
            "ceil({} / {}) - {} = {}",
            record.tpoints, params.divi, record.twins, second
        ),
        before: Score::Whole(first),
        after: Score::Whole(running),
    });

    let points = running
        .checked_add(record.mdamage)
        .ok_or(ScoreError::Overflow)?;
    terms.push(TermContribution {
        label: "Max damage".to_string(),
        description: format!("{:+}", record.mdamage),
        before: Score::Whole(running),
        after: Score::Whole(points),
    });

    let score = match plevel {
        None => Score::Whole(points),
        Some(plevel) => {
            let leveled = level::apply_level_bonus(points, plevel)?;
            terms.push(TermContribution {
                label: "Level bonus".to_string(),
                description: format!(
                    "level {} -> +{}",
                    level::effective_level(plevel),
                    Score::Halves(level::bonus_halves(plevel))
                ),
                before: Score::Whole(points),
                after: leveled,
            });
            leveled
        }
    };

    Ok(ScoreResult {
        points,
        score,
        breakdown: ScoreBreakdown { terms },
    })
}

fn first_term(record: &BattleRecord, params: &ScoringParams) -> Result<i64, ScoreError> {
    record
        .twins
        .checked_mul(params.multi)
        .and_then(|scaled| scaled.checked_sub(record.tpoints))
        .ok_or(ScoreError::Overflow)
}

fn second_term(record: &BattleRecord, params: &ScoringParams) -> Result<i64, ScoreError> {
    ceil_div(record.tpoints, params.divi)?
        .checked_sub(record.twins)
        .ok_or(ScoreError::Overflow)
}
