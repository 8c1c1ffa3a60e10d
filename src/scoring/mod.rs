pub mod engine;
pub mod level;
pub mod params;

pub use engine::{
    calculate_points, calculate_score, ceil_div, Score, ScoreBreakdown, ScoreError, ScoreResult,
    TermContribution,
};
pub use params::{BattleRecord, ScoringParams, DEFAULT_DIVI, DEFAULT_MULTI};
