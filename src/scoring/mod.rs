pub mod calculator;

pub use calculator::{
    calculate_score, clamp_score, raw_formula, score_features, DifficultyLevel, MAX_SCORE,
    MIN_SCORE,
};
