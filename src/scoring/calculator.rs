use crate::core::{LintError, Result};
use crate::features::Features;
use serde::{Deserialize, Serialize};
use std::fmt;

const INTERCEPT: f64 = 3.204;
const FREQ_LOG_WEIGHT: f64 = 15.845;
const MAX_DEP_WEIGHT: f64 = -1.331;
const CONTENT_DENSITY_WEIGHT: f64 = -3.829;
const CONCRETE_PROP_WEIGHT: f64 = 13.096;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Linear LiNT combination, before inversion and clamping.
pub fn raw_formula(freq_log: f64, max_dep: f64, content_density: f64, concrete_prop: f64) -> f64 {
    INTERCEPT
        + FREQ_LOG_WEIGHT * freq_log
        + MAX_DEP_WEIGHT * max_dep
        + CONTENT_DENSITY_WEIGHT * content_density
        + CONCRETE_PROP_WEIGHT * concrete_prop
}

/// `clamp(100 - raw, 0, 100)`.
pub fn clamp_score(raw: f64) -> f64 {
    (MAX_SCORE - raw).clamp(MIN_SCORE, MAX_SCORE)
}

/// Score four feature values. Non-finite inputs are rejected.
pub fn calculate_score(
    freq_log: f64,
    max_dep: f64,
    content_density: f64,
    concrete_prop: f64,
) -> Result<f64> {
    ensure_finite("freq_log", freq_log)?;
    ensure_finite("max_dep", max_dep)?;
    ensure_finite("content_density", content_density)?;
    ensure_finite("concrete_prop", concrete_prop)?;

    Ok(clamp_score(raw_formula(
        freq_log,
        max_dep,
        content_density,
        concrete_prop,
    )))
}

pub fn score_features(features: &Features) -> Result<f64> {
    calculate_score(
        features.freq_log,
        features.max_dep as f64,
        features.content_density,
        features.concrete_prop,
    )
}

fn ensure_finite(feature: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LintError::InvalidFeature { feature, value })
    }
}

/// Discrete difficulty classification of a LiNT score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DifficultyLevel {
    VeryDifficult = 1,
    Difficult = 2,
    Moderate = 3,
    Easy = 4,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [
        Self::VeryDifficult,
        Self::Difficult,
        Self::Moderate,
        Self::Easy,
    ];

    /// Band lookup; each band includes its lower bound.
    pub fn from_score(score: f64) -> Self {
        if score < 37.0 {
            Self::VeryDifficult
        } else if score < 52.0 {
            Self::Difficult
        } else if score < 61.5 {
            Self::Moderate
        } else {
            Self::Easy
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Half-open score range `[lower, upper)` of the band; the last band is closed at 100.
    pub fn score_range(self) -> (f64, f64) {
        match self {
            Self::VeryDifficult => (0.0, 37.0),
            Self::Difficult => (37.0, 52.0),
            Self::Moderate => (52.0, 61.5),
            Self::Easy => (61.5, MAX_SCORE),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::VeryDifficult => "Very Difficult",
            Self::Difficult => "Difficult",
            Self::Moderate => "Moderate",
            Self::Easy => "Easy",
        }
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::VeryDifficult),
            2 => Ok(Self::Difficult),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::Easy),
            other => Err(format!("difficulty level must be 1-4, got {other}")),
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.as_u8(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::UNKNOWN_WORD_FREQ;

    #[test]
    fn test_empty_feature_score() {
        let score = score_features(&Features::EMPTY).unwrap();
        let expected = 100.0 - (3.204 + 15.845 * UNKNOWN_WORD_FREQ);
        assert_eq!(score, expected);
        assert!((score - 75.3181025).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(calculate_score(10.0, 0.0, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(calculate_score(0.0, 200.0, 1.0, 0.0).unwrap(), 100.0);
    }

    #[test]
    fn test_rejects_non_finite_features() {
        let err = calculate_score(f64::NAN, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, LintError::InvalidFeature { feature: "freq_log", .. }));

        let err = calculate_score(4.0, 1.0, f64::INFINITY, 0.0).unwrap_err();
        assert!(matches!(
            err,
            LintError::InvalidFeature {
                feature: "content_density",
                ..
            }
        ));
    }

    #[test]
    fn test_band_lower_bounds_are_inclusive() {
        assert_eq!(DifficultyLevel::from_score(0.0), DifficultyLevel::VeryDifficult);
        assert_eq!(DifficultyLevel::from_score(36.999), DifficultyLevel::VeryDifficult);
        assert_eq!(DifficultyLevel::from_score(37.0), DifficultyLevel::Difficult);
        assert_eq!(DifficultyLevel::from_score(51.99), DifficultyLevel::Difficult);
        assert_eq!(DifficultyLevel::from_score(52.0), DifficultyLevel::Moderate);
        assert_eq!(DifficultyLevel::from_score(61.49), DifficultyLevel::Moderate);
        assert_eq!(DifficultyLevel::from_score(61.5), DifficultyLevel::Easy);
        assert_eq!(DifficultyLevel::from_score(100.0), DifficultyLevel::Easy);
    }

    #[test]
    fn test_score_range_matches_from_score() {
        for level in DifficultyLevel::ALL {
            let (lower, _) = level.score_range();
            assert_eq!(DifficultyLevel::from_score(lower), level);
        }
    }

    #[test]
    fn test_level_serializes_as_number() {
        let json = serde_json::to_string(&DifficultyLevel::Moderate).unwrap();
        assert_eq!(json, "3");
        let level: DifficultyLevel = serde_json::from_str("1").unwrap();
        assert_eq!(level, DifficultyLevel::VeryDifficult);
        assert!(serde_json::from_str::<DifficultyLevel>("5").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DifficultyLevel::Easy.to_string(), "4 - Easy");
    }
}
