//! Linear weighting applied to factor scores.

use encore_core::{Factor, FactorScores};
use serde::{Deserialize, Serialize};

use crate::ScorerError;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Relative importance of each compatibility factor.
///
/// The overall score is `Σ weight × factor`. Weights are static: they are not
/// learned or adjusted per user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Weight of instrument compatibility.
    pub instruments: f32,
    /// Weight of genre similarity.
    pub genres: f32,
    /// Weight of location proximity.
    pub location: f32,
    /// Weight of availability overlap.
    pub availability: f32,
    /// Weight of shared influences.
    pub influences: f32,
    /// Weight of collaboration intent.
    pub collaboration_intent: f32,
}

impl FactorWeights {
    /// Return the weight applied to `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f32 {
        match factor {
            Factor::Instruments => self.instruments,
            Factor::Genres => self.genres,
            Factor::Location => self.location,
            Factor::Availability => self.availability,
            Factor::Influences => self.influences,
            Factor::CollaborationIntent => self.collaboration_intent,
        }
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when a weight is negative or
    /// not finite, or the weights do not sum to `1.0`.
    pub fn validate(self) -> Result<Self, ScorerError> {
        let total = self.total();
        if self.has_usable_values() && is_unit(total) {
            Ok(self)
        } else {
            Err(ScorerError::InvalidWeights { total })
        }
    }

    fn has_usable_values(self) -> bool {
        Factor::ALL
            .into_iter()
            .map(|factor| self.get(factor))
            .all(|weight| weight.is_finite() && weight >= 0.0_f32)
    }

    fn total(self) -> f64 {
        Factor::ALL
            .into_iter()
            .map(|factor| f64::from(self.get(factor)))
            .sum()
    }

    /// Combine factor scores into the overall score.
    ///
    /// The sum is accumulated in `f64` and divided by the weight total, so
    /// a candidate scoring `1.0` on every factor scores exactly `1.0`.
    /// Weights with no positive total combine to `0.0`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        reason = "the overall score is a weighted sum narrowed back to f32"
    )]
    #[must_use]
    pub fn combine(&self, scores: &FactorScores) -> f32 {
        let total = self.total();
        if total <= 0.0_f64 {
            return 0.0_f32;
        }
        let weighted: f64 = scores
            .iter()
            .map(|(factor, score)| f64::from(self.get(factor)) * f64::from(score))
            .sum();
        (weighted / total) as f32
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            instruments: 0.30_f32,
            genres: 0.20_f32,
            location: 0.15_f32,
            availability: 0.15_f32,
            influences: 0.15_f32,
            collaboration_intent: 0.05_f32,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "validation compares the weight total against one"
)]
fn is_unit(total: f64) -> bool {
    (total - 1.0_f64).abs() <= WEIGHT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        let weights = FactorWeights::default();
        assert_eq!(weights.validate(), Ok(weights));
    }

    #[rstest]
    #[case(FactorWeights { instruments: 0.5, ..FactorWeights::default() })]
    #[case(FactorWeights { genres: -0.2, instruments: 0.7, ..FactorWeights::default() })]
    #[case(FactorWeights { location: f32::NAN, ..FactorWeights::default() })]
    fn rejects_unusable_weights(#[case] weights: FactorWeights) {
        assert!(matches!(
            weights.validate(),
            Err(ScorerError::InvalidWeights { .. })
        ));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn combine_is_weighted_sum() {
        let scores = FactorScores {
            instruments: 1.0,
            genres: 0.5,
            location: 0.0,
            availability: 1.0,
            influences: 0.0,
            collaboration_intent: 1.0,
        };
        let combined = FactorWeights::default().combine(&scores);
        assert!((combined - 0.6_f32).abs() < 1e-6);
    }

    #[rstest]
    fn json_weights_are_validated_after_decoding() {
        let json = r#"{"instruments": 0.5, "genres": 0.2, "location": 0.15,
            "availability": 0.15, "influences": 0.15, "collaboration_intent": 0.05}"#;
        let weights: FactorWeights = serde_json::from_str(json).expect("weights decode");
        assert!(matches!(
            weights.validate(),
            Err(ScorerError::InvalidWeights { .. })
        ));

        let defaults = serde_json::to_string(&FactorWeights::default()).expect("weights encode");
        let decoded: FactorWeights = serde_json::from_str(&defaults).expect("weights decode");
        assert_eq!(decoded.validate(), Ok(FactorWeights::default()));
    }

    #[rstest]
    fn perfect_factors_combine_to_exactly_one() {
        let scores = FactorScores {
            instruments: 1.0,
            genres: 1.0,
            location: 1.0,
            availability: 1.0,
            influences: 1.0,
            collaboration_intent: 1.0,
        };
        assert_eq!(FactorWeights::default().combine(&scores), 1.0);
    }

    #[rstest]
    fn zero_weights_combine_to_zero() {
        let weights = FactorWeights {
            instruments: 0.0,
            genres: 0.0,
            location: 0.0,
            availability: 0.0,
            influences: 0.0,
            collaboration_intent: 0.0,
        };
        let scores = FactorScores {
            instruments: 1.0,
            ..FactorScores::default()
        };
        assert_eq!(weights.combine(&scores), 0.0);
    }
}
