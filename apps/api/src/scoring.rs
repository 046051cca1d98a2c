//! Scoring — pluggable, trait-based engine mapping a feature record to a
//! placement probability and per-factor importance weights.
//!
//! Default: `MockScoringEngine`, a bounded-random stand-in for a trained
//! model. `AppState` holds an `Arc<dyn ScoringEngine>`, so a real model
//! backend implements the same two operations and swaps in at startup
//! without touching handler code.

use async_trait::async_trait;
use rand::Rng;

use crate::insights::{self, Insights};
use crate::models::features::{FeatureRecord, ImportanceWeights};

/// Output of a scoring pass.
#[derive(Debug, Clone)]
pub struct Scored {
    /// Positive-class probability in [0, 1].
    pub probability: f64,
    pub importance: ImportanceWeights,
}

/// Inputs to the insight pass.
pub struct ExplainInput<'a> {
    pub features: &'a FeatureRecord,
    pub importance: &'a ImportanceWeights,
    /// Probability already converted to a 0–100 percentage.
    pub probability_pct: u32,
    /// Raw resume text when the request carried one; enables the
    /// missing-technical-skill scan.
    pub resume_text: Option<&'a str>,
}

/// The scoring capability. Implement this to swap backends without touching
/// endpoint or handler code.
///
/// A trained replacement must be deterministic for a given record and model
/// state, keep importance values summable as an attribution over the
/// prediction, and keep probability monotonic in feature quality.
#[async_trait]
pub trait ScoringEngine: Send + Sync {
    /// Maps a feature record to a probability and importance weights.
    async fn score(&self, features: &FeatureRecord) -> Scored;

    /// Derives weak skills, a recommended track, and a confidence score.
    async fn explain(&self, input: ExplainInput<'_>) -> Insights;
}

/// Stand-in engine drawing bounded random values. The probability comes
/// from the positive-class band [0.5, 0.95]; importance weights are
/// independent per-factor draws rounded to 3 decimals.
pub struct MockScoringEngine;

#[async_trait]
impl ScoringEngine for MockScoringEngine {
    async fn score(&self, _features: &FeatureRecord) -> Scored {
        let mut rng = rand::thread_rng();
        Scored {
            probability: rng.gen_range(0.5..=0.95),
            importance: draw_importance(&mut rng),
        }
    }

    async fn explain(&self, input: ExplainInput<'_>) -> Insights {
        let mut rng = rand::thread_rng();
        insights::derive_insights(
            input.features,
            input.importance,
            input.probability_pct,
            input.resume_text,
            &mut rng,
        )
    }
}

fn draw_importance<R: Rng>(rng: &mut R) -> ImportanceWeights {
    ImportanceWeights {
        cgpa: round3(rng.gen_range(0.2..=0.5)),
        internships: round3(rng.gen_range(0.15..=0.35)),
        projects: round3(rng.gen_range(0.1..=0.25)),
        skills: round3(rng.gen_range(0.1..=0.3)),
        communication: round3(rng.gen_range(-0.15..=0.15)),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record() -> FeatureRecord {
        FeatureRecord {
            cgpa: 8.0,
            internships: 2,
            projects: 3,
            skills_count: 5,
            certifications: 1,
            has_python: true,
        }
    }

    #[test]
    fn test_importance_draws_stay_in_factor_bands() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let w = draw_importance(&mut rng);
            assert!((0.2..=0.5).contains(&w.cgpa));
            assert!((0.15..=0.35).contains(&w.internships));
            assert!((0.1..=0.25).contains(&w.projects));
            assert!((0.1..=0.3).contains(&w.skills));
            assert!((-0.15..=0.15).contains(&w.communication));
        }
    }

    #[test]
    fn test_importance_is_rounded_to_three_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        let w = draw_importance(&mut rng);
        for value in [w.cgpa, w.internships, w.projects, w.skills, w.communication] {
            assert_eq!(value, round3(value));
        }
    }

    #[tokio::test]
    async fn test_mock_probability_is_positive_class_band() {
        let engine = MockScoringEngine;
        for _ in 0..100 {
            let scored = engine.score(&record()).await;
            assert!((0.5..=0.95).contains(&scored.probability));
        }
    }

    #[tokio::test]
    async fn test_mock_explain_respects_documented_ranges() {
        let engine = MockScoringEngine;
        let scored = engine.score(&record()).await;
        let probability_pct = (scored.probability * 100.0) as u32;
        let insights = engine
            .explain(ExplainInput {
                features: &record(),
                importance: &scored.importance,
                probability_pct,
                resume_text: Some("python machine learning projects"),
            })
            .await;
        assert!(insights.confidence <= 95);
        for entry in &insights.weak_skills {
            assert!(entry.current_score <= 100);
        }
    }
}
