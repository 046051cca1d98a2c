//! Insight generation — weak-skill entries, track recommendation, confidence.
//!
//! Every function here is pure and generic over `rand::Rng`, so the random
//! stand-ins (placeholder communication score, missing-skill scores, track
//! tie-break, confidence jitter) can be replaced by a seeded generator in
//! tests or by a deterministic backend later.

pub mod track;
pub mod weak_skills;

use rand::Rng;

pub use track::recommend_track;
pub use weak_skills::{detect_missing_skills, factor_weak_skills};

use crate::models::features::{FeatureRecord, ImportanceWeights, WeakSkillEntry};

/// Derived, human-readable explanation of a prediction.
#[derive(Debug, Clone)]
pub struct Insights {
    pub weak_skills: Vec<WeakSkillEntry>,
    pub track: String,
    pub confidence: u32,
}

/// Full insight pass: factor entries first, then missing-technical-skill
/// entries (only when raw resume text is available).
pub fn derive_insights<R: Rng>(
    features: &FeatureRecord,
    importance: &ImportanceWeights,
    probability_pct: u32,
    resume_text: Option<&str>,
    rng: &mut R,
) -> Insights {
    let mut weak_skills = factor_weak_skills(features, importance, rng);
    if let Some(text) = resume_text {
        weak_skills.extend(detect_missing_skills(text, rng));
    }

    Insights {
        track: recommend_track(features, rng),
        confidence: confidence_score(probability_pct, rng),
        weak_skills,
    }
}

/// `min(95, probability + jitter)` with jitter in [-5, 10], floored at zero.
pub fn confidence_score<R: Rng>(probability_pct: u32, rng: &mut R) -> u32 {
    let jitter: i64 = rng.gen_range(-5..=10);
    (probability_pct as i64 + jitter).clamp(0, 95) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_confidence_never_exceeds_95() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(confidence_score(100, &mut rng) <= 95);
        }
    }

    #[test]
    fn test_confidence_floored_at_zero() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let c = confidence_score(0, &mut rng);
            assert!(c <= 10, "jitter above +10: {c}");
        }
    }

    #[test]
    fn test_confidence_tracks_probability() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let c = confidence_score(60, &mut rng);
            assert!((55..=70).contains(&c), "confidence {c} outside jitter band");
        }
    }

    #[test]
    fn test_derive_insights_without_text_skips_gap_scan() {
        let features = FeatureRecord {
            cgpa: 9.0,
            internships: 4,
            projects: 5,
            skills_count: 8,
            certifications: 2,
            has_python: false,
        };
        // Every factor strongly attributed: no factor entries either.
        let importance = ImportanceWeights {
            cgpa: 0.4,
            internships: 0.3,
            projects: 0.2,
            skills: 0.25,
            communication: 0.15,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let insights = derive_insights(&features, &importance, 80, None, &mut rng);
        assert!(insights.weak_skills.is_empty());
        assert!(insights.confidence <= 95);
    }
}
