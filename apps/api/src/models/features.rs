//! Core data model — feature records, importance weights, weak-skill entries.

use serde::{Deserialize, Serialize};

/// Fixed set of numeric attributes derived from a resume. Model input.
/// Never mutated after creation; recomputation builds a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// 0–10 scale as printed on transcripts. The parser does not clamp an
    /// out-of-range labelled value.
    pub cgpa: f64,
    pub internships: u32,
    pub projects: u32,
    pub skills_count: u32,
    pub certifications: u32,
    /// Explicit capability flag computed once by the parser. Track
    /// recommendation reads this instead of re-scanning text.
    pub has_python: bool,
}

/// The five model factors that receive importance weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Cgpa,
    Internships,
    Projects,
    Skills,
    Communication,
}

impl Factor {
    /// Iteration order; weak-skill entries are emitted in this order.
    pub const ALL: [Factor; 5] = [
        Factor::Cgpa,
        Factor::Internships,
        Factor::Projects,
        Factor::Skills,
        Factor::Communication,
    ];

    /// User-facing skill name reported for this factor.
    pub fn display_name(self) -> &'static str {
        match self {
            Factor::Cgpa => "Academic Performance",
            Factor::Internships => "Internship Experience",
            Factor::Projects => "Project Portfolio",
            Factor::Skills => "Technical Skills",
            Factor::Communication => "Communication Skills",
        }
    }
}

/// Per-factor signed contribution values explaining a prediction.
/// Serialized as an object with exactly the five factor keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceWeights {
    #[serde(rename = "CGPA")]
    pub cgpa: f64,
    #[serde(rename = "Internships")]
    pub internships: f64,
    #[serde(rename = "Projects")]
    pub projects: f64,
    #[serde(rename = "Skills")]
    pub skills: f64,
    #[serde(rename = "Communication")]
    pub communication: f64,
}

impl ImportanceWeights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Cgpa => self.cgpa,
            Factor::Internships => self.internships,
            Factor::Projects => self.projects,
            Factor::Skills => self.skills,
            Factor::Communication => self.communication,
        }
    }
}

/// A reported deficiency with a normalized score and user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakSkillEntry {
    pub skill_name: String,
    pub current_score: u32,
    pub message: String,
}

/// Rounded copy of the features echoed back to the client on `/predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesExtracted {
    pub cgpa: f64,
    pub internships: u32,
    pub projects: u32,
    pub skills: u32,
    pub certifications: u32,
}

impl From<&FeatureRecord> for FeaturesExtracted {
    fn from(record: &FeatureRecord) -> Self {
        FeaturesExtracted {
            cgpa: (record.cgpa * 100.0).round() / 100.0,
            internships: record.internships,
            projects: record.projects,
            skills: record.skills_count,
            certifications: record.certifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FeatureRecord {
        FeatureRecord {
            cgpa: 8.267,
            internships: 2,
            projects: 4,
            skills_count: 6,
            certifications: 1,
            has_python: true,
        }
    }

    #[test]
    fn test_importance_serializes_with_factor_keys() {
        let weights = ImportanceWeights {
            cgpa: 0.3,
            internships: 0.2,
            projects: 0.15,
            skills: 0.25,
            communication: -0.05,
        };
        let json = serde_json::to_value(&weights).unwrap();
        for key in ["CGPA", "Internships", "Projects", "Skills", "Communication"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_importance_get_matches_fields() {
        let weights = ImportanceWeights {
            cgpa: 0.3,
            internships: 0.2,
            projects: 0.15,
            skills: 0.25,
            communication: -0.05,
        };
        assert_eq!(weights.get(Factor::Cgpa), 0.3);
        assert_eq!(weights.get(Factor::Communication), -0.05);
    }

    #[test]
    fn test_factor_order_is_stable() {
        let names: Vec<&str> = Factor::ALL.iter().map(|f| f.display_name()).collect();
        assert_eq!(
            names,
            vec![
                "Academic Performance",
                "Internship Experience",
                "Project Portfolio",
                "Technical Skills",
                "Communication Skills",
            ]
        );
    }

    #[test]
    fn test_features_extracted_rounds_cgpa_to_two_decimals() {
        let extracted = FeaturesExtracted::from(&record());
        assert_eq!(extracted.cgpa, 8.27);
        assert_eq!(extracted.skills, 6);
    }
}
