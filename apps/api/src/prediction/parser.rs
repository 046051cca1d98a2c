//! Feature Parser — turns raw resume text into a `FeatureRecord` using a
//! CGPA label regex and keyword counts.

use rand::Rng;
use regex::Regex;

use crate::models::features::FeatureRecord;

/// Technical vocabulary counted into `skills_count`.
const SKILL_VOCABULARY: [&str; 11] = [
    "python",
    "java",
    "javascript",
    "react",
    "sql",
    "machine learning",
    "data science",
    "c++",
    "git",
    "aws",
    "docker",
];

/// Imputation band when no CGPA label is found. Stand-in for a real
/// missing-data strategy; a proper parser would report the field as absent.
const CGPA_IMPUTE_LOW: f64 = 6.5;
const CGPA_IMPUTE_HIGH: f64 = 9.5;

/// Resume text → feature record. The CGPA pattern is compiled once and the
/// parser is shared read-only across requests.
pub struct ResumeFeatureParser {
    cgpa_regex: Regex,
}

impl ResumeFeatureParser {
    pub fn new() -> Self {
        let cgpa_regex = Regex::new(r"(?i)(?:cgpa|gpa|grade)[:\s]*(\d+\.?\d*)")
            .expect("CGPA pattern is a valid regex");
        Self { cgpa_regex }
    }

    /// Extracts the fixed feature set from resume text.
    ///
    /// Callers must reject empty/whitespace-only text before calling; the
    /// parser itself does not validate. A labelled CGPA is taken verbatim,
    /// without an upper clamp.
    pub fn parse<R: Rng>(&self, text: &str, rng: &mut R) -> FeatureRecord {
        let lower = text.to_lowercase();

        let cgpa = self
            .cgpa_regex
            .captures(&lower)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or_else(|| rng.gen_range(CGPA_IMPUTE_LOW..=CGPA_IMPUTE_HIGH));

        FeatureRecord {
            cgpa,
            internships: count_occurrences(&lower, "intern"),
            projects: count_occurrences(&lower, "project"),
            skills_count: SKILL_VOCABULARY
                .iter()
                .filter(|skill| lower.contains(*skill))
                .count() as u32,
            // "certification" is counted separately from "certificate", so
            // mixed phrasing can double count. Accepted quirk.
            certifications: count_occurrences(&lower, "certificate")
                + count_occurrences(&lower, "certification"),
            has_python: lower.contains("python"),
        }
    }
}

impl Default for ResumeFeatureParser {
    fn default() -> Self {
        Self::new()
    }
}

fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    haystack.matches(needle).count() as u32
}
