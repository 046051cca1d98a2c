//! Track recommendation — maps a feature record to a career track label.

use rand::Rng;

use crate::models::features::FeatureRecord;

/// The eight career tracks the service can recommend.
pub const TRACKS: [&str; 8] = [
    "Software Developer",
    "Data Analyst",
    "Full Stack Developer",
    "Machine Learning Engineer",
    "DevOps Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Business Analyst",
];

/// Python plus a real project history points at data work; a broad skill
/// set points at full-stack; otherwise fall back to a uniform pick.
pub fn recommend_track<R: Rng>(features: &FeatureRecord, rng: &mut R) -> String {
    if features.has_python && features.projects > 2 {
        "Data Analyst".to_string()
    } else if features.skills_count > 5 {
        "Full Stack Developer".to_string()
    } else {
        TRACKS[rng.gen_range(0..TRACKS.len())].to_string()
    }
}
