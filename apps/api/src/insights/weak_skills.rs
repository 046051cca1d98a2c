//! Weak-skill selection — low-attribution factors plus missing technical
//! skills detected from the raw resume text.

use rand::Rng;

use crate::models::features::{Factor, FeatureRecord, ImportanceWeights, WeakSkillEntry};

/// A factor is "weak" when its attribution magnitude falls below this: it
/// does not meaningfully explain the outcome, so it is worth strengthening.
const IMPORTANCE_THRESHOLD: f64 = 0.15;

/// Factor entries are only reported when the normalized score is below this.
const SCORE_CUTOFF: u32 = 70;

/// Technical terms probed in the raw text. Order is the report order.
const TECHNICAL_SKILLS: [&str; 9] = [
    "Java",
    "Python",
    "Data Structures & Algorithms",
    "JavaScript",
    "C++",
    "SQL",
    "React",
    "Machine Learning",
    "System Design",
];

/// Emits one entry per low-attribution factor whose normalized score is
/// below the cutoff. Certifications carries no importance weight and is
/// never part of this pass.
pub fn factor_weak_skills<R: Rng>(
    features: &FeatureRecord,
    importance: &ImportanceWeights,
    rng: &mut R,
) -> Vec<WeakSkillEntry> {
    let mut entries = Vec::new();

    for factor in Factor::ALL {
        if importance.get(factor).abs() >= IMPORTANCE_THRESHOLD {
            continue;
        }

        let current_score = factor_score(factor, features, rng);
        if current_score < SCORE_CUTOFF {
            let name = factor.display_name();
            entries.push(WeakSkillEntry {
                skill_name: name.to_string(),
                current_score,
                message: format!(
                    "Your {name} score is below the threshold. Take a skill test to prove your abilities!"
                ),
            });
        }
    }

    entries
}

/// Normalizes a raw feature onto the 0–100 scale used by skill tests.
/// CGPA is uncapped here; an out-of-range labelled CGPA can exceed 100 and
/// then never falls below the report cutoff.
fn factor_score<R: Rng>(factor: Factor, features: &FeatureRecord, rng: &mut R) -> u32 {
    match factor {
        Factor::Cgpa => ((features.cgpa / 10.0) * 100.0) as u32,
        Factor::Internships => (features.internships * 25).min(100),
        Factor::Projects => (features.projects * 20).min(100),
        Factor::Skills => (features.skills_count * 10).min(100),
        // No communication signal is parsed from resumes; placeholder draw,
        // already on the 0–100 scale.
        Factor::Communication => rng.gen_range(40..=80),
    }
}

/// Scans the resume text for each technical term and emits an entry for
/// every absent one, with a bounded placeholder score.
pub fn detect_missing_skills<R: Rng>(text: &str, rng: &mut R) -> Vec<WeakSkillEntry> {
    let lower = text.to_lowercase();
    let mut entries = Vec::new();

    for skill in TECHNICAL_SKILLS {
        if skill_present(skill, &lower) {
            continue;
        }
        entries.push(WeakSkillEntry {
            skill_name: skill.to_string(),
            current_score: rng.gen_range(30..=60),
            message: format!(
                "No evidence of {skill} found in your resume. Take a test to prove your knowledge!"
            ),
        });
    }

    entries
}

fn skill_present(skill: &str, lower: &str) -> bool {
    match skill {
        "Java" => java_present(lower),
        "Python" => lower.contains("python"),
        "Data Structures & Algorithms" => ["dsa", "data structure", "algorithm", "leetcode", "coding"]
            .iter()
            .any(|term| lower.contains(term)),
        "JavaScript" => lower.contains("javascript") || lower.contains("js"),
        "C++" => lower.contains("c++") || lower.contains("cpp"),
        "SQL" => lower.contains("sql") || lower.contains("database"),
        "React" => lower.contains("react"),
        "Machine Learning" => lower.contains("machine learning") || lower.contains("ml"),
        "System Design" => lower.contains("system design") || lower.contains("architecture"),
        _ => false,
    }
}

/// Java counts as present when "java" occurs and "javascript" does not
/// survive removal of the first "java" occurrence. A single "javascript"
/// mention therefore satisfies the Java check while two do not. Known
/// fragile; kept until the parser grows an explicit has_java flag.
fn java_present(lower: &str) -> bool {
    lower.contains("java") && !lower.replacen("java", "", 1).contains("javascript")
}
