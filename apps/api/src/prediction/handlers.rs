use anyhow::anyhow;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::features::{
    FeatureRecord, FeaturesExtracted, ImportanceWeights, WeakSkillEntry,
};
use crate::prediction::extract::extract_text;
use crate::scoring::ExplainInput;
use crate::state::AppState;

/// Number of entries in the parser's skill vocabulary; `skills_count` never
/// grows past it.
const SKILL_VOCABULARY_SIZE: u32 = 11;

/// Response body for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub probability: u32,
    pub recommended_track: String,
    pub confidence: u32,
    pub weak_skills: Vec<WeakSkillEntry>,
    pub shap_values: ImportanceWeights,
    pub features_extracted: FeaturesExtracted,
}

/// POST /predict — multipart upload of a `resume` PDF.
pub async fn handle_predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Internal(anyhow!("Failed to read upload: {e}")))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("Only PDF files are supported".to_string()));
    }

    let resume_text = extract_text(data).await?;
    ensure_extractable_text(&resume_text)?;

    let features = state.parser.parse(&resume_text, &mut rand::thread_rng());
    let scored = state.engine.score(&features).await;
    let probability = (scored.probability * 100.0) as u32;

    let insights = state
        .engine
        .explain(ExplainInput {
            features: &features,
            importance: &scored.importance,
            probability_pct: probability,
            resume_text: Some(&resume_text),
        })
        .await;

    info!(probability, track = %insights.track, "prediction complete");

    Ok(Json(PredictResponse {
        probability,
        recommended_track: insights.track,
        confidence: insights.confidence,
        weak_skills: insights.weak_skills,
        shap_values: scored.importance,
        features_extracted: FeaturesExtracted::from(&features),
    }))
}

/// A PDF that parses but yields no text (scans, image-only exports) is a
/// client problem, reported distinctly from the non-PDF case.
fn ensure_extractable_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF".to_string(),
        ));
    }
    Ok(())
}

/// Request body for `POST /re-predict`. The three core fields are required;
/// `originalProbability` defaults to 50 when the client omits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RePredictRequest {
    pub user_id: Option<String>,
    pub skill_name: Option<String>,
    pub new_score: Option<f64>,
    #[serde(default = "default_original_probability")]
    pub original_probability: u32,
}

fn default_original_probability() -> u32 {
    50
}

/// Response body for `POST /re-predict`.
#[derive(Debug, Serialize)]
pub struct RePredictResponse {
    pub new_probability: u32,
    pub new_recommended_track: String,
    pub new_confidence: u32,
    pub new_shap_values: ImportanceWeights,
    pub new_weak_skills: Vec<WeakSkillEntry>,
    pub improvement: i64,
    pub original_probability: u32,
    pub message: String,
}

/// POST /re-predict — recomputes insights after a skill test.
///
/// The reported probability is the capped additive improvement over the
/// client-supplied baseline, not the engine's own score for the mutated
/// features; that is the contract clients observe. The engine is still
/// consulted for the mutated record's importance weights.
pub async fn handle_re_predict(
    State(state): State<AppState>,
    Json(req): Json<RePredictRequest>,
) -> Result<Json<RePredictResponse>, AppError> {
    let (user_id, skill_name, new_score) = match (&req.user_id, &req.skill_name, req.new_score) {
        (Some(user_id), Some(skill_name), Some(new_score)) => {
            (user_id.as_str(), skill_name.as_str(), new_score)
        }
        _ => {
            return Err(AppError::Validation(
                "Missing required fields: userId, skillName, newScore".to_string(),
            ))
        }
    };

    let stored = state.store.get(user_id).await?;
    let features = apply_score_override(&stored, skill_name, new_score);

    let scored = state.engine.score(&features).await;

    let improvement = ((new_score / 100.0) * 20.0).floor() as i64;
    let new_probability = (req.original_probability as i64 + improvement).clamp(0, 100) as u32;

    let insights = state
        .engine
        .explain(ExplainInput {
            features: &features,
            importance: &scored.importance,
            probability_pct: new_probability,
            resume_text: None,
        })
        .await;

    info!(user_id, skill_name, new_probability, "re-prediction complete");

    let message = format!(
        "Great job! Your {skill_name} skill has improved. Your placement probability \
         increased from {}% to {new_probability}%!",
        req.original_probability
    );

    Ok(Json(RePredictResponse {
        new_probability,
        new_recommended_track: insights.track,
        new_confidence: insights.confidence,
        new_shap_values: scored.importance,
        new_weak_skills: insights.weak_skills,
        improvement,
        original_probability: req.original_probability,
        message,
    }))
}

/// Maps a tested skill back onto the stored record by inverting the
/// weak-skill normalizers. Named technical skills raise `skills_count`
/// additively, capped at the vocabulary size. Communication has no stored
/// feature, and unknown skills leave the record untouched.
fn apply_score_override(stored: &FeatureRecord, skill_name: &str, new_score: f64) -> FeatureRecord {
    let mut features = stored.clone();
    match skill_name {
        "Academic Performance" => features.cgpa = (new_score / 100.0) * 10.0,
        "Internship Experience" => features.internships = (new_score / 25.0) as u32,
        "Project Portfolio" => features.projects = (new_score / 20.0) as u32,
        "Technical Skills" | "Java" | "Python" | "Data Structures & Algorithms" | "JavaScript"
        | "C++" | "SQL" | "React" | "Machine Learning" | "System Design" => {
            features.skills_count =
                (features.skills_count + (new_score / 50.0) as u32).min(SKILL_VOCABULARY_SIZE);
        }
        _ => {}
    }
    features
}
