use std::sync::Arc;

use crate::prediction::parser::ResumeFeatureParser;
use crate::prediction::store::FeatureStore;
use crate::scoring::ScoringEngine;

/// Shared application state injected into all route handlers via Axum
/// extractors. Every capability is a read-only `Arc`, safe for concurrent
/// use; no request mutates shared state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scoring engine. Default: `MockScoringEngine`; a trained
    /// model backend swaps in here.
    pub engine: Arc<dyn ScoringEngine>,
    /// Per-user feature lookup. The default fabricates records until a
    /// persistent store exists.
    pub store: Arc<dyn FeatureStore>,
    pub parser: Arc<ResumeFeatureParser>,
}
