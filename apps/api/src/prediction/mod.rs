//! Prediction domain — the `/predict` and `/re-predict` pipelines:
//! upload validation, PDF text extraction, feature parsing, and the
//! per-user feature store.

pub mod extract;
pub mod handlers;
pub mod parser;
pub mod store;
