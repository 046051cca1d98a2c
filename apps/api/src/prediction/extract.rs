//! PDF text extraction — thin wrapper over the `pdf-extract` collaborator.

use anyhow::anyhow;

use crate::errors::AppError;

/// Extracts the text content of a PDF byte stream.
///
/// `pdf-extract` is synchronous, so the work runs on the blocking pool.
/// Unreadable documents surface as internal errors (500) with the library's
/// message attached.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Internal(anyhow!("Error reading PDF: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_an_internal_error() {
        let result = extract_text(b"definitely not a pdf".to_vec()).await;
        match result {
            Err(AppError::Internal(e)) => {
                assert!(e.to_string().contains("Error reading PDF"));
            }
            other => panic!("expected internal error, got {other:?}"),
        }
    }
}
