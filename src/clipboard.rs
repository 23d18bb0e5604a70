use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Backend(String),
}

/// Place text on the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    use copypasta::{ClipboardContext, ClipboardProvider};
    let mut context =
        ClipboardContext::new().map_err(|error| ClipboardError::Backend(error.to_string()))?;
    context
        .set_contents(text.to_string())
        .map_err(|error| ClipboardError::Backend(error.to_string()))
}
