//! Local stylesheet loader.

use std::path::Path;

use super::error::StyleError;

/// Raw stylesheet contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleText(String);

impl StyleText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wrap the stylesheet in a `<style>` element for inline injection.
    pub fn to_inline_html(&self) -> String {
        format!("<style>{}</style>", self.0)
    }
}

/// Read the whole stylesheet at `path` as text.
///
/// The file handle lives only for the duration of the read.
pub async fn load_style(path: &Path) -> Result<StyleText, StyleError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "stylesheet loaded");
    Ok(StyleText(text))
}
