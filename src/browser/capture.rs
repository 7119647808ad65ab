//! DOM capture functionality
//!
//! This module serializes the rendered DOM of a page and persists it to disk.
//! Capture happens after navigation and the settle delay, so the markup
//! reflects the post-scripting document state.

use crate::browser::PageHandle;
use crate::error::{CaptureError, Result};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Serialized markup of a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomSnapshot {
    /// The serialized HTML markup
    pub html: String,
}

impl DomSnapshot {
    /// Size of the markup in bytes
    pub fn size(&self) -> usize {
        self.html.len()
    }

    /// Whether the snapshot holds any markup
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Write the markup to a file as UTF-8, creating or truncating it
    #[instrument(skip(self))]
    pub async fn write_to(&self, path: &Path) -> Result<usize> {
        tokio::fs::write(path, self.html.as_bytes()).await?;

        let written = self.html.len();
        debug!("Wrote {} bytes to {}", written, path.display());
        Ok(written)
    }
}

/// Page capture functionality
pub struct PageCapture;

impl PageCapture {
    /// Serialize the full rendered HTML of the page
    #[instrument(skip(page))]
    pub async fn html(page: &PageHandle) -> Result<DomSnapshot> {
        info!("Capturing rendered HTML");

        let html = page
            .page
            .content()
            .await
            .map_err(|e| CaptureError::HtmlFailed(e.to_string()))?;

        debug!("HTML captured: {} bytes", html.len());

        Ok(DomSnapshot { html })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_size() {
        let snapshot = DomSnapshot {
            html: "<html><body>hi</body></html>".to_string(),
        };
        assert_eq!(snapshot.size(), 28);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_empty() {
        let snapshot = DomSnapshot {
            html: String::new(),
        };
        assert_eq!(snapshot.size(), 0);
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        let snapshot = DomSnapshot {
            html: "<html></html>".to_string(),
        };
        let written = snapshot.write_to(&path).await.unwrap();

        assert_eq!(written, 13);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn test_write_to_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        std::fs::write(&path, "stale content that is much longer").unwrap();

        let snapshot = DomSnapshot {
            html: "<html>fresh</html>".to_string(),
        };
        snapshot.write_to(&path).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<html>fresh</html>"
        );
    }
}
