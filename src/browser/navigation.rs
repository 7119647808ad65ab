//! Page navigation functionality
//!
//! Single-shot navigation: validate the URL, drive the page to it, wait for
//! the document load event, then let the caller apply a settle delay before
//! capture. There is no retry loop; a failed navigation is fatal to the run.

use crate::browser::PageHandle;
use crate::error::{Error, NavigationError, Result};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Navigation timeout applied when the caller does not supply one, matching
/// the underlying library's conventional default.
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Resolves once the document load event has fired.
const WAIT_FOR_LOAD: &str = r#"
    new Promise(resolve => {
        if (document.readyState === 'complete') {
            resolve(true);
        } else {
            window.addEventListener('load', () => resolve(true));
        }
    })
"#;

/// Result of a navigation operation
#[derive(Debug)]
pub struct NavigationResult {
    /// Final URL after any redirects
    pub final_url: String,
    /// Page title
    pub title: Option<String>,
    /// Navigation duration in milliseconds
    pub duration_ms: u64,
}

/// URL validation
pub struct UrlValidator;

impl UrlValidator {
    /// Validate a URL for navigation
    pub fn validate(url: &str) -> std::result::Result<(), String> {
        if url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }

        if !url.starts_with("http://")
            && !url.starts_with("https://")
            && !url.starts_with("file://")
        {
            return Err(format!(
                "URL must start with http://, https://, or file://: {}",
                url
            ));
        }

        Ok(())
    }
}

/// Page navigator
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL and wait for the document load event
    #[instrument(skip(page))]
    pub async fn goto(page: &PageHandle, url: &str, timeout_ms: u64) -> Result<NavigationResult> {
        let start = std::time::Instant::now();

        UrlValidator::validate(url).map_err(NavigationError::InvalidUrl)?;

        info!("Navigating to: {}", url);

        let timeout = Duration::from_millis(timeout_ms);

        let nav_future = page.page.goto(url);
        tokio::time::timeout(timeout, nav_future)
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        tokio::time::timeout(timeout, page.page.evaluate(WAIT_FOR_LOAD))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        let final_url = page
            .page
            .url()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .unwrap_or_else(|| url.to_string());

        let title = page
            .page
            .evaluate("document.title")
            .await
            .ok()
            .and_then(|v| v.into_value::<String>().ok());

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!("Navigation complete: {} -> {}", url, final_url);

        Ok(NavigationResult {
            final_url,
            title,
            duration_ms,
        })
    }

    /// Suspend the pipeline for a fixed settle delay
    ///
    /// This is an unconditional pause with no readiness signal attached: the
    /// page's scripts keep running in the browser while the calling task
    /// sleeps, and whatever DOM state exists when the delay expires is what
    /// a subsequent capture sees.
    #[instrument]
    pub async fn settle(delay: Duration) {
        debug!("Settling for {:?}", delay);
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation_valid_http() {
        assert!(UrlValidator::validate("http://localhost:3000/").is_ok());
    }

    #[test]
    fn test_url_validation_valid_https() {
        assert!(UrlValidator::validate("https://example.com").is_ok());
    }

    #[test]
    fn test_url_validation_valid_file() {
        assert!(UrlValidator::validate("file:///tmp/page.html").is_ok());
    }

    #[test]
    fn test_url_validation_empty() {
        let result = UrlValidator::validate("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("empty"));
    }

    #[test]
    fn test_url_validation_no_protocol() {
        let result = UrlValidator::validate("localhost:3000");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must start with"));
    }

    #[test]
    fn test_url_validation_invalid_protocol() {
        assert!(UrlValidator::validate("ftp://example.com").is_err());
    }

    #[test]
    fn test_navigation_result_structure() {
        let result = NavigationResult {
            final_url: "http://localhost:3000/".to_string(),
            title: Some("Home".to_string()),
            duration_ms: 150,
        };

        assert_eq!(result.final_url, "http://localhost:3000/");
        assert_eq!(result.title, Some("Home".to_string()));
        assert_eq!(result.duration_ms, 150);
    }

    #[test]
    fn test_settle_waits_at_least_the_delay() {
        tokio_test::block_on(async {
            let start = std::time::Instant::now();
            PageNavigator::settle(Duration::from_millis(20)).await;
            assert!(start.elapsed() >= Duration::from_millis(20));
        });
    }
}
