//! The DOM dump pipeline
//!
//! A fixed linear sequence: launch the browser, open a page, navigate to the
//! target address, wait the settle delay, serialize the rendered DOM, and
//! write it to the output file. The browser session is released on every
//! exit path, success or failure.

use crate::browser::navigation::DEFAULT_NAVIGATION_TIMEOUT_MS;
use crate::browser::{BrowserConfig, BrowserController, PageCapture, PageNavigator};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};

/// Address the dump navigates to
pub const TARGET_URL: &str = "http://localhost:3000/";

/// File the rendered markup is written to, relative to the working directory
pub const OUTPUT_PATH: &str = "dump.html";

/// Pause between navigation and capture, letting page scripts finish
/// modifying the DOM
pub const SETTLE_DELAY: Duration = Duration::from_millis(2000);

/// Options for a dump run
///
/// The defaults are the pipeline's fixed parameters; the binary never
/// overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpOptions {
    /// Address to navigate to
    pub url: String,
    /// Output file path
    pub output_path: PathBuf,
    /// Settle delay between navigation and capture
    pub settle_delay: Duration,
    /// Browser launch configuration
    #[serde(skip)]
    pub browser: BrowserConfig,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            url: TARGET_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            settle_delay: SETTLE_DELAY,
            browser: BrowserConfig::default(),
        }
    }
}

/// Result of a completed dump run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpReport {
    /// Address that was captured
    pub url: String,
    /// File the markup was written to
    pub output_path: PathBuf,
    /// Size of the written markup in bytes
    pub bytes_written: usize,
    /// Total pipeline duration in milliseconds
    pub duration_ms: u64,
}

/// The DOM dumper component
#[derive(Debug, Default)]
pub struct DomDumper {
    options: DumpOptions,
}

impl DomDumper {
    /// Create a dumper with the fixed default pipeline parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dumper with custom options
    pub fn with_options(options: DumpOptions) -> Self {
        Self { options }
    }

    /// Get the dump options
    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    /// Run the full dump pipeline
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<DumpReport> {
        let start = std::time::Instant::now();
        info!(
            "Dumping {} to {}",
            self.options.url,
            self.options.output_path.display()
        );

        let controller = BrowserController::with_config(self.options.browser.clone()).await?;

        // The session must be released on every exit path: close runs before
        // the pipeline result is inspected.
        let outcome = Self::dump_to_file(&controller, &self.options).await;
        let closed = controller.close().await;

        let bytes_written = outcome?;
        closed?;

        let duration_ms = start.elapsed().as_millis() as u64;
        info!("Dump complete: {} bytes in {}ms", bytes_written, duration_ms);

        Ok(DumpReport {
            url: self.options.url.clone(),
            output_path: self.options.output_path.clone(),
            bytes_written,
            duration_ms,
        })
    }

    /// Open a page, navigate, settle, capture, and persist
    async fn dump_to_file(controller: &BrowserController, options: &DumpOptions) -> Result<usize> {
        let page = controller.new_page().await?;

        PageNavigator::goto(&page, &options.url, DEFAULT_NAVIGATION_TIMEOUT_MS).await?;
        PageNavigator::settle(options.settle_delay).await;

        let snapshot = PageCapture::html(&page).await?;
        snapshot.write_to(&options.output_path).await
    }
}
