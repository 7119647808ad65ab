//! domdump - Headless Browser DOM Dumper
//!
//! This crate drives a headless Chromium instance over CDP to capture the
//! rendered DOM of a page after its scripts have settled, and writes the
//! serialized markup to disk.
//!
//! # Features
//!
//! - **Browser Automation**: Headless browser control via ChromiumOxide (CDP)
//! - **Rendered Capture**: Serializes the post-scripting DOM state, not the
//!   raw response body
//! - **Fixed Pipeline**: launch, open page, navigate, settle, capture, write
//!
//! # Architecture
//!
//! ```text
//! DomDumper ──▶ BrowserController (CDP)
//!                    │
//!        ┌───────────┴───────────┐
//!        ▼                       ▼
//! ┌───────────────┐       ┌──────────────┐
//! │ PageNavigator │       │ PageCapture  │
//! └───────┬───────┘       └──────┬───────┘
//!         │                      │
//!         ▼                      ▼
//!   goto + settle          DomSnapshot ──▶ dump.html
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use domdump::DomDumper;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Runs the fixed pipeline: http://localhost:3000/ -> dump.html
//!     let report = DomDumper::new().run().await?;
//!
//!     println!("wrote {} bytes", report.bytes_written);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod dumper;
pub mod error;

// Re-exports for convenience
pub use browser::{BrowserConfig, BrowserController, DomSnapshot, PageCapture, PageNavigator};
pub use dumper::{DomDumper, DumpOptions, DumpReport};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
