//! domdump binary
//!
//! Runs the fixed dump pipeline: navigate a headless browser to
//! `http://localhost:3000/`, wait for page scripts to settle, and write the
//! rendered HTML to `dump.html`.

use domdump::DomDumper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log lines go to stderr; stdout carries only the confirmation line.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let report = DomDumper::new().run().await?;

    println!("DOM dumped to {}", report.output_path.display());

    Ok(())
}
