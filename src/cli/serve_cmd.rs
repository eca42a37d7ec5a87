//! `quartermap serve <json_path>` — serve a JSON file at /data.

use std::path::PathBuf;

use anyhow::Result;

/// Run the serve command. Blocks until interrupted.
pub async fn run(json_path: &str, port: u16) -> Result<()> {
    println!("Serving {json_path} at http://127.0.0.1:{port}/data");
    crate::serve::start(PathBuf::from(json_path), port).await
}
