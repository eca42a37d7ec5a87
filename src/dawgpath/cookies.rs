//! Session-cookie persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One captured browser cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: String,
}

/// Cookie set captured from a browser session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookieStore {
    pub cookies: Vec<StoredCookie>,
}

impl CookieStore {
    /// Default on-disk location: `~/.quartermap/cookies.json`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quartermap/cookies.json")
    }

    /// Load a saved cookie set.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cookie store: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed cookie store: {}", path.display()))
    }

    /// Persist the cookie set, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("failed to write cookie store: {}", path.display()))
    }

    /// Render a `Cookie` request-header value.
    pub fn header_value(&self) -> String {
        self.cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }
}
