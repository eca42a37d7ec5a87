//! Interactive browser login.
//!
//! DawgPath sits behind UW single sign-on, so there is no headless way
//! in: launch a visible Chromium, let the user sign in by hand, then
//! pull the session cookies out over CDP.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tracing::info;

use super::cookies::{CookieStore, StoredCookie};

/// Find a Chrome/Chromium binary.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. QUARTERMAP_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("QUARTERMAP_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. System PATH
    if let Ok(path) = which::which("google-chrome") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium-browser") {
        return Some(path);
    }

    // 3. Common macOS location
    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// Run the interactive login against `root_url` and return the cookies
/// the browser holds afterwards.
pub async fn capture_cookies(root_url: &str) -> Result<CookieStore> {
    let chrome_path = find_chromium()
        .context("Chromium not found; install it or set QUARTERMAP_CHROMIUM_PATH")?;

    let config = BrowserConfig::builder()
        .chrome_executable(chrome_path)
        .with_head()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .context("failed to launch Chromium")?;

    // Drain CDP events for the browser's lifetime.
    tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            let _ = event;
        }
    });

    let page = browser
        .new_page(root_url)
        .await
        .context("failed to open login page")?;

    eprintln!("Sign in at {root_url} in the browser window, then press Enter here...");
    wait_for_enter().await?;

    let cookies = page
        .get_cookies()
        .await
        .context("failed to read browser cookies")?;

    let store = CookieStore {
        cookies: cookies
            .into_iter()
            .map(|c| StoredCookie {
                name: c.name,
                value: c.value,
                domain: c.domain,
            })
            .collect(),
    };

    info!("captured {} cookies", store.len());
    browser.close().await.ok();
    Ok(store)
}

/// Block until the user hits Enter, off the async runtime.
async fn wait_for_enter() -> Result<()> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line).map(|_| ())
    })
    .await
    .context("stdin reader task failed")??;
    Ok(())
}
