//! `quartermap login` — capture a DawgPath session in a browser.

use anyhow::Result;

use crate::dawgpath::{browser, CookieStore};

/// Run the login command.
pub async fn run(root: &str) -> Result<()> {
    let store = browser::capture_cookies(root).await?;

    if store.is_empty() {
        eprintln!("No cookies captured; the sign-in may not have completed.");
        return Ok(());
    }

    let path = CookieStore::default_path();
    store.save(&path)?;
    println!("Saved {} cookies to {}", store.len(), path.display());
    Ok(())
}
