//! `quartermap search <query>` — authenticated DawgPath search.

use anyhow::{Context, Result};

use crate::dawgpath::{CookieStore, DawgPathClient};

/// Run the search command.
pub async fn run(query: &str, root: &str) -> Result<()> {
    let path = CookieStore::default_path();
    let cookies = CookieStore::load(&path)
        .context("no saved session; run `quartermap login` first")?;

    let client = DawgPathClient::with_root(root, cookies);
    let result = client.search(query).await?;

    println!(
        "{} course matches, {} major matches, {} text matches",
        result.course_matches.len(),
        result.major_matches.len(),
        result.text_matches.len()
    );

    for m in &result.major_matches {
        println!("  [major] {} ({})", m.title, m.campus);
    }
    for t in &result.text_matches {
        println!("  [text]  {} (score {:.2})", t.title, t.score);
    }
    for c in &result.course_matches {
        // Raw passthrough; print whatever identifies the course.
        let label = c
            .get("course_id")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown course");
        println!("  [course] {label}");
    }

    Ok(())
}
