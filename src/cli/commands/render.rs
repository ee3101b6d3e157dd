//! Render command.

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::config::Settings;
use crate::page;

/// Load the page and write the rendered HTML to `output` or stdout.
pub async fn cmd_render(settings: &Settings, output: Option<&Path>) -> anyhow::Result<()> {
    let page = page::initialize(settings).await?;

    for notice in page.notices().errors() {
        eprintln!("{} {}", style("✗").red(), notice.message);
    }

    let html = page.render()?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &html)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} ({} bytes)",
                style("✓").green(),
                path.display(),
                html.len()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}
