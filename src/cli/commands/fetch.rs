//! Fetch command.

use console::style;

use crate::assets::load_asset;
use crate::config::Settings;
use crate::http_client::HttpClient;

/// Fetch the asset once and print it. Unlike page startup, a failure here
/// is the command's result and exits non-zero.
pub async fn cmd_fetch(settings: &Settings, url: &str) -> anyhow::Result<()> {
    let client = HttpClient::with_user_agent(settings.timeout(), settings.user_agent.as_deref())?;

    eprintln!(
        "{} Fetching {} (timeout {}s)",
        style("→").cyan(),
        url,
        client.timeout().as_secs()
    );

    match load_asset(&client, url).await {
        Ok(payload) => {
            eprintln!(
                "  {} Loaded {} document",
                style("✓").green(),
                payload.kind().as_str()
            );
            println!("{}", serde_json::to_string_pretty(payload.value())?);
            Ok(())
        }
        Err(e) => {
            eprintln!("  {} {}", style("✗").red(), e);
            Err(e.into())
        }
    }
}
