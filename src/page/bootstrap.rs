//! Startup sequence: stylesheet, then asset, then page.

use thiserror::Error;

use super::{Page, PageContent};
use crate::assets::{fetch_asset, load_style, StyleError};
use crate::config::Settings;
use crate::http_client::HttpClient;
use crate::notice::Notices;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Load everything the page needs, in order.
///
/// A missing stylesheet aborts startup. A failed asset fetch leaves a
/// notice on the page and the animation out.
pub async fn initialize(settings: &Settings) -> Result<Page, StartupError> {
    let style = load_style(&settings.stylesheet).await?;

    let client = HttpClient::with_user_agent(settings.timeout(), settings.user_agent.as_deref())?;
    let mut notices = Notices::new();
    let asset = fetch_asset(&client, &settings.asset_url, &mut notices).await;

    if let Some(ref payload) = asset {
        tracing::info!(kind = payload.kind().as_str(), "animation asset ready");
    }

    let content = PageContent::default().with_learn_more_url(settings.learn_more_url.clone());

    Ok(Page::new(settings.page.clone(), style)
        .with_content(content)
        .with_asset(asset)
        .with_notices(notices)
        .with_player_url(settings.player_url.clone()))
}
