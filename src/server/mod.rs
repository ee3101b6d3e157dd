//! Web server for the rendered page.
//!
//! The page is rendered once at startup; handlers only serve the result.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::Value;

use crate::page::Page;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub html: Arc<str>,
    pub style: Arc<str>,
    pub asset: Option<Arc<Value>>,
}

impl AppState {
    /// Render the page and capture what the handlers serve.
    pub fn from_page(page: &Page) -> Result<Self, askama::Error> {
        Ok(Self {
            html: Arc::from(page.render()?),
            style: Arc::from(page.style().as_str()),
            asset: page.asset().map(|a| Arc::new(a.value().clone())),
        })
    }
}

/// Start the web server.
pub async fn serve(page: &Page, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::from_page(page)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
