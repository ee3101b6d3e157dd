//! Page model and rendering.
//!
//! A `Page` is built once at startup from an explicit `PageConfig`, the
//! loaded stylesheet and the (optional) animation asset, then rendered to a
//! complete HTML document.

mod bootstrap;
mod content;
mod template;

pub use bootstrap::{initialize, StartupError};
pub use content::PageContent;

use serde::{Deserialize, Serialize};

use crate::assets::{AssetPayload, StyleText};
use crate::config::DEFAULT_PLAYER_URL;
use crate::notice::Notices;
use template::{NoticeRow, PageTemplate};

/// Page layout mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Use the full browser width.
    #[default]
    Wide,
    /// Fixed-width centered column.
    Centered,
}

impl Layout {
    pub fn css_class(&self) -> &'static str {
        match self {
            Layout::Wide => "layout-wide",
            Layout::Centered => "layout-centered",
        }
    }
}

/// Page-wide settings applied once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub layout: Layout,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Basic Webpage".to_string(),
            layout: Layout::Wide,
        }
    }
}

/// A fully loaded page, ready to render.
#[derive(Debug, Clone)]
pub struct Page {
    config: PageConfig,
    content: PageContent,
    style: StyleText,
    asset: Option<AssetPayload>,
    notices: Notices,
    player_url: String,
}

impl Page {
    pub fn new(config: PageConfig, style: StyleText) -> Self {
        Self {
            config,
            content: PageContent::default(),
            style,
            asset: None,
            notices: Notices::new(),
            player_url: DEFAULT_PLAYER_URL.to_string(),
        }
    }

    pub fn with_content(mut self, content: PageContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_asset(mut self, asset: Option<AssetPayload>) -> Self {
        self.asset = asset;
        self
    }

    pub fn with_notices(mut self, notices: Notices) -> Self {
        self.notices = notices;
        self
    }

    pub fn with_player_url(mut self, url: impl Into<String>) -> Self {
        self.player_url = url.into();
        self
    }

    pub fn style(&self) -> &StyleText {
        &self.style
    }

    pub fn asset(&self) -> Option<&AssetPayload> {
        self.asset.as_ref()
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Render the page to a complete HTML document.
    pub fn render(&self) -> Result<String, askama::Error> {
        use askama::Template;

        let notices: Vec<NoticeRow> = self
            .notices
            .iter()
            .map(|n| NoticeRow {
                level: n.level.as_str(),
                message: n.message.clone(),
            })
            .collect();

        let template = PageTemplate {
            title: &self.config.title,
            layout_class: self.config.layout.css_class(),
            inline_style: self.style.to_inline_html(),
            has_notices: !notices.is_empty(),
            notices,
            content: &self.content,
            has_asset: self.asset.is_some(),
            asset_json: self
                .asset
                .as_ref()
                .map(|a| a.to_script_json())
                .unwrap_or_default(),
            player_url: &self.player_url,
        };

        template.render()
    }
}
