//! Askama template struct for the page.

use askama::Template;

use super::content::PageContent;

/// Notice row for the banner.
pub struct NoticeRow {
    pub level: &'static str,
    pub message: String,
}

/// The single page.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    pub layout_class: &'a str,
    pub inline_style: String,
    pub notices: Vec<NoticeRow>,
    pub has_notices: bool,
    pub content: &'a PageContent,
    pub has_asset: bool,
    pub asset_json: String,
    pub player_url: &'a str,
}
