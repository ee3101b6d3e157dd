//! Static page text.

use crate::config::DEFAULT_LEARN_MORE_URL;

const INTRO: &str = "Streamlit is an open-source Python library designed to help developers \
create interactive and aesthetically pleasing web applications for data science \
and machine learning projects with minimal effort.";

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor \
in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur \
sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est \
laborum.";

/// Text and link targets shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub subheader: String,
    pub heading: String,
    pub intro: String,
    pub learn_more_label: String,
    pub learn_more_url: String,
    pub left_header: String,
    pub left_body: String,
    /// Animation height in pixels.
    pub animation_height: u32,
    /// Element key for the animation container.
    pub animation_key: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            subheader: "This is a basic Streamlit webpage".to_string(),
            heading: "This is to demonstrate Streamlit".to_string(),
            intro: INTRO.to_string(),
            learn_more_label: "Learn More >".to_string(),
            learn_more_url: DEFAULT_LEARN_MORE_URL.to_string(),
            left_header: "Left column header".to_string(),
            left_body: LOREM.to_string(),
            animation_height: 300,
            animation_key: "coding".to_string(),
        }
    }
}

impl PageContent {
    pub fn with_learn_more_url(mut self, url: impl Into<String>) -> Self {
        self.learn_more_url = url.into();
        self
    }
}
