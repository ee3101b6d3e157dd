//! User-visible notices collected during startup.

use std::fmt;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
}

impl NoticeLevel {
    /// CSS class suffix used by the page template.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "error",
        }
    }
}

/// A message shown to the user as an inline banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.as_str(), self.message)
    }
}

/// Ordered list of notices.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.items.push(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Notice> {
        self.items
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Notices {
    type Item = &'a Notice;
    type IntoIter = std::slice::Iter<'a, Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
