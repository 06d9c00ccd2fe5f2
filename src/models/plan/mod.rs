// Plan module
// A plan document: ordered day pages plus the order they are currently shown in

use serde::{Deserialize, Serialize};

use super::page::DayPage;

/// How the pages of a plan are currently arranged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrder {
    /// Sequential reading order, day 1 first
    #[default]
    Reading,
    /// Booklet imposition order for double-sided printing and folding
    Booklet,
}

impl PageOrder {
    /// The order the next toggle switches to
    pub fn toggled(self) -> Self {
        match self {
            PageOrder::Reading => PageOrder::Booklet,
            PageOrder::Booklet => PageOrder::Reading,
        }
    }

    /// Parse an order label. Anything that is not "booklet" reads as `Reading`.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("booklet") {
            PageOrder::Booklet
        } else {
            PageOrder::Reading
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageOrder::Reading => "reading",
            PageOrder::Booklet => "booklet",
        }
    }
}

/// A plan document holding day pages in their current visual order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub title: String,
    pub pages: Vec<DayPage>,
    /// Current arrangement; runtime state only, never written to disk
    #[serde(skip)]
    pub order: PageOrder,
}

impl Plan {
    /// Create a new plan with a required, non-empty title
    pub fn new(title: impl Into<String>, pages: Vec<DayPage>) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Plan title cannot be empty".to_string());
        }

        Ok(Self {
            title,
            pages,
            order: PageOrder::default(),
        })
    }

    /// Validate the plan
    ///
    /// A plan with no day pages is unusable; callers that load documents
    /// should surface this as a hard error rather than showing nothing.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Plan title cannot be empty".to_string());
        }

        if self.pages.is_empty() {
            return Err("Plan contains no day pages".to_string());
        }

        for page in &self.pages {
            page.validate()?;
        }

        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
