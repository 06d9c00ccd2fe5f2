// Day page module
// One day sheet within a plan document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day sheet of a plan document
///
/// The reorderer treats the page as opaque apart from its `position` label,
/// which is refreshed from the visual order every time the plan is
/// rearranged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPage {
    /// 1-based sheet label matching the reading order; runtime state,
    /// never written back to the document
    #[serde(default, skip_serializing)]
    pub position: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Free-form lines printed on the sheet
    #[serde(default)]
    pub entries: Vec<String>,
}

impl DayPage {
    /// Create a new page with a required, non-empty title
    ///
    /// # Examples
    /// ```
    /// use plan_binder::models::page::DayPage;
    ///
    /// let page = DayPage::new("Day 1 - Squat").unwrap();
    /// assert_eq!(page.position, 0);
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Page title cannot be empty".to_string());
        }

        Ok(Self {
            position: 0,
            title,
            date: None,
            entries: Vec::new(),
        })
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_entries(mut self, entries: Vec<String>) -> Self {
        self.entries = entries;
        self
    }

    /// Validate the page
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Page title cannot be empty".to_string());
        }
        Ok(())
    }
}
