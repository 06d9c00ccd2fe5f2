// Plan document service
// Loading and saving plan documents in TOML form

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::page::DayPage;
use crate::models::plan::Plan;
use crate::services::imposition;

/// Reasons a plan document cannot be used
#[derive(Debug, Error)]
pub enum PlanDocumentError {
    /// The document parsed but holds no day pages. There is nothing to
    /// show or rearrange, so loading fails rather than opening an empty
    /// viewer.
    #[error("Plan document holds no day pages")]
    EmptyPlan,
    #[error("Invalid plan document: {0}")]
    Invalid(String),
}

pub struct PlanService;

impl PlanService {
    /// Load a plan document from disk.
    ///
    /// Position labels are seeded from the document order, so a freshly
    /// loaded plan is in reading order with pages labeled 1..=N.
    pub fn load(path: &Path) -> Result<Plan> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan document {}", path.display()))?;

        let mut plan: Plan = toml::from_str(&text)
            .with_context(|| format!("Failed to parse plan document {}", path.display()))?;

        if plan.pages.is_empty() {
            return Err(PlanDocumentError::EmptyPlan.into());
        }
        plan.validate().map_err(PlanDocumentError::Invalid)?;

        imposition::relabel(&mut plan.pages);

        log::info!("Loaded plan '{}' with {} pages", plan.title, plan.page_count());
        Ok(plan)
    }

    /// Save a plan document to disk
    pub fn save(plan: &Plan, path: &Path) -> Result<()> {
        let text = Self::to_toml(plan)?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write plan document {}", path.display()))?;

        log::info!("Saved plan '{}' to {}", plan.title, path.display());
        Ok(())
    }

    pub fn to_toml(plan: &Plan) -> Result<String> {
        toml::to_string_pretty(plan).context("Failed to serialize plan document")
    }

    /// The sample document written by `plan-binder init`
    pub fn starter_plan() -> Plan {
        let monday = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let pages = vec![
            DayPage::new("Day 1 - Squat")
                .unwrap()
                .with_date(monday)
                .with_entries(vec![
                    "Back Squat 5x5".to_string(),
                    "Leg Press 3x10".to_string(),
                ]),
            DayPage::new("Day 2 - Bench")
                .unwrap()
                .with_date(monday + chrono::Duration::days(1))
                .with_entries(vec![
                    "Bench Press 5x5".to_string(),
                    "Dips 3x12".to_string(),
                ]),
            DayPage::new("Day 3 - Deadlift")
                .unwrap()
                .with_date(monday + chrono::Duration::days(3))
                .with_entries(vec!["Deadlift 5x3".to_string()]),
            DayPage::new("Day 4 - Press")
                .unwrap()
                .with_date(monday + chrono::Duration::days(4))
                .with_entries(vec![
                    "Overhead Press 5x5".to_string(),
                    "Chin-ups 3x8".to_string(),
                ]),
        ];

        Plan::new("Starter Training Block", pages).unwrap()
    }
}
