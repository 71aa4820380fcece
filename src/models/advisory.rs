//! Travel advisory models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Travel advisory for a country. Scores run 1 to 5, where 5 is the
/// highest risk.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Advisory {
    pub id: String,
    pub country: String,
    pub country_code: String,
    pub continent: String,
    pub score: u8,
    pub last_updated: DateTime<Utc>,
    pub message: String,
    pub source: String,
    pub details: Vec<AdvisoryDetail>,
}

/// A single concern within an advisory
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdvisoryDetail {
    pub category: AdvisoryCategory,
    pub level: SeverityLevel,
    pub description: String,
}

/// Advisory concern category
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryCategory {
    Safety,
    Health,
    Transportation,
    Weather,
    Political,
}

/// Severity of an advisory concern
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl Advisory {
    /// Highest severity level present in the advisory details
    #[must_use]
    pub fn max_severity(&self) -> Option<SeverityLevel> {
        self.details.iter().map(|d| d.level).max()
    }
}
