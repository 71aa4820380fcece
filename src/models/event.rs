//! Event model and the filter specification consumed by the filter engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Place;

/// A local event at or near a destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub location: Place,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<EventPrice>,
    pub organizer: String,
    pub attending_count: u32,
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Event category
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Music,
    Food,
    Arts,
    Sports,
    Outdoors,
    Festivals,
    Nightlife,
    Family,
    Business,
    Other,
}

impl EventCategory {
    /// Display name, also used when generating mock event titles
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Music => "Music",
            EventCategory::Food => "Food",
            EventCategory::Arts => "Arts",
            EventCategory::Sports => "Sports",
            EventCategory::Outdoors => "Outdoors",
            EventCategory::Festivals => "Festivals",
            EventCategory::Nightlife => "Nightlife",
            EventCategory::Family => "Family",
            EventCategory::Business => "Business",
            EventCategory::Other => "Other",
        }
    }
}

/// Ticket price for an event
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventPrice {
    pub value: f64,
    pub currency: String,
    pub is_free: bool,
}

impl EventPrice {
    #[must_use]
    pub fn free(currency: impl Into<String>) -> Self {
        Self {
            value: 0.0,
            currency: currency.into(),
            is_free: true,
        }
    }

    #[must_use]
    pub fn paid(value: f64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
            is_free: false,
        }
    }
}

/// Filter specification for event searches. All supplied criteria must hold
/// for an event to pass.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EventsFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    /// An empty or absent set applies no category filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<EventCategory>>,
    /// Inclusive `[min, max]` bounds on the price value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    /// Case-insensitive substring match against name or description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
}

/// Ordering applied after filtering
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Start date, ascending
    Date,
    /// Attendance count, descending
    Popularity,
    /// Price value ascending, missing price treated as 0
    Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&EventCategory::Nightlife).unwrap();
        assert_eq!(json, "\"nightlife\"");
    }

    #[test]
    fn test_filter_round_trips_through_json() {
        let filter = EventsFilter {
            date_from: NaiveDate::from_ymd_opt(2026, 7, 1),
            categories: Some(vec![EventCategory::Music, EventCategory::Food]),
            price_range: Some((10.0, 50.0)),
            is_free: Some(false),
            search_term: Some("festival".to_string()),
            sort_by: Some(SortKey::Popularity),
            ..EventsFilter::default()
        };
        let json = serde_json::to_string(&filter).unwrap();
        let back: EventsFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);
    }

    #[test]
    fn test_price_constructors() {
        assert!(EventPrice::free("USD").is_free);
        let paid = EventPrice::paid(25.0, "EUR");
        assert!(!paid.is_free);
        assert_eq!(paid.value, 25.0);
    }
}
