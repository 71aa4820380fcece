//! Trip, itinerary and activity models

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{Advisory, Forecast, Place};
use crate::error::TripKitError;

/// A saved or draft trip. A draft has an empty identifier until the data
/// source persists it and assigns one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination: Destination,
    pub traveler_count: u32,
    pub itinerary: Vec<ItineraryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Cached forecast for the destination, refreshed opportunistically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
    /// Cached advisories for the destination country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisories: Option<Vec<Advisory>>,
}

/// Trip destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Destination {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
}

/// One day of a trip itinerary. Day indices are 1-based and sequential
/// within a trip.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryItem {
    pub id: String,
    pub day: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

/// A planned activity within an itinerary day
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Place>,
    pub category: ActivityCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub is_booked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Activity category
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Sightseeing,
    Dining,
    Accommodation,
    Transportation,
    Event,
    #[default]
    Other,
}

impl Trip {
    /// Check the trip's structural invariants: date range ordering, a
    /// positive traveler count, sequential 1-based itinerary days and
    /// ordered activity time windows.
    pub fn validate(&self) -> Result<(), TripKitError> {
        if self.end_date < self.start_date {
            return Err(TripKitError::validation(
                "trip end date must not precede its start date",
            ));
        }
        if self.traveler_count == 0 {
            return Err(TripKitError::validation(
                "trip must have at least one traveler",
            ));
        }
        for (index, item) in self.itinerary.iter().enumerate() {
            let expected = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
            if item.day != expected {
                return Err(TripKitError::validation(format!(
                    "itinerary day {} out of sequence, expected {expected}",
                    item.day
                )));
            }
            for activity in &item.activities {
                if let (Some(start), Some(end)) = (activity.start_time, activity.end_time)
                    && start > end
                {
                    return Err(TripKitError::validation(format!(
                        "activity '{}' ends before it starts",
                        activity.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Trip duration in whole days, inclusive of the start day
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl Activity {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ActivityCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            start_time: None,
            end_time: None,
            location: None,
            category,
            cost: None,
            currency: None,
            is_booked: false,
            booking_reference: None,
            notes: None,
        }
    }
}
