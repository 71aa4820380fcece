//! Trip store
//!
//! Owns the trip collection and the "current trip" pointer. The pointer is
//! an identifier into the collection, never a second copy of the trip.
//! Failed data source calls leave the prior collection untouched; the
//! failure is logged and reduced to a static user-facing message in the
//! error field. `save` additionally re-raises so a caller can react, while
//! `fetch_all` does not.

use std::sync::Arc;

use chrono::{Duration, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{ChangeListener, Store};
use crate::Result;
use crate::models::{Destination, Trip};
use crate::source::DataSource;

/// User-facing message set when the trip collection cannot be loaded
pub const FETCH_TRIPS_ERROR: &str = "Failed to load trips. Please try again.";
/// User-facing message set when a trip cannot be saved
pub const SAVE_TRIP_ERROR: &str = "Failed to save trip. Please try again.";

/// Full trip store state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TripState {
    /// Ordered trip collection; identifiers are unique once assigned
    pub trips: Vec<Trip>,
    /// Identifier of the trip being viewed or edited, if any
    pub current_trip_id: Option<String>,
    /// True only while a request is in flight
    pub is_loading: bool,
    /// Message from the most recent failed operation
    pub error: Option<String>,
}

/// Store managing the trip collection
pub struct TripStore {
    state: TripState,
    source: Arc<dyn DataSource>,
    listeners: Vec<ChangeListener<TripState>>,
}

impl TripStore {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            state: TripState::default(),
            source,
            listeners: Vec::new(),
        }
    }

    /// Current full state
    #[must_use]
    pub fn snapshot(&self) -> &TripState {
        &self.state
    }

    /// Trip collection
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.state.trips
    }

    /// Resolve the current-trip pointer into the collection
    #[must_use]
    pub fn current_trip(&self) -> Option<&Trip> {
        let id = self.state.current_trip_id.as_deref()?;
        self.state.trips.iter().find(|trip| trip.id == id)
    }

    /// Message from the most recent failed operation
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// True while a request is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Replace the whole collection from the data source. On failure the
    /// prior collection is kept and the error field is set; the failure is
    /// not re-raised.
    pub async fn fetch_all(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
        self.notify();

        match self.source.get_all_trips().await {
            Ok(trips) => {
                debug!("fetched {} trips", trips.len());
                self.state.trips = trips;
            }
            Err(err) => {
                error!("failed to fetch trips: {err}");
                self.state.error = Some(FETCH_TRIPS_ERROR.to_string());
            }
        }

        self.state.is_loading = false;
        self.notify();
    }

    /// Persist a trip through the data source. On success the returned trip
    /// (which may carry a newly assigned identifier) replaces the matching
    /// entry in place, or is appended when no entry matches, and becomes
    /// current. On failure the collection is untouched, the error field is
    /// set and the failure is re-raised.
    pub async fn save(&mut self, trip: Trip) -> Result<Trip> {
        self.state.is_loading = true;
        self.state.error = None;
        self.notify();

        let outcome = match self.source.save_trip(trip).await {
            Ok(saved) => {
                match self.state.trips.iter().position(|t| t.id == saved.id) {
                    Some(index) => self.state.trips[index] = saved.clone(),
                    None => self.state.trips.push(saved.clone()),
                }
                self.state.current_trip_id = Some(saved.id.clone());
                Ok(saved)
            }
            Err(err) => {
                error!("failed to save trip: {err}");
                self.state.error = Some(SAVE_TRIP_ERROR.to_string());
                Err(err)
            }
        };

        self.state.is_loading = false;
        self.notify();
        outcome
    }

    /// Point at a trip (or clear the pointer). Pure state assignment.
    pub fn set_current(&mut self, trip: Option<&Trip>) {
        self.state.current_trip_id = trip.map(|t| t.id.clone());
        self.notify();
    }

    /// Produce an unsaved draft: empty identifier, default name, a one-week
    /// date range starting today, one traveler, empty destination and
    /// itinerary. Does not touch store state.
    #[must_use]
    pub fn create_draft() -> Trip {
        let today = Local::now().date_naive();
        Trip {
            id: String::new(),
            name: "New Trip".to_string(),
            start_date: today,
            end_date: today + Duration::days(7),
            destination: Destination::default(),
            traveler_count: 1,
            itinerary: Vec::new(),
            notes: None,
            forecast: None,
            advisories: None,
        }
    }

    /// Remove a trip from the collection. Local-only, no data source call.
    /// Clears the current pointer when it pointed at the removed trip.
    pub fn delete(&mut self, trip_id: &str) {
        self.state.trips.retain(|trip| trip.id != trip_id);
        if self.state.current_trip_id.as_deref() == Some(trip_id) {
            self.state.current_trip_id = None;
        }
        self.notify();
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}

impl Store for TripStore {
    type State = TripState;

    fn id(&self) -> &'static str {
        "trip"
    }

    fn state(&self) -> TripState {
        self.state.clone()
    }

    fn hydrate(&mut self, state: TripState) {
        self.state = state;
    }

    fn on_change(&mut self, listener: ChangeListener<TripState>) {
        self.listeners.push(listener);
    }
}
