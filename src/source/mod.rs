//! Data source abstraction
//!
//! Everything the stores and the application query comes through the
//! [`DataSource`] trait. Two implementations exist: a mock generator for
//! development and tests, and an HTTP-backed client. Which one is
//! constructed is decided once, from configuration, at application startup.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::Result;
use crate::config::{SourceKind, TripKitConfig};
use crate::models::{Advisory, Event, EventsFilter, Forecast, Location, Trip};

pub mod http;
pub mod mock;

pub use http::HttpDataSource;
pub use mock::MockDataSource;

/// Capability interface over the forecast, location, advisory, trip and
/// event services.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the forecast for a coordinate pair
    async fn get_forecast(&self, lat: f64, lon: f64) -> Result<Forecast>;

    /// Search locations by free-text query
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>>;

    /// Fetch advisories for a country code; `"ALL"` applies no filtering
    async fn get_advisories(&self, country_code: &str) -> Result<Vec<Advisory>>;

    /// Persist a trip; the source may assign or replace its identifier
    async fn save_trip(&self, trip: Trip) -> Result<Trip>;

    /// Fetch the full trip collection
    async fn get_all_trips(&self) -> Result<Vec<Trip>>;

    /// Search events matching a filter specification
    async fn search_events(&self, filter: &EventsFilter) -> Result<Vec<Event>>;

    /// Fetch a single event by identifier
    async fn get_event_details(&self, event_id: &str) -> Result<Event>;
}

/// Construct the data source selected by configuration
pub fn build(config: &TripKitConfig) -> Result<Arc<dyn DataSource>> {
    match config.source.kind {
        SourceKind::Mock => {
            info!("using mock data source");
            Ok(Arc::new(MockDataSource::new()))
        }
        SourceKind::Http => {
            info!("using HTTP data source");
            Ok(Arc::new(HttpDataSource::new(config)?))
        }
    }
}
