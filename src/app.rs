//! Application state
//!
//! One explicit struct owning both stores and the data source, constructed
//! once at startup and passed by reference to whatever needs it. The
//! persistence plugin is wired to each store here, so every store mutation
//! after construction is snapshotted automatically.

use std::sync::Arc;

use tracing::info;

use crate::Result;
use crate::config::TripKitConfig;
use crate::models::{Advisory, Event, EventsFilter, Forecast, Location};
use crate::persist::{PersistencePlugin, SnapshotStore};
use crate::source::{self, DataSource};
use crate::store::{TripStore, UserStore, user};

/// Top-level application state
pub struct App {
    /// Trip collection and current-trip pointer
    pub trips: TripStore,
    /// Theme, unit, favorites and recents
    pub user: UserStore,
    source: Arc<dyn DataSource>,
}

impl App {
    /// Construct the application: build the configured data source, open
    /// the snapshot store and attach persistence to both stores.
    pub fn new(config: &TripKitConfig) -> Result<Self> {
        let source = source::build(config)?;

        let storage_path = config.storage_path();
        info!("opening snapshot store at {}", storage_path.display());
        let snapshots = Arc::new(SnapshotStore::open(&storage_path)?);
        let persistence = PersistencePlugin::new(snapshots);

        let mut trips = TripStore::new(Arc::clone(&source));
        let mut user = UserStore::new(Self::initial_dark_mode(config));
        persistence.attach(&mut trips)?;
        persistence.attach(&mut user)?;

        Ok(Self {
            trips,
            user,
            source,
        })
    }

    /// Dark-mode default: config override first, host environment probe
    /// otherwise. A persisted user snapshot takes precedence over both.
    fn initial_dark_mode(config: &TripKitConfig) -> bool {
        match config.appearance.color_scheme.as_deref() {
            Some(scheme) => scheme.eq_ignore_ascii_case("dark"),
            None => user::detect_dark_mode(),
        }
    }

    /// Forecast for a coordinate pair
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<Forecast> {
        self.source.get_forecast(lat, lon).await
    }

    /// Free-text location search
    pub async fn search_locations(&self, query: &str) -> Result<Vec<Location>> {
        self.source.search_locations(query).await
    }

    /// Advisories for a country code; `"ALL"` applies no filtering
    pub async fn advisories(&self, country_code: &str) -> Result<Vec<Advisory>> {
        self.source.get_advisories(country_code).await
    }

    /// Filtered, sorted event search
    pub async fn search_events(&self, filter: &EventsFilter) -> Result<Vec<Event>> {
        self.source.search_events(filter).await
    }

    /// Single event by identifier
    pub async fn event_details(&self, event_id: &str) -> Result<Event> {
        self.source.get_event_details(event_id).await
    }
}
