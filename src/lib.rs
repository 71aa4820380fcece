//! `TripKit` - trip planning, weather and travel advisory toolkit
//!
//! This library provides the state-management core of a trip planner:
//! client-side stores with automatic local snapshot persistence, a pure
//! event filter/sort engine, and pluggable data sources for forecast,
//! advisory, trip and event data.

pub mod app;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod persist;
pub mod source;
pub mod store;

// Re-export core types for public API
pub use app::App;
pub use config::{SourceKind, TripKitConfig};
pub use error::TripKitError;
pub use filter::filter_events;
pub use models::{Advisory, Event, EventsFilter, Forecast, Location, SortKey, Trip};
pub use persist::{PersistencePlugin, SnapshotStore};
pub use source::{DataSource, HttpDataSource, MockDataSource};
pub use store::{Store, TripStore, UserStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripKitError>;
