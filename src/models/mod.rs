//! Core data models shared across stores, data sources and the filter engine

pub mod advisory;
pub mod event;
pub mod forecast;
pub mod location;
pub mod trip;

pub use advisory::{Advisory, AdvisoryCategory, AdvisoryDetail, SeverityLevel};
pub use event::{Event, EventCategory, EventPrice, EventsFilter, SortKey};
pub use forecast::{DailyForecast, Forecast};
pub use location::{Location, Place};
pub use trip::{Activity, ActivityCategory, Destination, ItineraryItem, Trip};
