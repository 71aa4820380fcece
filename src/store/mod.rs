//! Client-side stores
//!
//! State lives in explicit store structs owned by the application, never in
//! globals. Each store mutates its state only through its defined
//! operations, and invokes every registered change listener synchronously
//! after each mutation. The persistence plugin is just another listener,
//! registered once at construction.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod trip;
pub mod user;

pub use trip::{TripState, TripStore};
pub use user::{TemperatureUnit, UserState, UserStore};

/// Listener invoked with the full state snapshot after every mutation
pub type ChangeListener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// A store whose full state can be snapshotted, restored and observed.
pub trait Store {
    /// Full state snapshot type
    type State: Serialize + DeserializeOwned + Clone;

    /// Stable identifier, used as the persistence key
    fn id(&self) -> &'static str;

    /// Snapshot of the current state
    fn state(&self) -> Self::State;

    /// Replace state from a previously captured snapshot. Listeners are not
    /// notified; hydration is not a mutation.
    fn hydrate(&mut self, state: Self::State);

    /// Register a change listener. Listeners run synchronously on the
    /// mutating thread, in registration order.
    fn on_change(&mut self, listener: ChangeListener<Self::State>);
}
