//! User preference store
//!
//! Theme, temperature unit, favorite locations and recent searches. All
//! operations are synchronous; the only side effects are change
//! notification and the theme hook invoked when dark mode toggles.
//! Favorite and recent-search deduplication treat two locations as the
//! same place iff both coordinates match exactly.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::{ChangeListener, Store};
use crate::models::Location;

/// Maximum number of remembered recent searches
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Temperature unit preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// Full user preference state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserState {
    pub dark_mode: bool,
    /// No two entries share coordinates
    pub favorite_locations: Vec<Location>,
    pub current_location: Option<Location>,
    pub temperature_unit: TemperatureUnit,
    /// Most-recent-first, capped at [`MAX_RECENT_SEARCHES`], coordinate-deduped
    pub recent_searches: Vec<Location>,
}

/// Hook invoked with the new dark-mode flag whenever the theme toggles
pub type ThemeHook = Arc<dyn Fn(bool) + Send + Sync>;

/// Store managing user preferences
pub struct UserStore {
    state: UserState,
    listeners: Vec<ChangeListener<UserState>>,
    theme_hook: Option<ThemeHook>,
}

/// Probe the host environment for a dark color-scheme preference.
/// Recognizes `TRIPKIT_COLOR_SCHEME=dark`; anything else means light.
#[must_use]
pub fn detect_dark_mode() -> bool {
    std::env::var("TRIPKIT_COLOR_SCHEME").is_ok_and(|v| v.eq_ignore_ascii_case("dark"))
}

impl UserStore {
    /// Create a store with the given initial dark-mode flag (usually from
    /// [`detect_dark_mode`] or a configuration override)
    #[must_use]
    pub fn new(dark_mode: bool) -> Self {
        Self {
            state: UserState {
                dark_mode,
                ..UserState::default()
            },
            listeners: Vec::new(),
            theme_hook: None,
        }
    }

    /// Current full state
    #[must_use]
    pub fn snapshot(&self) -> &UserState {
        &self.state
    }

    /// Register the hook invoked when dark mode toggles
    pub fn set_theme_hook(&mut self, hook: ThemeHook) {
        self.theme_hook = Some(hook);
    }

    /// Flip dark mode and apply the theme side effect
    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        debug!(dark_mode = self.state.dark_mode, "theme toggled");
        if let Some(hook) = &self.theme_hook {
            hook(self.state.dark_mode);
        }
        self.notify();
    }

    /// Set the active location and push it onto the recent-search list
    pub fn set_current_location(&mut self, location: Location) {
        self.push_recent_search(location.clone());
        self.state.current_location = Some(location);
        self.notify();
    }

    /// Add a favorite unless a location with the same coordinates exists
    pub fn add_favorite_location(&mut self, location: Location) {
        let exists = self
            .state
            .favorite_locations
            .iter()
            .any(|fav| fav.same_coordinates(&location));
        if !exists {
            self.state.favorite_locations.push(Location {
                is_favorite: true,
                ..location
            });
            self.notify();
        }
    }

    /// Remove the favorite with the same coordinates, if present
    pub fn remove_favorite_location(&mut self, location: &Location) {
        self.state
            .favorite_locations
            .retain(|fav| !fav.same_coordinates(location));
        self.notify();
    }

    /// Add or remove a favorite depending on whether it is present
    pub fn toggle_favorite_location(&mut self, location: Location) {
        let exists = self
            .state
            .favorite_locations
            .iter()
            .any(|fav| fav.same_coordinates(&location));
        if exists {
            self.remove_favorite_location(&location);
        } else {
            self.add_favorite_location(location);
        }
    }

    /// Check whether a location is a favorite (by coordinates)
    #[must_use]
    pub fn is_favorite(&self, location: &Location) -> bool {
        self.state
            .favorite_locations
            .iter()
            .any(|fav| fav.same_coordinates(location))
    }

    /// Set the temperature unit preference
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.state.temperature_unit = unit;
        self.notify();
    }

    /// Forget all recent searches
    pub fn clear_recent_searches(&mut self) {
        self.state.recent_searches.clear();
        self.notify();
    }

    /// Move (or insert) a location to the front of the recent-search list,
    /// keeping it coordinate-deduped and capped
    fn push_recent_search(&mut self, location: Location) {
        self.state
            .recent_searches
            .retain(|recent| !recent.same_coordinates(&location));
        self.state.recent_searches.insert(0, location);
        self.state.recent_searches.truncate(MAX_RECENT_SEARCHES);
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}

impl Store for UserStore {
    type State = UserState;

    fn id(&self) -> &'static str {
        "user"
    }

    fn state(&self) -> UserState {
        self.state.clone()
    }

    fn hydrate(&mut self, state: UserState) {
        self.state = state;
    }

    fn on_change(&mut self, listener: ChangeListener<UserState>) {
        self.listeners.push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn location(name: &str, lat: f64, lon: f64) -> Location {
        Location::new(name, lat, lon, "XX")
    }

    #[test]
    fn test_recent_searches_capped_at_five_most_recent_first() {
        let mut store = UserStore::new(false);
        for i in 0..8 {
            store.set_current_location(location(&format!("L{i}"), f64::from(i), 0.0));
        }

        let recents = &store.snapshot().recent_searches;
        assert_eq!(recents.len(), MAX_RECENT_SEARCHES);
        assert_eq!(recents[0].name, "L7");
        assert_eq!(recents[4].name, "L3");
    }

    #[test]
    fn test_repeated_search_moves_to_front_without_duplicate() {
        let mut store = UserStore::new(false);
        store.set_current_location(location("A", 1.0, 1.0));
        store.set_current_location(location("B", 2.0, 2.0));
        store.set_current_location(location("A", 1.0, 1.0));

        let recents = &store.snapshot().recent_searches;
        assert_eq!(recents.len(), 2);
        assert_eq!(recents[0].name, "A");
        assert_eq!(recents[1].name, "B");
    }

    #[test]
    fn test_set_current_location_updates_pointer() {
        let mut store = UserStore::new(false);
        store.set_current_location(location("Paris", 48.8566, 2.3522));
        assert_eq!(store.snapshot().current_location.as_ref().unwrap().name, "Paris");
    }

    #[test]
    fn test_favorites_deduped_by_coordinates() {
        let mut store = UserStore::new(false);
        store.add_favorite_location(location("Paris", 48.8566, 2.3522));
        store.add_favorite_location(location("Paname", 48.8566, 2.3522));

        assert_eq!(store.snapshot().favorite_locations.len(), 1);
        assert!(store.snapshot().favorite_locations[0].is_favorite);
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let mut store = UserStore::new(false);
        let paris = location("Paris", 48.8566, 2.3522);

        store.toggle_favorite_location(paris.clone());
        assert!(store.is_favorite(&paris));

        store.toggle_favorite_location(paris.clone());
        assert!(!store.is_favorite(&paris));
        assert!(store.snapshot().favorite_locations.is_empty());
    }

    #[test]
    fn test_toggle_dark_mode_invokes_theme_hook() {
        use std::sync::Mutex;

        let mut store = UserStore::new(false);
        let applied: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&applied);
        store.set_theme_hook(Arc::new(move |dark| sink.lock().unwrap().push(dark)));

        store.toggle_dark_mode();
        store.toggle_dark_mode();

        assert!(!store.snapshot().dark_mode);
        assert_eq!(applied.lock().unwrap().as_slice(), &[true, false]);
    }

    #[rstest]
    #[case(TemperatureUnit::Fahrenheit)]
    #[case(TemperatureUnit::Celsius)]
    fn test_set_temperature_unit(#[case] unit: TemperatureUnit) {
        let mut store = UserStore::new(false);
        store.set_temperature_unit(unit);
        assert_eq!(store.snapshot().temperature_unit, unit);
    }

    #[test]
    fn test_clear_recent_searches() {
        let mut store = UserStore::new(false);
        store.set_current_location(location("A", 1.0, 1.0));
        store.clear_recent_searches();
        assert!(store.snapshot().recent_searches.is_empty());
        // The current location pointer survives clearing recents
        assert!(store.snapshot().current_location.is_some());
    }
}
