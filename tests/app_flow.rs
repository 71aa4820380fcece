//! End-to-end tests over the application state, mock data source and
//! snapshot persistence

use tempfile::TempDir;

use tripkit::config::TripKitConfig;
use tripkit::models::{EventCategory, EventsFilter, Location, SortKey};
use tripkit::store::TemperatureUnit;
use tripkit::{App, TripStore};

fn config_for(dir: &TempDir) -> TripKitConfig {
    let mut config = TripKitConfig::default();
    config.storage.path = dir.path().to_string_lossy().into_owned();
    config
}

#[tokio::test]
async fn trip_store_flow_fetch_save_delete() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config_for(&dir)).unwrap();

    app.trips.fetch_all().await;
    assert_eq!(app.trips.trips().len(), 2);

    // Saving a draft assigns an id, appends and makes it current
    let draft = TripStore::create_draft();
    assert!(draft.id.is_empty());
    let saved = app.trips.save(draft).await.unwrap();
    assert!(!saved.id.is_empty());
    assert_eq!(app.trips.trips().len(), 3);
    assert_eq!(app.trips.current_trip().unwrap().id, saved.id);

    // Saving an existing trip replaces it in place
    let mut tokyo = app.trips.trips()[1].clone();
    tokyo.name = "Tokyo Revisited".to_string();
    app.trips.save(tokyo).await.unwrap();
    assert_eq!(app.trips.trips().len(), 3);
    assert_eq!(app.trips.trips()[1].name, "Tokyo Revisited");

    // Deleting the current trip clears the pointer
    app.trips.delete(&saved.id);
    assert!(app.trips.current_trip().is_none());
    assert_eq!(app.trips.trips().len(), 2);
}

#[tokio::test]
async fn state_survives_application_restart() {
    let dir = TempDir::new().unwrap();
    let saved_id;

    {
        let mut app = App::new(&config_for(&dir)).unwrap();
        app.trips.fetch_all().await;
        let saved = app.trips.save(TripStore::create_draft()).await.unwrap();
        saved_id = saved.id;

        app.user.toggle_dark_mode();
        app.user.set_temperature_unit(TemperatureUnit::Fahrenheit);
        app.user
            .set_current_location(Location::new("Paris", 48.8566, 2.3522, "FR"));
    }

    // A fresh App hydrates both stores from their snapshots
    let app = App::new(&config_for(&dir)).unwrap();

    assert_eq!(app.trips.trips().len(), 3);
    assert_eq!(app.trips.current_trip().unwrap().id, saved_id);

    assert!(app.user.snapshot().dark_mode);
    assert_eq!(
        app.user.snapshot().temperature_unit,
        TemperatureUnit::Fahrenheit
    );
    assert_eq!(app.user.snapshot().recent_searches.len(), 1);
}

#[tokio::test]
async fn persisted_preferences_override_initial_dark_mode() {
    let dir = TempDir::new().unwrap();

    {
        let mut app = App::new(&config_for(&dir)).unwrap();
        app.user.toggle_dark_mode();
        assert!(app.user.snapshot().dark_mode);
    }

    // Even with a light config override, the snapshot wins on restart
    let mut config = config_for(&dir);
    config.appearance.color_scheme = Some("light".to_string());
    let app = App::new(&config).unwrap();
    assert!(app.user.snapshot().dark_mode);
}

#[tokio::test]
async fn event_search_honors_filter_and_sort() {
    let dir = TempDir::new().unwrap();
    let app = App::new(&config_for(&dir)).unwrap();

    let filter = EventsFilter {
        categories: Some(vec![EventCategory::Music, EventCategory::Festivals]),
        is_free: Some(false),
        sort_by: Some(SortKey::Date),
        ..EventsFilter::default()
    };
    let events = app.search_events(&filter).await.unwrap();

    assert!(!events.is_empty());
    assert!(events.len() <= 20);
    for event in &events {
        assert!(matches!(
            event.category,
            EventCategory::Music | EventCategory::Festivals
        ));
        assert!(!event.price.as_ref().unwrap().is_free);
    }
    assert!(events.windows(2).all(|w| w[0].start_date <= w[1].start_date));
}

#[tokio::test]
async fn advisory_lookup_by_country() {
    let dir = TempDir::new().unwrap();
    let app = App::new(&config_for(&dir)).unwrap();

    let japan = app.advisories("JP").await.unwrap();
    assert_eq!(japan.len(), 1);
    assert_eq!(japan[0].score, 1);

    let all = app.advisories("ALL").await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn location_search_feeds_recents() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config_for(&dir)).unwrap();

    let results = app.search_locations("london").await.unwrap();
    assert_eq!(results.len(), 1);

    app.user.set_current_location(results[0].clone());
    // Repeating the search result does not duplicate the recent entry
    app.user.set_current_location(results[0].clone());
    assert_eq!(app.user.snapshot().recent_searches.len(), 1);
}
