use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tripkit::config::TripKitConfig;
use tripkit::models::{EventCategory, EventsFilter, SortKey};
use tripkit::{App, TripStore};

fn init_tracing(config: &TripKitConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = TripKitConfig::load_from_path(config_path)?;
    init_tracing(&config);

    let mut app = App::new(&config)?;

    app.trips.fetch_all().await;
    if let Some(message) = app.trips.error() {
        eprintln!("{message}");
    }

    println!("Trips ({}):", app.trips.trips().len());
    for trip in app.trips.trips() {
        println!(
            "  - {} to {} ({} to {}, {} travelers)",
            trip.name, trip.destination.name, trip.start_date, trip.end_date, trip.traveler_count
        );
    }

    if app.trips.trips().is_empty() {
        let draft = TripStore::create_draft();
        match app.trips.save(draft).await {
            Ok(saved) => println!("Created draft trip '{}' ({})", saved.name, saved.id),
            Err(err) => eprintln!("{}", err.user_message()),
        }
    }

    let filter = EventsFilter {
        categories: Some(vec![EventCategory::Music]),
        is_free: Some(false),
        sort_by: Some(SortKey::Popularity),
        ..EventsFilter::default()
    };
    let events = app.search_events(&filter).await?;

    println!("Paid music events ({}):", events.len());
    for event in events.iter().take(5) {
        let price = event
            .price
            .as_ref()
            .map_or_else(|| "free".to_string(), |p| format!("{:.0} {}", p.value, p.currency));
        println!(
            "  - {} on {} ({} attending, {price})",
            event.name, event.start_date, event.attending_count
        );
    }

    if let Some(destination) = app.trips.trips().first().map(|t| t.destination.clone()) {
        let forecast = app.forecast(destination.lat, destination.lon).await?;
        println!("Forecast for {} ({} days):", destination.name, forecast.daily.len());
        for day in forecast.daily.iter().take(3) {
            println!("  - {}: {} ({})", day.date, day.format_temperature(), day.description);
        }
    }

    Ok(())
}
