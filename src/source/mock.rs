//! Mock data source for development and tests
//!
//! Generates the same shaped data the HTTP endpoints would return, without
//! network access. Event searches run through the real filter engine so the
//! mock behaves like a server-side search.

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveTime, Utc};
use rand::RngExt;
use rand::distr::Alphanumeric;
use tracing::debug;

use super::DataSource;
use crate::Result;
use crate::filter;
use crate::models::{
    Activity, ActivityCategory, Advisory, AdvisoryCategory, AdvisoryDetail, DailyForecast,
    Destination, Event, EventCategory, EventPrice, EventsFilter, Forecast, ItineraryItem,
    Location, Place, SeverityLevel, Trip,
};

/// Number of events generated per search
const MOCK_EVENT_COUNT: usize = 20;

/// Categories cycled through when generating events ("other" is reserved
/// for real data the generator never produces)
const EVENT_CATEGORIES: [EventCategory; 9] = [
    EventCategory::Music,
    EventCategory::Food,
    EventCategory::Arts,
    EventCategory::Sports,
    EventCategory::Outdoors,
    EventCategory::Festivals,
    EventCategory::Nightlife,
    EventCategory::Family,
    EventCategory::Business,
];

/// Static mock data source
#[derive(Debug, Default)]
pub struct MockDataSource;

impl MockDataSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn generate_events(filter: &EventsFilter) -> Vec<Event> {
        let mut rng = rand::rng();
        let today = Local::now().date_naive();

        (0..MOCK_EVENT_COUNT)
            .map(|i| {
                let category = EVENT_CATEGORIES[i % EVENT_CATEGORIES.len()];
                let start_date = filter
                    .date_from
                    .unwrap_or_else(|| today + Duration::days((i % 30) as i64));
                let end_date = start_date + Duration::days(rng.random_range(1..=3));
                let is_free = i % 5 == 0;
                let price = if is_free {
                    EventPrice::free("USD")
                } else {
                    EventPrice::paid(f64::from(rng.random_range(10..110)), "USD")
                };

                Event {
                    id: format!("event-{i}"),
                    name: format!("{} Event {}", category.label(), i + 1),
                    description: format!(
                        "This is a great {} event happening in the city. Don't miss out!",
                        category.label().to_lowercase()
                    ),
                    start_date,
                    end_date: Some(end_date),
                    location: Place {
                        name: format!("Venue {}", i + 1),
                        address: Some(format!("{} Main Street, City", i + 100)),
                        lat: Some(48.8566 + rng.random_range(-0.05..0.05)),
                        lon: Some(2.3522 + rng.random_range(-0.05..0.05)),
                    },
                    category,
                    image_url: Some(format!("https://picsum.photos/seed/{i}/500/300")),
                    url: Some(format!("https://example.com/events/{i}")),
                    price: Some(price),
                    organizer: format!("Organizer {}", i + 1),
                    attending_count: rng.random_range(50..1050),
                    rating: rng.random_range(1..=5) as f32,
                    tags: vec![
                        "popular".to_string(),
                        category.label().to_lowercase(),
                        if i % 2 == 0 { "weekend" } else { "weekday" }.to_string(),
                    ],
                    is_featured: i < 3,
                }
            })
            .collect()
    }

    fn generate_itinerary(days: u32, start: chrono::NaiveDate) -> Vec<ItineraryItem> {
        (0..days)
            .map(|i| {
                let date = start + Duration::days(i64::from(i));
                let last = i == days - 1;

                let mut main = if i == 0 {
                    let mut a = Activity::new(
                        format!("activity-{i}-1"),
                        "Arrival and Check-in",
                        ActivityCategory::Accommodation,
                    );
                    a.description =
                        Some("Arrive at destination and check into accommodation".to_string());
                    a
                } else if last {
                    let mut a = Activity::new(
                        format!("activity-{i}-1"),
                        "Check-out and Departure",
                        ActivityCategory::Accommodation,
                    );
                    a.description =
                        Some("Check out from accommodation and head to airport".to_string());
                    a
                } else {
                    let mut a = Activity::new(
                        format!("activity-{i}-1"),
                        format!("Day {} Activity", i + 1),
                        ActivityCategory::Sightseeing,
                    );
                    a.description = Some(format!("Explore the city on day {}", i + 1));
                    a
                };
                main.start_time = NaiveTime::from_hms_opt(
                    if i == 0 {
                        15
                    } else if last {
                        10
                    } else {
                        9
                    },
                    0,
                    0,
                );
                main.end_time = NaiveTime::from_hms_opt(
                    if i == 0 {
                        18
                    } else if last {
                        15
                    } else {
                        17
                    },
                    0,
                    0,
                );

                let mut dinner = Activity::new(
                    format!("activity-{i}-2"),
                    "Dinner at local restaurant",
                    ActivityCategory::Dining,
                );
                dinner.start_time = NaiveTime::from_hms_opt(19, 0, 0);
                dinner.end_time = NaiveTime::from_hms_opt(21, 0, 0);

                ItineraryItem {
                    id: format!("day-{}", i + 1),
                    day: i + 1,
                    date,
                    activities: vec![main, dinner],
                }
            })
            .collect()
    }

    fn mock_advisories() -> Vec<Advisory> {
        vec![
            Advisory {
                id: "1".to_string(),
                country: "France".to_string(),
                country_code: "FR".to_string(),
                continent: "Europe".to_string(),
                score: 2,
                last_updated: Utc::now(),
                message: "Exercise increased caution due to terrorism and civil unrest."
                    .to_string(),
                source: "Government Travel Advisory".to_string(),
                details: vec![
                    AdvisoryDetail {
                        category: AdvisoryCategory::Safety,
                        level: SeverityLevel::Medium,
                        description: "Demonstrations in Paris and other major cities may turn \
                                      violent. Avoid demonstration areas."
                            .to_string(),
                    },
                    AdvisoryDetail {
                        category: AdvisoryCategory::Health,
                        level: SeverityLevel::Low,
                        description:
                            "Standard health precautions advised. Public healthcare is excellent."
                                .to_string(),
                    },
                ],
            },
            Advisory {
                id: "2".to_string(),
                country: "Japan".to_string(),
                country_code: "JP".to_string(),
                continent: "Asia".to_string(),
                score: 1,
                last_updated: Utc::now(),
                message: "Exercise normal precautions in Japan.".to_string(),
                source: "Government Travel Advisory".to_string(),
                details: vec![
                    AdvisoryDetail {
                        category: AdvisoryCategory::Weather,
                        level: SeverityLevel::Medium,
                        description: "Typhoon season runs from June to December. Monitor local \
                                      weather reports."
                            .to_string(),
                    },
                    AdvisoryDetail {
                        category: AdvisoryCategory::Health,
                        level: SeverityLevel::Low,
                        description: "No significant health concerns. High-quality healthcare is \
                                      widely available."
                            .to_string(),
                    },
                ],
            },
        ]
    }

    fn well_known_locations() -> Vec<Location> {
        vec![
            Location {
                name: "New York".to_string(),
                lat: 40.7128,
                lon: -74.0060,
                country: "US".to_string(),
                state: Some("New York".to_string()),
                is_favorite: false,
            },
            Location::new("London", 51.5074, -0.1278, "GB"),
            Location::new("Paris", 48.8566, 2.3522, "FR"),
            Location::new("Tokyo", 35.6762, 139.6503, "JP"),
            Location::new("Sydney", -33.8688, 151.2093, "AU"),
        ]
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn get_forecast(&self, lat: f64, lon: f64) -> Result<Forecast> {
        let today = Local::now().date_naive();
        let daily = (0..7)
            .map(|i| {
                let swing = (i as f32 / 7.0 * std::f32::consts::PI).sin();
                let description = match i % 3 {
                    0 => "Clear sky",
                    1 => "Few clouds",
                    _ => "Light rain",
                };
                DailyForecast {
                    date: today + Duration::days(i64::from(i)),
                    temp_min: 17.5 + swing * 4.0,
                    temp_max: 27.5 + swing * 6.0,
                    precipitation_probability: if i % 3 == 2 { 0.6 } else { 0.1 },
                    description: description.to_string(),
                }
            })
            .collect();

        Ok(Forecast {
            lat,
            lon,
            timezone: "America/New_York".to_string(),
            daily,
            retrieved_at: Utc::now(),
        })
    }

    async fn search_locations(&self, query: &str) -> Result<Vec<Location>> {
        let query = query.to_lowercase();
        Ok(Self::well_known_locations()
            .into_iter()
            .filter(|location| {
                location.name.to_lowercase().contains(&query)
                    || location.country.to_lowercase().contains(&query)
            })
            .collect())
    }

    async fn get_advisories(&self, country_code: &str) -> Result<Vec<Advisory>> {
        Ok(Self::mock_advisories()
            .into_iter()
            .filter(|advisory| advisory.country_code == country_code || country_code == "ALL")
            .collect())
    }

    async fn save_trip(&self, mut trip: Trip) -> Result<Trip> {
        if trip.id.is_empty() {
            trip.id = rand::rng()
                .sample_iter(Alphanumeric)
                .take(9)
                .map(char::from)
                .collect::<String>()
                .to_lowercase();
            debug!("assigned id '{}' to saved trip", trip.id);
        }
        Ok(trip)
    }

    async fn get_all_trips(&self) -> Result<Vec<Trip>> {
        let today = Local::now().date_naive();
        let tokyo_start = today + Duration::days(30);

        Ok(vec![
            Trip {
                id: "1".to_string(),
                name: "Summer in Paris".to_string(),
                start_date: today,
                end_date: today + Duration::days(7),
                destination: Destination {
                    name: "Paris".to_string(),
                    lat: 48.8566,
                    lon: 2.3522,
                    country: "France".to_string(),
                },
                traveler_count: 2,
                itinerary: Self::generate_itinerary(7, today),
                notes: Some("Remember to pack adapter plugs for European outlets.".to_string()),
                forecast: None,
                advisories: None,
            },
            Trip {
                id: "2".to_string(),
                name: "Tokyo Adventure".to_string(),
                start_date: tokyo_start,
                end_date: today + Duration::days(40),
                destination: Destination {
                    name: "Tokyo".to_string(),
                    lat: 35.6762,
                    lon: 139.6503,
                    country: "Japan".to_string(),
                },
                traveler_count: 1,
                itinerary: Self::generate_itinerary(10, tokyo_start),
                notes: Some("Research Japan Rail Pass before departure.".to_string()),
                forecast: None,
                advisories: None,
            },
        ])
    }

    async fn search_events(&self, filter: &EventsFilter) -> Result<Vec<Event>> {
        let events = Self::generate_events(filter);
        Ok(filter::filter_events(&events, filter))
    }

    async fn get_event_details(&self, event_id: &str) -> Result<Event> {
        let today = Local::now().date_naive();
        Ok(Event {
            id: event_id.to_string(),
            name: "Summer Music Festival".to_string(),
            description: "The biggest music festival of the summer featuring top artists from \
                          around the world. Three days of amazing performances, food, and fun."
                .to_string(),
            start_date: today,
            end_date: Some(today + Duration::days(3)),
            location: Place {
                name: "City Park Amphitheater".to_string(),
                address: Some("123 Park Avenue, City Center".to_string()),
                lat: Some(48.8566),
                lon: Some(2.3522),
            },
            category: EventCategory::Music,
            image_url: Some("https://picsum.photos/seed/festival/800/400".to_string()),
            url: Some("https://example.com/events/summer-festival".to_string()),
            price: Some(EventPrice::paid(149.99, "USD")),
            organizer: "City Events Productions".to_string(),
            attending_count: 5000,
            rating: 4.8,
            tags: ["music", "festival", "summer", "outdoor"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            is_featured: true,
        })
    }
}
