//! HTTP-backed data source
//!
//! Thin reqwest wrappers over the weather, travel and events endpoints.
//! Transport failures and non-success responses are both surfaced as the
//! API error kind; callers at the store boundary decide how to present
//! them. No retries are attempted beyond the plain request timeout.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::DataSource;
use crate::config::TripKitConfig;
use crate::models::{Advisory, Event, EventsFilter, Forecast, Location, SortKey, Trip};
use crate::{Result, TripKitError};

/// HTTP client over the real data services
pub struct HttpDataSource {
    client: Client,
    weather_base_url: String,
    travel_base_url: String,
    events_base_url: String,
    api_key: Option<String>,
}

impl HttpDataSource {
    /// Create a new client from configuration
    pub fn new(config: &TripKitConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.api.timeout_seconds)))
            .user_agent(concat!("tripkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TripKitError::api(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            weather_base_url: config.api.weather_base_url.clone(),
            travel_base_url: config.api.travel_base_url.clone(),
            events_base_url: config.api.events_base_url.clone(),
            api_key: config.api.api_key.clone(),
        })
    }

    /// Issue a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TripKitError::api(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TripKitError::api(format!(
                "unexpected status {} from {url}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TripKitError::api(format!("failed to decode response from {url}: {e}")))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    #[instrument(skip(self))]
    async fn get_forecast(&self, lat: f64, lon: f64) -> Result<Forecast> {
        let url = format!(
            "{}/onecall?lat={lat}&lon={lon}&units=metric&exclude=minutely,alerts",
            self.weather_base_url
        );
        let response: wire::OneCallResponse = self.get_json(&url).await?;
        Ok(response.into_forecast(lat, lon))
    }

    #[instrument(skip(self))]
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>> {
        let url = format!(
            "{}/geo/1.0/direct?q={}&limit=5",
            self.weather_base_url,
            urlencoding::encode(query)
        );
        let items: Vec<wire::GeoItem> = self.get_json(&url).await?;
        Ok(items.into_iter().map(Location::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_advisories(&self, country_code: &str) -> Result<Vec<Advisory>> {
        let url = format!(
            "{}/advisories?countryCode={}",
            self.travel_base_url,
            urlencoding::encode(country_code)
        );
        self.get_json(&url).await
    }

    #[instrument(skip(self, trip), fields(trip_id = %trip.id))]
    async fn save_trip(&self, trip: Trip) -> Result<Trip> {
        let url = format!("{}/trips", self.travel_base_url);
        debug!("POST {url}");

        let mut request = self.client.post(&url).json(&trip);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TripKitError::api(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TripKitError::api(format!(
                "unexpected status {} from {url}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TripKitError::api(format!("failed to decode saved trip: {e}")))
    }

    #[instrument(skip(self))]
    async fn get_all_trips(&self) -> Result<Vec<Trip>> {
        let url = format!("{}/trips", self.travel_base_url);
        self.get_json(&url).await
    }

    #[instrument(skip(self, filter))]
    async fn search_events(&self, filter: &EventsFilter) -> Result<Vec<Event>> {
        let url = format!(
            "{}/search?{}",
            self.events_base_url,
            filter_query_string(filter)
        );
        self.get_json(&url).await
    }

    #[instrument(skip(self))]
    async fn get_event_details(&self, event_id: &str) -> Result<Event> {
        let url = format!(
            "{}/{}",
            self.events_base_url,
            urlencoding::encode(event_id)
        );
        self.get_json(&url).await
    }
}

/// Render a filter specification as URL query parameters
fn filter_query_string(filter: &EventsFilter) -> String {
    let mut params: Vec<String> = Vec::new();

    if let Some(from) = filter.date_from {
        params.push(format!("dateFrom={from}"));
    }
    if let Some(to) = filter.date_to {
        params.push(format!("dateTo={to}"));
    }
    if let Some(categories) = &filter.categories
        && !categories.is_empty()
    {
        let joined = categories
            .iter()
            .map(|c| c.label().to_lowercase())
            .collect::<Vec<_>>()
            .join(",");
        params.push(format!("categories={joined}"));
    }
    if let Some((min, max)) = filter.price_range {
        params.push(format!("priceMin={min}"));
        params.push(format!("priceMax={max}"));
    }
    if let Some(free) = filter.is_free {
        params.push(format!("isFree={free}"));
    }
    if let Some(term) = &filter.search_term
        && !term.is_empty()
    {
        params.push(format!("searchTerm={}", urlencoding::encode(term)));
    }
    if let Some(key) = filter.sort_by {
        let key = match key {
            SortKey::Date => "date",
            SortKey::Popularity => "popularity",
            SortKey::Price => "price",
        };
        params.push(format!("sortBy={key}"));
    }

    params.join("&")
}

/// Weather API response structures and conversion utilities
mod wire {
    use super::Utc;
    use crate::models::{DailyForecast, Forecast, Location};
    use chrono::DateTime;
    use serde::Deserialize;

    /// One-call style forecast response
    #[derive(Debug, Deserialize)]
    pub struct OneCallResponse {
        pub timezone: String,
        #[serde(default)]
        pub daily: Vec<DailyEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyEntry {
        /// Unix timestamp of the forecast day
        pub dt: i64,
        pub temp: DailyTemp,
        #[serde(default)]
        pub pop: f32,
        #[serde(default)]
        pub weather: Vec<WeatherCondition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyTemp {
        pub min: f32,
        pub max: f32,
    }

    #[derive(Debug, Deserialize)]
    pub struct WeatherCondition {
        pub description: String,
    }

    /// Geocoding item from the location search endpoint
    #[derive(Debug, Deserialize)]
    pub struct GeoItem {
        pub name: String,
        pub lat: f64,
        pub lon: f64,
        pub country: String,
        pub state: Option<String>,
    }

    impl OneCallResponse {
        pub fn into_forecast(self, lat: f64, lon: f64) -> Forecast {
            let daily = self
                .daily
                .into_iter()
                .filter_map(|entry| {
                    let date = DateTime::from_timestamp(entry.dt, 0)?.date_naive();
                    let description = entry
                        .weather
                        .first()
                        .map_or_else(|| "Unknown".to_string(), |w| w.description.clone());
                    Some(DailyForecast {
                        date,
                        temp_min: entry.temp.min,
                        temp_max: entry.temp.max,
                        precipitation_probability: entry.pop,
                        description,
                    })
                })
                .collect();

            Forecast {
                lat,
                lon,
                timezone: self.timezone,
                daily,
                retrieved_at: Utc::now(),
            }
        }
    }

    impl From<GeoItem> for Location {
        fn from(item: GeoItem) -> Self {
            Location {
                name: item.name,
                lat: item.lat,
                lon: item.lon,
                country: item.country,
                state: item.state,
                is_favorite: false,
            }
        }
    }
}
