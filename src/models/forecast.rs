//! Weather forecast model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Multi-day forecast for a coordinate pair
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Forecast {
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    /// Per-day entries, sorted by date
    pub daily: Vec<DailyForecast>,
    /// When this forecast was retrieved
    pub retrieved_at: DateTime<Utc>,
}

/// One day of forecast data
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Minimum temperature in Celsius
    pub temp_min: f32,
    /// Maximum temperature in Celsius
    pub temp_max: f32,
    /// Probability of precipitation (0.0 to 1.0)
    pub precipitation_probability: f32,
    /// Human-readable description of conditions
    pub description: String,
}

impl Forecast {
    /// Forecast entry for a specific calendar date, if covered
    #[must_use]
    pub fn on(&self, date: NaiveDate) -> Option<&DailyForecast> {
        self.daily.iter().find(|d| d.date == date)
    }

    /// Check if forecast data is still fresh
    #[must_use]
    pub fn is_fresh(&self, ttl_hours: u32) -> bool {
        let age = Utc::now() - self.retrieved_at;
        age.num_hours() < i64::from(ttl_hours)
    }
}

impl DailyForecast {
    /// Format the temperature span with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C to {:.1}°C", self.temp_min, self.temp_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forecast {
        let day = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
        Forecast {
            lat: 48.8566,
            lon: 2.3522,
            timezone: "Europe/Paris".to_string(),
            daily: vec![DailyForecast {
                date: day,
                temp_min: 17.5,
                temp_max: 27.5,
                precipitation_probability: 0.1,
                description: "Clear sky".to_string(),
            }],
            retrieved_at: Utc::now(),
        }
    }

    #[test]
    fn test_lookup_by_date() {
        let forecast = sample();
        let day = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
        assert!(forecast.on(day).is_some());
        assert!(forecast.on(day.succ_opt().unwrap()).is_none());
    }

    #[test]
    fn test_freshly_retrieved_forecast_is_fresh() {
        assert!(sample().is_fresh(6));
    }
}
