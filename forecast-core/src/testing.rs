//! Shared fixtures for unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    model::{Condition, CurrentConditions, DaySummary, Forecast, ForecastDay, Location, WeatherSnapshot},
    provider::WeatherProvider,
};

fn condition(text: &str, icon: &str) -> Condition {
    Condition { text: text.to_string(), icon: icon.to_string() }
}

/// London at 15°C, partly cloudy, daytime, with a week of forecast.
pub fn london_snapshot() -> WeatherSnapshot {
    let days = [
        (17, 16.2, 7.9, "Patchy rain nearby"),
        (18, 12.0, 4.0, "Sunny"),
        (19, 10.4, 3.1, "Overcast"),
        (20, 2.0, -1.5, "Heavy Snow"),
        (21, 9.0, 5.0, "Thundery outbreaks possible"),
        (22, 8.0, 6.0, "Mist"),
        (23, 11.0, 6.5, "Blizzard"),
    ];

    WeatherSnapshot {
        location: Location {
            name: "London".into(),
            region: "City of London, Greater London".into(),
            country: "United Kingdom".into(),
        },
        current: CurrentConditions {
            temp_c: 15.0,
            condition: condition("Partly cloudy", "//cdn.weatherapi.com/weather/64x64/day/116.png"),
            wind_kph: 13.3,
            humidity: 72,
            feelslike_c: 14.1,
            is_day: 1,
        },
        forecast: Forecast {
            forecastday: days
                .iter()
                .map(|&(d, max, min, text)| ForecastDay {
                    date: NaiveDate::from_ymd_opt(2025, 3, d).expect("valid date"),
                    day: DaySummary {
                        maxtemp_c: max,
                        mintemp_c: min,
                        condition: condition(text, "//cdn.weatherapi.com/weather/64x64/day/113.png"),
                    },
                })
                .collect(),
        },
    }
}

/// Provider double that records calls and returns a canned outcome.
#[derive(Debug)]
pub struct StubProvider {
    outcome: Result<WeatherSnapshot, String>,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn ok(snapshot: WeatherSnapshot) -> Self {
        Self { outcome: Ok(snapshot), calls: AtomicUsize::new(0), last_query: Mutex::new(None) }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().ok().and_then(|q| q.clone())
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn fetch_forecast(&self, location: &str) -> anyhow::Result<WeatherSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut q) = self.last_query.lock() {
            *q = Some(location.to_string());
        }
        self.outcome.clone().map_err(|reason| anyhow::anyhow!(reason))
    }
}
