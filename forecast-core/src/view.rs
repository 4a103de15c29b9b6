//! Render-ready projection of [`WidgetState`].
//!
//! Rebuilt from scratch after every state change; temperatures are always
//! converted from the stored Celsius values.

use crate::{
    model::{ForecastDay, WeatherSnapshot},
    state::WidgetState,
    theme::{CardColor, PageBackground, Palette, classify_card, page_background},
    units::{TemperatureUnit, convert, fixed, format_temp},
};

pub const TITLE: &str = "Weather Forecasting";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub palette: Palette,
    pub background: PageBackground,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub dark_mode_label: &'static str,
    pub error: Option<String>,
    pub weather: Option<WeatherView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub heading: String,
    pub region: Option<String>,
    pub icon_url: String,
    pub temperature: String,
    pub condition: String,
    pub wind: String,
    pub humidity: String,
    pub feels_like: String,
    pub unit_toggle_label: String,
    pub days: Vec<DayCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCard {
    pub weekday: String,
    pub icon_url: String,
    pub high_low: String,
    pub condition: String,
    pub color: CardColor,
}

impl WidgetView {
    pub fn from_state(state: &WidgetState) -> Self {
        let dark = state.is_dark_mode();

        Self {
            palette: Palette::for_mode(dark),
            background: page_background(state.weather(), dark),
            submit_label: if state.is_loading() { "Loading..." } else { "Get Weather" },
            submit_enabled: !state.is_loading(),
            dark_mode_label: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            error: state.error().map(|e| e.to_string()),
            weather: state.weather().map(|w| WeatherView::new(w, state.unit())),
        }
    }
}

impl WeatherView {
    fn new(w: &WeatherSnapshot, unit: TemperatureUnit) -> Self {
        let current = &w.current;
        // Every card is tinted with the current day/night flag, not its own.
        let is_day = current.is_daytime();

        Self {
            heading: format!("{}, {}", w.location.name, w.location.country),
            region: Some(w.location.region.clone()).filter(|r| !r.is_empty()),
            icon_url: current.condition.icon_url(),
            temperature: format_temp(current.temp_c, unit, 1),
            condition: current.condition.text.clone(),
            wind: format!("{} kph", current.wind_kph),
            humidity: format!("{}%", current.humidity),
            feels_like: format_temp(current.feelslike_c, unit, 1),
            unit_toggle_label: format!("Switch to °{}", unit.toggle().symbol()),
            days: w.forecast.forecastday.iter().map(|d| DayCard::new(d, unit, is_day)).collect(),
        }
    }
}

impl DayCard {
    fn new(d: &ForecastDay, unit: TemperatureUnit, is_day: bool) -> Self {
        let high = convert(d.day.maxtemp_c, unit);
        let low = convert(d.day.mintemp_c, unit);

        Self {
            weekday: d.date.format("%a").to_string(),
            icon_url: d.day.condition.icon_url(),
            high_low: format!("{}° / {}°", fixed(high, 0), fixed(low, 0)),
            condition: d.day.condition.text.clone(),
            color: classify_card(&d.day.condition.text, is_day),
        }
    }
}
