use serde::{Deserialize, Serialize};

/// Display unit for temperatures. Stored values are always Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}

/// Convert a Celsius reading for display.
///
/// Always pass the stored Celsius source value, never a previously converted one.
pub fn convert(temp_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => temp_c,
        TemperatureUnit::Fahrenheit => temp_c * 9.0 / 5.0 + 32.0,
    }
}

/// Converted value with unit suffix, e.g. `59.0°F`.
pub fn format_temp(temp_c: f64, unit: TemperatureUnit, decimals: usize) -> String {
    format!("{}°{}", fixed(convert(temp_c, unit), decimals), unit.symbol())
}

/// Fixed-point text with exact halves rounded away from zero (`2.5` -> `3`).
///
/// Plain `{:.N}` formatting rounds ties to even, so round first.
pub fn fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    format!("{:.*}", decimals, (value * factor).round() / factor)
}
