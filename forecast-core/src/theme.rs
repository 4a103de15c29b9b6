//! Condition text to visual theme.
//!
//! Two classifiers live here and they are intentionally separate: the page
//! background matches case-sensitively and files "Overcast" under rain, while
//! the forecast card colour lowercases first and files "overcast" under cloud.

use crate::model::WeatherSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherBucket {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    Foggy,
    Default,
}

impl WeatherBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherBucket::Sunny => "sunny",
            WeatherBucket::Cloudy => "cloudy",
            WeatherBucket::Rainy => "rainy",
            WeatherBucket::Snowy => "snowy",
            WeatherBucket::Stormy => "stormy",
            WeatherBucket::Foggy => "foggy",
            WeatherBucket::Default => "default",
        }
    }
}

impl std::fmt::Display for WeatherBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full-page background picked from the current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub bucket: WeatherBucket,
    pub is_day: bool,
}

impl Background {
    /// Image identifier for this bucket and time of day.
    pub fn image(&self) -> &'static str {
        match (self.bucket, self.is_day) {
            (WeatherBucket::Sunny, true) => "sunny.jpg",
            (WeatherBucket::Sunny, false) => "night_clear.jpg",
            (WeatherBucket::Cloudy, true) => "cloudy.jpg",
            (WeatherBucket::Cloudy, false) => "night_Cloud.avif",
            (WeatherBucket::Rainy, true) => "rainy.jpg",
            (WeatherBucket::Rainy, false) => "night_Rainy.avif",
            (WeatherBucket::Snowy, true) => "snowy.jpg",
            (WeatherBucket::Snowy, false) => "night_snowy.jpg",
            (WeatherBucket::Stormy, true) => "stormy.jpg",
            (WeatherBucket::Stormy, false) => "night_stormy.jpg",
            (WeatherBucket::Foggy, true) => "foggy.jpg",
            (WeatherBucket::Foggy, false) => "night_foggy.jpg",
            (WeatherBucket::Default, true) => "default.jpg",
            (WeatherBucket::Default, false) => "night_default.jpg",
        }
    }
}

const BACKGROUND_RULES: &[(WeatherBucket, &[&str])] = &[
    (WeatherBucket::Sunny, &["Sunny", "Clear"]),
    (WeatherBucket::Cloudy, &["Cloudy", "Partly cloudy"]),
    (WeatherBucket::Rainy, &["Rain", "Drizzle", "Overcast", "Showers"]),
    (WeatherBucket::Snowy, &["Snow", "Sleet"]),
    (WeatherBucket::Stormy, &["Storm", "Thunder"]),
    (WeatherBucket::Foggy, &["Fog", "Mist", "Haze"]),
];

/// Case-sensitive, first matching rule wins.
pub fn classify_background(condition: &str, is_day: bool) -> Background {
    let bucket = BACKGROUND_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| condition.contains(k)))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(WeatherBucket::Default);

    Background { bucket, is_day }
}

/// Tint of a single forecast card.
///
/// `Neutral` is the fallback and does not vary with time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Sunny { is_day: bool },
    Cloudy { is_day: bool },
    Rainy { is_day: bool },
    Snowy { is_day: bool },
    Stormy { is_day: bool },
    Foggy { is_day: bool },
    Neutral,
}

impl CardColor {
    pub fn name(&self) -> &'static str {
        match *self {
            CardColor::Sunny { is_day } => if is_day { "yellow-100" } else { "yellow-900" },
            CardColor::Cloudy { is_day } => if is_day { "gray-300" } else { "gray-700" },
            CardColor::Rainy { is_day } => if is_day { "blue-200" } else { "blue-900" },
            CardColor::Snowy { is_day } => if is_day { "white" } else { "gray-400" },
            CardColor::Stormy { is_day } => if is_day { "purple-200" } else { "purple-900" },
            CardColor::Foggy { is_day } => if is_day { "gray-400" } else { "gray-800" },
            CardColor::Neutral => "gray-100",
        }
    }
}

/// Lowercases first, then first matching rule wins.
pub fn classify_card(condition: &str, is_day: bool) -> CardColor {
    let condition = condition.to_lowercase();
    let has = |keys: &[&str]| keys.iter().any(|k| condition.contains(k));

    if has(&["sunny", "clear"]) {
        CardColor::Sunny { is_day }
    } else if has(&["cloudy", "overcast"]) {
        CardColor::Cloudy { is_day }
    } else if has(&["rain", "drizzle", "showers"]) {
        CardColor::Rainy { is_day }
    } else if has(&["snow", "sleet"]) {
        CardColor::Snowy { is_day }
    } else if has(&["storm", "thunder"]) {
        CardColor::Stormy { is_day }
    } else if has(&["fog", "mist", "haze"]) {
        CardColor::Foggy { is_day }
    } else {
        CardColor::Neutral
    }
}

/// Light/dark palette used until a snapshot provides a weather background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: bool,
    pub body: &'static str,
    pub text: &'static str,
    pub page_fallback: &'static str,
}

impl Palette {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self { dark, body: "gray-900", text: "white", page_fallback: "gray-900" }
        } else {
            Self { dark, body: "gray-100", text: "gray-900", page_fallback: "blue-100" }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBackground {
    Weather(Background),
    Plain(&'static str),
}

/// Weather background once a snapshot exists, otherwise the palette fallback.
pub fn page_background(weather: Option<&WeatherSnapshot>, dark_mode: bool) -> PageBackground {
    match weather {
        Some(w) => PageBackground::Weather(classify_background(
            &w.current.condition.text,
            w.current.is_daytime(),
        )),
        None => PageBackground::Plain(Palette::for_mode(dark_mode).page_fallback),
    }
}
