use std::fmt::Write;

use forecast_core::{
    theme::PageBackground,
    view::{TITLE, WeatherView, WidgetView},
};

/// Plain-text rendering of the widget, one block per section.
pub fn render(view: &WidgetView) -> String {
    let mut out = String::new();

    let palette = &view.palette;
    let mode = if palette.dark { "dark" } else { "light" };
    let _ = writeln!(out, "{TITLE}  [{mode}: {} on {}]", palette.text, palette.body);
    let _ = writeln!(out, "background: {}", background_label(&view.background));

    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }

    if let Some(weather) = &view.weather {
        render_weather(&mut out, weather);
    }

    out.push('\n');
    out
}

fn background_label(bg: &PageBackground) -> String {
    match bg {
        PageBackground::Weather(bg) => format!(
            "{} ({}, {})",
            bg.image(),
            bg.bucket,
            if bg.is_day { "day" } else { "night" }
        ),
        PageBackground::Plain(color) => color.to_string(),
    }
}

fn render_weather(out: &mut String, w: &WeatherView) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", w.heading);
    if let Some(region) = &w.region {
        let _ = writeln!(out, "{region}");
    }
    let _ = writeln!(out, "  {}  {}", w.temperature, w.condition);
    let _ = writeln!(out, "  icon: {}", w.icon_url);
    let _ = writeln!(
        out,
        "  Wind: {}  Humidity: {}  Feels like: {}",
        w.wind, w.humidity, w.feels_like
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "7-Day Forecast");
    for day in &w.days {
        let _ = writeln!(
            out,
            "  {:<4}{:<12}{:<32}[{}]",
            day.weekday,
            day.high_low,
            day.condition,
            day.color.name()
        );
    }
}
