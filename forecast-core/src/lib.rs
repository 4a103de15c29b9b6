//! Core library for the `forecast` weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weatherapi.com fetch client
//! - Condition-to-theme classification and unit conversion
//! - The widget state container and its render-ready view
//!
//! It is used by `forecast-cli`, but can also be driven by other front ends.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod state;
pub mod theme;
pub mod units;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::WidgetError;
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, provider_from_config};
pub use state::{FetchTicket, WidgetState};
pub use units::TemperatureUnit;
pub use view::WidgetView;
