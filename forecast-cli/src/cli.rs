use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{
    Config, TemperatureUnit, WeatherProvider, WidgetError, WidgetState, WidgetView,
    provider_from_config,
};
use inquire::{Confirm, InquireError, Password, Select, Text};
use tracing::info;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Weather lookup widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// weatherapi.com key; overrides the configured one.
    #[arg(long, global = true, env = "WEATHERAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com key and display defaults.
    Configure,

    /// Look up one location and print current conditions plus the 7-day forecast.
    Show {
        /// Location name, postcode or "lat,lon".
        location: String,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Run the widget interactively: search, switch units, toggle dark mode.
    Interactive {
        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct DisplayArgs {
    /// Show temperatures in Fahrenheit.
    #[arg(long, short = 'f')]
    pub fahrenheit: bool,

    /// Start in dark mode.
    #[arg(long)]
    pub dark: bool,
}

impl DisplayArgs {
    fn initial_state(self, config: &Config) -> WidgetState {
        let unit = if self.fahrenheit { TemperatureUnit::Fahrenheit } else { config.units };
        WidgetState::new(unit, self.dark || config.dark_mode)
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(key) = self.api_key {
            config.set_api_key(key);
        }

        match self.command {
            Command::Configure => configure(config),
            Command::Show { location, display } => show(&config, location, display).await,
            Command::Interactive { display } => interactive(&config, display).await,
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let key = Password::new("weatherapi.com API key:")
        .without_confirmation()
        .with_help_message("Get one at https://www.weatherapi.com/my/")
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(key);

    let fahrenheit = Confirm::new("Show temperatures in Fahrenheit by default?")
        .with_default(config.units == TemperatureUnit::Fahrenheit)
        .prompt()?;
    config.units = if fahrenheit { TemperatureUnit::Fahrenheit } else { TemperatureUnit::Celsius };

    config.dark_mode =
        Confirm::new("Start in dark mode?").with_default(config.dark_mode).prompt()?;

    let path = config.save()?;
    info!(path = %path.display(), "configuration saved");
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(config: &Config, location: String, display: DisplayArgs) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    let state = display.initial_state(config);

    let (output, result) = lookup(provider.as_ref(), state, location).await;
    print!("{output}");
    Ok(result?)
}

/// One submit; the rendered widget comes back whether or not it succeeded.
async fn lookup(
    provider: &dyn WeatherProvider,
    mut state: WidgetState,
    location: String,
) -> (String, Result<(), WidgetError>) {
    state.set_location(location);
    let result = state.submit(provider).await;
    (render::render(&WidgetView::from_state(&state)), result)
}

const SEARCH: &str = "Search location";
const QUIT: &str = "Quit";

async fn interactive(config: &Config, display: DisplayArgs) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    let mut state = display.initial_state(config);

    loop {
        let view = WidgetView::from_state(&state);
        print!("{}", render::render(&view));

        let mut options = vec![SEARCH];
        let unit_label = view.weather.as_ref().map(|w| w.unit_toggle_label.clone());
        if let Some(label) = unit_label.as_deref() {
            options.push(label);
        }
        options.push(view.dark_mode_label);
        options.push(QUIT);

        let choice = match Select::new("What next?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            SEARCH => {
                let location = match Text::new("Location:")
                    .with_placeholder("Enter location")
                    .with_initial_value(state.location())
                    .prompt()
                {
                    Ok(location) => location,
                    Err(InquireError::OperationCanceled) => continue,
                    Err(InquireError::OperationInterrupted) => break,
                    Err(e) => return Err(e.into()),
                };
                state.set_location(location);
                // Errors are part of the state and show up on the next render.
                let _ = state.submit(provider.as_ref()).await;
            }
            QUIT => break,
            label if Some(label) == unit_label.as_deref() => state.toggle_unit(),
            _ => state.toggle_dark_mode(),
        }
    }

    Ok(())
}
