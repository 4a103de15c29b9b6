//! Widget state container.
//!
//! All mutation goes through the transition methods below:
//! `idle -> loading -> {success, failure} -> idle-with-result`, restarted by
//! every submit.

use tracing::{debug, warn};

use crate::{
    error::WidgetError, model::WeatherSnapshot, provider::WeatherProvider, units::TemperatureUnit,
};

/// Handed out by [`WidgetState::begin_fetch`]; must be returned to
/// [`WidgetState::finish_fetch`] with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: String,
}

impl FetchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    location: String,
    weather: Option<WeatherSnapshot>,
    error: Option<WidgetError>,
    loading: bool,
    dark_mode: bool,
    unit: TemperatureUnit,
    /// Sequence number of the most recently started fetch.
    seq: u64,
}

impl WidgetState {
    pub fn new(unit: TemperatureUnit, dark_mode: bool) -> Self {
        Self { unit, dark_mode, ..Self::default() }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn error(&self) -> Option<WidgetError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Start a fetch for the current location.
    ///
    /// An empty location sets [`WidgetError::EmptyLocation`] and no ticket is issued,
    /// so no request can be made. Any previous snapshot is left in place.
    /// Anything else, whitespace included, is sent to the provider as typed.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, WidgetError> {
        if self.location.is_empty() {
            self.error = Some(WidgetError::EmptyLocation);
            return Err(WidgetError::EmptyLocation);
        }

        self.seq += 1;
        self.loading = true;
        self.error = None;

        Ok(FetchTicket { seq: self.seq, query: self.location.clone() })
    }

    /// Apply the outcome of a fetch.
    ///
    /// Results for anything but the latest ticket are dropped so a slow, older
    /// response cannot overwrite a newer one. Returns whether it was applied.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: anyhow::Result<WeatherSnapshot>,
    ) -> bool {
        if ticket.seq != self.seq {
            debug!(stale = ticket.seq, latest = self.seq, query = %ticket.query, "discarding stale result");
            return false;
        }

        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.weather = Some(snapshot);
                self.error = None;
            }
            Err(e) => {
                warn!(query = %ticket.query, error = ?e, "weather fetch failed");
                self.weather = None;
                self.error = Some(WidgetError::FetchFailed);
            }
        }
        true
    }

    /// Begin, await the provider, finish.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider) -> Result<(), WidgetError> {
        let ticket = self.begin_fetch()?;
        let result = provider.fetch_forecast(ticket.query()).await;
        self.finish_fetch(ticket, result);

        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubProvider, london_snapshot};

    #[tokio::test]
    async fn empty_location_never_calls_provider() {
        let provider = StubProvider::ok(london_snapshot());
        let mut state = WidgetState::default();

        state.set_location("");
        let err = state.submit(&provider).await.unwrap_err();
        assert_eq!(err, WidgetError::EmptyLocation);

        assert_eq!(provider.calls(), 0);
        assert_eq!(state.error(), Some(WidgetError::EmptyLocation));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn whitespace_location_is_sent_as_typed() {
        let mut state = WidgetState::default();
        state.set_location("London");
        state.submit(&StubProvider::ok(london_snapshot())).await.expect("first fetch");

        let provider = StubProvider::failing("HTTP 400");
        state.set_location("   ");
        let err = state.submit(&provider).await.unwrap_err();

        assert_eq!(err, WidgetError::FetchFailed);
        assert_eq!(provider.calls(), 1);
        assert_eq!(provider.last_query().as_deref(), Some("   "));
        assert!(state.weather().is_none());
    }

    #[tokio::test]
    async fn success_clears_previous_error() {
        let provider = StubProvider::ok(london_snapshot());
        let mut state = WidgetState::default();

        state.begin_fetch().unwrap_err();
        assert!(state.error().is_some());

        state.set_location("London");
        state.submit(&provider).await.expect("fetch succeeds");

        assert_eq!(state.error(), None);
        assert_eq!(state.weather().map(|w| w.location.name.as_str()), Some("London"));
        assert_eq!(provider.last_query().as_deref(), Some("London"));
    }

    #[tokio::test]
    async fn failure_clears_previous_snapshot() {
        let mut state = WidgetState::default();
        state.set_location("London");
        state.submit(&StubProvider::ok(london_snapshot())).await.expect("first fetch");
        assert!(state.weather().is_some());

        state.set_location("Nowhereville");
        let err = state.submit(&StubProvider::failing("HTTP 400")).await.unwrap_err();

        assert_eq!(err, WidgetError::FetchFailed);
        assert!(state.weather().is_none());
        assert_eq!(state.error(), Some(WidgetError::FetchFailed));
        assert!(!state.is_loading());
    }

    #[test]
    fn loading_only_between_begin_and_finish() {
        let mut state = WidgetState::default();
        state.set_location("  Paris ");

        let ticket = state.begin_fetch().expect("ticket");
        assert_eq!(ticket.query(), "  Paris ");
        assert!(state.is_loading());

        assert!(state.finish_fetch(ticket, Ok(london_snapshot())));
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = WidgetState::default();
        state.set_location("London");
        let first = state.begin_fetch().expect("first");
        state.set_location("Paris");
        let second = state.begin_fetch().expect("second");

        assert!(state.finish_fetch(second, Ok(london_snapshot())));
        assert!(!state.finish_fetch(first, Err(anyhow::anyhow!("late failure"))));

        assert!(state.weather().is_some());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn stale_result_does_not_end_newer_loading() {
        let mut state = WidgetState::default();
        state.set_location("London");
        let first = state.begin_fetch().expect("first");
        let _second = state.begin_fetch().expect("second");

        assert!(!state.finish_fetch(first, Ok(london_snapshot())));
        assert!(state.is_loading());
        assert!(state.weather().is_none());
    }

    #[test]
    fn toggles_flip_preferences() {
        let mut state = WidgetState::new(TemperatureUnit::Celsius, false);
        state.toggle_unit();
        state.toggle_dark_mode();
        assert_eq!(state.unit(), TemperatureUnit::Fahrenheit);
        assert!(state.is_dark_mode());

        state.toggle_unit();
        assert_eq!(state.unit(), TemperatureUnit::Celsius);
    }
}
