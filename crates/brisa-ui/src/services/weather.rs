use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use brisa_api::{FetchOutcome, SearchLocation, WeatherClient, WeatherReport};

/// How long the search input must stay idle before a request fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Replies from background requests, drained by the event loop.
#[derive(Debug)]
pub enum WeatherMessage {
    /// A forecast fetch for the selected location finished.
    ForecastDone(FetchOutcome<WeatherReport>),
    /// An autocomplete search finished. Replies carry the generation
    /// counter of the request so the UI can drop stale results.
    SearchDone {
        generation: u64,
        outcome: FetchOutcome<Vec<SearchLocation>>,
    },
    /// The wizard's key-validation probe finished.
    ProbeDone(FetchOutcome<WeatherReport>),
    /// The wizard's IP-based location lookup finished.
    AutoLocated(FetchOutcome<Vec<SearchLocation>>),
}

/// Dispatches API requests onto the runtime and reports results back
/// over `tx`. The UI thread never blocks on the network.
pub struct WeatherService {
    handle: tokio::runtime::Handle,
    tx: Sender<WeatherMessage>,
}

impl WeatherService {
    pub fn new(handle: tokio::runtime::Handle, tx: Sender<WeatherMessage>) -> Self {
        Self { handle, tx }
    }

    pub fn request_forecast(&self, client: &WeatherClient, query: String, lang: String) {
        let client = client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = client.forecast(&query, &lang).await;
            if tx.send(WeatherMessage::ForecastDone(outcome)).is_err() {
                tracing::debug!("forecast reply dropped, receiver gone");
            }
        });
    }

    pub fn request_search(&self, client: &WeatherClient, query: String, generation: u64) {
        let client = client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = client.search(&query).await;
            if tx
                .send(WeatherMessage::SearchDone {
                    generation,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!("search reply dropped, receiver gone");
            }
        });
    }

    /// Validates an API key by fetching a forecast for the caller's own
    /// IP-resolved location.
    pub fn request_probe(&self, client: &WeatherClient, lang: String) {
        let client = client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = client.forecast("auto:ip", &lang).await;
            if tx.send(WeatherMessage::ProbeDone(outcome)).is_err() {
                tracing::debug!("probe reply dropped, receiver gone");
            }
        });
    }

    /// Resolves the user's current location from their IP address.
    pub fn request_auto_location(&self, client: &WeatherClient) {
        let client = client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = client.search("auto:ip").await;
            if tx.send(WeatherMessage::AutoLocated(outcome)).is_err() {
                tracing::debug!("auto-location reply dropped, receiver gone");
            }
        });
    }
}

/// Delays search requests until the input has been idle for the
/// configured window. `poke` on every keystroke, `fire` once per tick.
#[derive(Debug)]
pub struct Debouncer {
    deadline: Option<Instant>,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            deadline: None,
            delay,
        }
    }

    /// Restart the idle window.
    pub fn poke(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// True exactly once, when the idle window has elapsed.
    pub fn fire(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn debouncer_fires_once_after_idle_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(0));
        assert!(!debouncer.fire());

        debouncer.poke();
        assert!(debouncer.fire());
        assert!(!debouncer.fire());
    }

    #[test]
    fn debouncer_waits_out_the_window() {
        let mut debouncer = Debouncer::new(Duration::from_secs(60));
        debouncer.poke();
        assert!(!debouncer.fire());
    }

    #[test]
    fn debouncer_cancel_clears_pending_request() {
        let mut debouncer = Debouncer::new(Duration::from_millis(0));
        debouncer.poke();
        debouncer.cancel();
        assert!(!debouncer.fire());
    }
}
