//! Background work for the UI thread. Requests run on the tokio
//! runtime and report back over a channel the event loop drains.

mod weather;

pub use weather::{Debouncer, WeatherMessage, WeatherService, SEARCH_DEBOUNCE};
