//! Application state for Brisa: user settings and API credentials.
//!
//! Both documents are flat JSON files under the user's config directory,
//! read wholesale at startup and written wholesale when a screen that
//! edits them closes.

pub mod error;
pub mod settings;
pub mod store;

pub use error::StoreError;
pub use settings::{
    DistanceUnit, HeightUnit, PressureUnit, Secrets, Settings, StoredLocation, TemperatureUnit,
};
pub use store::Store;
