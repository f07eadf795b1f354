//! Support for library configuration options

use std::sync::{Arc, Mutex};
use std::time::Duration;
use once_cell::sync::Lazy;

/// The URL of the server that stores the events, without the `/api/events` path.
/// Feel free to override it when initing this library.
pub static BASE_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("http://localhost:1337".to_string())));

/// Path of the event collection, relative to the base URL
pub const EVENTS_PATH: &str = "/api/events";

/// How long a success notification should be displayed
pub const SUCCESS_DURATION: Duration = Duration::from_millis(5000);
/// How long an error notification should be displayed
pub const ERROR_DURATION: Duration = Duration::from_millis(9000);

/// Returns the current value of [`BASE_URL`]
pub fn base_url() -> String {
    match BASE_URL.lock() {
        Ok(url) => url.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Override [`BASE_URL`]
pub fn set_base_url<S: ToString>(url: S) {
    match BASE_URL.lock() {
        Ok(mut current) => *current = url.to_string(),
        Err(poisoned) => *poisoned.into_inner() = url.to_string(),
    }
}
