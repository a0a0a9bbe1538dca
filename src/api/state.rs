//! Application state for the SLA checker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::holidays::{CachedHolidaySource, HolidaySource};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded policy configuration and the holiday source.
#[derive(Clone)]
pub struct AppState {
    /// The loaded SLA configuration.
    config: Arc<ConfigLoader>,
    /// Where holiday calendars are looked up.
    holidays: Arc<dyn HolidaySource>,
}

impl AppState {
    /// Creates a new application state serving the configured calendars
    /// through a one-week holiday cache.
    pub fn new(config: ConfigLoader) -> Self {
        let holidays = CachedHolidaySource::new(config.holidays().clone());
        Self::with_holiday_source(config, Arc::new(holidays))
    }

    /// Creates a new application state with a custom holiday source.
    pub fn with_holiday_source(config: ConfigLoader, holidays: Arc<dyn HolidaySource>) -> Self {
        Self {
            config: Arc::new(config),
            holidays,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the holiday source.
    pub fn holidays(&self) -> &dyn HolidaySource {
        self.holidays.as_ref()
    }
}
