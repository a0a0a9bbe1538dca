//! Configuration loading and management for the SLA checker.
//!
//! This module provides functionality to load named SLA policies and
//! per-country holiday calendars from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use sla_checker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policies: {:?}", config.policy_names());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CheckerConfig, HolidayCalendar, PoliciesConfig};
