//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading SLA policies
//! and holiday calendars from YAML files. Holiday calendars may also be
//! dropped in as public-holiday API responses saved to JSON.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::holidays::{StaticHolidaySource, parse_public_holidays};
use crate::models::SlaPolicy;

use super::types::{CheckerConfig, HolidayCalendar, PoliciesConfig};

/// Loads and provides access to SLA configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query policies and holiday calendars.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── policies.yaml       # Named SLA policies
/// └── holidays/           # Optional
///     ├── gb_2024.yaml    # One country and year per file
///     └── de_2024.json    # Public-holiday API payload, named <country>_<year>
/// ```
///
/// # Example
///
/// ```no_run
/// use sla_checker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let policy = loader.get_policy("standard").unwrap();
/// println!("Standard SLA: {} {}", policy.duration_amount, policy.duration_unit);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CheckerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policies.yaml` is missing
    /// - Any file contains invalid YAML, or a JSON holiday file is malformed
    /// - Any policy fails validation (empty valid days, inverted business
    ///   hours, unknown duration unit, oversized budget)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sla_checker::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), sla_checker::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policies_path = path.join("policies.yaml");
        let policies_config = Self::load_yaml::<PoliciesConfig>(&policies_path)?;

        for policy in policies_config.policies.values() {
            policy.validate().map_err(|e| EngineError::ConfigParseError {
                path: policies_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let calendars = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            path = %path.display(),
            policies = policies_config.policies.len(),
            calendars = calendars.len(),
            "Loaded SLA configuration"
        );

        let config = CheckerConfig::new(policies_config.policies, calendars);
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday calendar in the holidays directory, if there is one.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayCalendar>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let holidays_dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut calendars = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml") => calendars.push(Self::load_yaml::<HolidayCalendar>(&path)?),
                Some("json") => calendars.push(Self::load_json_calendar(&path)?),
                _ => {}
            }
        }

        Ok(calendars)
    }

    /// Loads a public-holiday payload saved as `<country>_<year>.json`.
    ///
    /// The country and year come from the file name.
    fn load_json_calendar(path: &Path) -> EngineResult<HolidayCalendar> {
        let path_str = path.display().to_string();
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path_str.clone(),
            message,
        };

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let (country_code, year) = stem
            .split_once('_')
            .and_then(|(country, year)| Some((country, year.parse::<i32>().ok()?)))
            .ok_or_else(|| parse_error(format!("expected <country>_<year>.json, got {}", stem)))?;

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;
        let dates = parse_public_holidays(&content).map_err(|e| parse_error(e.to_string()))?;

        Ok(HolidayCalendar {
            country_code: country_code.to_uppercase(),
            year,
            dates,
        })
    }

    /// Returns the underlying checker configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Gets a policy by its name.
    ///
    /// # Returns
    ///
    /// Returns the policy if found, or `PolicyNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sla_checker::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let policy = loader.get_policy("standard")?;
    /// println!("Valid days: {:?}", policy.valid_days);
    /// # Ok::<(), sla_checker::error::EngineError>(())
    /// ```
    pub fn get_policy(&self, name: &str) -> EngineResult<&SlaPolicy> {
        self.config
            .policies()
            .get(name)
            .ok_or_else(|| EngineError::PolicyNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the names of all configured policies, sorted.
    pub fn policy_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.config.policies().keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the holiday calendars read from the configuration directory.
    pub fn holidays(&self) -> &StaticHolidaySource {
        self.config.holidays()
    }
}
