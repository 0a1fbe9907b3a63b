//! Attendee roster files and age calculation

use std::path::Path;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::attendee::{Attendee, BadgeClass};
use crate::config::BadgeConfig;
use crate::error::{BadgeError, BadgeResult};

/// Roster entry from JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub fan_name: Option<String>,
    pub badge_number: String,
    #[serde(default)]
    pub class: BadgeClass,
    /// Badge definition name
    pub category: String,
    /// YYYY-MM-DD
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

pub fn load_roster(path: impl AsRef<Path>) -> BadgeResult<Vec<RosterEntry>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| BadgeError::RosterError(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| BadgeError::RosterError(format!("Invalid JSON: {}", e)))
}

/// Age in completed years on `as_of`. Negative if born after `as_of`.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> i64 {
    let mut age = (as_of.year() - birth_date.year()) as i64;
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

impl RosterEntry {
    pub fn to_attendee(&self, config: &BadgeConfig, as_of: NaiveDate) -> BadgeResult<Attendee> {
        let category = config.category(&self.category).ok_or_else(|| {
            BadgeError::RosterError(format!(
                "badge {} for {} {} is not defined",
                self.category, self.first_name, self.last_name
            ))
        })?;

        Ok(Attendee {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            fan_name: self.fan_name.clone(),
            badge_number: self.badge_number.clone(),
            class: self.class,
            category: Arc::clone(category),
            age: self.birth_date.map(|born| age_on(born, as_of)),
        })
    }
}

/// Resolve every roster entry, keeping roster order.
pub fn to_attendees(
    entries: &[RosterEntry],
    config: &BadgeConfig,
    as_of: NaiveDate,
) -> BadgeResult<Vec<Attendee>> {
    entries
        .iter()
        .map(|entry| entry.to_attendee(config, as_of))
        .collect()
}
