//! Badge configuration file: badge definitions and printer calibration

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::canvas::Offset;
use crate::category::CategoryDefinition;
use crate::error::{BadgeError, BadgeResult};

/// Contents of the JSON configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BadgeConfig {
    /// Badge definitions in display order
    #[serde(default)]
    pub categories: Vec<Arc<CategoryDefinition>>,
    /// Calibration offsets by computer/printer name
    #[serde(default)]
    pub devices: BTreeMap<String, Offset>,
}

impl BadgeConfig {
    pub fn load(path: impl AsRef<Path>) -> BadgeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| BadgeError::ConfigError(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            categories = config.categories.len(),
            devices = config.devices.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> BadgeResult<Self> {
        let config: BadgeConfig = serde_json::from_str(content)
            .map_err(|e| BadgeError::ConfigError(format!("Invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Badge names must be unique and every band must have `min_age <= max_age`.
    /// Overlapping bands are allowed; the first declared one wins.
    pub fn validate(&self) -> BadgeResult<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.name.as_str()) {
                return Err(BadgeError::ConfigError(format!(
                    "duplicate badge definition {}",
                    category.name
                )));
            }
            for band in &category.age_bands {
                if band.min_age > band.max_age {
                    return Err(BadgeError::ConfigError(format!(
                        "badge {} age range {} has min age {} above max age {}",
                        category.name, band.label, band.min_age, band.max_age
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn category(&self, name: &str) -> Option<&Arc<CategoryDefinition>> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn visible_categories(&self) -> impl Iterator<Item = &Arc<CategoryDefinition>> {
        self.categories.iter().filter(|c| c.visible)
    }

    /// Calibration offset for a print job.
    ///
    /// Starts from the named device's offset (zero without a device), then
    /// applies explicit per-axis overrides.
    pub fn offset_for(
        &self,
        device: Option<&str>,
        x: Option<i32>,
        y: Option<i32>,
    ) -> BadgeResult<Offset> {
        let base = match device {
            Some(name) => *self
                .devices
                .get(name)
                .ok_or_else(|| BadgeError::ConfigError(format!("unknown device {}", name)))?,
            None => Offset::default(),
        };
        Ok(Offset {
            x: x.unwrap_or(base.x),
            y: y.unwrap_or(base.y),
        })
    }
}
