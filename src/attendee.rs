//! Attendee snapshots consumed by the badge renderer

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::category::CategoryDefinition;

/// Which badge template an attendee is printed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeClass {
    Staff,
    #[default]
    General,
}

/// Already-resolved attendee data; never mutated while printing
#[derive(Debug, Clone)]
pub struct Attendee {
    pub first_name: String,
    pub last_name: String,
    /// Display ("fan") name
    pub fan_name: Option<String>,
    pub badge_number: String,
    pub class: BadgeClass,
    pub category: Arc<CategoryDefinition>,
    /// Age in whole years as of the print date, computed by the caller
    pub age: Option<i64>,
}

impl Attendee {
    pub fn legal_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Fan name, unless it is blank.
    pub fn display_name(&self) -> Option<&str> {
        self.fan_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Name lines for the badge: (primary, secondary).
    ///
    /// A display name distinct from the legal name becomes the primary line and
    /// pushes the legal name to the secondary line.
    pub fn name_lines(&self) -> (String, Option<String>) {
        let legal = self.legal_name();
        match self.display_name() {
            Some(display) if display.trim() != legal.trim() => (display.to_string(), Some(legal)),
            _ => (legal, None),
        }
    }
}

// ============================================================================
// Demo Attendees
// ============================================================================

/// Sample ages for demo badges: adult, youth, child
pub const DEMO_AGES: [i64; 3] = [35, 15, 10];

/// Generate up to three demo attendees (adult, youth, child) for a badge
/// definition, used to calibrate printers.
pub fn demo_attendees(category: &Arc<CategoryDefinition>, count: usize) -> Vec<Attendee> {
    let people = [
        ("Test", "Adult", Some("Calibration Badge")),
        ("Test", "Youth", None),
        ("Test", "Child", None),
    ];

    people
        .iter()
        .zip(DEMO_AGES)
        .take(count.min(DEMO_AGES.len()))
        .enumerate()
        .map(|(i, ((first, last, fan), age))| Attendee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            fan_name: fan.map(str::to_string),
            badge_number: format!("TST{}", i + 1),
            class: BadgeClass::General,
            category: Arc::clone(category),
            age: Some(age),
        })
        .collect()
}
