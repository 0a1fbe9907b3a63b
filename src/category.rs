//! Badge definitions, age bands and price/stripe resolution

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{BadgeError, BadgeResult};

/// One priced and colored age interval of a badge definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub label: String,
    /// Inclusive
    pub min_age: i64,
    /// Inclusive
    pub max_age: i64,
    pub cost: Decimal,
    /// `#RRGGBB`
    pub stripe_color: String,
    pub stripe_label: String,
}

impl AgeBand {
    pub fn contains(&self, age: i64) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}

/// A badge type ("Weekend", "Friday", ...) and its ordered age bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    /// Text drawn on the badge next to the stripe
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub age_bands: Vec<AgeBand>,
}

fn default_visible() -> bool {
    true
}

/// Resolved stripe for a badge
#[derive(Debug, Clone, PartialEq)]
pub struct Stripe {
    pub color: Rgb,
    pub label: String,
}

impl CategoryDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            visible: true,
            age_bands: Vec::new(),
        }
    }

    /// Builder-style band append, keeps declaration order.
    pub fn with_band(
        mut self,
        label: &str,
        min_age: i64,
        max_age: i64,
        cost: Decimal,
        stripe_color: &str,
        stripe_label: &str,
    ) -> Self {
        self.age_bands.push(AgeBand {
            label: label.to_string(),
            min_age,
            max_age,
            cost,
            stripe_color: stripe_color.to_string(),
            stripe_label: stripe_label.to_string(),
        });
        self
    }

    /// First band, in declaration order, whose range contains `age`.
    ///
    /// Overlapping bands are not an error: the earliest declared one wins even
    /// when a later band is narrower.
    pub fn band_for_age(&self, age: Option<i64>) -> BadgeResult<&AgeBand> {
        age.and_then(|age| self.age_bands.iter().find(|band| band.contains(age)))
            .ok_or_else(|| BadgeError::NoMatchingCategory {
                category: self.name.clone(),
                age,
            })
    }
}

pub fn resolve_cost(definition: &CategoryDefinition, age: Option<i64>) -> BadgeResult<Decimal> {
    definition.band_for_age(age).map(|band| band.cost)
}

pub fn resolve_stripe(definition: &CategoryDefinition, age: Option<i64>) -> BadgeResult<Stripe> {
    let band = definition.band_for_age(age)?;
    Ok(Stripe {
        color: Rgb::from_hex(&band.stripe_color)?,
        label: band.stripe_label.clone(),
    })
}

// ============================================================================
// Price Table
// ============================================================================

/// A pricing table column: heading and the sample age priced under it
#[derive(Debug, Clone, Copy)]
pub struct PriceColumn {
    pub heading: &'static str,
    pub age: i64,
}

pub const PRICE_TABLE_COLUMNS: [PriceColumn; 4] = [
    PriceColumn { heading: "Adult (18+)", age: 35 },
    PriceColumn { heading: "Youth (13 - 17)", age: 17 },
    PriceColumn { heading: "Child (6 - 12)", age: 11 },
    PriceColumn { heading: "5 and Under", age: 4 },
];

/// One badge definition's prices; every cell resolves independently
#[derive(Debug)]
pub struct PriceRow {
    pub badge: String,
    pub cells: Vec<BadgeResult<Decimal>>,
}

impl PriceRow {
    pub fn failures(&self) -> impl Iterator<Item = &BadgeError> {
        self.cells.iter().filter_map(|cell| cell.as_ref().err())
    }

    pub fn render_line(&self) -> String {
        let mut line = format!("{:<20}", self.badge);
        for cell in &self.cells {
            let text = match cell {
                Ok(cost) => format!("${:.2}", cost.round_dp(2)),
                Err(_) => "ERROR".to_string(),
            };
            line.push_str(&format!(" {:>16}", text));
        }
        line
    }
}

/// Price every visible definition at each column's sample age.
pub fn price_table<'a>(
    definitions: impl IntoIterator<Item = &'a CategoryDefinition>,
    columns: &[PriceColumn],
) -> Vec<PriceRow> {
    definitions
        .into_iter()
        .filter(|d| d.visible)
        .map(|definition| PriceRow {
            badge: definition.name.clone(),
            cells: columns
                .iter()
                .map(|column| resolve_cost(definition, Some(column.age)))
                .collect(),
        })
        .collect()
}

pub fn price_table_header(columns: &[PriceColumn]) -> String {
    let mut line = format!("{:<20}", "Badge Type");
    for column in columns {
        line.push_str(&format!(" {:>16}", column.heading));
    }
    line
}
