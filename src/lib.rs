//! # badge-pdf
//!
//! Badge layout and print formatting for event registration.
//!
//! Attendees are already-resolved snapshots. For each one the crate resolves
//! the age band of its badge definition (price, stripe color and label),
//! picks the staff or general badge template, shrinks text to fit the fixed
//! badge regions and draws one page per attendee into a PDF.
//!
//! ## Example
//!
//! ```ignore
//! use badge_pdf::{Offset, PrintFormatter};
//!
//! let formatter = PrintFormatter::new(&attendees, Offset::new(10, -5), as_of);
//! if let Some(e) = formatter.failure() {
//!     eprintln!("some badges were not printed: {e}");
//! }
//! std::io::copy(&mut formatter.stream(), &mut printer)?;
//! ```

mod attendee;
mod builder;
mod canvas;
mod category;
mod color;
mod config;
mod error;
mod fit;
mod formatter;
mod metrics;
mod pdf;
mod roster;
mod template;

#[cfg(test)]
mod recording;

// Re-exports
pub use attendee::{demo_attendees, Attendee, BadgeClass, DEMO_AGES};
pub use builder::{build, BuildReport, DocumentBackend, DocumentBuilder};
pub use canvas::{Offset, PageCanvas, Rect, TextMode, Translated};
pub use category::{
    price_table, price_table_header, resolve_cost, resolve_stripe, AgeBand, CategoryDefinition,
    PriceColumn, PriceRow, Stripe, PRICE_TABLE_COLUMNS,
};
pub use color::Rgb;
pub use config::BadgeConfig;
pub use error::{BadgeError, BadgeResult};
pub use fit::{fit, Align, Fit, LayoutField};
pub use formatter::PrintFormatter;
pub use metrics::{FontMetrics, HelveticaBold};
pub use pdf::{PdfBackend, PdfPage};
pub use roster::{age_on, load_roster, to_attendees, RosterEntry};
pub use template::{
    BadgeTemplate, BADGE_HEIGHT_PT, BADGE_WIDTH_PT, FALLBACK_STRIPE_COLOR, FALLBACK_STRIPE_LABEL,
};
