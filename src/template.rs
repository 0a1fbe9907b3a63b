//! Badge layouts for staff and general attendees

use tracing::warn;

use crate::attendee::{Attendee, BadgeClass};
use crate::canvas::{PageCanvas, Rect, TextMode};
use crate::category::{resolve_stripe, Stripe};
use crate::color::Rgb;
use crate::error::{BadgeError, BadgeResult};
use crate::fit::{fit, LayoutField};
use crate::metrics::FontMetrics;

// ============================================================================
// Constants
// ============================================================================

/// Badge stock is 8.5 x 5.5 inches, in points
pub const BADGE_WIDTH_PT: f32 = 612.0;
pub const BADGE_HEIGHT_PT: f32 = 396.0;

/// Stripe label when the attendee's age has no age band
pub const FALLBACK_STRIPE_LABEL: &str = "VOID";
pub const FALLBACK_STRIPE_COLOR: Rgb = Rgb::BLACK;

const STRIPE_BOX: Rect = Rect::new(155.0, 92.0, 300.0, 45.0);
const STRIPE_TEXT_OUTLINE: f32 = 0.5;

const PRIMARY_NAME: LayoutField = LayoutField::new("primary_name", 360.0, 165.0, 160.0, 24.0);
const SECONDARY_NAME: LayoutField =
    LayoutField::new("secondary_name", 310.0, 143.0, 140.0, 18.0).min_font_size(6.0);
const BADGE_NUMBER: LayoutField =
    LayoutField::new("badge_number", 407.0, 145.0, 38.0, 14.0).centered();
const CATEGORY_LABEL: LayoutField =
    LayoutField::new("category_label", 167.0, 105.0, 130.0, 32.0).min_font_size(12.0);
const STRIPE_LABEL: LayoutField =
    LayoutField::new("stripe_label", 438.0, 105.0, 130.0, 32.0)
        .min_font_size(12.0)
        .right_aligned();

// ============================================================================
// Template
// ============================================================================

/// Fixed field layout for one badge class
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeTemplate {
    pub class: BadgeClass,
    /// Prepended to both name lines
    pub name_prefix: &'static str,
    pub primary_name: LayoutField,
    pub secondary_name: LayoutField,
    pub badge_number: LayoutField,
    pub category_label: LayoutField,
    pub stripe_label: LayoutField,
    pub stripe_box: Rect,
}

impl BadgeTemplate {
    pub fn general() -> Self {
        Self {
            class: BadgeClass::General,
            name_prefix: "",
            primary_name: PRIMARY_NAME,
            secondary_name: SECONDARY_NAME,
            badge_number: BADGE_NUMBER,
            category_label: CATEGORY_LABEL,
            stripe_label: STRIPE_LABEL,
            stripe_box: STRIPE_BOX,
        }
    }

    pub fn staff() -> Self {
        Self {
            class: BadgeClass::Staff,
            name_prefix: "Staff ",
            ..Self::general()
        }
    }

    pub fn for_class(class: BadgeClass) -> Self {
        match class {
            BadgeClass::Staff => Self::staff(),
            BadgeClass::General => Self::general(),
        }
    }

    /// Stripe color and label for the attendee.
    ///
    /// An age outside every band degrades to the VOID stripe instead of failing
    /// the badge; a malformed stripe color is still an error.
    pub fn stripe_for(&self, attendee: &Attendee) -> BadgeResult<Stripe> {
        match resolve_stripe(&attendee.category, attendee.age) {
            Ok(stripe) => Ok(stripe),
            Err(BadgeError::NoMatchingCategory { category, age }) => {
                warn!(
                    badge_number = %attendee.badge_number,
                    category = %category,
                    ?age,
                    "no age range matches, printing VOID stripe"
                );
                Ok(Stripe {
                    color: FALLBACK_STRIPE_COLOR,
                    label: FALLBACK_STRIPE_LABEL.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Draw the whole badge for `attendee`.
    pub fn draw(
        &self,
        canvas: &mut dyn PageCanvas,
        metrics: &dyn FontMetrics,
        attendee: &Attendee,
    ) -> BadgeResult<()> {
        let stripe = self.stripe_for(attendee)?;
        self.draw_resolved(canvas, metrics, attendee, &stripe)
    }

    /// Draw `attendee` with a stripe already resolved by [`Self::stripe_for`].
    pub fn draw_resolved(
        &self,
        canvas: &mut dyn PageCanvas,
        metrics: &dyn FontMetrics,
        attendee: &Attendee,
        stripe: &Stripe,
    ) -> BadgeResult<()> {
        self.draw_stripe(canvas, metrics, stripe, &attendee.category.label)?;
        self.draw_names(canvas, metrics, attendee)?;

        draw_fitted(canvas, metrics, &self.badge_number, &attendee.badge_number, TextMode::Fill)
    }

    fn draw_stripe(
        &self,
        canvas: &mut dyn PageCanvas,
        metrics: &dyn FontMetrics,
        stripe: &Stripe,
        category_label: &str,
    ) -> BadgeResult<()> {
        canvas.set_fill_color(stripe.color)?;
        canvas.fill_rect(self.stripe_box)?;

        // Outlined white text over the stripe
        canvas.set_fill_color(Rgb::WHITE)?;
        canvas.set_stroke_color(Rgb::BLACK, STRIPE_TEXT_OUTLINE)?;
        draw_fitted(canvas, metrics, &self.stripe_label, &stripe.label, TextMode::FillStroke)?;
        draw_fitted(canvas, metrics, &self.category_label, category_label, TextMode::FillStroke)
    }

    fn draw_names(
        &self,
        canvas: &mut dyn PageCanvas,
        metrics: &dyn FontMetrics,
        attendee: &Attendee,
    ) -> BadgeResult<()> {
        let (primary, secondary) = attendee.name_lines();

        canvas.set_fill_color(Rgb::BLACK)?;
        let primary = format!("{}{}", self.name_prefix, primary);
        draw_fitted(canvas, metrics, &self.primary_name, &primary, TextMode::Fill)?;

        if let Some(secondary) = secondary {
            let secondary = format!("{}{}", self.name_prefix, secondary);
            draw_fitted(canvas, metrics, &self.secondary_name, &secondary, TextMode::Fill)?;
        }

        Ok(())
    }
}

fn draw_fitted(
    canvas: &mut dyn PageCanvas,
    metrics: &dyn FontMetrics,
    field: &LayoutField,
    text: &str,
    mode: TextMode,
) -> BadgeResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    let placed = fit(text, metrics, field);
    canvas.draw_text(text, placed.origin_x, field.y, placed.size, mode)
}
