//! Page-per-attendee document assembly

use tracing::{debug, error, info};

use crate::attendee::{Attendee, BadgeClass};
use crate::canvas::{Offset, PageCanvas, Translated};
use crate::error::{BadgeError, BadgeResult};
use crate::metrics::FontMetrics;
use crate::template::{BadgeTemplate, BADGE_HEIGHT_PT, BADGE_WIDTH_PT};

/// A document format that badges can be drawn into
pub trait DocumentBackend {
    type Page: PageCanvas;

    /// Start a new page of the given size in points.
    fn begin_page(&mut self, width: f32, height: f32) -> BadgeResult<Self::Page>;

    /// Append a finished page to the document.
    fn end_page(&mut self, page: Self::Page) -> BadgeResult<()>;

    /// Serialize the document, including every page ended so far.
    fn finish(self) -> BadgeResult<Vec<u8>>;
}

/// Draws one badge page per attendee into a backend, in call order
pub struct DocumentBuilder<'m, B: DocumentBackend> {
    backend: B,
    metrics: &'m dyn FontMetrics,
    offset: Offset,
    staff: BadgeTemplate,
    general: BadgeTemplate,
    pages: usize,
}

impl<'m, B: DocumentBackend> DocumentBuilder<'m, B> {
    pub fn new(backend: B, metrics: &'m dyn FontMetrics, offset: Offset) -> Self {
        Self {
            backend,
            metrics,
            offset,
            staff: BadgeTemplate::staff(),
            general: BadgeTemplate::general(),
            pages: 0,
        }
    }

    pub fn template(&self, class: BadgeClass) -> &BadgeTemplate {
        match class {
            BadgeClass::Staff => &self.staff,
            BadgeClass::General => &self.general,
        }
    }

    /// Draw `attendee` on a new page, shifted by the calibration offset.
    pub fn add_badge(&mut self, attendee: &Attendee) -> BadgeResult<()> {
        // Resolved before the page exists so a bad definition leaves no blank page
        let stripe = self.template(attendee.class).stripe_for(attendee)?;

        let mut page = self.backend.begin_page(BADGE_WIDTH_PT, BADGE_HEIGHT_PT)?;
        {
            let template = self.template(attendee.class);
            let mut canvas = Translated::new(&mut page, self.offset);
            template.draw_resolved(&mut canvas, self.metrics, attendee, &stripe)?;
        }
        self.backend.end_page(page)?;
        self.pages += 1;

        debug!(
            page = self.pages,
            badge_number = %attendee.badge_number,
            class = ?attendee.class,
            "badge page added"
        );
        Ok(())
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn finish(self) -> BadgeResult<Vec<u8>> {
        self.backend.finish()
    }
}

/// Outcome of one document build
#[derive(Debug)]
pub struct BuildReport {
    /// The serialized document; may hold fewer pages than attendees if
    /// `failure` is set, and is empty if the document could not be finished
    pub artifact: Vec<u8>,
    pub pages: usize,
    pub failure: Option<BadgeError>,
}

impl BuildReport {
    /// A build that never got a document to draw into.
    pub fn failed(failure: BadgeError) -> Self {
        Self {
            artifact: Vec::new(),
            pages: 0,
            failure: Some(failure),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Draw a page for each attendee in order, then finish the document.
///
/// The first failing badge stops the build. The pages drawn before it are
/// still finished into the artifact and the failure is recorded in the report.
pub fn build<B: DocumentBackend>(
    backend: B,
    metrics: &dyn FontMetrics,
    attendees: &[Attendee],
    offset: Offset,
) -> BuildReport {
    let mut builder = DocumentBuilder::new(backend, metrics, offset);
    let mut failure = None;

    for (index, attendee) in attendees.iter().enumerate() {
        if let Err(e) = builder.add_badge(attendee) {
            error!(
                index,
                badge_number = %attendee.badge_number,
                error = %e,
                "badge build aborted"
            );
            failure = Some(BadgeError::ArtifactBuildFailure {
                index,
                badge_number: attendee.badge_number.clone(),
                source: Box::new(e),
            });
            break;
        }
    }

    let pages = builder.pages();
    let artifact = match builder.finish() {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "failed to finish badge document");
            failure.get_or_insert(e);
            Vec::new()
        }
    };

    info!(
        requested = attendees.len(),
        pages,
        bytes = artifact.len(),
        complete = failure.is_none(),
        "badge document built"
    );

    BuildReport {
        artifact,
        pages,
        failure,
    }
}
