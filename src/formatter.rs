//! Build-on-construction facade over the badge document builder

use std::io::Cursor;

use chrono::NaiveDate;
use tracing::{error, info};
use uuid::Uuid;

use crate::attendee::Attendee;
use crate::builder::{build, BuildReport, DocumentBackend};
use crate::canvas::Offset;
use crate::error::BadgeError;
use crate::metrics::{FontMetrics, HelveticaBold};
use crate::pdf::PdfBackend;

const DOCUMENT_TITLE: &str = "Badges";

/// A finished badge document for one print job.
///
/// The document is fully built when the formatter is constructed. A failure
/// part way through does not discard the pages already drawn, so a readable
/// stream does not mean every attendee was rendered; check [`failure`].
///
/// [`failure`]: PrintFormatter::failure
#[derive(Debug)]
pub struct PrintFormatter {
    job_id: String,
    as_of: NaiveDate,
    report: BuildReport,
}

impl PrintFormatter {
    /// Render one PDF badge per attendee, in order.
    ///
    /// `as_of` is the date the attendees' ages were computed for.
    pub fn new(attendees: &[Attendee], offset: Offset, as_of: NaiveDate) -> Self {
        match PdfBackend::new(DOCUMENT_TITLE) {
            Ok(backend) => Self::with_backend(backend, &HelveticaBold, attendees, offset, as_of),
            Err(e) => Self::failed(e, as_of),
        }
    }

    pub fn with_backend<B: DocumentBackend>(
        backend: B,
        metrics: &dyn FontMetrics,
        attendees: &[Attendee],
        offset: Offset,
        as_of: NaiveDate,
    ) -> Self {
        let job_id = generate_job_id();
        info!(
            job = %job_id,
            attendees = attendees.len(),
            x_offset = offset.x,
            y_offset = offset.y,
            as_of = %as_of,
            "formatting badges"
        );

        Self {
            report: build(backend, metrics, attendees, offset),
            job_id,
            as_of,
        }
    }

    /// A job whose document could not be created; it streams no bytes.
    pub fn failed(failure: BadgeError, as_of: NaiveDate) -> Self {
        let job_id = generate_job_id();
        error!(job = %job_id, error = %failure, "could not create badge document");

        Self {
            job_id,
            as_of,
            report: BuildReport::failed(failure),
        }
    }

    /// The finished document as a byte stream.
    pub fn stream(&self) -> Cursor<&[u8]> {
        Cursor::new(self.report.artifact.as_slice())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.report.artifact
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.report.artifact
    }

    /// Number of badge pages in the document.
    pub fn pages(&self) -> usize {
        self.report.pages
    }

    pub fn failure(&self) -> Option<&BadgeError> {
        self.report.failure.as_ref()
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }
}

fn generate_job_id() -> String {
    let uuid = Uuid::new_v4();
    let hex = format!("{:x}", uuid);
    hex[..8].to_uppercase()
}
