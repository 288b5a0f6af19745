//! Rendering a fetched problem either to the terminal or to files.

pub mod generate;
pub mod stdout;

pub use generate::{Template, generate};
pub use stdout::export_stdout;

use crate::error::{Error, Result};
use crate::model::ProblemDetail;

pub(crate) fn plain_text(detail: &ProblemDetail) -> Result<String> {
    html2text::from_read(detail.content_html().as_bytes(), 100)
        .map_err(|e| Error::Content(e.to_string()))
}
