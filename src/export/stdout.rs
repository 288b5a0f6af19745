use std::io::Write;

use super::plain_text;
use crate::error::Result;
use crate::model::ProblemDetail;
use crate::style;

/// Prints the problem summary followed by its description as plain text.
///
/// Stats and content are both decoded before anything is written, so a bad
/// payload produces no partial output.
pub fn export_stdout<W: Write>(detail: &ProblemDetail, out: &mut W) -> Result<()> {
    let stats = detail.stats()?;
    let text = plain_text(detail)?;

    writeln!(out, "[{}] {}", detail.question_id, detail.title)?;
    writeln!(out)?;
    writeln!(out, "{}", style::gray(&detail.url()))?;
    writeln!(out)?;
    writeln!(out, "* {} ({})", detail.difficulty_label(), stats.accept_rate)?;
    writeln!(out, "* Total Accepted:    {}", stats.total_accepted_raw)?;
    writeln!(out, "* Total Submissions: {}", stats.total_submission_raw)?;
    writeln!(out, "* Testcase Example:")?;
    for line in detail.sample_test_case.split('\n') {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "{text}")?;
    out.flush()?;

    Ok(())
}
