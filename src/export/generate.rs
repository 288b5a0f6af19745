use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::model::ProblemDetail;

const EXT_PLACEHOLDER: &str = "$ext";

/// Output paths for one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub dir: PathBuf,
    pub markdown: PathBuf,
    /// Source file path with `$ext` standing in for the extension.
    pub source: String,
}

impl Template {
    pub fn for_problem(workspace: &Path, detail: &ProblemDetail) -> Self {
        let name = format!("{}-{}", detail.question_frontend_id, detail.title_slug);
        let dir = workspace.join(&name);
        let markdown = dir.join(format!("{name}.md"));
        let source = dir
            .join(format!("{name}.{EXT_PLACEHOLDER}"))
            .to_string_lossy()
            .into_owned();
        Self {
            dir,
            markdown,
            source,
        }
    }

    pub fn source_path(&self, ext: &str) -> PathBuf {
        PathBuf::from(self.source.replace(EXT_PLACEHOLDER, ext))
    }
}

/// Writes the markdown description and the `language` starter code under
/// `workspace`, returning the source file path.
///
/// Steps run in order and stop at the first failure; files already written
/// are left in place.
pub fn generate(workspace: &Path, detail: &ProblemDetail, language: &str) -> Result<PathBuf> {
    let template = Template::for_problem(workspace, detail);

    fs::create_dir_all(&template.dir).map_err(|source| Error::CreateDir {
        path: template.dir.clone(),
        source,
    })?;

    let markdown = render_markdown(detail)?;
    write_file(&template.markdown, &markdown)?;
    info!(path = %template.markdown.display(), "wrote markdown");

    let snippet = detail.find_snippet(language)?;
    let source_path = template.source_path(snippet.extension());
    write_file(&source_path, &snippet.code)?;
    info!(path = %source_path.display(), lang = %snippet.lang_slug, "wrote source");

    Ok(source_path)
}

pub fn render_markdown(detail: &ProblemDetail) -> Result<String> {
    let stats = detail.stats()?;

    let mut md = String::new();
    md.push_str(&format!("# [{}] {}\n", detail.question_id, detail.title));
    md.push('\n');
    md.push_str(&format!("{}\n", detail.url()));
    md.push('\n');
    md.push_str(&format!("- {} ({})\n\n", detail.difficulty, stats.accept_rate));
    md.push_str(&format!("- Total Accepted:    {}\n\n", stats.total_accepted_raw));
    md.push_str(&format!("- Total Submissions: {}\n\n", stats.total_submission_raw));
    md.push_str("- Testcase Example:\n");
    for line in detail.sample_test_case.split('\n') {
        md.push_str(&format!("  {line}\n\n"));
    }
    md.push('\n');
    md.push_str(detail.content_html());
    md.push('\n');

    Ok(md)
}

/// Truncates or creates `path`, writes `contents` and syncs to disk.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(contents.as_bytes()).map_err(wrap)?;
    file.sync_all().map_err(wrap)?;
    Ok(())
}
