pub mod language;
pub mod problem;
pub mod problem_detail;

pub use problem::Problem;
pub use problem_detail::{CodeSnippet, ProblemDetail, ProblemStats};
