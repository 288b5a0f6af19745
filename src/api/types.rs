use serde::Deserialize;

use super::error::GraphQLError;
use crate::model::{Problem, ProblemDetail};

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionData {
    pub question: Option<ProblemDetail>,
}

/// Body of the REST problem listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemList {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub num_solved: u32,
    #[serde(default)]
    pub num_total: u32,
    #[serde(default)]
    pub ac_easy: u32,
    #[serde(default)]
    pub ac_medium: u32,
    #[serde(default)]
    pub ac_hard: u32,
    pub stat_status_pairs: Vec<Problem>,
}

impl ProblemList {
    pub fn find_by_frontend_id(&self, id: u32) -> Option<&Problem> {
        self.stat_status_pairs
            .iter()
            .find(|p| p.stat.frontend_question_id == id)
    }
}
