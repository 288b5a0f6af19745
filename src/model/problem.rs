use serde::Deserialize;

use crate::style;

/// One row of the REST problem listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    pub stat: ProblemStat,
    pub status: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub paid_only: bool,
    #[serde(default)]
    pub is_favor: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProblemStat {
    pub question_id: u32,
    #[serde(rename = "question__title")]
    pub title: String,
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
    #[serde(default)]
    pub total_acs: u64,
    #[serde(default)]
    pub total_submitted: u64,
    pub frontend_question_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Difficulty {
    pub level: u8,
}

impl Problem {
    pub fn difficulty_name(&self) -> &'static str {
        match self.difficulty.level {
            1 => "Easy",
            2 => "Medium",
            _ => "Hard",
        }
    }

    /// Difficulty padded to a fixed width, then colored.
    pub fn difficulty_label(&self) -> String {
        let padded = format!("{:<6}", self.difficulty_name());
        match self.difficulty.level {
            1 => style::green(&padded),
            2 => style::yellow(&padded),
            _ => style::red(&padded),
        }
    }

    pub fn status_glyph(&self) -> String {
        match self.status.as_deref() {
            Some("ac") => style::green(style::APPROVED),
            Some("notac") => style::yellow("?"),
            _ => " ".to_string(),
        }
    }

    pub fn favor_glyph(&self) -> &'static str {
        if self.is_favor { "♥" } else { " " }
    }

    pub fn lock_glyph(&self) -> &'static str {
        if self.paid_only { "$" } else { " " }
    }

    /// `approved`, `rejected` and `new` filter on status; anything else keeps all.
    pub fn matches_status(&self, checker: &str) -> bool {
        match checker {
            "approved" => self.status.as_deref() == Some("ac"),
            "rejected" => self.status.as_deref() == Some("notac"),
            "new" => self.status.as_deref().is_none_or(str::is_empty),
            _ => true,
        }
    }

    /// `locked` and `free` filter on paid status; anything else keeps all.
    pub fn matches_lock(&self, checker: &str) -> bool {
        match checker {
            "locked" => self.paid_only,
            "free" => !self.paid_only,
            _ => true,
        }
    }

    pub fn acceptance(&self) -> f64 {
        if self.stat.total_submitted == 0 {
            return 0.0;
        }
        self.stat.total_acs as f64 / self.stat.total_submitted as f64 * 100.0
    }

    pub fn listing_line(&self) -> String {
        format!(
            "{} {} {} [{:>4}] {:<60} {} ({:.2} %)",
            self.lock_glyph(),
            self.favor_glyph(),
            self.status_glyph(),
            self.stat.frontend_question_id,
            self.stat.title,
            self.difficulty_label(),
            self.acceptance(),
        )
    }
}
