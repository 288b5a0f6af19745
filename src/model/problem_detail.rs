use serde::Deserialize;

use super::language::{extension_for_slug, slug_for_extension};
use crate::error::{Error, Result};
use crate::style;

/// Address of a problem page; `$slug` is replaced by the title slug.
pub const PROBLEM_URL: &str = "https://leetcode.com/problems/$slug/";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    pub question_id: String,
    pub question_frontend_id: String,
    pub title: String,
    pub title_slug: String,
    pub content: Option<String>,
    #[serde(default)]
    pub is_paid_only: bool,
    pub difficulty: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
    pub code_snippets: Option<Vec<CodeSnippet>>,
    /// JSON document encoded as a string; see [`ProblemDetail::stats`].
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub sample_test_case: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

impl CodeSnippet {
    pub fn extension(&self) -> &'static str {
        extension_for_slug(&self.lang_slug)
    }

    pub fn matches(&self, language: &str) -> bool {
        self.lang == language || self.lang_slug == language
    }

    /// `Go(golang)` style label.
    pub fn label(&self) -> String {
        format!("{}({})", self.lang, self.lang_slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStats {
    #[serde(default)]
    pub total_accepted: String,
    #[serde(default)]
    pub total_submission: String,
    pub total_accepted_raw: u64,
    pub total_submission_raw: u64,
    #[serde(rename = "acRate")]
    pub accept_rate: String,
}

impl ProblemDetail {
    pub fn snippets(&self) -> &[CodeSnippet] {
        self.code_snippets.as_deref().unwrap_or_default()
    }

    pub fn content_html(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn url(&self) -> String {
        PROBLEM_URL.replacen("$slug", &self.title_slug, 1)
    }

    /// Colored difficulty; anything besides Easy and Medium reads as Hard.
    pub fn difficulty_label(&self) -> String {
        match self.difficulty.as_str() {
            "Easy" => style::green("Easy"),
            "Medium" => style::yellow("Medium"),
            _ => style::red("Hard"),
        }
    }

    pub fn stats(&self) -> Result<ProblemStats> {
        serde_json::from_str(&self.stats).map_err(Error::Stats)
    }

    /// First snippet whose display name or slug equals `language`.
    pub fn find_snippet(&self, language: &str) -> Result<&CodeSnippet> {
        self.snippets()
            .iter()
            .find(|s| s.matches(language))
            .ok_or_else(|| Error::LanguageMismatch {
                language: language.to_string(),
                title: self.title.clone(),
                supported: self.snippets().iter().map(CodeSnippet::label).collect(),
            })
    }

    /// Resolves a file extension to a language slug offered by this problem.
    pub fn language_slug(&self, ext: &str) -> Result<&'static str> {
        slug_for_extension(ext)
            .filter(|slug| self.snippets().iter().any(|s| s.lang_slug == *slug))
            .ok_or_else(|| Error::UnsupportedFormat {
                question_id: self.question_id.clone(),
                ext: ext.to_string(),
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample() -> ProblemDetail {
        serde_json::from_str(
            r#"{
                "questionId": "1",
                "questionFrontendId": "1",
                "title": "Two Sum",
                "titleSlug": "two-sum",
                "content": "<p>Given an array of integers <code>nums</code>, return indices.</p>",
                "isPaidOnly": false,
                "difficulty": "Easy",
                "likes": 10,
                "dislikes": 1,
                "topicTags": [{"name": "Array", "slug": "array"}],
                "codeSnippets": [
                    {"lang": "Go", "langSlug": "golang", "code": "func twoSum(nums []int, target int) []int {\n}\n"},
                    {"lang": "Python3", "langSlug": "python3", "code": "class Solution:\n    pass\n"}
                ],
                "stats": "{\"totalAccepted\": \"5\", \"totalSubmission\": \"10\", \"totalAcceptedRaw\": 5, \"totalSubmissionRaw\": 10, \"acRate\": \"50.0%\"}",
                "hints": [],
                "sampleTestCase": "[2,7,11,15]\n9"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn stats_decode_from_embedded_string() {
        let mut detail = sample();
        detail.stats =
            r#"{"totalAcceptedRaw":5,"totalSubmissionRaw":10,"acRate":"50.0%"}"#.to_string();

        let stats = detail.stats().unwrap();
        assert_eq!(stats.total_accepted_raw, 5);
        assert_eq!(stats.total_submission_raw, 10);
        assert_eq!(stats.accept_rate, "50.0%");
    }

    #[test]
    fn malformed_stats_are_an_error() {
        let mut detail = sample();
        detail.stats = "{not json".to_string();
        assert!(matches!(detail.stats(), Err(Error::Stats(_))));

        detail.stats = String::new();
        assert!(matches!(detail.stats(), Err(Error::Stats(_))));
    }

    #[test]
    fn difficulty_defaults_to_hard() {
        let mut detail = sample();
        assert!(detail.difficulty_label().contains("Easy"));
        detail.difficulty = "Medium".into();
        assert!(detail.difficulty_label().contains("Medium"));
        detail.difficulty = "Unknown".into();
        assert!(detail.difficulty_label().contains("Hard"));
    }

    #[test]
    fn url_substitutes_slug() {
        assert_eq!(sample().url(), "https://leetcode.com/problems/two-sum/");
    }

    #[test]
    fn snippet_matches_slug_or_name() {
        let detail = sample();
        let by_slug = detail.find_snippet("golang").unwrap();
        assert!(std::ptr::eq(by_slug, &detail.snippets()[0]));
        assert_eq!(detail.find_snippet("Python3").unwrap().lang_slug, "python3");
    }

    #[test]
    fn snippet_match_is_case_sensitive() {
        assert!(sample().find_snippet("GOLANG").is_err());
    }

    #[test]
    fn first_matching_snippet_wins() {
        let mut detail = sample();
        let mut dup = detail.snippets()[0].clone();
        dup.code = "second".into();
        detail.code_snippets.as_mut().unwrap().push(dup);

        assert_ne!(detail.find_snippet("Go").unwrap().code, "second");
    }

    #[test]
    fn mismatch_lists_supported_languages() {
        let err = sample().find_snippet("nope").unwrap_err();
        match &err {
            Error::LanguageMismatch { supported, .. } => {
                assert_eq!(supported.join(", "), "Go(golang), Python3(python3)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().ends_with("[Go(golang), Python3(python3)]"));
    }

    #[test]
    fn extension_resolves_only_for_offered_languages() {
        let detail = sample();
        assert_eq!(detail.language_slug(".go").unwrap(), "golang");
        assert_eq!(detail.language_slug("py3").unwrap(), "python3");
        assert!(matches!(
            detail.language_slug(".rs"),
            Err(Error::UnsupportedFormat { .. })
        ));
        assert!(detail.language_slug(".hs").is_err());
    }

    #[test]
    fn null_snippets_and_content_are_empty() {
        let detail: ProblemDetail = serde_json::from_str(
            r#"{"questionId":"9","questionFrontendId":"9","title":"Locked","titleSlug":"locked",
                "content":null,"difficulty":"Hard","codeSnippets":null}"#,
        )
        .unwrap();
        assert!(detail.snippets().is_empty());
        assert_eq!(detail.content_html(), "");
    }
}
