use serde::Serialize;

use crate::config::ValidationLimits;
use crate::interpreter::lookup;

/// Outcome of request validation. Issues are data, never errors: only
/// `errors` makes a request invalid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

const STRUCTURAL_KEYWORDS: &[&str] = &["function", "class", "component", "interface"];

/// Verbs that leave a request dangling when they end it.
const DANGLING_VERBS: &[&str] = &["create", "generate", "build", "make", "write"];

/// Completion phrases offered for dangling requests, filtered by prefix.
const COMPLETION_PHRASES: &[&str] = &[
    "create a function that",
    "create a class for",
    "create a component that",
    "generate a function to",
    "generate tests for",
    "build a web app with",
    "build an api with",
    "make a script that",
    "write a function that",
    "write tests for",
];

/// Validate raw request text without interpreting it.
pub fn validate_request(text: &str, limits: &ValidationLimits) -> RequestValidation {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    let mut report = RequestValidation::default();

    if trimmed.chars().count() < limits.min_request_len {
        report.errors.push(format!(
            "request is too short (minimum {} characters)",
            limits.min_request_len
        ));
    }
    if trimmed.chars().count() > limits.max_request_len {
        report.warnings.push(format!(
            "request is longer than {} characters and may describe more than one piece of software",
            limits.max_request_len
        ));
    }

    if !STRUCTURAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        report.warnings.push(
            "no structural keyword (function, class, component, interface) found".to_string(),
        );
    }

    if !words(&lower).any(|w| lookup::is_language(w)) {
        report
            .suggestions
            .push("name a target language, e.g. \"in TypeScript\"".to_string());
    }

    if let Some(partial) = dangling_tail(&lower) {
        report.suggestions.extend(
            COMPLETION_PHRASES
                .iter()
                .filter(|phrase| phrase.starts_with(partial))
                .map(|phrase| format!("did you mean: \"{phrase} ...\"?")),
        );
    }

    report.is_valid = report.errors.is_empty();
    report
}

/// The trailing fragment to complete, when the request ends in an ellipsis
/// or a bare verb.
fn dangling_tail(lower: &str) -> Option<&str> {
    let text = lower.trim_end_matches('.').trim_end();
    let last = words(text).last()?;
    if !lower.trim_end().ends_with("...") && !DANGLING_VERBS.contains(&last) {
        return None;
    }
    // complete from the last dangling verb onward
    DANGLING_VERBS
        .iter()
        .filter_map(|verb| text.rfind(verb).map(|pos| &text[pos..]))
        .min_by_key(|tail| tail.len())
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"')))
        .filter(|w| !w.is_empty())
}
