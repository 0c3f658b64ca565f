use regex::{Regex, RegexBuilder};
use serde::Serialize;
use thiserror::Error;

/// Named entity buckets extracted from one request.
///
/// Buckets are independent: the same span may land in more than one bucket,
/// and repeated mentions are kept in match order. Matched substrings are
/// stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityBuckets {
    pub technologies: Vec<String>,
    pub actions: Vec<String>,
    pub nouns: Vec<String>,
    pub numbers: Vec<String>,
}

impl EntityBuckets {
    pub fn total(&self) -> usize {
        self.technologies.len() + self.actions.len() + self.nouns.len() + self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Error, Debug)]
pub enum LexError {
    #[error("invalid {bucket} entity pattern: {source}")]
    InvalidPattern {
        bucket: &'static str,
        source: regex::Error,
    },
}

/// Everything the lexer recognizes as a technology mention. Supersets the
/// interpreter's language/framework/platform tables; the remainder ends up
/// classified as dependencies.
pub(crate) const TECHNOLOGY_NAMES: &[&str] = &[
    // languages
    "javascript",
    "typescript",
    "python",
    "java",
    "c#",
    "c++",
    "rust",
    "go",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "dart",
    // frameworks
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "rails",
    "laravel",
    "flutter",
    // platforms
    "web",
    "mobile",
    "desktop",
    "ios",
    "android",
    "windows",
    "linux",
    "macos",
    "cloud",
    "aws",
    "azure",
    "gcp",
    // runtimes, stores, protocols, tooling
    "node",
    "node.js",
    "deno",
    "postgresql",
    "postgres",
    "mysql",
    "mongodb",
    "sqlite",
    "redis",
    "elasticsearch",
    "kafka",
    "rabbitmq",
    "graphql",
    "rest",
    "grpc",
    "websocket",
    "oauth",
    "jwt",
    "docker",
    "kubernetes",
    "terraform",
    "stripe",
    "webpack",
    "vite",
    "tailwind",
    "bootstrap",
    "numpy",
    "pandas",
    "tensorflow",
    "pytorch",
];

const ACTION_VERBS: &[&str] = &[
    "create", "build", "make", "generate", "write", "implement", "add", "develop", "design",
    "refactor", "test", "deploy", "optimize", "fix", "update", "migrate", "integrate", "document",
];

const DOMAIN_NOUNS: &[&str] = &[
    "function",
    "class",
    "component",
    "interface",
    "method",
    "api",
    "endpoint",
    "database",
    "app",
    "application",
    "website",
    "service",
    "server",
    "module",
    "script",
    "page",
    "form",
    "library",
    "model",
    "schema",
    "table",
    "queue",
    "cache",
    "test",
    "tests",
    "testing",
    "pipeline",
    "dashboard",
    "cli",
    "bot",
];

pub(crate) struct EntityPatterns {
    technologies: Regex,
    actions: Regex,
    nouns: Regex,
    numbers: Regex,
}

impl EntityPatterns {
    pub(crate) fn compile() -> Result<Self, LexError> {
        Ok(Self {
            technologies: word_list_pattern("technologies", TECHNOLOGY_NAMES)?,
            actions: word_list_pattern("actions", ACTION_VERBS)?,
            nouns: word_list_pattern("nouns", DOMAIN_NOUNS)?,
            numbers: bucket_pattern("numbers", r"\b\d+(?:\.\d+)?\b")?,
        })
    }

    /// Scan the whole text and fill each bucket independently.
    pub(crate) fn extract(&self, text: &str) -> EntityBuckets {
        EntityBuckets {
            technologies: collect_matches(&self.technologies, text),
            actions: collect_matches(&self.actions, text),
            nouns: collect_matches(&self.nouns, text),
            numbers: collect_matches(&self.numbers, text),
        }
    }
}

fn collect_matches(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Compile a case-insensitive alternation over fixed names.
///
/// Word boundaries are only asserted where the name starts/ends with a word
/// character, so names like "c++" and "c#" still match. Longer names come
/// first in the alternation so "react native" style entries win over their
/// prefixes.
fn word_list_pattern(bucket: &'static str, names: &[&str]) -> Result<Regex, LexError> {
    let mut sorted: Vec<&str> = names.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = sorted
        .iter()
        .map(|name| {
            let mut alt = String::new();
            if name.chars().next().is_some_and(|c| c.is_alphanumeric()) {
                alt.push_str(r"\b");
            }
            alt.push_str(&regex::escape(name));
            if name.chars().last().is_some_and(|c| c.is_alphanumeric()) {
                alt.push_str(r"\b");
            }
            alt
        })
        .collect::<Vec<_>>()
        .join("|");

    bucket_pattern(bucket, &alternation)
}

fn bucket_pattern(bucket: &'static str, pattern: &str) -> Result<Regex, LexError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| LexError::InvalidPattern { bucket, source })
}
