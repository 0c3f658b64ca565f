/// Trigger keyword tables. Matching is substring-based over the lower-cased
/// prompt, so "auth" also fires on "authenticated" and "authentication".
const DOCUMENTATION_KEYWORDS: &[&str] = &[
    "document",
    "documentation",
    "docs",
    "readme",
    "comment",
    "comments",
];

const TESTING_KEYWORDS: &[&str] = &["test", "tests", "testing", "coverage", "tdd"];

const PERFORMANCE_KEYWORDS: &[&str] = &[
    "performance",
    "optimiz",
    "efficient",
    "speed",
    "latency",
    "benchmark",
];

const SECURITY_KEYWORDS: &[&str] = &[
    "secure",
    "security",
    "encryption",
    "encrypted",
    "vulnerability",
    "pci",
    "gdpr",
    "compliance",
    "compliant",
];

/// Operations sensitive enough to warrant a security pass even without an
/// explicit security keyword.
const SENSITIVE_KEYWORDS: &[&str] = &[
    "user",
    "password",
    "auth",
    "token",
    "credential",
    "payment",
    "credit",
    "personal",
    "private",
    "sensitive",
];

const DEPLOYMENT_KEYWORDS: &[&str] = &[
    "deploy",
    "deployment",
    "release",
    "publish",
    "hosting",
    "production",
    "ci/cd",
];

/// Keywords whose combined occurrence count stands in for structural
/// complexity; two or more pull in documentation and testing even when the
/// prompt never asks for them.
const STRUCTURAL_KEYWORDS: &[&str] = &[
    "class",
    "interface",
    "function",
    "method",
    "api",
    "endpoint",
    "database",
    "async",
];

const STRUCTURAL_THRESHOLD: usize = 2;

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn structural_occurrences(text: &str) -> usize {
    STRUCTURAL_KEYWORDS
        .iter()
        .map(|k| text.matches(k).count())
        .sum()
}

pub(crate) fn wants_documentation(text: &str) -> bool {
    contains_any(text, DOCUMENTATION_KEYWORDS)
        || structural_occurrences(text) >= STRUCTURAL_THRESHOLD
}

pub(crate) fn wants_testing(text: &str) -> bool {
    contains_any(text, TESTING_KEYWORDS) || structural_occurrences(text) >= STRUCTURAL_THRESHOLD
}

pub(crate) fn wants_optimization(text: &str) -> bool {
    contains_any(text, PERFORMANCE_KEYWORDS)
}

pub(crate) fn wants_security(text: &str) -> bool {
    contains_any(text, SECURITY_KEYWORDS) || contains_any(text, SENSITIVE_KEYWORDS)
}

pub(crate) fn wants_deployment(text: &str) -> bool {
    contains_any(text, DEPLOYMENT_KEYWORDS)
}
