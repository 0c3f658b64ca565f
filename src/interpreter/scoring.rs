use crate::config::ScoringConfig;
use crate::lexer::EntityBuckets;

/// Tokens that indicate a request is more involved than its entity count
/// alone suggests. Exact token match, case-insensitive.
pub(crate) const COMPLEXITY_KEYWORDS: &[&str] = &[
    "complex",
    "advanced",
    "scalable",
    "distributed",
    "realtime",
    "concurrent",
    "async",
    "asynchronous",
    "microservice",
    "microservices",
    "integration",
    "architecture",
    "enterprise",
    "secure",
    "authentication",
    "authenticated",
    "extensive",
    "multiple",
    "performance",
];

const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "urgently",
    "asap",
    "immediately",
    "critical",
    "quickly",
    "today",
];

const LOW_PRIORITY_KEYWORDS: &[&str] = &["whenever", "eventually", "later", "someday", "optional"];

pub(crate) fn count_keyword_tokens(tokens: &[String], keywords: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|token| keywords.iter().any(|k| k.eq_ignore_ascii_case(token)))
        .count()
}

fn any_keyword_token(tokens: &[String], keywords: &[&str]) -> bool {
    count_keyword_tokens(tokens, keywords) > 0
}

/// Complexity in [1, 10], monotonic in entity count and keyword hits.
pub(crate) fn complexity_score(
    cfg: &ScoringConfig,
    entities: &EntityBuckets,
    tokens: &[String],
) -> u8 {
    let keyword_hits = count_keyword_tokens(tokens, COMPLEXITY_KEYWORDS);
    let raw = entities.total() as f32 * cfg.complexity_per_entity
        + keyword_hits as f32 * cfg.complexity_per_keyword;
    (raw.round() as i32).clamp(1, 10) as u8
}

/// Priority in [1, 10]: base 5, boosted by urgency wording, dropped by
/// low-priority wording. Both adjustments can apply to the same request.
pub(crate) fn priority_score(cfg: &ScoringConfig, tokens: &[String]) -> u8 {
    let mut priority = i32::from(cfg.priority_base);
    if any_keyword_token(tokens, URGENCY_KEYWORDS) {
        priority += i32::from(cfg.urgency_boost);
    }
    if any_keyword_token(tokens, LOW_PRIORITY_KEYWORDS) {
        priority -= i32::from(cfg.low_priority_drop);
    }
    priority.clamp(1, 10) as u8
}

/// Additive work-unit estimate. Weights are tunable; the result is always
/// at least the configured base.
pub(crate) fn work_units(
    cfg: &ScoringConfig,
    entity_total: usize,
    dependency_count: usize,
    indicator_hits: usize,
) -> u32 {
    cfg.work_base
        + entity_total as u32 * cfg.work_per_entity
        + dependency_count as u32 * cfg.work_per_dependency
        + indicator_hits as u32 * cfg.work_per_indicator
}
