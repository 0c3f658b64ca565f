/// Trigger phrases scanned in order; each contributes at most one constraint.
const CONSTRAINT_TRIGGERS: &[&str] = &[
    "must be",
    "should be",
    "needs to be",
    "has to be",
    "must support",
    "must have",
    "required to",
];

/// Extract constraint phrases from the request.
///
/// For each trigger, the span between its first occurrence and the next
/// sentence terminator becomes one constraint. End of input counts as a
/// terminator so a trailing requirement without a final period is still
/// captured.
pub(crate) fn extract(raw_text: &str) -> Vec<String> {
    let lower = raw_text.to_lowercase();
    let mut constraints = Vec::new();

    for trigger in CONSTRAINT_TRIGGERS {
        let Some(start) = lower.find(trigger) else {
            continue;
        };
        let after = start + trigger.len();
        let end = lower[after..]
            .find('.')
            .map(|rel| after + rel)
            .unwrap_or(lower.len());
        let span = lower[after..end].trim();
        if !span.is_empty() {
            constraints.push(span.to_string());
        }
    }

    constraints
}
