use serde::Serialize;

/// Part-of-speech tag assigned by the fixed rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Verb,
    Noun,
    Adjective,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Unknown,
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "its", "our", "their",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "into", "over", "under", "through",
    "using", "via", "without",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet", "if", "while", "because"];

const VERBS: &[&str] = &[
    "create", "build", "make", "generate", "write", "implement", "add", "develop", "design",
    "refactor", "test", "deploy", "optimize", "fix", "update", "support", "handle", "use", "run",
    "need", "needs", "be", "is", "are", "was", "has", "have", "must", "should", "can", "will",
    "want", "include",
];

const ADJECTIVES: &[&str] = &[
    "simple", "complex", "fast", "slow", "secure", "new", "small", "large", "big", "scalable",
    "robust", "basic", "advanced", "quick", "modern", "responsive", "extensive", "efficient",
    "reliable", "minimal",
];

/// Tag a single token against the rule table.
///
/// Closed-class word sets are checked first, then a numeric literal check;
/// any remaining alphabetic token defaults to noun, everything else to
/// unknown. Tagging never fails.
pub(crate) fn tag_token(token: &str) -> PosTag {
    if token.chars().all(|c| !c.is_alphanumeric()) {
        return PosTag::Punctuation;
    }
    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) && token.parse::<f64>().is_ok() {
        return PosTag::Number;
    }

    let lower = token.to_lowercase();
    let word = lower.as_str();
    if DETERMINERS.contains(&word) {
        PosTag::Determiner
    } else if PRONOUNS.contains(&word) {
        PosTag::Pronoun
    } else if PREPOSITIONS.contains(&word) {
        PosTag::Preposition
    } else if CONJUNCTIONS.contains(&word) {
        PosTag::Conjunction
    } else if VERBS.contains(&word) {
        PosTag::Verb
    } else if ADJECTIVES.contains(&word) {
        PosTag::Adjective
    } else if word.chars().all(|c| c.is_alphabetic()) {
        PosTag::Noun
    } else {
        PosTag::Unknown
    }
}
