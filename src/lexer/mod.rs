mod entities;
mod tags;
mod tokenize;

pub use entities::{EntityBuckets, LexError};
pub use tags::PosTag;

pub(crate) use entities::TECHNOLOGY_NAMES;

use serde::Serialize;
use tracing::debug;

use crate::lexer::entities::EntityPatterns;

/// Result of lexical analysis over one request.
///
/// Tokens and tags are parallel sequences; entity buckets are scanned from
/// the whole text rather than per token.
#[derive(Debug, Clone, Serialize)]
pub struct LexicalAnalysis {
    pub tokens: Vec<String>,
    pub tags: Vec<PosTag>,
    pub entities: EntityBuckets,
}

/// Keyword/pattern based lexical analyzer. Pure function of the input text;
/// the same text always yields the same analysis.
pub struct Lexer {
    patterns: EntityPatterns,
}

impl Lexer {
    /// Compile the fixed entity pattern tables. A malformed table is a
    /// programming error and fails here rather than mid-analysis.
    pub fn new() -> Result<Self, LexError> {
        Ok(Self {
            patterns: EntityPatterns::compile()?,
        })
    }

    pub fn analyze(&self, text: &str) -> LexicalAnalysis {
        let tokens = tokenize::tokenize(text);
        let tags = tokens.iter().map(|t| tags::tag_token(t)).collect();
        let entities = self.patterns.extract(text);
        debug!(
            tokens = tokens.len(),
            entities = entities.total(),
            "lexical analysis complete"
        );
        LexicalAnalysis {
            tokens,
            tags,
            entities,
        }
    }
}
