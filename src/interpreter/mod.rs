mod constraints;
mod lookup;
mod scoring;
mod validate;

pub use lookup::TableError;
pub use validate::{RequestValidation, validate_request};

use serde::Serialize;
use tracing::debug;

use crate::config::ScoringConfig;
use crate::lexer::LexicalAnalysis;

/// Structured reading of one free-text request. Built once per prompt,
/// read-only afterward.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedRequest {
    /// Original prompt, carried so the planner can evaluate its trigger
    /// predicates against the user's own wording.
    pub raw_text: String,
    pub language: Option<String>,
    pub framework: Option<String>,
    pub platform: Option<String>,
    pub dependencies: Vec<String>,
    pub constraints: Vec<String>,
    pub complexity: u8,
    pub priority: u8,
    pub estimated_work_units: u32,
}

/// Turns a lexical analysis into an [`InterpretedRequest`].
pub struct RequestInterpreter {
    scoring: ScoringConfig,
}

impl RequestInterpreter {
    /// Checks the category lookup tables before first use; a malformed
    /// table set is a programming error.
    pub fn new(scoring: ScoringConfig) -> Result<Self, TableError> {
        lookup::check_tables()?;
        Ok(Self { scoring })
    }

    pub fn interpret(&self, analysis: &LexicalAnalysis, raw_text: &str) -> InterpretedRequest {
        let technologies = &analysis.entities.technologies;
        let language = lookup::first_match(technologies, lookup::LANGUAGES);
        let framework = lookup::first_match(technologies, lookup::FRAMEWORKS);
        let platform = lookup::first_match(technologies, lookup::PLATFORMS);

        let dependencies = dependency_list(technologies, [&language, &framework, &platform]);
        let constraints = constraints::extract(raw_text);

        let complexity = scoring::complexity_score(&self.scoring, &analysis.entities, &analysis.tokens);
        let priority = scoring::priority_score(&self.scoring, &analysis.tokens);
        let indicator_hits =
            scoring::count_keyword_tokens(&analysis.tokens, scoring::COMPLEXITY_KEYWORDS);
        let estimated_work_units = scoring::work_units(
            &self.scoring,
            analysis.entities.total(),
            dependencies.len(),
            indicator_hits,
        );

        debug!(
            ?language,
            ?framework,
            ?platform,
            complexity,
            priority,
            "request interpreted"
        );

        InterpretedRequest {
            raw_text: raw_text.to_string(),
            language,
            framework,
            platform,
            dependencies,
            constraints,
            complexity,
            priority,
            estimated_work_units,
        }
    }
}

/// Technology entities minus the chosen language/framework/platform, in
/// discovery order, exact duplicates removed.
fn dependency_list(technologies: &[String], chosen: [&Option<String>; 3]) -> Vec<String> {
    let mut dependencies: Vec<String> = Vec::new();
    for tech in technologies {
        let tech = tech.to_lowercase();
        if chosen
            .iter()
            .any(|c| c.as_deref().is_some_and(|v| v.eq_ignore_ascii_case(&tech)))
        {
            continue;
        }
        if !dependencies.contains(&tech) {
            dependencies.push(tech);
        }
    }
    dependencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn interpret(text: &str) -> InterpretedRequest {
        let lexer = Lexer::new().unwrap();
        let interpreter = RequestInterpreter::new(ScoringConfig::default()).unwrap();
        interpreter.interpret(&lexer.analyze(text), text)
    }

    #[test]
    fn test_detects_language_framework_and_dependencies() {
        let request =
            interpret("Build a REST API in TypeScript with Express backed by PostgreSQL");
        assert_eq!(request.language.as_deref(), Some("typescript"));
        assert_eq!(request.framework.as_deref(), Some("express"));
        assert_eq!(request.platform, None);
        assert_eq!(request.dependencies, vec!["rest", "postgresql"]);
    }

    #[test]
    fn test_chosen_values_are_not_double_counted_as_dependencies() {
        let request = interpret("a TypeScript tool, in TypeScript, using Redis");
        assert_eq!(request.language.as_deref(), Some("typescript"));
        assert_eq!(request.dependencies, vec!["redis"]);
    }

    #[test]
    fn test_first_technology_in_entity_order_wins() {
        let request = interpret("port the Python service to Rust");
        assert_eq!(request.language.as_deref(), Some("python"));
        // the second language stays visible as a dependency
        assert!(request.dependencies.contains(&"rust".to_string()));
    }

    #[test]
    fn test_empty_input_yields_neutral_request() {
        let request = interpret("");
        assert_eq!(request.language, None);
        assert_eq!(request.framework, None);
        assert_eq!(request.platform, None);
        assert!(request.dependencies.is_empty());
        assert!(request.constraints.is_empty());
        assert_eq!(request.complexity, 1);
        assert_eq!(request.priority, 5);
        assert_eq!(
            request.estimated_work_units,
            ScoringConfig::default().work_base
        );
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let request = interpret(
            "Urgently build a complex scalable distributed secure enterprise microservices \
             architecture with extensive advanced concurrent asynchronous integration across \
             React, Django, PostgreSQL, Redis, Kafka, Docker and Kubernetes",
        );
        assert!((1..=10).contains(&request.complexity));
        assert!((1..=10).contains(&request.priority));
    }

    #[test]
    fn test_interpretation_is_deterministic() {
        let text = "Build a secure authenticated REST API in TypeScript with Express";
        let first = interpret(text);
        let second = interpret(text);
        assert_eq!(first.language, second.language);
        assert_eq!(first.dependencies, second.dependencies);
        assert_eq!(first.complexity, second.complexity);
        assert_eq!(first.priority, second.priority);
        assert_eq!(first.estimated_work_units, second.estimated_work_units);
    }
}
