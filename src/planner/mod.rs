mod dependencies;
mod graph;
mod statistics;
mod task_types;
mod triggers;

pub use graph::{GraphError, topological_order, validate_graph};
pub use statistics::PlanSummary;
pub use task_types::{Task, TaskKind, TaskPlan, create_plan};

use serde_json::{Value, json};
use tracing::debug;

use crate::interpreter::InterpretedRequest;

/// Checks the security kind asks the downstream runner to perform, in order.
const SECURITY_CHECKS: &[&str] = &[
    "input_validation",
    "authentication",
    "authorization",
    "data_encryption",
    "dependency_audit",
];

/// Expands one interpreted request into a task DAG rooted at a single
/// code generation task.
pub struct TaskPlanner;

impl TaskPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Build the task set for a request. Never fails: a request that
    /// triggers nothing extra yields a single-task graph.
    pub fn build_tasks(&self, request: &InterpretedRequest) -> Vec<Task> {
        let text = request.raw_text.to_lowercase();
        let complexity = request.complexity;
        let mut tasks = Vec::new();

        tasks.push(
            Task::new(
                TaskKind::CodeGeneration,
                generation_description(request),
                TaskKind::CodeGeneration.derived_complexity(complexity),
            )
            .with_context("language", opt_value(&request.language))
            .with_context("framework", opt_value(&request.framework))
            .with_context("platform", opt_value(&request.platform))
            .with_context("dependencies", json!(request.dependencies))
            .with_context("constraints", json!(request.constraints)),
        );

        if triggers::wants_documentation(&text) {
            tasks.push(
                Task::new(
                    TaskKind::Documentation,
                    "Write documentation for the generated code",
                    TaskKind::Documentation.derived_complexity(complexity),
                )
                .with_context("language", opt_value(&request.language))
                .with_context("targets", json!(["readme", "api"])),
            );
        }

        if triggers::wants_testing(&text) {
            tasks.push(
                Task::new(
                    TaskKind::Testing,
                    "Write tests covering the generated code",
                    TaskKind::Testing.derived_complexity(complexity),
                )
                .with_context("language", opt_value(&request.language))
                .with_context("framework", opt_value(&request.framework))
                .with_context("coverage_targets", json!(["unit", "integration"])),
            );
        }

        if triggers::wants_optimization(&text) {
            tasks.push(
                Task::new(
                    TaskKind::Optimization,
                    "Profile and optimize the generated code",
                    TaskKind::Optimization.derived_complexity(complexity),
                )
                .with_context("focus_areas", json!(["performance", "memory"])),
            );
        }

        if triggers::wants_security(&text) {
            tasks.push(
                Task::new(
                    TaskKind::Security,
                    "Review the generated code for security issues",
                    TaskKind::Security.derived_complexity(complexity),
                )
                .with_context("security_checks", json!(SECURITY_CHECKS)),
            );
        }

        if triggers::wants_deployment(&text) {
            tasks.push(
                Task::new(
                    TaskKind::Deployment,
                    "Package and deploy the result",
                    TaskKind::Deployment.derived_complexity(complexity),
                )
                .with_context("platform", opt_value(&request.platform))
                .with_context("environment", json!("production")),
            );
        }

        dependencies::wire(&mut tasks);
        debug!(tasks = tasks.len(), "task graph built");
        tasks
    }
}

impl Default for TaskPlanner {
    fn default() -> Self {
        Self::new()
    }
}

fn generation_description(request: &InterpretedRequest) -> String {
    match &request.language {
        Some(language) => format!("Generate {language} code satisfying the request"),
        None => "Generate code satisfying the request".to_string(),
    }
}

fn opt_value(value: &Option<String>) -> Value {
    value
        .as_ref()
        .map(|v| Value::String(v.clone()))
        .unwrap_or(Value::Null)
}
