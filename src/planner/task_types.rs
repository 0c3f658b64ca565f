use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::interpreter::InterpretedRequest;

/// The six kinds of work a request can expand into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    CodeGeneration,
    Documentation,
    Testing,
    Optimization,
    Security,
    Deployment,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::CodeGeneration => "code_generation",
            TaskKind::Documentation => "documentation",
            TaskKind::Testing => "testing",
            TaskKind::Optimization => "optimization",
            TaskKind::Security => "security",
            TaskKind::Deployment => "deployment",
        }
    }

    /// Task complexity derived from the owning request's score.
    pub fn derived_complexity(&self, request_complexity: u8) -> u8 {
        match self {
            TaskKind::CodeGeneration | TaskKind::Testing => request_complexity,
            TaskKind::Documentation => request_complexity.saturating_sub(2).max(1),
            TaskKind::Optimization => request_complexity + 1,
            TaskKind::Security => request_complexity + 2,
            TaskKind::Deployment => request_complexity.saturating_sub(1).max(1),
        }
    }
}

/// One unit of work inside a decomposition run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique within one decomposition run only; not stable across runs.
    pub id: String,
    pub kind: TaskKind,
    pub description: String,
    /// Ids of tasks in the same run that must conceptually complete first.
    pub depends_on: Vec<String>,
    pub estimated_complexity: u8,
    /// Kind-specific parameters read by the downstream runner.
    pub context: Map<String, Value>,
}

impl Task {
    pub(crate) fn new(
        kind: TaskKind,
        description: impl Into<String>,
        estimated_complexity: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            description: description.into(),
            depends_on: Vec::new(),
            estimated_complexity,
            context: Map::new(),
        }
    }

    pub(crate) fn with_context(mut self, key: &str, value: Value) -> Self {
        self.context.insert(key.to_string(), value);
        self
    }
}

/// Finished decomposition of one request, handed to downstream execution.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPlan {
    pub id: String,
    pub original_request: String,
    pub request: InterpretedRequest,
    pub tasks: Vec<Task>,
    pub total_estimated_work_units: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Assemble the final plan around a built task set.
pub fn create_plan(request: InterpretedRequest, tasks: Vec<Task>) -> TaskPlan {
    TaskPlan {
        id: Uuid::new_v4().to_string(),
        original_request: request.raw_text.clone(),
        total_estimated_work_units: request.estimated_work_units,
        request,
        tasks,
        created_at: chrono::Utc::now(),
    }
}
