use std::collections::BTreeMap;

use serde::Serialize;

use super::task_types::TaskPlan;

/// Per-kind counts and totals for one finished plan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanSummary {
    pub total_tasks: usize,
    pub tasks_by_kind: BTreeMap<&'static str, usize>,
    pub total_estimated_work_units: u32,
    pub max_estimated_complexity: u8,
}

impl PlanSummary {
    pub fn from_plan(plan: &TaskPlan) -> Self {
        let mut tasks_by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
        for task in &plan.tasks {
            *tasks_by_kind.entry(task.kind.label()).or_insert(0) += 1;
        }
        Self {
            total_tasks: plan.tasks.len(),
            tasks_by_kind,
            total_estimated_work_units: plan.total_estimated_work_units,
            max_estimated_complexity: plan
                .tasks
                .iter()
                .map(|t| t.estimated_complexity)
                .max()
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::task_types::{Task, TaskKind, create_plan};
    use crate::interpreter::InterpretedRequest;

    fn request() -> InterpretedRequest {
        InterpretedRequest {
            raw_text: "build a thing".to_string(),
            language: None,
            framework: None,
            platform: None,
            dependencies: vec![],
            constraints: vec![],
            complexity: 4,
            priority: 5,
            estimated_work_units: 900,
        }
    }

    #[test]
    fn test_summary_counts_kinds() {
        let tasks = vec![
            Task::new(TaskKind::CodeGeneration, "gen", 4),
            Task::new(TaskKind::Testing, "test", 4),
            Task::new(TaskKind::Security, "sec", 6),
        ];
        let plan = create_plan(request(), tasks);
        let summary = PlanSummary::from_plan(&plan);
        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.tasks_by_kind["code_generation"], 1);
        assert_eq!(summary.tasks_by_kind["security"], 1);
        assert_eq!(summary.total_estimated_work_units, 900);
        assert_eq!(summary.max_estimated_complexity, 6);
    }

    #[test]
    fn test_summary_of_empty_plan() {
        let plan = create_plan(request(), vec![]);
        let summary = PlanSummary::from_plan(&plan);
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.max_estimated_complexity, 0);
    }
}
