use std::collections::HashMap;

use super::task_types::{Task, TaskKind};

/// Dependency kinds implied by each task kind, in edge order. A kind that
/// was not emitted simply contributes no edge.
fn implied_dependencies(kind: TaskKind) -> &'static [TaskKind] {
    match kind {
        TaskKind::CodeGeneration => &[],
        TaskKind::Documentation | TaskKind::Testing => &[TaskKind::CodeGeneration],
        TaskKind::Optimization => &[TaskKind::CodeGeneration, TaskKind::Testing],
        TaskKind::Security => &[TaskKind::CodeGeneration, TaskKind::Optimization],
        TaskKind::Deployment => &[
            TaskKind::CodeGeneration,
            TaskKind::Testing,
            TaskKind::Security,
        ],
    }
}

/// Wire dependency edges by kind within the freshly built task set.
///
/// Targets are looked up strictly inside `tasks`, so every recorded id
/// resolves to a task in the same collection. Edges are rebuilt from
/// scratch on every call, which keeps the pass idempotent.
pub(crate) fn wire(tasks: &mut [Task]) {
    let ids_by_kind: HashMap<TaskKind, String> = tasks
        .iter()
        .map(|task| (task.kind, task.id.clone()))
        .collect();

    for task in tasks.iter_mut() {
        task.depends_on.clear();
        task.depends_on.extend(
            implied_dependencies(task.kind)
                .iter()
                .filter_map(|kind| ids_by_kind.get(kind).cloned()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(kind: TaskKind) -> Task {
        Task::new(kind, kind.label(), 5)
    }

    fn deps_of(tasks: &[Task], kind: TaskKind) -> Vec<TaskKind> {
        let by_id: HashMap<&str, TaskKind> =
            tasks.iter().map(|t| (t.id.as_str(), t.kind)).collect();
        tasks
            .iter()
            .find(|t| t.kind == kind)
            .unwrap()
            .depends_on
            .iter()
            .map(|id| by_id[id.as_str()])
            .collect()
    }

    #[test]
    fn test_root_has_no_dependencies() {
        let mut tasks = vec![task(TaskKind::CodeGeneration), task(TaskKind::Testing)];
        wire(&mut tasks);
        assert!(tasks[0].depends_on.is_empty());
        assert_eq!(
            deps_of(&tasks, TaskKind::Testing),
            vec![TaskKind::CodeGeneration]
        );
    }

    #[test]
    fn test_absent_kinds_are_omitted_not_errors() {
        // security without optimization depends on code generation only
        let mut tasks = vec![task(TaskKind::CodeGeneration), task(TaskKind::Security)];
        wire(&mut tasks);
        assert_eq!(
            deps_of(&tasks, TaskKind::Security),
            vec![TaskKind::CodeGeneration]
        );
    }

    #[test]
    fn test_full_graph_edges() {
        let mut tasks = vec![
            task(TaskKind::CodeGeneration),
            task(TaskKind::Documentation),
            task(TaskKind::Testing),
            task(TaskKind::Optimization),
            task(TaskKind::Security),
            task(TaskKind::Deployment),
        ];
        wire(&mut tasks);
        assert_eq!(
            deps_of(&tasks, TaskKind::Optimization),
            vec![TaskKind::CodeGeneration, TaskKind::Testing]
        );
        assert_eq!(
            deps_of(&tasks, TaskKind::Security),
            vec![TaskKind::CodeGeneration, TaskKind::Optimization]
        );
        assert_eq!(
            deps_of(&tasks, TaskKind::Deployment),
            vec![
                TaskKind::CodeGeneration,
                TaskKind::Testing,
                TaskKind::Security
            ]
        );
    }

    #[test]
    fn test_wire_is_idempotent() {
        let mut tasks = vec![
            task(TaskKind::CodeGeneration),
            task(TaskKind::Testing),
            task(TaskKind::Security),
        ];
        wire(&mut tasks);
        let first: Vec<Vec<String>> = tasks.iter().map(|t| t.depends_on.clone()).collect();
        wire(&mut tasks);
        let second: Vec<Vec<String>> = tasks.iter().map(|t| t.depends_on.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_edge_resolves_in_set() {
        let mut tasks = vec![
            task(TaskKind::CodeGeneration),
            task(TaskKind::Testing),
            task(TaskKind::Deployment),
        ];
        wire(&mut tasks);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        for task in &tasks {
            for dep in &task.depends_on {
                assert!(ids.contains(&dep.as_str()));
            }
        }
    }
}
