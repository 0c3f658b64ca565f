use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::task_types::{Task, TaskKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("task '{task}' depends on unknown id '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("expected exactly one code_generation root, found {0}")]
    RootCount(usize),

    #[error("the code_generation root must not have dependencies")]
    RootHasDependencies,

    #[error("dependency cycle detected involving task '{0}'")]
    CycleDetected(String),
}

/// Structural checks over a built task set: every dependency id resolves
/// in-set, exactly one dependency-free code_generation root exists, and the
/// edge relation is acyclic.
pub fn validate_graph(tasks: &[Task]) -> Result<(), GraphError> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    for task in tasks {
        for dep in &task.depends_on {
            if !ids.contains(dep.as_str()) {
                return Err(GraphError::UnknownDependency {
                    task: task.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }

    let roots: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.kind == TaskKind::CodeGeneration)
        .collect();
    if roots.len() != 1 {
        return Err(GraphError::RootCount(roots.len()));
    }
    if !roots[0].depends_on.is_empty() {
        return Err(GraphError::RootHasDependencies);
    }

    topological_order(tasks).map(|_| ())
}

/// Kahn's algorithm over the task set. Ready tasks are taken in input
/// order, so the result is deterministic for a fixed set.
pub fn topological_order(tasks: &[Task]) -> Result<Vec<&Task>, GraphError> {
    let mut remaining_deps: HashMap<&str, HashSet<&str>> = tasks
        .iter()
        .map(|t| {
            (
                t.id.as_str(),
                t.depends_on.iter().map(String::as_str).collect(),
            )
        })
        .collect();

    let mut order = Vec::with_capacity(tasks.len());
    let mut placed: HashSet<&str> = HashSet::new();

    while order.len() < tasks.len() {
        let ready = tasks.iter().find(|t| {
            !placed.contains(t.id.as_str())
                && remaining_deps[t.id.as_str()]
                    .iter()
                    .all(|dep| placed.contains(dep) || !remaining_deps.contains_key(dep))
        });
        match ready {
            Some(task) => {
                placed.insert(task.id.as_str());
                order.push(task);
            }
            None => {
                let stuck = tasks
                    .iter()
                    .find(|t| !placed.contains(t.id.as_str()))
                    .map(|t| t.id.clone())
                    .unwrap_or_default();
                return Err(GraphError::CycleDetected(stuck));
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::dependencies;

    fn task(kind: TaskKind) -> Task {
        Task::new(kind, kind.label(), 5)
    }

    fn wired(kinds: &[TaskKind]) -> Vec<Task> {
        let mut tasks: Vec<Task> = kinds.iter().map(|k| task(*k)).collect();
        dependencies::wire(&mut tasks);
        tasks
    }

    #[test]
    fn test_valid_graph_passes() {
        let tasks = wired(&[
            TaskKind::CodeGeneration,
            TaskKind::Testing,
            TaskKind::Security,
            TaskKind::Deployment,
        ]);
        validate_graph(&tasks).unwrap();
    }

    #[test]
    fn test_unknown_dependency_is_reported() {
        let mut tasks = wired(&[TaskKind::CodeGeneration, TaskKind::Testing]);
        tasks[1].depends_on.push("no-such-id".to_string());
        assert!(matches!(
            validate_graph(&tasks),
            Err(GraphError::UnknownDependency { .. })
        ));
    }

    #[test]
    fn test_missing_root_is_reported() {
        let mut tasks = wired(&[TaskKind::CodeGeneration, TaskKind::Testing]);
        tasks.remove(0);
        tasks[0].depends_on.clear();
        assert_eq!(validate_graph(&tasks), Err(GraphError::RootCount(0)));
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut tasks = wired(&[TaskKind::CodeGeneration, TaskKind::Testing]);
        // manufacture a cycle: root depends on testing, testing on root
        let testing_id = tasks[1].id.clone();
        tasks[0].depends_on.push(testing_id);
        assert!(matches!(
            topological_order(&tasks),
            Err(GraphError::CycleDetected(_))
        ));
    }

    #[test]
    fn test_topological_order_respects_edges() {
        let tasks = wired(&[
            TaskKind::CodeGeneration,
            TaskKind::Documentation,
            TaskKind::Testing,
            TaskKind::Optimization,
            TaskKind::Security,
            TaskKind::Deployment,
        ]);
        let order = topological_order(&tasks).unwrap();
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();
        for task in &tasks {
            for dep in &task.depends_on {
                assert!(position[dep.as_str()] < position[task.id.as_str()]);
            }
        }
        assert_eq!(order[0].kind, TaskKind::CodeGeneration);
    }
}
