use std::io::Read;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::Cli;
use crate::config::AppConfig;
use crate::interpreter::{RequestInterpreter, RequestValidation, validate_request};
use crate::lexer::Lexer;
use crate::planner::{PlanSummary, TaskPlan, TaskPlanner, create_plan, topological_order};

/// Run one decomposition from the command line.
pub fn run(cli: Cli, cfg: AppConfig) -> Result<()> {
    let request_text = match cli.request {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read request from stdin")?;
            buf.trim().to_string()
        }
    };

    let report = validate_request(&request_text, &cfg.limits);
    if cli.validate {
        render_validation(&report, cli.json)?;
        return Ok(());
    }
    if !report.is_valid {
        render_validation(&report, cli.json)?;
        bail!("request failed validation");
    }
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    let lexer = Lexer::new().context("compile entity patterns")?;
    let interpreter =
        RequestInterpreter::new(cfg.scoring.clone()).context("check lookup tables")?;
    let planner = TaskPlanner::new();

    let analysis = lexer.analyze(&request_text);
    let request = interpreter.interpret(&analysis, &request_text);
    let tasks = planner.build_tasks(&request);
    let plan = create_plan(request, tasks);
    info!(plan_id = %plan.id, tasks = plan.tasks.len(), "plan created");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        render_plan(&plan)?;
    }
    Ok(())
}

fn render_validation(report: &RequestValidation, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for error in &report.errors {
        println!("error: {error}");
    }
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    for suggestion in &report.suggestions {
        println!("suggestion: {suggestion}");
    }
    if report.is_valid && report.warnings.is_empty() && report.suggestions.is_empty() {
        println!("ok");
    }
    Ok(())
}

/// Human-readable rendering, tasks in execution order.
fn render_plan(plan: &TaskPlan) -> Result<()> {
    let request = &plan.request;
    println!("plan {}", plan.id);
    println!("  request:    {}", plan.original_request);
    println!(
        "  language:   {}",
        request.language.as_deref().unwrap_or("-")
    );
    println!(
        "  framework:  {}",
        request.framework.as_deref().unwrap_or("-")
    );
    println!(
        "  platform:   {}",
        request.platform.as_deref().unwrap_or("-")
    );
    if !request.dependencies.is_empty() {
        println!("  depends on: {}", request.dependencies.join(", "));
    }
    for constraint in &request.constraints {
        println!("  constraint: {constraint}");
    }
    println!(
        "  complexity {} / priority {} / ~{} work units",
        request.complexity, request.priority, request.estimated_work_units
    );
    println!();

    let ordered = topological_order(&plan.tasks).context("order task graph")?;
    for (index, task) in ordered.iter().enumerate() {
        println!(
            "  {}. [{}] {} (complexity {})",
            index + 1,
            task.kind.label(),
            task.description,
            task.estimated_complexity
        );
    }

    let summary = PlanSummary::from_plan(plan);
    println!();
    println!(
        "  {} task(s): {}",
        summary.total_tasks,
        summary
            .tasks_by_kind
            .iter()
            .map(|(kind, count)| format!("{kind}={count}"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}
