mod cli;
mod config;
mod interpreter;
mod lexer;
mod logging;
mod planner;


use anyhow::Result;
use clap::{ArgAction, Parser};
use dotenvy::dotenv;
use tracing::info;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tasksmith",
    version,
    about = "Turn a free-text software request into an ordered task plan"
)]
pub struct Cli {
    /// Request text; read from stdin when omitted
    pub request: Option<String>,

    /// Emit the plan as JSON instead of the text rendering
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Validate the request and exit without planning
    #[arg(long, action = ArgAction::SetTrue)]
    pub validate: bool,

    /// Log level (error,warn,info,debug,trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    let cfg = AppConfig::load()?;
    info!(?cfg, "app config");

    cli::run(cli, cfg)
}
