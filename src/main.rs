use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::debug;

use claude_session_usage::cli::{Args, USAGE, USAGE_EXAMPLE};
use claude_session_usage::discovery::discover_session_files;
use claude_session_usage::error::UsageError;
use claude_session_usage::logging::init_logging;
use claude_session_usage::pricing::Pricing;
use claude_session_usage::report::print_report;
use claude_session_usage::session::parse_session;
use claude_session_usage::utils::expand_home;

fn main() -> Result<ExitCode> {
    init_logging("warn");
    let args = Args::parse();

    let Some(raw_dir) = args.project_dir else {
        println!("{USAGE}");
        println!("{USAGE_EXAMPLE}");
        return Ok(ExitCode::FAILURE);
    };
    let project_dir = expand_home(&raw_dir);

    let files = match discover_session_files(&project_dir) {
        Ok(files) => files,
        Err(e @ UsageError::DirectoryNotFound { .. }) => {
            println!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("list session files"),
    };
    if files.is_empty() {
        println!("No session files found.");
        return Ok(ExitCode::SUCCESS);
    }

    // Every file is parsed before anything is printed so a bad record leaves
    // no partial table behind.
    let pricing = Pricing::default();
    let sessions = files
        .iter()
        .map(|path| {
            parse_session(path, &pricing)
                .with_context(|| format!("parse session {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(sessions = sessions.len(), "rendering report");

    print_report(&sessions);
    Ok(ExitCode::SUCCESS)
}
