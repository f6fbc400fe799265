pub const USAGE: &str = "Usage: claude-session-usage <project-dir>";
pub const USAGE_EXAMPLE: &str =
    "Example: claude-session-usage ~/.claude/projects/-Users-me-Projects-my-app";

#[derive(clap::Parser, Debug)]
#[command(version, about = "Summarize Claude Code token usage per session")]
pub struct Args {
    /// Project directory holding session transcripts (*.jsonl). Supports a leading ~
    ///
    /// Claude Code project directories start with `-`, so hyphenated values are
    /// taken as paths.
    #[arg(allow_hyphen_values = true)]
    pub project_dir: Option<String>,

    /// Anything after the directory is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
