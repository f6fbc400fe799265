//! Markdown table output.
//!
//! The layout (column widths, bold totals, surrounding blank lines) is consumed
//! by other tooling and must not drift.

use crate::models::{SessionSummary, TokenCounts};
use crate::utils::{format_currency, format_duration, format_tokens};

const HEADER: &str = "| # | Session    | Date       | Duration | Turns | API Calls \
                      | Input   | Output | Cache Read | Cache Write | Total  | Est. Cost |";
const SEPARATOR: &str = "|---|------------|------------|----------|-------|----------\
                         |---------|--------|------------|-------------|--------|-----------|";

/// Column sums across every session in the report.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportTotals {
    pub duration_minutes: f64,
    pub turns: u64,
    pub api_calls: u64,
    pub tokens: TokenCounts,
    pub total_tokens: u64,
    pub cost: f64,
}

impl ReportTotals {
    pub fn from_sessions(sessions: &[SessionSummary]) -> Self {
        sessions.iter().fold(ReportTotals::default(), |mut acc, s| {
            acc.duration_minutes += s.duration_minutes;
            acc.turns += s.turns;
            acc.api_calls += s.api_calls;
            acc.tokens += s.tokens;
            acc.total_tokens = acc.total_tokens.saturating_add(s.total_tokens());
            acc.cost += s.estimated_cost;
            acc
        })
    }
}

fn session_row(index: usize, s: &SessionSummary) -> String {
    format!(
        "| {index} | `{}` | {} | {:>8} | {:>5} | {:>9} | {:>7} | {:>6} | {:>10} | {:>11} | {:>6} | ${:>8} |",
        s.id,
        s.date,
        format_duration(s.duration_minutes),
        s.turns,
        s.api_calls,
        format_tokens(s.tokens.input),
        format_tokens(s.tokens.output),
        format_tokens(s.tokens.cache_read),
        format_tokens(s.tokens.cache_create),
        format_tokens(s.total_tokens()),
        format_currency(s.estimated_cost),
    )
}

fn totals_row(t: &ReportTotals) -> String {
    format!(
        "| | **TOTAL**  |            | {:>8} | **{:>3}** | **{:>7}** | **{:>5}** | **{:>4}** | **{:>8}** | **{:>9}** | **{:>4}** | **${:>6}** |",
        format_duration(t.duration_minutes),
        t.turns,
        t.api_calls,
        format_tokens(t.tokens.input),
        format_tokens(t.tokens.output),
        format_tokens(t.tokens.cache_read),
        format_tokens(t.tokens.cache_create),
        format_tokens(t.total_tokens),
        format_currency(t.cost),
    )
}

/// Full report text, rows numbered from 1 in the order given.
pub fn build_report(sessions: &[SessionSummary]) -> String {
    let mut lines = vec![String::new(), HEADER.to_string(), SEPARATOR.to_string()];
    lines.extend(
        sessions
            .iter()
            .enumerate()
            .map(|(i, s)| session_row(i + 1, s)),
    );
    lines.push(totals_row(&ReportTotals::from_sessions(sessions)));
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn print_report(sessions: &[SessionSummary]) {
    print!("{}", build_report(sessions));
}
