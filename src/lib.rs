//! # Claude Session Usage
//!
//! Aggregates token usage from Claude Code session transcripts into a
//! per-session cost report.
//!
//! ## Overview
//!
//! Each `*.jsonl` file in a project directory is one session. Every line is a
//! JSON event record; assistant records may carry a `message.usage` block with
//! token counters. This library:
//! - Discovers session files in lexicographic (chronological) order
//! - Parses each into a [`models::SessionSummary`] (turns, API calls, tokens,
//!   duration, estimated cost)
//! - Renders a fixed-width markdown table with a totals row

/// Command-line argument parsing
pub mod cli;

/// Session file discovery
pub mod discovery;

/// Error taxonomy for discovery and parsing
pub mod error;

/// Tracing subscriber setup
pub mod logging;

/// Data models for transcript records, token counters and session summaries
pub mod models;

/// Static pricing table and cost calculation
pub mod pricing;

/// Table rendering and totals
pub mod report;

/// Per-file transcript parsing
pub mod session;

/// Utility functions for paths and formatting
pub mod utils;
