// ABOUTME: Shared helpers for periodize-cli
// ABOUTME: Provides JSON output rendering

pub mod output;
