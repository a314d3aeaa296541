// ABOUTME: Re-exports command modules for periodize-cli
// ABOUTME: Plan generation, personal-record and catalog commands

pub mod catalog;
pub mod plan;
pub mod records;
