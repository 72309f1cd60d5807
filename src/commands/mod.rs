//! CLI commands for forgetit

pub mod access;
pub mod add;
pub mod advance;
pub mod candidates;
pub mod classify;
pub mod condense;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod format;
pub mod history;
pub mod list;
pub mod recompute;
pub mod show;
pub mod simulate;
pub mod snapshot;
