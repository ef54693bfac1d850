//! Shared helpers for running child processes and downloading files.

pub mod http;
pub mod process;
