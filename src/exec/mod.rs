// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `Executor` trait, the `ExecutionRequest` and
//!   `CommandOutput` types, and the concrete `ProcessExecutor` that the
//!   bridge uses in production, and which tests can replace with a fake
//!   implementation.

pub mod backend;

pub use backend::{CommandOutput, ExecutionRequest, Executor, ProcessExecutor};
