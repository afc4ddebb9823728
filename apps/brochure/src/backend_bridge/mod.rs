//! Backend worker: command queue intake and the tokio runtime that serves it.

pub mod commands;
pub mod runtime;
