//! Backend bridge: command queue from the UI thread into the async fetch worker.

pub mod commands;
pub mod runtime;
