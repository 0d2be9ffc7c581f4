//! Bridge between the egui thread and the async backend worker.

pub mod commands;
pub mod portrait;
pub mod runtime;
