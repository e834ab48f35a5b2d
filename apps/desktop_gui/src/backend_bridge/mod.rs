//! Bridge between the egui thread and the async API worker.

pub mod commands;
pub mod runtime;
