pub mod bootstrap_manager;
pub mod cli;
pub mod commands;
pub mod logging;
mod runtime;

pub use runtime::SystemRuntime;
