// CLI functionality lives here rather than in main.rs for better testability
pub mod cli;
pub mod commands;
pub mod display;
pub mod logging;
