pub mod catalog;
pub mod config;
pub mod errors;
pub mod host;
pub mod launcher;
pub mod logging;
pub mod plugin;
pub mod resolver;
pub mod types;
