pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod persist;
pub mod ui;
