pub mod cli;
pub mod report;
pub mod runner;
pub mod scenes;
