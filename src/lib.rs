pub mod cli;
pub mod client;
pub mod config;
pub mod detect;
pub mod error;
pub mod scanner;
