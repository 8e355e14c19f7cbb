//! Event tracker: a credential store and a personal event list kept in one
//! SQLite file, with a small command-line front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod storage;
pub mod stores;

pub use config::Config;
