pub mod app;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod global;
pub mod launcher;
pub mod link;
pub mod registry;
pub mod selector;
