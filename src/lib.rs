//! Aide - Natural-Language Desktop Command Dispatcher

pub mod command;
pub mod core;
pub mod handlers;
