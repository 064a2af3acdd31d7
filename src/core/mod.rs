pub mod commands;
pub mod env;
pub mod history;
pub mod state;
