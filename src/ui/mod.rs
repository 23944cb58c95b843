//! Terminal presentation for the CLI

pub mod console;
pub mod context;
pub mod icon;
pub mod terminal;
pub mod theme;
