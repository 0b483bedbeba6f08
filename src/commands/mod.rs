// commands/mod.rs

pub mod check;
pub mod common_args;
pub mod host;
pub mod info;
pub mod list;
pub mod resolve;
