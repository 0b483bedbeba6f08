// utils/mod.rs

pub mod display;
pub mod logging;
pub mod output;
