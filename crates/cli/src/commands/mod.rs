//! CLI command handlers

pub mod bands;
pub mod calc;
pub mod session;
