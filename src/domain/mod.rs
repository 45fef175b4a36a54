//! Core domain types and logic.

pub mod sentiment;
pub mod selection;
pub mod changes;
pub mod startup_check;
pub mod settings;
pub mod config_validation;
pub mod algorithm;
pub mod replay;
pub mod error;
