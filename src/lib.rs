pub mod api;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod input;
pub mod provision;
pub mod rules;
