//! Command handlers for the doxy binary

pub mod compose;
pub mod config;
pub mod list;
pub mod picker;
pub mod service;
