//! Property tests for doxy.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/locator.rs"]
mod locator;

#[path = "properties/state.rs"]
mod state;

#[path = "properties/compose_command.rs"]
mod compose_command;
