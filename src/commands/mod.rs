//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — init/add/hooks command trees.
//! - `runtime.rs` — list/show/remove/check/build/status.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::{handle_authoring_commands, handle_hook_commands};
pub use runtime::handle_runtime_commands;
