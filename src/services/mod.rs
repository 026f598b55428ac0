//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `fragments.rs` — fragment name grammar, changes-tree scan, validation.
//! - `authoring.rs` — fragment create/remove, changes-tree scaffolding.
//! - `render.rs` — release-note assembly and output-file write.
//! - `precommit.rs` — hook configuration parse + lint (never execution).
//! - `storage.rs` — repo config loading + audit log.
//! - `release_check.rs` — status report assembly.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod authoring;
pub mod fragments;
pub mod output;
pub mod precommit;
pub mod release_check;
pub mod render;
pub mod storage;
