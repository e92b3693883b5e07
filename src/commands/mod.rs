//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `session.rs` — login/logout/reset (handled before the auth gate).
//! - `runtime.rs` — grades/value/roster/params/preview/compute/show/export.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod session;

pub use runtime::handle_runtime_commands;
pub use session::handle_session_commands;
