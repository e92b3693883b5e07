//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `allocator.rs` — the pure allocation calculator (compute/preview/expected totals).
//! - `auth.rs` — `AuthProvider` seam + mock provider.
//! - `roster.rs` — `RosterSource` seam + deterministic mock file parser.
//! - `session.rs` — session persistence, audit log, auth/result gates.
//! - `defaults.rs` — defaults.toml loading + fresh-config construction.
//! - `report.rs` — plain-text allocation summary rendering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod allocator;
pub mod auth;
pub mod defaults;
pub mod output;
pub mod report;
pub mod roster;
pub mod session;
