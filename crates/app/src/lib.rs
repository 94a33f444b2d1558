//! # periscope-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Backend` — the four HTTP operations consumed from the remote node
//!   - `OutputRegion` / `ImageRegion` — where a handler renders results
//! - Implement the dashboard use-cases (`Dashboard`): validate local
//!   input, show progress, dispatch one request, render success or error
//!
//! ## Dependency rule
//! Depends on `periscope-domain` only (plus `tokio::fs` for the awaitable
//! image read). Never imports adapter crates. Adapters depend on *this*
//! crate, not the reverse.

pub mod ports;
pub mod services;
