//! # periscope-domain
//!
//! Pure domain model for the periscope dashboard client.
//!
//! ## Responsibilities
//! - Foundational types: error taxonomy shared across the workspace
//! - Define the **payloads** consumed from the backend (device status,
//!   visual detection)
//! - Pure formatting: byte quantities, the device-status report, and
//!   base64 image payloads
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod detection;
pub mod error;
pub mod format;
pub mod image;
pub mod report;
pub mod status;
