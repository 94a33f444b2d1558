//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here so the use-case layer and the adapter
//! layer can depend on them without creating circular dependencies.

pub mod backend;
pub mod output;

pub use backend::Backend;
pub use output::{ImageRegion, OutputRegion};
