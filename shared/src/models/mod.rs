//! Data models
//!
//! Client-side view-model structures mirroring (a subset of) server
//! resources. The server is authoritative; all IDs are `i64` integer
//! primary keys assigned server-side.

pub mod branch;
pub mod brand;
pub mod image_ref;
pub mod listing;
pub mod variant;
pub mod vehicle_model;

// Re-exports
pub use branch::*;
pub use brand::*;
pub use image_ref::*;
pub use listing::*;
pub use variant::*;
pub use vehicle_model::*;
