//! Shared types for the Boo floor-plan framework
//!
//! Common types used across the editor core and the transport layer:
//! domain models, the unified error system, wire DTOs exchanged with the
//! reservation server, and the persistence seam the editor saves through.

pub mod client;
pub mod error;
pub mod models;
pub mod persist;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use persist::FloorPersistence;
pub use serde::{Deserialize, Serialize};
