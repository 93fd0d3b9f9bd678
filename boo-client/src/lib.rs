//! HTTP transport for the Boo floor-plan editor
//!
//! Provides the [`HttpClient`] trait with two implementations:
//! - [`NetworkHttpClient`]: reqwest-based client for a remote server
//! - [`OneshotHttpClient`]: in-process client driving an axum `Router`
//!   directly, for tests and same-process deployments
//!
//! and [`FloorApi`], the typed endpoint surface the editor core persists
//! through.

pub mod client;
pub mod config;
pub mod error;
pub mod floor;

// Re-exports
pub use client::{HttpClient, NetworkHttpClient, OneshotHttpClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use floor::FloorApi;
