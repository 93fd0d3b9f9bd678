//! HTTP client implementations

mod http;
mod network;
mod oneshot;

pub use http::HttpClient;
pub use network::NetworkHttpClient;
pub use oneshot::OneshotHttpClient;
