// boo-client/src/client/http.rs
// HTTP 客户端 trait - 网络与进程内实现共用

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::ClientResult;

/// HTTP 客户端 trait
///
/// The verbs the floor-plan API uses. Implementations must attach the
/// bearer token (when set) to every request.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// Replace the bearer token used for subsequent requests
    fn set_token(&self, token: Option<String>);

    /// Current bearer token, if any
    fn token(&self) -> Option<String>;
}
