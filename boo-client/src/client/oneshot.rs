// boo-client/src/client/oneshot.rs
// Oneshot HTTP 客户端 - 进程内通信

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use tower::ServiceExt;

use crate::error::ApiErrorResponse;
use crate::{ClientError, ClientResult};

use super::http::HttpClient;

/// Oneshot HTTP 客户端 (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 适用于同进程的服务器-客户端通信，零网络开销。测试中用它
/// 驱动一个替身服务器。
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Arc<Router>,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// 创建新的 Oneshot HTTP 客户端
    ///
    /// `router` 必须已完成 `with_state` 初始化。
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
            token: Arc::new(RwLock::new(None)),
        }
    }

    fn uri(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/'))
    }

    fn build_request(&self, method: http::Method, path: &str, body: Body) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(Self::uri(path));

        if let Some(token) = self.token() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        builder
            .header("Content-Type", "application/json")
            .body(body)
            .expect("Failed to build request")
    }

    /// 执行请求并处理响应
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let router = self.router.as_ref().clone();

        let response = router
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            // 尝试解析为 API 错误响应
            if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
                return Err(ClientError::Api {
                    code: api_err.code,
                    message: api_err.message,
                    details: api_err.details,
                });
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized("Unauthorized".into())),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path, Body::empty());
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(http::Method::POST, path, Body::from(bytes));
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(http::Method::PUT, path, Body::from(bytes));
        self.execute(request).await
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }

    fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }
}
