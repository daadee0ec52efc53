//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 reqwest::Client，只暴露"GET 一个 URL"的能力

use crate::config::Config;
use crate::error::{AppError, AppResult, HttpError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// GET 能力
///
/// 状态码不是 200 时返回 `HttpError::BadStatus`，成功时返回响应体文本。
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_text(&self, url: &str, accept: Option<&str>) -> AppResult<String>;
}

/// GET 并把响应体解析为指定类型
pub async fn get_json<T: DeserializeOwned>(
    http: &dyn HttpFetch,
    url: &str,
    accept: Option<&str>,
) -> AppResult<T> {
    let body = http.get_text(url, accept).await?;
    serde_json::from_str(&body).map_err(|source| AppError::json_parse_failed(url, source))
}

/// HTTP 执行器
///
/// 职责：
/// - 持有唯一的 Client 资源
/// - 检查状态码
/// - 不认识学生 / ORCID
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(HttpError::ClientBuild)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for HttpExecutor {
    async fn get_text(&self, url: &str, accept: Option<&str>) -> AppResult<String> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::bad_status(url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::request_failed(url, e))
    }
}
