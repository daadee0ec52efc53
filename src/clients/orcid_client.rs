/// ORCID 公共 API 客户端
///
/// 只读访问，无需认证
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::http_executor::{get_json, HttpFetch};
use crate::models::{WorkDetail, WorksResponse};
use std::sync::Arc;
use tracing::debug;

/// ORCID 客户端
pub struct OrcidClient {
    http: Arc<dyn HttpFetch>,
    base_url: String,
    accept: String,
}

impl OrcidClient {
    /// 创建新的 ORCID 客户端
    pub fn new(http: Arc<dyn HttpFetch>, config: &Config) -> Self {
        Self {
            http,
            base_url: config.orcid_base_url.trim_end_matches('/').to_string(),
            accept: config.orcid_accept.clone(),
        }
    }

    /// 作者的作品列表：`{base}/{orcid_id}/works`
    pub async fn works(&self, orcid_id: &str) -> AppResult<WorksResponse> {
        let url = self.works_url(orcid_id);
        let works: WorksResponse = get_json(self.http.as_ref(), &url, Some(&self.accept)).await?;
        debug!("ORCID {} 共 {} 组作品", orcid_id, works.group.len());
        Ok(works)
    }

    /// 单个作品详情：`{base}{path}`
    pub async fn work_detail(&self, path: &str) -> AppResult<WorkDetail> {
        get_json(self.http.as_ref(), &self.detail_url(path), Some(&self.accept)).await
    }

    pub fn works_url(&self, orcid_id: &str) -> String {
        format!("{}/{}/works", self.base_url, orcid_id)
    }

    /// `path` 是 ORCID 返回的以 `/` 开头的相对路径
    pub fn detail_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
