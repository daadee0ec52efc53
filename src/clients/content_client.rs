/// 内容仓库 API 客户端
///
/// 封装学生资料目录的列表和原始文件下载
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::http_executor::{get_json, HttpFetch};
use crate::models::ContentEntry;
use std::sync::Arc;
use tracing::debug;

/// 内容仓库客户端
pub struct ContentClient {
    http: Arc<dyn HttpFetch>,
    students_url: String,
}

impl ContentClient {
    /// 创建新的内容仓库客户端
    pub fn new(http: Arc<dyn HttpFetch>, config: &Config) -> Self {
        Self {
            http,
            students_url: config.students_url.clone(),
        }
    }

    /// 列出学生资料目录
    ///
    /// # 返回
    /// 返回目录中的全部条目，保持接口返回的顺序
    pub async fn list_entries(&self) -> AppResult<Vec<ContentEntry>> {
        let entries: Vec<ContentEntry> = get_json(self.http.as_ref(), &self.students_url, None).await?;
        debug!("目录 {} 共 {} 项", self.students_url, entries.len());
        Ok(entries)
    }

    /// 下载单个资料文件的原始内容
    pub async fn fetch_document(&self, download_url: &str) -> AppResult<String> {
        self.http.get_text(download_url, None).await
    }
}
