//! 学生名单服务 - 业务能力层
//!
//! 只负责"列出学生"能力：列目录 → 按后缀过滤 → 下载 → 解析 front-matter → 推导 slug

use crate::clients::ContentClient;
use crate::config::Config;
use crate::error::{AppResult, RosterError};
use crate::models::{derive_slug, ContentEntry, FrontMatter, StudentRecord};
use tracing::{debug, info};

/// 学生名单服务
///
/// 职责：
/// - 任何一次请求失败都直接返回错误，不产生部分名单
/// - 没有 ORCID 的学生同样返回，由调用方过滤
pub struct RosterService {
    content: ContentClient,
    document_suffix: String,
}

impl RosterService {
    pub fn new(content: ContentClient, config: &Config) -> Self {
        Self {
            content,
            document_suffix: config.document_suffix.clone(),
        }
    }

    /// 列出全部学生，保持目录顺序
    pub async fn list_students(&self) -> AppResult<Vec<StudentRecord>> {
        let entries = self.content.list_entries().await?;
        let listed = entries.len();

        let documents: Vec<String> = entries
            .into_iter()
            .filter(|e| e.is_document(&self.document_suffix))
            .filter_map(|ContentEntry { download_url, .. }| download_url)
            .collect();

        let mut students = Vec::with_capacity(documents.len());
        for url in documents {
            students.push(self.load_student(url).await?);
        }

        info!(
            "📋 目录共 {} 项，资料文件 {} 个，其中 {} 个有 ORCID",
            listed,
            students.len(),
            students.iter().filter(|s| s.has_orcid()).count()
        );

        Ok(students)
    }

    async fn load_student(&self, url: String) -> AppResult<StudentRecord> {
        let content = self.content.fetch_document(&url).await?;

        let front_matter = FrontMatter::parse(&content).map_err(|source| {
            RosterError::FrontMatterParseFailed {
                url: url.clone(),
                source,
            }
        })?;
        let slug = derive_slug(&url).ok_or_else(|| RosterError::InvalidSlug { url: url.clone() })?;
        let orcid_id = front_matter.orcid_id();

        debug!("学生 {} | ORCID: {:?}", slug, orcid_id);

        Ok(StudentRecord {
            slug,
            orcid_id,
            source_url: url,
            metadata: front_matter.fields,
        })
    }
}
