//! 引用获取服务 - 业务能力层
//!
//! 只负责"获取一个 ORCID 作者的 bibtex 引用"能力

use crate::clients::OrcidClient;
use crate::error::{AppError, AppResult};
use crate::models::WorkGroup;
use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

/// 惰性的引用序列
///
/// 每取一项才请求一次作品详情；只能消费一次。
pub struct Citations<'a> {
    works: usize,
    inner: BoxStream<'a, AppResult<String>>,
}

impl Citations<'_> {
    /// 作品列表中的作品数（含非 bibtex 的）
    pub fn works(&self) -> usize {
        self.works
    }
}

impl Stream for Citations<'_> {
    type Item = AppResult<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.poll_next_unpin(cx)
    }
}

/// 引用获取服务
pub struct CitationService {
    orcid: OrcidClient,
}

impl CitationService {
    pub fn new(orcid: OrcidClient) -> Self {
        Self { orcid }
    }

    /// 获取作者的 bibtex 引用
    ///
    /// 作品列表在调用时立即请求；每个作品只取第一个摘要的详情路径，
    /// 详情在消费序列时逐个请求。引用格式不是 bibtex 的作品直接跳过。
    pub async fn fetch_citations(&self, orcid_id: &str) -> AppResult<Citations<'_>> {
        let works = self.orcid.works(orcid_id).await?;
        let works_url = self.orcid.works_url(orcid_id);
        let total = works.group.len();

        let inner = stream::iter(works.group.into_iter().enumerate())
            .then(move |(index, group)| self.citation_for(works_url.clone(), index, group))
            .try_filter_map(|citation| async move { Ok(citation) })
            .boxed();

        Ok(Citations {
            works: total,
            inner,
        })
    }

    async fn citation_for(
        &self,
        works_url: String,
        index: usize,
        group: WorkGroup,
    ) -> AppResult<Option<String>> {
        let path = group.first_path().ok_or_else(|| {
            AppError::missing_field(works_url, format!("group[{}].work-summary[0].path", index))
        })?;

        let detail = self.orcid.work_detail(path).await?;
        match detail.bibtex() {
            Some(citation) => Ok(Some(citation.to_string())),
            None => {
                debug!("跳过非 bibtex 引用: {}", path);
                Ok(None)
            }
        }
    }
}
