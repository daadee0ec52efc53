//! 单个学生处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **获取引用**：委托 `CitationService` 生成惰性引用序列
//! 2. **写入文件**：委托 `CitationWriter` 边取边写
//! 3. **统计输出**：记录作品数 / 引用数 / 跳过数
//!
//! 另外提供写入前的 slug 唯一性检查。

use crate::config::DuplicateSlugPolicy;
use crate::error::{AppResult, RosterError};
use crate::models::StudentRecord;
use crate::services::{CitationService, CitationWriter};
use std::collections::HashMap;
use tracing::{info, warn};

/// 单个学生的处理结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StudentOutcome {
    /// 作品列表中的作品数
    pub works: usize,
    /// 写入的 bibtex 引用数
    pub citations: usize,
}

impl StudentOutcome {
    /// 因格式不是 bibtex 而跳过的作品数
    pub fn skipped(&self) -> usize {
        self.works.saturating_sub(self.citations)
    }
}

/// 处理单个学生
///
/// # 参数
/// - `citations`: 引用获取服务
/// - `writer`: 引用写入服务
/// - `student`: 学生（必须有 ORCID）
/// - `orcid_id`: 学生的 ORCID
/// - `student_index`: 学生序号（用于日志）
pub async fn process_student(
    citations: &CitationService,
    writer: &CitationWriter,
    student: &StudentRecord,
    orcid_id: &str,
    student_index: usize,
) -> AppResult<StudentOutcome> {
    info!(
        "[学生 {}] {} | ORCID: {}",
        student_index, student.slug, orcid_id
    );

    let stream = citations.fetch_citations(orcid_id).await?;
    let works = stream.works();
    let written = writer.write(&student.slug, stream).await?;

    let outcome = StudentOutcome {
        works,
        citations: written,
    };
    info!(
        "[学生 {}] ✓ 作品 {}, 引用 {}, 跳过 {} -> {}",
        student_index,
        outcome.works,
        outcome.citations,
        outcome.skipped(),
        writer.path_for(&student.slug).display()
    );

    Ok(outcome)
}

/// 检查有 ORCID 的学生之间 slug 是否重复
///
/// `Fail` 时返回第一个冲突；`Overwrite` 时只记录警告。
pub fn check_unique_slugs(
    students: &[StudentRecord],
    policy: DuplicateSlugPolicy,
) -> AppResult<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for student in students.iter().filter(|s| s.has_orcid()) {
        let Some(first) = seen.insert(&student.slug, &student.source_url) else {
            continue;
        };
        match policy {
            DuplicateSlugPolicy::Fail => {
                return Err(RosterError::DuplicateSlug {
                    slug: student.slug.clone(),
                    first: first.to_string(),
                    second: student.source_url.clone(),
                }
                .into());
            }
            DuplicateSlugPolicy::Overwrite => {
                warn!(
                    "⚠️ slug `{}` 重复，{} 将覆盖 {}",
                    student.slug, student.source_url, first
                );
            }
        }
    }

    Ok(())
}
