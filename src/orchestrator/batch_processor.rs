//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整运行。
//!
//! ## 核心流程
//!
//! 1. **准备输出目录**：不存在则创建
//! 2. **加载名单**：委托 `RosterService`，任何失败都中止
//! 3. **slug 检查**：按配置的策略处理重复 slug
//! 4. **逐个学生**：只处理有 ORCID 的学生，严格顺序执行
//! 5. **索引页**：全部学生完成后生成
//! 6. **全局统计**：汇总输出
//!
//! 任何错误都立即返回，不写索引页，已写入的学生文件保留。

use crate::clients::{ContentClient, OrcidClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{HttpExecutor, HttpFetch};
use crate::orchestrator::student_processor::{check_unique_slugs, process_student};
use crate::services::{CitationService, CitationWriter, IndexWriter, RosterService};
use crate::utils::logging;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    roster: RosterService,
    citations: CitationService,
    writer: CitationWriter,
    index: IndexWriter,
}

impl App {
    /// 使用真实的 HTTP 客户端初始化应用
    pub fn new(config: Config) -> AppResult<Self> {
        let http: Arc<dyn HttpFetch> = Arc::new(HttpExecutor::new(&config)?);
        Ok(Self::with_fetcher(config, http))
    }

    /// 使用指定的 HTTP 能力初始化应用
    pub fn with_fetcher(config: Config, http: Arc<dyn HttpFetch>) -> Self {
        let roster = RosterService::new(ContentClient::new(http.clone(), &config), &config);
        let citations = CitationService::new(OrcidClient::new(http, &config));
        let writer = CitationWriter::new(&config);
        let index = IndexWriter::new(&config);

        Self {
            config,
            roster,
            citations,
            writer,
            index,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunStats> {
        logging::log_startup(&self.config);

        self.writer.ensure_output_dir().await?;

        info!("\n📁 正在加载学生名单...");
        let students = self.roster.list_students().await?;
        check_unique_slugs(&students, self.config.duplicate_slugs)?;

        let mut stats = RunStats {
            students: students.len(),
            ..Default::default()
        };

        for (idx, student) in students.iter().enumerate() {
            let student_index = idx + 1;
            let Some(orcid_id) = student.orcid_id.as_deref() else {
                warn!("[学生 {}] {} 没有 ORCID，跳过", student_index, student.slug);
                continue;
            };

            let outcome = process_student(
                &self.citations,
                &self.writer,
                student,
                orcid_id,
                student_index,
            )
            .await?;

            stats.with_orcid += 1;
            stats.files_written += 1;
            stats.citations += outcome.citations;
            stats.skipped_citations += outcome.skipped();
        }

        info!("\n📝 正在生成索引页...");
        stats.indexed = self.index.write().await?.len();

        logging::print_final_stats(&stats, &self.config);

        Ok(stats)
    }
}

/// 运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// 名单中的学生数
    pub students: usize,
    /// 有 ORCID 的学生数
    pub with_orcid: usize,
    /// 写入的引用文件数
    pub files_written: usize,
    /// 写入的引用总数
    pub citations: usize,
    /// 非 bibtex 而跳过的作品数
    pub skipped_citations: usize,
    /// 索引页列出的文件数
    pub indexed: usize,
}
