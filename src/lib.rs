//! # Student Bibtex
//!
//! 从内容仓库读取学生名单，按每个学生的 ORCID 拉取 bibtex 引用，
//! 为每个学生写一个引用文件，最后生成索引页。一次性批处理：获取、转换、写入、退出。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有唯一的 HTTP Client，只暴露 GET 能力
//! - `HttpFetch` - GET 能力的抽象，测试中可替换
//!
//! ### ② 客户端层（Clients）
//! - `ContentClient` - 目录列表、原始文件下载
//! - `OrcidClient` - 作品列表、作品详情
//!
//! ### ③ 业务能力层（Services）
//! - `RosterService` - 列出学生
//! - `CitationService` - 惰性获取一个作者的 bibtex 引用
//! - `CitationWriter` - 写一个学生的引用文件
//! - `IndexWriter` - 写索引页
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 一次完整运行
//! - `orchestrator/student_processor` - 单个学生
//!
//! 全程顺序执行；任何错误都中止运行。

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, DuplicateSlugPolicy};
pub use error::{AppError, AppResult};
pub use infrastructure::{HttpExecutor, HttpFetch};
pub use models::StudentRecord;
pub use orchestrator::{App, RunStats};
pub use utils::logging;
