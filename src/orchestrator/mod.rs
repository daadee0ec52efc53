//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 持有全部服务，驱动一次完整运行
//! - 加载名单、逐个学生处理、生成索引页
//! - 输出全局统计信息
//!
//! ### `student_processor` - 单个学生处理器
//! - 获取一个学生的引用并写入文件
//! - 写入前的 slug 唯一性检查
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<StudentRecord>)
//!     ↓
//! student_processor (处理单个 StudentRecord)
//!     ↓
//! services (能力层：roster / citation / writer / index)
//!     ↓
//! clients (内容仓库 / ORCID)
//!     ↓
//! infrastructure (基础设施：HttpExecutor)
//! ```

pub mod batch_processor;
pub mod student_processor;

pub use batch_processor::{App, RunStats};
pub use student_processor::{check_unique_slugs, process_student, StudentOutcome};
