/// 日志工具模块
///
/// 初始化 tracing，并提供启动与统计输出
use crate::config::Config;
use crate::orchestrator::RunStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 默认日志级别，可用 `RUST_LOG` 覆盖
pub const DEFAULT_FILTER: &str = "info";

/// 初始化日志
///
/// 重复调用不会报错（测试中可能多次初始化）。
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 学生 ORCID 引用导出");
    info!("📂 名单地址: {}", config.students_url);
    info!("🔗 ORCID: {}", config.orcid_base_url);
    info!("💾 输出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("👥 学生: {} (有 ORCID: {})", stats.students, stats.with_orcid);
    info!("📄 引用文件: {}", stats.files_written);
    info!("✅ 引用: {}", stats.citations);
    info!("⏭️ 跳过(非 bibtex): {}", stats.skipped_citations);
    info!("{}", "=".repeat(60));
    info!(
        "\n索引页已保存至: {}/{} ({} 个文件)",
        config.output_dir, config.index_file_name, stats.indexed
    );
}
