use anyhow::Result;
use std::path::Path;
use student_bibtex::config::DEFAULT_CONFIG_FILE;
use student_bibtex::{logging, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置：默认值 → student_bibtex.toml（存在时）→ 环境变量
    let config = Config::load(Path::new(DEFAULT_CONFIG_FILE))?;

    // 初始化并运行应用
    App::new(config)?.run().await?;

    Ok(())
}
