//! 索引页写入服务 - 业务能力层
//!
//! 列出输出目录中除索引页本身以外的全部文件，写成一个链接列表

use crate::config::Config;
use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 索引页写入服务
pub struct IndexWriter {
    output_dir: PathBuf,
    index_file_name: String,
}

impl IndexWriter {
    pub fn new(config: &Config) -> Self {
        Self::with_dir(&config.output_dir, &config.index_file_name)
    }

    pub fn with_dir(output_dir: impl Into<PathBuf>, index_file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            index_file_name: index_file_name.into(),
        }
    }

    /// 输出目录中除索引页外的全部文件名，按名称排序
    pub async fn list_outputs(&self) -> AppResult<Vec<String>> {
        let dir_str = self.output_dir.display().to_string();
        let mut entries = fs::read_dir(&self.output_dir)
            .await
            .map_err(|e| AppError::read_failed(&dir_str, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::read_failed(&dir_str, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| AppError::read_failed(&dir_str, e))?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name != self.index_file_name {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// 生成并写入索引页
    ///
    /// # 返回
    /// 返回索引页中列出的文件名
    pub async fn write(&self) -> AppResult<Vec<String>> {
        let names = self.list_outputs().await?;
        let path = self.output_dir.join(&self.index_file_name);

        fs::write(&path, render_index(&names))
            .await
            .map_err(|e| AppError::write_failed(path.display().to_string(), e))?;

        debug!("索引页 {} 列出 {} 个文件", path.display(), names.len());
        Ok(names)
    }
}

/// 渲染索引页 HTML
pub fn render_index(names: &[String]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Publications</title></head>\n<body>\n<ul>\n",
    );
    for name in names {
        let escaped = escape_html(name);
        html.push_str(&format!("<li><a href=\"{0}\">{0}</a></li>\n", escaped));
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
