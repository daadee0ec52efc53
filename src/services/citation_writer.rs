//! 引用写入服务 - 业务能力层
//!
//! 只负责"把一个学生的引用写成文件"能力，不关心流程

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

/// 引用写入服务
///
/// 每个学生一个 `<slug>.<ext>` 文件，每行一条引用，顺序与序列一致。
pub struct CitationWriter {
    output_dir: PathBuf,
    extension: String,
}

impl CitationWriter {
    pub fn new(config: &Config) -> Self {
        Self::with_dir(&config.output_dir, &config.output_extension)
    }

    /// 使用自定义输出目录创建
    pub fn with_dir(output_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 确保输出目录存在（已存在不报错）
    pub async fn ensure_output_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| FileError::CreateDirFailed {
                path: self.output_dir.display().to_string(),
                source,
            })?;
        Ok(())
    }

    /// 学生输出文件路径
    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", slug, self.extension))
    }

    /// 写入一个学生的全部引用
    ///
    /// 文件总是重新创建。序列中出现错误时立即返回，已写入的行保留。
    ///
    /// # 返回
    /// 返回写入的引用条数
    pub async fn write<S>(&self, slug: &str, citations: S) -> AppResult<usize>
    where
        S: Stream<Item = AppResult<String>>,
    {
        let path = self.path_for(slug);
        let path_str = path.display().to_string();

        let file = fs::File::create(&path)
            .await
            .map_err(|e| AppError::write_failed(&path_str, e))?;
        let mut writer = BufWriter::new(file);

        let mut citations = std::pin::pin!(citations);
        let mut written = 0;
        let result = async {
            while let Some(citation) = citations.next().await {
                let citation = citation?;
                writer
                    .write_all(format!("{}\n", citation).as_bytes())
                    .await
                    .map_err(|e| AppError::write_failed(&path_str, e))?;
                written += 1;
            }
            Ok::<_, AppError>(())
        }
        .await;

        // 出错时也把已写入的内容落盘
        let flushed = writer
            .shutdown()
            .await
            .map_err(|e| AppError::write_failed(&path_str, e));
        result?;
        flushed?;

        debug!("写入 {} 条引用 -> {}", written, path_str);
        Ok(written)
    }
}
