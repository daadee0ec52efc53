use serde::{Deserialize, Serialize};

/// 内容仓库目录列表中的一项
///
/// 子目录的 `download_url` 为 null。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentEntry {
    /// 判断是否是指定后缀的文档文件
    ///
    /// 有 `name` 时按文件名判断，否则按下载地址判断。
    pub fn is_document(&self, suffix: &str) -> bool {
        let Some(url) = self.download_url.as_deref() else {
            return false;
        };
        match self.name.as_deref() {
            Some(name) => name.ends_with(suffix),
            None => url.ends_with(suffix),
        }
    }
}
