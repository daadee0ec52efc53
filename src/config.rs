use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 默认配置文件名（存在时才加载）
pub const DEFAULT_CONFIG_FILE: &str = "student_bibtex.toml";

/// 重复 slug 的处理方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateSlugPolicy {
    /// 写入任何文件之前中止
    Fail,
    /// 后写入的覆盖先写入的
    Overwrite,
}

impl FromStr for DuplicateSlugPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "overwrite" => Ok(Self::Overwrite),
            _ => Err(ConfigError::InvalidDuplicateSlugPolicy {
                value: s.to_string(),
            }),
        }
    }
}

/// 程序配置
///
/// 所有字段都有默认值，配置文件只需写出要覆盖的字段。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 学生资料目录的列表接口
    pub students_url: String,
    /// 学生资料文件后缀
    pub document_suffix: String,
    // --- ORCID 配置 ---
    pub orcid_base_url: String,
    pub orcid_accept: String,
    // --- 输出配置 ---
    pub output_dir: String,
    /// 引用文件扩展名（不带点）
    pub output_extension: String,
    pub index_file_name: String,
    /// 请求头 User-Agent
    pub user_agent: String,
    pub duplicate_slugs: DuplicateSlugPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            students_url:
                "https://api.github.com/repos/QMUL-MAT/gatsby-mat/contents/src/content/students"
                    .to_string(),
            document_suffix: ".md".to_string(),
            orcid_base_url: "http://orcid.org".to_string(),
            orcid_accept: "application/orcid+json".to_string(),
            output_dir: "public".to_string(),
            output_extension: "md".to_string(),
            index_file_name: "index.html".to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            duplicate_slugs: DuplicateSlugPolicy::Fail,
        }
    }
}

impl Config {
    /// 从默认值出发，用环境变量覆盖
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 读取 TOML 配置文件，未写出的字段保持默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::TomlParseFailed { source, .. } => ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            }
            .into(),
            other => other.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: String::new(),
            source,
        })
    }

    /// 加载顺序：默认值 → 配置文件（存在时）→ 环境变量
    pub fn load(path: &Path) -> AppResult<Self> {
        let base = if path.exists() {
            Self::from_toml_file(path)?
        } else {
            Self::default()
        };
        base.with_env_overrides()
    }

    /// 用环境变量覆盖当前值
    pub fn with_env_overrides(self) -> AppResult<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let duplicate_slugs = match lookup("DUPLICATE_SLUGS") {
            Some(value) => value.parse::<DuplicateSlugPolicy>()?,
            None => self.duplicate_slugs,
        };

        Ok(Self {
            students_url: lookup("STUDENTS_URL").unwrap_or(self.students_url),
            document_suffix: lookup("DOCUMENT_SUFFIX").unwrap_or(self.document_suffix),
            orcid_base_url: lookup("ORCID_BASE_URL").unwrap_or(self.orcid_base_url),
            orcid_accept: self.orcid_accept,
            output_dir: lookup("OUTPUT_DIR").unwrap_or(self.output_dir),
            output_extension: lookup("OUTPUT_EXTENSION").unwrap_or(self.output_extension),
            index_file_name: lookup("INDEX_FILE_NAME").unwrap_or(self.index_file_name),
            user_agent: lookup("HTTP_USER_AGENT").unwrap_or(self.user_agent),
            duplicate_slugs,
        })
    }
}
