//! 错误类型
//!
//! 所有错误都是致命的：任何一个出现都会中止整个运行，已写入的文件保留原样。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络请求或 HTTP 状态错误
    #[error("HTTP错误: {0}")]
    Http(#[from] HttpError),
    /// 响应结构不符合预期
    #[error("响应错误: {0}")]
    Response(#[from] ResponseError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 学生名单错误
    #[error("名单错误: {0}")]
    Roster(#[from] RosterError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 网络请求错误
#[derive(Debug, Error)]
pub enum HttpError {
    /// 请求未能发出或响应体读取失败
    #[error("请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 状态码不是 200
    #[error("非预期的状态码 {status} ({url})")]
    BadStatus { url: String, status: u16 },
    /// HTTP 客户端构建失败
    #[error("无法创建HTTP客户端: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// 响应结构错误
#[derive(Debug, Error)]
pub enum ResponseError {
    /// JSON 解析失败（包括缺少必需字段）
    #[error("JSON解析失败 ({url}): {source}")]
    JsonParseFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// 缺少预期字段
    #[error("缺少字段 `{field}` ({url})")]
    MissingField { url: String, field: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 读取失败
    #[error("读取失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入失败
    #[error("写入失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 学生名单错误
#[derive(Debug, Error)]
pub enum RosterError {
    /// front-matter 不是合法的 YAML
    #[error("无法解析front-matter ({url}): {source}")]
    FrontMatterParseFailed {
        url: String,
        #[source]
        source: serde_yaml::Error,
    },
    /// 无法从 URL 推导出 slug
    #[error("无法从 {url} 推导slug")]
    InvalidSlug { url: String },
    /// 两个学生的 slug 相同
    #[error("slug `{slug}` 重复: {first} 与 {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 重复 slug 策略无法识别
    #[error("无法识别的重复slug策略 '{value}' (可选: fail | overwrite)")]
    InvalidDuplicateSlugPolicy { value: String },
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件 TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建请求失败错误
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Http(HttpError::RequestFailed {
            url: url.into(),
            source,
        })
    }

    /// 创建状态码错误
    pub fn bad_status(url: impl Into<String>, status: u16) -> Self {
        AppError::Http(HttpError::BadStatus {
            url: url.into(),
            status,
        })
    }

    /// 创建 JSON 解析错误
    pub fn json_parse_failed(url: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Response(ResponseError::JsonParseFailed {
            url: url.into(),
            source,
        })
    }

    /// 创建缺少字段错误
    pub fn missing_field(url: impl Into<String>, field: impl Into<String>) -> Self {
        AppError::Response(ResponseError::MissingField {
            url: url.into(),
            field: field.into(),
        })
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
