use serde_yaml::Mapping;

/// 一个学生
///
/// 每个名单条目构造一次，处理完即丢弃。
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// 输出文件名（不带扩展名）
    pub slug: String,
    pub orcid_id: Option<String>,
    /// 资料文件的下载地址
    pub source_url: String,
    /// 其余 front-matter 字段，原样保留
    pub metadata: Mapping,
}

impl StudentRecord {
    pub fn has_orcid(&self) -> bool {
        self.orcid_id.is_some()
    }
}

/// 从资料文件 URL 推导 slug
///
/// 取最后一段路径（去掉查询串和锚点），在第一个 `.` 处截断：
/// `https://x/y/jane-doe.md` → `jane-doe`。对已是 slug 的输入结果不变。
/// 结果为空时返回 `None`。
pub fn derive_slug(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    let slug = segment.split('.').next().unwrap_or_default();

    (!slug.is_empty()).then(|| slug.to_string())
}
