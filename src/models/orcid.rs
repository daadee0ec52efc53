//! ORCID 公共 API 的响应结构
//!
//! 只声明用到的字段，其余字段忽略。

use serde::{Deserialize, Serialize};

/// 唯一保留的引用格式
pub const BIBTEX_CITATION_TYPE: &str = "bibtex";

/// `/{orcid_id}/works` 的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksResponse {
    pub group: Vec<WorkGroup>,
}

/// 同一作品的一组摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkGroup {
    #[serde(rename = "work-summary")]
    pub work_summary: Vec<WorkSummary>,
}

impl WorkGroup {
    /// 第一个摘要的详情路径
    pub fn first_path(&self) -> Option<&str> {
        self.work_summary.first().and_then(|s| s.path.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSummary {
    #[serde(default)]
    pub path: Option<String>,
}

/// `/{path}` 作品详情的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDetail {
    #[serde(default)]
    pub citation: Option<Citation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    #[serde(rename = "citation-type")]
    pub citation_type: String,
    #[serde(rename = "citation-value")]
    pub citation_value: String,
}

impl WorkDetail {
    /// 仅当引用格式为 bibtex 时返回去掉首尾空白的引用文本
    pub fn bibtex(&self) -> Option<&str> {
        self.citation
            .as_ref()
            .filter(|c| c.citation_type == BIBTEX_CITATION_TYPE)
            .map(|c| c.citation_value.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_works_response_paths() {
        let json = r#"{
            "last-modified-date": null,
            "group": [
                {"work-summary": [{"path": "/0000-0001-2345-6789/work/1", "put-code": 1},
                                  {"path": "/0000-0001-2345-6789/work/9"}]},
                {"work-summary": []}
            ]
        }"#;
        let works: WorksResponse = serde_json::from_str(json).unwrap();
        assert_eq!(works.group[0].first_path(), Some("/0000-0001-2345-6789/work/1"));
        assert_eq!(works.group[1].first_path(), None);
    }

    #[test]
    fn test_bibtex_is_trimmed() {
        let detail: WorkDetail = serde_json::from_str(
            r#"{"citation": {"citation-type": "bibtex", "citation-value": "  @article{a, title={A}}\n"}}"#,
        )
        .unwrap();
        assert_eq!(detail.bibtex(), Some("@article{a, title={A}}"));
    }

    #[test]
    fn test_other_citation_types_are_skipped() {
        let detail: WorkDetail = serde_json::from_str(
            r#"{"citation": {"citation-type": "formatted-apa", "citation-value": "Doe, J. (2020)."}}"#,
        )
        .unwrap();
        assert_eq!(detail.bibtex(), None);
    }

    #[test]
    fn test_null_citation_is_skipped() {
        let detail: WorkDetail = serde_json::from_str(r#"{"title": {}, "citation": null}"#).unwrap();
        assert_eq!(detail.bibtex(), None);
    }
}
