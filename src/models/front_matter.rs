//! 文档开头的 YAML front-matter
//!
//! 格式：
//! ```text
//! ---
//! name: Jane Doe
//! orcid_id: 0000-0001-2345-6789
//! ---
//! 正文……
//! ```
//!
//! 文档开头的空白会被忽略，分隔线可以是三个或更多 `-`。

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;

/// front-matter 字段名：ORCID 标识
pub const ORCID_KEY: &str = "orcid_id";

fn front_matter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)\A-{3,}[ \t]*\r?\n(?:(.*?)\r?\n)?-{3,}[ \t]*(?:\r?\n|\z)")
            .expect("front-matter pattern is valid")
    })
}

/// 文档的 front-matter 字段
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub fields: Mapping,
}

impl FrontMatter {
    /// 解析文档
    ///
    /// 没有 front-matter 时字段为空。
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let text = content.trim_start_matches('\u{FEFF}').trim_start();
        let Some(caps) = front_matter_pattern().captures(text) else {
            return Ok(Self::default());
        };

        let block = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let fields = if block.trim().is_empty() {
            Mapping::new()
        } else {
            serde_yaml::from_str(block)?
        };

        Ok(Self { fields })
    }

    /// 读取 ORCID 标识
    ///
    /// YAML 可能把标识写成字符串或其它标量；去掉空白后为空视为没有。
    pub fn orcid_id(&self) -> Option<String> {
        let value = match self.fields.get(ORCID_KEY)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        (!value.is_empty()).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_orcid() {
        let doc = "---\nname: Jane Doe\norcid_id: \"0000-0001-2345-6789\"\n---\nJane studies music.\n";
        let fm = FrontMatter::parse(doc).unwrap();

        assert_eq!(fm.orcid_id().as_deref(), Some("0000-0001-2345-6789"));
        assert_eq!(
            fm.fields.get("name"),
            Some(&Value::String("Jane Doe".to_string()))
        );
    }

    #[test]
    fn test_unquoted_orcid_is_a_string() {
        let fm = FrontMatter::parse("---\norcid_id: 0000-0002-1825-0097\n---\n").unwrap();
        assert_eq!(fm.orcid_id().as_deref(), Some("0000-0002-1825-0097"));
    }

    #[test]
    fn test_parse_without_orcid() {
        let fm = FrontMatter::parse("---\nname: John\n---\nbody").unwrap();
        assert_eq!(fm.orcid_id(), None);
        assert_eq!(fm.fields.len(), 1);
    }

    #[test]
    fn test_blank_orcid_counts_as_missing() {
        let fm = FrontMatter::parse("---\norcid_id: \"  \"\n---\n").unwrap();
        assert_eq!(fm.orcid_id(), None);
        let fm = FrontMatter::parse("---\norcid_id:\n---\n").unwrap();
        assert_eq!(fm.orcid_id(), None);
    }

    #[test]
    fn test_no_front_matter() {
        let fm = FrontMatter::parse("# Just a heading\n").unwrap();
        assert!(fm.fields.is_empty());
    }

    #[test]
    fn test_empty_front_matter_and_crlf() {
        let fm = FrontMatter::parse("---\n---\ntext").unwrap();
        assert!(fm.fields.is_empty());

        let fm = FrontMatter::parse("---\r\norcid_id: abc\r\n---\r\ntext").unwrap();
        assert_eq!(fm.orcid_id().as_deref(), Some("abc"));
    }

    #[test]
    fn test_leading_whitespace_before_front_matter() {
        let fm = FrontMatter::parse("\n---\norcid_id: \"0000-0001-2345-6789\"\n---\nbody").unwrap();
        assert_eq!(fm.orcid_id().as_deref(), Some("0000-0001-2345-6789"));

        let fm = FrontMatter::parse("  \n---\norcid_id: abc\n---\n").unwrap();
        assert_eq!(fm.orcid_id().as_deref(), Some("abc"));

        let fm = FrontMatter::parse("\u{FEFF}---\norcid_id: abc\n---\n").unwrap();
        assert_eq!(fm.orcid_id().as_deref(), Some("abc"));
    }

    #[test]
    fn test_longer_fences() {
        let fm = FrontMatter::parse("----\norcid_id: abc\n----\n").unwrap();
        assert_eq!(fm.orcid_id().as_deref(), Some("abc"));

        let fm = FrontMatter::parse("-----  \norcid_id: abc\n---\nbody").unwrap();
        assert_eq!(fm.orcid_id().as_deref(), Some("abc"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(FrontMatter::parse("---\nname: [unclosed\n---\n").is_err());
    }
}
