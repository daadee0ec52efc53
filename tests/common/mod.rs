#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use student_bibtex::{AppError, AppResult, Config, HttpFetch};

pub const STUDENTS_URL: &str = "https://api.test/repos/o/r/contents/students";
pub const ORCID_BASE: &str = "https://orcid.test";
pub const ORCID_ID: &str = "0000-0001-2345-6789";

/// 按 URL 返回预设响应的 HTTP 替身，记录每次请求
#[derive(Default)]
pub struct StubFetcher {
    routes: HashMap<String, (u16, String)>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(url.into(), (status, body.into()));
        self
    }

    pub fn json(self, url: impl Into<String>, body: serde_json::Value) -> Self {
        self.route(url, 200, body.to_string())
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|(url, _)| url).collect()
    }
}

#[async_trait]
impl HttpFetch for StubFetcher {
    async fn get_text(&self, url: &str, accept: Option<&str>) -> AppResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), accept.map(str::to_string)));
        match self.routes.get(url) {
            Some((200, body)) => Ok(body.clone()),
            Some((status, _)) => Err(AppError::bad_status(url, *status)),
            None => Err(AppError::bad_status(url, 404)),
        }
    }
}

pub fn test_config(output_dir: &Path) -> Config {
    Config {
        students_url: STUDENTS_URL.to_string(),
        orcid_base_url: ORCID_BASE.to_string(),
        output_dir: output_dir.display().to_string(),
        ..Config::default()
    }
}

pub fn raw_url(file: &str) -> String {
    format!("https://raw.test/o/r/main/students/{}", file)
}

pub fn listing(files: &[&str]) -> serde_json::Value {
    let entries: Vec<_> = files
        .iter()
        .map(|f| json!({ "name": f, "type": "file", "download_url": raw_url(f) }))
        .collect();
    serde_json::Value::Array(entries)
}

pub fn profile(orcid_id: Option<&str>) -> String {
    match orcid_id {
        Some(id) => format!("---\nname: Student\norcid_id: \"{}\"\n---\nProfile text.\n", id),
        None => "---\nname: Student\n---\nProfile text.\n".to_string(),
    }
}

pub fn works_url(orcid_id: &str) -> String {
    format!("{}/{}/works", ORCID_BASE, orcid_id)
}

pub fn work_path(orcid_id: &str, put_code: u32) -> String {
    format!("/{}/work/{}", orcid_id, put_code)
}

pub fn works(orcid_id: &str, put_codes: &[u32]) -> serde_json::Value {
    let groups: Vec<_> = put_codes
        .iter()
        .map(|code| json!({ "work-summary": [{ "path": work_path(orcid_id, *code), "put-code": code }] }))
        .collect();
    json!({ "group": groups })
}

pub fn detail(citation_type: &str, value: &str) -> serde_json::Value {
    json!({
        "title": { "title": { "value": "A paper" } },
        "citation": { "citation-type": citation_type, "citation-value": value }
    })
}

pub fn stub(fetcher: StubFetcher) -> Arc<StubFetcher> {
    Arc::new(fetcher)
}
