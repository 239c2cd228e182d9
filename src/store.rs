use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const RAW_DIR: &str = "data/raw";
pub const PARSED_DIR: &str = "data/parsed";
pub const COMBINED_FILE: &str = "all_codexes.json";

/// The normalized unit of output: one statute article.
///
/// `(code_id, article_num)` is the corpus-wide composite key; downstream
/// consumers derive idempotent storage ids from `"{code_id}:{article_num}"`,
/// so the field names and key format are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub code_id: String,
    pub code_name: String,
    pub chapter: String,
    pub article_num: String,
    pub article_title: String,
    pub text: String,
    pub source_ref: String,
}

/// One fetched article page as handed over by the fetch collaborator:
/// the opaque page key plus raw HTML.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub key: String,
    pub html: String,
}

/// Read the table-of-contents document for a code, if it was fetched.
pub fn load_toc(raw_dir: &Path, code_id: &str) -> Option<String> {
    let path = raw_dir.join(code_id).join("index.html");
    fs::read_to_string(&path).ok()
}

/// Enumerate a code's article pages in sorted filename order, skipping the
/// table of contents. A missing directory or unreadable file degrades to
/// fewer pages, never an error.
pub fn load_pages(raw_dir: &Path, code_id: &str) -> Vec<RawPage> {
    let dir = raw_dir.join(code_id);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => {
            warn!(code_id, dir = %dir.display(), "raw directory not found, skipping");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
        .filter(|p| p.file_name().is_some_and(|n| n != "index.html"))
        .collect();
    paths.sort();

    let mut pages = Vec::with_capacity(paths.len());
    for path in paths {
        let key = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        match fs::read_to_string(&path) {
            Ok(html) => pages.push(RawPage { key, html }),
            Err(err) => warn!(page = %path.display(), %err, "unreadable page, skipping"),
        }
    }
    pages
}

/// Write one code's group to `data/parsed/<code_id>.json`.
pub fn write_code_records(
    parsed_dir: &Path,
    code_id: &str,
    records: &[ArticleRecord],
) -> Result<PathBuf> {
    fs::create_dir_all(parsed_dir)
        .with_context(|| format!("creating {}", parsed_dir.display()))?;
    let path = parsed_dir.join(format!("{code_id}.json"));
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Read one code's group back, if present.
pub fn read_code_records(parsed_dir: &Path, code_id: &str) -> Option<Vec<ArticleRecord>> {
    let path = parsed_dir.join(format!("{code_id}.json"));
    let json = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(records) => Some(records),
        Err(err) => {
            warn!(code_id, %err, "unreadable parsed file");
            None
        }
    }
}

/// Write the combined corpus to `data/parsed/all_codexes.json`.
pub fn write_combined(parsed_dir: &Path, records: &[ArticleRecord]) -> Result<PathBuf> {
    fs::create_dir_all(parsed_dir)
        .with_context(|| format!("creating {}", parsed_dir.display()))?;
    let path = parsed_dir.join(COMBINED_FILE);
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
