use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::html::Block;

use super::{clean_text, grammar};

/// Page key → chapter heading, built once per code from its table of
/// contents. Lookup of an unknown key yields the empty string; the chapter
/// is enrichment, not a correctness-critical field.
#[derive(Debug, Default)]
pub struct ChapterIndex {
    map: HashMap<String, String>,
}

impl ChapterIndex {
    /// Walk the TOC block stream in order, tracking the running chapter
    /// heading; every link records the chapter active at that point.
    pub fn build(blocks: &[Block]) -> Self {
        let mut map = HashMap::new();
        let mut current = String::new();

        for block in blocks {
            let (text, page_key) = match block {
                Block::Text { text, .. } => (text, None),
                Block::Link { text, page_key } => (text, Some(page_key)),
            };
            let line = clean_text(text);
            if grammar::is_chapter_heading(&line) {
                current = line;
            }
            if let Some(key) = page_key {
                map.insert(key.clone(), current.clone());
            }
        }

        Self { map }
    }

    pub fn lookup(&self, page_key: &str) -> &str {
        self.map.get(page_key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// One built index per code for the lifetime of a run.
///
/// Memoize-once: the first caller builds while holding the lock, so
/// concurrent callers for the same code block until the index is published
/// and a build never runs twice.
#[derive(Debug, Default)]
pub struct ChapterCache {
    inner: Mutex<HashMap<String, Arc<ChapterIndex>>>,
}

impl ChapterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build<F>(&self, code_id: &str, build: F) -> Arc<ChapterIndex>
    where
        F: FnOnce() -> ChapterIndex,
    {
        let mut inner = self.inner.lock().expect("chapter cache lock poisoned");
        if let Some(index) = inner.get(code_id) {
            return Arc::clone(index);
        }
        let index = Arc::new(build());
        inner.insert(code_id.to_string(), Arc::clone(&index));
        index
    }
}
