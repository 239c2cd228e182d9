use std::sync::LazyLock;

use regex::Regex;

// "ГК РФ Статья 21. Дееспособность гражданина" or "Статья 21. ...".
// The prefix is bounded so a reference to an article in running prose never
// reads as a boundary.
static ARTICLE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.{0,40}?\s)?(?i:Статья)\s+(\d+(?:\.\d+)?)\s*\.\s*(.+)").unwrap()
});

// Structural levels in a table of contents: "Глава 4. ...", "Раздел II. ...".
static CHAPTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Часть|Раздел|Подраздел|Глава)\s+[\dIVXLCDM]+[.\s]*").unwrap()
});

/// Article boundary extracted from a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHeader {
    pub num: String,
    pub title: String,
}

/// Match an article header line, yielding its dotted number and title.
pub fn match_article_header(line: &str) -> Option<ArticleHeader> {
    let caps = ARTICLE_HEADER_RE.captures(line)?;
    Some(ArticleHeader {
        num: caps[1].to_string(),
        title: super::clean_text(&caps[2]),
    })
}

/// Does this line open a Part / Section / Subsection / Chapter heading?
pub fn is_chapter_heading(line: &str) -> bool {
    CHAPTER_RE.is_match(line)
}
