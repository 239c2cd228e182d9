use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static CONTENT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.document-page__content").unwrap());

/// Container classes for editorial-history / inserted-note blocks. Paragraphs
/// whose direct parent carries one of these are excluded unconditionally.
const ANNOTATION_CLASSES: &[&str] =
    &["doc-edit", "document__edit", "doc-insert", "document__insert"];

/// Tags walked when building the chapter index from a table of contents.
const TOC_TAGS: &[&str] = &["a", "p", "div", "h2", "h3", "h4"];

/// One block of a materialized document, in document order.
#[derive(Debug, Clone)]
pub enum Block {
    /// Paragraph-level text. `in_annotation` marks structural provenance
    /// inside an edit/insert container.
    Text { text: String, in_annotation: bool },
    /// Link resolving to an article page key (the trailing hash segment of
    /// its href).
    Link { text: String, page_key: String },
}

/// Materialize the paragraph stream of one article page.
///
/// Only `<p>` elements inside the content container are considered; a page
/// without the container yields an empty stream, not an error.
pub fn materialize_article(html: &str) -> Vec<Block> {
    let doc = Html::parse_document(html);
    let content = match doc.select(&CONTENT_SEL).next() {
        Some(el) => el,
        None => return Vec::new(),
    };

    let mut blocks = Vec::new();
    for node in content.descendants() {
        let el = match ElementRef::wrap(node) {
            Some(el) => el,
            None => continue,
        };
        if el.value().name() != "p" {
            continue;
        }
        let text = element_text(&el);
        if text.is_empty() {
            continue;
        }
        blocks.push(Block::Text {
            text,
            in_annotation: has_annotation_parent(&el),
        });
    }
    blocks
}

/// Materialize a table-of-contents document: every heading/paragraph text
/// plus every link that resolves to a page key, in document order.
pub fn materialize_toc(html: &str) -> Vec<Block> {
    let doc = Html::parse_document(html);
    let mut blocks = Vec::new();

    for node in doc.root_element().descendants() {
        let el = match ElementRef::wrap(node) {
            Some(el) => el,
            None => continue,
        };
        let name = el.value().name();
        if !TOC_TAGS.contains(&name) {
            continue;
        }
        let text = element_text(&el);

        if name == "a" {
            if let Some(key) = el.value().attr("href").and_then(page_key_from_href) {
                blocks.push(Block::Link {
                    text,
                    page_key: key,
                });
            }
            continue;
        }
        if !text.is_empty() {
            blocks.push(Block::Text {
                text,
                in_annotation: false,
            });
        }
    }
    blocks
}

/// Extract the opaque page key from an article-page href: the trailing path
/// segment, which consultant.ru emits as a long hash. Document-root links
/// (`.../cons_doc_LAW_NNNN/`) are not page keys.
pub fn page_key_from_href(href: &str) -> Option<String> {
    let key = href.trim_end_matches('/').rsplit('/').next()?;
    if key.len() > 10 && !key.starts_with("cons_doc") {
        Some(key.to_string())
    } else {
        None
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_annotation_parent(el: &ElementRef) -> bool {
    el.parent()
        .and_then(ElementRef::wrap)
        .map(|parent| {
            parent
                .value()
                .classes()
                .any(|c| ANNOTATION_CLASSES.contains(&c))
        })
        .unwrap_or(false)
}
