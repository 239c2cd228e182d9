pub mod assemble;
pub mod chapters;
pub mod grammar;
pub mod noise;
pub mod segment;

use rayon::prelude::*;

use crate::codes::Code;
use crate::html;
use crate::store::{ArticleRecord, RawPage};
use chapters::{ChapterCache, ChapterIndex};

/// Pipeline for one code: segment every article page in parallel, then
/// assemble the group deterministically (dedup, chapter enrichment, sort).
pub fn parse_code(
    code: &Code,
    toc_html: Option<&str>,
    pages: &[RawPage],
    cache: &ChapterCache,
) -> Vec<ArticleRecord> {
    let index = cache.get_or_build(code.id, || match toc_html {
        Some(toc) => ChapterIndex::build(&html::materialize_toc(toc)),
        None => ChapterIndex::default(),
    });

    // Order-preserving collect keeps page enumeration order regardless of
    // which worker finishes first.
    let segmented: Vec<(String, Vec<ArticleRecord>)> = pages
        .par_iter()
        .map(|page| {
            let blocks = html::materialize_article(&page.html);
            let records = segment::segment_page(code, &page.key, &blocks);
            (page.key.clone(), records)
        })
        .collect();

    assemble::assemble_code(segmented, &index)
}

/// Collapse runs of whitespace to single spaces and turn non-breaking
/// spaces into ordinary ones.
pub(crate) fn clean_text(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
