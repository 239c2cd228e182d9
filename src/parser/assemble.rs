use std::collections::HashSet;

use crate::store::ArticleRecord;

use super::chapters::ChapterIndex;

/// Assemble one code's group from per-page record batches in page
/// enumeration order: dedup first-wins on `(code_id, article_num)`, fill
/// `chapter` from the index, then sort by article number (fail-soft).
pub fn assemble_code(
    pages: Vec<(String, Vec<ArticleRecord>)>,
    index: &ChapterIndex,
) -> Vec<ArticleRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut records = Vec::new();

    for (page_key, batch) in pages {
        let chapter = index.lookup(&page_key).to_string();
        for mut record in batch {
            let key = (record.code_id.clone(), record.article_num.clone());
            if !seen.insert(key) {
                continue;
            }
            record.chapter = chapter.clone();
            records.push(record);
        }
    }

    sort_by_article_num(&mut records);
    records
}

/// Concatenate per-code groups in declared code order. No further dedup or
/// sort: the composite key already includes `code_id`.
pub fn merge_codes(groups: Vec<Vec<ArticleRecord>>) -> Vec<ArticleRecord> {
    groups.into_iter().flatten().collect()
}

/// Sort ascending by the numeric tuple of the dotted article number. If any
/// number in the group is malformed the whole group keeps encounter order
/// rather than failing (a single bad number must not block the corpus).
fn sort_by_article_num(records: &mut Vec<ArticleRecord>) {
    let keys: Option<Vec<Vec<u64>>> = records
        .iter()
        .map(|r| numeric_key(&r.article_num))
        .collect();

    if let Some(keys) = keys {
        let mut pairs: Vec<_> = keys.into_iter().zip(std::mem::take(records)).collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        *records = pairs.into_iter().map(|(_, record)| record).collect();
    }
}

fn numeric_key(article_num: &str) -> Option<Vec<u64>> {
    article_num.split('.').map(|part| part.parse().ok()).collect()
}
