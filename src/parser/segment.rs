use crate::codes::Code;
use crate::html::Block;
use crate::store::ArticleRecord;

use super::{clean_text, grammar, noise};

/// Candidates with a normalized body at or below this many chars are noise
/// (stub and reference-only pages) and are discarded silently.
const MIN_BODY_CHARS: usize = 20;

/// Lines shorter than this after normalization carry no signal.
const MIN_LINE_CHARS: usize = 3;

/// One article being accumulated while the machine is between headers.
struct Candidate {
    num: String,
    title: String,
    parts: Vec<String>,
}

enum State {
    Idle,
    Accumulating(Candidate),
}

/// Segment one article page's block stream into zero or more records.
///
/// A header line flushes the current candidate and starts the next one; body
/// lines append while accumulating and are ignored while idle (pages carry
/// leading boilerplate before the first header). End of stream flushes.
/// Chapter enrichment happens later, in assembly.
pub fn segment_page(code: &Code, page_key: &str, blocks: &[Block]) -> Vec<ArticleRecord> {
    let mut records = Vec::new();
    let mut state = State::Idle;

    for block in blocks {
        let (text, in_annotation) = match block {
            Block::Text {
                text,
                in_annotation,
            } => (text.as_str(), *in_annotation),
            Block::Link { .. } => continue,
        };

        let line = clean_text(text);
        if line.chars().count() < MIN_LINE_CHARS {
            continue;
        }
        if noise::is_excluded(&line, in_annotation) {
            continue;
        }

        if let Some(header) = grammar::match_article_header(&line) {
            flush(code, page_key, &mut state, &mut records);
            state = State::Accumulating(Candidate {
                num: header.num,
                title: header.title,
                parts: Vec::new(),
            });
            continue;
        }

        if let State::Accumulating(candidate) = &mut state {
            candidate.parts.push(line);
        }
    }

    flush(code, page_key, &mut state, &mut records);
    records
}

fn flush(code: &Code, page_key: &str, state: &mut State, records: &mut Vec<ArticleRecord>) {
    let candidate = match std::mem::replace(state, State::Idle) {
        State::Accumulating(candidate) => candidate,
        State::Idle => return,
    };

    let text = clean_text(&candidate.parts.join(" "));
    if text.chars().count() <= MIN_BODY_CHARS {
        return;
    }

    records.push(ArticleRecord {
        code_id: code.id.to_string(),
        code_name: code.name.to_string(),
        chapter: String::new(),
        article_num: candidate.num,
        article_title: candidate.title,
        text,
        source_ref: format!("{}{}/", code.base_url, page_key),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    fn text(s: &str) -> Block {
        Block::Text {
            text: s.to_string(),
            in_annotation: false,
        }
    }

    fn annotated(s: &str) -> Block {
        Block::Text {
            text: s.to_string(),
            in_annotation: true,
        }
    }

    fn segment(blocks: &[Block]) -> Vec<ArticleRecord> {
        segment_page(codes::find("gk1").unwrap(), "abcdef0123456789", blocks)
    }

    #[test]
    fn two_articles_on_one_page() {
        let records = segment(&[
            text("Статья 5. Foo"),
            text("Body one, long enough to pass the gate."),
            text("Статья 6. Bar"),
            text("Body two, also long enough to pass."),
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].article_num, "5");
        assert_eq!(records[0].article_title, "Foo");
        assert_eq!(records[0].text, "Body one, long enough to pass the gate.");
        assert_eq!(records[1].article_num, "6");
        assert_eq!(records[1].article_title, "Bar");
    }

    #[test]
    fn short_body_is_discarded() {
        let records = segment(&[
            text("intro noise before any header"),
            text("Статья 7. Baz"),
            text("кратко"),
        ]);
        assert!(records.is_empty());
    }

    #[test]
    fn leading_boilerplate_is_ignored() {
        let records = segment(&[
            text("Документ предоставлен бесплатно"),
            text("Статья 1. Основные начала"),
            text("Гражданское законодательство основывается на признании равенства."),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].article_num, "1");
    }

    #[test]
    fn annotation_header_never_starts_an_article() {
        let records = segment(&[
            text("Статья 3. Настоящая"),
            text("Основной текст статьи, достаточно длинный для выпуска."),
            annotated("Статья 4. Вставка из примечания"),
            annotated("Текст примечания, который не должен попасть в корпус."),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].article_num, "3");
        assert!(!records[0].text.contains("примечания"));
    }

    #[test]
    fn noise_lines_do_not_extend_body() {
        let records = segment(&[
            text("Статья 9. Тест"),
            text("Первая часть текста статьи для проверки фильтра."),
            text("См. также: Путеводитель по судебной практике"),
            text("Вторая часть текста статьи."),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].text,
            "Первая часть текста статьи для проверки фильтра. Вторая часть текста статьи."
        );
    }

    #[test]
    fn whitespace_and_nbsp_normalized() {
        let records = segment(&[
            text("Статья 12. Нормализация"),
            text("Текст\u{a0}с   неразрывными\n пробелами и переносами строк."),
        ]);
        assert_eq!(
            records[0].text,
            "Текст с неразрывными пробелами и переносами строк."
        );
    }

    #[test]
    fn header_without_body_emits_nothing() {
        let records = segment(&[text("Статья 15. Заголовок без текста")]);
        assert!(records.is_empty());
    }

    #[test]
    fn empty_page_is_fine() {
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn source_ref_is_base_url_plus_page_key() {
        let records = segment(&[
            text("Статья 2. Ссылка"),
            text("Достаточно длинный текст статьи для проверки ссылки."),
        ]);
        assert_eq!(
            records[0].source_ref,
            "https://www.consultant.ru/document/cons_doc_LAW_5142/abcdef0123456789/"
        );
    }

    #[test]
    fn exactly_21_chars_passes_the_gate() {
        // The invariant is strictly greater than 20 chars.
        let body20 = "а".repeat(20);
        let body21 = "б".repeat(21);
        assert!(segment(&[text("Статья 8. Граница"), text(&body20)]).is_empty());
        let records = segment(&[text("Статья 8. Граница"), text(&body21)]);
        assert_eq!(records.len(), 1);
    }
}
