/// Marker phrases for editorial/navigational clutter on consultant.ru pages.
/// Matched case-insensitively as substrings.
const SKIP_MARKERS: &[&str] = &[
    "консультантплюс",
    "подготовлен",
    "изменяющих документов",
    "путеводител",
    "судебная практика",
    "перспективы и риски",
    "примечание.",
    "(в ред.",
    "открыть полный текст",
    "готовые решения",
    "см. также",
    "позиции высших судов",
    "истец (заявитель)",
    "ответчик хочет",
    "истец хочет",
    "что нужно доказать",
    "какие обстоятельства",
    "рекомендации по составлению",
    "как составить",
];

/// Decide whether a line is excluded before it reaches the state machine.
///
/// Structural exclusion (edit/insert provenance) is absolute and checked
/// first; it drops the line even if it would match the header grammar.
pub fn is_excluded(text: &str, in_annotation: bool) -> bool {
    if in_annotation {
        return true;
    }
    let lower = text.to_lowercase();
    SKIP_MARKERS.iter().any(|marker| lower.contains(marker))
}
