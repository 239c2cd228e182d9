/// One legal code: short id, display name, consultant.ru base URL.
///
/// Declaration order is the merge order of the combined corpus.
#[derive(Debug, Clone, Copy)]
pub struct Code {
    pub id: &'static str,
    pub name: &'static str,
    pub base_url: &'static str,
}

pub const CODES: &[Code] = &[
    Code {
        id: "gk1",
        name: "Гражданский кодекс РФ (часть 1)",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_5142/",
    },
    Code {
        id: "gk2",
        name: "Гражданский кодекс РФ (часть 2)",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_9027/",
    },
    Code {
        id: "gk3",
        name: "Гражданский кодекс РФ (часть 3)",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_34154/",
    },
    Code {
        id: "gk4",
        name: "Гражданский кодекс РФ (часть 4)",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_64629/",
    },
    Code {
        id: "uk",
        name: "Уголовный кодекс РФ",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_10699/",
    },
    Code {
        id: "tk",
        name: "Трудовой кодекс РФ",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_34683/",
    },
    Code {
        id: "nk1",
        name: "Налоговый кодекс РФ (часть 1)",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_19671/",
    },
    Code {
        id: "nk2",
        name: "Налоговый кодекс РФ (часть 2)",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_28165/",
    },
    Code {
        id: "sk",
        name: "Семейный кодекс РФ",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_8982/",
    },
    Code {
        id: "jk",
        name: "Жилищный кодекс РФ",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_51057/",
    },
    Code {
        id: "koap",
        name: "КоАП РФ",
        base_url: "https://www.consultant.ru/document/cons_doc_LAW_34661/",
    },
];

pub fn find(id: &str) -> Option<&'static Code> {
    CODES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in CODES {
            assert!(seen.insert(code.id), "duplicate code id: {}", code.id);
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("uk").map(|c| c.name), Some("Уголовный кодекс РФ"));
        assert!(find("zzz").is_none());
    }

    #[test]
    fn base_urls_end_with_slash() {
        for code in CODES {
            assert!(code.base_url.ends_with('/'), "{}", code.id);
        }
    }
}
