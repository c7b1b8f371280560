use once_cell::sync::Lazy;
use regex::Regex;

use super::{char_len, has_korean};

// "12. 제목", "도서 3. 제목", "도서 제목"
static ORDINAL_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\s*").expect("Invalid ordinal prefix regex")
});
static ITEM_TYPE_ORDINAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^도서\s*\d*\.\s*").expect("Invalid item type regex")
});
static ITEM_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^도서\s+").expect("Invalid item type regex")
});

pub fn strip_title_prefix(text: &str) -> String {
    let text = ORDINAL_PREFIX_REGEX.replace(text, "");
    let text = ITEM_TYPE_ORDINAL_REGEX.replace(&text, "");
    ITEM_TYPE_REGEX.replace(&text, "").into_owned()
}

/// Longest candidate containing Hangul; later candidates win ties.
pub fn pick_title<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .filter(|t| has_korean(t))
        .enumerate()
        .max_by_key(|(idx, t)| (char_len(t), *idx))
        .map(|(_, t)| t)
}
