use once_cell::sync::Lazy;
use regex::Regex;

use super::{char_len, is_status_bearing};
use crate::models::LIBRARY_HINTS;

pub const LIBRARY_MAX_CHARS: usize = 50;

static LIBRARY_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:작은도서관|도서관)\s*[:：]\s*").expect("Invalid library label regex")
});

/// Pick the library name among text fragments.
///
/// Keeps fragments that name a library, drops those that also carry a status
/// keyword or are long enough to be several fields run together, then takes
/// the longest. Ties go to the later fragment.
pub fn pick_library<S: AsRef<str>>(candidates: &[S]) -> Option<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| LIBRARY_HINTS.iter().any(|h| c.contains(h)))
        .filter(|c| !is_status_bearing(c))
        .filter(|c| char_len(c) <= LIBRARY_MAX_CHARS)
        .enumerate()
        .max_by_key(|(idx, c)| (char_len(c), *idx))
        .map(|(_, c)| strip_library_label(c))
}

/// "도서관: 글빛도서관" -> "글빛도서관"
pub fn strip_library_label(text: &str) -> String {
    LIBRARY_LABEL_REGEX.replace(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_library_wins() {
        let parts = ["반포도서관", "서초구립반포도서관", "문학동네"];
        assert_eq!(pick_library(&parts).as_deref(), Some("서초구립반포도서관"));
    }

    #[test]
    fn ties_prefer_later_fragment() {
        let parts = ["가나도서관", "다라도서관"];
        assert_eq!(pick_library(&parts).as_deref(), Some("다라도서관"));
    }

    #[test]
    fn status_and_overlong_fragments_are_dropped() {
        let long = format!("{}도서관", "가".repeat(48));
        let parts = vec![
            "대출가능 양재도서관".to_string(),
            long,
            "내곡도서관".to_string(),
        ];
        assert_eq!(pick_library(&parts).as_deref(), Some("내곡도서관"));
        assert_eq!(pick_library(&["대출중"]), None);
    }

    #[test]
    fn label_prefix_is_removed() {
        assert_eq!(strip_library_label("도서관: 글빛도서관"), "글빛도서관");
        assert_eq!(strip_library_label("작은도서관 ： 새싹작은도서관"), "새싹작은도서관");
        assert_eq!(strip_library_label("논현도서관"), "논현도서관");
    }
}
