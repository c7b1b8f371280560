use once_cell::sync::Lazy;
use regex::Regex;

use super::clean_text;

// Optional item-type prefix, 3-4 digit class number with optional decimals,
// a '.' or '-' separator, then a suffix that must contain Hangul.
// Dates and extents ("2023-10-15", "2024년", "216쪽") never match.
// e.g. "큰글자 848-칼292ㅅ", "813.6-김17ㅅ", "점자도서 808.9-사14사-56"
static CALL_NUMBER_DIRECT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:큰글자|점자도서|전자책|일반도서)\s*)?\b\d{3,4}(?:\.\d+)*[.\-][\d.\-]*[가-힣ㄱ-ㅎ][\d가-힣ㄱ-ㅎㅏ-ㅣ.\-]*",
    )
    .expect("Invalid call number regex")
});

// "청구기호 : 813.6-김17ㅅ" up to the next label or markup boundary
static CALL_NUMBER_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"청구기호\s*[:：]?\s*([^\n<>]+?)\s*(?:<|$|위치출력|등록번호|ISBN)")
        .expect("Invalid call number label regex")
});

/// Find a call number written without a label.
pub fn find_call_number(text: &str) -> Option<String> {
    CALL_NUMBER_DIRECT_REGEX
        .find(text)
        .map(|m| clean_text(m.as_str()))
        .filter(|s| !s.is_empty())
}

/// Find a call number introduced by the "청구기호" label.
pub fn find_labelled_call_number(text: &str) -> Option<String> {
    CALL_NUMBER_LABEL_REGEX
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| clean_text(m.as_str()))
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_pattern_matches_known_shapes() {
        assert_eq!(
            find_call_number("한길사 2020 큰글자 848-칼292ㅅ").as_deref(),
            Some("큰글자 848-칼292ㅅ")
        );
        assert_eq!(find_call_number("813.6-김17ㅅ").as_deref(), Some("813.6-김17ㅅ"));
        assert_eq!(
            find_call_number("점자도서 808.9-사14사-56").as_deref(),
            Some("점자도서 808.9-사14사-56")
        );
    }

    #[test]
    fn dates_and_bare_numbers_are_rejected() {
        assert_eq!(find_call_number("발행연도 2023-10-15"), None);
        assert_eq!(find_call_number("ISBN 9788937460012"), None);
        assert_eq!(find_call_number("813.6"), None);
    }

    #[test]
    fn years_and_page_counts_are_rejected() {
        assert_eq!(find_call_number("발행연도 2024년"), None);
        assert_eq!(find_call_number("창비, 2014. 216쪽"), None);
        assert_eq!(find_call_number("1024쪽 ; 23cm"), None);
        assert_eq!(
            find_call_number("창비, 2014. 216쪽 813.7-한12ㅅ").as_deref(),
            Some("813.7-한12ㅅ")
        );
    }

    #[test]
    fn labelled_call_number_stops_at_next_label() {
        assert_eq!(
            find_labelled_call_number("청구기호 : 863-생839ㅇ 위치출력 등록번호 EM0001").as_deref(),
            Some("863-생839ㅇ")
        );
        assert_eq!(
            find_labelled_call_number("청구기호：아 813.8-ㅂ123").as_deref(),
            Some("아 813.8-ㅂ123")
        );
        assert_eq!(find_labelled_call_number("등록번호 EM0001"), None);
    }
}
