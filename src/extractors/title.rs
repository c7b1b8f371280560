use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{element_text_spaced, first_success, select_within, Strategy};
use crate::parsers::{clean_text, pick_title, strip_title_prefix};

const TITLE_SELECTORS: &[&str] = &[
    ".tit",
    ".custom-tit",
    ".title",
    ".book_name .title",
    "dt.tit",
    ".bookDataWrap .tit",
    "h3",
    "h4",
    ".data .tit",
];

static TITLE_SELECTOR_LIST: Lazy<Vec<Selector>> = Lazy::new(|| {
    TITLE_SELECTORS
        .iter()
        .map(|css| Selector::parse(css).expect("Invalid title selector"))
        .collect()
});

static IMG_ALT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[alt]").expect("Invalid img selector"));

/// Title of the entry: the longest Hangul-bearing candidate.
pub fn extract_title(block: ElementRef<'_>) -> Option<String> {
    let strategies: [Strategy<ElementRef<'_>, Vec<String>>; 2] =
        [structural_candidates as _, image_alt_candidates as _];
    pick_title(first_success(&block, &strategies)?)
}

/// First hit of each title selector, with list numbering removed.
fn structural_candidates(block: &ElementRef<'_>) -> Option<Vec<String>> {
    let candidates: Vec<String> = TITLE_SELECTOR_LIST
        .iter()
        .filter_map(|selector| select_within(*block, selector).into_iter().next())
        .map(element_text_spaced)
        .filter(|t| !t.is_empty())
        .map(|t| strip_title_prefix(&t))
        .collect();

    non_empty(candidates)
}

fn image_alt_candidates(block: &ElementRef<'_>) -> Option<Vec<String>> {
    let candidates: Vec<String> = select_within(*block, &IMG_ALT_SELECTOR)
        .into_iter()
        .next()
        .and_then(|img| img.value().attr("alt"))
        .map(clean_text)
        .filter(|t| !t.is_empty())
        .into_iter()
        .collect();

    non_empty(candidates)
}

fn non_empty(candidates: Vec<String>) -> Option<Vec<String>> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::test_support::first;
    use scraper::Html;

    #[test]
    fn prefers_longest_candidate_across_selectors() {
        let doc = Html::parse_document(
            r#"<div class="item"><span class="tit">제목</span><h3>전체 제목입니다</h3></div>"#,
        );
        assert_eq!(
            extract_title(first(&doc, "div.item")).as_deref(),
            Some("전체 제목입니다")
        );
    }

    #[test]
    fn escaped_markup_in_title_stays_literal() {
        let doc = Html::parse_document(
            r#"<div class="item"><span class="tit">수학 &amp;lt;입문&amp;gt;</span></div>"#,
        );
        assert_eq!(
            extract_title(first(&doc, "div.item")).as_deref(),
            Some("수학 &lt;입문&gt;")
        );
    }

    #[test]
    fn strips_numbering_and_item_type() {
        let doc = Html::parse_document(
            r#"<li><p class="tit"><span>도서</span> 3. 채식주의자</p></li>"#,
        );
        assert_eq!(extract_title(first(&doc, "li")).as_deref(), Some("채식주의자"));
    }

    #[test]
    fn falls_back_to_image_alt() {
        let doc = Html::parse_document(
            r#"<li><img src="x.jpg" alt=" 작별하지 않는다 "><span>한강</span></li>"#,
        );
        assert_eq!(
            extract_title(first(&doc, "li")).as_deref(),
            Some("작별하지 않는다")
        );
    }

    #[test]
    fn structural_hit_without_hangul_yields_nothing() {
        let doc = Html::parse_document(
            r#"<li><span class="tit">Menu</span><img src="x.jpg" alt="메뉴 이미지"></li>"#,
        );
        assert_eq!(extract_title(first(&doc, "li")), None);
    }
}
