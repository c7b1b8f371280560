//! DOM-level extraction over one parsed result page.
//!
//! Each field extractor is an ordered list of independent strategies over an
//! item block; the first strategy that yields a value wins.

pub mod author;
pub mod blocks;
pub mod call_number;
pub mod cover;
pub mod library;
pub mod record;
pub mod status;
pub mod title;

pub use author::extract_author;
pub use blocks::{BlockLocator, BlockTier, DEFAULT_TIERS};
pub use call_number::extract_call_number;
pub use cover::extract_cover_image;
pub use library::extract_library;
pub use record::{assemble_record, extract_page};
pub use status::extract_status;
pub use title::extract_title;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::parsers::clean_text;

static LIST_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ul").expect("Invalid list selector"));

/// One ranked way of pulling a value out of an input.
pub type Strategy<I, T> = fn(&I) -> Option<T>;

/// Run strategies in order and return the first value produced.
pub fn first_success<I, T>(input: &I, strategies: &[Strategy<I, T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(input))
}

/// Descendants of `scope` matching `selector`, never `scope` itself.
pub fn select_within<'a>(scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    scope
        .select(selector)
        .filter(|el| el.id() != scope.id())
        .collect()
}

/// Enclosing element, if the block is not directly under the document root.
pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Text nodes concatenated as-is, then normalized.
pub fn element_text(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

/// Text nodes joined with spaces, then normalized.
pub fn element_text_spaced(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<Vec<_>>().join(" "))
}

pub fn has_class_containing(el: ElementRef<'_>, needle: &str) -> bool {
    el.value()
        .classes()
        .any(|class| class.to_lowercase().contains(needle))
}

/// Direct `li` children of every `ul` in the block, skipping button bars.
///
/// Some templates lay an entry out as title / author / publication details in
/// consecutive list items.
pub fn descriptor_lists(block: ElementRef<'_>) -> Vec<Vec<ElementRef<'_>>> {
    select_within(block, &LIST_SELECTOR)
        .into_iter()
        .filter(|ul| !has_class_containing(*ul, "btns"))
        .map(|ul| {
            ul.children()
                .filter_map(ElementRef::wrap)
                .filter(|child| child.value().name() == "li")
                .collect()
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::first;
    use super::*;
    use scraper::Html;

    #[test]
    fn select_within_excludes_scope() {
        let doc = Html::parse_document(r#"<div class="x"><div class="x">안</div></div>"#);
        let outer = first(&doc, "div.x");
        let selector = Selector::parse("div.x").unwrap();
        assert_eq!(select_within(outer, &selector).len(), 1);
    }

    #[test]
    fn first_success_stops_at_first_value() {
        fn none(_: &u8) -> Option<&'static str> {
            None
        }
        fn a(_: &u8) -> Option<&'static str> {
            Some("a")
        }
        fn b(_: &u8) -> Option<&'static str> {
            Some("b")
        }
        let strategies: [Strategy<u8, &'static str>; 3] = [none, a, b];
        assert_eq!(first_success(&0, &strategies), Some("a"));
    }

    #[test]
    fn text_helpers_differ_on_separator() {
        let doc = Html::parse_document("<p><b>대출</b><i>가능</i></p>");
        let p = first(&doc, "p");
        assert_eq!(element_text(p), "대출가능");
        assert_eq!(element_text_spaced(p), "대출 가능");
    }
}
