use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{element_text_spaced, select_within};
use crate::parsers::pick_library;

static FRAGMENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("em, span").expect("Invalid fragment selector"));

/// Library (branch) holding the copy, from the short em/span fragments.
pub fn extract_library(block: ElementRef<'_>) -> Option<String> {
    let fragments: Vec<String> = select_within(block, &FRAGMENT_SELECTOR)
        .into_iter()
        .map(element_text_spaced)
        .filter(|t| !t.is_empty())
        .collect();

    pick_library(&fragments)
}
