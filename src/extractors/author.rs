use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{
    descriptor_lists, element_text, element_text_spaced, first_success, has_class_containing,
    select_within, Strategy,
};
use crate::parsers::{find_labelled_author, validate_unlabelled_author, AuthorContext};

static DIV_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div").expect("Invalid div selector"));
static AUTHOR_CONTAINER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("dd, div").expect("Invalid author container selector"));
static SPAN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("Invalid span selector"));
static SCRIPT_SPAN_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"span[href*="javascript"]"#).expect("Invalid script span selector")
});

/// Author of the entry.
pub fn extract_author(block: ElementRef<'_>) -> Option<String> {
    let strategies: [Strategy<ElementRef<'_>, String>; 4] = [
        by_info_panel as _,
        by_descriptor_list as _,
        by_author_class_label as _,
        by_block_label as _,
    ];
    first_success(&block, &strategies)
}

/// `<div class="book_info info01">한강 지음</div>`
fn by_info_panel(block: &ElementRef<'_>) -> Option<String> {
    select_within(*block, &DIV_SELECTOR)
        .into_iter()
        .filter(|div| has_class_containing(*div, "info01"))
        .find_map(|div| validate_unlabelled_author(&element_text(div), AuthorContext::InfoPanel))
}

/// Second `li` of a descriptor list, inside a script-link span.
fn by_descriptor_list(block: &ElementRef<'_>) -> Option<String> {
    descriptor_lists(*block)
        .into_iter()
        .filter_map(|items| items.get(1).copied())
        .filter_map(|item| select_within(item, &SCRIPT_SPAN_SELECTOR).into_iter().next())
        .find_map(|span| {
            validate_unlabelled_author(&element_text(span), AuthorContext::DescriptorList)
        })
}

/// `<dd class="author"><span>저자 : 김영하</span></dd>`
fn by_author_class_label(block: &ElementRef<'_>) -> Option<String> {
    select_within(*block, &AUTHOR_CONTAINER_SELECTOR)
        .into_iter()
        .filter(|tag| has_class_containing(*tag, "author"))
        .flat_map(|tag| select_within(tag, &SPAN_SELECTOR))
        .find_map(|span| find_labelled_author(&element_text(span), false))
}

fn by_block_label(block: &ElementRef<'_>) -> Option<String> {
    find_labelled_author(&element_text_spaced(*block), true)
}
