use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{
    descriptor_lists, element_text, element_text_spaced, first_success, has_class_containing,
    select_within, Strategy,
};
use crate::parsers::{find_call_number, find_labelled_call_number};

static DIV_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div").expect("Invalid div selector"));
static SPAN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("Invalid span selector"));

/// Shelf call number of the copy.
pub fn extract_call_number(block: ElementRef<'_>) -> Option<String> {
    let strategies: [Strategy<ElementRef<'_>, String>; 4] = [
        by_info_panel as _,
        by_descriptor_list as _,
        by_label as _,
        by_pattern as _,
    ];
    first_success(&block, &strategies)
}

fn find_in_spans(scope: ElementRef<'_>) -> Option<String> {
    select_within(scope, &SPAN_SELECTOR)
        .into_iter()
        .find_map(|span| find_call_number(&element_text(span)))
}

/// `<div class="book_info info02"><span>813.6-김17ㅅ</span></div>`
fn by_info_panel(block: &ElementRef<'_>) -> Option<String> {
    select_within(*block, &DIV_SELECTOR)
        .into_iter()
        .filter(|div| has_class_containing(*div, "info02"))
        .find_map(find_in_spans)
}

/// Third `li` of a descriptor list: publisher / year / call number.
fn by_descriptor_list(block: &ElementRef<'_>) -> Option<String> {
    descriptor_lists(*block)
        .into_iter()
        .filter_map(|items| items.get(2).copied())
        .find_map(find_in_spans)
}

/// "청구기호 : 813.6-김17ㅅ"
fn by_label(block: &ElementRef<'_>) -> Option<String> {
    find_labelled_call_number(&element_text_spaced(*block))
}

fn by_pattern(block: &ElementRef<'_>) -> Option<String> {
    find_call_number(&element_text_spaced(*block))
}
