use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{
    element_text, element_text_spaced, first_success, parent_element, select_within, Strategy,
};
use crate::parsers::{
    bracket_status, canonicalize_status, fallback_status, is_excluded_status, is_status_bearing,
    secondary_status, strongest_status,
};

/// Classes some templates put on the status tag, most trusted first.
const STATUS_CLASSES: &[&str] = &["emp3", "emp2", "emp1", "status", "state"];

static STATUS_CLASS_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    STATUS_CLASSES
        .iter()
        .map(|class| {
            let css = format!("b.{class}, span.{class}, em.{class}");
            Selector::parse(&css).expect("Invalid status class selector")
        })
        .collect()
});

static BOLD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("b, strong").expect("Invalid bold selector"));

static EMPHASIS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("em, span").expect("Invalid emphasis selector"));

/// Region searched for status markup around one item block.
///
/// Some templates put the status tag next to the entry rather than inside
/// it, so every rule also looks at the immediate parent, always after the
/// block's own markup.
pub struct StatusScope<'a> {
    pub block: ElementRef<'a>,
    pub parent: Option<ElementRef<'a>>,
}

impl<'a> StatusScope<'a> {
    pub fn new(block: ElementRef<'a>) -> Self {
        Self {
            block,
            parent: parent_element(block),
        }
    }

    /// Block first, then its parent.
    fn areas(&self) -> impl Iterator<Item = ElementRef<'a>> {
        std::iter::once(self.block).chain(self.parent)
    }

    /// Text of the widest area, used to gate the whole resolution.
    fn text(&self) -> String {
        element_text_spaced(self.parent.unwrap_or(self.block))
    }
}

/// Raw loan-status phrase for an item block.
pub fn extract_status(block: ElementRef<'_>) -> Option<String> {
    let ctx = StatusScope::new(block);
    if !is_status_bearing(&ctx.text()) {
        return None;
    }

    let strategies: [Strategy<StatusScope<'_>, String>; 5] = [
        by_status_class as _,
        by_bold_bracket as _,
        by_bold_text as _,
        by_emphasis as _,
        by_full_text as _,
    ];
    first_success(&ctx, &strategies)
}

/// Tags styled as status, skipping reservation / inter-library-loan notes.
fn by_status_class(ctx: &StatusScope<'_>) -> Option<String> {
    ctx.areas().find_map(|area| {
        STATUS_CLASS_SELECTORS.iter().find_map(|selector| {
            select_within(area, selector)
                .into_iter()
                .map(element_text)
                .filter(|t| !t.is_empty() && is_status_bearing(t) && !is_excluded_status(t))
                .map(|t| {
                    canonicalize_status(&t)
                        .map(str::to_string)
                        .unwrap_or(t)
                })
                .next()
        })
    })
}

/// `<b>대출불가[대출중]</b>`: the bracket corrects the outer label.
fn by_bold_bracket(ctx: &StatusScope<'_>) -> Option<String> {
    ctx.areas().find_map(|area| {
        select_within(area, &BOLD_SELECTOR)
            .into_iter()
            .map(element_text)
            .find_map(|t| bracket_status(&t))
            .map(str::to_string)
    })
}

/// `<b>대출가능(비치자료)</b>`
fn by_bold_text(ctx: &StatusScope<'_>) -> Option<String> {
    ctx.areas().find_map(|area| {
        let texts: Vec<String> = select_within(area, &BOLD_SELECTOR)
            .into_iter()
            .map(element_text)
            .collect();
        strongest_status(texts.iter().map(String::as_str)).map(str::to_string)
    })
}

/// Emphasis and span tags: a primary status if any, else a short
/// informational fragment.
fn by_emphasis(ctx: &StatusScope<'_>) -> Option<String> {
    let per_area: Vec<Vec<String>> = ctx
        .areas()
        .map(|area| {
            select_within(area, &EMPHASIS_SELECTOR)
                .into_iter()
                .map(element_text)
                .filter(|t| !t.is_empty() && is_status_bearing(t) && !is_excluded_status(t))
                .collect()
        })
        .collect();

    per_area
        .iter()
        .find_map(|texts| strongest_status(texts.iter().map(String::as_str)))
        .map(str::to_string)
        .or_else(|| per_area.iter().flatten().find_map(|t| secondary_status(t)))
}

fn by_full_text(ctx: &StatusScope<'_>) -> Option<String> {
    ctx.areas()
        .find_map(|area| fallback_status(&element_text_spaced(area)))
}
