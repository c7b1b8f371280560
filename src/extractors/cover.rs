use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use url::Url;

use super::{parent_element, select_within};
use crate::models::PLACEHOLDER_IMAGE_MARKERS;

static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[src]").expect("Invalid img selector"));

/// Cover image URL from the block, or from its parent when the block has none.
///
/// Only absolute http(s) URLs are returned; relative paths need the site's
/// base URL, which is not known here.
pub fn extract_cover_image(block: ElementRef<'_>) -> Option<String> {
    std::iter::once(block)
        .chain(parent_element(block))
        .flat_map(|area| select_within(area, &IMG_SELECTOR))
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .find(|src| is_cover_url(src))
        .map(str::to_string)
}

fn is_cover_url(src: &str) -> bool {
    let absolute = Url::parse(src)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    let lower = src.to_lowercase();
    absolute && !PLACEHOLDER_IMAGE_MARKERS.iter().any(|m| lower.contains(m))
}
