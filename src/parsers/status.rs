use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    EXCLUDED_STATUS_PHRASES, STATUS_AVAILABLE, STATUS_KEYWORDS, STATUS_ON_LOAN,
    STATUS_UNAVAILABLE,
};

static BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]").expect("Invalid bracket regex")
});

/// Informational status fragments at or above this length are treated as noise.
pub const SECONDARY_STATUS_MAX_CHARS: usize = 30;

pub fn is_status_bearing(text: &str) -> bool {
    STATUS_KEYWORDS.iter().any(|kw| text.contains(kw))
}

pub fn is_excluded_status(text: &str) -> bool {
    EXCLUDED_STATUS_PHRASES.iter().any(|p| text.contains(p))
}

/// Status keywords present in `text`, in keyword-table order.
pub fn status_hits(text: &str) -> Vec<&'static str> {
    STATUS_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| text.contains(kw))
        .collect()
}

/// Map text to a canonical phrase; "available" beats "on loan" beats "unavailable".
pub fn canonical_phrase(text: &str) -> Option<&'static str> {
    if text.contains(STATUS_AVAILABLE) {
        Some(STATUS_AVAILABLE)
    } else if text.contains(STATUS_ON_LOAN) || text.contains("대출 중") {
        Some(STATUS_ON_LOAN)
    } else if text.contains(STATUS_UNAVAILABLE) || text.contains("대출 불가") {
        Some(STATUS_UNAVAILABLE)
    } else {
        None
    }
}

/// Canonical phrase carried by the first `[...]` qualifier, if any.
///
/// A reservation queue inside the bracket means the copy cannot be borrowed now.
pub fn bracket_status(text: &str) -> Option<&'static str> {
    let content = BRACKET_REGEX.captures(text)?.get(1)?.as_str();
    canonical_phrase(content).or_else(|| {
        if content.contains("예약중") {
            Some(STATUS_UNAVAILABLE)
        } else {
            None
        }
    })
}

/// Bracket content overrides the surrounding label.
pub fn canonicalize_status(text: &str) -> Option<&'static str> {
    bracket_status(text).or_else(|| canonical_phrase(text))
}

/// Best canonical phrase across several texts, by the same precedence as
/// [`canonical_phrase`].
pub fn strongest_status<'a, I>(texts: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .filter_map(canonical_phrase)
        .min_by_key(|phrase| status_rank(phrase))
}

fn status_rank(phrase: &str) -> u8 {
    match phrase {
        p if p == STATUS_AVAILABLE => 0,
        p if p == STATUS_ON_LOAN => 1,
        _ => 2,
    }
}

/// Low-confidence status: the text before any parenthesis or bracket.
pub fn secondary_status(text: &str) -> Option<String> {
    if super::char_len(text) >= SECONDARY_STATUS_MAX_CHARS {
        return None;
    }
    let head = text
        .split('(')
        .next()
        .unwrap_or_default()
        .split('[')
        .next()
        .unwrap_or_default()
        .trim();
    if head.is_empty() {
        None
    } else {
        Some(head.to_string())
    }
}

/// Last-resort scan over a whole block's text.
///
/// Misleading phrases are removed before scanning. If nothing survives, the
/// first raw keyword hit is returned as-is.
pub fn fallback_status(text: &str) -> Option<String> {
    let raw_hits = status_hits(text);
    let first_hit = raw_hits.first()?;

    let mut scrubbed = text.to_string();
    for phrase in EXCLUDED_STATUS_PHRASES {
        scrubbed = scrubbed.replace(phrase, " ");
    }

    if scrubbed.contains(STATUS_AVAILABLE) {
        return Some(STATUS_AVAILABLE.to_string());
    }
    for kw in [STATUS_ON_LOAN, "대출 불가", STATUS_UNAVAILABLE, "비치중"] {
        if scrubbed.contains(kw) {
            return Some(kw.to_string());
        }
    }
    Some(
        status_hits(&scrubbed)
            .first()
            .unwrap_or(first_hit)
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_overrides_outer_label() {
        assert_eq!(canonicalize_status("대출불가[대출중]"), Some(STATUS_ON_LOAN));
        assert_eq!(canonicalize_status("대출중[대출가능]"), Some(STATUS_AVAILABLE));
        assert_eq!(canonicalize_status("대출가능[예약중]"), Some(STATUS_UNAVAILABLE));
    }

    #[test]
    fn unmatched_bracket_falls_back_to_outer_text() {
        assert_eq!(canonicalize_status("대출가능[비치중]"), Some(STATUS_AVAILABLE));
        assert_eq!(canonicalize_status("대출 중 (반납예정일 2025-11-01)"), Some(STATUS_ON_LOAN));
        assert_eq!(canonicalize_status("상호대차불가"), None);
    }

    #[test]
    fn strongest_status_prefers_available() {
        assert_eq!(
            strongest_status(["대출불가", "대출중", "대출가능(비치자료)"]),
            Some(STATUS_AVAILABLE)
        );
        assert_eq!(strongest_status(["대출불가", "대출 중"]), Some(STATUS_ON_LOAN));
        assert_eq!(strongest_status(["저자", "도서관"]), None);
    }

    #[test]
    fn secondary_status_trims_qualifiers() {
        assert_eq!(secondary_status("예약가능(1명 대기)").as_deref(), Some("예약가능"));
        assert_eq!(secondary_status("비치중[2층]").as_deref(), Some("비치중"));
        assert!(secondary_status(&"반납예정일".repeat(6)).is_none());
    }

    #[test]
    fn fallback_ignores_misleading_phrases() {
        assert_eq!(
            fallback_status("상호대차불가 대출중").as_deref(),
            Some(STATUS_ON_LOAN)
        );
        // Only an excluded phrase: surfaces the raw keyword, never "unavailable"
        assert_eq!(fallback_status("상호대차불가").as_deref(), Some("상호대차"));
        assert_eq!(fallback_status("도서예약불가").as_deref(), Some("예약불가"));
        assert_eq!(fallback_status("아무 상태 없음"), None);
    }
}
