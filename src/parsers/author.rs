use once_cell::sync::Lazy;
use regex::Regex;

use super::{char_len, clean_text, has_korean};

pub const AUTHOR_MIN_CHARS: usize = 2;
pub const AUTHOR_MAX_CHARS: usize = 50;

// "저자 : 김영하", "지은이: ...", "글 : ..."
static AUTHOR_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:저자|지은이|글쓴이|작가|글)\s*[:：]\s*(.+)").expect("Invalid author label regex")
});

// Trailing role descriptors: "글·그림", "지음", "저" ...
static AUTHOR_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*(?:글·그림|그림|글쓴이|지음|저|著)\s*$").expect("Invalid author suffix regex")
});

// Where the author value ends inside a run of labelled metadata
static METADATA_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+(?:발행자|발행연도|출판사|ISBN|등록번호|청구기호)")
        .expect("Invalid metadata label regex")
});

static INFO_PANEL_METADATA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d|ISBN|청구기호|발행|출판)").expect("Invalid metadata regex")
});

static DESCRIPTOR_LIST_METADATA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d|ISBN|청구기호|대출|도서관)").expect("Invalid metadata regex")
});

/// Which leading words disqualify an unlabelled author candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorContext {
    /// Dedicated author panel (e.g. `div.info01`).
    InfoPanel,
    /// Second entry of a descriptor list.
    DescriptorList,
}

/// Strip role descriptors and re-check the script.
pub fn clean_author(text: &str) -> Option<String> {
    let stripped = AUTHOR_SUFFIX_REGEX.replace(text, "");
    let author = clean_text(&stripped);
    if !author.is_empty() && has_korean(&author) {
        Some(author)
    } else {
        None
    }
}

/// Validate text that should hold nothing but the author name.
pub fn validate_unlabelled_author(text: &str, context: AuthorContext) -> Option<String> {
    let text = clean_text(text);
    let len = char_len(&text);
    if !(AUTHOR_MIN_CHARS..=AUTHOR_MAX_CHARS).contains(&len) || !has_korean(&text) {
        return None;
    }
    let metadata = match context {
        AuthorContext::InfoPanel => &*INFO_PANEL_METADATA_REGEX,
        AuthorContext::DescriptorList => &*DESCRIPTOR_LIST_METADATA_REGEX,
    };
    if metadata.is_match(&text) {
        return None;
    }
    clean_author(&text)
}

/// Author following an explicit label such as "저자 :".
///
/// When `truncate` is set the value is cut at the next metadata label, for
/// text that runs on into publisher, ISBN and so on.
pub fn find_labelled_author(text: &str, truncate: bool) -> Option<String> {
    let caps = AUTHOR_LABEL_REGEX.captures(text)?;
    let mut value = clean_text(caps.get(1)?.as_str());
    if truncate {
        value = METADATA_LABEL_REGEX
            .split(&value)
            .next()
            .unwrap_or_default()
            .to_string();
    }
    let author = clean_author(&value)?;
    if char_len(&author) <= AUTHOR_MAX_CHARS {
        Some(author)
    } else {
        None
    }
}
