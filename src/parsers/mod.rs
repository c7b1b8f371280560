pub mod author;
pub mod call_number;
pub mod library;
pub mod status;
pub mod title;

pub use author::*;
pub use call_number::*;
pub use library::*;
pub use status::*;
pub use title::*;

use once_cell::sync::Lazy;
use regex::Regex;

static HANGUL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[가-힣]").expect("Invalid hangul regex")
});

/// Collapse whitespace runs and trim.
///
/// Input is DOM text, so entities are already decoded and must stay literal.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the text contains at least one Hangul syllable.
pub fn has_korean(text: &str) -> bool {
    HANGUL_REGEX.is_match(text)
}

/// Length in characters, which is what every length bound here is measured in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
