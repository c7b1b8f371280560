pub mod book;
pub mod outcome;

pub use book::*;
pub use outcome::*;

// Canonical loan-status phrases
pub const STATUS_AVAILABLE: &str = "대출가능";
pub const STATUS_ON_LOAN: &str = "대출중";
pub const STATUS_UNAVAILABLE: &str = "대출불가";

/// Every phrase that marks a tag or fragment as status-bearing.
pub const STATUS_KEYWORDS: &[&str] = &[
    "대출가능",
    "대출중",
    "대출 불가",
    "대출불가",
    "예약가능",
    "예약불가",
    "예약 중",
    "예약중",
    "반납예정일",
    "상호대차",
    "비치중",
];

/// Status phrases that sit next to the real loan status but describe
/// reservation or inter-library-loan services instead.
pub const EXCLUDED_STATUS_PHRASES: &[&str] = &["도서예약불가", "상호대차불가", "무인예약불가"];

/// Substrings that identify a fragment as a library (branch) name.
pub const LIBRARY_HINTS: &[&str] = &["도서관", "작은도서관", "분관", "자료관"];

/// Item-type prefixes that may precede a call number.
pub const CALL_NUMBER_PREFIXES: &[&str] = &["큰글자", "점자도서", "전자책", "일반도서"];

/// Markers in an image URL that denote a "no cover" placeholder.
pub const PLACEHOLDER_IMAGE_MARKERS: &[&str] = &["noimg", "no-image"];
