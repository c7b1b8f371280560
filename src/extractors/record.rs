use scraper::{ElementRef, Html};
use tracing::debug;

use super::{
    extract_author, extract_call_number, extract_cover_image, extract_library, extract_status,
    extract_title, BlockLocator,
};
use crate::models::BookRecord;

/// Build a record from one item block. Blocks without a title are noise.
pub fn assemble_record(block: ElementRef<'_>) -> Option<BookRecord> {
    let title = extract_title(block)?;
    let status = extract_status(block).unwrap_or_default();

    let record = BookRecord::new(title, extract_library(block), status)
        .with_author(extract_author(block))
        .with_call_number(extract_call_number(block))
        .with_cover_image(extract_cover_image(block));
    Some(record)
}

/// All records on one page, in document order.
pub fn extract_page(html: &str, locator: &BlockLocator) -> Vec<BookRecord> {
    let document = Html::parse_document(html);
    let blocks = locator.locate(&document);
    let block_count = blocks.len();

    let records: Vec<BookRecord> = blocks.into_iter().filter_map(assemble_record).collect();
    debug!(
        "{} of {} item blocks produced a record",
        records.len(),
        block_count
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::test_support::first;
    use pretty_assertions::assert_eq;

    #[test]
    fn assembles_every_field() {
        let doc = Html::parse_document(
            r#"<div class="item row">
                <img src="https://covers.example.org/sonyeon.jpg">
                <ul>
                    <li><h4>1. 소년이 온다</h4></li>
                    <li><span href="javascript:searchAuthor()">한강 지음</span></li>
                    <li><span>창비</span><span>813.7-한12ㅅ</span></li>
                </ul>
                <span>서초구립반포도서관</span>
                <span class="state">대출가능</span>
            </div>"#,
        );
        let record = assemble_record(first(&doc, "div.item")).unwrap();

        let expected = BookRecord::new("소년이 온다", Some("서초구립반포도서관".into()), "대출가능")
            .with_author(Some("한강".into()))
            .with_call_number(Some("813.7-한12ㅅ".into()))
            .with_cover_image(Some("https://covers.example.org/sonyeon.jpg".into()));
        assert_eq!(record, expected);
        assert!(record.available());
    }

    #[test]
    fn missing_status_is_empty_and_unavailable() {
        let doc = Html::parse_document(r#"<li><h3>채식주의자</h3></li>"#);
        let record = assemble_record(first(&doc, "li")).unwrap();
        assert_eq!(record.status_raw, "");
        assert!(!record.available());
        assert_eq!(record.library, None);
    }

    #[test]
    fn untitled_blocks_are_dropped() {
        let html = r#"<ul><li><a href="/next">다음</a></li><li><h3>채식주의자</h3></li></ul>"#;
        let records = extract_page(html, &BlockLocator::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "채식주의자");
    }
}
