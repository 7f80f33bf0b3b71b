use std::path::Path;

use lopdf::Document;
use tracing::{debug, info};

use crate::error::ExtractError;

/// Page separator in plain-text exports (what `pdftotext` emits).
const PAGE_BREAK: char = '\x0c';

/// Read the source document as an ordered list of page texts.
///
/// PDFs go through lopdf; anything else is treated as UTF-8 text with
/// form-feed page breaks.
pub fn read_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let pages = if is_pdf {
        read_pdf_pages(path)?
    } else {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::source_read(path, e))?;
        split_text_pages(&text)
    };

    info!("Read {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

fn read_pdf_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::source_read(path, e))?;

    // get_pages() is keyed by 1-based page number, so BTreeMap order is reading order.
    let mut pages = Vec::new();
    for number in doc.get_pages().keys() {
        let text = doc
            .extract_text(&[*number])
            .map_err(|e| ExtractError::source_read(path, e))?;
        debug!(page = number, chars = text.len(), "Extracted page text");
        pages.push(text);
    }
    Ok(pages)
}

pub fn split_text_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.is_empty()) {
        pages.pop();
    }
    pages
}

/// Concatenate pages into one buffer, each page followed by a newline.
pub fn join_pages(pages: &[String]) -> String {
    let mut buffer = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        buffer.push_str(page);
        buffer.push('\n');
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_form_feed() {
        let pages = split_text_pages("one\x0ctwo\x0c");
        assert_eq!(pages, vec!["one", "two"]);
    }

    #[test]
    fn empty_pages_kept() {
        let pages = split_text_pages("one\x0c\x0cthree");
        assert_eq!(pages, vec!["one", "", "three"]);
    }

    #[test]
    fn no_form_feed_is_one_page() {
        assert_eq!(split_text_pages("just text"), vec!["just text"]);
        assert_eq!(split_text_pages(""), vec![""]);
    }

    #[test]
    fn join_appends_newline_per_page() {
        let pages = vec!["a".to_string(), String::new(), "b".to_string()];
        assert_eq!(join_pages(&pages), "a\n\nb\n");
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn missing_file_is_source_error() {
        let err = read_pages(Path::new("tests/fixtures/does-not-exist.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::SourceRead { .. }));
    }

    #[test]
    fn invalid_pdf_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();
        let err = read_pages(&path).unwrap_err();
        assert!(matches!(err, ExtractError::SourceRead { .. }));
    }

    #[test]
    fn export_fixture_pages() {
        let pages = read_pages(Path::new("tests/fixtures/export.txt")).unwrap();
        assert_eq!(pages.len(), 3);
    }
}
