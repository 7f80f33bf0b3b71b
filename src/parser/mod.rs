pub mod dates;
pub mod entries;
pub mod lines;
pub mod markers;
pub mod title;

use tracing::info;

use crate::error::ExtractError;
use crate::source::join_pages;
use entries::EntryRecord;

/// Pipeline: pages → buffer → deduped lines → markers → entry records.
pub fn extract_entries(pages: &[String], phrase: &str) -> Result<Vec<EntryRecord>, ExtractError> {
    let raw = join_pages(pages);
    let text = lines::dedupe_lines(&raw);
    info!(
        "Deduplicated {} → {} lines",
        raw.split('\n').count(),
        text.split('\n').count()
    );

    let markers = markers::scan_markers(&text, phrase);
    info!("Found {} entry markers", markers.len());

    entries::assemble(&text, &markers)
}
