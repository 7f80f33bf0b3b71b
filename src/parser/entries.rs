use std::ops::Range;

use serde::Serialize;
use tracing::{debug, warn};

use super::dates::{parse_date, weekday_matches};
use super::markers::EntryMarker;
use super::title::normalize_title;
use crate::error::ExtractError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub title: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub content: String,
}

/// Raw (untrimmed) content span of each marker: from its end to the next
/// marker's start, or to the end of the buffer for the last one.
pub fn content_spans(markers: &[EntryMarker], len: usize) -> Vec<Range<usize>> {
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = markers.get(i + 1).map_or(len, |next| next.start);
            m.end..end
        })
        .collect()
}

/// Build one record per marker, in marker order.
pub fn assemble(text: &str, markers: &[EntryMarker]) -> Result<Vec<EntryRecord>, ExtractError> {
    let spans = content_spans(markers, text.len());
    let mut records = Vec::with_capacity(markers.len());

    for (marker, span) in markers.iter().zip(spans) {
        let date = parse_date(&marker.date)?;

        match weekday_matches(&date, marker.weekday) {
            Some(true) => {}
            Some(false) => warn!(
                date = %date,
                weekday = %marker.weekday,
                "Entry weekday does not match its date"
            ),
            None => warn!(date = %date, "Entry date is not a calendar day"),
        }

        let title = normalize_title(marker.title.trim());
        debug!(title = %title, date = %date, marker = ?marker.span(), chars = span.len(), "Assembled entry");

        records.push(EntryRecord {
            title,
            date,
            content: text[span].trim().to_string(),
        });
    }

    Ok(records)
}
