use std::ops::Range;
use std::sync::LazyLock;

use chrono::Weekday;
use regex::Regex;
use tracing::debug;

/// What must follow the attribution phrase: ` Mon. 3/14/2026`.
static TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+(Mon|Tue|Wed|Thu|Fri|Sat|Sun)\.\s+([0-9]{1,2}/[0-9]{1,2}/[0-9]{4})").unwrap()
});

/// One `<title> by <author> <Day>. M/D/YYYY` occurrence in the text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMarker {
    /// Raw title capture, untrimmed.
    pub title: String,
    pub weekday: Weekday,
    /// Raw `M/D/YYYY` string.
    pub date: String,
    pub start: usize,
    pub end: usize,
}

impl EntryMarker {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Cursor-driven marker matcher.
///
/// Each step finds the next occurrence of the attribution phrase at or after
/// the cursor, checks the weekday/date tail, then walks back to the title.
/// An occurrence that fails either check is skipped and the search resumes
/// just past it. Emitted markers never overlap: the cursor moves to the end
/// of each one.
pub struct MarkerScanner<'a> {
    text: &'a str,
    phrase: &'a str,
    cursor: usize,
    search_from: usize,
}

impl<'a> MarkerScanner<'a> {
    pub fn new(text: &'a str, phrase: &'a str) -> Self {
        MarkerScanner {
            text,
            phrase,
            cursor: 0,
            search_from: 0,
        }
    }

    /// Title span ending before the whitespace that precedes `anchor`.
    ///
    /// The title cannot contain a newline and cannot start before the
    /// cursor, so it begins at the later of the two. Needs at least one
    /// whitespace char between title and phrase.
    fn title_span(&self, anchor: usize) -> Option<Range<usize>> {
        let before = &self.text[self.cursor..anchor];
        let title_end = self.cursor + before.trim_end().len();

        if title_end == anchor {
            return None;
        }

        if title_end > self.cursor {
            let line_start = self.text[self.cursor..title_end]
                .rfind('\n')
                .map_or(self.cursor, |i| self.cursor + i + 1);
            return Some(line_start..title_end);
        }

        // Only whitespace since the cursor: the title is the first
        // non-newline whitespace char that still leaves a separator after it.
        before
            .char_indices()
            .map(|(i, c)| (self.cursor + i, c))
            .find(|&(i, c)| c != '\n' && i + c.len_utf8() < anchor)
            .map(|(i, c)| i..i + c.len_utf8())
    }
}

impl Iterator for MarkerScanner<'_> {
    type Item = EntryMarker;

    fn next(&mut self) -> Option<EntryMarker> {
        if self.phrase.is_empty() {
            return None;
        }

        loop {
            let anchor = self.search_from + self.text.get(self.search_from..)?.find(self.phrase)?;
            let step = self.text[anchor..].chars().next().map_or(1, char::len_utf8);
            self.search_from = anchor + step;

            let tail_start = anchor + self.phrase.len();
            let Some(caps) = TAIL_RE.captures(&self.text[tail_start..]) else {
                debug!(offset = anchor, "Attribution phrase without weekday/date tail");
                continue;
            };
            let Some(weekday) = weekday_from_abbrev(&caps[1]) else {
                continue;
            };
            let Some(title) = self.title_span(anchor) else {
                debug!(offset = anchor, "Attribution phrase without a title before it");
                continue;
            };

            let end = tail_start + caps[0].len();
            let marker = EntryMarker {
                title: self.text[title.clone()].to_string(),
                weekday,
                date: caps[2].to_string(),
                start: title.start,
                end,
            };

            self.cursor = end;
            self.search_from = end;
            return Some(marker);
        }
    }
}

fn weekday_from_abbrev(abbrev: &str) -> Option<Weekday> {
    match abbrev {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// All markers in document order.
pub fn scan_markers(text: &str, phrase: &str) -> Vec<EntryMarker> {
    MarkerScanner::new(text, phrase).collect()
}
