use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::entries::EntryRecord;

pub const SLUG_MAX_LEN: usize = 50;

static INVALID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());
static DASHES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Lowercase, hyphenated, at most [`SLUG_MAX_LEN`] chars. Truncation runs
/// last and may cut mid-word or leave a trailing hyphen.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = INVALID_RE.replace_all(&lower, "");
    let hyphenated = SEPARATOR_RE.replace_all(&stripped, "-");
    let collapsed = DASHES_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').chars().take(SLUG_MAX_LEN).collect()
}

/// Assigns `{date}-{slug}[-{n}].md` names in record order.
///
/// Collisions are tracked per date only; two titles that slugify the same
/// on different dates never clash, and same-date records always get a
/// counter even when their slugs differ.
#[derive(Debug, Default)]
pub struct FilenameAllocator {
    seen: HashMap<String, usize>,
}

impl FilenameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, record: &EntryRecord) -> String {
        let slug = slugify(&record.title);
        match self.seen.get_mut(&record.date) {
            Some(count) => {
                *count += 1;
                format!("{}-{}-{}.md", record.date, slug, count)
            }
            None => {
                self.seen.insert(record.date.clone(), 0);
                format!("{}-{}.md", record.date, slug)
            }
        }
    }

    /// Dates that needed at least one `-n` suffix.
    pub fn disambiguated_dates(&self) -> usize {
        self.seen.values().filter(|&&n| n > 0).count()
    }
}
