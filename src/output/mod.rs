pub mod slug;

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::ExtractError;
use crate::parser::entries::EntryRecord;
use slug::FilenameAllocator;

#[derive(Debug)]
pub struct WriteSummary {
    pub written: usize,
    /// Filenames in write order.
    pub files: Vec<String>,
    pub disambiguated_dates: usize,
}

/// Markdown file body: date front matter, title heading, raw content.
pub fn render(record: &EntryRecord) -> String {
    format!(
        "---\ndate: {}\n---\n\n# {}\n\n{}\n",
        record.date, record.title, record.content
    )
}

/// Filenames for every record, in record order.
pub fn plan_filenames(records: &[EntryRecord]) -> (Vec<String>, usize) {
    let mut alloc = FilenameAllocator::new();
    let names = records.iter().map(|r| alloc.allocate(r)).collect();
    (names, alloc.disambiguated_dates())
}

/// Write one file per record into `dir` (created if missing).
///
/// Stops at the first failure; files already written stay on disk.
pub fn write_entries(records: &[EntryRecord], dir: &Path) -> Result<WriteSummary, ExtractError> {
    std::fs::create_dir_all(dir).map_err(|e| ExtractError::Write {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let (names, disambiguated_dates) = plan_filenames(records);

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut files = Vec::with_capacity(names.len());
    for (record, name) in records.iter().zip(names) {
        let path = dir.join(&name);
        std::fs::write(&path, render(record)).map_err(|e| ExtractError::Write {
            path: path.clone(),
            source: e,
        })?;
        pb.suspend(|| info!("Wrote: {}", name));
        pb.set_message(name.clone());
        pb.inc(1);
        files.push(name);
    }
    pb.finish_and_clear();

    info!("Wrote {} files to {}", files.len(), dir.display());
    Ok(WriteSummary {
        written: files.len(),
        files,
        disambiguated_dates,
    })
}
