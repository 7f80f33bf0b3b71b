mod error;
mod output;
mod parser;
mod source;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

const DEFAULT_INPUT: &str = "data/export.pdf";
const DEFAULT_OUTPUT: &str = "posts";
const DEFAULT_AUTHOR: &str = "Max Hawkins";

#[derive(Parser)]
#[command(name = "journal_extract", about = "Split a journal export into dated markdown entries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Exported journal (.pdf, or text with form-feed page breaks)
    #[arg(short, long, env = "JOURNAL_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Author name in the "<title> by <author> <Day>. M/D/YYYY" header
    #[arg(short, long, env = "JOURNAL_AUTHOR", default_value = DEFAULT_AUTHOR)]
    author: String,
}

impl SourceArgs {
    fn phrase(&self) -> String {
        format!("by {}", self.author)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the export and write one markdown file per entry
    Extract {
        #[command(flatten)]
        source: SourceArgs,
        /// Output directory (created if missing)
        #[arg(short, long = "output", env = "JOURNAL_OUTPUT", default_value = DEFAULT_OUTPUT)]
        out_dir: PathBuf,
        /// Print the filenames that would be written
        #[arg(long)]
        dry_run: bool,
    },
    /// Parse the export and print the detected entries
    List {
        #[command(flatten)]
        source: SourceArgs,
        /// Print entries as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show per-page text sizes of the export
    Pages {
        /// Exported journal (.pdf, or text with form-feed page breaks)
        #[arg(short, long, env = "JOURNAL_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            source,
            out_dir,
            dry_run,
        } => {
            println!("Extracting from: {}", source.input.display());
            let entries = load_entries(&source)?;
            println!("Found {} entries", entries.len());

            if dry_run {
                let (names, disambiguated) = output::plan_filenames(&entries);
                for name in &names {
                    println!("Would write: {}", name);
                }
                println!(
                    "{} files, {} dates disambiguated (dry run, nothing written)",
                    names.len(),
                    disambiguated
                );
                return Ok(());
            }

            let summary = output::write_entries(&entries, &out_dir)
                .with_context(|| format!("Failed writing entries to {}", out_dir.display()))?;
            println!(
                "Done! {} files written to {}/ ({} dates disambiguated)",
                summary.written,
                out_dir.display(),
                summary.disambiguated_dates
            );
            Ok(())
        }
        Commands::List { source, json } => {
            let entries = load_entries(&source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("No entries found.");
                return Ok(());
            }

            println!("{:>4} | {:<10} | {:<40} | {:>6}", "#", "Date", "Title", "Chars");
            println!("{}", "-".repeat(70));
            for (i, e) in entries.iter().enumerate() {
                println!(
                    "{:>4} | {:<10} | {:<40} | {:>6}",
                    i + 1,
                    e.date,
                    truncate(&e.title, 40),
                    e.content.chars().count()
                );
            }
            println!("\n{} entries", entries.len());
            Ok(())
        }
        Commands::Pages { input } => {
            let pages = source::read_pages(&input)
                .with_context(|| format!("Cannot read {}", input.display()))?;
            for (i, page) in pages.iter().enumerate() {
                println!("{:>4} | {:>7} chars", i + 1, page.chars().count());
            }
            let empty = pages.iter().filter(|p| p.trim().is_empty()).count();
            println!("\n{} pages ({} without text)", pages.len(), empty);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn load_entries(args: &SourceArgs) -> anyhow::Result<Vec<parser::entries::EntryRecord>> {
    let pages = source::read_pages(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;
    let entries = parser::extract_entries(&pages, &args.phrase())?;
    Ok(entries)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
    match (h, m) {
        (0, 0) => format!("{:.1}s", d.as_secs_f64()),
        (0, _) => format!("{}m {}s", m, s),
        _ => format!("{}h {}m {}s", h, m, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["journal_extract", "extract"]).unwrap();
        let Commands::Extract { source, out_dir, dry_run } = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(source.phrase(), "by Max Hawkins");
        assert_eq!(out_dir, PathBuf::from("posts"));
        assert!(!dry_run);
    }

    #[test]
    fn cli_author_override() {
        let cli = Cli::try_parse_from(["journal_extract", "list", "-a", "Jane Doe", "--json"]).unwrap();
        let Commands::List { source, json } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(source.phrase(), "by Jane Doe");
        assert!(json);
    }

    #[test]
    fn truncate_long_titles() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title indeed", 10), "a very ...");
    }

    #[test]
    fn duration_formatting() {
        use std::time::Duration;
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h 2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h 0m 0s");
    }
}
