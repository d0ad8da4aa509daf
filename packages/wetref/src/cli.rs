//! Command-line interface for the extractor.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::abbrev::{abbrev_count_results, abbrev_find, AbbrevPair};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::references::{find_references, FindOptions};

/// wetref - Extract Dutch legal references from text.
#[derive(Parser)]
#[command(name = "wetref")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract references from a text file and print them as JSON.
    Extract {
        /// Input text file, or "-" for stdin
        file: PathBuf,

        /// Statute-name lexicon (YAML, identifier -> name lists)
        #[arg(short, long)]
        lexicon: Option<PathBuf>,

        /// Matcher families to skip (e.g. --skip ecli --skip euoj)
        #[arg(long)]
        skip: Vec<String>,

        /// Also run the LJN matcher (off by default, noisy)
        #[arg(long)]
        ljn: bool,

        /// Search-window radius around "artikel" anchors, in bytes
        #[arg(long, default_value_t = crate::config::CONTEXT_RADIUS)]
        radius: usize,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Find bracketed abbreviations across documents and tally them.
    Abbrevs {
        /// Input text files
        files: Vec<PathBuf>,

        /// Keep periods in abbreviations ("A.w.b." separate from "Awb")
        #[arg(long)]
        keep_dots: bool,

        /// Only report pairs seen in at least this many documents
        #[arg(long, default_value_t = 1)]
        min_docs: usize,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            lexicon,
            skip,
            ljn,
            radius,
            pretty,
        } => extract_command(&file, lexicon.as_deref(), &skip, ljn, radius, pretty),
        Commands::Abbrevs {
            files,
            keep_dots,
            min_docs,
        } => abbrevs_command(&files, keep_dots, min_docs),
    }
}

/// Read a file, or stdin when the path is "-".
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Execute the extract command.
fn extract_command(
    file: &Path,
    lexicon_path: Option<&Path>,
    skip: &[String],
    ljn: bool,
    radius: usize,
    pretty: bool,
) -> Result<()> {
    let text = read_input(file)?;

    let lexicon = lexicon_path.map(Lexicon::from_yaml_file).transpose()?;

    let mut options = FindOptions::default();
    if let Some(lexicon) = &lexicon {
        options = options.with_lexicon(lexicon);
    }
    options.ljn = ljn;
    options.resolver.context_radius = radius;
    for family in skip {
        if !options.set_enabled(family, false) {
            eprintln!(
                "{} unknown matcher family: {family}",
                style("Warning:").yellow().bold()
            );
        }
    }

    let matches = find_references(&text, &options);

    let json = if pretty {
        serde_json::to_string_pretty(&matches)?
    } else {
        serde_json::to_string(&matches)?
    };
    println!("{json}");

    eprintln!(
        "{} {} reference(s)",
        style("Found").green().bold(),
        style(matches.len()).cyan()
    );

    Ok(())
}

/// One row of the abbrevs report.
#[derive(serde::Serialize)]
struct AbbrevRow {
    abbreviation: String,
    expansion: Vec<String>,
    documents: usize,
}

/// Execute the abbrevs command.
fn abbrevs_command(files: &[PathBuf], keep_dots: bool, min_docs: usize) -> Result<()> {
    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut per_document: Vec<Vec<AbbrevPair>> = Vec::with_capacity(files.len());
    for file in files {
        pb.set_message(file.display().to_string());
        let text = std::fs::read_to_string(file)?;
        per_document.push(abbrev_find(&text));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let counts = abbrev_count_results(&per_document, !keep_dots);
    let rows: Vec<AbbrevRow> = counts
        .into_iter()
        .flat_map(|(abbreviation, expansions)| {
            expansions
                .into_iter()
                .map(move |(expansion, documents)| AbbrevRow {
                    abbreviation: abbreviation.clone(),
                    expansion,
                    documents,
                })
        })
        .filter(|row| row.documents >= min_docs)
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);

    eprintln!(
        "{} {} abbreviation(s) across {} document(s)",
        style("Found").green().bold(),
        style(rows.len()).cyan(),
        files.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["wetref", "extract", "input.txt"]);

        let Commands::Extract {
            file,
            lexicon,
            skip,
            ljn,
            radius,
            pretty,
        } = cli.command
        else {
            panic!("expected extract command");
        };
        assert_eq!(file, PathBuf::from("input.txt"));
        assert!(lexicon.is_none());
        assert!(skip.is_empty());
        assert!(!ljn);
        assert_eq!(radius, crate::config::CONTEXT_RADIUS);
        assert!(!pretty);
    }

    #[test]
    fn test_cli_parse_extract_with_flags() {
        let cli = Cli::parse_from([
            "wetref",
            "extract",
            "input.txt",
            "--lexicon",
            "names.yaml",
            "--skip",
            "ecli",
            "--skip",
            "euoj",
            "--pretty",
        ]);

        let Commands::Extract {
            lexicon,
            skip,
            pretty,
            ..
        } = cli.command
        else {
            panic!("expected extract command");
        };
        assert_eq!(lexicon, Some(PathBuf::from("names.yaml")));
        assert_eq!(skip, vec!["ecli".to_string(), "euoj".to_string()]);
        assert!(pretty);
    }

    #[test]
    fn test_cli_parse_abbrevs() {
        let cli = Cli::parse_from(["wetref", "abbrevs", "a.txt", "b.txt", "--min-docs", "2"]);

        let Commands::Abbrevs {
            files,
            keep_dots,
            min_docs,
        } = cli.command
        else {
            panic!("expected abbrevs command");
        };
        assert_eq!(files.len(), 2);
        assert!(!keep_dots);
        assert_eq!(min_docs, 2);
    }
}
