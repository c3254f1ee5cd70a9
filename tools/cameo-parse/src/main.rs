//! Credit line parser
//!
//! Reads filmography credit lines from files or stdin and prints one JSON
//! object per line.

use anyhow::{Context, Result, bail};
use cameo_core::{AmbiguousEpisode, Credit, ParserConfig, RoleParser};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

/// CLI arguments
#[derive(Parser)]
#[command(name = "cameo-parse")]
#[command(about = "Parse filmography credit lines into JSON records")]
#[command(version)]
struct Cli {
    /// Files with one credit line per line (reads stdin when omitted)
    files: Vec<PathBuf>,

    /// Pretty-print each JSON record
    #[arg(long)]
    pretty: bool,

    /// Stop at the first line that cannot be parsed
    #[arg(long)]
    fail_fast: bool,

    /// Treat unquoted titles with a freeform episode block as television roles
    #[arg(long)]
    ambiguous_as_tv: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One output record.
#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    credit: Option<Credit>,
    error: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    parsed: usize,
    failed: usize,
}

struct Options {
    pretty: bool,
    fail_fast: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let policy = if cli.ambiguous_as_tv {
        AmbiguousEpisode::Television
    } else {
        AmbiguousEpisode::Movie
    };
    let parser = RoleParser::new(ParserConfig::new().with_ambiguous_episode(policy))
        .context("failed to build credit parser")?;
    let options = Options {
        pretty: cli.pretty,
        fail_fast: cli.fail_fast,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut summary = Summary::default();

    if cli.files.is_empty() {
        let stdin = io::stdin();
        process(&parser, stdin.lock(), &mut out, &options, &mut summary)
            .context("failed to process stdin")?;
    } else {
        for path in &cli.files {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            process(&parser, BufReader::new(file), &mut out, &options, &mut summary)
                .with_context(|| format!("failed to process {}", path.display()))?;
        }
    }

    info!(parsed = summary.parsed, failed = summary.failed, "done");
    Ok(())
}

fn process<R: BufRead, W: Write>(
    parser: &RoleParser,
    reader: R,
    out: &mut W,
    options: &Options,
    summary: &mut Summary,
) -> Result<()> {
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let output = match parser.parse(&line) {
            Ok(credit) => {
                summary.parsed += 1;
                ParseOutput {
                    input: &line,
                    credit: Some(credit),
                    error: None,
                }
            }
            Err(e) => {
                summary.failed += 1;
                if options.fail_fast {
                    bail!("line {}: cannot parse {:?}", number + 1, e.to_string());
                }
                warn!(line = number + 1, input = %e, "skipping unparseable credit line");
                ParseOutput {
                    input: &line,
                    credit: None,
                    error: Some(e.to_string()),
                }
            }
        };

        if options.pretty {
            serde_json::to_writer_pretty(&mut *out, &output)?;
        } else {
            serde_json::to_writer(&mut *out, &output)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, fail_fast: bool) -> (Result<()>, String, Summary) {
        let parser = RoleParser::with_defaults().unwrap();
        let options = Options {
            pretty: false,
            fail_fast,
        };
        let mut out = Vec::new();
        let mut summary = Summary::default();
        let result = process(&parser, input.as_bytes(), &mut out, &options, &mut summary);
        (result, String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn writes_one_record_per_line() {
        let input = "EuroTrip (2004)  [Jenny]  <6>\n\n\"El hormiguero\" (2006) {(2011-03-23)}  [Herself]\n";
        let (result, out, summary) = run(input, false);
        assert!(result.is_ok());
        assert_eq!(summary, Summary { parsed: 2, failed: 0 });

        let records: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["kind"], "movie");
        assert_eq!(records[0]["character"], "Jenny");
        assert_eq!(records[1]["kind"], "tv");
        assert_eq!(records[1]["season"], 2011);
        assert!(records[1]["error"].is_null());
    }

    #[test]
    fn failures_are_reported_and_skipped() {
        let input = "bobloblaw attorney at law\nLlamada (2011)\n";
        let (result, out, summary) = run(input, false);
        assert!(result.is_ok());
        assert_eq!(summary, Summary { parsed: 1, failed: 1 });

        let first: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(first["error"], "bobloblaw attorney at law");
        assert!(first.get("kind").is_none());
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let input = "Llamada (2011)\nbobloblaw attorney at law\nHush (2013/IV)  [Nanda]\n";
        let (result, out, summary) = run(input, true);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert_eq!(summary, Summary { parsed: 1, failed: 1 });
        assert_eq!(out.lines().count(), 1);
    }
}
