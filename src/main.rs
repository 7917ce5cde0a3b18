//! `lyricmeter` - syllable report for lyric and poetry files.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lyricmeter::config::Config;
use lyricmeter::input::Source;
use lyricmeter::services::overlay;
use lyricmeter::{DocumentStats, Language, LineAnalyzer};

/// Count syllables line by line in lyrics and poems
#[derive(Parser, Debug)]
#[command(name = "lyricmeter", version)]
#[command(after_help = "\
Examples:
  lyricmeter song.txt                  Syllable count per line
  lyricmeter -l de -s lied.txt         German patterns, show syllable breaks
  cat song.txt | lyricmeter -f json    JSON statistics for an overlay")]
struct Cli {
    /// Files to analyze (`-` or none reads standard input)
    files: Vec<PathBuf>,

    /// Hyphenation language (EN, DE) [default: LYRICMETER_LANGUAGE or EN]
    #[arg(short, long)]
    lang: Option<Language>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Show syllable breaks inside words
    #[arg(short, long)]
    syllables: bool,

    /// Separator drawn between syllables
    #[arg(long)]
    separator: Option<String>,

    /// Maximum number of cached lines
    #[arg(long)]
    cache_capacity: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Gutter counts and summary
    Text,
    /// `DocumentStats` as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(language) = cli.lang {
        config.language = language;
    }
    if let Some(capacity) = cli.cache_capacity {
        config.cache_capacity = capacity;
    }
    if let Some(separator) = &cli.separator {
        config.separator.clone_from(separator);
    }

    let analyzer = LineAnalyzer::from_config(&config).context("Failed to initialize analyzer")?;
    tracing::info!(language = %config.language, capacity = config.cache_capacity, "Analyzer ready");

    let sources: Vec<Source> = if cli.files.is_empty() {
        vec![Source::Stdin]
    } else {
        cli.files.iter().map(|path| Source::from_arg(path)).collect()
    };

    // Documents are analyzed in parallel and reported in argument order
    let reports: Vec<(Source, lyricmeter::Result<DocumentStats>)> = sources
        .into_par_iter()
        .map(|source| {
            let stats = source
                .read()
                .map(|text| analyzer.analyze_document(&text, config.language));
            (source, stats)
        })
        .collect();

    let mut documents = Vec::with_capacity(reports.len());
    let mut failed = 0;
    for (source, stats) in reports {
        match stats {
            Ok(stats) => documents.push((source, stats)),
            Err(e) => {
                tracing::error!("{}: {e}", source.label());
                failed += 1;
            }
        }
    }

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Json => write_json(&mut out, &documents)?,
        Format::Text => {
            let separator = cli.syllables.then_some(config.separator.as_str());
            write_text(&mut out, &documents, separator)?;
        }
    }

    if failed > 0 {
        bail!("{failed} document(s) could not be read");
    }
    Ok(())
}

fn write_json(out: &mut impl Write, documents: &[(Source, DocumentStats)]) -> Result<()> {
    if let [(_, stats)] = documents {
        serde_json::to_writer_pretty(&mut *out, stats)?;
    } else {
        let all: Vec<_> = documents
            .iter()
            .map(|(source, stats)| serde_json::json!({ "source": source.label(), "stats": stats }))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &all)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_text(
    out: &mut impl Write,
    documents: &[(Source, DocumentStats)],
    separator: Option<&str>,
) -> Result<()> {
    let titled = documents.len() > 1;
    for (source, stats) in documents {
        if titled {
            writeln!(out, "== {} ==", source.label())?;
        }
        for line in &stats.lines {
            let text = separator.map_or_else(|| line.text.clone(), |sep| overlay::hyphenated(line, sep));
            writeln!(out, "{:>3} | {text}", overlay::gutter_label(line))?;
        }
        writeln!(out, "{}", overlay::summary(stats))?;
        if titled {
            writeln!(out)?;
        }
    }
    Ok(())
}
