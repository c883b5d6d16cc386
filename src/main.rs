use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{bail, Context};

use corpus_summary::config::SummaryConfig;
use corpus_summary::lexicon::Lexicon;
use corpus_summary::{print_summary, summarize};

mod cli;
mod logging;

use crate::cli::AppConfig;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    if let Err(e) = cfg.validate() {
        bail!("invalid arguments: {e}");
    }

    let lexicon = match &cfg.lexicon {
        Some(path) => Lexicon::from_json_file(path)
            .with_context(|| format!("loading lexicon {}", path.display()))?,
        None => Lexicon::new(),
    };

    let file = File::open(&cfg.corpus)
        .with_context(|| format!("opening corpus {}", cfg.corpus.display()))?;
    let mut source = BufReader::new(file);

    let query = cfg.query();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = if cfg.json {
        let report = summarize(
            &mut source,
            cfg.offset,
            &query,
            &lexicon,
            cfg.mode(),
            &SummaryConfig::v0(),
        )?;
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        report
    } else {
        print_summary(&mut source, cfg.offset, &query, &lexicon, cfg.mode(), &mut out)?
    };

    tracing::info!(
        document_id = report.metadata.document_id.as_deref().unwrap_or("-"),
        offset = cfg.offset,
        mode = ?report.metadata.mode,
        sentences = report.metadata.sentences_considered,
        selected = report.metadata.sentences_selected,
        "summary complete"
    );

    Ok(())
}
