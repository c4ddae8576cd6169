mod error;
mod input;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::{PipelineError, Result};
use crate::input::elections::{discover_election_files, load_election_table};
use crate::input::gold::load_gold;
use crate::input::positions::load_positions;
use crate::model::riding::RidingResult;
use crate::model::terms::TermTable;
use crate::pipeline::stage1_aggregate::run_stage1;
use crate::pipeline::stage2_reconcile::{ReconcilerConfig, run_stage2};
use crate::pipeline::stage3_scores::run_stage3;
use crate::report::summary::{RunSummary, TermCount, write_summary};

#[derive(Debug, Parser)]
#[command(name = "parl-ideopoint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full join: aggregate elections, reconcile names, score rows.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Directory of per-term raw election CSVs (term number in the file name).
    #[arg(long)]
    elections: PathBuf,

    /// Legislator-position table from the embedding stage.
    #[arg(long)]
    positions: PathBuf,

    /// Gold-standard party ideology table.
    #[arg(long)]
    gold: PathBuf,

    /// Output path for the joined table (overwritten).
    #[arg(long)]
    out: PathBuf,

    /// Optional headerless speech-statistics table to merge onto positions.
    #[arg(long)]
    speech_stats: Option<PathBuf>,

    /// Optional path for the JSON run summary.
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "run failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let Commands::Run(args) = cli.command;

    let terms = TermTable::default_v1();
    let reconciler = ReconcilerConfig::default_v1();

    let positions = load_positions(&args.positions, args.speech_stats.as_deref())?;
    info!(rows = positions.len(), "loaded legislator positions");

    let gold = load_gold(&args.gold)?;

    let files = discover_election_files(&args.elections)?;
    let mut ridings: Vec<RidingResult> = Vec::new();
    let mut term_counts: Vec<TermCount> = Vec::new();
    let mut skipped_files: Vec<String> = Vec::new();

    for file in &files {
        let table = match load_election_table(&file.path) {
            Ok(table) => table,
            Err(PipelineError::Encoding { path }) => {
                warn!(file = %path.display(), "undecodable election file; skipping");
                skipped_files.push(path.display().to_string());
                continue;
            }
            Err(e) => return Err(e),
        };
        let term_ridings = run_stage1(&table, file.term, &terms)?;
        term_counts.push(TermCount {
            term: file.term,
            ridings: term_ridings.len(),
        });
        ridings.extend(term_ridings);
    }

    let stage2 = run_stage2(&positions, &ridings, &reconciler, &terms);
    let stage3 = run_stage3(&stage2.enriched, &gold)?;

    report::csv::write_joined(&stage3.joined, &args.out)?;
    info!(rows = stage3.joined.len(), out = %args.out.display(), "wrote joined table");

    if let Some(summary_path) = &args.summary {
        let summary = RunSummary {
            tool_name: "parl-ideopoint".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            election_files: files.len(),
            skipped_files,
            terms: term_counts,
            legislators_in: positions.len(),
            matched: stage2.matched,
            dropped_no_riding: stage2.dropped_no_riding,
            dropped_undefined_score: stage3.dropped_undefined,
            output_rows: stage3.joined.len(),
        };
        write_summary(&summary, summary_path)?;
        info!(out = %summary_path.display(), "wrote run summary");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
