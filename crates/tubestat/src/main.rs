use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tubestat_core::parser::tables::schema::{CHART_TABLE, DAILY_TABLE, VIDEO_TABLE};
use tubestat_core::{analyze, RawTable};

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Channel analytics from video-platform exports", long_about = None)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive metrics, rankings and distributions from the three CSV exports
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Per-video table export (falls back to TUBESTAT_VIDEO_CSV)
    #[arg(long)]
    videos: Option<PathBuf>,
    /// Per-video chart export (falls back to TUBESTAT_CHART_CSV)
    #[arg(long)]
    chart: Option<PathBuf>,
    /// Per-day channel totals export (falls back to TUBESTAT_DAILY_CSV)
    #[arg(long)]
    daily: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let videos = read_table(VIDEO_TABLE, args.videos, "TUBESTAT_VIDEO_CSV")?;
    let chart = read_table(CHART_TABLE, args.chart, "TUBESTAT_CHART_CSV")?;
    let daily = read_table(DAILY_TABLE, args.daily, "TUBESTAT_DAILY_CSV")?;

    let report = analyze(&videos, &chart, &daily).context("analysis failed")?;
    info!(videos = report.videos.len(), "Analysis complete");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print!("{}", render::render_report(&report)),
    }

    Ok(())
}

fn read_table(table: &'static str, flag: Option<PathBuf>, env_key: &str) -> Result<RawTable> {
    let path = flag
        .or_else(|| env::var(env_key).ok().map(PathBuf::from))
        .with_context(|| format!("{table} export path is required (flag or {env_key})"))?;
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {table} export {}", path.display()))?;
    info!(table, path = %path.display(), "Read export");
    Ok(RawTable::from_csv_str(table, &content)?)
}
