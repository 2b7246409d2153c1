//! hulltrend CLI — analyze and sweep commands.
//!
//! Commands:
//! - `analyze` — run the trend decomposition over a bar CSV (or synthetic
//!   bars) and write the report plus tables to an output directory
//! - `sweep` — run the same bars under several smoothing periods in
//!   parallel and print a comparison table

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use hulltrend_core::synthetic::synthetic_bars;
use hulltrend_core::{run_analysis, AnalysisConfig, Bar};
use hulltrend_report::{
    load_bars_csv, write_annotated_csv, write_report_json, write_segments_csv, Language,
    MarkdownReport, PeriodSweep,
};

#[derive(Parser)]
#[command(name = "hulltrend", about = "hulltrend CLI — trend decomposition over OHLCV series")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and write report + tables.
    Analyze {
        /// Bar CSV with header timestamp,open,high,low,close,volume.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Use deterministic synthetic bars instead of a CSV.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Number of synthetic bars (with --synthetic).
        #[arg(long, default_value_t = 2_000)]
        synthetic_bars: usize,

        /// TOML config file; flags below override nothing when present.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Smoothing period (ignored with --config).
        #[arg(long, default_value_t = 45)]
        period: usize,

        /// Event window half-width (ignored with --config).
        #[arg(long, default_value_t = 5)]
        half_width: usize,

        /// Report language: en or zh.
        #[arg(long, default_value = "en")]
        lang: String,

        /// Output directory for report and tables.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },
    /// Analyze the same bars under several periods and compare.
    Sweep {
        /// Bar CSV with header timestamp,open,high,low,close,volume.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Use deterministic synthetic bars instead of a CSV.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Number of synthetic bars (with --synthetic).
        #[arg(long, default_value_t = 2_000)]
        synthetic_bars: usize,

        /// Periods to sweep (e.g. --periods 20 45 90).
        #[arg(long, required = true, num_args = 1..)]
        periods: Vec<usize>,

        /// Event window half-width.
        #[arg(long, default_value_t = 5)]
        half_width: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            synthetic,
            synthetic_bars: n_synthetic,
            config,
            period,
            half_width,
            lang,
            output_dir,
        } => {
            let bars = load_input(input.as_deref(), synthetic, n_synthetic)?;
            let config = match config {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read config {}", path.display()))?;
                    AnalysisConfig::from_toml_str(&raw)?
                }
                None => AnalysisConfig::new(period, half_width)?,
            };
            let language = parse_language(&lang)?;
            analyze(&bars, &config, language, &output_dir)
        }
        Commands::Sweep {
            input,
            synthetic,
            synthetic_bars: n_synthetic,
            periods,
            half_width,
        } => {
            let bars = load_input(input.as_deref(), synthetic, n_synthetic)?;
            sweep(&bars, periods, half_width)
        }
    }
}

fn load_input(input: Option<&Path>, synthetic: bool, n_synthetic: usize) -> Result<Vec<Bar>> {
    match (input, synthetic) {
        (Some(_), true) => bail!("--input and --synthetic are mutually exclusive"),
        (Some(path), false) => {
            let bars = load_bars_csv(path)?;
            println!("loaded {} bars from {}", bars.len(), path.display());
            Ok(bars)
        }
        (None, true) => {
            println!("generating {n_synthetic} synthetic bars");
            Ok(synthetic_bars(n_synthetic, 42))
        }
        (None, false) => bail!("either --input <CSV> or --synthetic is required"),
    }
}

fn parse_language(raw: &str) -> Result<Language> {
    match raw {
        "en" | "english" => Ok(Language::English),
        "zh" | "chinese" => Ok(Language::Chinese),
        other => bail!("unknown language {other:?}; expected en or zh"),
    }
}

fn analyze(
    bars: &[Bar],
    config: &AnalysisConfig,
    language: Language,
    output_dir: &Path,
) -> Result<()> {
    let report = run_analysis(bars, config)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    write_report_json(&output_dir.join("report.json"), &report)?;
    write_segments_csv(&output_dir.join("segments.csv"), &report.segments)?;
    write_annotated_csv(&output_dir.join("annotated.csv"), &report.annotated)?;

    let markdown = MarkdownReport::new(language).render(&report);
    let report_path = output_dir.join("report.md");
    std::fs::write(&report_path, &markdown)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    println!(
        "{} turning points, {} segments ({} up / {} down)",
        report.turning_points.len(),
        report.segments.len(),
        report.up_segments.count,
        report.down_segments.count
    );
    println!("artifacts written to {}", output_dir.display());
    Ok(())
}

fn sweep(bars: &[Bar], periods: Vec<usize>, half_width: usize) -> Result<()> {
    let rows = PeriodSweep::new(periods, half_width).run(bars);

    println!("period  segments  up_win_rate  down_win_rate  turning_points");
    for row in rows {
        match row.report {
            Ok(report) => {
                let rate = |r: Option<f64>| {
                    r.map_or("n/a".to_string(), |v| format!("{:.1}%", v * 100.0))
                };
                println!(
                    "{:>6}  {:>8}  {:>11}  {:>13}  {:>14}",
                    row.period,
                    report.segments.len(),
                    rate(report.up_segments.win_rate),
                    rate(report.down_segments.win_rate),
                    report.turning_points.len()
                );
            }
            Err(err) => println!("{:>6}  error: {err}", row.period),
        }
    }
    Ok(())
}
