use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod stress;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "atomic-cells workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and summarise them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Hammer the cells from many threads and verify no update or ordering is lost
    Stress(stress::StressConfig),
}

const BENCH: &str = "cells_benchmark";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Stress(config) => stress::run(&config)?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    info!(bench = BENCH, quick, "running benchmarks");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-C opt-level=3 -C codegen-units=1");

    cmd.arg("bench").arg("--bench").arg(BENCH);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to run cargo bench --bench {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed with {status}");
    }

    info!(elapsed = ?start.elapsed(), "benchmarks finished");
    Ok(())
}

fn generate_report() -> Result<()> {
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        warn!(path = %criterion_dir.display(), "no criterion output found");
        return Ok(());
    }

    // group -> function -> ops/s
    let mut results: HashMap<String, HashMap<String, f64>> = HashMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = PathBuf::from("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    use std::fmt::Write as _;
    let mut out = String::new();
    writeln!(out, "# Atomic Cell Benchmark Report")?;

    let mut groups: Vec<_> = results.keys().cloned().collect();
    groups.sort();

    for group in groups {
        writeln!(out, "\n## {group}\n")?;
        writeln!(out, "| Function | Ops/s |")?;
        writeln!(out, "|---|---|")?;

        let mut rows: Vec<_> = results[&group].iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        for (function, ops) in rows {
            writeln!(out, "| {function} | {} |", format_ops(*ops))?;
        }
    }

    fs::write(&report_path, out)
        .with_context(|| format!("writing {}", report_path.display()))?;
    info!(path = %report_path.display(), "report written");
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion/<group>/<function>/new/estimates.json`.
fn collect_results(dir: &Path, results: &mut HashMap<String, HashMap<String, f64>>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(sample_dir) = path.parent() else { continue };
        if sample_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(function_dir) = sample_dir.parent() else { continue };
        let Some(group_dir) = function_dir.parent() else { continue };
        let (Some(function), Some(group)) = (
            function_dir.file_name().and_then(|s| s.to_str()),
            group_dir.file_name().and_then(|s| s.to_str()),
        ) else {
            continue;
        };
        if group == "report" || function == "report" {
            continue;
        }

        // Throughput comes from benchmark.json when the group declares one.
        let mut elements = 1.0;
        let bench_json = sample_dir.join("benchmark.json");
        if let Ok(content) = fs::read_to_string(&bench_json) {
            let json: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", bench_json.display()))?;
            if let Some(t) = json.get("throughput").and_then(|t| t.get("Elements")) {
                elements = t.as_f64().unwrap_or(1.0);
            }
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        let time_ns = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0);
        if time_ns > 0.0 {
            results
                .entry(group.to_string())
                .or_default()
                .insert(function.to_string(), elements * 1e9 / time_ns);
        }
    }

    Ok(())
}
