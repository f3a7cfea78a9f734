//! CLI for TTFT Bench.
//!
//! This crate provides the `ttft-bench` command: `run` benchmarks both
//! inference backends over the configured prompt sets and emits the
//! summary table plus a timestamped CSV; `report` re-renders the summary
//! from a previous CSV export.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use ttft_bench_backends::{LocalBackend, RemoteBackend, TextGenBackend};
use ttft_bench_core::{BenchConfig, PromptSet};
use ttft_bench_harness::Orchestrator;
use ttft_bench_report::{export_csv, read_csv, render_summary};

/// TTFT Bench CLI.
#[derive(Parser, Debug)]
#[command(name = "ttft-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure TTFT across the local and remote backends and emit reports.
    Run {
        /// Executable that runs the local model (llama.cpp CLI convention).
        #[arg(long, env = "TTFT_LOCAL_COMMAND", default_value = "llama-cli")]
        local_command: PathBuf,

        /// Model identifier or weights path handed to the local runner.
        #[arg(
            long,
            env = "TTFT_LOCAL_MODEL",
            default_value = "models/gemma-2-9b-it.Q4_K_M.gguf"
        )]
        local_model: String,

        /// Base URL of the remote inference server.
        #[arg(long, env = "TTFT_REMOTE_URL", default_value = "http://localhost:8000")]
        remote_url: String,

        /// Model alias sent to the remote server, for multi-model hosts.
        #[arg(long, env = "TTFT_REMOTE_MODEL_ALIAS")]
        remote_model_alias: Option<String>,

        /// Token budget per prompt. Small on purpose: the measured latency
        /// approximates time to first token.
        #[arg(long, env = "TTFT_MAX_NEW_TOKENS", default_value_t = 10)]
        max_new_tokens: u32,

        /// Prompt set as `name=path`; repeat for multiple sets, benchmarked
        /// in the order given. Defaults to the `short` and `long` sets
        /// under `data/`.
        #[arg(long = "prompt-set", value_parser = parse_prompt_set)]
        prompt_sets: Vec<PromptSet>,

        /// Filename prefix for the CSV export.
        #[arg(long, env = "TTFT_EXPORT_PREFIX", default_value = "benchmark_results")]
        export_prefix: String,

        /// Skip writing the CSV artifact.
        #[arg(long)]
        no_export: bool,
    },

    /// Re-render the console summary from a previous CSV export.
    Report {
        /// Path to a CSV produced by `run`.
        file: PathBuf,
    },
}

/// Parse a `name=path` prompt set argument.
fn parse_prompt_set(s: &str) -> Result<PromptSet, String> {
    match s.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok(PromptSet::new(name.trim(), path.trim()))
        }
        _ => Err(format!("expected `name=path`, got `{s}`")),
    }
}

/// Run the CLI with the process arguments.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            local_command,
            local_model,
            remote_url,
            remote_model_alias,
            max_new_tokens,
            prompt_sets,
            export_prefix,
            no_export,
        } => {
            let config = BenchConfig {
                local_command,
                local_model,
                remote_base_url: remote_url,
                remote_model_alias,
                max_new_tokens,
                prompt_sets: if prompt_sets.is_empty() {
                    BenchConfig::default().prompt_sets
                } else {
                    prompt_sets
                },
                export_prefix,
            };
            run_benchmark(config, no_export).await
        }
        Commands::Report { file } => {
            let records = read_csv(&file)?;
            print!("{}", render_summary(&records));
            Ok(())
        }
    }
}

async fn run_benchmark(config: BenchConfig, no_export: bool) -> Result<(), Box<dyn Error>> {
    println!("Starting TTFT benchmark...");
    println!(
        "Local runner: {} ({})",
        config.local_command.display(),
        config.local_model
    );
    println!("Remote server: {}", config.remote_base_url);
    if let Some(alias) = &config.remote_model_alias {
        println!("Remote model alias: {alias}");
    }
    println!("Max new tokens per prompt: {}", config.max_new_tokens);
    println!("{}", "-".repeat(30));

    let local = LocalBackend::new(&config.local_command, config.local_model.clone());
    let remote = RemoteBackend::new(
        config.remote_base_url.clone(),
        config.remote_model_alias.clone(),
    );
    // Local first, then remote, for every prompt.
    let backends: Vec<Box<dyn TextGenBackend>> = vec![Box::new(local), Box::new(remote)];

    let orchestrator = Orchestrator::new(config, backends);
    let records = orchestrator.run().await;

    print!("{}", render_summary(&records));

    if no_export {
        return Ok(());
    }
    match export_csv(&records, &orchestrator.config().export_prefix) {
        Ok(Some(path)) => println!("Detailed results saved to: {}", path.display()),
        Ok(None) => println!("No results collected; nothing exported."),
        // The benchmark itself has already completed; failing to persist
        // the report is a diagnostic, not a run failure.
        Err(e) => tracing::error!(error = %e, "could not save CSV export"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_set_argument_parses_name_and_path() {
        let set = parse_prompt_set("short=data/short_prompts.txt").unwrap();
        assert_eq!(set.name, "short");
        assert_eq!(set.path, PathBuf::from("data/short_prompts.txt"));
    }

    #[test]
    fn prompt_set_argument_rejects_bad_shapes() {
        assert!(parse_prompt_set("no-equals-sign").is_err());
        assert!(parse_prompt_set("=path-only").is_err());
        assert!(parse_prompt_set("name-only=").is_err());
    }

    #[test]
    fn run_subcommand_parses_repeated_prompt_sets() {
        let cli = Cli::try_parse_from([
            "ttft-bench",
            "run",
            "--prompt-set",
            "short=a.txt",
            "--prompt-set",
            "long=b.txt",
            "--max-new-tokens",
            "16",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                prompt_sets,
                max_new_tokens,
                ..
            } => {
                assert_eq!(max_new_tokens, 16);
                let names: Vec<&str> = prompt_sets.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(names, ["short", "long"]);
            }
            other => panic!("expected run subcommand, got {other:?}"),
        }
    }

    #[test]
    fn report_subcommand_takes_a_file() {
        let cli = Cli::try_parse_from(["ttft-bench", "report", "benchmark_results_x.csv"]).unwrap();
        match cli.command {
            Commands::Report { file } => {
                assert_eq!(file, PathBuf::from("benchmark_results_x.csv"));
            }
            other => panic!("expected report subcommand, got {other:?}"),
        }
    }
}
