//! Pipecheck CLI - validate pipeline files or serve the HTTP endpoint.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pipecheck::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pipecheck")]
#[command(version, about = "Pipeline DAG and connectivity validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pipeline JSON file ({"nodes": [...], "edges": [...]}).
    Check {
        /// Path to the pipeline file.
        file: PathBuf,

        /// Print the wire response as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Serve POST /pipelines/parse over HTTP.
    Serve {
        /// TOML config file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Interface to bind (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config).
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check { file, json } => check(&file, json),
        Commands::Serve { config, host, port } => {
            let config = match config {
                Some(path) => ServerConfig::load(&path)
                    .with_context(|| format!("load config {}", path.display()))?,
                None => ServerConfig::default(),
            }
            .with_overrides(host, port);

            pipecheck::server::serve(config)
                .await
                .context("server failed")?;
            Ok(())
        }
    }
}

fn check(file: &Path, json: bool) -> anyhow::Result<()> {
    let pipeline = SerializedPipeline::load(file)
        .with_context(|| format!("load pipeline file {}", file.display()))?;

    let report = ValidationPipeline::default()
        .validate(&pipeline.node_ids(), &pipeline.to_edges())
        .with_context(|| format!("validate {}", file.display()))?;

    if json {
        let response = PipelineResponse::from(report.summary);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", report.summary_text());
        log::debug!(
            "stages run: {:?} in {}us",
            report.stages_run,
            report.duration_us
        );
    }

    Ok(())
}
