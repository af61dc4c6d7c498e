//! Mood Detector CLI
//!
//! Starts the HTTP server, or scores texts locally with `analyze`.

use anyhow::{Context, Result};
use clap::Parser;
use mood_api::cli::{AnalyzeArgs, Cli, Command, ServeArgs};
use mood_api::config::ServerConfig;
use mood_api::probe::{render_text, Prober};
use mood_api::{init_tracing, start_server};
use mood_lexicon::load_analyzer;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Analyze(args)) => analyze(&config, args),
        Some(Command::Serve(args)) => serve(config, args).await,
        None => serve(config, ServeArgs::default()).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

async fn serve(mut config: ServerConfig, args: ServeArgs) -> Result<()> {
    if let Some(bind_address) = args.bind_address {
        config.bind_address = bind_address;
    }
    if let Some(port) = args.port {
        config.bind_port = port;
    }

    init_tracing(&config.log_level);
    start_server(config).await?;
    Ok(())
}

fn analyze(config: &ServerConfig, args: AnalyzeArgs) -> Result<()> {
    init_tracing("warn");

    let analyzer = load_analyzer(config.lexicon_path.as_deref())?;
    let prober = Prober::new(analyzer);

    for text in &args.texts {
        let report = prober.probe(text)?;
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", render_text(&report));
        }
    }

    Ok(())
}
