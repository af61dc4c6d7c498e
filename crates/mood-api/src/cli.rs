//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mood Detector - classify the emotional tone of text.
#[derive(Debug, Parser)]
#[command(name = "mood-detector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "MOOD_DETECTOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve(ServeArgs),

    /// Score texts locally and print polarity, subjectivity, and mood
    Analyze(AnalyzeArgs),
}

/// Arguments for the serve command.
#[derive(Debug, Default, Parser)]
pub struct ServeArgs {
    /// Override the configured bind address
    #[arg(long)]
    pub bind_address: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Texts to analyze
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}
