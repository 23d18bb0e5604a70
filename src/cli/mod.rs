pub mod commands;
pub mod errors;
pub mod output;

use crate::config::ViewOverrides;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(
    name = "payload-compare",
    version,
    about = "Side-by-side comparison of two JSON payloads",
    long_about = "Side-by-side comparison of two JSON payloads.\n\nCommon workflows:\n  • Eyeball two API responses: view before.json after.json\n  • Script against the comparison facts: summary before.json after.json --compact\n  • Inspect one document and its node paths: tree response.json\n  • Grab a subtree for a bug report: copy response.json --path $.data.tags\n\nResources are URLs (http/https) or local file paths; both are fetched the same way."
)]
pub struct Cli {
    #[arg(
        long = "output-format",
        value_enum,
        default_value_t = OutputFormat::Json,
        global = true,
        help = "Structured output format for summary and copy"
    )]
    pub output_format: OutputFormat,

    #[arg(
        long,
        global = true,
        help = "Emit compact JSON without pretty-printing"
    )]
    pub compact: bool,

    #[arg(long, global = true, help = "Suppress progress output on stderr")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Fetch two JSON resources and render them side by side",
        after_long_help = "Examples:\n  payload-compare view https://api.example.com/v1/problem response-v2.json\n  payload-compare view v1.json v2.json --left-label \"V1 (8m 20s)\" --right-label \"V2 (2m 20s)\"\n\nBoth resources are fetched concurrently; the view appears once both settle."
    )]
    View {
        #[arg(value_name = "LEFT", help = "Left resource (URL or file path)")]
        left: String,
        #[arg(value_name = "RIGHT", help = "Right resource (URL or file path)")]
        right: String,
        #[arg(long, value_name = "PATH", help = "Optional YAML view configuration file")]
        config: Option<PathBuf>,
        #[arg(
            long = "left-label",
            value_name = "LABEL",
            help = "Header label for the left pane"
        )]
        left_label: Option<String>,
        #[arg(
            long = "right-label",
            value_name = "LABEL",
            help = "Header label for the right pane"
        )]
        right_label: Option<String>,
        #[arg(
            long = "pane-width",
            value_name = "COLS",
            help = "Column width per pane (at least 20)"
        )]
        pane_width: Option<usize>,
    },
    #[command(
        about = "Compute comparison facts for two JSON resources",
        after_long_help = "Examples:\n  payload-compare summary v1.json v2.json\n  payload-compare summary v1.json v2.json --compact\n\nFacts cover title presence and equality, difficulty, and tag/company/test-case counts."
    )]
    Summary {
        #[arg(value_name = "LEFT", help = "Left resource (URL or file path)")]
        left: String,
        #[arg(value_name = "RIGHT", help = "Right resource (URL or file path)")]
        right: String,
    },
    #[command(
        about = "Render one JSON resource as an indented tree",
        after_long_help = "Examples:\n  payload-compare tree response.json\n  payload-compare tree response.json --collapsed --show-types"
    )]
    Tree {
        #[arg(value_name = "SOURCE", help = "Resource to render (URL or file path)")]
        source: String,
        #[arg(long, help = "Fold containers to their previews")]
        collapsed: bool,
        #[arg(long = "show-types", help = "Annotate each node with its JSON type")]
        show_types: bool,
        #[arg(
            long = "truncate-after",
            value_name = "CHARS",
            help = "Shorten string previews after this many characters"
        )]
        truncate_after: Option<usize>,
    },
    #[command(
        about = "Copy a JSON document or one of its subtrees to the clipboard",
        after_long_help = "Examples:\n  payload-compare copy response.json\n  payload-compare copy response.json --path $.data.tags\n\nNode paths use the JSONPath notation shown by `tree`."
    )]
    Copy {
        #[arg(value_name = "SOURCE", help = "Resource to copy from (URL or file path)")]
        source: String,
        #[arg(
            long,
            value_name = "JSONPATH",
            help = "Copy only the subtree addressed by this JSONPath"
        )]
        path: Option<String>,
    },
}

/// What a command hands back to the output layer: a structured payload for
/// `emit_value`, or already-rendered text for stdout.
#[derive(Debug)]
pub enum CommandOutput {
    Value(Value),
    Text(String),
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with_options(cli.command, cli.output_format, cli.compact, cli.quiet).await
}

pub async fn run_with_options(
    command: Commands,
    format: OutputFormat,
    compact: bool,
    quiet: bool,
) -> Result<()> {
    match run_command(command, quiet).await? {
        CommandOutput::Value(payload) => output::emit_value(&payload, format, compact),
        CommandOutput::Text(text) => {
            println!("{text}");
            Ok(())
        }
    }
}

pub async fn run_command(command: Commands, quiet: bool) -> Result<CommandOutput> {
    match command {
        Commands::View {
            left,
            right,
            config,
            left_label,
            right_label,
            pane_width,
        } => {
            let overrides = ViewOverrides {
                left_label,
                right_label,
                pane_width,
                truncate_after: None,
            };
            commands::view(left, right, config, overrides, quiet).await
        }
        Commands::Summary { left, right } => commands::summary(left, right).await,
        Commands::Tree {
            source,
            collapsed,
            show_types,
            truncate_after,
        } => commands::tree(source, collapsed, show_types, truncate_after).await,
        Commands::Copy { source, path } => commands::copy(source, path).await,
    }
}
