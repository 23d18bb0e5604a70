use crate::cli::CommandOutput;
use crate::clipboard;
use crate::config::{ViewConfig, ViewOverrides};
use crate::loader::{LoadState, Loader};
use crate::location::ResourceLocation;
use crate::provider::{DefaultProvider, ResourceProvider};
use crate::summary::summarize;
use crate::tree::{RenderOptions, build_tree, render_lines};
use crate::view;
use anyhow::{Result, anyhow, bail};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;

pub async fn view(
    left: String,
    right: String,
    config_path: Option<PathBuf>,
    overrides: ViewOverrides,
    quiet: bool,
) -> Result<CommandOutput> {
    let config = ViewConfig::load(config_path.as_deref(), overrides)?;
    let loader = new_loader(&left, &right);

    if !quiet {
        eprintln!("{}", view::render_state(&loader.state(), &config));
    }

    match loader.start().await {
        state @ LoadState::Ready(_) => {
            Ok(CommandOutput::Text(view::render_state(&state, &config)))
        }
        LoadState::Failed(message) => Err(anyhow!(message)),
        LoadState::Pending => unreachable!("start() always settles the load state"),
    }
}

pub async fn summary(left: String, right: String) -> Result<CommandOutput> {
    let loader = new_loader(&left, &right);
    match loader.start().await {
        LoadState::Ready(pair) => {
            let facts = summarize(&pair.left, &pair.right);
            Ok(CommandOutput::Value(serde_json::to_value(facts)?))
        }
        LoadState::Failed(message) => Err(anyhow!(message)),
        LoadState::Pending => unreachable!("start() always settles the load state"),
    }
}

pub async fn tree(
    source: String,
    collapsed: bool,
    show_types: bool,
    truncate_after: Option<usize>,
) -> Result<CommandOutput> {
    let doc = fetch_single(&source).await?;
    let options = RenderOptions {
        collapsed,
        show_types,
        truncate_after: truncate_after.unwrap_or(0),
        ..RenderOptions::default()
    };
    let lines = render_lines(&build_tree(&doc), &options);
    Ok(CommandOutput::Text(lines.join("\n")))
}

pub async fn copy(source: String, path: Option<String>) -> Result<CommandOutput> {
    let doc = fetch_single(&source).await?;
    let value = match path {
        Some(expr) => extract_node(&doc, &expr)?,
        None => doc,
    };

    let text = serde_json::to_string_pretty(&value)?;
    clipboard::copy_text(&text)?;
    tracing::info!(characters = text.chars().count(), "copied to clipboard");
    Ok(CommandOutput::Value(json!({
        "copied": true,
        "characters": text.chars().count(),
    })))
}

fn new_loader(left: &str, right: &str) -> Loader {
    Loader::new(
        Arc::new(DefaultProvider::new()),
        ResourceLocation::parse(left),
        ResourceLocation::parse(right),
    )
}

async fn fetch_single(source: &str) -> Result<Value> {
    let provider = DefaultProvider::new();
    let doc = provider.fetch(&ResourceLocation::parse(source)).await?;
    Ok(doc)
}

fn extract_node(doc: &Value, expr: &str) -> Result<Value> {
    use jsonpath_rust::JsonPath;

    let nodes = doc
        .query(expr)
        .map_err(|error| anyhow!("jsonpath query '{expr}' failed: {error}"))?;
    match nodes.as_slice() {
        [] => bail!("path '{expr}' did not match any node"),
        [single] => Ok((*single).clone()),
        many => Ok(Value::Array(many.iter().map(|v| (*v).clone()).collect())),
    }
}
