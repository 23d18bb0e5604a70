use crate::config::ViewConfig;
use crate::loader::{DocumentPair, LoadState};
use crate::summary::{DocumentFacts, SummaryFacts, summarize};
use crate::tree::{RenderOptions, build_tree, render_lines};

/// Render the user-visible view for one load state: a loading indicator
/// while pending, the error message with no trees on failure, and the
/// side-by-side panes plus summary panel once both documents are ready.
pub fn render_state(state: &LoadState, config: &ViewConfig) -> String {
    match state {
        LoadState::Pending => "Loading JSON data...".to_string(),
        LoadState::Failed(message) => format!("Failed to load documents: {message}"),
        LoadState::Ready(pair) => render_ready(pair, config),
    }
}

fn render_ready(pair: &DocumentPair, config: &ViewConfig) -> String {
    let options = RenderOptions {
        truncate_after: config.truncate_after,
        ..RenderOptions::default()
    };
    let left = render_lines(&build_tree(&pair.left), &options);
    let right = render_lines(&build_tree(&pair.right), &options);
    let facts = summarize(&pair.left, &pair.right);

    let mut out = vec!["JSON Response Comparison".to_string(), String::new()];
    out.extend(side_by_side(
        &config.left_label,
        &left,
        &config.right_label,
        &right,
        config.pane_width,
    ));
    out.push(String::new());
    out.extend(summary_panel(&facts, config));
    if options.enable_clipboard {
        out.push(String::new());
        out.push("Copy any node with: payload-compare copy <SOURCE> --path <JSONPATH>".to_string());
    }
    out.join("\n")
}

fn side_by_side(
    left_label: &str,
    left: &[String],
    right_label: &str,
    right: &[String],
    width: usize,
) -> Vec<String> {
    let rows = left.len().max(right.len());
    let mut lines = Vec::with_capacity(rows + 2);
    lines.push(format!("{} | {}", fit(left_label, width), right_label));
    lines.push(format!("{}-+-{}", "-".repeat(width), "-".repeat(width)));
    for index in 0..rows {
        let left_cell = left.get(index).map(String::as_str).unwrap_or("");
        let right_cell = right.get(index).map(String::as_str).unwrap_or("");
        lines.push(format!("{} | {}", fit(left_cell, width), right_cell));
    }
    lines
}

// Clip to the pane width and pad so the divider stays aligned.
fn fit(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{clipped:<width$}")
}

fn summary_panel(facts: &SummaryFacts, config: &ViewConfig) -> Vec<String> {
    vec![
        "Comparison Summary".to_string(),
        format!(
            "  {} title: {} {}",
            config.left_label,
            presence(facts.left.has_title),
            facts.left.title
        ),
        format!(
            "  {} title: {} {}",
            config.right_label,
            presence(facts.right.has_title),
            facts.right.title
        ),
        format!(
            "  Titles match: {}",
            if facts.titles_match {
                "Identical"
            } else {
                "Different"
            }
        ),
        stats_line(&config.left_label, &facts.left),
        stats_line(&config.right_label, &facts.right),
    ]
}

fn stats_line(label: &str, facts: &DocumentFacts) -> String {
    format!(
        "  {label} stats: difficulty {} | tags {} | companies {} | test cases {}",
        facts.difficulty, facts.tag_count, facts.company_count, facts.test_case_count
    )
}

fn presence(has_field: bool) -> &'static str {
    if has_field { "(ok)" } else { "(missing)" }
}
