use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Bool => "bool",
            NodeKind::Null => "null",
        }
    }

    fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::String(_) => NodeKind::String,
            Value::Number(_) => NodeKind::Number,
            Value::Bool(_) => NodeKind::Bool,
            Value::Null => NodeKind::Null,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the flattened document tree: structure and addressing only,
/// values are summarized into a lightweight preview.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Key name, or index notation for array elements. The root is `$`.
    pub name: String,
    /// JSONPath address; bracket notation for keys that need escaping.
    pub path: String,
    pub kind: NodeKind,
    /// Object field count or array length.
    pub children: usize,
    pub preview: String,
    pub depth: usize,
}

/// Renderer configuration, mirroring the viewer widget contract:
/// fully expanded, no type labels, clipboard enabled, no truncation.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Fold containers to their previews instead of descending.
    pub collapsed: bool,
    /// Annotate each line with the node kind.
    pub show_types: bool,
    /// Offer the copy affordance alongside rendered trees.
    pub enable_clipboard: bool,
    /// Shorten string previews after this many characters; 0 disables.
    pub truncate_after: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            collapsed: false,
            show_types: false,
            enable_clipboard: true,
            truncate_after: 0,
        }
    }
}

/// Flatten a document into pre-order `TreeNode`s.
pub fn build_tree(root: &Value) -> Vec<TreeNode> {
    let mut nodes = Vec::new();
    walk(&mut nodes, root, "$", "$", 0);
    nodes
}

fn walk(nodes: &mut Vec<TreeNode>, value: &Value, path: &str, name: &str, depth: usize) {
    nodes.push(TreeNode {
        name: name.to_string(),
        path: path.to_string(),
        kind: NodeKind::of(value),
        children: match value {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        },
        preview: preview_of(value),
        depth,
    });

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                walk(nodes, child, &member_path(path, key), key, depth + 1);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let item_path = format!("{path}[{index}]");
                walk(nodes, child, &item_path, &format!("[{index}]"), depth + 1);
            }
        }
        _ => {}
    }
}

// Dot notation only for keys that are plain identifiers; everything else is
// bracket-quoted so the path stays a valid JSONPath selector.
fn member_path(parent: &str, key: &str) -> String {
    let plain = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("{parent}.{key}")
    } else {
        format!("{parent}['{}']", key.replace('\'', "\\'"))
    }
}

fn preview_of(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Object(map) => format!("{{..}} ({} keys)", map.len()),
        Value::Array(items) => format!("[..] ({} items)", items.len()),
    }
}

/// Render the flattened tree as indented text lines.
pub fn render_lines(nodes: &[TreeNode], options: &RenderOptions) -> Vec<String> {
    nodes
        .iter()
        .filter(|node| !options.collapsed || node.depth <= 1)
        .map(|node| render_node(node, options))
        .collect()
}

fn render_node(node: &TreeNode, options: &RenderOptions) -> String {
    let indent = "  ".repeat(node.depth);
    let preview = if node.kind == NodeKind::String && options.truncate_after > 0 {
        truncate_preview(&node.preview, options.truncate_after)
    } else {
        node.preview.clone()
    };
    if options.show_types {
        format!("{indent}{} [{}]: {preview}", node.name, node.kind)
    } else {
        format!("{indent}{}: {preview}", node.name)
    }
}

fn truncate_preview(preview: &str, limit: usize) -> String {
    let inner = preview.trim_matches('"');
    if inner.chars().count() <= limit {
        return preview.to_string();
    }
    let shortened: String = inner.chars().take(limit).collect();
    format!("\"{shortened}...\"")
}
