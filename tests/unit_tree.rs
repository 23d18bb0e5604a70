use payload_compare::tree::{NodeKind, RenderOptions, build_tree, render_lines};
use serde_json::json;

#[test]
fn builds_jsonpath_addresses_for_nested_structures() {
    let doc = json!({
        "data": {
            "tags": ["array", {"id": 7}],
        },
        "key with spaces": true,
    });

    let nodes = build_tree(&doc);
    let paths: Vec<&str> = nodes.iter().map(|n| n.path.as_str()).collect();
    assert!(paths.contains(&"$"));
    assert!(paths.contains(&"$.data"));
    assert!(paths.contains(&"$.data.tags"));
    assert!(paths.contains(&"$.data.tags[0]"));
    assert!(paths.contains(&"$.data.tags[1].id"));
    assert!(paths.contains(&"$['key with spaces']"));
}

#[test]
fn records_kind_depth_and_child_counts() {
    let doc = json!({"data": {"tags": ["a", "b", "c"]}});
    let nodes = build_tree(&doc);

    let root = &nodes[0];
    assert_eq!(root.kind, NodeKind::Object);
    assert_eq!(root.depth, 0);
    assert_eq!(root.children, 1);

    let tags = nodes.iter().find(|n| n.path == "$.data.tags").unwrap();
    assert_eq!(tags.kind, NodeKind::Array);
    assert_eq!(tags.depth, 2);
    assert_eq!(tags.children, 3);
    assert_eq!(tags.preview, "[..] (3 items)");
}

#[test]
fn scalar_previews_keep_their_json_flavor() {
    let doc = json!({"s": "text", "n": 3.5, "b": false, "z": null});
    let nodes = build_tree(&doc);

    let preview_of = |name: &str| {
        nodes
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.preview.clone())
            .unwrap()
    };
    assert_eq!(preview_of("s"), "\"text\"");
    assert_eq!(preview_of("n"), "3.5");
    assert_eq!(preview_of("b"), "false");
    assert_eq!(preview_of("z"), "null");
}

#[test]
fn default_options_match_the_viewer_contract() {
    let options = RenderOptions::default();
    assert!(!options.collapsed);
    assert!(!options.show_types);
    assert!(options.enable_clipboard);
    assert_eq!(options.truncate_after, 0);
}

#[test]
fn expanded_rendering_indents_by_depth() {
    let doc = json!({"data": {"title": "Two Sum"}});
    let lines = render_lines(&build_tree(&doc), &RenderOptions::default());

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("$:"));
    assert!(lines[1].starts_with("  data"));
    assert!(lines[2].starts_with("    title: \"Two Sum\""));
}

#[test]
fn collapsed_rendering_folds_containers_to_previews() {
    let doc = json!({"data": {"title": "Two Sum", "tags": ["a"]}});
    let options = RenderOptions {
        collapsed: true,
        ..RenderOptions::default()
    };
    let lines = render_lines(&build_tree(&doc), &options);

    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("{..} (2 keys)"));
}

#[test]
fn show_types_annotates_each_line() {
    let doc = json!({"title": "Two Sum"});
    let options = RenderOptions {
        show_types: true,
        ..RenderOptions::default()
    };
    let lines = render_lines(&build_tree(&doc), &options);

    assert!(lines[0].contains("[object]"));
    assert!(lines[1].contains("title [string]:"));
}

#[test]
fn truncation_applies_only_when_enabled() {
    let doc = json!({"long": "abcdefghijklmnopqrstuvwxyz"});
    let nodes = build_tree(&doc);

    let full = render_lines(&nodes, &RenderOptions::default());
    assert!(full[1].contains("abcdefghijklmnopqrstuvwxyz"));

    let options = RenderOptions {
        truncate_after: 8,
        ..RenderOptions::default()
    };
    let truncated = render_lines(&nodes, &options);
    assert!(truncated[1].contains("\"abcdefgh...\""));
    assert!(!truncated[1].contains("xyz"));
}
