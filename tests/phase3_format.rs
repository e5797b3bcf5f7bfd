//! Phase 3 tests: rendering, ingestion, configuration.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;

use social_graph::config::{load_config, IngestConfig, IngestMode};
use social_graph::format::{
    ingest, ingest_file, read_labels, render_graph, render_graph_sorted, render_network,
    render_node,
};
use social_graph::graph::{Graph, GraphBuilder};
use social_graph::network::SocialNetwork;
use social_graph::types::{Distance, GraphError};

// ==================== Helper ====================

const NAMES: &str = "marco\nsara\nandrea\nfilippo\ngiulia\nluca\nelena\n";

fn users_config(seed: u64, per_user: usize) -> IngestConfig {
    IngestConfig {
        friendships_per_user: per_user,
        seed: Some(seed),
        ..IngestConfig::default()
    }
}

fn pairs_config() -> IngestConfig {
    IngestConfig {
        mode: IngestMode::Pairs,
        ..IngestConfig::default()
    }
}

// ==================== Render Tests ====================

#[test]
fn test_render_node_lists_neighbors() {
    let graph = GraphBuilder::new().edge("marco", "sara").build().unwrap();
    let node = graph.node(&"marco").unwrap();
    assert_eq!(render_node(node), "marco: { sara }");
}

#[test]
fn test_render_graph_one_line_per_node() {
    let graph = GraphBuilder::new()
        .undirected("a", "b")
        .node("c")
        .build()
        .unwrap();
    let rendered = render_graph(&graph);
    let mut lines: Vec<&str> = rendered.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["a: { b }", "b: { a }", "c: { }"]);
}

#[test]
fn test_render_graph_sorted_is_deterministic() {
    let graph = GraphBuilder::new()
        .edge("z", "b")
        .edge("z", "a")
        .edge("m", "z")
        .build()
        .unwrap();
    assert_eq!(
        render_graph_sorted(&graph),
        "a: { }\nb: { }\nm: { z }\nz: { a, b }\n"
    );
}

#[test]
fn test_render_network_heading() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_node("solo").unwrap();
    assert_eq!(render_network(&graph), "Network:\nsolo: { }\n");
}

#[test]
fn test_display_matches_render() {
    let graph = GraphBuilder::new().edge(1u8, 2u8).build().unwrap();
    assert_eq!(graph.to_string(), render_graph(&graph));

    let mut network = SocialNetwork::with_seed(0);
    network.add_user("only").unwrap();
    assert_eq!(network.to_string(), "Network:\nonly: { }\n");
}

#[test]
fn test_render_empty_graph() {
    let graph: Graph<String> = Graph::new();
    assert_eq!(render_graph(&graph), "");
}

// ==================== Ingestion: Users Mode ====================

#[test]
fn test_users_mode_adds_every_line() {
    let mut network = SocialNetwork::with_seed(1);
    let report = ingest(&mut network, Cursor::new(NAMES), &users_config(1, 5)).unwrap();

    assert_eq!(report.lines, 7);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.users, 7);
    assert_eq!(network.user_count(), 7);
    assert!(network.friendship_count() <= 7 * 5);
    assert_eq!(report.friendships, network.friendship_count());
}

#[test]
fn test_users_mode_friendships_are_symmetric() {
    let mut network = SocialNetwork::with_seed(9);
    ingest(&mut network, Cursor::new(NAMES), &users_config(9, 3)).unwrap();
    for user in network.users().cloned().collect::<Vec<_>>() {
        for friend in network.get_friends(&user).unwrap() {
            assert!(network.get_friends(&friend).unwrap().contains(&user));
        }
        assert!(!network.get_friends(&user).unwrap().contains(&user));
    }
}

#[test]
fn test_users_mode_zero_friendships() {
    let mut network = SocialNetwork::with_seed(0);
    let report = ingest(&mut network, Cursor::new(NAMES), &users_config(0, 0)).unwrap();
    assert_eq!(report.friendships, 0);
    assert_eq!(network.friendship_count(), 0);
}

#[test]
fn test_seeded_ingest_is_reproducible() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(NAMES.as_bytes()).unwrap();

    let config = users_config(1234, 4);
    let (first, _) = ingest_file(file.path(), &config).unwrap();
    let (second, _) = ingest_file(file.path(), &config).unwrap();
    assert_eq!(render_graph_sorted(first.graph()), render_graph_sorted(second.graph()));
}

#[test]
fn test_duplicate_lines_do_not_duplicate_users() {
    let mut network = SocialNetwork::with_seed(4);
    let report = ingest(
        &mut network,
        Cursor::new("marco\nmarco\n\nsara\n"),
        &users_config(4, 1),
    )
    .unwrap();
    assert_eq!(report.lines, 4);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.users, 2);
    assert_eq!(network.user_count(), 2);
}

// ==================== Ingestion: Pairs Mode ====================

#[test]
fn test_pairs_mode_builds_explicit_graph() {
    let input = "# path of four\na b\nb c\nc d\nloner\n";
    let mut network = SocialNetwork::with_seed(0);
    let report = ingest(&mut network, Cursor::new(input), &pairs_config()).unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.users, 5);
    assert_eq!(report.friendships, 3);
    assert_eq!(
        network.shortest_path(&"a".to_string(), &"d".to_string()).unwrap(),
        Distance::Computed(3)
    );
    assert_eq!(
        network.shortest_path(&"a".to_string(), &"loner".to_string()).unwrap(),
        Distance::Unreachable
    );
    assert_eq!(network.diameter().unwrap(), Distance::Computed(3));
}

#[test]
fn test_pairs_mode_reports_bad_line() {
    let mut network = SocialNetwork::with_seed(0);
    let err = ingest(&mut network, Cursor::new("a b\n\na b c d\n"), &pairs_config()).unwrap_err();
    match err {
        GraphError::Parse { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("found 4"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ingest_missing_file() {
    let err = ingest_file(std::path::Path::new("/nonexistent/users.txt"), &pairs_config())
        .unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

#[test]
fn test_read_labels_trims() {
    let labels = read_labels(Cursor::new("  marco \r\n\tsara\n")).unwrap();
    assert_eq!(labels, vec!["marco".to_string(), "sara".to_string()]);
}

// ==================== Config Tests ====================

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "friendships_per_user = 2").unwrap();
    writeln!(file, "seed = 7").unwrap();
    writeln!(file, "mode = \"pairs\"").unwrap();
    writeln!(file, "log_level = \"debug\"").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config,
        IngestConfig {
            friendships_per_user: 2,
            seed: Some(7),
            mode: IngestMode::Pairs,
            log_level: "debug".to_string(),
        }
    );
}

#[test]
fn test_load_config_missing_file() {
    let err = load_config(std::path::Path::new("/nonexistent/socnet.toml")).unwrap_err();
    assert!(matches!(err, GraphError::Config(_)));
}

#[test]
fn test_empty_config_is_default() {
    let file = NamedTempFile::new().unwrap();
    assert_eq!(load_config(file.path()).unwrap(), IngestConfig::default());
}

#[test]
fn test_mode_from_name() {
    assert_eq!(IngestMode::from_name("Users"), Some(IngestMode::Users));
    assert_eq!(IngestMode::from_name("PAIRS"), Some(IngestMode::Pairs));
    assert_eq!(IngestMode::from_name("edges"), None);
}
