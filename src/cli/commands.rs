//! CLI command implementations.

use std::path::Path;

use crate::config::IngestConfig;
use crate::format::{ingest_file, render_graph_sorted};
use crate::types::{Distance, GraphResult};

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Print the whole network, one user per line.
pub fn cmd_show(path: &Path, config: &IngestConfig, json: bool) -> GraphResult<()> {
    let (network, _) = ingest_file(path, config)?;
    let graph = network.graph();

    if json {
        let mut users: Vec<&String> = graph.labels().collect();
        users.sort();
        let mut entries = serde_json::Map::new();
        for user in users {
            let mut friends: Vec<String> = network.get_friends(user)?.into_iter().collect();
            friends.sort();
            entries.insert(user.clone(), serde_json::json!(friends));
        }
        print_json(&serde_json::Value::Object(entries));
    } else {
        println!("Network:");
        print!("{}", render_graph_sorted(graph));
    }
    Ok(())
}

/// Print the shortest friendship chain length between two users.
pub fn cmd_path(
    path: &Path,
    config: &IngestConfig,
    source: &str,
    destination: &str,
    json: bool,
) -> GraphResult<()> {
    let (mut network, _) = ingest_file(path, config)?;
    let distance = network.shortest_path(&source.to_string(), &destination.to_string())?;

    if json {
        print_json(&serde_json::json!({
            "source": source,
            "destination": destination,
            "distance": distance,
        }));
    } else {
        println!("shortestPath({source} -> {destination}): {distance}");
    }
    Ok(())
}

/// Print the network diameter.
pub fn cmd_diameter(path: &Path, config: &IngestConfig, json: bool) -> GraphResult<()> {
    let (mut network, _) = ingest_file(path, config)?;
    let diameter = network.diameter()?;

    if json {
        print_json(&serde_json::json!({ "diameter": diameter }));
    } else {
        println!("network diameter: {diameter}");
    }
    Ok(())
}

/// Print a uniformly sampled user.
pub fn cmd_random(path: &Path, config: &IngestConfig, json: bool) -> GraphResult<()> {
    let (mut network, _) = ingest_file(path, config)?;
    let user = network.random_user()?;

    if json {
        print_json(&serde_json::json!({ "user": user }));
    } else {
        println!("{user}");
    }
    Ok(())
}

/// Detailed statistics about the network.
pub fn cmd_stats(path: &Path, config: &IngestConfig, json: bool) -> GraphResult<()> {
    let (mut network, report) = ingest_file(path, config)?;

    let user_count = network.user_count();
    let friendship_count = network.friendship_count();
    let degrees: Vec<usize> = network.graph().nodes().map(|n| n.degree()).collect();
    let max_friends = degrees.iter().copied().max().unwrap_or(0);
    let isolated = degrees.iter().filter(|&&d| d == 0).count();
    let avg_friends = if user_count > 0 {
        degrees.iter().sum::<usize>() as f64 / user_count as f64
    } else {
        0.0
    };
    let diameter = if user_count >= 2 {
        network.diameter()?
    } else {
        Distance::Unreachable
    };

    if json {
        print_json(&serde_json::json!({
            "users": user_count,
            "friendships": friendship_count,
            "avg_friends_per_user": avg_friends,
            "max_friends_per_user": max_friends,
            "isolated_users": isolated,
            "diameter": diameter,
            "ingest": report,
        }));
    } else {
        println!("Network Statistics:");
        println!("  Users: {}", user_count);
        println!("  Friendships: {}", friendship_count);
        println!("  Avg friends per user: {:.2}", avg_friends);
        println!("  Max friends per user: {}", max_friends);
        println!("  Isolated users: {}", isolated);
        println!("  Diameter: {}", diameter);
        println!();
        println!("  Ingestion:");
        println!("    Lines read: {}", report.lines);
        println!("    Lines skipped: {}", report.skipped);
        println!("    New users: {}", report.users);
        println!("    New friendships: {}", report.friendships);
    }
    Ok(())
}
