//! Building a network from a line-oriented text source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::config::{IngestConfig, IngestMode};
use crate::network::SocialNetwork;
use crate::types::{GraphError, GraphResult};

/// What an ingestion pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Lines read, including skipped ones.
    pub lines: usize,
    /// Blank and comment lines.
    pub skipped: usize,
    /// Users that did not exist before.
    pub users: usize,
    /// Friendships that did not exist before.
    pub friendships: usize,
}

/// Yields `(line_number, trimmed_content)` for every meaningful line.
fn meaningful_lines<'a, R: BufRead + 'a>(
    reader: R,
    report: &'a mut IngestReport,
) -> impl Iterator<Item = GraphResult<(usize, String)>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| {
            report.lines += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(GraphError::Io(e))),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                report.skipped += 1;
                return None;
            }
            Some(Ok((index + 1, trimmed.to_string())))
        })
}

/// Read one identifier per line. Blank lines and `#` comments are skipped.
pub fn read_labels<R: BufRead>(reader: R) -> GraphResult<Vec<String>> {
    let mut report = IngestReport::default();
    meaningful_lines(reader, &mut report)
        .map(|line| line.map(|(_, label)| label))
        .collect()
}

/// Feed every line of `reader` into `network` according to `config.mode`.
pub fn ingest<R: BufRead>(
    network: &mut SocialNetwork,
    reader: R,
    config: &IngestConfig,
) -> GraphResult<IngestReport> {
    let mut report = IngestReport::default();
    let mut users = 0usize;
    let mut friendships = 0usize;

    for line in meaningful_lines(reader, &mut report) {
        let (number, content) = line?;
        match config.mode {
            IngestMode::Users => {
                if network.add_user(content.clone())? {
                    users += 1;
                }
                for _ in 0..config.friendships_per_user {
                    let other = network.random_user()?;
                    if network.add_friendship(content.clone(), other)? {
                        friendships += 1;
                    }
                }
            }
            IngestMode::Pairs => {
                let tokens: Vec<&str> = content.split_whitespace().collect();
                match tokens.as_slice() {
                    [user] => {
                        if network.add_user(user.to_string())? {
                            users += 1;
                        }
                    }
                    [a, b] => {
                        let before = network.user_count();
                        if network.add_friendship(a.to_string(), b.to_string())? {
                            friendships += 1;
                        }
                        users += network.user_count() - before;
                    }
                    _ => {
                        return Err(GraphError::Parse {
                            line: number,
                            reason: format!(
                                "expected one or two identifiers, found {}",
                                tokens.len()
                            ),
                        })
                    }
                }
            }
        }
    }

    report.users = users;
    report.friendships = friendships;
    if report.skipped > 0 {
        log::warn!("skipped {} blank or comment lines", report.skipped);
    }
    log::info!(
        "ingested {} lines: {} users, {} friendships",
        report.lines,
        report.users,
        report.friendships
    );
    Ok(report)
}

/// Build a fresh network from a file, seeded from `config` when it has a seed.
pub fn ingest_file(
    path: &Path,
    config: &IngestConfig,
) -> GraphResult<(SocialNetwork, IngestReport)> {
    let file = File::open(path)?;
    let mut network = match config.seed {
        Some(seed) => SocialNetwork::with_seed(seed),
        None => SocialNetwork::new(),
    };
    let report = ingest(&mut network, BufReader::new(file), config)?;
    Ok((network, report))
}
