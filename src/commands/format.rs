//! Shared output helpers for path and node rendering

use negcycle_core::graph::{Graph, Node, PathOutcome};

/// `index(name)` label used in human path lines
pub fn node_label(graph: &Graph, index: usize) -> String {
    format!("{}({})", index, graph.name(index))
}

/// One human report line for the path `start -> finish`
pub fn path_line(
    graph: &Graph,
    start: usize,
    finish: usize,
    outcome: &PathOutcome,
    show_distance: bool,
) -> String {
    let prefix = format!("Path from {} to {} is : ", start, finish);
    match outcome {
        PathOutcome::NotSolved => "Not solved.".to_string(),
        PathOutcome::NegativeCycle => {
            format!("{}Infinite number of shortest paths (negative cycle).", prefix)
        }
        PathOutcome::NoPath => format!("{}no path.", prefix),
        PathOutcome::Found(path) => {
            let mut line = prefix;
            for &node in &path.nodes {
                line.push_str(&node_label(graph, node));
                line.push(' ');
            }
            if show_distance {
                line.push_str(&format!("(cost {})", path.cost));
            }
            line
        }
    }
}

/// Comma-separated indexes, or `-` when empty
pub fn index_csv(indexes: &[usize]) -> String {
    if indexes.is_empty() {
        return "-".to_string();
    }
    indexes
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Node list as JSON objects
pub fn nodes_json(nodes: &[Node]) -> serde_json::Value {
    serde_json::to_value(nodes).unwrap_or_else(|_| serde_json::json!([]))
}
