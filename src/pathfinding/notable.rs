use super::bfs::shortest_path;
use crate::graph::{Edge, WinGraph};
use crate::notable::NotableSet;
use tracing::debug;

/// A notable fighter reachable from the search start, with the chain that reaches them.
#[derive(Debug, Clone, PartialEq)]
pub struct NotablePath<'g> {
    pub target: &'g str,
    pub path: Vec<&'g Edge>,
}

/// Shortest chains from `start` to notable fighters, in notable-set order.
///
/// Each member gets its own independent BFS. Members with no chain are
/// skipped. Collection stops after `max_results` hits, and a cap of zero
/// runs no search at all.
pub fn shortest_paths_to_set<'g>(
    graph: &'g WinGraph,
    start: &str,
    notable: &NotableSet,
    max_results: usize,
) -> Vec<NotablePath<'g>> {
    if !graph.exists(start) {
        debug!(start, "notable search from unknown fighter id");
        return Vec::new();
    }

    let targets = notable.iter().filter_map(|fighter| graph.resolve(&fighter.id));
    collect_notable_paths(targets, max_results, |target| shortest_path(graph, start, target))
}

fn collect_notable_paths<'g, T, F>(targets: T, max_results: usize, mut search: F) -> Vec<NotablePath<'g>>
where
    T: IntoIterator<Item = &'g str>,
    F: FnMut(&'g str) -> Option<Vec<&'g Edge>>,
{
    let mut found = Vec::new();
    if max_results == 0 {
        return found;
    }

    for target in targets {
        if let Some(path) = search(target) {
            found.push(NotablePath { target, path });
            if found.len() >= max_results {
                break;
            }
        }
    }

    found
}
