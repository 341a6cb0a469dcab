use super::utils::{ParentMap, path_ids, reconstruct_path};
use crate::graph::{Edge, WinGraph};
use rustc_hash::FxHashSet;
use std::{collections::VecDeque, time::Instant};
use tracing::debug;

/// Outcome of one shortest-path search, with the statistics the CLI reports.
#[derive(Debug, Clone)]
pub struct PathSearch<'g> {
    pub path: Option<Vec<&'g Edge>>,
    pub fighters_visited: usize,
    pub elapsed_secs: f64,
}

struct BfsState<'g> {
    queue: VecDeque<&'g str>,
    visited: FxHashSet<&'g str>,
    parent_map: ParentMap<'g>,
}

impl<'g> BfsState<'g> {
    fn new(start: &'g str) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: ParentMap::default(),
        }
    }

    // Marking on enqueue keeps parallel edges and converging paths from
    // queueing the same fighter twice.
    fn visit_neighbor(&mut self, win: &'g Edge, current: &'g str) {
        let opponent = win.to.as_str();
        if self.visited.insert(opponent) {
            self.parent_map.insert(opponent, (current, win));
            self.queue.push_back(opponent);
        }
    }

    fn find_path_to_target(&mut self, start: &'g str, target: &'g str, graph: &'g WinGraph) -> Option<Vec<&'g Edge>> {
        while let Some(current_fighter) = self.queue.pop_front() {
            if current_fighter == target {
                return Some(reconstruct_path(&self.parent_map, start, target));
            }

            for win in graph.outgoing_edges(current_fighter) {
                self.visit_neighbor(win, current_fighter);
            }
        }

        None
    }
}

/// Breadth-first search for the fewest-wins chain from `start` to `target`.
///
/// Both ids must be graph keys, otherwise no search runs. Wins are expanded
/// in stored order, so among equally short chains the result is the one
/// built from the earliest-inserted edges.
pub fn bfs_find_path<'g>(graph: &'g WinGraph, start: &str, target: &str) -> PathSearch<'g> {
    let search_timer = Instant::now();

    let (Some(start), Some(target)) = (graph.resolve(start), graph.resolve(target)) else {
        debug!(start, target, "skipping search for unknown fighter id");
        return PathSearch {
            path: None,
            fighters_visited: 0,
            elapsed_secs: search_timer.elapsed().as_secs_f64(),
        };
    };

    let mut bfs_state = BfsState::new(start);
    let path = bfs_state.find_path_to_target(start, target, graph);

    let search = PathSearch {
        path,
        fighters_visited: bfs_state.visited.len(),
        elapsed_secs: search_timer.elapsed().as_secs_f64(),
    };
    debug!(
        start,
        target,
        found = search.path.is_some(),
        visited = search.fighters_visited,
        "bfs finished"
    );
    search
}

/// Shortest chain of wins from `start` to `target`, or `None` when either id
/// is unknown or no chain exists. `start == target` yields an empty chain.
pub fn shortest_path<'g>(graph: &'g WinGraph, start: &str, target: &str) -> Option<Vec<&'g Edge>> {
    bfs_find_path(graph, start, target).path
}

/// Same search as [`shortest_path`], reported as the fighter ids along the chain.
pub fn shortest_path_ids<'g>(graph: &'g WinGraph, start: &str, target: &str) -> Option<Vec<&'g str>> {
    let start = graph.resolve(start)?;
    let path = shortest_path(graph, start, target)?;
    Some(path_ids(start, &path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn chain_graph() -> WinGraph {
        WinGraph::from_adjacency([
            ("X".to_string(), vec![Edge::new("X", "Y")]),
            ("Y".to_string(), vec![Edge::new("Y", "Z")]),
            ("Z".to_string(), Vec::new()),
        ])
    }

    fn hops(path: &[&Edge]) -> Vec<(String, String)> {
        path.iter()
            .map(|win| (win.from.clone(), win.to.clone()))
            .collect()
    }

    #[test]
    fn test_follows_wins_in_direction() {
        let graph = chain_graph();

        let path = shortest_path(&graph, "X", "Z").unwrap();
        assert_eq!(
            hops(&path),
            [
                ("X".to_string(), "Y".to_string()),
                ("Y".to_string(), "Z".to_string())
            ]
        );
        assert!(shortest_path(&graph, "Z", "X").is_none());
    }

    #[test]
    fn test_start_equals_target_is_empty_success() {
        let graph = chain_graph();

        for id in ["X", "Y", "Z"] {
            assert_eq!(shortest_path(&graph, id, id), Some(Vec::new()));
        }
    }

    #[test]
    fn test_unknown_id_skips_search() {
        let graph = chain_graph();

        let search = bfs_find_path(&graph, "Q", "X");
        assert!(search.path.is_none());
        assert_eq!(search.fighters_visited, 0);

        let search = bfs_find_path(&graph, "X", "Q");
        assert!(search.path.is_none());
        assert_eq!(search.fighters_visited, 0);
    }

    #[test]
    fn test_unreachable_target_exhausts_component() {
        let graph = WinGraph::from_edges([
            Edge::new("a", "b"),
            Edge::new("b", "c"),
            Edge::new("island", "d"),
        ]);

        let search = bfs_find_path(&graph, "a", "d");
        assert!(search.path.is_none());
        assert_eq!(search.fighters_visited, 3);
    }

    #[test]
    fn test_prefers_fewer_wins() {
        // a -> p -> q -> b (three wins) inserted before a -> r -> b (two wins)
        let graph = WinGraph::from_edges([
            Edge::new("a", "p"),
            Edge::new("p", "q"),
            Edge::new("q", "b"),
            Edge::new("a", "r"),
            Edge::new("r", "b"),
        ]);

        let path = shortest_path(&graph, "a", "b").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].to, "r");
    }

    #[test]
    fn test_parallel_wins_use_first_inserted() {
        let first_date = NaiveDate::from_ymd_opt(2015, 1, 3).unwrap();
        let graph = WinGraph::from_edges([
            Edge::new("a", "b").with_date(first_date).with_method("KO/TKO"),
            Edge::new("a", "b").with_method("Decision - Unanimous"),
        ]);

        let path = shortest_path(&graph, "a", "b").unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].method.as_deref(), Some("KO/TKO"));
        assert_eq!(path[0].occurred_on, Some(first_date));
    }

    #[test]
    fn test_repeated_queries_return_same_edges() {
        let graph = chain_graph();

        let first = shortest_path(&graph, "X", "Z").unwrap();
        let second = shortest_path(&graph, "X", "Z").unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert!(std::ptr::eq(*a, *b));
        }
    }

    #[test]
    fn test_cycles_terminate() {
        let graph = WinGraph::from_edges([
            Edge::new("a", "b"),
            Edge::new("b", "a"),
            Edge::new("b", "c"),
        ]);

        assert_eq!(shortest_path(&graph, "a", "c").map(|path| path.len()), Some(2));
        assert_eq!(shortest_path(&graph, "c", "a"), None);
    }

    #[test]
    fn test_id_form_includes_start() {
        let graph = chain_graph();

        assert_eq!(shortest_path_ids(&graph, "X", "Z"), Some(vec!["X", "Y", "Z"]));
        assert_eq!(shortest_path_ids(&graph, "X", "X"), Some(vec!["X"]));
        assert_eq!(shortest_path_ids(&graph, "Z", "X"), None);
    }
}
