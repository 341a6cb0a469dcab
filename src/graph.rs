use chrono::NaiveDate;
use rustc_hash::FxHashMap;

/// A recorded win: `from` defeated `to`.
///
/// Date and method are display metadata only; the search never looks at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub occurred_on: Option<NaiveDate>,
    pub method: Option<String>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            occurred_on: None,
            method: None,
        }
    }

    pub fn with_date(mut self, occurred_on: NaiveDate) -> Self {
        self.occurred_on = Some(occurred_on);
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

/// Immutable adjacency of wins, keyed by winner id.
///
/// Every id that appears on either side of an edge is a key. Fighters
/// without recorded wins map to an empty list, so key presence alone
/// decides whether an id takes part in a search.
#[derive(Debug, Default)]
pub struct WinGraph {
    adjacency: FxHashMap<String, Vec<Edge>>,
}

impl WinGraph {
    /// Build from flat win records, grouping by winner in input order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut adjacency: FxHashMap<String, Vec<Edge>> = FxHashMap::default();
        for edge in edges {
            adjacency.entry(edge.from.clone()).or_default().push(edge);
        }
        Self::with_opponent_keys(adjacency)
    }

    /// Build from records already grouped per winner.
    ///
    /// A winner listed with an empty group still becomes a key. Repeated
    /// groups for the same winner are appended in the order they arrive.
    pub fn from_adjacency<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Edge>)>,
    {
        let mut adjacency: FxHashMap<String, Vec<Edge>> = FxHashMap::default();
        for (winner, wins) in groups {
            adjacency.entry(winner).or_default().extend(wins);
        }
        Self::with_opponent_keys(adjacency)
    }

    fn with_opponent_keys(mut adjacency: FxHashMap<String, Vec<Edge>>) -> Self {
        let missing: Vec<String> = adjacency
            .values()
            .flatten()
            .filter(|edge| !adjacency.contains_key(&edge.to))
            .map(|edge| edge.to.clone())
            .collect();

        for opponent in missing {
            adjacency.entry(opponent).or_default();
        }

        Self { adjacency }
    }

    /// Wins recorded for `id`, in insertion order. Unknown ids yield an empty slice.
    pub fn outgoing_edges(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn exists(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// The graph's own copy of `id`, borrowed for as long as the graph lives.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.adjacency.get_key_value(id).map(|(key, _)| key.as_str())
    }

    pub fn entity_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
