use crate::directory::{EntityDetails, EntityDirectory};
use crate::graph::{Edge, WinGraph};
use crate::notable::NotableSet;
use crate::pathfinding::{NotablePath, PathSearch, bfs_find_path, shortest_paths_to_set};
use crate::pathfinding_config::PathfindingConfig;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Everything loaded at start-up, shared read-only by every query.
pub struct FightData {
    pub directory: EntityDirectory,
    pub graph: WinGraph,
    pub notable: NotableSet,
}

/// One win along a chain, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinStep {
    pub winner: EntityDetails,
    pub loser: EntityDetails,
    pub date: Option<String>,
    pub method: Option<String>,
}

impl FightData {
    pub fn new(directory: EntityDirectory, graph: WinGraph, notable: NotableSet) -> Self {
        Self {
            directory,
            graph,
            notable,
        }
    }

    /// Search between two display names. Unresolvable names count as no path.
    pub fn find_path_by_names(&self, from_name: &str, to_name: &str) -> Option<Vec<&Edge>> {
        let from_id = self.directory.id_of(from_name)?;
        let to_id = self.directory.id_of(to_name)?;
        self.find_path(from_id, to_id).path
    }

    pub fn find_path(&self, from_id: &str, to_id: &str) -> PathSearch<'_> {
        bfs_find_path(&self.graph, from_id, to_id)
    }

    pub fn notable_opponents(&self, start_id: &str, config: &PathfindingConfig) -> Vec<NotablePath<'_>> {
        shortest_paths_to_set(&self.graph, start_id, &self.notable, config.max_notable_paths)
    }

    pub fn hydrate_path(&self, path: &[&Edge]) -> Vec<WinStep> {
        path.iter()
            .map(|win| WinStep {
                winner: self.directory.details_of(&win.from),
                loser: self.directory.details_of(&win.to),
                date: win.occurred_on.map(format_fight_date),
                method: win.method.clone(),
            })
            .collect()
    }
}

/// `M/D/YYYY`, without zero padding.
pub fn format_fight_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
