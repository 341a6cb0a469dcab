/// Default number of notable opponents collected for one fighter
pub const DEFAULT_MAX_NOTABLE_PATHS: usize = 20;

/// Configuration for pathfinding queries
#[derive(Debug, Clone)]
pub struct PathfindingConfig {
    /// Stop collecting notable opponents after this many connecting chains
    pub max_notable_paths: usize,
}

impl PathfindingConfig {
    pub fn new(max_notable_paths: usize) -> Self {
        Self { max_notable_paths }
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            max_notable_paths: DEFAULT_MAX_NOTABLE_PATHS,
        }
    }
}
