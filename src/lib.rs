pub mod app;
pub mod args;
pub mod colors;
pub mod context;
pub mod directory;
pub mod display;
pub mod error;
pub mod graph;
pub mod json_output;
pub mod logging;
pub mod notable;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::MmaMathApp;
pub use args::{Args, Command};
pub use context::{FightData, WinStep};
pub use directory::{EntityDetails, EntityDirectory};
pub use error::DataError;
pub use graph::{Edge, WinGraph};
pub use notable::{NotableFighter, NotableSet};
pub use pathfinding::{NotablePath, bfs_find_path, shortest_path, shortest_path_ids, shortest_paths_to_set};
pub use pathfinding_config::PathfindingConfig;
pub use utils::format_number;
