pub mod bfs;
pub mod notable;
mod utils;

// Re-export the public functions
pub use bfs::{PathSearch, bfs_find_path, shortest_path, shortest_path_ids};
pub use notable::{NotablePath, shortest_paths_to_set};
pub use utils::path_ids;
