use crate::context::FightData;
use crate::directory::EntityDirectory;
use crate::error::{DataError, Result};
use crate::notable::NotableSet;
use crate::parsing::{parse_identities, parse_pictures, parse_ratings, parse_win_graph};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DATA_DIR_ENV: &str = "MMAMATH_DATA_DIR";
pub const GRAPH_PATH_ENV: &str = "MMAMATH_GRAPH_PATH";
pub const NAMES_PATH_ENV: &str = "MMAMATH_NAMES_PATH";
pub const RATINGS_PATH_ENV: &str = "MMAMATH_RATINGS_PATH";
pub const PICS_PATH_ENV: &str = "MMAMATH_PICS_PATH";
const DEFAULT_DATA_DIR: &str = "data";

const GRAPH_FILE: &str = "fighter_wins_graph.json";
const NAMES_FILE: &str = "fighter_id_name_map.json";
const RATINGS_FILE: &str = "fighter_peak_elo_records.json";
const PICS_FILE: &str = "fighter_pics.json";

/// Locations of the four fight datasets.
pub struct MmaMathApp {
    pub graph_path: PathBuf,
    pub names_path: PathBuf,
    pub ratings_path: PathBuf,
    pub pics_path: PathBuf,
}

impl MmaMathApp {
    /// Resolve dataset paths from the process environment and check that
    /// the required files exist.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let app = Self::resolve(data_dir, |name| std::env::var_os(name));

        // Verify required data files exist
        for required in [&app.graph_path, &app.names_path, &app.ratings_path] {
            if !required.exists() {
                return Err(DataError::MissingDataset(required.clone()));
            }
        }

        Ok(app)
    }

    /// Resolve dataset paths from, in order: the explicit directory,
    /// `MMAMATH_DATA_DIR`, then `./data`. Each file can also be pointed
    /// elsewhere with its own `MMAMATH_*_PATH` variable. Variables are
    /// read through `var`; nothing is checked on disk.
    pub fn resolve<F>(data_dir: Option<PathBuf>, var: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let env_path = |name: &str| var(name).map(PathBuf::from);

        let data_dir = data_dir
            .or_else(|| env_path(DATA_DIR_ENV))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let defaults = Self::from_dir(&data_dir);
        Self {
            graph_path: env_path(GRAPH_PATH_ENV).unwrap_or(defaults.graph_path),
            names_path: env_path(NAMES_PATH_ENV).unwrap_or(defaults.names_path),
            ratings_path: env_path(RATINGS_PATH_ENV).unwrap_or(defaults.ratings_path),
            pics_path: env_path(PICS_PATH_ENV).unwrap_or(defaults.pics_path),
        }
    }

    /// Standard file names inside `data_dir`, without touching the environment.
    pub fn from_dir(data_dir: &Path) -> Self {
        Self {
            graph_path: data_dir.join(GRAPH_FILE),
            names_path: data_dir.join(NAMES_FILE),
            ratings_path: data_dir.join(RATINGS_FILE),
            pics_path: data_dir.join(PICS_FILE),
        }
    }

    pub fn load_data(&self) -> Result<FightData> {
        let graph = parse_win_graph(&self.graph_path)?;
        let ratings = parse_ratings(&self.ratings_path)?;
        let directory = EntityDirectory::new(parse_identities(&self.names_path)?)
            .with_ratings(ratings.iter().cloned())
            .with_images(parse_pictures(&self.pics_path)?);
        let notable = NotableSet::new(ratings);

        info!(
            fighters = directory.len(),
            notable = notable.len(),
            "fight data ready"
        );
        Ok(FightData::new(directory, graph, notable))
    }
}
