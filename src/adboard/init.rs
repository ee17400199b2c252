use crate::api::AdBoardApi;
use crate::board::Board;
use crate::config::BoardConfig;
use crate::store::fs::FileStore;
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DATA_DIR_ENV: &str = "ADBOARD_DATA_DIR";

pub struct AdBoardContext {
    pub api: AdBoardApi<FsBackend>,
    pub config: BoardConfig,
}

/// Picks the data directory: an explicit path wins, then the platform data
/// dir, then `.adboard` under `cwd`.
///
/// The environment variable is handled by the CLI argument parser, so it
/// arrives here as the explicit path.
pub fn resolve_data_dir(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match ProjectDirs::from("com", "adboard", "adboard") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => cwd.join(".adboard"),
    }
}

pub fn initialize(data_dir: PathBuf) -> AdBoardContext {
    let config = BoardConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        BoardConfig::default()
    });
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening board");

    let store = FileStore::open(data_dir.clone(), &config.storage_key);
    let board = Board::new(store, config.fee());
    let api = AdBoardApi::new(board, data_dir);

    AdBoardContext { api, config }
}
