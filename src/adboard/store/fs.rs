use super::ad_store::AdStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = AdStore<FsBackend>;

impl FileStore {
    /// Loads the board kept under `data_dir` in the slot named `key`.
    pub fn open(data_dir: PathBuf, key: &str) -> Self {
        AdStore::load(FsBackend::new(data_dir), key)
    }
}
