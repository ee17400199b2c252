use super::backend::SlotBackend;
use crate::error::Result;
use crate::model::Ad;
use tracing::{debug, warn};

/// The ad collection plus its persistence mirror.
///
/// The in-memory list is authoritative for the session. Every mutation is
/// followed by a write of the whole list to the backend slot; a failed write
/// is logged and otherwise ignored.
pub struct AdStore<B: SlotBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
    ads: Vec<Ad>,
}

impl<B: SlotBackend> AdStore<B> {
    /// Reads the slot under `key` and adopts its contents.
    ///
    /// A missing, unreadable or malformed slot yields an empty store.
    pub fn load(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let ads = match read_slot(&backend, &key) {
            Ok(Some(ads)) => {
                debug!(count = ads.len(), slot = %backend.describe(&key), "loaded ads");
                ads
            }
            Ok(None) => {
                debug!(slot = %backend.describe(&key), "no saved ads, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(slot = %backend.describe(&key), error = %e, "ignoring unreadable ad slot");
                Vec::new()
            }
        };
        Self { backend, key, ads }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ads in store order (newest added first). Display order comes from
    /// [`crate::search::filter_ads`].
    pub fn ads(&self) -> &[Ad] {
        &self.ads
    }

    pub fn get(&self, id: &str) -> Option<&Ad> {
        self.ads.iter().find(|ad| ad.id == id)
    }

    pub fn len(&self) -> usize {
        self.ads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ads.is_empty()
    }

    pub fn add(&mut self, ad: Ad) {
        debug!(id = %ad.id, title = %ad.title, "adding ad");
        self.ads.insert(0, ad);
        self.save();
    }

    /// Removes the ad with `id`. Returns `None`, without touching the slot,
    /// when no such ad exists.
    pub fn remove(&mut self, id: &str) -> Option<Ad> {
        let pos = self.ads.iter().position(|ad| ad.id == id)?;
        let removed = self.ads.remove(pos);
        debug!(id = %removed.id, "removed ad");
        self.save();
        Some(removed)
    }

    fn save(&self) {
        if let Err(e) = self.write_slot() {
            warn!(slot = %self.backend.describe(&self.key), error = %e, "failed to save ads");
        }
    }

    fn write_slot(&self) -> Result<()> {
        let content = serde_json::to_string(&self.ads)?;
        self.backend.write(&self.key, &content)
    }
}

fn read_slot<B: SlotBackend>(backend: &B, key: &str) -> Result<Option<Vec<Ad>>> {
    match backend.read(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
