use super::ad_store::AdStore;
use super::mem_backend::MemBackend;
use super::STORAGE_KEY;

pub type InMemoryStore = AdStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        AdStore::load(MemBackend::new(), STORAGE_KEY)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Ad;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_ts: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_ts: 1_000,
            }
        }

        /// Adds an ad with a timestamp later than every previous fixture ad.
        pub fn with_ad(mut self, title: &str, description: &str, phone: &str) -> Self {
            let ts = self.next_ts;
            self.next_ts += 1_000;
            self.store.add(Ad {
                id: format!("ad{}", ts),
                title: title.to_string(),
                description: description.to_string(),
                price: None,
                phone: phone.to_string(),
                created_at: ts,
            });
            self
        }

        pub fn with_ads(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_ad(
                    &format!("Test Ad {}", i + 1),
                    &format!("Description for ad {}", i + 1),
                    "+380671234567",
                );
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;

    #[test]
    fn fixture_creates_ads_with_increasing_timestamps() {
        let fixture = StoreFixture::new().with_ads(3);
        let ads = fixture.store.ads();
        assert_eq!(ads.len(), 3);
        // newest added first
        assert!(ads[0].created_at > ads[1].created_at);
        assert_eq!(ads[0].title, "Test Ad 3");
    }
}
