use adboard::model::Ad;
use adboard::store::fs::FileStore;
use adboard::store::fs_backend::FsBackend;
use adboard::store::{SlotBackend, STORAGE_KEY};
use std::fs;

fn ad(id: &str, title: &str, created_at: i64) -> Ad {
    Ad {
        id: id.to_string(),
        title: title.to_string(),
        description: "Red bike, great shape".to_string(),
        price: Some(1500.0),
        phone: "+380671234567".to_string(),
        created_at,
    }
}

#[test]
fn save_then_reload_yields_same_ads() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(temp.path().to_path_buf(), STORAGE_KEY);
    store.add(ad("a", "Bike", 100));
    store.add(ad("b", "Sofa", 200));

    let reloaded = FileStore::open(temp.path().to_path_buf(), STORAGE_KEY);
    assert_eq!(reloaded.ads(), store.ads());
}

#[test]
fn creates_missing_data_dir_on_first_write() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("nested").join("board");
    let mut store = FileStore::open(dir.clone(), STORAGE_KEY);
    assert!(store.is_empty());

    store.add(ad("a", "Bike", 100));
    assert!(dir.join("classified_ads_v1.json").exists());
}

#[test]
fn slot_is_a_camel_case_json_array() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(temp.path().to_path_buf(), STORAGE_KEY);
    store.add(ad("a", "Bike", 100));

    let raw = fs::read_to_string(temp.path().join("classified_ads_v1.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["createdAt"], 100);
    assert_eq!(value[0]["price"], 1500.0);
}

#[test]
fn corrupt_slot_loads_empty_and_is_replaced_on_write() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("classified_ads_v1.json"), "{ not json").unwrap();

    let mut store = FileStore::open(temp.path().to_path_buf(), STORAGE_KEY);
    assert!(store.is_empty());

    store.add(ad("a", "Bike", 100));
    let reloaded = FileStore::open(temp.path().to_path_buf(), STORAGE_KEY);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn removal_is_persisted() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(temp.path().to_path_buf(), STORAGE_KEY);
    store.add(ad("a", "Bike", 100));
    store.add(ad("b", "Sofa", 200));
    store.remove("a");

    let reloaded = FileStore::open(temp.path().to_path_buf(), STORAGE_KEY);
    let ids: Vec<&str> = reloaded.ads().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn backend_leaves_no_temp_files() {
    let temp = tempfile::tempdir().unwrap();
    let backend = FsBackend::new(temp.path().to_path_buf());
    backend.write("slot", "[]").unwrap();
    backend.write("slot", "[1]").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["slot.json".to_string()]);
    assert_eq!(backend.read("slot").unwrap().as_deref(), Some("[1]"));
    assert_eq!(backend.read("other").unwrap(), None);
}
