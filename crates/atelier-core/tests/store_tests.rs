use atelier_core::{
    store::{decode, encode, Database, SCHEMA_VERSION},
    MemoryStore, Order, OrderStore, SqliteStore, WizardBuilder, DEFAULT_SLOT_KEY,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_slot_upsert() {
    let (_temp_file, db) = create_test_db();

    assert!(db.get_slot("missing").expect("Failed to read").is_none());

    db.put_slot("onboardingState", "{}").expect("Failed to write");
    let saved_at = db
        .put_slot("onboardingState", r#"{"brandKit":true}"#)
        .expect("Failed to overwrite");

    let slot = db
        .get_slot("onboardingState")
        .expect("Failed to read")
        .expect("Slot should exist");
    assert_eq!(slot.value, r#"{"brandKit":true}"#);
    assert_eq!(slot.updated_at, saved_at);
}

#[test]
fn test_sqlite_store_round_trip() {
    let (_temp_file, db) = create_test_db();
    let mut store = SqliteStore::new(db, DEFAULT_SLOT_KEY);
    let mut wizard = WizardBuilder::new()
        .in_memory()
        .build()
        .expect("Failed to create wizard");
    wizard.add_page("Home");
    wizard.toggle_brand_kit();

    store.save(wizard.order()).expect("Failed to save");

    assert_eq!(&store.load(), wizard.order());
    assert!(store.last_saved_at().is_some());
}

#[test]
fn test_malformed_slot_loads_empty_order() {
    let (_temp_file, db) = create_test_db();
    db.put_slot(DEFAULT_SLOT_KEY, "{not json").expect("Failed to write");

    let store = SqliteStore::new(db, DEFAULT_SLOT_KEY);

    assert_eq!(store.load(), Order::new());
}

#[test]
fn test_missing_addons_load_as_empty() {
    let store = MemoryStore::with_contents(r#"{"schemaVersion":1,"brandKit":true}"#);

    let order = store.load();

    assert!(order.addons().is_empty());
    assert!(order.brand_kit());
}

#[test]
fn test_encode_includes_every_field() {
    let text = encode(&Order::new()).expect("Failed to encode");
    let value: serde_json::Value = serde_json::from_str(&text).expect("Invalid JSON");

    for key in [
        "schemaVersion",
        "package",
        "brandKit",
        "industry",
        "pages",
        "addons",
        "pagePlans",
        "customBranding",
        "flowchartData",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
    assert_eq!(decode(&text), Some(Order::new()));
}
