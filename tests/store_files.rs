use tempfile::tempdir;
use word_widget::store::{JsonFileStore, WidgetStore};

#[test]
fn missing_file_yields_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widget_data.json");
    let store = JsonFileStore::load(path.to_str().unwrap()).unwrap();
    assert_eq!(store.get("word"), None);
    assert_eq!(store.get("definition"), None);
}

#[test]
fn values_load_from_json_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widget_data.json");
    std::fs::write(
        &path,
        r#"{"word": "Sonder", "definition": "The realization that every passerby has a life as vivid as your own"}"#,
    )
    .unwrap();

    let store = JsonFileStore::load(path.to_str().unwrap()).unwrap();
    assert_eq!(store.get("word").as_deref(), Some("Sonder"));
    assert!(store.get("definition").unwrap().starts_with("The realization"));
    assert_eq!(store.get("example"), None);
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widget_data.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(JsonFileStore::load(path.to_str().unwrap()).is_err());
}
