use polybook_core::service::mutate;
use polybook_core::store::layout;
use polybook_core::{ArchiveStore, DirStore, DocumentStore, Library, LocaleField, StoreError};
use std::collections::HashSet;

fn sample_library() -> Library {
    let mut library = Library::with_languages(vec!["en".to_string(), "ru".to_string()]);
    for (id, icon, name_en, name_ru) in [
        ("solar", "sun.png", "Solar System", "Солнечная система"),
        ("lunar", "moon.png", "The Moon", "Луна"),
    ] {
        mutate::create_category(&mut library, id).unwrap();
        let category = library.category_mut(id).unwrap();
        category.icon = icon.to_string();
        category.names.insert("en".to_string(), name_en.to_string());
        category.names.insert("ru".to_string(), name_ru.to_string());
        category.descriptions.insert(
            "en".to_string(),
            "Explore the solar system together".to_string(),
        );
        category.descriptions.insert(
            "ru".to_string(),
            "Изучаем солнечную систему вместе".to_string(),
        );
    }
    mutate::create_article(&mut library, "solar", "planets").unwrap();
    mutate::create_article(&mut library, "lunar", "craters").unwrap();
    library
        .locale_entry("en", "planets")
        .set(LocaleField::Title, "Planets");
    library
        .locale_entry("ru", "planets")
        .set(LocaleField::Title, "Планеты");
    library
}

fn assert_same_content(imported: &Library, original: &Library) {
    assert_eq!(imported.categories, original.categories);
    assert_eq!(imported.articles, original.articles);
    assert_eq!(imported.locales, original.locales);
    // Language order is backend-specific; only the set is guaranteed.
    let imported_langs: HashSet<&String> = imported.languages.iter().collect();
    let original_langs: HashSet<&String> = original.languages.iter().collect();
    assert_eq!(imported_langs, original_langs);
}

#[test]
fn folder_roundtrip_reproduces_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::new(dir.path());
    let mut library = sample_library();

    layout::export(&mut library, &mut store).unwrap();
    let imported = layout::import(&store).unwrap();

    assert_same_content(&imported, &library);
}

#[test]
fn archive_roundtrip_reproduces_the_model() {
    let mut store = ArchiveStore::new();
    let mut library = sample_library();

    layout::export(&mut library, &mut store).unwrap();
    let bytes = store.into_zip_bytes().unwrap();
    let decoded = ArchiveStore::from_zip_bytes(&bytes).unwrap();
    let imported = layout::import(&decoded).unwrap();

    assert_same_content(&imported, &library);
}

#[test]
fn article_partitions_are_split_by_category() {
    let mut store = ArchiveStore::new();
    let mut library = sample_library();
    layout::export(&mut library, &mut store).unwrap();

    let solar = store.read_document("articles/solar.json").unwrap();
    assert!(solar.contains("planets"));
    assert!(!solar.contains("craters"));

    let lunar = store.read_document("articles/lunar.json").unwrap();
    assert!(lunar.contains("craters"));
    assert!(!lunar.contains("planets"));
}

#[test]
fn locale_partitions_only_carry_available_languages() {
    let mut store = ArchiveStore::new();
    let mut library = sample_library();
    mutate::set_article_languages(&mut library, "planets", vec!["en".to_string()]).unwrap();
    layout::export(&mut library, &mut store).unwrap();

    let en = store.read_document("locales/en/solar.json").unwrap();
    assert!(en.contains("planets"));
    let ru = store.read_document("locales/ru/solar.json").unwrap();
    assert!(!ru.contains("planets"));
}

#[test]
fn export_backfills_a_missing_expected_entry_as_empty() {
    let mut store = ArchiveStore::new();
    let mut library = sample_library();
    library
        .locales
        .get_mut("en")
        .unwrap()
        .remove("craters")
        .unwrap();

    layout::export(&mut library, &mut store).unwrap();

    let doc = store.read_document("locales/en/lunar.json").unwrap();
    let entries: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert_eq!(entries["craters"]["title"], "");
    assert_eq!(entries["craters"]["linkLabel"], "");
    // The model itself was backfilled through the get-or-create accessor.
    assert!(library.peek_locale_entry("en", "craters").is_some());
}

#[test]
fn import_without_categories_document_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirStore::new(dir.path());

    let err = layout::import(&store).unwrap_err();
    assert!(matches!(err, StoreError::MissingDocument(path) if path == "categories.json"));
}

#[test]
fn import_with_missing_article_partition_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::new(dir.path());
    store
        .write_document("categories.json", r#"[{"id":"solar","icon":"sun.png"}]"#)
        .unwrap();
    std::fs::create_dir_all(dir.path().join("locales/en")).unwrap();

    let err = layout::import(&store).unwrap_err();
    assert!(matches!(err, StoreError::MissingDocument(path) if path == "articles/solar.json"));
}

#[test]
fn import_with_missing_locale_partition_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::new(dir.path());
    store
        .write_document("categories.json", r#"[{"id":"solar","icon":"sun.png"}]"#)
        .unwrap();
    store.write_document("articles/solar.json", "[]").unwrap();
    std::fs::create_dir_all(dir.path().join("locales/en")).unwrap();

    let err = layout::import(&store).unwrap_err();
    assert!(matches!(err, StoreError::MissingDocument(path) if path == "locales/en/solar.json"));
}

#[test]
fn malformed_document_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::new(dir.path());
    store.write_document("categories.json", "not json").unwrap();
    std::fs::create_dir_all(dir.path().join("locales")).unwrap();

    let err = layout::import(&store).unwrap_err();
    assert!(matches!(err, StoreError::Json { path, .. } if path == "categories.json"));
}

#[test]
fn archive_language_discovery_follows_entry_order() {
    let mut store = ArchiveStore::new();
    store.write_document("categories.json", "[]").unwrap();
    store.write_document("locales/ru/solar.json", "{}").unwrap();
    store.write_document("locales/en/solar.json", "{}").unwrap();

    assert_eq!(store.discover_languages().unwrap(), vec!["ru", "en"]);
}
