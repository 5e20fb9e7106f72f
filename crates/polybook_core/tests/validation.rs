use polybook_core::service::mutate;
use polybook_core::{validate, Article, Library, LocaleEntry, LocaleField, Violation};

fn valid_library() -> Library {
    let mut library = Library::with_languages(vec!["en".to_string(), "ru".to_string()]);
    mutate::create_category(&mut library, "solar").unwrap();
    let category = library.category_mut("solar").unwrap();
    category.icon = "sun.png".to_string();
    category.names.insert("en".to_string(), "Solar System".to_string());
    category
        .names
        .insert("ru".to_string(), "Солнечная система".to_string());
    category.descriptions.insert(
        "en".to_string(),
        "Explore the solar system together".to_string(),
    );
    category.descriptions.insert(
        "ru".to_string(),
        "Изучаем солнечную систему вместе".to_string(),
    );
    mutate::create_article(&mut library, "solar", "planets").unwrap();
    library
}

#[test]
fn minimal_fixture_validates_clean() {
    assert_eq!(validate(&valid_library()), Vec::new());
}

#[test]
fn duplicate_category_id_is_reported() {
    let mut library = valid_library();
    let duplicate = library.category("solar").unwrap().clone();
    library.categories.push(duplicate);

    let violations = validate(&library);
    assert!(violations.contains(&Violation::DuplicateCategoryId {
        id: "solar".to_string(),
    }));
}

#[test]
fn duplicate_article_id_is_reported() {
    let mut library = valid_library();
    let duplicate = library.article("planets").unwrap().clone();
    library.articles.push(duplicate);

    let violations = validate(&library);
    assert!(violations.contains(&Violation::DuplicateArticleId {
        id: "planets".to_string(),
    }));
}

#[test]
fn invalid_category_reference_is_reported() {
    let mut library = valid_library();
    let languages = library.languages.clone();
    library
        .articles
        .push(Article::new("orphan", "nope", &languages));
    library.ensure_locale_entries("orphan");

    let violations = validate(&library);
    assert!(violations.contains(&Violation::InvalidCategoryRef {
        article_id: "orphan".to_string(),
        category_id: "nope".to_string(),
    }));
}

#[test]
fn unknown_language_is_reported() {
    let mut library = valid_library();
    library.article_mut("planets").unwrap().available_languages = vec!["fr".to_string()];

    let violations = validate(&library);
    assert!(violations.contains(&Violation::UnknownLanguage {
        article_id: "planets".to_string(),
        language: "fr".to_string(),
    }));
}

#[test]
fn empty_language_set_is_reported() {
    let mut library = valid_library();
    library.article_mut("planets").unwrap().available_languages = Vec::new();

    let violations = validate(&library);
    assert!(violations.contains(&Violation::NoAvailableLanguages {
        article_id: "planets".to_string(),
    }));
}

#[test]
fn missing_icon_name_and_description_are_reported() {
    let mut library = valid_library();
    let category = library.category_mut("solar").unwrap();
    category.icon.clear();
    category.names.insert("ru".to_string(), String::new());
    category.descriptions.remove("en");

    let violations = validate(&library);
    assert!(violations.contains(&Violation::MissingCategoryIcon {
        id: "solar".to_string(),
    }));
    assert!(violations.contains(&Violation::MissingCategoryName {
        id: "solar".to_string(),
        language: "ru".to_string(),
    }));
    assert!(violations.contains(&Violation::MissingCategoryDescription {
        id: "solar".to_string(),
        language: "en".to_string(),
    }));
}

#[test]
fn description_word_count_bounds_are_inclusive() {
    let mut library = valid_library();

    // 4 and 5 words pass.
    let category = library.category_mut("solar").unwrap();
    category
        .descriptions
        .insert("en".to_string(), "Explore the solar system".to_string());
    assert!(validate(&library).is_empty());

    // 3 words fail.
    let category = library.category_mut("solar").unwrap();
    category
        .descriptions
        .insert("en".to_string(), "Explore the system".to_string());
    assert!(validate(&library).contains(&Violation::DescriptionWordCount {
        id: "solar".to_string(),
        language: "en".to_string(),
        words: 3,
    }));

    // 6 words fail.
    let category = library.category_mut("solar").unwrap();
    category.descriptions.insert(
        "en".to_string(),
        "Explore the whole solar system today".to_string(),
    );
    assert!(validate(&library).contains(&Violation::DescriptionWordCount {
        id: "solar".to_string(),
        language: "en".to_string(),
        words: 6,
    }));
}

#[test]
fn missing_locale_entry_is_reported() {
    let mut library = valid_library();
    library
        .locales
        .get_mut("en")
        .unwrap()
        .remove("planets")
        .unwrap();

    let violations = validate(&library);
    assert!(violations.contains(&Violation::MissingLocaleEntry {
        article_id: "planets".to_string(),
        language: "en".to_string(),
    }));
}

#[test]
fn locale_entry_missing_field_is_reported() {
    let mut library = valid_library();
    let incomplete: LocaleEntry =
        serde_json::from_str(r#"{"title":"Planets","text":"...","linkLabel":""}"#).unwrap();
    library
        .locales
        .get_mut("en")
        .unwrap()
        .insert("planets".to_string(), incomplete);

    let violations = validate(&library);
    assert!(violations.contains(&Violation::MissingLocaleField {
        article_id: "planets".to_string(),
        language: "en".to_string(),
        field: LocaleField::Link,
    }));
}

#[test]
fn dangling_entries_are_reported_per_language() {
    let mut library = valid_library();
    library.locale_entry("en", "ghost");
    library.locale_entry("ru", "ghost");

    let violations = validate(&library);
    assert!(violations.contains(&Violation::DanglingLocaleEntry {
        article_id: "ghost".to_string(),
        language: "en".to_string(),
    }));
    assert!(violations.contains(&Violation::DanglingLocaleEntry {
        article_id: "ghost".to_string(),
        language: "ru".to_string(),
    }));
}

#[test]
fn all_violations_are_enumerated_in_one_pass() {
    let mut library = valid_library();
    library.category_mut("solar").unwrap().icon.clear();
    library.article_mut("planets").unwrap().category_id = "nope".to_string();
    library.locale_entry("en", "ghost");

    let violations = validate(&library);
    assert!(violations.len() >= 3);
    assert!(violations.contains(&Violation::MissingCategoryIcon {
        id: "solar".to_string(),
    }));
    assert!(violations.contains(&Violation::InvalidCategoryRef {
        article_id: "planets".to_string(),
        category_id: "nope".to_string(),
    }));
    assert!(violations.contains(&Violation::DanglingLocaleEntry {
        article_id: "ghost".to_string(),
        language: "en".to_string(),
    }));
}

#[test]
fn violations_render_operator_readable_messages() {
    let violation = Violation::DescriptionWordCount {
        id: "solar".to_string(),
        language: "en".to_string(),
        words: 7,
    };
    assert_eq!(
        violation.to_string(),
        "category solar description (en) should be 4-5 words, found 7"
    );

    let violation = Violation::MissingLocaleField {
        article_id: "planets".to_string(),
        language: "en".to_string(),
        field: LocaleField::LinkLabel,
    };
    assert_eq!(
        violation.to_string(),
        "locale entry planets (en) is missing field linkLabel"
    );
}
