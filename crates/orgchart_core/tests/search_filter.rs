use orgchart_core::{sample_org, search_entities, Entity, SearchCursor};

#[test]
fn blank_query_means_search_is_inactive() {
    let entities = sample_org();
    assert!(search_entities(&entities, "").is_empty());
    assert!(search_entities(&entities, "   ").is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let entities = sample_org();
    let lower = search_entities(&entities, "fatma");
    let upper = search_entities(&entities, "FATMA");

    assert_eq!(lower.len(), 1);
    assert_eq!(lower, upper);
}

#[test]
fn names_match_for_every_kind_and_titles_for_persons_only() {
    let entities = sample_org();

    // Both departments carry "Birimi" in their names.
    let by_name = search_entities(&entities, "birimi");
    assert_eq!(by_name.len(), 2);

    // "Uzman" appears only inside person titles.
    let by_title = search_entities(&entities, "uzman");
    assert_eq!(by_title.len(), 2);
}

#[test]
fn results_keep_source_order() {
    let entities = sample_org();
    let results = search_entities(&entities, "birimi");

    let expected: Vec<&str> = entities
        .iter()
        .filter(|entity| entity.name.contains("Birimi"))
        .map(|entity| entity.id.as_str())
        .collect();
    let got: Vec<&str> = results.iter().map(String::as_str).collect();
    assert_eq!(got, expected);
}

#[test]
fn department_title_field_never_matches() {
    // A department cannot carry a title, so a query hitting only titles must
    // skip departments even if their name happens to be empty.
    let entities = vec![
        Entity::department("d1", "", None),
        Entity::person("p1", "Ali", "Gizli Uzman", None),
    ];
    let results = search_entities(&entities, "gizli");
    assert_eq!(results, vec!["p1".to_string()]);
}

#[test]
fn cursor_follows_refresh_and_wraps() {
    let entities = sample_org();
    let mut cursor = SearchCursor::new();

    cursor.refresh(&entities, "uzman");
    assert_eq!(cursor.len(), 2);
    assert_eq!(cursor.current_index(), Some(0));

    cursor.next();
    assert_eq!(cursor.current_index(), Some(1));
    cursor.next();
    assert_eq!(cursor.current_index(), Some(0));
    cursor.prev();
    assert_eq!(cursor.current_index(), Some(1));

    // Refreshing with a dead query empties the list and parks the cursor.
    cursor.refresh(&entities, "");
    assert!(cursor.is_empty());
    assert_eq!(cursor.current_id(), None);
    cursor.next();
    assert_eq!(cursor.current_id(), None);
}
