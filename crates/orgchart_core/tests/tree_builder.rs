use orgchart_core::{build_forest, forest_size, sample_org, Entity, TreeNode};

fn person(id: &str, name: &str, title: &str, parent: Option<&str>) -> Entity {
    Entity::person(id, name, title, parent.map(str::to_string))
}

fn secretary(id: &str, name: &str, manager: &str) -> Entity {
    let mut entity = person(id, name, "Sekreter", Some(manager));
    entity.is_secretary = true;
    entity
}

fn collect_ids(forest: &[TreeNode], into: &mut Vec<String>) {
    for node in forest {
        into.push(node.entity.id.clone());
        collect_ids(&node.children, into);
        if let Some(secretary) = node.secretary.as_deref() {
            collect_ids(std::slice::from_ref(secretary), into);
        }
    }
}

#[test]
fn forest_node_count_matches_input_size() {
    let entities = sample_org();
    let forest = build_forest(&entities);

    assert_eq!(forest.len(), 1);
    assert_eq!(forest_size(&forest), entities.len());
}

#[test]
fn every_entity_appears_exactly_once() {
    let mut entities = sample_org();
    let root_id = entities[0].id.clone();
    entities.push(secretary("sec-1", "Ayla Kaya", &root_id));

    let forest = build_forest(&entities);
    let mut seen = Vec::new();
    collect_ids(&forest, &mut seen);

    let mut expected: Vec<String> = entities.iter().map(|entity| entity.id.clone()).collect();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn secretary_fills_the_side_slot_not_children() {
    let entities = vec![
        person("mgr", "Müdür", "Genel Müdür", None),
        person("sub", "Çalışan", "Uzman", Some("mgr")),
        secretary("sec", "Sekreter", "mgr"),
    ];

    let forest = build_forest(&entities);
    let manager = &forest[0];
    assert_eq!(manager.children.len(), 1);
    assert_eq!(manager.children[0].entity.id, "sub");

    let side = manager.secretary.as_deref().expect("secretary slot filled");
    assert_eq!(side.entity.id, "sec");
}

#[test]
fn later_secretary_wins_and_earlier_is_absent() {
    let entities = vec![
        person("mgr", "Müdür", "Genel Müdür", None),
        secretary("sec-1", "Önceki", "mgr"),
        secretary("sec-2", "Sonraki", "mgr"),
    ];

    let forest = build_forest(&entities);
    let manager = &forest[0];
    assert!(manager.children.is_empty());
    assert_eq!(
        manager.secretary.as_deref().map(|node| node.entity.id.as_str()),
        Some("sec-2")
    );

    let mut seen = Vec::new();
    collect_ids(&forest, &mut seen);
    assert!(!seen.contains(&"sec-1".to_string()));
}

#[test]
fn secretary_flag_on_root_keeps_the_entity_a_root() {
    let mut lone = secretary("sec", "Sekreter", "gone");
    lone.reports_to = None;

    let forest = build_forest(&[lone]);
    assert_eq!(forest.len(), 1);
    assert!(forest[0].secretary.is_none());
}

#[test]
fn roots_and_children_keep_source_order() {
    let entities = vec![
        person("r2", "İkinci Kök", "", None),
        person("r1", "Birinci Kök", "", None),
        person("c1", "Çocuk", "", Some("r2")),
        person("c2", "Çocuk", "", Some("r2")),
    ];

    let forest = build_forest(&entities);
    let roots: Vec<&str> = forest.iter().map(|node| node.entity.id.as_str()).collect();
    assert_eq!(roots, ["r2", "r1"]);

    let children: Vec<&str> = forest[0]
        .children
        .iter()
        .map(|node| node.entity.id.as_str())
        .collect();
    assert_eq!(children, ["c1", "c2"]);
}

#[test]
fn rebuild_is_pure_and_repeatable() {
    let entities = sample_org();
    assert_eq!(build_forest(&entities), build_forest(&entities));
}
