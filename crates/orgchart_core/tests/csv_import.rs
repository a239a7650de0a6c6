use orgchart_core::{parse_csv, CsvImportError, EntityKind, SkipReason};

#[test]
fn round_trip_person_and_department_rows() {
    let input = "id,name,title,reportsTo,type\n\
                 1,Ayşe Yılmaz,Genel Müdür,,person\n\
                 2,Yazılım,Birimi,1,department\n";

    let import = parse_csv(input).expect("well-formed csv should parse");
    assert!(import.skipped.is_empty());
    assert_eq!(import.entities.len(), 2);

    let person = &import.entities[0];
    assert_eq!(person.kind, EntityKind::Person);
    assert_eq!(person.id, "1");
    assert_eq!(person.name, "Ayşe Yılmaz");
    assert_eq!(person.title.as_deref(), Some("Genel Müdür"));
    assert_eq!(person.reports_to, None);
    assert!(!person.is_secretary);

    let department = &import.entities[1];
    assert_eq!(department.kind, EntityKind::Department);
    assert_eq!(department.id, "2");
    // Departments fold the title cell into the display name.
    assert_eq!(department.name, "Yazılım Birimi");
    assert_eq!(department.title, None);
    assert_eq!(department.reports_to.as_deref(), Some("1"));
}

#[test]
fn semicolon_delimiter_is_detected_from_the_header() {
    let input = "id;name;title;reportsTo\n1;Ali Vural;Uzman;\n";

    let import = parse_csv(input).expect("semicolon csv should parse");
    assert_eq!(import.entities.len(), 1);
    assert_eq!(import.entities[0].name, "Ali Vural");
    assert_eq!(import.entities[0].title.as_deref(), Some("Uzman"));
    assert_eq!(import.entities[0].reports_to, None);
}

#[test]
fn missing_id_column_is_fatal_and_names_the_header() {
    let input = "name,title\nAli,Uzman\n";

    let err = parse_csv(input).expect_err("missing id column must fail");
    assert!(
        matches!(&err, CsvImportError::MissingRequiredColumns { header } if header == "name,title")
    );
}

#[test]
fn blank_input_has_no_header() {
    assert_eq!(parse_csv("").unwrap_err(), CsvImportError::MissingHeader);
    assert_eq!(parse_csv("  \n  \n").unwrap_err(), CsvImportError::MissingHeader);
}

#[test]
fn type_is_inferred_from_unit_keywords_in_the_title() {
    let input = "id,name,title,reportsTo\n\
                 1,Destek,Birimi,\n\
                 2,Zeynep Şahin,Yazılım Mühendisi,1\n";

    let import = parse_csv(input).expect("inference csv should parse");
    assert_eq!(import.entities[0].kind, EntityKind::Department);
    assert_eq!(import.entities[0].name, "Destek Birimi");
    assert_eq!(import.entities[1].kind, EntityKind::Person);
}

#[test]
fn explicit_type_cell_overrides_inference() {
    let input = "id,name,title,type\n1,Hasan Çelik,Pazarlama Birimi Uzmanı,person\n";

    let import = parse_csv(input).expect("explicit type should parse");
    assert_eq!(import.entities[0].kind, EntityKind::Person);
    assert_eq!(
        import.entities[0].title.as_deref(),
        Some("Pazarlama Birimi Uzmanı")
    );
}

#[test]
fn rows_missing_id_or_name_are_skipped_not_fatal() {
    let input = "id,name,title\n1,Ali,Uzman\n,Veli,Uzman\n3,,Uzman\n4,Ayşe,Uzman\n";

    let import = parse_csv(input).expect("partial csv should parse");
    assert_eq!(import.entities.len(), 2);
    assert_eq!(import.skipped.len(), 2);
    assert_eq!(import.skipped[0].line_number, 3);
    assert_eq!(import.skipped[0].reason, SkipReason::MissingIdOrName);
    assert_eq!(import.skipped[1].line_number, 4);
}

#[test]
fn unrecognized_type_rows_are_skipped_with_the_value() {
    let input = "id,name,type\n1,Ali,robot\n2,Veli,person\n";

    let import = parse_csv(input).expect("csv should parse");
    assert_eq!(import.entities.len(), 1);
    assert_eq!(
        import.skipped[0].reason,
        SkipReason::UnknownType("robot".to_string())
    );
}

#[test]
fn quoted_headers_and_cells_are_unwrapped() {
    let input = "\"id\",\"name\",\"title\"\n\"1\",\"Ayşe Yılmaz\",\"Genel Müdür\"\n";

    let import = parse_csv(input).expect("quoted csv should parse");
    assert_eq!(import.entities[0].id, "1");
    assert_eq!(import.entities[0].name, "Ayşe Yılmaz");
    assert_eq!(import.entities[0].title.as_deref(), Some("Genel Müdür"));
}

#[test]
fn reports_header_alias_is_accepted() {
    let input = "id,name,reports\n1,Ali,\n2,Veli,1\n";

    let import = parse_csv(input).expect("alias csv should parse");
    assert_eq!(import.entities[0].reports_to, None);
    assert_eq!(import.entities[1].reports_to.as_deref(), Some("1"));
}

#[test]
fn person_rows_without_title_get_the_placeholder() {
    let input = "id,name,type\n1,Ali,person\n";

    let import = parse_csv(input).expect("csv should parse");
    assert_eq!(
        import.entities[0].title.as_deref(),
        Some("Unvan Belirtilmemiş")
    );
}

#[test]
fn crlf_line_endings_are_handled() {
    let input = "id,name,title\r\n1,Ali,Uzman\r\n";

    let import = parse_csv(input).expect("crlf csv should parse");
    assert_eq!(import.entities.len(), 1);
    assert_eq!(import.entities[0].title.as_deref(), Some("Uzman"));
}
