use crate::ProjectRecord;

#[test]
fn test_project_record_new() {
    let record = ProjectRecord::new("Site A".to_string(), "A demo".to_string(), None);

    assert_eq!(record.name, "Site A");
    assert_eq!(record.description, "A demo");
    assert_eq!(record.image, None);
}

#[test]
fn test_project_record_serializes_missing_image_as_null() {
    let record = ProjectRecord::new("Site A".to_string(), "A demo".to_string(), None);

    let json = serde_json::to_string(&record).unwrap();

    assert_eq!(json, r#"{"name":"Site A","description":"A demo","image":null}"#);
}

#[test]
fn test_project_record_serializes_image_path() {
    let record = ProjectRecord::new(
        "Gallery".to_string(),
        "Photos".to_string(),
        Some("/uploads/abc123.png".to_string()),
    );

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["image"], "/uploads/abc123.png");
}

#[test]
fn test_project_record_deserializes_with_missing_fields() {
    let record: ProjectRecord = serde_json::from_str(r#"{"image":null}"#).unwrap();

    assert_eq!(record, ProjectRecord::default());
}

#[test]
fn test_project_record_preserves_text_verbatim() {
    let name = "  Ünïcode <b>name</b>  ";
    let description = "line one\nline two \"quoted\"";
    let record = ProjectRecord::new(name.to_string(), description.to_string(), None);

    let json = serde_json::to_string(&record).unwrap();
    let parsed: ProjectRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.name, name);
    assert_eq!(parsed.description, description);
}
