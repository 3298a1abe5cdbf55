use super::*;

fn sample_table() -> Table {
    Table::from_pairs(vec![
        (Field::new(TIME).with_unit("s"), vec![0.0, 1.0, 2.0]),
        (
            Field::new(POTENTIAL).with_unit("V").with_reference("RHE"),
            vec![0.1, 0.2, 0.3],
        ),
        (Field::new(CURRENT_DENSITY).with_unit("A / m2"), vec![1.0, 2.0, 3.0]),
    ])
    .unwrap()
}

#[test]
fn test_table_creation() {
    let table = sample_table();
    assert_eq!(table.len(), 3);
    assert_eq!(table.field_names(), vec!["t", "E", "j"]);
    assert_eq!(table.column("E").unwrap(), &[0.1, 0.2, 0.3]);
    assert_eq!(table.field("E").unwrap().reference.as_deref(), Some("RHE"));
    assert_eq!(table.row(1), Some(vec![1.0, 0.2, 2.0]));
    assert_eq!(table.row(3), None);
}

#[test]
fn test_duplicate_field_rejected() {
    let result = Table::from_pairs(vec![
        (Field::new("E"), vec![0.0]),
        (Field::new("E"), vec![1.0]),
    ]);
    assert_eq!(result, Err(SchemaError::DuplicateField("E".to_string())));
}

#[test]
fn test_length_mismatch_rejected() {
    let result = Table::from_pairs(vec![
        (Field::new("t"), vec![0.0, 1.0]),
        (Field::new("E"), vec![1.0]),
    ]);
    assert!(matches!(result, Err(SchemaError::LengthMismatch { .. })));
}

#[test]
fn test_arity_mismatch_rejected() {
    let result = Table::new(vec![Field::new("t")], vec![]);
    assert!(matches!(result, Err(SchemaError::ArityMismatch { .. })));
}

#[test]
fn test_replace_column_returns_new_table() {
    let table = sample_table();
    let field = table.field("j").unwrap().clone().with_unit("mA / cm2");
    let updated = table
        .replace_column("j", field, vec![0.1, 0.2, 0.3])
        .unwrap();

    assert_eq!(table.column("j").unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(updated.column("j").unwrap(), &[0.1, 0.2, 0.3]);
    assert_eq!(updated.field("j").unwrap().unit.as_deref(), Some("mA / cm2"));
}

#[test]
fn test_replace_column_rejects_wrong_length() {
    let table = sample_table();
    let field = table.field("j").unwrap().clone();
    assert!(table.replace_column("j", field, vec![1.0]).is_err());
}

#[test]
fn test_missing_field() {
    let table = sample_table();
    assert_eq!(
        table.field("x").unwrap_err(),
        SchemaError::FieldNotFound("x".to_string())
    );
}

#[test]
fn test_field_json_keys() {
    let mut field = Field::new("E").with_unit("V").with_reference("RHE");
    field.offset = Some(Offset {
        value: 0.35,
        unit: "V".to_string(),
    });
    field.scaling_factor = Some(ScalingFactor { value: 2.0 });
    field
        .extra
        .insert("type".to_string(), serde_json::json!("number"));

    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(json["scalingFactor"]["value"], 2.0);
    assert_eq!(json["offset"]["unit"], "V");
    assert_eq!(json["type"], "number");

    let restored: Field = serde_json::from_value(json).unwrap();
    assert_eq!(restored, field);
}

#[test]
fn test_field_scaling_default() {
    assert_eq!(Field::new("j").scaling(), 1.0);
}
