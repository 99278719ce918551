use super::*;
use serde_json::json;

#[test]
fn test_item_payload_round_trips_through_json() {
    let layout: Layout = serde_json::from_value(json!([
        [{"id": "a", "active": true, "title": "Home", "hasChild": true}],
        [{"plid": "b", "title": "Blog"}],
        []
    ]))
    .unwrap();

    let a = &layout.columns()[0].items()[0];
    assert_eq!(a.id, "a");
    assert!(a.active);
    assert_eq!(a.payload.get("title"), Some(&json!("Home")));

    let b = &layout.columns()[1].items()[0];
    assert_eq!(b.id, "b");
    assert!(!b.active);

    let value = serde_json::to_value(&layout).unwrap();
    assert_eq!(value[0][0]["hasChild"], json!(true));
    assert_eq!(value[1][0]["id"], json!("b"));
    assert!(value[1][0].get("plid").is_none());
    assert_eq!(value[2], json!([]));
}

#[test]
fn test_validate_accepts_well_formed_layout() {
    let layout = Layout::from(vec![
        vec![Item::new("a").with_active(true), Item::new("b")],
        vec![Item::new("c").with_field("title", "Contact")],
        vec![],
    ]);
    assert_eq!(layout.validate(), Ok(()));
}

#[test]
fn test_validate_rejects_duplicate_ids_across_columns() {
    let layout = Layout::from(vec![vec![Item::new("a")], vec![Item::new("a")]]);
    assert_eq!(
        layout.validate(),
        Err(LayoutError::DuplicateItemId("a".into()))
    );
}

#[test]
fn test_validate_rejects_two_active_items_in_one_column() {
    let layout = Layout::from(vec![
        vec![Item::new("a")],
        vec![Item::new("b").with_active(true), Item::new("c").with_active(true)],
    ]);
    assert_eq!(
        layout.validate(),
        Err(LayoutError::MultipleActiveItems { column: 1 })
    );
}

#[test]
fn test_column_ptr_eq_distinguishes_equal_copies() {
    let column = Column::new(vec![Item::new("a")]);
    let shared = column.clone();
    let copy = Column::new(vec![Item::new("a")]);

    assert!(column.ptr_eq(&shared));
    assert_eq!(column, copy);
    assert!(!column.ptr_eq(&copy));
}

#[test]
fn test_error_display() {
    assert_eq!(
        LayoutError::ItemNotFound("x".into()).to_string(),
        "item not found: x"
    );
    assert_eq!(
        LayoutError::ColumnOutOfRange { index: 5, len: 3 }.to_string(),
        "column 5 out of range (layout has 3 columns)"
    );
}
