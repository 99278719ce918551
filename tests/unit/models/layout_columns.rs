use super::*;

fn item(id: &str) -> Item {
    Item::new(id)
}

fn active(id: &str) -> Item {
    Item::new(id).with_active(true)
}

fn ids(layout: &Layout) -> Vec<Vec<&str>> {
    layout
        .columns()
        .iter()
        .map(|column| column.iter().map(|item| item.id.as_str()).collect())
        .collect()
}

/// a* -> b* -> d, with `x` and `c` collapsed siblings.
fn sample() -> Layout {
    Layout::from(vec![
        vec![active("a"), item("x")],
        vec![active("b"), item("c")],
        vec![item("d")],
    ])
}

#[test]
fn test_basic_queries() {
    let layout = Layout::from(vec![vec![active("a")], vec![item("b")], vec![]]);

    assert_eq!(layout.get_column_active_item(0), Some(&active("a")));
    assert_eq!(layout.get_column_active_item(1), None);
    assert_eq!(layout.get_column_active_item(7), None);
    assert_eq!(layout.delete_empty_columns(), layout);
}

#[test]
fn test_remove_item_example() {
    let layout = Layout::from(vec![vec![active("a")], vec![item("b")], vec![]]);
    let next = layout.remove_item("b");

    assert_eq!(ids(&next), vec![vec!["a"], vec![], vec![]]);
    assert_eq!(ids(&layout), vec![vec!["a"], vec!["b"], vec![]]);
}

#[test]
fn test_remove_item_shares_untouched_columns() {
    let layout = sample();
    let next = layout.remove_item("c");

    assert_eq!(next.columns()[1].len(), layout.columns()[1].len() - 1);
    assert!(next.columns()[0].ptr_eq(&layout.columns()[0]));
    assert!(next.columns()[2].ptr_eq(&layout.columns()[2]));
    assert!(!next.columns()[1].ptr_eq(&layout.columns()[1]));
}

#[test]
fn test_remove_unknown_item_is_noop() {
    let layout = sample();
    assert_eq!(layout.remove_item("missing"), layout);
}

#[test]
fn test_append_item_returns_new_layout() {
    let layout = sample();
    let next = layout.append_item_to_column(item("e"), 2).unwrap();

    assert_eq!(ids(&next)[2], vec!["d", "e"]);
    assert_eq!(ids(&layout)[2], vec!["d"]);
    assert!(next.columns()[0].ptr_eq(&layout.columns()[0]));
}

#[test]
fn test_append_item_to_missing_column() {
    let layout = sample();
    assert_eq!(
        layout.append_item_to_column(item("e"), 3),
        Err(LayoutError::ColumnOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_clear_following_columns() {
    let layout = sample();
    let next = layout.clear_following_columns(0);

    assert_eq!(next.len(), layout.len());
    assert_eq!(next.columns()[0], layout.columns()[0]);
    assert!(next.columns()[1].is_empty());
    assert!(next.columns()[2].is_empty());

    assert_eq!(layout.clear_following_columns(2), layout);
    assert_eq!(layout.clear_following_columns(10), layout);
}

#[test]
fn test_delete_empty_columns_keeps_minimum_width() {
    let layout = Layout::from(vec![vec![active("a")], vec![], vec![], vec![], vec![]]);
    let next = layout.delete_empty_columns();
    assert_eq!(next.len(), MIN_COLUMNS);
}

#[test]
fn test_delete_empty_columns_removes_whole_trailing_run() {
    let layout = Layout::from(vec![
        vec![active("a")],
        vec![active("b")],
        vec![active("c")],
        vec![],
        vec![],
        vec![],
    ]);
    assert_eq!(layout.delete_empty_columns().len(), 3);
}

#[test]
fn test_delete_empty_columns_stops_at_non_empty_column() {
    let layout = Layout::from(vec![
        vec![active("a")],
        vec![active("b")],
        vec![active("c")],
        vec![],
        vec![item("d")],
        vec![],
    ]);
    let next = layout.delete_empty_columns();
    assert_eq!(
        ids(&next),
        vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"], vec![]]
    );

    let layout = Layout::from(vec![
        vec![active("a")],
        vec![active("b")],
        vec![active("c")],
        vec![item("d")],
        vec![],
    ]);
    assert_eq!(layout.delete_empty_columns(), layout);
}

#[test]
fn test_delete_empty_columns_with_custom_minimum() {
    let layout = Layout::from(vec![vec![active("a")], vec![], vec![], vec![]]);
    assert_eq!(layout.delete_empty_columns_keeping(1).len(), 1);
}

#[test]
fn test_column_is_item_child() {
    let layout = sample();

    assert!(layout.column_is_item_child(1, "a"));
    assert!(layout.column_is_item_child(2, "a"));
    assert!(!layout.column_is_item_child(0, "a"));
    assert!(!layout.column_is_item_child(1, "b"));
    assert!(layout.column_is_item_child(2, "b"));
    assert!(!layout.column_is_item_child(2, "missing"));
}

#[test]
fn test_column_is_item_child_false_for_inactive_item() {
    let layout = sample();
    assert!(!layout.column_is_item_child(1, "x"));
    assert!(!layout.column_is_item_child(2, "c"));
}

#[test]
fn test_drop_is_valid() {
    let layout = sample();

    assert!(layout.drop_is_valid("d", Some("x"), Some(0)));
    assert!(layout.drop_is_valid("d", None, Some(0)));
    assert!(layout.drop_is_valid("b", Some("x"), None));
    assert!(!layout.drop_is_valid("d", Some("d"), Some(2)));
    assert!(!layout.drop_is_valid("a", None, Some(2)));
    assert!(!layout.drop_is_valid("d", None, None));
}

#[test]
fn test_check_drop_reports_reason() {
    let layout = sample();

    assert_eq!(
        layout.check_drop("d", None, None),
        Err(DropRejection::MissingTarget)
    );
    assert_eq!(
        layout.check_drop("c", Some("c"), Some(1)),
        Err(DropRejection::OntoItself)
    );
    assert_eq!(
        layout.check_drop("b", Some("d"), Some(2)),
        Err(DropRejection::IntoOwnDescendant)
    );
    assert_eq!(layout.check_drop("c", Some("d"), Some(2)), Ok(()));
}

#[test]
fn test_get_column_last_item() {
    let layout = sample();
    assert_eq!(
        layout.get_column_last_item(1).map(|i| i.id.as_str()),
        Some("c")
    );

    let layout = Layout::new(vec![Column::empty(); 3]);
    assert_eq!(layout.get_column_last_item(0), None);
}

#[test]
fn test_get_item_and_column_lookup() {
    let layout = sample();

    assert_eq!(layout.get_item("c"), Some(&item("c")));
    assert_eq!(layout.get_item("missing"), None);
    assert_eq!(layout.get_item_column_index("d"), Some(2));
    assert_eq!(layout.get_item_column_index("missing"), None);
    assert!(layout
        .get_item_column("c")
        .is_some_and(|column| column.ptr_eq(&layout.columns()[1])));
    assert!(layout.get_item_column("missing").is_none());
}

#[test]
fn test_item_is_parent() {
    let layout = sample();

    assert_eq!(layout.item_is_parent("b", "a"), Ok(true));
    assert_eq!(layout.item_is_parent("d", "a"), Ok(true));
    assert_eq!(layout.item_is_parent("x", "a"), Ok(false));
    assert_eq!(layout.item_is_parent("d", "c"), Ok(false));
    assert_eq!(layout.item_is_parent("missing", "a"), Ok(false));
}

#[test]
fn test_item_is_parent_with_unknown_parent() {
    let layout = sample();
    assert_eq!(
        layout.item_is_parent("b", "nope"),
        Err(LayoutError::ItemNotFound("nope".into()))
    );
}

#[test]
fn test_activate_item_deactivates_siblings() {
    let layout = sample();
    let next = layout.activate_item("c").unwrap();

    assert_eq!(
        next.get_column_active_item(1).map(|i| i.id.as_str()),
        Some("c")
    );
    assert!(!next.get_item("b").unwrap().active);
    assert!(next.columns()[0].ptr_eq(&layout.columns()[0]));

    let next = next.deactivate_item("c").unwrap();
    assert_eq!(next.get_column_active_item(1), None);
    assert!(layout.activate_item("missing").is_err());
}

#[test]
fn test_with_column_grows_layout() {
    let layout = sample();
    let next = layout.with_column(4, Column::new(vec![item("z")]));

    assert_eq!(next.len(), 5);
    assert!(next.columns()[3].is_empty());
    assert_eq!(ids(&next)[4], vec!["z"]);
}

#[test]
fn test_rejection_message_keys() {
    assert_eq!(
        DropRejection::MissingTarget.message_key(),
        "please-select-a-destination"
    );
    assert_eq!(
        DropRejection::IntoOwnDescendant.to_string(),
        "item dropped into its own subtree"
    );
    assert_eq!(
        DropRejection::OntoCollapsedItem.message_key(),
        "expand-the-destination-before-moving-items-into-it"
    );
}
