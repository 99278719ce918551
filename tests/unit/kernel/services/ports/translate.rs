use super::*;

#[test]
fn message_table_falls_back_to_key() {
    let mut table = MessageTable::new();
    table.insert("hello", "Hola");

    assert_eq!(table.translate("hello"), "Hola");
    assert_eq!(table.translate("missing-key"), "missing-key");
}

#[test]
fn message_table_from_settings() {
    let table = MessageTable::from_settings(&Settings::default());
    assert_eq!(table.len(), 4);
    assert_eq!(
        rejection_message(DropRejection::OntoItself, &table),
        "An item cannot be moved onto itself."
    );
}

#[test]
fn closures_translate() {
    let upper = |key: &str| key.to_uppercase();
    assert_eq!(
        rejection_message(DropRejection::MissingTarget, &upper),
        "PLEASE-SELECT-A-DESTINATION"
    );
}
