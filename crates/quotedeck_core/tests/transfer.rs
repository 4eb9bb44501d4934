use quotedeck_core::db::open_db_in_memory;
use quotedeck_core::{
    export_quotes, import_quotes, Quote, QuoteStore, SqliteStateStore, TransferError,
};
use rusqlite::Connection;

fn empty_store(conn: &Connection) -> QuoteStore<SqliteStateStore<'_>> {
    // Persist an explicit empty list so load() does not adopt the seeds.
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES ('quotes', '[]');",
        [],
    )
    .unwrap();
    QuoteStore::load(SqliteStateStore::new(conn)).unwrap()
}

#[test]
fn export_produces_pretty_printed_json_array() {
    let conn = open_db_in_memory().unwrap();
    let store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();

    let payload = export_quotes(store.all()).unwrap();

    assert!(payload.starts_with("[\n"));
    assert!(payload.contains("  {\n"));
    assert!(payload.contains("\"text\""));
    let parsed: Vec<Quote> = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed, store.all());
}

#[test]
fn export_of_empty_list_is_refused() {
    let conn = open_db_in_memory().unwrap();
    let store = empty_store(&conn);

    let err = export_quotes(store.all()).unwrap_err();
    assert!(matches!(err, TransferError::Empty));
    assert!(store.all().is_empty());
}

#[test]
fn export_then_import_into_fresh_store_roundtrips() {
    let source_conn = open_db_in_memory().unwrap();
    let mut source = QuoteStore::load(SqliteStateStore::new(&source_conn)).unwrap();
    source.add("round trip", "testing").unwrap();
    let payload = export_quotes(source.all()).unwrap();

    let target_conn = open_db_in_memory().unwrap();
    let mut target = empty_store(&target_conn);
    let appended = import_quotes(&payload, &mut target).unwrap();

    assert_eq!(appended, source.all().len());
    assert_eq!(target.all(), source.all());
}

#[test]
fn import_skips_batch_duplicates_and_malformed_entries() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);

    let payload = r#"[
        {"text":"A","category":"x"},
        {"text":"A","category":"x"},
        {"text":"B"}
    ]"#;
    let appended = import_quotes(payload, &mut store).unwrap();

    assert_eq!(appended, 1);
    assert_eq!(store.all(), &[Quote::new("A", "x")]);
}

#[test]
fn import_skips_entries_already_present_in_the_store() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    let before = store.all().len();

    let payload = export_quotes(store.all()).unwrap();
    let appended = import_quotes(&payload, &mut store).unwrap();

    assert_eq!(appended, 0);
    assert_eq!(store.all().len(), before);
}

#[test]
fn import_rejects_non_array_top_level_with_no_partial_effect() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);

    let err = import_quotes(r#"{"text":"A","category":"x"}"#, &mut store).unwrap_err();
    assert!(matches!(err, TransferError::Format(_)));
    assert!(store.all().is_empty());
}

#[test]
fn import_rejects_unparsable_payload() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);

    let err = import_quotes("not json at all", &mut store).unwrap_err();
    assert!(matches!(err, TransferError::Format(_)));
    assert!(store.all().is_empty());
}

#[test]
fn import_skips_entries_with_non_string_fields() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);

    let payload = r#"[
        {"text": 5, "category": "x"},
        {"text": "ok", "category": "x"}
    ]"#;
    let appended = import_quotes(payload, &mut store).unwrap();

    assert_eq!(appended, 1);
    assert_eq!(store.all(), &[Quote::new("ok", "x")]);
}
