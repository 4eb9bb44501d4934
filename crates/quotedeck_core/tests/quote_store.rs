use quotedeck_core::db::open_db_in_memory;
use quotedeck_core::{
    seed_quotes, Quote, QuoteStore, QuoteValidationError, SqliteStateStore, StoreError,
};

#[test]
fn first_load_adopts_seed_list_and_persists_it() {
    let conn = open_db_in_memory().unwrap();

    let store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    assert_eq!(store.all(), seed_quotes().as_slice());

    // A second store over the same connection must see the persisted seeds,
    // not re-seed.
    let reloaded = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    assert_eq!(reloaded.all(), seed_quotes().as_slice());
}

#[test]
fn add_appends_exactly_one_entry_at_the_tail() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    let before = store.all().len();

    store.add("Stay hungry, stay foolish.", "motivation").unwrap();

    assert_eq!(store.all().len(), before + 1);
    let last = store.all().last().unwrap();
    assert_eq!(last.text, "Stay hungry, stay foolish.");
    assert_eq!(last.category, "motivation");
}

#[test]
fn add_trims_input_before_storing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();

    store.add("  spaced out  ", "  zen  ").unwrap();

    let last = store.all().last().unwrap();
    assert_eq!(last.text, "spaced out");
    assert_eq!(last.category, "zen");
}

#[test]
fn add_with_blank_field_leaves_list_and_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    let before = store.all().to_vec();

    let text_err = store.add("   ", "life").unwrap_err();
    assert!(matches!(
        text_err,
        StoreError::Validation(QuoteValidationError::EmptyText)
    ));

    let category_err = store.add("valid text", " \t ").unwrap_err();
    assert!(matches!(
        category_err,
        StoreError::Validation(QuoteValidationError::EmptyCategory)
    ));

    assert_eq!(store.all(), before.as_slice());
    let reloaded = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    assert_eq!(reloaded.all(), before.as_slice());
}

#[test]
fn mutations_are_visible_to_a_fresh_store_over_the_same_state() {
    let conn = open_db_in_memory().unwrap();

    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    store.add("persisted", "check").unwrap();
    drop(store);

    let reloaded = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    let last = reloaded.all().last().unwrap();
    assert_eq!(last.text, "persisted");
}

#[test]
fn merge_drops_identity_duplicates_and_counts_appends() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    let before = store.all().len();

    let existing = store.all()[0].clone();
    let appended = store
        .merge(vec![
            existing,
            Quote::new("brand new", "fresh"),
            Quote::new("another new", "fresh"),
        ])
        .unwrap();

    assert_eq!(appended, 2);
    assert_eq!(store.all().len(), before + 2);
}

#[test]
fn merge_suppresses_duplicates_within_the_batch_itself() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();

    let appended = store
        .merge(vec![Quote::new("A", "x"), Quote::new("A", "x")])
        .unwrap();

    assert_eq!(appended, 1);
    let duplicates = store
        .all()
        .iter()
        .filter(|q| q.text == "A" && q.category == "x")
        .count();
    assert_eq!(duplicates, 1);
}

#[test]
fn merge_skips_incomplete_candidates_silently() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    let before = store.all().len();

    let appended = store
        .merge(vec![
            Quote::new("", "x"),
            Quote::new("text only", ""),
            Quote::new("complete", "x"),
        ])
        .unwrap();

    assert_eq!(appended, 1);
    assert_eq!(store.all().len(), before + 1);
}

#[test]
fn merge_treats_whitespace_and_case_variants_as_distinct() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();

    let appended = store
        .merge(vec![
            Quote::new("A", "x"),
            Quote::new("A ", "x"),
            Quote::new("a", "x"),
        ])
        .unwrap();

    assert_eq!(appended, 3);
}

#[test]
fn merge_result_contains_no_identity_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();

    store
        .merge(vec![
            Quote::new("A", "x"),
            Quote::new("B", "x"),
            Quote::new("A", "x"),
            Quote::new("A", "y"),
        ])
        .unwrap();

    let list = store.all();
    for (i, left) in list.iter().enumerate() {
        for right in &list[i + 1..] {
            assert!(
                !left.same_identity(right),
                "duplicate pair: {left:?} / {right:?}"
            );
        }
    }
}

#[test]
fn selected_category_defaults_to_all_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut store = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();

    assert_eq!(store.selected_category().unwrap(), "all");

    store.set_selected_category("life").unwrap();
    assert_eq!(store.selected_category().unwrap(), "life");

    let reloaded = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap();
    assert_eq!(reloaded.selected_category().unwrap(), "life");
}

#[test]
fn load_rejects_corrupt_persisted_list() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES ('quotes', 'not json');",
        [],
    )
    .unwrap();

    let err = QuoteStore::load(SqliteStateStore::new(&conn)).unwrap_err();
    assert!(err.to_string().contains("invalid persisted state"));
}
