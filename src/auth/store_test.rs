use super::*;

fn identity() -> Identity {
    Identity {
        id: "u-1".to_owned(),
        name: "Admin Demo".to_owned(),
        email: "admin@demo.com".to_owned(),
        role: "admin".to_owned(),
        token: "tok-123".to_owned(),
        expires_at: Some(1_700_000_000_000),
    }
}

#[test]
fn save_then_load_round_trips_identity() {
    let store = MemorySessionStore::new();
    let id = identity();

    store.save(Some(&id));
    assert_eq!(store.load(), Some(id));
}

#[test]
fn load_on_empty_store_is_absent() {
    let store = MemorySessionStore::new();
    assert_eq!(store.load(), None);
}

#[test]
fn save_absent_clears_the_record() {
    let store = MemorySessionStore::new();
    store.save(Some(&identity()));

    store.save(None);
    assert_eq!(store.load(), None);
    assert_eq!(store.raw(), None);
}

#[test]
fn clear_removes_the_record() {
    let store = MemorySessionStore::new();
    store.save(Some(&identity()));

    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn corrupted_record_loads_as_absent() {
    let store = MemorySessionStore::new();
    store.set_raw("{not json");
    assert_eq!(store.load(), None);
}

#[test]
fn wrong_shape_record_loads_as_absent() {
    let store = MemorySessionStore::new();
    store.set_raw(r#"{"someOther":"shape"}"#);
    assert_eq!(store.load(), None);
}

#[test]
fn record_with_empty_token_loads_as_absent() {
    let store = MemorySessionStore::new();
    let mut id = identity();
    id.token = String::new();
    store.set_raw(serde_json::to_string(&id).expect("serialize"));

    assert_eq!(store.load(), None);
}

#[test]
fn store_holds_at_most_one_record() {
    let store = MemorySessionStore::new();
    store.save(Some(&identity()));

    let mut replacement = identity();
    replacement.id = "u-2".to_owned();
    replacement.token = "tok-456".to_owned();
    store.save(Some(&replacement));

    assert_eq!(store.load(), Some(replacement));
}

#[test]
fn web_store_is_inert_off_browser() {
    let store = WebSessionStore;
    store.save(Some(&identity()));
    assert_eq!(store.load(), None);
    store.clear();
}
