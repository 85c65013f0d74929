use super::*;

fn seller_info() -> SellerInfo {
    SellerInfo { business_name: "Green Co".into(), address: "Toshkent".into(), experience: "3-5".into() }
}

fn store_with_storage() -> (SessionStore, Rc<MemoryStorage>) {
    let storage = Rc::new(MemoryStorage::default());
    (SessionStore::new(storage.clone()), storage)
}

// =============================================================
// read defaults
// =============================================================

#[test]
fn read_empty_store_is_default_session() {
    let store = SessionStore::in_memory();
    let session = store.read();
    assert_eq!(session, Session::default());
    assert_eq!(session.role_or_default(), Role::User);
    assert!(!session.is_authenticated());
}

#[test]
fn read_corrupt_record_returns_defaults() {
    let (store, storage) = store_with_storage();
    storage.set(SESSION_STORAGE_KEY, "{not json");
    assert_eq!(store.read(), Session::default());
}

#[test]
fn read_unknown_role_is_treated_as_missing() {
    let (store, storage) = store_with_storage();
    storage.set(SESSION_STORAGE_KEY, r#"{"token":"abc","role":"buyer"}"#);
    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert!(session.role.is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn read_malformed_seller_info_is_dropped() {
    let (store, storage) = store_with_storage();
    storage.set(SESSION_STORAGE_KEY, r#"{"role":"seller","seller_info":"oops"}"#);
    assert!(store.read().seller_info.is_none());
}

#[test]
fn read_hides_seller_info_stored_under_other_role() {
    let (store, storage) = store_with_storage();
    storage.set(
        SESSION_STORAGE_KEY,
        r#"{"role":"user","seller_info":{"businessName":"X","address":"","experience":""}}"#,
    );
    assert!(store.read().seller_info.is_none());
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_writes_only_present_fields() {
    let store = SessionStore::in_memory();
    store.save(&SessionUpdate {
        token: Some("t1".into()),
        email: Some("a@b.uz".into()),
        role: Some(Role::User),
        ..SessionUpdate::default()
    });
    store.save(&SessionUpdate { user_id: Some("7".into()), ..SessionUpdate::default() });

    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("t1"));
    assert_eq!(session.email.as_deref(), Some("a@b.uz"));
    assert_eq!(session.user_id.as_deref(), Some("7"));
    assert!(session.is_authenticated());
}

#[test]
fn token_without_role_is_not_authenticated() {
    let store = SessionStore::in_memory();
    store.save(&SessionUpdate { token: Some("t1".into()), ..SessionUpdate::default() });
    assert!(!store.read().is_authenticated());
    assert_eq!(store.token().as_deref(), Some("t1"));
}

#[test]
fn save_keeps_seller_info_for_sellers() {
    let store = SessionStore::in_memory();
    store.save(&SessionUpdate {
        role: Some(Role::Seller),
        seller_info: Some(seller_info()),
        ..SessionUpdate::default()
    });
    assert_eq!(store.read().seller_info, Some(seller_info()));
}

#[test]
fn save_drops_seller_info_for_non_seller_role() {
    let store = SessionStore::in_memory();
    store.save(&SessionUpdate {
        role: Some(Role::User),
        seller_info: Some(seller_info()),
        ..SessionUpdate::default()
    });
    assert!(store.read().seller_info.is_none());
}

#[test]
fn role_change_away_from_seller_removes_seller_info() {
    let (store, storage) = store_with_storage();
    store.save(&SessionUpdate {
        role: Some(Role::Seller),
        seller_info: Some(seller_info()),
        ..SessionUpdate::default()
    });
    store.save(&SessionUpdate { role: Some(Role::Admin), ..SessionUpdate::default() });

    assert!(store.read().seller_info.is_none());
    let raw = storage.get(SESSION_STORAGE_KEY).unwrap();
    assert!(!raw.contains("seller_info"));
}

#[test]
fn seller_info_never_outlives_seller_role_across_sequences() {
    let store = SessionStore::in_memory();
    let roles = [Some(Role::Seller), None, Some(Role::User), Some(Role::Seller), Some(Role::Admin), None];
    for (i, role) in roles.into_iter().enumerate() {
        if i == 3 {
            store.clear();
        }
        store.save(&SessionUpdate { role, seller_info: Some(seller_info()), ..SessionUpdate::default() });
        let session = store.read();
        if session.seller_info.is_some() {
            assert_eq!(session.role, Some(Role::Seller));
        }
    }
}

#[test]
fn clear_removes_every_field() {
    let store = SessionStore::in_memory();
    store.save(&SessionUpdate {
        token: Some("t".into()),
        user_id: Some("1".into()),
        email: Some("a@b.uz".into()),
        role: Some(Role::Seller),
        full_name: Some("Ali".into()),
        phone: Some("+998901234567".into()),
        seller_info: Some(seller_info()),
    });
    store.clear();
    assert_eq!(store.read(), Session::default());
    assert!(store.token().is_none());
}

#[test]
fn clones_share_backing_storage() {
    let store = SessionStore::in_memory();
    let other = store.clone();
    store.save(&SessionUpdate { token: Some("shared".into()), ..SessionUpdate::default() });
    assert_eq!(other.token().as_deref(), Some("shared"));
}
