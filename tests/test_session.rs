use std::sync::Arc;
use std::thread;

use minicat::session::{Session, SessionStore};

#[test]
fn test_find_on_empty_store() {
    let store = SessionStore::new();

    assert!(store.is_empty());
    assert!(store.find("anything").is_none());
    assert!(store.find("").is_none());
}

#[test]
fn test_add_then_find() {
    let store = SessionStore::new();
    let session = Arc::new(Session::new());

    store.add(Arc::clone(&session));

    let found = store.find(session.id()).unwrap();
    assert_eq!(*found, *session);
    assert!(Arc::ptr_eq(&found, &session));
}

#[test]
fn test_find_unknown_id() {
    let store = SessionStore::new();
    store.add(Arc::new(Session::with_id("known")));

    assert!(store.find("unknown").is_none());
}

#[test]
fn test_add_overwrites_same_id() {
    let store = SessionStore::new();
    let first = Arc::new(Session::with_id("same"));
    let second = Arc::new(Session::with_id("same"));
    second.set_attribute("marker", 2_u32);

    store.add(first);
    store.add(Arc::clone(&second));

    assert_eq!(store.len(), 1);
    assert!(Arc::ptr_eq(&store.find("same").unwrap(), &second));
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Session::new();
    let b = Session::new();

    assert_ne!(a.id(), b.id());
    assert!(!a.id().is_empty());
}

#[test]
fn test_attributes_visible_through_store() {
    let store = SessionStore::new();
    let session = Arc::new(Session::with_id("s1"));
    store.add(Arc::clone(&session));

    session.set_attribute("user", String::from("gugu"));

    let found = store.find("s1").unwrap();
    assert_eq!(found.attribute::<String>("user").as_deref(), Some(&String::from("gugu")));
    assert!(found.attribute::<u32>("user").is_none());
    assert!(found.attribute::<String>("missing").is_none());
}

#[test]
fn test_concurrent_adds_are_all_retrievable() {
    let store = Arc::new(SessionStore::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let session = Arc::new(Session::with_id(format!("session-{}", i)));
                store.add(session);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 8);
    for i in 0..8 {
        assert!(store.find(&format!("session-{}", i)).is_some());
    }
}
