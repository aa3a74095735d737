use taskpad_core::{
    CorruptStateError, FileAdapter, LoadOutcome, MemoryAdapter, PersistenceAdapter, Priority,
    TaskStore,
};

#[test]
fn open_without_persisted_state_adopts_the_seed() {
    let (store, outcome) = TaskStore::open(MemoryAdapter::new(), "tasks");

    assert_eq!(outcome, LoadOutcome::Seeded);
    assert_eq!(store.tasks(), TaskStore::<MemoryAdapter>::default_seed().as_slice());
    // Opening never persists by itself.
    assert_eq!(store.adapter().raw("tasks"), None);
}

#[test]
fn reopen_adopts_the_persisted_list_with_order_and_fields_intact() {
    let (mut store, _) = TaskStore::open(MemoryAdapter::with_value("tasks", "[]"), "tasks");
    store.add_task("first", Priority::Later).unwrap();
    let toggled = store.add_task("second", Priority::Urgent).unwrap();
    store.toggle_task(toggled.id).unwrap();

    let saved = store.adapter().raw("tasks").unwrap().to_string();
    let expected = store.tasks().to_vec();

    let (reopened, outcome) = TaskStore::open(MemoryAdapter::with_value("tasks", saved), "tasks");

    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(reopened.tasks(), expected.as_slice());
}

#[test]
fn reopen_continues_the_id_sequence() {
    let (mut store, _) = TaskStore::open(MemoryAdapter::with_value("tasks", "[]"), "tasks");
    let last = store.add_task("before restart", Priority::Normal).unwrap();
    let saved = store.adapter().raw("tasks").unwrap().to_string();

    let (mut reopened, _) = TaskStore::open(MemoryAdapter::with_value("tasks", saved), "tasks");
    let fresh = reopened.add_task("after restart", Priority::Normal).unwrap();

    assert!(fresh.id > last.id);
}

#[test]
fn malformed_value_recovers_with_the_seed() {
    let (store, outcome) = TaskStore::open(MemoryAdapter::with_value("tasks", "{not json"), "tasks");

    assert!(matches!(outcome, LoadOutcome::Recovered(CorruptStateError { .. })));
    assert_eq!(store.tasks(), TaskStore::<MemoryAdapter>::default_seed().as_slice());
}

#[test]
fn legacy_keyed_shape_is_treated_as_corrupt() {
    let legacy = r#"{"1":{"id":1,"description":"old","done":false,"priority":"normal"}}"#;
    let (_, outcome) = TaskStore::open(MemoryAdapter::with_value("tasks", legacy), "tasks");
    assert!(matches!(outcome, LoadOutcome::Recovered(_)));
}

#[test]
fn duplicate_persisted_ids_are_treated_as_corrupt() {
    let raw = r#"[
        {"id":1,"description":"one","done":false,"priority":"normal"},
        {"id":1,"description":"two","done":true,"priority":"later"}
    ]"#;
    let (store, outcome) = TaskStore::open(MemoryAdapter::with_value("tasks", raw), "tasks");

    match outcome {
        LoadOutcome::Recovered(err) => assert!(err.message.contains("duplicate task id")),
        other => panic!("expected Recovered, got {other:?}"),
    }
    assert_eq!(store.tasks(), TaskStore::<MemoryAdapter>::default_seed().as_slice());
}

#[test]
fn file_adapter_survives_a_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    let adapter = FileAdapter::new(dir.path());
    assert_eq!(adapter.load("tasks"), None);

    let (mut store, outcome) = TaskStore::open(adapter, "tasks");
    assert_eq!(outcome, LoadOutcome::Seeded);
    let added = store.add_task("pick up parcel", Priority::Urgent).unwrap();

    // A fresh adapter over the same directory stands in for a new process.
    let (reopened, outcome) = TaskStore::open(FileAdapter::new(dir.path()), "tasks");
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(reopened.len(), store.len());
    assert_eq!(reopened.get(added.id), Some(&added));
}
