//! Favorites Store properties and scenarios.

use std::sync::Arc;

use gamedex::adapter::outbound::storage::{FileStorage, MemoryStorage};
use gamedex::application::favorites::FAVORITES_KEY;
use gamedex::application::FavoritesStore;
use gamedex::domain::{AddOutcome, GameId, RemoveOutcome};
use gamedex::testkit::domain::{named_record, record};
use gamedex::testkit::storage::memory_store;

#[tokio::test]
async fn scenario_add_duplicate_then_remove() {
    let (_, store) = memory_store();

    let ocarina = named_record("game-1", "Ocarina of Time");
    assert_eq!(store.add(ocarina.clone()).await.unwrap(), AddOutcome::Added);

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all.get(&GameId::new("game-1")), Some(&ocarina));

    assert_eq!(
        store.add(ocarina.clone()).await.unwrap(),
        AddOutcome::AlreadyPresent
    );
    let all = store.get_all().await.unwrap();
    assert_eq!(all.ids(), vec![GameId::new("game-1")]);

    assert_eq!(
        store.remove(&GameId::new("game-1")).await.unwrap(),
        RemoveOutcome::Removed
    );
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn scenario_clear_two_favorites() {
    let (_, store) = memory_store();
    store.add(record("game-1")).await.unwrap();
    store.add(record("game-2")).await.unwrap();

    store.clear().await.unwrap();

    assert!(store.get_all().await.unwrap().is_empty());
    assert!(!store.contains(&GameId::new("game-1")).await.unwrap());
}

#[tokio::test]
async fn add_is_idempotent() {
    let (_, once) = memory_store();
    once.add(record("game-1")).await.unwrap();

    let (_, twice) = memory_store();
    twice.add(record("game-1")).await.unwrap();
    twice.add(record("game-1")).await.unwrap();

    assert_eq!(once.get_all().await.unwrap(), twice.get_all().await.unwrap());
}

#[tokio::test]
async fn removing_absent_id_leaves_collection_unchanged() {
    let (_, store) = memory_store();
    store.add(record("game-1")).await.unwrap();
    let before = store.get_all().await.unwrap();

    assert_eq!(
        store.remove(&GameId::new("game-404")).await.unwrap(),
        RemoveOutcome::NotPresent
    );
    assert_eq!(store.get_all().await.unwrap(), before);
}

#[tokio::test]
async fn round_trip_add_then_remove() {
    let (_, store) = memory_store();
    let r = record("game-7");

    store.add(r.clone()).await.unwrap();
    assert!(store.get_all().await.unwrap().iter().any(|x| x == &r));

    store.remove(&r.id).await.unwrap();
    assert!(!store.get_all().await.unwrap().contains(&r.id));
}

#[tokio::test]
async fn clear_resets_regardless_of_contents() {
    let (_, store) = memory_store();
    store.clear().await.unwrap();
    assert!(store.get_all().await.unwrap().is_empty());

    for i in 0..10 {
        store.add(record(&format!("game-{i}"))).await.unwrap();
    }
    store.clear().await.unwrap();
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn contains_agrees_with_get_all() {
    let (_, store) = memory_store();
    for id in ["a", "b", "c"] {
        store.add(record(id)).await.unwrap();
    }
    store.remove(&GameId::new("b")).await.unwrap();

    let all = store.get_all().await.unwrap();
    for id in ["a", "b", "c", "d"] {
        let id = GameId::new(id);
        assert_eq!(store.contains(&id).await.unwrap(), all.contains(&id));
    }
}

#[tokio::test]
async fn insertion_order_is_preserved() {
    let (_, store) = memory_store();
    for id in ["zelda", "link", "ganon"] {
        store.add(record(id)).await.unwrap();
    }
    store.remove(&GameId::new("link")).await.unwrap();
    store.add(record("link")).await.unwrap();

    let ids: Vec<_> = store.get_all().await.unwrap().ids();
    assert_eq!(
        ids,
        vec![GameId::new("zelda"), GameId::new("ganon"), GameId::new("link")]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_adds_of_one_id_store_a_single_record() {
    let (storage, store) = memory_store();

    let tasks: Vec<_> = (0..32)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.add(record("game-1")).await })
        })
        .collect();

    let mut added = 0;
    for task in tasks {
        if task.await.unwrap().unwrap() == AddOutcome::Added {
            added += 1;
        }
    }

    assert_eq!(added, 1);
    assert_eq!(store.get_all().await.unwrap().len(), 1);
    assert_eq!(storage.writes(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn interleaved_mutations_of_distinct_ids_lose_nothing() {
    let (_, store) = memory_store();

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let id = format!("game-{i}");
                store.add(record(&id)).await.unwrap();
                if i % 5 == 0 {
                    store.remove(&GameId::new(id)).await.unwrap();
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 40);
    for i in 0..50 {
        assert_eq!(all.contains(&GameId::new(format!("game-{i}"))), i % 5 != 0);
    }
}

#[tokio::test]
async fn legacy_duplicates_are_collapsed_and_rewritten() {
    let storage = Arc::new(MemoryStorage::new());
    storage.seed(
        FAVORITES_KEY,
        r#"[{"id":"game-1","name":"first"},{"id":"game-1","name":"second"}]"#,
    );
    let store = FavoritesStore::spawn(storage.clone());

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all.get(&GameId::new("game-1")).unwrap().name, "first");

    store.add(record("game-2")).await.unwrap();
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&storage.raw(FAVORITES_KEY).unwrap()).unwrap();
    let ids: Vec<_> = raw.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["game-1", "game-2"]);
}

#[tokio::test]
async fn favorites_survive_a_restart_on_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let store = FavoritesStore::spawn(Arc::new(FileStorage::new(&path)));
        store.add(named_record("game-1", "Ocarina of Time")).await.unwrap();
        store.add(named_record("game-2", "Majora's Mask")).await.unwrap();
    }

    let store = FavoritesStore::spawn(Arc::new(FileStorage::new(&path)));
    let all = store.get_all().await.unwrap();
    assert_eq!(all.ids(), vec![GameId::new("game-1"), GameId::new("game-2")]);
    assert_eq!(
        all.get(&GameId::new("game-2")).unwrap().name,
        "Majora's Mask"
    );
}
