use mindcheck_core::models::answer::Answer;
use mindcheck_core::models::category::Category;
use mindcheck_core::models::question::Question;
use mindcheck_core::models::session::Session;
use mindcheck_storage::catalog::QuestionCatalog;
use mindcheck_storage::error::StorageError;
use mindcheck_storage::memory::MemoryStore;
use mindcheck_storage::sessions::SessionStore;
use uuid::Uuid;

fn question(order: u32, is_active: bool) -> Question {
    let now = jiff::Timestamp::now();
    Question {
        id: Uuid::new_v4(),
        text: format!("question {order}"),
        category: Category::Stress,
        order,
        is_active,
        options: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn list_active_filters_inactive_and_sorts_by_order() {
    let store = MemoryStore::with_questions([
        question(2, true),
        question(0, true),
        question(1, false),
        question(1, true),
    ])
    .await;

    let active = store.list_active().await.unwrap();
    let orders: Vec<u32> = active.iter().map(|q| q.order).collect();
    assert_eq!(orders, [0, 1, 2]);
    assert!(active.iter().all(|q| q.is_active));
    assert_eq!(store.count_active().await.unwrap(), 3);
}

#[tokio::test]
async fn find_many_skips_unknown_ids() {
    let q = question(0, true);
    let store = MemoryStore::with_questions([q.clone()]).await;
    let found = store.find_many_by_id(&[q.id, Uuid::new_v4()]).await.unwrap();
    assert_eq!(found, vec![q]);
}

#[tokio::test]
async fn sessions_are_scoped_to_their_owner() {
    let store = MemoryStore::new();
    let session = Session::new("alice");
    store.create(&session).await.unwrap();

    assert!(store.find_by_id_for_user(session.id, "alice").await.unwrap().is_some());
    assert!(store.find_by_id_for_user(session.id, "mallory").await.unwrap().is_none());
    assert!(store.list_for_user("mallory", 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn stale_save_is_rejected() {
    let store = MemoryStore::new();
    let session = Session::new("alice");
    store.create(&session).await.unwrap();

    let first = store.find_by_id_for_user(session.id, "alice").await.unwrap().unwrap();
    let second = first.clone();

    let mut a = first.value;
    a.record_answer(Answer::new(Uuid::new_v4(), "not_at_all"));
    store.save(&a, &first.version).await.unwrap();

    let mut b = second.value;
    b.record_answer(Answer::new(Uuid::new_v4(), "several_days"));
    let err = store.save(&b, &second.version).await.unwrap_err();
    assert!(matches!(err, StorageError::PreconditionFailed { .. }));

    let stored = store.find_by_id_for_user(session.id, "alice").await.unwrap().unwrap();
    assert_eq!(stored.value.answers().len(), 1);
    assert_eq!(stored.value.answers()[0].option, "not_at_all");
}

#[tokio::test]
async fn history_is_newest_first_and_limited() {
    let store = MemoryStore::new();
    let mut ids = Vec::new();
    for _ in 0..3 {
        let session = Session::new("alice");
        ids.push(session.id);
        store.create(&session).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let listed = store.list_for_user("alice", 2).await.unwrap();
    let listed_ids: Vec<Uuid> = listed.iter().map(|s| s.id).collect();
    assert_eq!(listed_ids, [ids[2], ids[1]]);
}

#[tokio::test]
async fn shared_positions_list_in_a_stable_order() {
    let older = question(0, true);
    let mut newer = question(0, true);
    newer.created_at = older.created_at + jiff::SignedDuration::from_secs(1);
    let mut twin_a = question(1, true);
    let mut twin_b = question(1, true);
    twin_b.created_at = twin_a.created_at;
    if twin_b.id < twin_a.id {
        std::mem::swap(&mut twin_a, &mut twin_b);
    }

    let store = MemoryStore::with_questions([
        twin_b.clone(),
        newer.clone(),
        twin_a.clone(),
        older.clone(),
    ])
    .await;

    let expected = [older.id, newer.id, twin_a.id, twin_b.id];
    for i in 0..50 {
        store.upsert_question(question(10 + i, true)).await;
        let listed: Vec<Uuid> = store
            .list_active()
            .await
            .unwrap()
            .iter()
            .take(4)
            .map(|q| q.id)
            .collect();
        assert_eq!(listed, expected);
    }
}
